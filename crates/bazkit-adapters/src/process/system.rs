//! Runs commands with `std::process`.

use std::process::{Command, Stdio};

use tracing::{debug, instrument};

use bazkit_core::{
    application::{
        ApplicationError,
        ports::{CommandOutput, CommandSpec, ProcessRunner},
    },
    error::BazkitResult,
};

/// Production runner. Uncaptured commands inherit the terminal so the user
/// sees Bazel, git and npx output live.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemRunner {
    #[instrument(skip_all, fields(command = %spec))]
    fn run(&self, spec: &CommandSpec) -> BazkitResult<CommandOutput> {
        let mut command = Command::new(&spec.program);
        command.args(&spec.args).stdin(Stdio::inherit());
        if let Some(dir) = &spec.cwd {
            command.current_dir(dir);
        }

        let spawn_error = |e: std::io::Error| ApplicationError::CommandSpawn {
            command: spec.to_string(),
            reason: e.to_string(),
        };

        let output = if spec.capture {
            let out = command.output().map_err(spawn_error)?;
            CommandOutput {
                success: out.status.success(),
                code: out.status.code(),
                stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
            }
        } else {
            let status = command
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .status()
                .map_err(spawn_error)?;
            CommandOutput {
                success: status.success(),
                code: status.code(),
                ..CommandOutput::default()
            }
        };

        debug!(success = output.success, code = ?output.code, "Finished");
        Ok(output)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use bazkit_core::error::BazkitError;

    #[test]
    fn captures_stdout() {
        let out = SystemRunner::new()
            .run(&CommandSpec::new("sh").args(["-c", "echo /w"]).captured())
            .unwrap();
        assert!(out.success);
        assert_eq!(out.stdout.trim(), "/w");
    }

    #[test]
    fn non_zero_exit_is_not_an_error() {
        let out = SystemRunner::new()
            .run(&CommandSpec::new("sh").args(["-c", "exit 3"]).captured())
            .unwrap();
        assert!(!out.success);
        assert_eq!(out.code, Some(3));
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let err = SystemRunner::new()
            .run(&CommandSpec::new("/nonexistent/bazkit-test-tool"))
            .unwrap_err();
        assert!(matches!(
            err,
            BazkitError::Application(ApplicationError::CommandSpawn { .. })
        ));
    }
}
