//! Running subprocess-backed steps under their error policy.

use tracing::{debug, warn};

use crate::application::ApplicationError;
use crate::application::ports::{CommandOutput, CommandSpec, ProcessRunner};
use crate::domain::{ErrorPolicy, Step};
use crate::error::BazkitResult;

/// Run `command` and turn a non-zero exit into `CommandFailed`.
pub(crate) fn run_checked(
    runner: &dyn ProcessRunner,
    step: Step,
    command: &CommandSpec,
) -> BazkitResult<CommandOutput> {
    debug!(%step, command = %command, "Running");
    let output = runner.run(command)?;
    if output.success {
        Ok(output)
    } else {
        Err(ApplicationError::CommandFailed {
            command: command.to_string(),
            status: output.status_text(),
            stderr: output.stderr,
        }
        .into())
    }
}

/// Apply the step's policy to a result. Fatal steps propagate; warn steps
/// log, record the message in `warnings` and yield `None`.
pub(crate) fn apply_policy<T>(
    step: Step,
    result: BazkitResult<T>,
    warnings: &mut Vec<String>,
) -> BazkitResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) => match step.policy() {
            ErrorPolicy::Fatal => Err(e),
            ErrorPolicy::Warn => {
                warn!(%step, error = %e, "Step failed, continuing");
                warnings.push(format!("{step}: {e}"));
                Ok(None)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::MockProcessRunner;

    #[test]
    fn non_zero_exit_becomes_command_failed() {
        let mut runner = MockProcessRunner::new();
        runner
            .expect_run()
            .returning(|_| Ok(CommandOutput::failed(2, "boom")));

        let err = run_checked(&runner, Step::Build, &CommandSpec::new("bazel").arg("build"))
            .unwrap_err();
        assert!(err.to_string().contains("bazel build"));
        assert!(err.to_string().contains("exit status 2"));
    }

    #[test]
    fn warn_steps_are_downgraded() {
        let mut warnings = Vec::new();
        let failed: BazkitResult<()> = Err(ApplicationError::LockPoisoned.into());

        let outcome = apply_policy(Step::GitCommit, failed, &mut warnings).unwrap();
        assert!(outcome.is_none());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("git-commit:"));
    }

    #[test]
    fn fatal_steps_propagate() {
        let mut warnings = Vec::new();
        let failed: BazkitResult<()> = Err(ApplicationError::LockPoisoned.into());

        assert!(apply_policy(Step::Clone, failed, &mut warnings).is_err());
        assert!(warnings.is_empty());
    }
}
