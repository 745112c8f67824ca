//! Errors surfaced by the `bazkit` binary and how they are shown.
//!
//! Every error exits with status 1. What differs is the log severity and the
//! hints printed under the message.

use std::error::Error as _;
use std::io;

use owo_colors::OwoColorize;
use thiserror::Error;

use bazkit_core::error::{BazkitError, ErrorCategory};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Core(#[from] BazkitError),

    /// Settings could not be loaded or written.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Local I/O outside the services (cwd lookup, terminal, config file).
    #[error("Could not {action}: {cause}")]
    Io { action: String, cause: io::Error },

    /// A report could not be encoded for `--output-format json`.
    #[error("Failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<io::Error> for CliError {
    fn from(cause: io::Error) -> Self {
        Self::Io {
            action: "write output".into(),
            cause,
        }
    }
}

impl CliError {
    pub fn io(action: impl Into<String>) -> impl FnOnce(io::Error) -> Self {
        let action = action.into();
        move |cause| Self::Io { action, cause }
    }

    pub fn hints(&self) -> Vec<String> {
        match self {
            Self::Core(e) => e.suggestions(),
            Self::Config { .. } => vec![
                "Check the file printed by 'bazkit config path'".into(),
                "Use 'bazkit config init --force' to restore the defaults".into(),
            ],
            Self::Io { .. } => vec!["Check permissions on the current directory".into()],
            Self::Encode(_) => vec!["Retry with --output-format plain".into()],
        }
    }

    /// Mistakes the user can fix by changing the invocation or the files on
    /// disk, as opposed to failing tools or bugs.
    pub fn is_user_error(&self) -> bool {
        match self {
            Self::Core(e) => matches!(
                e.category(),
                ErrorCategory::Validation | ErrorCategory::NotFound | ErrorCategory::Corrupted
            ),
            Self::Config { .. } => true,
            Self::Io { .. } | Self::Encode(_) => false,
        }
    }

    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Text for stderr. `verbose` adds the cause chain and drops the
    /// "-v" reminder.
    pub fn render(&self, verbose: bool, colors: bool) -> String {
        let (error_label, hint_label) = if colors {
            (
                "error:".red().bold().to_string(),
                "hint:".yellow().bold().to_string(),
            )
        } else {
            ("error:".to_string(), "hint:".to_string())
        };

        let mut out = format!("{error_label} {self}\n");
        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                out.push_str(&format!("  caused by: {err}\n"));
                cause = err.source();
            }
        }
        for hint in self.hints() {
            let mut lines = hint.lines();
            if let Some(first) = lines.next() {
                out.push_str(&format!("{hint_label} {first}\n"));
            }
            for line in lines {
                out.push_str(&format!("      {line}\n"));
            }
        }
        if !verbose && self.source().is_some() {
            out.push_str("Use -v / --verbose for more details.\n");
        }
        out
    }

    pub fn log(&self) {
        if self.is_user_error() {
            tracing::warn!(error = %self, "Command rejected");
        } else {
            tracing::error!(error = %self, "Command failed");
        }
        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {source}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use bazkit_core::application::ApplicationError;
    use bazkit_core::domain::DomainError;

    fn no_descriptor() -> CliError {
        CliError::Core(
            ApplicationError::NoBuildDescriptor {
                path: PathBuf::from("/w/pkg"),
            }
            .into(),
        )
    }

    fn config_error() -> CliError {
        CliError::Config {
            message: "could not load settings".into(),
            source: Some(Box::new(io::Error::other("bazkit.toml: expected `=`"))),
        }
    }

    #[test]
    fn every_error_exits_with_one() {
        let errors = [
            no_descriptor(),
            CliError::Core(DomainError::UnknownSkeletonKind("python".into()).into()),
            config_error(),
            CliError::io("read the current directory")(io::Error::other("gone")),
        ];
        assert!(errors.iter().all(|e| e.exit_code() == 1));
    }

    #[test]
    fn user_errors_are_told_apart_from_failures() {
        assert!(no_descriptor().is_user_error());
        let failed = CliError::Core(
            ApplicationError::CommandFailed {
                command: "bazel build //...".into(),
                status: "exit status: 1".into(),
                stderr: String::new(),
            }
            .into(),
        );
        assert!(!failed.is_user_error());
    }

    #[test]
    fn plain_render_lists_hints() {
        let s = no_descriptor().render(false, false);
        assert!(s.starts_with("error: No build descriptor"));
        assert!(s.contains("hint: Or build everything with: bazkit workspace build -all"));
        assert!(!s.contains('\u{1b}'));
    }

    #[test]
    fn verbose_render_shows_causes_without_reminder() {
        let quiet = config_error().render(false, false);
        assert!(quiet.contains("--verbose"));
        assert!(!quiet.contains("caused by"));

        let verbose = config_error().render(true, false);
        assert!(verbose.contains("caused by: bazkit.toml: expected `=`"));
        assert!(!verbose.contains("--verbose"));
    }

    #[test]
    fn io_errors_name_the_action() {
        let err = CliError::io("read the current directory")(io::Error::other("gone"));
        assert_eq!(err.to_string(), "Could not read the current directory: gone");
    }

    #[test]
    fn multi_line_hints_are_indented() {
        let err = CliError::Core(
            ApplicationError::CommandFailed {
                command: "git clone x".into(),
                status: "exit status: 128".into(),
                stderr: "fatal: one\nfatal: two\n".into(),
            }
            .into(),
        );
        let s = err.render(false, false);
        assert!(s.contains("hint: Command output:\n"));
        assert!(s.contains("      fatal: two\n"));
    }
}
