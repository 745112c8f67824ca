//! Unified error handling for bazkit core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for bazkit core operations.
#[derive(Debug, Error, Clone)]
pub enum BazkitError {
    /// Errors from the domain layer (validation, malformed marker files).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl BazkitError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Corrupted => ErrorCategory::Corrupted,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Corrupted,
    Environment,
    External,
    Internal,
}

/// Convenient result type alias.
pub type BazkitResult<T> = Result<T, BazkitError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn domain_errors_keep_their_message() {
        let err: BazkitError = DomainError::UnknownSkeletonKind("python".into()).into();
        assert_eq!(err.to_string(), "Unknown skeleton kind 'python'");
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn application_category_passes_through() {
        let err: BazkitError = ApplicationError::NoBuildDescriptor {
            path: PathBuf::from("/w/pkg"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.suggestions().iter().any(|s| s.contains("-all")));
    }

    #[test]
    fn failed_command_surfaces_stderr() {
        let err: BazkitError = ApplicationError::CommandFailed {
            command: "git clone x".into(),
            status: "exit status: 128".into(),
            stderr: "fatal: repository not found\n".into(),
        }
        .into();
        assert!(err
            .suggestions()
            .iter()
            .any(|s| s.contains("repository not found")));
    }
}
