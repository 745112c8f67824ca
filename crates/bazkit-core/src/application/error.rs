//! Application layer errors.
//!
//! These errors represent failures in orchestration, not validation.
//! Validation errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The current directory is not a workspace root.
    #[error("No WORKSPACE file in {path}")]
    WorkspaceNotFound { path: PathBuf },

    /// Bazel does not recognise the directory as part of a workspace.
    #[error("{path} is not inside a Bazel workspace")]
    NotInWorkspace { path: PathBuf },

    /// No build descriptor where one is required.
    #[error("No build descriptor (BUILD.bazel or BUILD) in {path}")]
    NoBuildDescriptor { path: PathBuf },

    /// A named build target matched nothing.
    #[error("No target named '{name}' in the workspace")]
    TargetNotFound { name: String },

    /// A required external tool is not on PATH.
    #[error("Required tool '{tool}' is not available: {reason}")]
    ToolUnavailable { tool: String, reason: String },

    /// Automatic installation is not possible on this host.
    #[error("Cannot install '{tool}' automatically on {platform}")]
    UnsupportedPlatform { tool: String, platform: String },

    /// An external command ran and failed.
    #[error("Command `{command}` failed with {status}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// An external command could not be started.
    #[error("Could not run `{command}`: {reason}")]
    CommandSpawn { command: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Skeleton target directory already exists.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// Lock on an in-memory adapter was poisoned.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::WorkspaceNotFound { path } => vec![
                format!("Run this command from a workspace root (looked in {})", path.display()),
                "Create one with: bazkit workspace create <path>".into(),
            ],
            Self::NotInWorkspace { .. } => vec![
                "Change into a directory below a WORKSPACE file".into(),
                "Create one with: bazkit workspace create <path>".into(),
            ],
            Self::NoBuildDescriptor { .. } => vec![
                "Run from a package directory that has a BUILD.bazel file".into(),
                "Or build everything with: bazkit workspace build -all".into(),
                "Or name targets: bazkit workspace build <name>...".into(),
            ],
            Self::TargetNotFound { name } => vec![
                format!("List candidates with: bazel query 'attr(name, \"{name}\", //...)'"),
                "Target names are rule names, not labels".into(),
            ],
            Self::ToolUnavailable { tool, .. } => vec![
                format!("Install '{tool}' and make sure it is on your PATH"),
                format!("Or point bazkit at it: BAZKIT_TOOLS__{}=/path/to/{tool}", tool.to_ascii_uppercase()),
            ],
            Self::UnsupportedPlatform { tool, .. } => vec![
                format!("Install '{tool}' manually, then re-run the command"),
                "See https://bazel.build/install".into(),
            ],
            Self::CommandFailed { stderr, .. } if !stderr.trim().is_empty() => vec![
                "Command output:".into(),
                stderr.trim().lines().map(|l| format!("  {l}")).collect::<Vec<_>>().join("\n"),
            ],
            Self::CommandFailed { .. } => vec![
                "Check the command output above for details".into(),
            ],
            Self::CommandSpawn { .. } => vec![
                "Ensure the command is installed and in your PATH".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("The directory '{}' already exists", path.display()),
                "Choose a different project name".into(),
                "Existing skeletons are never merged or updated".into(),
            ],
            Self::LockPoisoned => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::WorkspaceNotFound { .. }
            | Self::NotInWorkspace { .. }
            | Self::NoBuildDescriptor { .. }
            | Self::TargetNotFound { .. } => ErrorCategory::NotFound,
            Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::ToolUnavailable { .. } | Self::UnsupportedPlatform { .. } => {
                ErrorCategory::Environment
            }
            Self::CommandFailed { .. } | Self::CommandSpawn { .. } => ErrorCategory::External,
            Self::FilesystemError { .. } | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
