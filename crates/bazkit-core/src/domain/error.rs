// ============================================================================
// domain/error.rs - VALIDATION AND PARSE FAILURES
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports keep copies of downgraded failures)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid dependency identifier '{input}': {reason}")]
    InvalidDependency { input: String, reason: String },

    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Unknown skeleton kind '{0}'")]
    UnknownSkeletonKind(String),

    #[error("Variant '{variant}' is not available for {kind} skeletons")]
    InvalidVariant {
        kind: String,
        variant: String,
        available: Vec<&'static str>,
    },

    #[error("Invalid build target '{name}': {reason}")]
    InvalidBuildTarget { name: String, reason: String },

    #[error("Cannot combine --all with named targets")]
    ConflictingBuildRequest,

    // ========================================================================
    // Persisted-file Errors
    // ========================================================================
    #[error("Malformed workspace manifest: {0}")]
    MalformedManifest(String),

    #[error("Malformed config record: {0}")]
    MalformedConfig(String),

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Duplicate path in generated layout: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidDependency { .. } => vec![
                "Dependencies are given as <owner>/<repo>, e.g. -p acme/billing".into(),
                "A bare <repo> uses the organization stored in CONFIG".into(),
            ],
            Self::InvalidProjectName { .. } => vec![
                "Use ASCII letters, digits, '-' and '_'".into(),
                "Do not start the name with '.' or '-'".into(),
                "Examples: payments, order-service, infra_core".into(),
            ],
            Self::UnknownSkeletonKind(_) => vec![
                "Supported kinds:".into(),
                "  • jvm    - Gradle project (Kotlin or Java)".into(),
                "  • infra  - AWS CDK TypeScript project".into(),
                "  • mobile - React Native app (Expo or bare)".into(),
            ],
            Self::InvalidVariant {
                kind, available, ..
            } => {
                let mut out = vec![format!("Variants for {kind}:")];
                out.extend(available.iter().map(|v| format!("  • {v}")));
                out
            }
            Self::InvalidBuildTarget { .. } => vec![
                "Target names are plain rule names, e.g. `bazkit workspace build server`".into(),
            ],
            Self::ConflictingBuildRequest => vec![
                "Use either `workspace build -all` or a list of target names".into(),
            ],
            Self::MalformedManifest(_) => vec![
                "Inspect the WORKSPACE file for an unterminated local_repository block".into(),
            ],
            Self::MalformedConfig(_) => vec![
                "CONFIG must contain a single line of the form ORG=<organization>".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MalformedManifest(_) | Self::MalformedConfig(_) => ErrorCategory::Corrupted,
            Self::InvalidTemplate(_)
            | Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Internal,
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Corrupted,
    Internal,
}
