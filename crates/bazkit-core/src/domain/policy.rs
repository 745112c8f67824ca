//! Per-step error policy.
//!
//! Every subprocess-backed step declares whether its failure aborts the
//! command or is downgraded to a warning. Only the git bookkeeping of a new
//! skeleton is recoverable; everything else fails fast.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Abort the whole invocation.
    Fatal,
    /// Record a warning and carry on.
    Warn,
}

/// Steps that run external tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    InstallTool,
    Clone,
    WorkspaceInfo,
    QueryTarget,
    Build,
    ExternalGenerator,
    GitInit,
    GitCommit,
}

impl Step {
    pub const fn policy(self) -> ErrorPolicy {
        match self {
            Self::GitInit | Self::GitCommit => ErrorPolicy::Warn,
            Self::InstallTool
            | Self::Clone
            | Self::WorkspaceInfo
            | Self::QueryTarget
            | Self::Build
            | Self::ExternalGenerator => ErrorPolicy::Fatal,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InstallTool => "install-tool",
            Self::Clone => "clone",
            Self::WorkspaceInfo => "workspace-info",
            Self::QueryTarget => "query-target",
            Self::Build => "build",
            Self::ExternalGenerator => "external-generator",
            Self::GitInit => "git-init",
            Self::GitCommit => "git-commit",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_git_steps_are_recoverable() {
        let warn: Vec<_> = [
            Step::InstallTool,
            Step::Clone,
            Step::WorkspaceInfo,
            Step::QueryTarget,
            Step::Build,
            Step::ExternalGenerator,
            Step::GitInit,
            Step::GitCommit,
        ]
        .into_iter()
        .filter(|s| s.policy() == ErrorPolicy::Warn)
        .collect();
        assert_eq!(warn, vec![Step::GitInit, Step::GitCommit]);
    }
}
