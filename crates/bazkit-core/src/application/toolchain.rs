//! External tool settings handed to the services by the driving adapter.

/// Names of the external binaries plus the knobs that shape how they are
/// called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    pub bazel: String,
    pub git: String,
    pub npx: String,
    /// Base URL dependencies are cloned from.
    pub git_host: String,
    /// Message of the single commit in a new skeleton.
    pub commit_message: String,
    /// Try a package-manager install when Bazel is missing.
    pub auto_install: bool,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            bazel: "bazel".into(),
            git: "git".into(),
            npx: "npx".into(),
            git_host: "https://github.com".into(),
            commit_message: "Initial commit".into(),
            auto_install: true,
        }
    }
}
