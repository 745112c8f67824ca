//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `bazkit-adapters` crate provides implementations.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{ProjectStructure, RenderContext, SkeletonLayout, SkeletonVariant};
use crate::error::BazkitResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `bazkit_adapters::filesystem::LocalFilesystem` (production)
/// - `bazkit_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> BazkitResult<()>;

    /// Write content to a file, replacing it.
    fn write_file(&self, path: &Path, content: &str) -> BazkitResult<()>;

    /// Read a whole file as UTF-8.
    fn read_file(&self, path: &Path) -> BazkitResult<String>;

    /// Mark a file executable (no-op where unsupported).
    fn set_executable(&self, path: &Path) -> BazkitResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Resolve symlinks and relative components.
    fn canonicalize(&self, path: &Path) -> BazkitResult<PathBuf>;
}

/// A subprocess invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
    /// Capture stdout/stderr instead of streaming them to the terminal.
    pub capture: bool,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            capture: false,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn captured(mut self) -> Self {
        self.capture = true;
        self
    }

    /// True when the program is `program` and the arguments start with
    /// `prefix`.
    pub fn matches(&self, program: &str, prefix: &[&str]) -> bool {
        self.program == program
            && self.args.len() >= prefix.len()
            && self.args.iter().zip(prefix).all(|(a, p)| a == p)
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " '{arg}'")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Outcome of a finished subprocess.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    pub success: bool,
    pub code: Option<i32>,
    /// Empty unless the command was captured.
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn status_text(&self) -> String {
        match self.code {
            Some(code) => format!("exit status {code}"),
            None => "termination by signal".into(),
        }
    }
}

/// Port for running external tools.
///
/// Implemented by:
/// - `bazkit_adapters::process::SystemRunner` (production)
/// - `bazkit_adapters::process::RecordingRunner` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait ProcessRunner: Send + Sync {
    /// Run to completion. A non-zero exit is reported in the output, not as
    /// an error; `Err` means the process could not be started.
    fn run(&self, command: &CommandSpec) -> BazkitResult<CommandOutput>;
}

/// Port for finding executables on PATH.
#[cfg_attr(test, mockall::automock)]
pub trait ToolLocator: Send + Sync {
    fn locate(&self, tool: &str) -> Option<PathBuf>;
}

/// Port for skeleton layout lookup.
///
/// Implemented by:
/// - `bazkit_adapters::template_store::BuiltinTemplates` (compiled-in)
/// - `bazkit_adapters::template_loader::DirectoryTemplates` (user override)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    fn layout(&self, variant: SkeletonVariant) -> BazkitResult<SkeletonLayout>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `bazkit_adapters::renderer::SimpleRenderer` (placeholder substitution)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render a layout into a project structure rooted at `output_root`.
    fn render(
        &self,
        layout: &SkeletonLayout,
        context: &RenderContext,
        output_root: &Path,
    ) -> BazkitResult<ProjectStructure>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_quotes_arguments_with_spaces() {
        let cmd = CommandSpec::new("bazel")
            .arg("query")
            .arg("attr(name, \"^x$\", //...)");
        assert_eq!(cmd.to_string(), "bazel query 'attr(name, \"^x$\", //...)'");
    }

    #[test]
    fn prefix_matching() {
        let cmd = CommandSpec::new("git").args(["clone", "url", "dir"]);
        assert!(cmd.matches("git", &["clone"]));
        assert!(cmd.matches("git", &[]));
        assert!(!cmd.matches("git", &["init"]));
        assert!(!cmd.matches("bazel", &["clone"]));
    }
}
