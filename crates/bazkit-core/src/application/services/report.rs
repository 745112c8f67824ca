//! Result DTOs returned by the services and rendered by the CLI.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::{BuildRequest, DependencyKind, LocalRepository, SkeletonKind, SkeletonVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOutcome {
    Created,
    /// The path already existed and was left untouched.
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

/// Preflight result for one external tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolReport {
    pub tool: String,
    pub path: PathBuf,
    /// True when this run installed it.
    pub installed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateReport {
    pub root: PathBuf,
    pub tool: ToolReport,
    pub files: Vec<FileReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "status")]
pub enum DescriptorOutcome {
    /// The dependency already had a descriptor.
    Existing { file: String },
    /// A stub was written for the detected build system.
    Generated { kind: DependencyKind },
    /// No known build system; nothing written.
    Unrecognized,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyReport {
    pub dependency: String,
    pub directory: PathBuf,
    /// False when the directory already existed and cloning was skipped.
    pub cloned: bool,
    pub reference: LocalRepository,
    pub descriptor: DescriptorOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddReport {
    pub workspace: PathBuf,
    pub dependencies: Vec<DependencyReport>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    pub workspace_root: PathBuf,
    pub request: BuildRequest,
    /// Patterns or labels handed to `bazel build`, in invocation order.
    pub built: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkeletonReport {
    pub root: PathBuf,
    pub kind: SkeletonKind,
    pub variant: SkeletonVariant,
    pub files: Vec<FileReport>,
    pub committed: bool,
    pub warnings: Vec<String>,
}

impl SkeletonReport {
    pub fn created_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.outcome == FileOutcome::Created)
            .count()
    }
}
