//! Skip-if-exists file materialization.
//!
//! Nothing bazkit generates ever overwrites an existing file: a path that is
//! already present is reported as skipped and left untouched.

use std::path::Path;

use tracing::{debug, info};

use crate::application::ports::Filesystem;
use crate::application::services::report::{FileOutcome, FileReport};
use crate::domain::ProjectStructure;
use crate::error::BazkitResult;

pub(crate) struct Materializer<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> Materializer<'a> {
    pub(crate) fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Write `path` unless it exists. `content` is only evaluated when the
    /// file is actually written.
    pub(crate) fn ensure_file(
        &self,
        path: &Path,
        content: impl FnOnce() -> BazkitResult<String>,
    ) -> BazkitResult<FileReport> {
        if self.filesystem.exists(path) {
            info!(path = %path.display(), "Already exists, skipping");
            return Ok(FileReport {
                path: path.to_path_buf(),
                outcome: FileOutcome::Skipped,
            });
        }

        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(path, &content()?)?;
        debug!(path = %path.display(), "Created");

        Ok(FileReport {
            path: path.to_path_buf(),
            outcome: FileOutcome::Created,
        })
    }

    /// Write every file of the structure below its root.
    pub(crate) fn materialize(&self, structure: &ProjectStructure) -> BazkitResult<Vec<FileReport>> {
        self.filesystem.create_dir_all(structure.root())?;

        let mut reports = Vec::with_capacity(structure.file_count());
        for file in structure.files() {
            let path = structure.root().join(&file.path);
            let report = self.ensure_file(&path, || Ok(file.content.clone()))?;
            if file.executable && report.outcome == FileOutcome::Created {
                self.filesystem.set_executable(&path)?;
            }
            reports.push(report);
        }
        Ok(reports)
    }
}
