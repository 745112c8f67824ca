//! Filesystem-based template overrides.
//!
//! A directory of templates can replace the built-in layout of any variant.
//!
//! # Directory layout expected
//!
//! ```text
//! templates/
//! ├── java-service/
//! │   ├── template.toml        ← manifest (required)
//! │   ├── build.gradle.kts
//! │   └── src/main/java/Main.java
//! └── cdk-app/
//!     ├── template.toml
//!     └── bin/__PROJECT_NAME__.ts
//! ```
//!
//! # `template.toml` format
//!
//! ```toml
//! [template]
//! kind       = "jvm"          # jvm | infra | mobile (aliases accepted)
//! variant    = "java"         # must belong to the kind
//! executable = ["gradlew"]    # optional
//! ```
//!
//! Variants without an override fall back to the built-in layouts.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{debug, info, instrument, warn};
use walkdir::WalkDir;

use bazkit_core::{
    application::ports::TemplateStore,
    domain::{DomainError, SkeletonKind, SkeletonLayout, SkeletonVariant, TemplateFile},
    error::BazkitResult,
};

use crate::builtin_templates;

const MANIFEST_FILE: &str = "template.toml";

// ── Manifest types ────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct TemplateManifest {
    template: TemplateSection,
}

#[derive(Debug, Deserialize)]
struct TemplateSection {
    kind: String,
    variant: String,
    #[serde(default)]
    executable: Vec<String>,
}

// ── Store ─────────────────────────────────────────────────────────────────────

/// Layouts loaded from a directory, layered over the built-in ones.
#[derive(Debug, Clone, Default)]
pub struct DirectoryTemplates {
    overrides: HashMap<SkeletonVariant, SkeletonLayout>,
}

impl DirectoryTemplates {
    /// Load every template directory directly below `templates_dir`.
    ///
    /// A missing or unreadable `templates_dir` is an error. Individual
    /// subdirectories that fail to load are skipped with a warning. When two
    /// subdirectories target the same variant, the later one in name order
    /// wins.
    #[instrument(skip(templates_dir), fields(dir = %templates_dir.display()))]
    pub fn load(templates_dir: &Path) -> Result<Self, DomainError> {
        if !templates_dir.is_dir() {
            return Err(DomainError::InvalidTemplate(format!(
                "templates directory not found: {}",
                templates_dir.display()
            )));
        }

        let mut dirs: Vec<PathBuf> = fs::read_dir(templates_dir)
            .map_err(|e| {
                DomainError::InvalidTemplate(format!(
                    "failed to read templates directory '{}': {e}",
                    templates_dir.display()
                ))
            })?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_dir())
            .collect();
        dirs.sort();

        let mut overrides = HashMap::new();
        for dir in dirs {
            match load_template_from_dir(&dir) {
                Ok(layout) => {
                    debug!(dir = %dir.display(), variant = %layout.variant, "loaded template");
                    overrides.insert(layout.variant, layout);
                }
                Err(e) => {
                    warn!(
                        dir   = %dir.display(),
                        error = %e,
                        "skipping template directory due to load error"
                    );
                }
            }
        }

        info!(count = overrides.len(), "Loaded template overrides");
        Ok(Self { overrides })
    }
}

impl TemplateStore for DirectoryTemplates {
    fn layout(&self, variant: SkeletonVariant) -> BazkitResult<SkeletonLayout> {
        Ok(self
            .overrides
            .get(&variant)
            .cloned()
            .unwrap_or_else(|| builtin_templates::layout(variant)))
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

fn load_template_from_dir(dir: &Path) -> Result<SkeletonLayout, DomainError> {
    let manifest_path = dir.join(MANIFEST_FILE);
    let raw = fs::read_to_string(&manifest_path).map_err(|e| {
        DomainError::InvalidTemplate(format!(
            "failed to read '{}': {e}",
            manifest_path.display()
        ))
    })?;
    let manifest: TemplateManifest = toml::from_str(&raw).map_err(|e| {
        DomainError::InvalidTemplate(format!(
            "failed to parse '{}': {e}",
            manifest_path.display()
        ))
    })?;

    let kind: SkeletonKind = manifest.template.kind.parse()?;
    let variant = kind.variant(Some(manifest.template.variant.as_str()))?;

    let mut layout = SkeletonLayout::new(variant);
    for entry in WalkDir::new(dir).min_depth(1).sort_by_file_name() {
        let entry =
            entry.map_err(|e| DomainError::InvalidTemplate(format!("directory walk error: {e}")))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry.path().strip_prefix(dir).map_err(|_| {
            DomainError::InvalidTemplate(format!(
                "failed to relativise '{}' against '{}'",
                entry.path().display(),
                dir.display()
            ))
        })?;
        if rel == Path::new(MANIFEST_FILE) {
            continue;
        }

        let path = normalize_path(&rel.to_string_lossy());
        let content = fs::read_to_string(entry.path()).map_err(|e| {
            DomainError::InvalidTemplate(format!("failed to read file '{path}': {e}"))
        })?;
        let mut file = TemplateFile::new(path.clone(), content);
        if manifest.template.executable.iter().any(|p| normalize_path(p) == path) {
            file = file.executable();
        }
        layout = layout.with_file(file);
    }

    layout.validate()?;
    Ok(layout)
}

fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let full = root.join(rel);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full, content).unwrap();
    }

    #[test]
    fn missing_dir_is_an_error() {
        assert!(DirectoryTemplates::load(Path::new("/absolutely/does/not/exist")).is_err());
    }

    #[test]
    fn override_replaces_builtin_for_its_variant_only() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "java-svc/template.toml",
            "[template]\nkind = \"jvm\"\nvariant = \"java\"\nexecutable = [\"gradlew\"]\n",
        );
        write(temp.path(), "java-svc/gradlew", "#!/bin/sh\n");
        write(temp.path(), "java-svc/src/Main.java", "class Main {}\n");

        let store = DirectoryTemplates::load(temp.path()).unwrap();
        let java = store.layout(SkeletonVariant::Java).unwrap();
        let paths: Vec<&str> = java.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["gradlew", "src/Main.java"]);
        assert!(java.files[0].executable);
        assert!(!java.files[1].executable);

        let kotlin = store.layout(SkeletonVariant::Kotlin).unwrap();
        assert_eq!(kotlin, builtin_templates::layout(SkeletonVariant::Kotlin));
    }

    #[test]
    fn broken_template_is_skipped() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "bad/template.toml", "not toml [");
        write(
            temp.path(),
            "mismatch/template.toml",
            "[template]\nkind = \"infra\"\nvariant = \"java\"\n",
        );
        write(temp.path(), "mismatch/a.txt", "a");

        let store = DirectoryTemplates::load(temp.path()).unwrap();
        assert!(store.overrides.is_empty());
    }
}
