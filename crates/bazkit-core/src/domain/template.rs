//! Skeleton layouts and placeholder substitution.
//!
//! Substitution is a plain global text replace of each placeholder token.
//! There is no escaping and no notion of syntax: a project name that itself
//! contains a token (or text that merely looks like one) is substituted
//! literally, and tokens inside generated code are replaced wherever they
//! appear.

use std::collections::HashSet;

use crate::domain::{
    error::DomainError,
    org_config::OrgConfig,
    skeleton::{ProjectName, SkeletonVariant},
};

/// Replaced by the project name.
pub const PROJECT_NAME_TOKEN: &str = "__PROJECT_NAME__";
/// Replaced by the dotted JVM package (`com.<org>.<name>`).
pub const PACKAGE_TOKEN: &str = "__PACKAGE__";
/// Replaced by the JVM package as a path (`com/<org>/<name>`).
pub const PACKAGE_PATH_TOKEN: &str = "__PACKAGE_PATH__";
/// Replaced by the organization, or `example` when none is recorded.
pub const ORG_TOKEN: &str = "__ORG__";

const FALLBACK_ORG: &str = "example";

/// One file of a layout, before substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Relative path; may contain placeholder tokens.
    pub path: String,
    pub content: String,
    pub executable: bool,
}

impl TemplateFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            executable: false,
        }
    }

    pub fn executable(mut self) -> Self {
        self.executable = true;
        self
    }
}

/// The files generated for one skeleton variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkeletonLayout {
    pub variant: SkeletonVariant,
    pub files: Vec<TemplateFile>,
}

impl SkeletonLayout {
    pub fn new(variant: SkeletonVariant) -> Self {
        Self {
            variant,
            files: Vec::new(),
        }
    }

    pub fn with_file(mut self, file: TemplateFile) -> Self {
        self.files.push(file);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::InvalidTemplate(format!(
                "layout for '{}' has no files",
                self.variant
            )));
        }
        let mut seen = HashSet::new();
        for file in &self.files {
            if file.path.starts_with('/') || file.path.starts_with('\\') {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: file.path.clone(),
                });
            }
            if file.path.split(['/', '\\']).any(|segment| segment == "..") {
                return Err(DomainError::InvalidTemplate(format!(
                    "path '{}' escapes the project directory",
                    file.path
                )));
            }
            if !seen.insert(file.path.as_str()) {
                return Err(DomainError::DuplicatePath {
                    path: file.path.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Values substituted into a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    variables: Vec<(&'static str, String)>,
}

impl RenderContext {
    pub fn new(name: &ProjectName, org: Option<&OrgConfig>) -> Self {
        let org_name = org.map_or(FALLBACK_ORG, OrgConfig::organization);
        let org_segment: String = org_name
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let org_segment = if org_segment.is_empty() {
            FALLBACK_ORG.to_string()
        } else {
            org_segment
        };
        let package = format!("com.{org_segment}.{}", name.package_segment());

        Self {
            variables: vec![
                // Longest tokens first so `__PACKAGE__` never eats part of
                // `__PACKAGE_PATH__`.
                (PACKAGE_PATH_TOKEN, package.replace('.', "/")),
                (PACKAGE_TOKEN, package),
                (PROJECT_NAME_TOKEN, name.as_str().to_string()),
                (ORG_TOKEN, org_name.to_string()),
            ],
        }
    }

    /// Replace every occurrence of every token.
    pub fn render(&self, text: &str) -> String {
        self.variables
            .iter()
            .fold(text.to_string(), |acc, (token, value)| {
                acc.replace(token, value)
            })
    }
}
