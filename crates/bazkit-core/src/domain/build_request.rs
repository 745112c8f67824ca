//! What `workspace build` was asked to build.

use std::path::{Component, Path};

use serde::Serialize;

use crate::domain::error::DomainError;

/// The three mutually exclusive build modes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "mode", content = "targets")]
pub enum BuildRequest {
    /// Build the package in the current directory.
    CurrentPackage,
    /// Build every target in the workspace.
    All,
    /// Build the named targets, after confirming each one exists.
    Targets(Vec<String>),
}

impl BuildRequest {
    pub fn from_args(all: bool, names: Vec<String>) -> Result<Self, DomainError> {
        match (all, names.is_empty()) {
            (true, false) => Err(DomainError::ConflictingBuildRequest),
            (true, true) => Ok(Self::All),
            (false, true) => Ok(Self::CurrentPackage),
            (false, false) => {
                for name in &names {
                    validate_target_name(name)?;
                }
                Ok(Self::Targets(names))
            }
        }
    }
}

/// Pattern matching every target in the workspace.
pub const ALL_TARGETS: &str = "//...";

/// Label for all targets of the package at `relative` (relative to the
/// workspace root; empty for the root package).
pub fn package_label(relative: &Path) -> String {
    let segments: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    format!("//{}:all", segments.join("/"))
}

/// Query expression that resolves a bare target name to its labels.
///
/// `attr` matches a regular expression, so the name is escaped to match
/// only itself.
pub fn target_query(name: &str) -> String {
    format!("attr(name, \"^{}$\", {ALL_TARGETS})", escape_regex(name))
}

fn escape_regex(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for c in name.chars() {
        if matches!(
            c,
            '.' | '|' | '*' | '+' | '?' | '[' | ']' | '{' | '}' | '(' | ')' | '^' | '$' | '\\'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn validate_target_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidBuildTarget {
        name: name.to_string(),
        reason: reason.to_string(),
    };
    if name.is_empty() {
        return Err(invalid("name is empty"));
    }
    if name.starts_with('-') {
        return Err(invalid("looks like a flag; use -all to build everything"));
    }
    if name
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '\\' | '$' | '^' | '(' | ')' | ','))
    {
        return Err(invalid("contains characters that are not valid in a rule name"));
    }
    Ok(())
}
