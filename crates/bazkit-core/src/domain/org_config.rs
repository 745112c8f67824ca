//! The one-line `CONFIG` record stored at the workspace root.

use serde::Serialize;

use crate::domain::error::DomainError;

/// File holding the organization record.
pub const CONFIG_FILE: &str = "CONFIG";

const ORG_KEY: &str = "ORG";

/// Organization the workspace belongs to.
///
/// Written once by `workspace create`, never updated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrgConfig {
    organization: String,
}

impl OrgConfig {
    pub fn new(organization: impl Into<String>) -> Result<Self, DomainError> {
        let organization = organization.into();
        let trimmed = organization.trim();
        if trimmed.is_empty() {
            return Err(DomainError::MalformedConfig(
                "organization cannot be empty".into(),
            ));
        }
        if trimmed.contains(|c: char| c.is_whitespace() || c == '/' || c == '=') {
            return Err(DomainError::MalformedConfig(format!(
                "organization '{trimmed}' may not contain whitespace, '/' or '='"
            )));
        }
        Ok(Self {
            organization: trimmed.to_string(),
        })
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Parse the record. Blank lines and `#` comments are ignored; every
    /// other line must be the single `ORG=<name>` entry.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let mut found = None;
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let value = match line.split_once('=') {
                Some((key, value)) if key.trim() == ORG_KEY => value,
                _ => {
                    return Err(DomainError::MalformedConfig(format!(
                        "unexpected line '{line}', only {ORG_KEY}=<name> is allowed"
                    )));
                }
            };
            if found.is_some() {
                return Err(DomainError::MalformedConfig(format!(
                    "{ORG_KEY}= appears more than once"
                )));
            }
            found = Some(Self::new(value)?);
        }
        found.ok_or_else(|| DomainError::MalformedConfig(format!("no {ORG_KEY}= entry found")))
    }

    pub fn render(&self) -> String {
        format!("{ORG_KEY}={}\n", self.organization)
    }
}
