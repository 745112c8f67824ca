//! Skeleton kinds and variants.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant to [`SkeletonVariant`]
//! 2. Add its `as_str`, `kind` and `VARIANTS` entries here
//! 3. Add its layout in `bazkit-adapters::builtin_templates` and its build
//!    stub in `descriptor.rs`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ── SkeletonKind ──────────────────────────────────────────────────────────────

/// The closed set of project kinds `skeleton create` can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkeletonKind {
    /// Gradle build, Kotlin or Java sources.
    Jvm,
    /// AWS CDK app in TypeScript.
    Infra,
    /// React Native app generated by an external CLI.
    Mobile,
}

impl SkeletonKind {
    pub const ALL: [SkeletonKind; 3] = [Self::Jvm, Self::Infra, Self::Mobile];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Jvm => "jvm",
            Self::Infra => "infra",
            Self::Mobile => "mobile",
        }
    }

    /// Variants for this kind; the first one is the default.
    pub fn variants(self) -> Vec<SkeletonVariant> {
        SkeletonVariant::ALL
            .into_iter()
            .filter(|v| v.kind() == self)
            .collect()
    }

    pub const fn default_variant(self) -> SkeletonVariant {
        match self {
            Self::Jvm => SkeletonVariant::Kotlin,
            Self::Infra => SkeletonVariant::CdkApp,
            Self::Mobile => SkeletonVariant::Expo,
        }
    }

    /// Resolve an optional user-supplied variant for this kind.
    pub fn variant(self, requested: Option<&str>) -> Result<SkeletonVariant, DomainError> {
        let Some(requested) = requested else {
            return Ok(self.default_variant());
        };
        let wanted = requested.trim_start_matches('-').to_ascii_lowercase();
        self.variants()
            .into_iter()
            .find(|v| v.as_str() == wanted)
            .ok_or_else(|| DomainError::InvalidVariant {
                kind: self.to_string(),
                variant: requested.to_string(),
                available: self.variants().iter().map(|v| v.as_str()).collect(),
            })
    }
}

impl fmt::Display for SkeletonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkeletonKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "jvm" | "gradle" | "kotlin" => Ok(Self::Jvm),
            "infra" | "cdk" | "typescript" | "ts" => Ok(Self::Infra),
            "mobile" | "react-native" | "rn" => Ok(Self::Mobile),
            other => Err(DomainError::UnknownSkeletonKind(other.to_string())),
        }
    }
}

// ── SkeletonVariant ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkeletonVariant {
    Kotlin,
    Java,
    #[serde(rename = "app")]
    CdkApp,
    #[serde(rename = "construct")]
    CdkConstruct,
    Expo,
    Bare,
}

impl SkeletonVariant {
    pub const ALL: [SkeletonVariant; 6] = [
        Self::Kotlin,
        Self::Java,
        Self::CdkApp,
        Self::CdkConstruct,
        Self::Expo,
        Self::Bare,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Kotlin => "kotlin",
            Self::Java => "java",
            Self::CdkApp => "app",
            Self::CdkConstruct => "construct",
            Self::Expo => "expo",
            Self::Bare => "bare",
        }
    }

    pub const fn kind(&self) -> SkeletonKind {
        match self {
            Self::Kotlin | Self::Java => SkeletonKind::Jvm,
            Self::CdkApp | Self::CdkConstruct => SkeletonKind::Infra,
            Self::Expo | Self::Bare => SkeletonKind::Mobile,
        }
    }

    /// Arguments for the external scaffolding CLI (run through `npx`).
    pub fn generator_args(&self, project_name: &str) -> Option<Vec<String>> {
        match self {
            Self::Expo => Some(vec![
                "--yes".into(),
                "create-expo-app@latest".into(),
                project_name.into(),
                "--yes".into(),
            ]),
            Self::Bare => Some(vec![
                "--yes".into(),
                "@react-native-community/cli@latest".into(),
                "init".into(),
                project_name.into(),
            ]),
            _ => None,
        }
    }
}

impl fmt::Display for SkeletonVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ProjectName ───────────────────────────────────────────────────────────────

/// A validated skeleton name, usable as a directory name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(name: &str) -> Result<Self, DomainError> {
        let invalid = |reason: &str| DomainError::InvalidProjectName {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        if name.is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if name.starts_with('.') || name.starts_with('-') {
            return Err(invalid("name cannot start with '.' or '-'"));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(invalid("name cannot contain path separators"));
        }
        if let Some(c) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(invalid(&format!("character '{c}' is not allowed")));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-case alphanumeric form used as a JVM package segment.
    pub fn package_segment(&self) -> String {
        let segment: String = self
            .0
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect();
        if segment.starts_with(|c: char| c.is_ascii_digit()) {
            format!("p{segment}")
        } else {
            segment
        }
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
