//! Dependency identifiers passed to `workspace add -p`.

use std::fmt;

use serde::Serialize;

use crate::domain::{
    error::DomainError,
    manifest::{LocalRepository, sanitize_repository_name},
};

/// A parsed `<owner>/<repo>` identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencySpec {
    owner: String,
    repo: String,
}

impl DependencySpec {
    /// Parse `owner/repo`, or a bare `repo` when `default_owner` is known.
    pub fn parse(input: &str, default_owner: Option<&str>) -> Result<Self, DomainError> {
        let invalid = |reason: &str| DomainError::InvalidDependency {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = input.trim().trim_end_matches('/');
        let (owner, repo) = match trimmed.split_once('/') {
            Some((owner, repo)) => (owner.to_string(), repo.to_string()),
            None => match default_owner {
                Some(owner) => (owner.to_string(), trimmed.to_string()),
                None => {
                    return Err(invalid(
                        "no owner given and no organization recorded in CONFIG",
                    ));
                }
            },
        };
        let repo = repo.strip_suffix(".git").unwrap_or(&repo).to_string();

        if owner.is_empty() {
            return Err(invalid("owner is empty"));
        }
        if repo.is_empty() {
            return Err(invalid("repository name is empty"));
        }
        if repo.contains('/') {
            return Err(invalid("expected exactly one '/' between owner and repository"));
        }
        if !is_safe_segment(&owner) || !is_safe_segment(&repo) {
            return Err(invalid(
                "only ASCII letters, digits, '-', '_' and '.' are allowed",
            ));
        }
        if repo == "." || repo == ".." {
            return Err(invalid("repository name cannot be a relative path"));
        }

        Ok(Self { owner, repo })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Directory the dependency is checked out into, relative to the
    /// workspace root.
    pub fn directory(&self) -> &str {
        &self.repo
    }

    /// Clone URL under `host` (e.g. `https://github.com`).
    pub fn clone_url(&self, host: &str) -> String {
        format!(
            "{}/{}/{}.git",
            host.trim_end_matches('/'),
            self.owner,
            self.repo
        )
    }

    /// The manifest reference for this dependency.
    pub fn local_repository(&self) -> LocalRepository {
        LocalRepository::new(sanitize_repository_name(&self.repo), self.directory())
    }
}

impl fmt::Display for DependencySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

fn is_safe_segment(segment: &str) -> bool {
    segment
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_owner_and_repo() {
        let spec = DependencySpec::parse("orgA/repo1", None).unwrap();
        assert_eq!(spec.owner(), "orgA");
        assert_eq!(spec.repo(), "repo1");
        assert_eq!(spec.directory(), "repo1");
        assert_eq!(spec.to_string(), "orgA/repo1");
    }

    #[test]
    fn bare_repo_uses_default_owner() {
        let spec = DependencySpec::parse("billing", Some("acme")).unwrap();
        assert_eq!(spec.owner(), "acme");
    }

    #[test]
    fn bare_repo_without_owner_fails() {
        assert!(matches!(
            DependencySpec::parse("billing", None),
            Err(DomainError::InvalidDependency { .. })
        ));
    }

    #[test]
    fn rejects_malformed_identifiers() {
        for bad in ["/repo", "owner/", "a/b/c", "own er/repo", "owner/.."] {
            assert!(DependencySpec::parse(bad, None).is_err(), "accepted: {bad}");
        }
    }

    #[test]
    fn strips_git_suffix() {
        let spec = DependencySpec::parse("acme/ledger.git", None).unwrap();
        assert_eq!(spec.repo(), "ledger");
    }

    #[test]
    fn clone_url_joins_host() {
        let spec = DependencySpec::parse("acme/ledger", None).unwrap();
        assert_eq!(
            spec.clone_url("https://github.com/"),
            "https://github.com/acme/ledger.git"
        );
    }

    #[test]
    fn reference_name_is_sanitized_but_path_is_not() {
        let spec = DependencySpec::parse("acme/web-app", None).unwrap();
        let repo = spec.local_repository();
        assert_eq!(repo.name(), "web_app");
        assert_eq!(repo.path(), "web-app");
    }
}
