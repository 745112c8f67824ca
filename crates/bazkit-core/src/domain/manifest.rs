//! The `WORKSPACE` manifest.
//!
//! The file is free-form Starlark as far as Bazel is concerned. We only care
//! about two things in it: the `workspace(name = ...)` declaration and the
//! `local_repository(...)` blocks this tool appends. Everything else is kept
//! as verbatim text so a parse followed by a render reproduces the file
//! byte-for-byte.
//!
//! References are append-only and never deduplicated: adding the same
//! dependency twice yields two blocks.

use std::fmt;

use serde::Serialize;

use crate::domain::error::DomainError;

/// Marker file that identifies a workspace root.
pub const WORKSPACE_FILE: &str = "WORKSPACE";

/// A `local_repository` reference to a dependency checked out inside the
/// workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalRepository {
    name: String,
    path: String,
}

impl LocalRepository {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Canonical block as written by [`WorkspaceManifest::append_local_repository`].
    pub fn to_block(&self) -> String {
        format!(
            "local_repository(\n    name = \"{}\",\n    path = \"{}\",\n)\n",
            self.name, self.path
        )
    }
}

impl fmt::Display for LocalRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{} -> {}", self.name, self.path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ManifestEntry {
    /// Text we do not interpret.
    Verbatim(String),
    /// A parsed reference. `source` holds the original text when the block
    /// came from disk so hand formatting survives a rewrite.
    Repository {
        repo: LocalRepository,
        source: Option<String>,
    },
}

/// In-memory form of the `WORKSPACE` file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkspaceManifest {
    entries: Vec<ManifestEntry>,
}

impl WorkspaceManifest {
    /// A fresh manifest declaring `workspace_name`.
    pub fn new(workspace_name: &str) -> Self {
        Self {
            entries: vec![ManifestEntry::Verbatim(format!(
                "workspace(name = \"{}\")\n",
                sanitize_repository_name(workspace_name)
            ))],
        }
    }

    /// Parse manifest text.
    ///
    /// Fails only when a `local_repository(` block is never closed; blocks
    /// missing a `name` or `path` are kept as verbatim text.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let mut entries = Vec::new();
        let mut verbatim = String::new();
        let mut lines = text.split_inclusive('\n').peekable();

        while let Some(line) = lines.next() {
            if !line.trim_start().starts_with("local_repository(") {
                verbatim.push_str(line);
                continue;
            }

            let mut block = String::from(line);
            let mut depth = paren_balance(line);
            while depth > 0 {
                let Some(next) = lines.next() else {
                    return Err(DomainError::MalformedManifest(format!(
                        "unterminated local_repository block starting at: {}",
                        line.trim()
                    )));
                };
                depth += paren_balance(next);
                block.push_str(next);
            }

            match parse_block(&block) {
                Some(repo) => {
                    if !verbatim.is_empty() {
                        entries.push(ManifestEntry::Verbatim(std::mem::take(&mut verbatim)));
                    }
                    entries.push(ManifestEntry::Repository {
                        repo,
                        source: Some(block),
                    });
                }
                None => verbatim.push_str(&block),
            }
        }

        if !verbatim.is_empty() {
            entries.push(ManifestEntry::Verbatim(verbatim));
        }

        Ok(Self { entries })
    }

    /// Serialise back to file content.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            match entry {
                ManifestEntry::Verbatim(text) => out.push_str(text),
                ManifestEntry::Repository {
                    source: Some(source),
                    ..
                } => out.push_str(source),
                ManifestEntry::Repository { repo, source: None } => {
                    if !out.is_empty() {
                        if !out.ends_with('\n') {
                            out.push('\n');
                        }
                        out.push('\n');
                    }
                    out.push_str(&repo.to_block());
                }
            }
        }
        out
    }

    /// All references, in file order, duplicates included.
    pub fn local_repositories(&self) -> impl Iterator<Item = &LocalRepository> {
        self.entries.iter().filter_map(|entry| match entry {
            ManifestEntry::Repository { repo, .. } => Some(repo),
            ManifestEntry::Verbatim(_) => None,
        })
    }

    /// Append a reference. No deduplication.
    pub fn append_local_repository(&mut self, repo: LocalRepository) {
        self.entries
            .push(ManifestEntry::Repository { repo, source: None });
    }
}

/// Map a free-form name onto Bazel's repository-name alphabet.
///
/// Anything other than ASCII alphanumerics and `_` becomes `_`; a leading
/// digit gets a `_` prefix.
pub fn sanitize_repository_name(raw: &str) -> String {
    let mut name: String = raw
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name
}

/// Net parentheses opened by `line`, ignoring string literals and `#`
/// comments.
fn paren_balance(line: &str) -> i32 {
    let mut depth = 0;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(_), '\\') => {
                chars.next();
            }
            (Some(open), c) if c == open => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '#') => break,
            (None, '(') => depth += 1,
            (None, ')') => depth -= 1,
            (None, _) => {}
        }
    }
    depth
}

fn parse_block(block: &str) -> Option<LocalRepository> {
    let name = quoted_value(block, "name")?;
    let path = quoted_value(block, "path")?;
    Some(LocalRepository::new(name, path))
}

/// Find `key = "value"` inside `text` and return `value`.
fn quoted_value<'a>(text: &'a str, key: &str) -> Option<&'a str> {
    let mut search = text;
    while let Some(pos) = search.find(key) {
        let before_ok = search[..pos]
            .chars()
            .next_back()
            .is_none_or(|c| !(c.is_ascii_alphanumeric() || c == '_'));
        let rest = search[pos + key.len()..].trim_start();
        if before_ok {
            if let Some(rest) = rest.strip_prefix('=') {
                let rest = rest.trim_start().strip_prefix('"')?;
                let end = rest.find('"')?;
                return Some(&rest[..end]);
            }
        }
        search = &search[pos + key.len()..];
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const HAND_WRITTEN: &str = "\
workspace(name = \"acme\")

load(\"@bazel_tools//tools/build_defs/repo:http.bzl\", \"http_archive\")

local_repository(name = \"billing\", path = \"billing\")

local_repository(
    name   = \"ledger\",
    path   = \"third_party/ledger\",  # pinned
)
";

    #[test]
    fn new_manifest_declares_workspace() {
        let manifest = WorkspaceManifest::new("acme-mono");
        assert_eq!(manifest.render(), "workspace(name = \"acme_mono\")\n");
    }

    #[test]
    fn parse_then_render_is_lossless() {
        let manifest = WorkspaceManifest::parse(HAND_WRITTEN).unwrap();
        assert_eq!(manifest.render(), HAND_WRITTEN);
    }

    #[test]
    fn parse_finds_references_in_order() {
        let manifest = WorkspaceManifest::parse(HAND_WRITTEN).unwrap();
        let repos: Vec<_> = manifest.local_repositories().collect();
        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0], &LocalRepository::new("billing", "billing"));
        assert_eq!(repos[1], &LocalRepository::new("ledger", "third_party/ledger"));
    }

    #[test]
    fn append_keeps_existing_text_and_adds_block() {
        let mut manifest = WorkspaceManifest::parse(HAND_WRITTEN).unwrap();
        manifest.append_local_repository(LocalRepository::new("payments", "payments"));

        let rendered = manifest.render();
        assert!(rendered.starts_with(HAND_WRITTEN));
        assert!(rendered.ends_with(
            "\nlocal_repository(\n    name = \"payments\",\n    path = \"payments\",\n)\n"
        ));
    }

    #[test]
    fn append_is_not_deduplicated() {
        let mut manifest = WorkspaceManifest::new("acme");
        manifest.append_local_repository(LocalRepository::new("repo1", "repo1"));
        manifest.append_local_repository(LocalRepository::new("repo1", "repo1"));

        let reparsed = WorkspaceManifest::parse(&manifest.render()).unwrap();
        assert_eq!(reparsed.local_repositories().count(), 2);
    }

    #[test]
    fn append_to_file_without_trailing_newline() {
        let mut manifest = WorkspaceManifest::parse("workspace(name = \"x\")").unwrap();
        manifest.append_local_repository(LocalRepository::new("a", "a"));
        assert_eq!(
            manifest.render(),
            "workspace(name = \"x\")\n\nlocal_repository(\n    name = \"a\",\n    path = \"a\",\n)\n"
        );
    }

    #[test]
    fn incomplete_block_is_kept_verbatim() {
        let text = "local_repository(\n    name = \"only_name\",\n)\n";
        let manifest = WorkspaceManifest::parse(text).unwrap();
        assert_eq!(manifest.local_repositories().count(), 0);
        assert_eq!(manifest.render(), text);
    }

    #[test]
    fn unterminated_block_is_an_error() {
        let text = "local_repository(\n    name = \"a\",\n    path = \"a\",\n";
        assert!(matches!(
            WorkspaceManifest::parse(text),
            Err(DomainError::MalformedManifest(_))
        ));
    }

    #[test]
    fn parentheses_in_comments_and_strings_do_not_count() {
        let text = "\
local_repository(
    name = \"a\",  # vendored (see docs
    path = \"a\",
)
local_repository(
    name = \"b\",
    path = \"dir (old)\\\")\",
)
";
        let manifest = WorkspaceManifest::parse(text).unwrap();
        let repos: Vec<_> = manifest.local_repositories().collect();
        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0], &LocalRepository::new("a", "a"));
        assert_eq!(manifest.render(), text);
    }

    #[test]
    fn repository_names_are_sanitized() {
        assert_eq!(sanitize_repository_name("my-lib.js"), "my_lib_js");
        assert_eq!(sanitize_repository_name("9lives"), "_9lives");
        assert_eq!(sanitize_repository_name("plain_name"), "plain_name");
    }

    #[test]
    fn key_lookup_ignores_longer_identifiers() {
        assert_eq!(quoted_value("repo_name = \"x\", name = \"y\"", "name"), Some("y"));
    }
}
