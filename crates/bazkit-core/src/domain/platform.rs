//! Host platform identification for the preflight installer.

use std::fmt;

use serde::Serialize;

/// Package manager used to install a missing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PackageManager {
    Apt,
    Homebrew,
}

impl PackageManager {
    /// Command line installing Bazel. Homebrew ships `bazelisk`, which
    /// provides the `bazel` binary.
    pub fn install_command(&self) -> (&'static str, Vec<&'static str>) {
        match self {
            Self::Apt => ("sudo", vec!["apt-get", "install", "-y", "bazel"]),
            Self::Homebrew => ("brew", vec!["install", "bazelisk"]),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Apt => "apt-get",
            Self::Homebrew => "brew",
        })
    }
}

/// The host, as far as installation is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Platform {
    /// OS identification string, e.g. `linux/ubuntu` or `macos`.
    pub id: String,
    pub package_manager: Option<PackageManager>,
}

impl Platform {
    /// Classify from `std::env::consts::OS` and the contents of
    /// `/etc/os-release` (Linux only).
    pub fn identify(os: &str, os_release: Option<&str>) -> Self {
        match os {
            "macos" => Self {
                id: "macos".into(),
                package_manager: Some(PackageManager::Homebrew),
            },
            "linux" => {
                let release = os_release.unwrap_or_default();
                let id = release_field(release, "ID").unwrap_or("unknown");
                let like = release_field(release, "ID_LIKE").unwrap_or_default();
                let debian_family = ["debian", "ubuntu"]
                    .iter()
                    .any(|d| id == *d || like.split_whitespace().any(|l| l == *d));
                Self {
                    id: format!("linux/{id}"),
                    package_manager: debian_family.then_some(PackageManager::Apt),
                }
            }
            other => Self {
                id: other.to_string(),
                package_manager: None,
            },
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

fn release_field<'a>(release: &'a str, key: &str) -> Option<&'a str> {
    release.lines().find_map(|line| {
        let (k, v) = line.split_once('=')?;
        (k.trim() == key).then(|| v.trim().trim_matches('"'))
    })
}
