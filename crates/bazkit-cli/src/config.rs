//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the [`Toolchain`]
//! derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `BAZKIT_TEMPLATES_DIR`, then `BAZKIT_*` variables (`__` separates
//!    sections, e.g. `BAZKIT_TOOLS__BAZEL`)
//! 3. Config file (`--config`, or the platform config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use bazkit_core::application::Toolchain;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

const ENV_PREFIX: &str = "BAZKIT";
const TEMPLATES_DIR_ENV: &str = "BAZKIT_TEMPLATES_DIR";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new workspaces.
    pub defaults: Defaults,
    /// External binaries.
    pub tools: ToolsConfig,
    /// Cloning and committing.
    pub git: GitConfig,
    /// Preflight installation.
    pub install: InstallConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub organization: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub bazel: String,
    pub git: String,
    pub npx: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    pub host: String,
    pub commit_message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    pub auto_install: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    pub local_path: Option<PathBuf>,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        let toolchain = Toolchain::default();
        Self {
            bazel: toolchain.bazel,
            git: toolchain.git,
            npx: toolchain.npx,
        }
    }
}

impl Default for GitConfig {
    fn default() -> Self {
        let toolchain = Toolchain::default();
        Self {
            host: toolchain.git_host,
            commit_message: toolchain.commit_message,
        }
    }
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            auto_install: Toolchain::default().auto_install,
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then the
    /// environment.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to encode default configuration")?;

        let file = match config_file {
            Some(path) => File::from(path.as_path()).required(true),
            None => File::from(Self::config_path()).required(false),
        };

        let mut config: Self = Config::builder()
            .add_source(defaults)
            .add_source(file.format(FileFormat::Toml))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;

        if let Some(dir) = std::env::var_os(TEMPLATES_DIR_ENV) {
            config.templates.local_path = Some(PathBuf::from(dir));
        }

        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.bazkit.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "bazkit", "bazkit")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".bazkit.toml"))
    }

    /// Tool settings handed to the services.
    pub fn toolchain(&self) -> Toolchain {
        Toolchain {
            bazel: self.tools.bazel.clone(),
            git: self.tools.git.clone(),
            npx: self.tools.npx.clone(),
            git_host: self.git.host.clone(),
            commit_message: self.git.commit_message.clone(),
            auto_install: self.install.auto_install,
        }
    }

    /// Template override directory, if one is configured.
    pub fn templates_dir(&self) -> Option<&Path> {
        self.templates.local_path.as_deref()
    }
}
