//! `bazkit config` - inspect and initialise configuration.

use std::path::Path;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Show => {
            output.print(&to_toml(&config)?)?;
            output.report(&config)?;
        }

        // Printed even with --quiet: the path is the whole answer.
        ConfigCommands::Path => {
            println!("{}", AppConfig::config_path().display());
        }

        ConfigCommands::Init { force } => {
            let path = AppConfig::config_path();
            if write_default(&path, force)? {
                output.success(&format!("Configuration created at {}", path.display()))?;
            } else {
                output.warning(&format!(
                    "Config already exists at {}  (use --force to overwrite)",
                    path.display(),
                ))?;
            }
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn to_toml(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::Config {
        message: format!("could not serialise settings: {e}"),
        source: Some(Box::new(e)),
    })
}

/// Write the default configuration to `path`. Returns `false` when the file
/// exists and `force` is not set.
fn write_default(path: &Path, force: bool) -> CliResult<bool> {
    if path.exists() && !force {
        return Ok(false);
    }

    let toml = to_toml(&AppConfig::default())?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(CliError::io(format!(
            "create config directory '{}'",
            parent.display()
        )))?;
    }

    std::fs::write(path, toml)
        .map_err(CliError::io(format!("write config to '{}'", path.display())))?;

    Ok(true)
}

// ── tests ─────────────────────────────────────────────────────────────────────
