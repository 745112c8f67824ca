//! Tracing setup for the `bazkit` binary.
//!
//! `bazkit-core` and `bazkit-adapters` only emit events. Everything is
//! written to stderr so `--output-format json` keeps stdout parseable.
//! When `RUST_LOG` is set it replaces the `-v`/`-q` level entirely.

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Crates whose events follow the `-v`/`-q` level. Dependencies stay silent.
const LOG_TARGETS: [&str; 3] = ["bazkit", "bazkit_core", "bazkit_adapters"];

pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = args.log_level();
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(directives(level))?,
    };

    // From -vv on, the target tells service events apart from runner events.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(args.stderr_colors(false))
        .with_target(level >= LevelFilter::DEBUG);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

fn directives(level: LevelFilter) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
