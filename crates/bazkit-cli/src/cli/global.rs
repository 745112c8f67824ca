//! Flags accepted before or after any subcommand.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Args;
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, Clone, Args)]
#[command(next_help_heading = "Global options")]
pub struct GlobalArgs {
    /// More log output on stderr; -vv also shows every bazel/git/npx command
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never emit ANSI colour codes (also set by NO_COLOR)
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Read settings from FILE instead of the per-user bazkit.toml
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// How command results are written to stdout
    #[arg(long, global = true, value_enum, default_value_t)]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// Log level for bazkit's own crates. `--quiet` wins over `-v`.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// Whether diagnostics written to stderr (logs and error reports) may be
    /// coloured. `config_no_color` is `output.no_color` from the settings
    /// file, or `false` before the settings are loaded.
    pub fn stderr_colors(&self, config_no_color: bool) -> bool {
        !self.no_color
            && !config_no_color
            && self.output_format != OutputFormat::Plain
            && std::io::stderr().is_terminal()
    }
}

/// Rendering of file lists, warnings and reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when stdout is piped
    #[default]
    Auto,
    /// Coloured status lines
    Human,
    /// Status lines without colour, for logs and CI
    Plain,
    /// A single JSON report per command; status lines are suppressed
    Json,
}
