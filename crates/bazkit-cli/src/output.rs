//! What the commands print on stdout, and warnings on stderr.
//!
//! In JSON mode the status lines are suppressed and each command prints
//! exactly one report document on stdout.

use std::io::{self, IsTerminal};
use std::path::Path;

use console::Term;
use owo_colors::{AnsiColors, OwoColorize};
use serde::Serialize;

use bazkit_core::application::services::{FileOutcome, FileReport};

use crate::cli::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::CliResult;

pub struct OutputManager {
    /// Never `Auto`.
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let resolved_format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            explicit => explicit,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    /// Unadorned line, e.g. the "Next steps" block.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.silenced() {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status('\u{2713}', AnsiColors::Green, msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status('\u{2139}', AnsiColors::Blue, msg)
    }

    /// Goes to stderr so it survives JSON mode; only `--quiet` hides it.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = self.paint(&format!("\u{26a0} {msg}"), AnsiColors::Yellow);
        Term::stderr().write_line(&line)
    }

    /// Title line before a command's file list.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.silenced() {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// One line per materialized file, relative to `root` where possible.
    pub fn files(&self, root: &Path, files: &[FileReport]) -> io::Result<()> {
        for file in files {
            let shown = file.path.strip_prefix(root).unwrap_or(&file.path).display();
            let line = match file.outcome {
                FileOutcome::Created => {
                    format!("  {}  {shown}", self.paint("created", AnsiColors::Green))
                }
                FileOutcome::Skipped => self.paint(
                    &format!("  skipped  {shown} (exists)"),
                    AnsiColors::BrightBlack,
                ),
            };
            self.print(&line)?;
        }
        Ok(())
    }

    /// Print `report` as pretty JSON when in JSON mode; a no-op otherwise.
    pub fn report<T: Serialize>(&self, report: &T) -> CliResult<()> {
        if self.resolved_format == OutputFormat::Json {
            let json = serde_json::to_string_pretty(report)?;
            self.term.write_line(&json)?;
        }
        Ok(())
    }

    fn status(&self, marker: char, color: AnsiColors, msg: &str) -> io::Result<()> {
        if self.silenced() {
            return Ok(());
        }
        self.term.write_line(&self.paint(&format!("{marker} {msg}"), color))
    }

    fn paint(&self, text: &str, color: AnsiColors) -> String {
        if self.no_color {
            text.to_owned()
        } else {
            text.color(color).to_string()
        }
    }

    fn silenced(&self) -> bool {
        self.quiet || self.resolved_format == OutputFormat::Json
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_manager(quiet: bool, no_color: bool, format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true, OutputFormat::Plain);
        assert!(out.silenced());
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn plain_never_colors() {
        assert!(make_manager(false, false, OutputFormat::Plain).no_color);
    }

    #[test]
    fn no_color_flag_is_honoured() {
        assert!(!make_manager(false, false, OutputFormat::Human).no_color);
        assert!(make_manager(false, true, OutputFormat::Human).no_color);
    }

    #[test]
    fn paint_is_plain_without_color() {
        let plain = make_manager(false, true, OutputFormat::Human);
        assert_eq!(plain.paint("created", AnsiColors::Green), "created");

        let colored = make_manager(false, false, OutputFormat::Human);
        assert!(colored.paint("created", AnsiColors::Green).contains('\u{1b}'));
    }

    #[test]
    fn json_mode_is_silenced() {
        let out = make_manager(false, true, OutputFormat::Json);
        assert!(out.silenced());
        assert_eq!(out.resolved_format, OutputFormat::Json);
    }
}
