//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "bazkit",
    bin_name = "bazkit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Bazel workspace and project skeleton scaffolding",
    long_about = "bazkit creates Bazel workspaces, wires git dependencies into them \
                  as local repositories, builds targets, and generates starter \
                  projects that plug straight into the workspace.",
    after_help = "EXAMPLES:\n\
        \x20 bazkit workspace create ./mono --org acme\n\
        \x20 bazkit workspace add -p acme/payments -p acme/ledger\n\
        \x20 bazkit workspace build -all\n\
        \x20 bazkit skeleton create jvm billing java",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Rewrite the single-dash `-all` spelling to `--all` so clap does not read
/// it as a cluster of short flags.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| if arg == "-all" { OsString::from("--all") } else { arg })
        .collect()
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create, extend and build Bazel workspaces.
    #[command(
        subcommand,
        visible_alias = "ws",
        about = "Manage a Bazel workspace",
        after_help = "EXAMPLES:\n\
            \x20 bazkit workspace create ./mono --org acme\n\
            \x20 bazkit workspace add -p acme/payments\n\
            \x20 bazkit workspace build api worker"
    )]
    Workspace(WorkspaceCommands),

    /// Generate starter projects inside a workspace.
    #[command(
        subcommand,
        about = "Generate a project skeleton",
        after_help = "EXAMPLES:\n\
            \x20 bazkit skeleton create jvm billing\n\
            \x20 bazkit skeleton create infra edge construct\n\
            \x20 bazkit skeleton create mobile shop bare"
    )]
    Skeleton(SkeletonCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 bazkit completions bash > ~/.local/share/bash-completion/completions/bazkit\n\
            \x20 bazkit completions zsh  > ~/.zfunc/_bazkit\n\
            \x20 bazkit completions fish > ~/.config/fish/completions/bazkit.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the bazkit configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 bazkit config show\n\
            \x20 bazkit config path\n\
            \x20 bazkit config init --force"
    )]
    Config(ConfigCommands),
}

// ── workspace ─────────────────────────────────────────────────────────────────

/// Subcommands for `bazkit workspace`.
#[derive(Debug, Subcommand)]
pub enum WorkspaceCommands {
    /// Create a workspace, installing Bazel first when it is missing.
    Create(CreateArgs),
    /// Clone dependencies and register them as local repositories.
    Add(AddArgs),
    /// Build the current package, every target, or named targets.
    Build(BuildArgs),
}

/// Arguments for `bazkit workspace create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Directory to create the workspace in.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Organization recorded in CONFIG (defaults to the directory name).
    #[arg(long = "org", value_name = "NAME")]
    pub org: Option<String>,
}

/// Arguments for `bazkit workspace add`.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Dependency as `owner/repo`, or a bare `repo` of the workspace org.
    /// Repeat for several dependencies.
    #[arg(
        short = 'p',
        long = "package",
        value_name = "OWNER/REPO",
        required = true
    )]
    pub packages: Vec<String>,
}

/// Arguments for `bazkit workspace build`.
#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Build every target in the workspace (`-all` is accepted too).
    #[arg(long = "all")]
    pub all: bool,

    /// Target names to resolve and build.
    #[arg(value_name = "TARGET")]
    pub targets: Vec<String>,
}

// ── skeleton ──────────────────────────────────────────────────────────────────

/// Subcommands for `bazkit skeleton`.
#[derive(Debug, Subcommand)]
pub enum SkeletonCommands {
    /// Create `<name>` in the current directory.
    Create(SkeletonArgs),
}

/// Arguments for `bazkit skeleton create`.
#[derive(Debug, Args)]
pub struct SkeletonArgs {
    /// Project kind: jvm, infra or mobile (aliases: gradle, cdk, rn, ...).
    #[arg(value_name = "KIND")]
    pub kind: String,

    /// Project directory name.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Variant of the kind, e.g. `java`, `construct`, `bare`. A leading
    /// `-` or `--` is accepted.
    #[arg(value_name = "VARIANT", allow_hyphen_values = true)]
    pub variant: Option<String>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `bazkit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `bazkit config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML.
    Show,
    /// Print the path of the default configuration file.
    Path,
    /// Write the default configuration file.
    Init {
        /// Overwrite an existing file.
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(normalize_args(args.iter().map(OsString::from)))
    }

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn single_dash_all_is_normalized() {
        let cli = parse(&["bazkit", "workspace", "build", "-all"]).unwrap();
        let Commands::Workspace(WorkspaceCommands::Build(args)) = cli.command else {
            panic!("expected workspace build");
        };
        assert!(args.all);
        assert!(args.targets.is_empty());
    }

    #[test]
    fn normalization_only_touches_exact_token() {
        let args = normalize_args(["-all", "--all", "-allx", "all"].map(OsString::from));
        assert_eq!(args, ["--all", "--all", "-allx", "all"].map(OsString::from));
    }

    #[test]
    fn build_collects_named_targets() {
        let cli = parse(&["bazkit", "workspace", "build", "api", "worker"]).unwrap();
        let Commands::Workspace(WorkspaceCommands::Build(args)) = cli.command else {
            panic!("expected workspace build");
        };
        assert!(!args.all);
        assert_eq!(args.targets, vec!["api", "worker"]);
    }

    #[test]
    fn add_accepts_repeated_packages() {
        let cli = parse(&["bazkit", "workspace", "add", "-p", "o/a", "--package", "o/b"]).unwrap();
        let Commands::Workspace(WorkspaceCommands::Add(args)) = cli.command else {
            panic!("expected workspace add");
        };
        assert_eq!(args.packages, vec!["o/a", "o/b"]);
    }

    #[test]
    fn add_without_packages_is_rejected() {
        assert!(parse(&["bazkit", "workspace", "add"]).is_err());
    }

    #[test]
    fn workspace_without_noun_is_rejected() {
        assert!(parse(&["bazkit", "workspace"]).is_err());
    }

    #[test]
    fn skeleton_variant_may_look_like_a_flag() {
        let cli = parse(&["bazkit", "skeleton", "create", "mobile", "shop", "-bare"]).unwrap();
        let Commands::Skeleton(SkeletonCommands::Create(args)) = cli.command else {
            panic!("expected skeleton create");
        };
        assert_eq!(args.kind, "mobile");
        assert_eq!(args.name, "shop");
        assert_eq!(args.variant.as_deref(), Some("-bare"));
    }

    #[test]
    fn create_takes_optional_org() {
        let cli = parse(&["bazkit", "ws", "create", "mono", "--org", "acme"]).unwrap();
        let Commands::Workspace(WorkspaceCommands::Create(args)) = cli.command else {
            panic!("expected workspace create");
        };
        assert_eq!(args.path, PathBuf::from("mono"));
        assert_eq!(args.org.as_deref(), Some("acme"));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(parse(&["bazkit", "--quiet", "--verbose", "config", "path"]).is_err());
    }
}
