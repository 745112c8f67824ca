//! `bazkit skeleton create` - generate a starter project.

use std::str::FromStr;

use tracing::{info, instrument};

use bazkit_adapters::{
    BuiltinTemplates, DirectoryTemplates, LocalFilesystem, SimpleRenderer, SystemRunner,
};
use bazkit_core::{
    application::{SkeletonService, TemplateStore},
    domain::SkeletonKind,
    error::BazkitError,
};

use crate::{
    cli::{SkeletonArgs, SkeletonCommands},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct skeleton subcommand.
pub fn execute(cmd: SkeletonCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        SkeletonCommands::Create(args) => create(args, &config, &output),
    }
}

#[instrument(skip_all, fields(kind = %args.kind, name = %args.name))]
fn create(args: SkeletonArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let kind = SkeletonKind::from_str(&args.kind).map_err(BazkitError::from)?;

    let service = SkeletonService::new(
        template_store(config)?,
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
        Box::new(SystemRunner::new()),
        config.toolchain(),
    );

    let cwd = std::env::current_dir().map_err(CliError::io("read the current directory"))?;

    output.header(&format!("Creating {kind} skeleton '{}'...", args.name))?;
    let report = service.create(&cwd, kind, &args.name, args.variant.as_deref())?;

    output.files(&report.root, &report.files)?;
    for warning in &report.warnings {
        output.warning(warning)?;
    }
    output.success(&format!(
        "Skeleton '{}' ({}) created with {} new file(s){}",
        args.name,
        report.variant,
        report.created_count(),
        if report.committed { " and committed" } else { "" }
    ))?;
    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  bazel build //{}:all", args.name))?;

    output.report(&report)
}

/// Built-in layouts, or the configured override directory layered over them.
fn template_store(config: &AppConfig) -> CliResult<Box<dyn TemplateStore>> {
    match config.templates_dir() {
        Some(dir) => {
            info!(dir = %dir.display(), "Using template overrides");
            let store = DirectoryTemplates::load(dir).map_err(BazkitError::from)?;
            Ok(Box::new(store))
        }
        None => Ok(Box::new(BuiltinTemplates::new())),
    }
}
