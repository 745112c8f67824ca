//! `bazkit workspace` - create, extend and build a Bazel workspace.
//!
//! Responsibility: translate CLI arguments into service calls and display
//! the returned reports. No business logic lives here.

use std::path::PathBuf;

use tracing::{debug, instrument};

use bazkit_adapters::{LocalFilesystem, SystemRunner, WhichLocator, host::detect_platform};
use bazkit_core::{
    application::{
        WorkspaceService,
        services::{AddReport, DescriptorOutcome},
    },
    domain::BuildRequest,
    error::BazkitError,
};

use crate::{
    cli::{AddArgs, BuildArgs, CreateArgs, WorkspaceCommands},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct workspace subcommand.
pub fn execute(cmd: WorkspaceCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = WorkspaceService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(SystemRunner::new()),
        Box::new(WhichLocator::new()),
        config.toolchain(),
    );

    match cmd {
        WorkspaceCommands::Create(args) => create(&service, args, &config, &output),
        WorkspaceCommands::Add(args) => add(&service, args, &output),
        WorkspaceCommands::Build(args) => build(&service, args, &output),
    }
}

#[instrument(skip_all, fields(path = %args.path.display()))]
fn create(
    service: &WorkspaceService,
    args: CreateArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let organization = args.org.or_else(|| config.defaults.organization.clone());
    let platform = detect_platform();
    debug!(platform = %platform, organization = ?organization, "Creating workspace");

    let report = service.create(&args.path, organization.as_deref(), &platform)?;

    if report.tool.installed {
        output.success(&format!(
            "Installed {} ({})",
            report.tool.tool,
            report.tool.path.display()
        ))?;
    }
    output.header(&format!("Workspace {}", report.root.display()))?;
    output.files(&report.root, &report.files)?;
    output.success("Workspace ready")?;
    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {}", args.path.display()))?;
    output.print("  bazkit workspace add -p <owner>/<repo>")?;

    output.report(&report)
}

#[instrument(skip_all, fields(count = args.packages.len()))]
fn add(service: &WorkspaceService, args: AddArgs, output: &OutputManager) -> CliResult<()> {
    let cwd = current_dir()?;
    let report = service.add(&cwd, &args.packages)?;

    print_dependencies(&report, output)?;
    for warning in &report.warnings {
        output.warning(warning)?;
    }
    output.success(&format!(
        "Added {} dependenc{}",
        report.dependencies.len(),
        if report.dependencies.len() == 1 { "y" } else { "ies" }
    ))?;

    output.report(&report)
}

fn print_dependencies(report: &AddReport, output: &OutputManager) -> CliResult<()> {
    for dep in &report.dependencies {
        let fetched = if dep.cloned { "cloned" } else { "already present" };
        let descriptor = match &dep.descriptor {
            DescriptorOutcome::Existing { file } => format!("uses {file}"),
            DescriptorOutcome::Generated { kind } => format!("generated BUILD.bazel ({kind})"),
            DescriptorOutcome::Unrecognized => "no build descriptor".to_string(),
        };
        output.info(&format!(
            "{} → @{} ({fetched}, {descriptor})",
            dep.dependency,
            dep.reference.name()
        ))?;
    }
    Ok(())
}

#[instrument(skip_all, fields(all = args.all, targets = args.targets.len()))]
fn build(service: &WorkspaceService, args: BuildArgs, output: &OutputManager) -> CliResult<()> {
    let request = BuildRequest::from_args(args.all, args.targets).map_err(BazkitError::from)?;
    let cwd = current_dir()?;

    let report = service.build(&cwd, request)?;

    output.success(&format!("Built {}", report.built.join(" ")))?;
    output.report(&report)
}

fn current_dir() -> CliResult<PathBuf> {
    std::env::current_dir().map_err(CliError::io("read the current directory"))
}
