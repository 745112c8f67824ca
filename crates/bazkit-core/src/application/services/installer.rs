//! Preflight: make sure a required tool is on PATH, installing it with the
//! host's package manager when allowed.

use tracing::{info, instrument};

use crate::application::ApplicationError;
use crate::application::ports::{CommandSpec, ProcessRunner, ToolLocator};
use crate::application::services::report::ToolReport;
use crate::application::services::steps::run_checked;
use crate::domain::{Platform, Step};
use crate::error::BazkitResult;

pub struct Installer<'a> {
    locator: &'a dyn ToolLocator,
    runner: &'a dyn ProcessRunner,
}

impl<'a> Installer<'a> {
    pub fn new(locator: &'a dyn ToolLocator, runner: &'a dyn ProcessRunner) -> Self {
        Self { locator, runner }
    }

    #[instrument(skip(self, platform), fields(platform = %platform.id))]
    pub fn ensure_tool(
        &self,
        tool: &str,
        platform: &Platform,
        auto_install: bool,
    ) -> BazkitResult<ToolReport> {
        if let Some(path) = self.locator.locate(tool) {
            info!(path = %path.display(), "Found");
            return Ok(ToolReport {
                tool: tool.to_string(),
                path,
                installed: false,
            });
        }

        if !auto_install {
            return Err(ApplicationError::ToolUnavailable {
                tool: tool.to_string(),
                reason: "not found on PATH and automatic installation is disabled".into(),
            }
            .into());
        }

        let Some(manager) = platform.package_manager else {
            return Err(ApplicationError::UnsupportedPlatform {
                tool: tool.to_string(),
                platform: platform.id.clone(),
            }
            .into());
        };

        info!(%manager, "Not on PATH, installing");
        let (program, args) = manager.install_command();
        run_checked(
            self.runner,
            Step::InstallTool,
            &CommandSpec::new(program).args(args),
        )?;

        let path = self
            .locator
            .locate(tool)
            .ok_or_else(|| ApplicationError::ToolUnavailable {
                tool: tool.to_string(),
                reason: format!("still not on PATH after installing with {manager}"),
            })?;

        Ok(ToolReport {
            tool: tool.to_string(),
            path,
            installed: true,
        })
    }
}
