//! Workspace Service - `workspace create`, `workspace add` and
//! `workspace build`.
//!
//! All three operate on a directory holding the two marker files
//! (`WORKSPACE` and `CONFIG`). Bazel, git and the filesystem are reached
//! through ports only.

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandSpec, Filesystem, ProcessRunner, ToolLocator},
        services::{
            installer::Installer,
            materializer::Materializer,
            report::{AddReport, BuildReport, CreateReport, DependencyReport, DescriptorOutcome},
            steps::run_checked,
        },
        toolchain::Toolchain,
    },
    domain::{
        BuildRequest, CONFIG_FILE, DependencyKind, DependencySpec, GENERATED_DESCRIPTOR,
        OrgConfig, Platform, Step, WORKSPACE_FILE, WorkspaceManifest,
        build_request::{ALL_TARGETS, package_label, target_query},
        descriptor::find_descriptor,
    },
    error::{BazkitError, BazkitResult},
};

/// Content of the root package descriptor written by `workspace create`.
const ROOT_BUILD: &str = "package(default_visibility = [\"//visibility:public\"])\n";

/// Content of the `.gitignore` written by `workspace create`.
const ROOT_GITIGNORE: &str = "/bazel-*\n";

pub struct WorkspaceService {
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn ProcessRunner>,
    locator: Box<dyn ToolLocator>,
    toolchain: Toolchain,
}

impl WorkspaceService {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        runner: Box<dyn ProcessRunner>,
        locator: Box<dyn ToolLocator>,
        toolchain: Toolchain,
    ) -> Self {
        Self {
            filesystem,
            runner,
            locator,
            toolchain,
        }
    }

    /// Create a workspace at `path`, installing Bazel first if needed.
    ///
    /// Re-running against an existing workspace is safe: every marker file
    /// that is already present is left as it is.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn create(
        &self,
        path: &Path,
        organization: Option<&str>,
        platform: &Platform,
    ) -> BazkitResult<CreateReport> {
        let tool = Installer::new(self.locator.as_ref(), self.runner.as_ref()).ensure_tool(
            &self.toolchain.bazel,
            platform,
            self.toolchain.auto_install,
        )?;

        self.filesystem.create_dir_all(path)?;
        let root = self.filesystem.canonicalize(path)?;
        let dir_name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "workspace".to_string());
        info!(name = %dir_name, "Creating workspace");

        let materializer = Materializer::new(self.filesystem.as_ref());
        let files = vec![
            materializer.ensure_file(&root.join(WORKSPACE_FILE), || {
                Ok(WorkspaceManifest::new(&dir_name).render())
            })?,
            materializer.ensure_file(&root.join(CONFIG_FILE), || {
                Ok(OrgConfig::new(organization.unwrap_or(&dir_name))?.render())
            })?,
            materializer.ensure_file(&root.join(GENERATED_DESCRIPTOR), || {
                Ok(ROOT_BUILD.to_string())
            })?,
            materializer.ensure_file(&root.join(".gitignore"), || Ok(ROOT_GITIGNORE.to_string()))?,
        ];

        info!("Workspace ready");
        Ok(CreateReport { root, tool, files })
    }

    /// Clone dependencies into the workspace at `cwd` and reference them
    /// from its manifest.
    ///
    /// Every identifier is validated before anything is cloned. A directory
    /// that already exists is not cloned again, but its reference is still
    /// appended.
    #[instrument(skip_all, fields(cwd = %cwd.display()))]
    pub fn add(&self, cwd: &Path, dependencies: &[String]) -> BazkitResult<AddReport> {
        let manifest_path = cwd.join(WORKSPACE_FILE);
        if !self.filesystem.exists(&manifest_path) {
            return Err(ApplicationError::WorkspaceNotFound {
                path: cwd.to_path_buf(),
            }
            .into());
        }

        let org = self.read_org_config(cwd)?;
        let specs = dependencies
            .iter()
            .map(|d| DependencySpec::parse(d, org.as_ref().map(OrgConfig::organization)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut manifest = WorkspaceManifest::parse(&self.filesystem.read_file(&manifest_path)?)?;
        let mut reports = Vec::with_capacity(specs.len());
        let mut warnings = Vec::new();

        for spec in specs {
            info!(dependency = %spec, "Adding dependency");
            let directory = cwd.join(spec.directory());

            let cloned = if self.filesystem.exists(&directory) {
                info!(path = %directory.display(), "Directory exists, skipping clone");
                false
            } else {
                let clone = CommandSpec::new(&self.toolchain.git)
                    .arg("clone")
                    .arg(spec.clone_url(&self.toolchain.git_host))
                    .arg(spec.directory())
                    .current_dir(cwd);
                run_checked(self.runner.as_ref(), Step::Clone, &clone)?;
                true
            };

            let reference = spec.local_repository();
            manifest.append_local_repository(reference.clone());
            self.filesystem.write_file(&manifest_path, &manifest.render())?;

            let descriptor = self.ensure_descriptor(&directory, reference.name())?;
            if descriptor == DescriptorOutcome::Unrecognized {
                let message = format!(
                    "{spec}: no BUILD file and no recognised build system; add a BUILD.bazel by hand"
                );
                warn!("{message}");
                warnings.push(message);
            }

            reports.push(DependencyReport {
                dependency: spec.to_string(),
                directory,
                cloned,
                reference,
                descriptor,
            });
        }

        Ok(AddReport {
            workspace: cwd.to_path_buf(),
            dependencies: reports,
            warnings,
        })
    }

    /// Build according to `request`, from `cwd`.
    #[instrument(skip_all, fields(cwd = %cwd.display()))]
    pub fn build(&self, cwd: &Path, request: BuildRequest) -> BazkitResult<BuildReport> {
        let (workspace_root, built) = match &request {
            BuildRequest::CurrentPackage => {
                // Checked before Bazel is ever started.
                if find_descriptor(|f| self.filesystem.exists(&cwd.join(f))).is_none() {
                    return Err(ApplicationError::NoBuildDescriptor {
                        path: cwd.to_path_buf(),
                    }
                    .into());
                }
                let root = self.workspace_root(cwd)?;
                let here = self.filesystem.canonicalize(cwd)?;
                let relative = here.strip_prefix(&root).map_err(|_| {
                    ApplicationError::NotInWorkspace {
                        path: cwd.to_path_buf(),
                    }
                })?;
                let label = package_label(relative);
                self.bazel_build(cwd, std::slice::from_ref(&label))?;
                (root, vec![label])
            }
            BuildRequest::All => {
                let root = self.workspace_root(cwd)?;
                let pattern = ALL_TARGETS.to_string();
                self.bazel_build(cwd, std::slice::from_ref(&pattern))?;
                (root, vec![pattern])
            }
            BuildRequest::Targets(names) => {
                let root = self.workspace_root(cwd)?;
                let mut resolved = Vec::with_capacity(names.len());
                for name in names {
                    resolved.push(self.resolve_target(cwd, name)?);
                }
                let mut built = Vec::new();
                for labels in resolved {
                    self.bazel_build(cwd, &labels)?;
                    built.extend(labels);
                }
                (root, built)
            }
        };

        info!(count = built.len(), "Build succeeded");
        Ok(BuildReport {
            workspace_root,
            request,
            built,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn read_org_config(&self, dir: &Path) -> BazkitResult<Option<OrgConfig>> {
        let path = dir.join(CONFIG_FILE);
        if !self.filesystem.exists(&path) {
            return Ok(None);
        }
        Ok(Some(OrgConfig::parse(&self.filesystem.read_file(&path)?)?))
    }

    /// Keep an existing descriptor, otherwise generate one for the detected
    /// build system.
    fn ensure_descriptor(&self, directory: &Path, target: &str) -> BazkitResult<DescriptorOutcome> {
        let exists = |f: &str| self.filesystem.exists(&directory.join(f));

        if let Some(file) = find_descriptor(exists) {
            return Ok(DescriptorOutcome::Existing {
                file: file.to_string(),
            });
        }

        match DependencyKind::detect(exists) {
            Some(kind) => {
                let path = directory.join(GENERATED_DESCRIPTOR);
                self.filesystem.write_file(&path, &kind.stub(target))?;
                info!(%kind, path = %path.display(), "Generated build descriptor");
                Ok(DescriptorOutcome::Generated { kind })
            }
            None => Ok(DescriptorOutcome::Unrecognized),
        }
    }

    /// Ask Bazel for the root of the workspace containing `cwd`.
    fn workspace_root(&self, cwd: &Path) -> BazkitResult<PathBuf> {
        let info = CommandSpec::new(&self.toolchain.bazel)
            .args(["info", "workspace"])
            .current_dir(cwd)
            .captured();
        let not_in_workspace = || ApplicationError::NotInWorkspace {
            path: cwd.to_path_buf(),
        };

        let output = match run_checked(self.runner.as_ref(), Step::WorkspaceInfo, &info) {
            Ok(output) => output,
            Err(BazkitError::Application(ApplicationError::CommandFailed { .. })) => {
                return Err(not_in_workspace().into());
            }
            Err(e) => return Err(e),
        };
        let reported = output.stdout.trim();
        if reported.is_empty() {
            return Err(not_in_workspace().into());
        }
        self.filesystem.canonicalize(Path::new(reported))
    }

    /// Resolve a bare target name to the labels that carry it.
    fn resolve_target(&self, cwd: &Path, name: &str) -> BazkitResult<Vec<String>> {
        let query = CommandSpec::new(&self.toolchain.bazel)
            .arg("query")
            .arg(target_query(name))
            .arg("--output=label")
            .current_dir(cwd)
            .captured();
        let output = run_checked(self.runner.as_ref(), Step::QueryTarget, &query)?;

        let labels: Vec<String> = output
            .stdout
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect();
        if labels.is_empty() {
            return Err(ApplicationError::TargetNotFound {
                name: name.to_string(),
            }
            .into());
        }
        info!(name, labels = labels.len(), "Resolved target");
        Ok(labels)
    }

    fn bazel_build(&self, cwd: &Path, patterns: &[String]) -> BazkitResult<()> {
        let build = CommandSpec::new(&self.toolchain.bazel)
            .arg("build")
            .args(patterns.iter().cloned())
            .current_dir(cwd);
        run_checked(self.runner.as_ref(), Step::Build, &build)?;
        Ok(())
    }
}
