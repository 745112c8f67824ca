//! Skeleton Service - `skeleton create`.
//!
//! The workflow:
//! 1. Validate kind, variant and name; refuse an existing target directory
//! 2. Run the external generator (mobile kinds only)
//! 3. Render the layout and write it, skipping files that already exist
//! 4. Write the `BUILD.bazel` wiring the project into the workspace
//! 5. `git init` and a first commit (failures here only warn)

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandSpec, Filesystem, ProcessRunner, TemplateRenderer, TemplateStore},
        services::{
            materializer::Materializer,
            report::SkeletonReport,
            steps::{apply_policy, run_checked},
        },
        toolchain::Toolchain,
    },
    domain::{
        CONFIG_FILE, GENERATED_DESCRIPTOR, OrgConfig, ProjectName, RenderContext, SkeletonKind,
        Step, descriptor::skeleton_stub,
    },
    error::BazkitResult,
};

pub struct SkeletonService {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn ProcessRunner>,
    toolchain: Toolchain,
}

impl SkeletonService {
    pub fn new(
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
        runner: Box<dyn ProcessRunner>,
        toolchain: Toolchain,
    ) -> Self {
        Self {
            store,
            renderer,
            filesystem,
            runner,
            toolchain,
        }
    }

    /// Create `<cwd>/<name>` as a new skeleton of `kind`.
    #[instrument(skip_all, fields(kind = %kind, name = %name))]
    pub fn create(
        &self,
        cwd: &Path,
        kind: SkeletonKind,
        name: &str,
        variant: Option<&str>,
    ) -> BazkitResult<SkeletonReport> {
        let variant = kind.variant(variant)?;
        let name = ProjectName::parse(name)?;
        let root = cwd.join(name.as_str());

        if self.filesystem.exists(&root) {
            return Err(ApplicationError::ProjectExists { path: root }.into());
        }

        let org = self.read_org_config(cwd)?;
        info!(%variant, org = org.as_ref().map(OrgConfig::organization), "Creating skeleton");

        if let Some(args) = variant.generator_args(name.as_str()) {
            let generate = CommandSpec::new(&self.toolchain.npx)
                .args(args)
                .current_dir(cwd);
            run_checked(self.runner.as_ref(), Step::ExternalGenerator, &generate)?;
        }

        let layout = self.store.layout(variant)?;
        layout.validate()?;
        let context = RenderContext::new(&name, org.as_ref());
        let structure = self.renderer.render(&layout, &context, &root)?;
        structure.validate()?;

        let materializer = Materializer::new(self.filesystem.as_ref());
        let mut files = materializer.materialize(&structure)?;
        files.push(materializer.ensure_file(&root.join(GENERATED_DESCRIPTOR), || {
            Ok(skeleton_stub(variant, name.as_str()))
        })?);

        let mut warnings = Vec::new();
        let committed = self.initialize_repository(&root, &mut warnings)?;

        info!(files = files.len(), committed, "Skeleton ready");
        Ok(SkeletonReport {
            root,
            kind,
            variant,
            files,
            committed,
            warnings,
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

    /// `git init`, then stage everything and commit. Returns whether the
    /// commit was made; failures are recorded in `warnings`.
    fn initialize_repository(&self, root: &Path, warnings: &mut Vec<String>) -> BazkitResult<bool> {
        let git = |args: &[&str]| {
            CommandSpec::new(&self.toolchain.git)
                .args(args.iter().copied())
                .current_dir(root)
        };

        let init = run_checked(self.runner.as_ref(), Step::GitInit, &git(&["init"]));
        if apply_policy(Step::GitInit, init, warnings)?.is_none() {
            return Ok(false);
        }

        let commit = run_checked(self.runner.as_ref(), Step::GitCommit, &git(&["add", "-A"]))
            .and_then(|_| {
                run_checked(
                    self.runner.as_ref(),
                    Step::GitCommit,
                    &git(&["commit", "-m", self.toolchain.commit_message.as_str()]),
                )
            });
        Ok(apply_policy(Step::GitCommit, commit, warnings)?.is_some())
    }
}
