//! Simple variable substitution renderer.

use std::path::Path;

use bazkit_core::{
    application::ports::TemplateRenderer,
    domain::{ProjectStructure, RenderContext, SkeletonLayout},
    error::BazkitResult,
};
use tracing::instrument;

/// Renderer using plain token substitution in both paths and contents.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRenderer;

impl SimpleRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(variant = %layout.variant))]
    fn render(
        &self,
        layout: &SkeletonLayout,
        context: &RenderContext,
        output_root: &Path,
    ) -> BazkitResult<ProjectStructure> {
        layout.validate()?;

        let mut structure = ProjectStructure::new(output_root);
        for file in &layout.files {
            structure.add_file(
                context.render(&file.path),
                context.render(&file.content),
                file.executable,
            );
        }

        structure.validate()?;
        Ok(structure)
    }
}
