//! Template store serving the compiled-in layouts.

use bazkit_core::{
    application::ports::TemplateStore,
    domain::{SkeletonLayout, SkeletonVariant},
    error::BazkitResult,
};

use crate::builtin_templates;

/// Store backed by [`builtin_templates`]. Every variant has a layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for BuiltinTemplates {
    fn layout(&self, variant: SkeletonVariant) -> BazkitResult<SkeletonLayout> {
        Ok(builtin_templates::layout(variant))
    }
}
