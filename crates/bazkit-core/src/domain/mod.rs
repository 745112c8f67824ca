// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for bazkit.
//!
//! This module contains pure logic with ZERO I/O. Filesystem access and
//! subprocesses are reached only through the ports in the application
//! layer.
//!
//! - **Manifest & config record**: the two marker files at a workspace root,
//!   parsed into explicit structs and rendered back
//! - **Dependency specs**: `owner/repo` identifiers and their references
//! - **Descriptors**: build-file detection and minimal `BUILD.bazel` stubs
//! - **Skeletons**: kinds, variants, names and placeholder substitution
//! - **Policy**: which steps are fatal and which only warn
pub mod build_request;
pub mod descriptor;
pub mod dependency;
pub mod error;
pub mod manifest;
pub mod org_config;
pub mod platform;
pub mod policy;
pub mod project_structure;
pub mod skeleton;
pub mod template;

// Re-exports for convenience
pub use build_request::BuildRequest;
pub use dependency::DependencySpec;
pub use descriptor::{BUILD_DESCRIPTORS, DependencyKind, GENERATED_DESCRIPTOR};
pub use error::{DomainError, ErrorCategory};
pub use manifest::{LocalRepository, WORKSPACE_FILE, WorkspaceManifest};
pub use org_config::{CONFIG_FILE, OrgConfig};
pub use platform::{PackageManager, Platform};
pub use policy::{ErrorPolicy, Step};
pub use project_structure::{FileToWrite, ProjectStructure};
pub use skeleton::{ProjectName, SkeletonKind, SkeletonVariant};
pub use template::{RenderContext, SkeletonLayout, TemplateFile};
