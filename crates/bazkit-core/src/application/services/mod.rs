//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level use cases: create a workspace, add dependencies to it, build
//! it, and generate project skeletons.

pub mod installer;
mod materializer;
pub mod report;
pub mod skeleton_service;
mod steps;
pub mod workspace_service;

pub use installer::Installer;
pub use report::{
    AddReport, BuildReport, CreateReport, DependencyReport, DescriptorOutcome, FileOutcome,
    FileReport, SkeletonReport, ToolReport,
};
pub use skeleton_service::SkeletonService;
pub use workspace_service::WorkspaceService;
