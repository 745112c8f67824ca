//! Application layer for bazkit.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (WorkspaceService, SkeletonService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Toolchain**: Names of the external tools and how to call them
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;
pub mod toolchain;

// Re-export main services
pub use services::{SkeletonService, WorkspaceService};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, ProcessRunner, TemplateRenderer, TemplateStore, ToolLocator};

pub use error::ApplicationError;
pub use toolchain::Toolchain;
