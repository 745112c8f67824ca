//! Bazkit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for bazkit, a
//! tool that sets up Bazel monorepos, pulls dependencies into them and
//! generates project skeletons.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           bazkit-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (WorkspaceService, SkeletonService)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, ProcessRunner, Templates)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     bazkit-adapters (Infrastructure)    │
//! │ (LocalFilesystem, SystemRunner, etc)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (WorkspaceManifest, OrgConfig, Skeleton)│
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bazkit_core::prelude::*;
//!
//! # fn run(fs: Box<dyn Filesystem>, runner: Box<dyn ProcessRunner>, locator: Box<dyn ToolLocator>) -> BazkitResult<()> {
//! let service = WorkspaceService::new(fs, runner, locator, Toolchain::default());
//! service.build(std::path::Path::new("."), BuildRequest::All)?;
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        SkeletonService, Toolchain, WorkspaceService,
        ports::{
            CommandOutput, CommandSpec, Filesystem, ProcessRunner, TemplateRenderer,
            TemplateStore, ToolLocator,
        },
    };
    pub use crate::domain::{
        BuildRequest, DependencySpec, OrgConfig, Platform, ProjectName, ProjectStructure,
        RenderContext, SkeletonKind, SkeletonLayout, SkeletonVariant, TemplateFile,
        WorkspaceManifest,
    };
    pub use crate::error::{BazkitError, BazkitResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
