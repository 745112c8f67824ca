//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `bazkit-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `ProcessRunner`: Subprocesses (bazel, git, npx, package managers)
//!   - `ToolLocator`: PATH lookup
//!   - `TemplateStore`: Skeleton layouts
//!   - `TemplateRenderer`: Placeholder substitution
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{
    CommandOutput, CommandSpec, Filesystem, ProcessRunner, TemplateRenderer, TemplateStore,
    ToolLocator,
};
