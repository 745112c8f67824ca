//! Infrastructure adapters for bazkit.
//!
//! This crate implements the ports defined in `bazkit-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod filesystem;
pub mod host;
pub mod locator;
pub mod process;
pub mod renderer;
pub mod template_loader;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use locator::{StaticLocator, WhichLocator};
pub use process::{RecordingRunner, SystemRunner};
pub use renderer::SimpleRenderer;
pub use template_loader::DirectoryTemplates;
pub use template_store::BuiltinTemplates;
