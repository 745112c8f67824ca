//! Command handlers, one module per top-level subcommand.

pub mod completions;
pub mod config;
pub mod skeleton;
pub mod workspace;
