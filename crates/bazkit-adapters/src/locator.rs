//! Tool lookup adapters.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::debug;

use bazkit_core::application::ports::ToolLocator;

/// Looks tools up on `PATH` with the `which` crate. Absolute and relative
/// paths are checked directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhichLocator;

impl WhichLocator {
    pub fn new() -> Self {
        Self
    }
}

impl ToolLocator for WhichLocator {
    fn locate(&self, tool: &str) -> Option<PathBuf> {
        match which::which(tool) {
            Ok(path) => Some(path),
            Err(e) => {
                debug!(tool, error = %e, "Not found");
                None
            }
        }
    }
}

/// Fixed answers, for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticLocator {
    tools: HashMap<String, PathBuf>,
}

impl StaticLocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tool(mut self, tool: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.tools.insert(tool.into(), path.into());
        self
    }
}

impl ToolLocator for StaticLocator {
    fn locate(&self, tool: &str) -> Option<PathBuf> {
        self.tools.get(tool).cloned()
    }
}
