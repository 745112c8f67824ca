//! Host platform detection.

use bazkit_core::domain::Platform;
use tracing::debug;

const OS_RELEASE: &str = "/etc/os-release";

/// Identify the running host from the compile-time OS and, on Linux,
/// `/etc/os-release`.
pub fn detect_platform() -> Platform {
    let os = std::env::consts::OS;
    let release = if os == "linux" {
        std::fs::read_to_string(OS_RELEASE).ok()
    } else {
        None
    };
    let platform = Platform::identify(os, release.as_deref());
    debug!(platform = %platform.id, "Detected host platform");
    platform
}
