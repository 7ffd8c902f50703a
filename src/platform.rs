use serde::{Deserialize, Serialize};
use std::env::consts;

/// Operating system this launcher is running on. Resolved once at startup
/// and drives how the blender executable gets discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformTarget {
    Windows,
    Linux,
    Unsupported,
}

impl PlatformTarget {
    /// Detect the target from the host operating system.
    pub fn from_host() -> Self {
        Self::from_os(consts::OS)
    }

    fn from_os(os: &str) -> Self {
        match os {
            "windows" => PlatformTarget::Windows,
            "linux" => PlatformTarget::Linux,
            _ => PlatformTarget::Unsupported,
        }
    }
}
