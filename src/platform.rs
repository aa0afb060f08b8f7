//! Platform families and their window icon files.
//!
//! Only three families are recognized. Anything else gets no icon.

use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
}

impl Platform {
    /// Maps an OS identifier as reported by `std::env::consts::OS`.
    pub fn from_os(id: &str) -> Option<Self> {
        match id {
            "windows" => Some(Self::Windows),
            "macos" => Some(Self::MacOs),
            "linux" => Some(Self::Linux),
            _ => None,
        }
    }

    pub fn current() -> Option<Self> {
        Self::from_os(std::env::consts::OS)
    }

    /// Icon file for this family, relative to the app's resource directory.
    pub fn icon_path(self) -> &'static str {
        match self {
            Self::Windows => "icons/icon.ico",
            Self::MacOs => "icons/icon.icns",
            Self::Linux => "icons/icon.png",
        }
    }
}

pub fn icon_for_os(id: &str) -> Option<PathBuf> {
    Platform::from_os(id).map(|platform| PathBuf::from(platform.icon_path()))
}
