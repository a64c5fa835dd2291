//! Per-user installation layout
//!
//! Everything lives under the user's home directory:
//! - `~/opt/minecraft-launcher/` - extracted launcher
//! - `~/.local/share/applications/minecraft.desktop` - menu entry
//! - `~/.local/share/icons/minecraft.png` - icon

use std::path::{Path, PathBuf};

use crate::error::InstallerError;

/// Name of the launcher executable inside the install directory
pub const LAUNCHER_EXECUTABLE: &str = "minecraft-launcher";

const DESCRIPTOR_FILE_NAME: &str = "minecraft.desktop";
const ICON_FILE_NAME: &str = "minecraft.png";

/// Filesystem locations used by an installation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPaths {
    pub home: PathBuf,
    pub install_dir: PathBuf,
    pub descriptor_dir: PathBuf,
    pub icon_dir: PathBuf,
    pub descriptor_file: PathBuf,
    pub icon_file: PathBuf,
}

impl InstallPaths {
    /// Resolve the layout from the current user's home directory
    pub fn resolve() -> Result<Self, InstallerError> {
        dirs::home_dir()
            .map(Self::from_home)
            .ok_or(InstallerError::HomeDirectoryUnavailable)
    }

    /// Build the layout rooted at an explicit home directory
    pub fn from_home(home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        let install_dir = home.join("opt").join("minecraft-launcher");
        let share_dir = home.join(".local").join("share");
        let descriptor_dir = share_dir.join("applications");
        let icon_dir = share_dir.join("icons");

        Self {
            descriptor_file: descriptor_dir.join(DESCRIPTOR_FILE_NAME),
            icon_file: icon_dir.join(ICON_FILE_NAME),
            home,
            install_dir,
            descriptor_dir,
            icon_dir,
        }
    }

    /// Path of the launcher executable once extracted
    pub fn launcher_executable(&self) -> PathBuf {
        self.install_dir.join(LAUNCHER_EXECUTABLE)
    }

    /// Directories that must exist before anything is written
    pub fn directories(&self) -> [&Path; 3] {
        [&self.install_dir, &self.descriptor_dir, &self.icon_dir]
    }
}
