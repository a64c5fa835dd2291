//! Installer configuration
//!
//! Defaults target the official launcher tarball. Two environment variables
//! override them for mirrors and sandboxes:
//! - `MC_INSTALLER_URL` - alternate download URL
//! - `MC_INSTALLER_TMPDIR` - directory for the temporary download

use std::path::PathBuf;

/// Official Minecraft launcher tarball
pub const DEFAULT_DOWNLOAD_URL: &str = "https://launcher.mojang.com/download/Minecraft.tar.gz";

pub const URL_ENV: &str = "MC_INSTALLER_URL";
pub const TMPDIR_ENV: &str = "MC_INSTALLER_TMPDIR";

/// Settings for one installation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallerConfig {
    pub download_url: String,
    pub temp_dir: PathBuf,
    /// Re-fetch, re-extract and rewrite even when already installed
    pub force: bool,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            download_url: DEFAULT_DOWNLOAD_URL.to_string(),
            temp_dir: std::env::temp_dir(),
            force: false,
        }
    }
}

impl InstallerConfig {
    /// Defaults with environment overrides applied
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup(URL_ENV).filter(|s| !s.trim().is_empty()) {
            config.download_url = url.trim().to_string();
        }
        if let Some(dir) = lookup(TMPDIR_ENV).filter(|s| !s.trim().is_empty()) {
            config.temp_dir = PathBuf::from(dir);
        }

        config
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_official_tarball() {
        let config = InstallerConfig::from_lookup(|_| None);
        assert_eq!(config.download_url, DEFAULT_DOWNLOAD_URL);
        assert_eq!(config.temp_dir, std::env::temp_dir());
        assert!(!config.force);
    }

    #[test]
    fn environment_overrides_url_and_tmpdir() {
        let config = InstallerConfig::from_lookup(|key| match key {
            URL_ENV => Some(" http://mirror.local/Minecraft.tar.gz ".to_string()),
            TMPDIR_ENV => Some("/var/tmp/mc".to_string()),
            _ => None,
        });
        assert_eq!(config.download_url, "http://mirror.local/Minecraft.tar.gz");
        assert_eq!(config.temp_dir, PathBuf::from("/var/tmp/mc"));
    }

    #[test]
    fn blank_overrides_are_ignored() {
        let config = InstallerConfig::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config, InstallerConfig::default());
    }

    #[test]
    fn with_force_sets_flag() {
        assert!(InstallerConfig::default().with_force(true).force);
    }
}
