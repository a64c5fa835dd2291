//! Installer error taxonomy
//!
//! Every fallible installer operation returns [`InstallerError`]. Most variants
//! abort the run; [`InstallerError::IconInstallFailed`] and
//! [`InstallerError::SymlinkCreateFailed`] are reported and skipped.

use std::io;
use std::path::PathBuf;

/// Errors raised while installing the launcher
#[derive(Debug, thiserror::Error)]
pub enum InstallerError {
    #[error("failed to determine home directory")]
    HomeDirectoryUnavailable,

    #[error("failed to create directory {}: {source}", path.display())]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("download of {url} failed: {reason}")]
    DownloadFailed { url: String, reason: String },

    #[error("invalid archive: {0}")]
    InvalidArchive(String),

    #[error("archive entry escapes the destination directory: {entry}")]
    PathTraversal { entry: String },

    #[error("failed to write {}: {source}", path.display())]
    FileWriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not install icon: {0}")]
    IconInstallFailed(String),

    #[error("failed to create symlink {} -> {}: {reason}", path.display(), target.display())]
    SymlinkCreateFailed {
        path: PathBuf,
        target: PathBuf,
        reason: String,
    },
}

impl InstallerError {
    /// Whether this error aborts the installation run
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            InstallerError::IconInstallFailed(_) | InstallerError::SymlinkCreateFailed { .. }
        )
    }

    pub(crate) fn dir_create(path: impl Into<PathBuf>, source: io::Error) -> Self {
        InstallerError::DirectoryCreationFailed {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn file_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        InstallerError::FileWriteFailed {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn download(url: &str, reason: impl std::fmt::Display) -> Self {
        InstallerError::DownloadFailed {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}
