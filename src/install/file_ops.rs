//! Atomic file operations for the icon and desktop descriptor.
//!
//! Content is written to a sibling temp file, synced, and renamed over the
//! destination so a crash never leaves a half-written menu entry behind.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::InstallerError;

/// Write file atomically with the given permission bits
pub(crate) fn write_file_atomic(path: &Path, content: &[u8], mode: u32) -> Result<(), InstallerError> {
    let temp_path = temp_sibling(path);

    let result = write_and_sync(&temp_path, content, mode)
        .and_then(|()| fs::rename(&temp_path, path));

    if let Err(e) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(InstallerError::file_write(path, e));
    }

    Ok(())
}

fn write_and_sync(temp_path: &Path, content: &[u8], mode: u32) -> std::io::Result<()> {
    let mut file = fs::File::create(temp_path)?;
    file.write_all(content)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(mode))?;
    }
    #[cfg(not(unix))]
    let _ = mode;

    file.sync_all()
}

/// `name.ext` -> `.name.ext.tmp` in the same directory, so the rename stays on one filesystem
fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.tmp"))
}

/// Create `dir` (and parents) unless it already exists; returns whether it was created
pub(crate) fn ensure_dir(dir: &Path) -> Result<bool, InstallerError> {
    if dir.is_dir() {
        return Ok(false);
    }

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }

    builder
        .create(dir)
        .map_err(|e| InstallerError::dir_create(dir, e))?;
    Ok(true)
}
