//! Icon installation
//!
//! The bundled icon wins. Without one, the extracted launcher tree is searched
//! for a known icon file name.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use super::file_ops::write_file_atomic;
use crate::error::InstallerError;

/// File names tried, in order, inside the install directory
pub const ICON_CANDIDATES: [&str; 3] = ["minecraft-launcher.png", "icon.png", "minecraft.png"];

const ICON_MODE: u32 = 0o644;

/// Where the installed icon came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSource {
    Bundled,
    Extracted(PathBuf),
}

/// First candidate icon present in `install_dir`
pub fn find_extracted_icon(install_dir: &Path) -> Option<PathBuf> {
    ICON_CANDIDATES
        .iter()
        .map(|name| install_dir.join(name))
        .find(|path| path.is_file())
}

/// Install the icon at `icon_file`; every failure maps to `IconInstallFailed`
pub(crate) fn install_icon(
    icon_file: &Path,
    bundled: Option<&[u8]>,
    install_dir: &Path,
) -> Result<IconSource, InstallerError> {
    if let Some(bytes) = bundled {
        info!("Installing embedded icon...");
        write_file_atomic(icon_file, bytes, ICON_MODE)
            .map_err(|e| InstallerError::IconInstallFailed(e.to_string()))?;
        return Ok(IconSource::Bundled);
    }

    let source = find_extracted_icon(install_dir).ok_or_else(|| {
        InstallerError::IconInstallFailed(
            "no icon found (neither embedded nor in extracted files)".to_string(),
        )
    })?;

    info!("Copying icon from: {}", source.display());
    let bytes = fs::read(&source).map_err(|e| {
        InstallerError::IconInstallFailed(format!("failed to read {}: {e}", source.display()))
    })?;
    write_file_atomic(icon_file, &bytes, ICON_MODE)
        .map_err(|e| InstallerError::IconInstallFailed(e.to_string()))?;

    Ok(IconSource::Extracted(source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_icon_is_preferred() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("icon.png"), b"extracted").unwrap();
        let icon_file = tmp.path().join("minecraft.png.out");

        let source = install_icon(&icon_file, Some(&b"bundled"[..]), tmp.path()).unwrap();

        assert_eq!(source, IconSource::Bundled);
        assert_eq!(fs::read(icon_file).unwrap(), b"bundled");
    }

    #[test]
    fn falls_back_to_first_candidate_in_order() {
        let install = tempfile::tempdir().unwrap();
        let icons = tempfile::tempdir().unwrap();
        fs::write(install.path().join("minecraft.png"), b"third").unwrap();
        fs::write(install.path().join("icon.png"), b"second").unwrap();
        let icon_file = icons.path().join("minecraft.png");

        let source = install_icon(&icon_file, None, install.path()).unwrap();

        assert_eq!(source, IconSource::Extracted(install.path().join("icon.png")));
        assert_eq!(fs::read(icon_file).unwrap(), b"second");
    }

    #[test]
    fn missing_icon_is_icon_install_failed() {
        let install = tempfile::tempdir().unwrap();
        let icons = tempfile::tempdir().unwrap();

        let err = install_icon(&icons.path().join("minecraft.png"), None, install.path()).unwrap_err();

        assert!(matches!(err, InstallerError::IconInstallFailed(_)));
        assert!(!err.is_fatal());
    }

    #[test]
    fn unwritable_destination_is_icon_install_failed() {
        let install = tempfile::tempdir().unwrap();
        let icon_file = install.path().join("no-such-dir").join("minecraft.png");

        let err = install_icon(&icon_file, Some(&b"png"[..]), install.path()).unwrap_err();
        assert!(matches!(err, InstallerError::IconInstallFailed(_)));
    }
}
