//! Launcher tarball extraction
//!
//! The launcher tarball wraps everything in a single top-level directory
//! (`minecraft-launcher/...`). That component is stripped so the contents land
//! directly in the install directory. Every entry is resolved lexically against
//! the destination and rejected if it would end up outside of it.

use std::borrow::Cow;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Component, Path, PathBuf};

use flate2::read::GzDecoder;
use log::{debug, warn};
use tar::{Archive, EntryType};

use crate::error::InstallerError;

/// Mode for parent directories the archive does not list itself
const DEFAULT_DIR_MODE: u32 = 0o755;
/// setuid/setgid/sticky bits are never applied
const PERMISSION_MASK: u32 = 0o777;

/// Counts of what an extraction materialized
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExtractSummary {
    pub directories: usize,
    pub files: usize,
    pub symlinks: usize,
    pub skipped_symlinks: usize,
    pub ignored: usize,
}

/// Extract a gzip-compressed tarball into `dest`, stripping the top-level directory
///
/// The stream is read forward once, through the gzip trailer, so a bad
/// checksum is reported even after every entry was written. Traversal
/// attempts, corrupt input and failed writes abort the extraction; symlinks
/// that cannot be created are logged and skipped. Nothing is rolled back on
/// failure.
pub fn extract_tar_gz<R: Read>(reader: R, dest: &Path) -> Result<ExtractSummary, InstallerError> {
    let mut archive = Archive::new(GzDecoder::new(reader));
    let entries = archive
        .entries()
        .map_err(|e| InstallerError::InvalidArchive(e.to_string()))?;

    let mut summary = ExtractSummary::default();

    for entry in entries {
        let mut entry = entry
            .map_err(|e| InstallerError::InvalidArchive(format!("failed to read entry: {e}")))?;

        let raw_name = entry.path_bytes().into_owned();
        let name = String::from_utf8_lossy(&raw_name).into_owned();
        let Some(relative) = strip_top_level(&raw_name) else {
            continue;
        };
        let relative = entry_path(relative);

        let target = resolve_target(dest, &relative).ok_or_else(|| InstallerError::PathTraversal {
            entry: name.clone(),
        })?;
        if target == dest {
            continue;
        }
        ensure_no_symlink_ancestor(dest, &target, &name)?;

        let entry_type = entry.header().entry_type();
        let mode = entry
            .header()
            .mode()
            .map_err(|e| InstallerError::InvalidArchive(format!("bad mode for {name}: {e}")))?
            & PERMISSION_MASK;

        match entry_type {
            EntryType::Directory => {
                create_dir_with_mode(&target, mode)?;
                summary.directories += 1;
            }
            EntryType::Regular => {
                write_entry_file(&mut entry, &name, &target, mode)?;
                debug!("Extracted: {}", relative.display());
                summary.files += 1;
            }
            EntryType::Symlink => {
                let link_target = entry.link_name().ok().flatten().map(|p| p.into_owned());
                match create_symlink(link_target.as_deref(), &target) {
                    Ok(()) => summary.symlinks += 1,
                    Err(e) => {
                        let err = InstallerError::SymlinkCreateFailed {
                            path: target.clone(),
                            target: link_target.unwrap_or_default(),
                            reason: e.to_string(),
                        };
                        warn!("Symlink skipped: {} ({err})", relative.display());
                        summary.skipped_symlinks += 1;
                    }
                }
            }
            other => {
                debug!("Ignoring {other:?} entry: {}", relative.display());
                summary.ignored += 1;
            }
        }
    }

    // tar stops at the end-of-archive blocks; drain the rest so the gzip
    // trailer (CRC32 and size) is verified.
    io::copy(&mut archive.into_inner(), &mut io::sink())
        .map_err(|e| InstallerError::InvalidArchive(format!("corrupt gzip trailer: {e}")))?;

    Ok(summary)
}

/// Drop the first path component; `None` for the top-level entry itself
fn strip_top_level(name: &[u8]) -> Option<&[u8]> {
    let slash = name.iter().position(|&b| b == b'/')?;
    Some(&name[slash + 1..]).filter(|rest| !rest.is_empty())
}

/// Entry name bytes as a path, unchanged on unix
#[cfg(unix)]
fn entry_path(bytes: &[u8]) -> Cow<'_, Path> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(Path::new(std::ffi::OsStr::from_bytes(bytes)))
}

#[cfg(not(unix))]
fn entry_path(bytes: &[u8]) -> Cow<'_, Path> {
    Cow::Owned(PathBuf::from(String::from_utf8_lossy(bytes).into_owned()))
}

/// Join `relative` onto `dest` lexically, refusing anything that climbs out
///
/// Leading separators are treated as relative, so `top//etc/x` lands in
/// `dest/etc/x`. Containment is checked per component, not per byte.
fn resolve_target(dest: &Path, relative: &Path) -> Option<PathBuf> {
    let mut target = dest.to_path_buf();
    let mut depth = 0usize;

    for component in relative.components() {
        match component {
            Component::Normal(part) => {
                target.push(part);
                depth += 1;
            }
            Component::CurDir | Component::RootDir => {}
            Component::ParentDir => {
                if depth == 0 {
                    return None;
                }
                target.pop();
                depth -= 1;
            }
            Component::Prefix(_) => return None,
        }
    }

    target.starts_with(dest).then_some(target)
}

/// Reject targets whose parent chain under `dest` runs through a symlink
fn ensure_no_symlink_ancestor(dest: &Path, target: &Path, name: &str) -> Result<(), InstallerError> {
    let Some(parent) = target.parent() else {
        return Ok(());
    };

    for ancestor in parent.ancestors().take_while(|a| *a != dest) {
        if fs::symlink_metadata(ancestor).is_ok_and(|m| m.file_type().is_symlink()) {
            return Err(InstallerError::PathTraversal {
                entry: name.to_string(),
            });
        }
    }
    Ok(())
}

fn create_dir_with_mode(path: &Path, mode: u32) -> Result<(), InstallerError> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    builder
        .create(path)
        .map_err(|e| InstallerError::dir_create(path, e))
}

fn write_entry_file(
    entry: &mut impl Read,
    name: &str,
    target: &Path,
    mode: u32,
) -> Result<(), InstallerError> {
    if let Some(parent) = target.parent() {
        create_dir_with_mode(parent, DEFAULT_DIR_MODE)?;
    }

    // Unlink first: a running launcher cannot be truncated (ETXTBSY), and a
    // stale symlink at this path must not be followed.
    match fs::symlink_metadata(target) {
        Ok(meta) if !meta.is_dir() => {
            fs::remove_file(target).map_err(|e| InstallerError::file_write(target, e))?;
        }
        _ => {}
    }

    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }

    let mut file = options
        .open(target)
        .map_err(|e| InstallerError::file_write(target, e))?;
    copy_entry_data(entry, &mut file, name, target)?;

    // The open mode is filtered by the umask; apply the archive's bits exactly.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(target, fs::Permissions::from_mode(mode))
            .map_err(|e| InstallerError::file_write(target, e))?;
    }
    #[cfg(not(unix))]
    let _ = mode;

    Ok(())
}

/// Copy entry bytes into `file`, blaming the archive for read errors and the
/// destination for write errors
fn copy_entry_data(
    entry: &mut impl Read,
    file: &mut fs::File,
    name: &str,
    target: &Path,
) -> Result<u64, InstallerError> {
    let mut buf = vec![0u8; 64 * 1024];
    let mut copied = 0u64;

    loop {
        let n = match entry.read(&mut buf) {
            Ok(0) => return Ok(copied),
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(InstallerError::InvalidArchive(format!("failed to read {name}: {e}")));
            }
        };
        file.write_all(&buf[..n])
            .map_err(|e| InstallerError::file_write(target, e))?;
        copied += n as u64;
    }
}

fn create_symlink(link_target: Option<&Path>, path: &Path) -> io::Result<()> {
    let link_target = link_target
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "symlink entry has no target"))?;

    #[cfg(unix)]
    {
        std::os::unix::fs::symlink(link_target, path)
    }

    #[cfg(not(unix))]
    {
        let _ = (link_target, path);
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "symlinks are only created on unix",
        ))
    }
}
