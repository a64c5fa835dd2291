//! Installation state detection
//!
//! An installation is considered complete when both markers exist:
//! - the launcher executable inside the install directory
//! - the desktop descriptor file
//!
//! Detection is existence-only. A truncated or half-extracted launcher that
//! still has both markers is reported as installed; `--force` repairs it.

use crate::paths::InstallPaths;

/// Installation state enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallationState {
    /// Neither marker found
    NotInstalled,
    /// Exactly one marker found (interrupted run or manual cleanup)
    PartiallyInstalled,
    /// Launcher and descriptor both present
    FullyInstalled,
}

/// Check current installation state by looking for both markers
pub fn check_installation_state(paths: &InstallPaths) -> InstallationState {
    let launcher_ok = paths.launcher_executable().exists();
    let descriptor_ok = paths.descriptor_file.exists();

    match (launcher_ok, descriptor_ok) {
        (true, true) => InstallationState::FullyInstalled,
        (false, false) => InstallationState::NotInstalled,
        _ => InstallationState::PartiallyInstalled,
    }
}

/// True iff a previous run left a complete installation behind
pub fn is_installed(paths: &InstallPaths) -> bool {
    check_installation_state(paths) == InstallationState::FullyInstalled
}
