//! Build metadata reported by `--version`

use std::io::{self, Write};

/// Version, commit and build date captured at compile time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub git_commit: &'static str,
    pub build_date: &'static str,
}

impl BuildInfo {
    /// Metadata baked in by `build.rs`
    pub const fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            git_commit: env!("MC_INSTALLER_GIT_COMMIT"),
            build_date: env!("MC_INSTALLER_BUILD_DATE"),
        }
    }

    pub fn write_report(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "mc-installer version {}", self.version)?;
        writeln!(out, "Git commit: {}", self.git_commit)?;
        writeln!(out, "Build date: {}", self.build_date)
    }
}
