//! Per-user Minecraft launcher installer
//!
//! Downloads the official launcher tarball, extracts it under
//! `~/opt/minecraft-launcher`, installs an icon and writes a desktop menu
//! entry. Re-running is cheap: a complete installation is detected and left
//! alone unless `force` is set.

pub mod build_info;
pub mod cli;
pub mod config;
pub mod detection;
pub mod download;
pub mod error;
pub mod install;
pub mod paths;
pub mod resources;
pub mod runners;

pub use config::InstallerConfig;
pub use detection::{InstallationState, check_installation_state, is_installed};
pub use error::InstallerError;
pub use install::{IconSource, IconStatus, InstallOutcome, InstallReport, InstallStage, Installer};
pub use paths::InstallPaths;
pub use resources::Resources;
