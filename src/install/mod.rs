//! Installation orchestration
//!
//! A run walks through the stages in order:
//!
//! `EnsureDirectories → FetchAndExtract → InstallIcon → WriteDescriptor → Done`
//!
//! When the installation is already complete and `force` is not set, no stage
//! runs at all. Otherwise each stage still skips itself if its own output is
//! already present, so a partial installation is repaired without
//! re-downloading what is already there. Icon failures are reported as a
//! warning; every other failure aborts the run.

mod descriptor;
mod file_ops;
mod icon;

use std::fmt;
use std::path::PathBuf;

use log::{debug, info, warn};

use crate::config::InstallerConfig;
use crate::detection::{InstallationState, check_installation_state};
use crate::download::{ExtractSummary, Fetcher, download_and_extract};
use crate::error::InstallerError;
use crate::paths::InstallPaths;
use crate::resources::Resources;

pub use descriptor::render_descriptor;
pub use icon::{ICON_CANDIDATES, IconSource, find_extracted_icon};

/// Installation stages, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStage {
    EnsureDirectories,
    FetchAndExtract,
    InstallIcon,
    WriteDescriptor,
    Done,
}

impl InstallStage {
    fn next(self) -> Self {
        match self {
            InstallStage::EnsureDirectories => InstallStage::FetchAndExtract,
            InstallStage::FetchAndExtract => InstallStage::InstallIcon,
            InstallStage::InstallIcon => InstallStage::WriteDescriptor,
            InstallStage::WriteDescriptor | InstallStage::Done => InstallStage::Done,
        }
    }
}

impl fmt::Display for InstallStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InstallStage::EnsureDirectories => "ensure-directories",
            InstallStage::FetchAndExtract => "fetch-and-extract",
            InstallStage::InstallIcon => "install-icon",
            InstallStage::WriteDescriptor => "write-descriptor",
            InstallStage::Done => "done",
        };
        f.write_str(name)
    }
}

/// Result of the icon stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconStatus {
    Installed(IconSource),
    /// Icon already present and `force` not set
    Skipped,
    /// Non-fatal failure, carries the warning message
    Failed(String),
}

/// What a completed run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub created_directories: Vec<PathBuf>,
    /// `None` when the launcher was already extracted
    pub extracted: Option<ExtractSummary>,
    pub icon: IconStatus,
    pub descriptor_written: bool,
}

impl Default for InstallReport {
    fn default() -> Self {
        Self {
            created_directories: Vec::new(),
            extracted: None,
            icon: IconStatus::Skipped,
            descriptor_written: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Launcher and descriptor were present; nothing was touched
    AlreadyInstalled,
    Installed(InstallReport),
}

/// Per-user launcher installer
#[derive(Debug)]
pub struct Installer {
    paths: InstallPaths,
    config: InstallerConfig,
    resources: Resources,
    fetcher: Fetcher,
}

impl Installer {
    pub fn new(
        paths: InstallPaths,
        config: InstallerConfig,
        resources: Resources,
    ) -> Result<Self, InstallerError> {
        Ok(Self {
            paths,
            config,
            resources,
            fetcher: Fetcher::new()?,
        })
    }

    pub fn paths(&self) -> &InstallPaths {
        &self.paths
    }

    /// Run every stage that still has work to do
    pub async fn run(&self) -> Result<InstallOutcome, InstallerError> {
        let force = self.config.force;

        match check_installation_state(&self.paths) {
            InstallationState::FullyInstalled if !force => {
                info!("Minecraft launcher is already installed");
                return Ok(InstallOutcome::AlreadyInstalled);
            }
            InstallationState::FullyInstalled => info!("Forcing reinstallation"),
            InstallationState::PartiallyInstalled => {
                info!("Partial installation detected, completing it")
            }
            InstallationState::NotInstalled => debug!("No previous installation found"),
        }

        let mut report = InstallReport::default();
        let mut stage = InstallStage::EnsureDirectories;

        while stage != InstallStage::Done {
            debug!("Stage: {stage}");
            match stage {
                InstallStage::EnsureDirectories => {
                    report.created_directories = self.ensure_directories()?;
                }
                InstallStage::FetchAndExtract => {
                    report.extracted = self.fetch_and_extract().await?;
                }
                InstallStage::InstallIcon => {
                    report.icon = self.install_icon();
                }
                InstallStage::WriteDescriptor => {
                    report.descriptor_written = self.write_descriptor()?;
                }
                InstallStage::Done => {}
            }
            stage = stage.next();
        }

        Ok(InstallOutcome::Installed(report))
    }

    fn ensure_directories(&self) -> Result<Vec<PathBuf>, InstallerError> {
        let mut created = Vec::new();
        for dir in self.paths.directories() {
            if file_ops::ensure_dir(dir)? {
                info!("Created directory: {}", dir.display());
                created.push(dir.to_path_buf());
            }
        }
        Ok(created)
    }

    async fn fetch_and_extract(&self) -> Result<Option<ExtractSummary>, InstallerError> {
        if !self.config.force && self.paths.launcher_executable().exists() {
            info!("Launcher already downloaded and extracted (skipping)");
            return Ok(None);
        }

        let summary = download_and_extract(
            &self.fetcher,
            &self.config.download_url,
            &self.config.temp_dir,
            &self.paths.install_dir,
        )
        .await?;

        info!(
            "Extracted {} files, {} directories, {} symlinks ({} skipped)",
            summary.files, summary.directories, summary.symlinks, summary.skipped_symlinks
        );
        Ok(Some(summary))
    }

    fn install_icon(&self) -> IconStatus {
        if !self.config.force && self.paths.icon_file.exists() {
            info!("Icon already installed (skipping)");
            return IconStatus::Skipped;
        }

        match icon::install_icon(
            &self.paths.icon_file,
            self.resources.icon.as_deref(),
            &self.paths.install_dir,
        ) {
            Ok(source) => IconStatus::Installed(source),
            Err(e) => {
                warn!("{e}");
                IconStatus::Failed(e.to_string())
            }
        }
    }

    fn write_descriptor(&self) -> Result<bool, InstallerError> {
        if !self.config.force && self.paths.descriptor_file.exists() {
            info!("Desktop file already exists (skipping)");
            return Ok(false);
        }

        descriptor::write_descriptor(
            &self.paths.descriptor_file,
            &self.resources.descriptor_template,
            &self.paths.install_dir,
            &self.paths.icon_file,
        )?;
        Ok(true)
    }
}
