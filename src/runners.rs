//! Top-level runners for the installer binary
//!
//! Console banners and the final summary go to stdout in colour; detailed
//! progress goes through `log`.

use std::io::Write;

use anyhow::{Context, Result};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::build_info::BuildInfo;
use crate::cli::Cli;
use crate::config::InstallerConfig;
use crate::install::{IconSource, IconStatus, InstallOutcome, InstallReport, Installer};
use crate::paths::InstallPaths;
use crate::resources::Resources;

fn color(fg: Color, bold: bool) -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(fg)).set_bold(bold);
    spec
}

/// Print the `--version` report
pub fn run_version(info: &BuildInfo) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    info.write_report(&mut stdout)
        .context("Failed to write version report")
}

/// Install the launcher for the current user
pub async fn run_install(cli: &Cli) -> Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let _ = stdout.set_color(&color(Color::Cyan, true));
    let _ = writeln!(stdout, "Minecraft Launcher Installation");
    let _ = stdout.reset();

    let paths = InstallPaths::resolve()?;
    let config = InstallerConfig::from_env().with_force(cli.force);

    let _ = writeln!(stdout, "   Install dir: {}", paths.install_dir.display());
    let _ = writeln!(stdout, "   Source:      {}\n", config.download_url);

    let installer = Installer::new(paths, config, Resources::bundled())
        .context("Failed to initialise installer")?;

    let outcome = installer
        .run()
        .await
        .context("Minecraft launcher installation failed")?;

    match outcome {
        InstallOutcome::AlreadyInstalled => {
            let _ = stdout.set_color(&color(Color::Green, true));
            let _ = writeln!(stdout, "✓ Minecraft launcher is already installed");
            let _ = stdout.reset();
            let _ = writeln!(stdout, "   Use --force to reinstall");
        }
        InstallOutcome::Installed(report) => {
            print_summary(&mut stdout, installer.paths(), &report);
        }
    }

    Ok(())
}

fn print_summary(stdout: &mut impl WriteColor, paths: &InstallPaths, report: &InstallReport) {
    if let Some(summary) = &report.extracted {
        let _ = stdout.set_color(&color(Color::Green, false));
        let _ = writeln!(
            stdout,
            "✓ Extracted {} files into {}",
            summary.files,
            paths.install_dir.display()
        );
        let _ = stdout.reset();
    }

    match &report.icon {
        IconStatus::Installed(IconSource::Bundled) => {
            let _ = writeln!(stdout, "✓ Icon: {}", paths.icon_file.display());
        }
        IconStatus::Installed(IconSource::Extracted(from)) => {
            let _ = writeln!(
                stdout,
                "✓ Icon: {} (from {})",
                paths.icon_file.display(),
                from.display()
            );
        }
        IconStatus::Skipped => {}
        IconStatus::Failed(reason) => {
            let _ = stdout.set_color(&color(Color::Yellow, false));
            let _ = writeln!(stdout, "⚠ {reason}");
            let _ = stdout.reset();
        }
    }

    if report.descriptor_written {
        let _ = writeln!(stdout, "✓ Menu entry: {}", paths.descriptor_file.display());
    }

    let _ = stdout.set_color(&color(Color::Green, true));
    let _ = writeln!(stdout, "\n✅ Minecraft launcher installed");
    let _ = stdout.reset();
    let _ = writeln!(
        stdout,
        "   You can now launch Minecraft from your application menu."
    );
    let _ = writeln!(
        stdout,
        "   Or run directly: {}",
        paths.launcher_executable().display()
    );
}

/// Print a fatal error chain to stderr
pub fn report_fatal(err: &anyhow::Error) {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    let _ = stderr.set_color(&color(Color::Red, true));
    let _ = writeln!(stderr, "Error: {err:#}");
    let _ = stderr.reset();
}
