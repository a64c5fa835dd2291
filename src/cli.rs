//! CLI argument parsing for mc-installer

use clap::Parser;

const AFTER_HELP: &str = "\
Install locations (per user):
  ~/opt/minecraft-launcher                      launcher files
  ~/.local/share/icons/minecraft.png            icon
  ~/.local/share/applications/minecraft.desktop menu entry

Environment:
  MC_INSTALLER_URL     download from an alternate mirror
  MC_INSTALLER_TMPDIR  directory for the temporary download
  RUST_LOG             log filter (default: info)";

/// Command-line arguments for mc-installer
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "mc-installer",
    about = "Install the Minecraft launcher for the current user",
    disable_version_flag = true,
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Reinstall even if the launcher is already installed
    #[arg(long)]
    pub force: bool,

    /// Print version, git commit and build date
    #[arg(long, short = 'V')]
    pub version: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
