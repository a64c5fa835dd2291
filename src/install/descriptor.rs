//! Desktop menu entry generation

use std::path::Path;

use log::info;

use super::file_ops::write_file_atomic;
use crate::error::InstallerError;
use crate::resources::{ICON_FILE_PLACEHOLDER, INSTALL_DIR_PLACEHOLDER};

const DESCRIPTOR_MODE: u32 = 0o644;

/// Substitute the install directory and icon path into `template`
///
/// Substitution is single pass: text coming from the paths is never scanned
/// for placeholders again.
pub fn render_descriptor(template: &str, install_dir: &Path, icon_file: &Path) -> String {
    let install_dir = install_dir.to_string_lossy();
    let icon_file = icon_file.to_string_lossy();

    let mut out = String::with_capacity(template.len() + install_dir.len() * 2 + icon_file.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        if let Some(after) = tail.strip_prefix(INSTALL_DIR_PLACEHOLDER) {
            out.push_str(&install_dir);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(ICON_FILE_PLACEHOLDER) {
            out.push_str(&icon_file);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);

    out
}

/// Render the template and write it to `descriptor_file`
pub(crate) fn write_descriptor(
    descriptor_file: &Path,
    template: &str,
    install_dir: &Path,
    icon_file: &Path,
) -> Result<(), InstallerError> {
    info!("Creating desktop file: {}", descriptor_file.display());
    let content = render_descriptor(template, install_dir, icon_file);
    write_file_atomic(descriptor_file, content.as_bytes(), DESCRIPTOR_MODE)
}
