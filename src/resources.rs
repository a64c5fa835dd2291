//! Resources compiled into the installer binary

use std::borrow::Cow;

static BUNDLED_ICON: &[u8] = include_bytes!("../assets/minecraft-icon.png");
static BUNDLED_DESCRIPTOR_TEMPLATE: &str = include_str!("../assets/minecraft.desktop.tmpl");

/// Placeholder replaced with the install directory
pub const INSTALL_DIR_PLACEHOLDER: &str = "{install_dir}";
/// Placeholder replaced with the icon file path
pub const ICON_FILE_PLACEHOLDER: &str = "{icon_file}";

/// Read-only icon and descriptor template handed to the installer
#[derive(Debug, Clone)]
pub struct Resources {
    /// `None` makes the installer look for an icon inside the extracted tree
    pub icon: Option<Cow<'static, [u8]>>,
    pub descriptor_template: Cow<'static, str>,
}

impl Resources {
    /// Resources embedded at build time
    pub fn bundled() -> Self {
        Self {
            icon: (!BUNDLED_ICON.is_empty()).then_some(Cow::Borrowed(BUNDLED_ICON)),
            descriptor_template: Cow::Borrowed(BUNDLED_DESCRIPTOR_TEMPLATE),
        }
    }

    pub fn new(icon: Option<Vec<u8>>, descriptor_template: impl Into<String>) -> Self {
        Self {
            icon: icon.filter(|bytes| !bytes.is_empty()).map(Cow::Owned),
            descriptor_template: Cow::Owned(descriptor_template.into()),
        }
    }
}
