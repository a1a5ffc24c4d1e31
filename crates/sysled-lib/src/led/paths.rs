//! Attribute file paths of the LED class driver.

use std::path::{Path, PathBuf};

use super::color::LedColor;

/// Default LED class root.
pub const DEFAULT_ROOT: &str = "/sys/class/leds";

pub const ATTR_BRIGHTNESS: &str = "brightness";
pub const ATTR_TRIGGER: &str = "trigger";
pub const ATTR_DELAY_ON: &str = "delay_on";
pub const ATTR_DELAY_OFF: &str = "delay_off";

/// The four attribute files of one LED channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedPaths {
    pub brightness: PathBuf,
    pub trigger: PathBuf,
    pub delay_on: PathBuf,
    pub delay_off: PathBuf,
}

impl LedPaths {
    /// Paths for `color` under the LED class `root`.
    pub fn new(root: &Path, color: LedColor) -> Self {
        let dir = root.join(color.name());
        LedPaths {
            brightness: dir.join(ATTR_BRIGHTNESS),
            trigger: dir.join(ATTR_TRIGGER),
            delay_on: dir.join(ATTR_DELAY_ON),
            delay_off: dir.join(ATTR_DELAY_OFF),
        }
    }

    /// Paths for `color` under [`DEFAULT_ROOT`].
    pub fn system(color: LedColor) -> Self {
        Self::new(Path::new(DEFAULT_ROOT), color)
    }
}
