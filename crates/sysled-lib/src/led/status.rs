//! Read back what the kernel currently reports for an LED channel.

use std::path::Path;

use serde::Serialize;

use crate::SysledError;
use crate::error::Result;
use crate::sysfs::AttributeWriter;

use super::color::LedColor;
use super::ops::LedController;

/// Snapshot of one LED's attributes, as read from sysfs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedStatus {
    pub color: LedColor,
    pub brightness: u32,
    /// Active trigger, e.g. `"timer"` or `"none"`.
    pub trigger: Option<String>,
    /// Only present while the timer trigger is active.
    pub delay_on: Option<u32>,
    pub delay_off: Option<u32>,
}

/// Extract the active trigger from a trigger attribute such as
/// `"none [timer] heartbeat"`. Returns `None` when nothing is bracketed.
pub fn parse_active_trigger(raw: &str) -> Option<String> {
    raw.split_whitespace().find_map(|t| {
        t.strip_prefix('[')
            .and_then(|t| t.strip_suffix(']'))
            .map(str::to_string)
    })
}

fn parse_number(attr: &str, raw: &str) -> Result<u32> {
    let value = raw.trim();
    value
        .parse::<u32>()
        .map_err(|_| SysledError::Parse(format!("{attr}: expected a number, got {value:?}")))
}

impl<W: AttributeWriter> LedController<W> {
    /// Read brightness, trigger and (when present) blink delays of `color`.
    pub fn status(&self, color: LedColor) -> Result<LedStatus> {
        let paths = self.paths(color);

        let brightness = parse_number("brightness", &self.writer().read_attr(&paths.brightness)?)?;
        let trigger = match self.writer().read_attr(&paths.trigger) {
            Ok(raw) => parse_active_trigger(&raw),
            Err(e) => {
                log::debug!("{}: {e}", paths.trigger.display());
                None
            }
        };

        Ok(LedStatus {
            color,
            brightness,
            trigger,
            delay_on: self.read_optional("delay_on", &paths.delay_on)?,
            delay_off: self.read_optional("delay_off", &paths.delay_off)?,
        })
    }

    fn read_optional(&self, attr: &str, path: &Path) -> Result<Option<u32>> {
        match self.writer().read_attr(path) {
            Ok(raw) => parse_number(attr, &raw).map(Some),
            Err(e) => {
                log::debug!("{}: {e}", path.display());
                Ok(None)
            }
        }
    }
}
