//! LED operations — steady on/off and timer-triggered blinking.
//!
//! Writes are fire-and-forget: a failed attribute write is logged and the
//! call returns normally. Callers cannot observe whether the LED changed.

use std::path::{Path, PathBuf};

use crate::sysfs::{AttributeWriter, SysfsWriter};

use super::color::LedColor;
use super::paths::{DEFAULT_ROOT, LedPaths};

pub const BRIGHTNESS_ON: &str = "255";
pub const BRIGHTNESS_OFF: &str = "0";
pub const TRIGGER_TIMER: &str = "timer";
/// Written to `delay_on` when blinking is switched off.
pub const DELAY_STOPPED: &str = "0";

/// Translates (color, state) requests into attribute writes under one LED
/// class root. Holds no LED state between calls.
#[derive(Debug, Clone)]
pub struct LedController<W> {
    root: PathBuf,
    writer: W,
}

impl LedController<SysfsWriter> {
    /// Controller for the real `/sys/class/leds` tree.
    pub fn system() -> Self {
        Self::new(DEFAULT_ROOT, SysfsWriter)
    }

    /// Controller writing to the real filesystem under `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self::new(root, SysfsWriter)
    }
}

impl<W: AttributeWriter> LedController<W> {
    pub fn new(root: impl Into<PathBuf>, writer: W) -> Self {
        LedController {
            root: root.into(),
            writer,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Attribute paths of `color` under this controller's root.
    pub fn paths(&self, color: LedColor) -> LedPaths {
        LedPaths::new(&self.root, color)
    }

    /// Turn `color` fully on (`"255"`) or off (`"0"`) via its brightness file.
    pub fn set_steady(&self, color: LedColor, on: bool) {
        let paths = self.paths(color);
        let value = if on { BRIGHTNESS_ON } else { BRIGHTNESS_OFF };
        self.write_file(&paths.brightness, value);
    }

    /// Blink `color` with the kernel timer trigger.
    ///
    /// With `on == false` the trigger is still set to `timer` and `delay_on`
    /// is zeroed; `delay_off` is left as it was. Delays are written verbatim,
    /// negative values included.
    pub fn set_blink(&self, color: LedColor, on_time_ms: i32, off_time_ms: i32, on: bool) {
        let paths = self.paths(color);

        if !on {
            self.write_file(&paths.trigger, TRIGGER_TIMER);
            self.write_file(&paths.delay_on, DELAY_STOPPED);
            return;
        }

        self.write_file(&paths.trigger, TRIGGER_TIMER);
        self.write_file(&paths.delay_on, &on_time_ms.to_string());
        self.write_file(&paths.delay_off, &off_time_ms.to_string());
    }

    fn write_file(&self, path: &Path, content: &str) {
        match self.writer.write_attr(path, content) {
            Ok(()) => log::debug!("wrote {content:?} to {}", path.display()),
            Err(e) => log::warn!("failed to write {content:?} to {}: {e}", path.display()),
        }
    }
}
