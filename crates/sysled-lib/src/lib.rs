//! sysled — steady and blinking status LEDs through the Linux LED class sysfs interface.

pub mod config;
pub mod error;
pub mod led;
pub mod sysfs;

pub use error::SysledError;
pub use led::{LedColor, LedController};

/// Turn `color` on or off under `/sys/class/leds`. Failures are logged only.
pub fn set_steady(color: LedColor, on: bool) {
    LedController::system().set_steady(color, on);
}

/// Blink `color` under `/sys/class/leds`, or stop it with `on == false`.
/// Failures are logged only.
pub fn set_blink(color: LedColor, on_time_ms: i32, off_time_ms: i32, on: bool) {
    LedController::system().set_blink(color, on_time_ms, off_time_ms, on);
}
