//! LED control — channel names, attribute paths, steady/blink writes, status reads.

mod color;
mod ops;
mod paths;
mod status;

pub use color::{LedColor, parse_color};
pub use ops::{BRIGHTNESS_OFF, BRIGHTNESS_ON, DELAY_STOPPED, LedController, TRIGGER_TIMER};
pub use paths::{
    ATTR_BRIGHTNESS, ATTR_DELAY_OFF, ATTR_DELAY_ON, ATTR_TRIGGER, DEFAULT_ROOT, LedPaths,
};
pub use status::{LedStatus, parse_active_trigger};
