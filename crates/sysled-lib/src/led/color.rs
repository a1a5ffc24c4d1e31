//! LED channel names.
//!
//! Each channel is a directory of the same name under the LED class root.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// One of the three status LED channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LedColor {
    Red,
    Green,
    Blue,
}

impl LedColor {
    /// Every channel, in red, green, blue order.
    pub const ALL: [LedColor; 3] = [LedColor::Red, LedColor::Green, LedColor::Blue];

    /// Directory name of this channel under the LED class root.
    pub fn name(self) -> &'static str {
        match self {
            LedColor::Red => "red",
            LedColor::Green => "green",
            LedColor::Blue => "blue",
        }
    }
}

impl fmt::Display for LedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a channel name. Case-insensitive, surrounding whitespace ignored.
pub fn parse_color(s: &str) -> crate::error::Result<LedColor> {
    match s.trim().to_lowercase().as_str() {
        "red" => Ok(LedColor::Red),
        "green" => Ok(LedColor::Green),
        "blue" => Ok(LedColor::Blue),
        _ => Err(crate::SysledError::Color(format!(
            "Unknown LED color: {} (use red, green or blue)",
            s.trim()
        ))),
    }
}

impl FromStr for LedColor {
    type Err = crate::SysledError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}
