//! Unified error type for the sysled-lib crate.
//!
//! LED writes never return errors; [`SysledError`] covers everything that
//! does: color parsing, status reads and configuration handling.

use std::fmt;

/// Unified error type for sysled-lib operations.
#[derive(Debug)]
pub enum SysledError {
    /// Standard I/O error (attribute read, config persistence).
    Io(std::io::Error),
    /// Color name parsing error.
    Color(String),
    /// Configuration validation error.
    Config(String),
    /// Unexpected attribute contents.
    Parse(String),
}

impl fmt::Display for SysledError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SysledError::Io(e) => write!(f, "I/O error: {e}"),
            SysledError::Color(e) => write!(f, "Color error: {e}"),
            SysledError::Config(e) => write!(f, "Config error: {e}"),
            SysledError::Parse(e) => write!(f, "Parse error: {e}"),
        }
    }
}

impl std::error::Error for SysledError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SysledError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SysledError {
    fn from(e: std::io::Error) -> Self {
        SysledError::Io(e)
    }
}

/// Crate-level Result alias using [`SysledError`].
pub type Result<T> = std::result::Result<T, SysledError>;
