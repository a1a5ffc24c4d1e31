//! Application configuration — TOML-based, platform-aware paths.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::led::DEFAULT_ROOT;

/// Header comment prepended to saved config files.
const CONFIG_HEADER: &str = "# sysled configuration\n\n";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// LED class directory holding one subdirectory per color. Default: "/sys/class/leds".
    #[serde(default = "default_sysfs_root")]
    pub sysfs_root: String,

    /// Default blink on-time in milliseconds.
    #[serde(default = "default_blink_ms")]
    pub blink_on_ms: i32,

    /// Default blink off-time in milliseconds.
    #[serde(default = "default_blink_ms")]
    pub blink_off_ms: i32,
}

fn default_sysfs_root() -> String {
    DEFAULT_ROOT.into()
}
fn default_blink_ms() -> i32 {
    500
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sysfs_root: default_sysfs_root(),
            blink_on_ms: default_blink_ms(),
            blink_off_ms: default_blink_ms(),
        }
    }
}

/// Validation errors that [`Config::validate`] can return.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// `sysfs_root` is empty or whitespace-only.
    EmptyRoot,
    /// `sysfs_root` is not an absolute path.
    RelativeRoot(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyRoot => write!(f, "sysfs_root cannot be empty"),
            ValidationError::RelativeRoot(p) => {
                write!(f, "sysfs_root must be an absolute path, got \"{p}\"")
            }
        }
    }
}

impl Config {
    /// Platform-specific config directory.
    pub fn dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sysled"))
    }

    /// Full path to config file.
    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|d| d.join("config.toml"))
    }

    /// Load config from disk, or return defaults if not found.
    pub fn load() -> Self {
        let (config, warnings) = Self::load_with_warnings();
        for w in &warnings {
            log::warn!("{w}");
        }
        config
    }

    /// Load config from an arbitrary path, returning the config and any parse warnings.
    ///
    /// Returns `(defaults, [])` if the file doesn't exist.
    /// Returns `(defaults, [warning])` if the file exists but can't be parsed.
    pub fn load_from(path: &Path) -> (Self, Vec<String>) {
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => (config, vec![]),
                Err(e) => {
                    let warning = format!(
                        "config parse error ({}), using defaults: {e}",
                        path.display()
                    );
                    (Self::default(), vec![warning])
                }
            },
            Err(_) => (Self::default(), vec![]),
        }
    }

    /// Load config from the default path, returning the config and any parse warnings.
    pub fn load_with_warnings() -> (Self, Vec<String>) {
        let Some(path) = Self::path() else {
            return (Self::default(), vec![]);
        };
        Self::load_from(&path)
    }

    /// Write the config to `path`, creating parent directories.
    ///
    /// Goes through a sibling `.toml.tmp` file and a rename, so a concurrent
    /// reader sees either the old file or the new one.
    pub fn save_to(&self, path: &Path) -> crate::error::Result<()> {
        let body = toml::to_string_pretty(self)
            .map_err(|e| crate::SysledError::Config(format!("cannot serialize config: {e}")))?;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let tmp = path.with_extension("toml.tmp");
        std::fs::write(&tmp, format!("{CONFIG_HEADER}{body}"))?;
        if let Err(e) = std::fs::rename(&tmp, path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(e.into());
        }
        log::info!("saved config to {}", path.display());
        Ok(())
    }

    /// Write the config to the platform path and return that path.
    pub fn save(&self) -> crate::error::Result<PathBuf> {
        let path = Self::path()
            .ok_or_else(|| crate::SysledError::Config("no config directory".into()))?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Validate the config, collecting all errors.
    ///
    /// Blink delays are deliberately unchecked; they are written as given.
    pub fn validate(&self) -> std::result::Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        let root = self.sysfs_root.trim();
        if root.is_empty() {
            errors.push(ValidationError::EmptyRoot);
        } else if !Path::new(root).is_absolute() {
            errors.push(ValidationError::RelativeRoot(root.to_string()));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// `validate`, folded into a single crate error.
    pub fn check(&self) -> crate::error::Result<()> {
        self.validate().map_err(|errors| {
            let joined: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            crate::SysledError::Config(joined.join("; "))
        })
    }
}
