//! CLI subcommands — steady, blink, status, config.

mod blink;
mod config_cmd;
mod status;
mod steady;

use std::path::{Path, PathBuf};

use clap::{Subcommand, ValueEnum};
use serde::Serialize;

pub(super) use sysled_lib::config::Config;
pub(super) use sysled_lib::error::Result;
pub(super) use sysled_lib::led::{LedColor, LedController, LedStatus};
pub(super) use sysled_lib::sysfs::SysfsWriter;

const PADDING: usize = 2;

/// Options shared by every subcommand.
pub struct GlobalOpts {
    pub json: bool,
    pub config: Option<PathBuf>,
    pub root: Option<PathBuf>,
}

/// Compute alignment width for key-value output.
/// Top-level and indented values land in the same column, at least
/// PADDING spaces after the longest key of either level.
pub(super) fn kv_width(top: &[&str], indent: &[&str]) -> usize {
    let top_need = top.iter().map(|k| k.len() + PADDING).max().unwrap_or(0);
    // Indented keys lose 2 columns to the "  " prefix
    let indent_need = indent
        .iter()
        .map(|k| k.len() + PADDING + 2)
        .max()
        .unwrap_or(0);
    top_need.max(indent_need)
}

pub(super) fn format_kv(key: &str, value: impl std::fmt::Display, w: usize) -> String {
    format!("{key:<width$}{value}", width = w)
}

pub(super) fn format_kv_indent(key: &str, value: impl std::fmt::Display, w: usize) -> String {
    format!("  {key:<width$}{value}", width = w.saturating_sub(2))
}

pub(super) fn kv(key: &str, value: impl std::fmt::Display, w: usize) {
    println!("{}", format_kv(key, value, w));
}

pub(super) fn kv_indent(key: &str, value: impl std::fmt::Display, w: usize) {
    println!("{}", format_kv_indent(key, value, w));
}

/// Load config from `custom_path` if given, otherwise the platform default.
pub(super) fn load_config(custom_path: Option<&Path>) -> Config {
    match custom_path {
        Some(path) => {
            let (config, warnings) = Config::load_from(path);
            for w in &warnings {
                log::warn!("{w}");
            }
            config
        }
        None => Config::load(),
    }
}

/// Build a controller for the effective LED class root.
///
/// `--root` wins over the config; a config root is validated first.
pub(super) fn controller(opts: &GlobalOpts, config: &Config) -> Result<LedController<SysfsWriter>> {
    match &opts.root {
        Some(root) => Ok(LedController::with_root(root)),
        None => {
            config.check()?;
            Ok(LedController::with_root(config.sysfs_root.trim()))
        }
    }
}

// ── JSON output structs ──

#[derive(Serialize)]
pub(super) struct StatusEntryJson {
    pub color: LedColor,
    pub status: Option<LedStatus>,
    pub error: Option<String>,
}

#[derive(Serialize)]
pub(super) struct StatusOutput {
    pub root: String,
    pub leds: Vec<StatusEntryJson>,
}

#[derive(Serialize)]
pub(super) struct ConfigOutput {
    pub config_file: Option<String>,
    pub config_file_exists: bool,
    pub settings: Config,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Switch {
    On,
    Off,
}

impl Switch {
    pub fn is_on(self) -> bool {
        matches!(self, Switch::On)
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Turn an LED fully on or off
    Steady {
        /// LED color (red, green, blue)
        color: LedColor,
        /// Desired state
        #[arg(value_enum)]
        state: Switch,
    },

    /// Blink an LED with the kernel timer trigger
    Blink {
        /// LED color (red, green, blue)
        color: LedColor,
        /// Milliseconds on per cycle (default: from config)
        #[arg(long, allow_hyphen_values = true)]
        on_ms: Option<i32>,
        /// Milliseconds off per cycle (default: from config)
        #[arg(long, allow_hyphen_values = true)]
        off_ms: Option<i32>,
        /// Stop blinking (zeroes delay_on, leaves delay_off)
        #[arg(long)]
        stop: bool,
    },

    /// Show brightness, trigger and delays read back from sysfs
    Status {
        /// Only this color (default: all)
        color: Option<LedColor>,
    },

    /// Show current configuration and file path
    Config {
        /// Write a config file with default settings (`--root` becomes `sysfs_root`)
        #[arg(long)]
        init: bool,
        /// Overwrite an existing file with `--init`
        #[arg(long, requires = "init")]
        force: bool,
    },
}

/// Warn if `--json` was passed to a command that doesn't support it.
fn warn_json_unsupported(cmd_name: &str) {
    log::warn!("--json is not supported for `{cmd_name}` (ignored)");
}

pub fn run(cmd: Command, opts: &GlobalOpts) -> Result<()> {
    let config = load_config(opts.config.as_deref());
    match cmd {
        Command::Steady { color, state } => {
            if opts.json {
                warn_json_unsupported("steady");
            }
            steady::cmd_steady(&controller(opts, &config)?, color, state)
        }
        Command::Blink {
            color,
            on_ms,
            off_ms,
            stop,
        } => {
            if opts.json {
                warn_json_unsupported("blink");
            }
            let on_ms = on_ms.unwrap_or(config.blink_on_ms);
            let off_ms = off_ms.unwrap_or(config.blink_off_ms);
            blink::cmd_blink(&controller(opts, &config)?, color, on_ms, off_ms, stop)
        }
        Command::Status { color } => {
            status::cmd_status(&controller(opts, &config)?, color, opts.json)
        }
        Command::Config { init: true, force } => {
            if opts.json {
                warn_json_unsupported("config --init");
            }
            config_cmd::cmd_config_init(opts, force)
        }
        Command::Config { init: false, .. } => config_cmd::cmd_config(&config, opts),
    }
}
