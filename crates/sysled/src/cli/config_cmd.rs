//! `config` subcommand — show current configuration and file path, or write defaults.

use sysled_lib::SysledError;

use super::{Config, ConfigOutput, GlobalOpts, Result, kv, kv_indent, kv_width};

pub(super) fn cmd_config(config: &Config, opts: &GlobalOpts) -> Result<()> {
    let config_path = opts.config.clone().or_else(Config::path);
    let config_exists = config_path.as_ref().is_some_and(|p| p.exists());

    if opts.json {
        let output = ConfigOutput {
            config_file: config_path.as_ref().map(|p| p.display().to_string()),
            config_file_exists: config_exists,
            settings: config.clone(),
        };
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{s}"),
            Err(e) => return Err(std::io::Error::other(e).into()),
        }
        return Ok(());
    }

    let w = kv_width(
        &["Config file:", "--root:"],
        &["sysfs_root:", "blink_on_ms:", "blink_off_ms:"],
    );

    match &config_path {
        Some(p) if config_exists => kv("Config file:", format_args!("{} (loaded)", p.display()), w),
        Some(p) => kv(
            "Config file:",
            format_args!("{} (not found, using defaults)", p.display()),
            w,
        ),
        None => kv("Config file:", "(no config directory)", w),
    }
    println!();

    println!("Settings:");
    let root_display = match config.validate() {
        Ok(()) => config.sysfs_root.clone(),
        Err(_) => format!("{} (invalid)", config.sysfs_root),
    };
    kv_indent("sysfs_root:", root_display, w);
    kv_indent("blink_on_ms:", config.blink_on_ms, w);
    kv_indent("blink_off_ms:", config.blink_off_ms, w);
    if let Some(root) = &opts.root {
        println!();
        kv("--root:", format_args!("{} (overrides sysfs_root)", root.display()), w);
    }
    Ok(())
}

/// Write a default config to `--config` (or the platform path).
///
/// An existing file is only replaced with `force`.
pub(super) fn cmd_config_init(opts: &GlobalOpts, force: bool) -> Result<()> {
    let mut config = Config::default();
    if let Some(root) = &opts.root {
        config.sysfs_root = root.display().to_string();
    }
    config.check()?;

    let target = opts.config.clone().or_else(Config::path);
    if let Some(path) = &target
        && path.exists()
        && !force
    {
        return Err(SysledError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    let written = match &opts.config {
        Some(path) => {
            config.save_to(path)?;
            path.clone()
        }
        None => config.save()?,
    };
    println!("Wrote {}", written.display());
    Ok(())
}
