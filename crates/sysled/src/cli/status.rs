//! `status` subcommand — read back LED attributes from sysfs.

use super::{
    LedColor, LedController, Result, StatusEntryJson, StatusOutput, SysfsWriter, kv, kv_indent,
    kv_width,
};

/// Unreadable LEDs are reported per color; the command itself still succeeds.
pub(super) fn cmd_status(
    ctl: &LedController<SysfsWriter>,
    only: Option<LedColor>,
    json: bool,
) -> Result<()> {
    let colors: Vec<LedColor> = match only {
        Some(c) => vec![c],
        None => LedColor::ALL.to_vec(),
    };

    let entries: Vec<StatusEntryJson> = colors
        .into_iter()
        .map(|color| match ctl.status(color) {
            Ok(status) => StatusEntryJson {
                color,
                status: Some(status),
                error: None,
            },
            Err(e) => StatusEntryJson {
                color,
                status: None,
                error: Some(e.to_string()),
            },
        })
        .collect();

    if json {
        let output = StatusOutput {
            root: ctl.root().display().to_string(),
            leds: entries,
        };
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{s}"),
            Err(e) => return Err(std::io::Error::other(e).into()),
        }
        return Ok(());
    }

    let w = kv_width(&["Root:"], &["brightness:", "trigger:", "delay_off:", "error:"]);
    kv("Root:", ctl.root().display(), w);
    for entry in &entries {
        println!();
        println!("{}:", entry.color);
        match (&entry.status, &entry.error) {
            (Some(s), _) => {
                kv_indent("brightness:", s.brightness, w);
                kv_indent("trigger:", s.trigger.as_deref().unwrap_or("(unknown)"), w);
                if let Some(on) = s.delay_on {
                    kv_indent("delay_on:", format_args!("{on} ms"), w);
                }
                if let Some(off) = s.delay_off {
                    kv_indent("delay_off:", format_args!("{off} ms"), w);
                }
            }
            (None, Some(e)) => kv_indent("error:", e, w),
            (None, None) => kv_indent("error:", "(no data)", w),
        }
    }
    Ok(())
}
