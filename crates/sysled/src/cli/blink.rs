//! `blink` subcommand — timer-triggered blinking.

use super::{LedColor, LedController, Result, SysfsWriter};

pub(super) fn cmd_blink(
    ctl: &LedController<SysfsWriter>,
    color: LedColor,
    on_ms: i32,
    off_ms: i32,
    stop: bool,
) -> Result<()> {
    ctl.set_blink(color, on_ms, off_ms, !stop);
    if stop {
        log::info!("{color}: blink stopped");
    } else {
        log::info!("{color}: blinking {on_ms} ms on / {off_ms} ms off");
    }
    Ok(())
}
