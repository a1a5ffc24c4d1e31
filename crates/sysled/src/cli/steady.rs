//! `steady` subcommand — turn an LED fully on or off.

use super::{LedColor, LedController, Result, Switch, SysfsWriter};

/// Write failures are logged by the library; the command still succeeds.
pub(super) fn cmd_steady(
    ctl: &LedController<SysfsWriter>,
    color: LedColor,
    state: Switch,
) -> Result<()> {
    ctl.set_steady(color, state.is_on());
    log::info!(
        "{color}: steady {}",
        if state.is_on() { "on" } else { "off" }
    );
    Ok(())
}
