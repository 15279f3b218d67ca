//! Paytable command handler.

use crate::commands::{load_config, resolve_preset};
use crate::error::CliError;
use crate::formatters::format_paytable;
use std::io::Write;

/// Print one preset, or the configured preset when none is named.
pub fn handle_paytable_command(preset: Option<String>, out: &mut dyn Write) -> Result<(), CliError> {
    let default = load_config()?.preset;
    let preset = resolve_preset(preset.as_deref(), default)?;
    writeln!(out, "{}", format_paytable(preset))?;
    Ok(())
}
