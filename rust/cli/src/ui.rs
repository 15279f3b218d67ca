//! UI helper functions for terminal output formatting.
//!
//! Consistent error and warning lines across commands.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Prompt shown before each interactive command
pub fn write_prompt(out: &mut dyn Write, bankroll: u64, total_bet: u64) -> std::io::Result<()> {
    write!(out, "[bankroll {} | bet {}] > ", bankroll, total_bet)?;
    out.flush()
}
