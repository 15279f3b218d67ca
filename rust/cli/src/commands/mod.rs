//! Command handler modules for the keno CLI.
//!
//! Each command lives in its own module with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers specific to that command
//! - Output streams (`&mut dyn Write`) passed in as parameters
//! - Errors propagated via the `CliError` enum

mod cfg;
mod draw;
mod paytable;
mod play;
mod sim;
mod stats;

pub use cfg::handle_cfg_command;
pub use draw::handle_draw_command;
pub use paytable::handle_paytable_command;
pub use play::{PlayArgs, handle_play_command};
pub use sim::{SimArgs, handle_sim_command};
pub use stats::handle_stats_command;

use crate::error::CliError;
use keno_engine::paytable::Preset;

/// Resolves an optional `--preset` flag, falling back to `default`.
pub(crate) fn resolve_preset(flag: Option<&str>, default: Preset) -> Result<Preset, CliError> {
    match flag {
        Some(name) => Preset::from_name(name).map_err(|e| CliError::InvalidInput(e.to_string())),
        None => Ok(default),
    }
}

pub(crate) fn load_config() -> Result<crate::config::Config, CliError> {
    crate::config::load().map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))
}
