//! Configuration command handler.
//!
//! Prints the resolved configuration as JSON, each key with its value and
//! source (default, file or env).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "starting_bankroll": {
//!     "value": 1000,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources()
        .map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?;

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "starting_bankroll": {
            "value": config.starting_bankroll,
            "source": sources.starting_bankroll,
        },
        "cards": {
            "value": config.cards,
            "source": sources.cards,
        },
        "bet_per_card": {
            "value": config.bet_per_card,
            "source": sources.bet_per_card,
        },
        "preset": {
            "value": config.preset,
            "source": sources.preset,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
