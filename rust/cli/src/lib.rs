//! # Keno CLI Library
//!
//! Command-line front end for the keno engine: interactive and automatic
//! play, bulk simulation, paytable inspection and round-log statistics.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["keno", "play", "--cards", "4", "--auto", "10"];
//! let code = keno_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play a session, interactively or with `--auto N`
//! - `sim`: Simulate many quick-pick rounds and report the return
//! - `stats`: Aggregate and check JSONL round logs
//! - `draw`: Draw one set of winning numbers
//! - `paytable`: Print a paytable preset
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
mod config;
mod error;
mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
mod macros;
pub mod state;
pub mod ui;
pub mod validation;

use cli::{Commands, KenoCli};
use commands::{
    PlayArgs, SimArgs, handle_cfg_command, handle_draw_command, handle_paytable_command,
    handle_play_command, handle_sim_command, handle_stats_command,
};

pub use error::{BatchValidationError, CliError};

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["keno", "draw", "--seed", "42"];
/// let code = keno_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "sim", "stats", "draw", "paytable", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match KenoCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Keno CLI");
            write_or_exit!(err, "Usage: keno <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: keno --help");
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out),
        Commands::Draw { count, max, seed } => handle_draw_command(count, max, seed, out),
        Commands::Paytable { preset } => handle_paytable_command(preset, out),
        Commands::Play {
            cards,
            bet,
            preset,
            state,
            output,
            auto,
        } => {
            let args = PlayArgs {
                cards,
                bet,
                preset,
                state,
                output,
                auto,
            };
            // Use stdin for real input (supports both TTY and piped stdin)
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(args, out, err, &mut stdin_lock)
        }
        Commands::Sim {
            rounds,
            spots,
            cards,
            bet,
            preset,
            seed,
            output,
        } => handle_sim_command(
            SimArgs {
                rounds,
                spots,
                cards,
                bet,
                preset,
                seed,
                output,
            },
            out,
            err,
        ),
        Commands::Stats { input } => handle_stats_command(input, out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
