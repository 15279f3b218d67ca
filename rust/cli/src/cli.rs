//! Command-line definitions for the `keno` binary.

use clap::{Parser, Subcommand};
use keno_engine::draw::{DRAW_COUNT, TOTAL_NUMBERS};

#[derive(Parser, Debug)]
#[command(name = "keno", version, about = "Multi-card keno rules engine")]
pub struct KenoCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the resolved configuration and where each value came from
    Cfg,
    /// Draw one set of winning numbers
    Draw {
        #[arg(long, default_value_t = DRAW_COUNT)]
        count: u8,
        #[arg(long, default_value_t = TOTAL_NUMBERS)]
        max: u8,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print a paytable preset with its expected return
    Paytable {
        #[arg(long)]
        preset: Option<String>,
    },
    /// Play a keno session
    Play {
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=8))]
        cards: Option<u8>,
        #[arg(long)]
        bet: Option<u32>,
        #[arg(long)]
        preset: Option<String>,
        /// Load and save session state at this path
        #[arg(long)]
        state: Option<String>,
        /// Append round records (JSONL) to this path
        #[arg(long)]
        output: Option<String>,
        /// Quick-pick and draw this many rounds without prompting
        #[arg(long)]
        auto: Option<u32>,
    },
    /// Simulate many quick-pick rounds
    Sim {
        #[arg(long)]
        rounds: u32,
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u8).range(1..=10))]
        spots: u8,
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=8))]
        cards: Option<u8>,
        #[arg(long)]
        bet: Option<u32>,
        #[arg(long)]
        preset: Option<String>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        output: Option<String>,
    },
    /// Summarize a round log
    Stats {
        #[arg(long)]
        input: String,
    },
}
