use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KenoError {
    #[error("Invalid draw range: count {count} must be between 1 and {max}")]
    InvalidDrawRange { count: u8, max: u8 },
    #[error("Unknown paytable preset: {0}")]
    UnknownPreset(String),
    #[error("Every card must have 1-10 picks")]
    InvalidCards,
    #[error("Insufficient bankroll: total bet {needed}, bankroll {available}")]
    InsufficientBankroll { needed: u64, available: u64 },
    #[error("Invalid bet per card: {bet} (allowed: 1, 2, 5, 10)")]
    InvalidBet { bet: u32 },
    #[error("Invalid card count: {count} (allowed: 1-8)")]
    InvalidCardCount { count: usize },
    #[error("Number {number} is outside the board (1-{max})")]
    NumberOutOfRange { number: u8, max: u8 },
    #[error("No card with id {0}")]
    UnknownCard(u32),
    #[error("No previous round to repeat")]
    NoPreviousRound,
}
