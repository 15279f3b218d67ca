//! # keno-engine: Multi-Card Keno Rules Engine
//!
//! Draws winning numbers, tracks the picks on each card and settles every
//! card against a configurable paytable.
//!
//! ## Core Modules
//!
//! - [`draw`] - Unbiased 20-of-80 draws and quick picks from a CSPRNG
//! - [`card`] - Card pick state and the toggle/validity rules
//! - [`scoring`] - Hit counting and payout lookup
//! - [`paytable`] - The named paytable presets
//! - [`odds`] - Hit probabilities and expected return per spot count
//! - [`session`] - Bankroll, bet, card count and round history
//! - [`logger`] - RoundRecord serialization to JSONL
//! - [`errors`] - Error types for session operations
//!
//! ## Quick Start
//!
//! ```rust
//! use keno_engine::card::{toggle_pick, Card};
//! use keno_engine::paytable::Preset;
//! use keno_engine::scoring::{count_hits, drawn_set, get_card_win};
//!
//! let mut card = Card::new(1);
//! for n in [1, 2, 3, 4] {
//!     card = toggle_pick(&card, n);
//! }
//!
//! let drawn = drawn_set(&[1, 2, 3, 20, 21]);
//! let hits = count_hits(&card.picks, &drawn);
//! let win = get_card_win(card.spot_count(), hits, 5, Preset::Fun.table());
//! assert_eq!((hits, win), (3, 25));
//! ```
//!
//! ## Fair Draws
//!
//! Draws shuffle the whole board with indices from a cryptographic generator
//! and keep the first `count` numbers:
//!
//! ```rust
//! use keno_engine::draw::generate_draw_numbers;
//!
//! let drawn = generate_draw_numbers(20, 80).unwrap();
//! assert!(drawn.iter().all(|n| (1..=80).contains(n)));
//! ```

pub mod card;
pub mod draw;
pub mod errors;
pub mod logger;
pub mod odds;
pub mod paytable;
pub mod scoring;
pub mod session;
