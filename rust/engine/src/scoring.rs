use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::paytable::Paytable;

/// Outcome of one card against one draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardResult {
    pub card_id: u32,
    pub spots: usize,
    pub hits: usize,
    pub win: u64,
}

/// Membership view of a draw.
pub fn drawn_set(drawn: &[u8]) -> HashSet<u8> {
    drawn.iter().copied().collect()
}

/// Number of picks that appear in the draw.
///
/// ```
/// use keno_engine::scoring::{count_hits, drawn_set};
///
/// let drawn = drawn_set(&[2, 5, 10, 11, 12]);
/// assert_eq!(count_hits(&[1, 2, 3, 4, 5], &drawn), 2);
/// ```
pub fn count_hits(picks: &[u8], drawn: &HashSet<u8>) -> usize {
    picks.iter().filter(|p| drawn.contains(*p)).count()
}

/// Win for a card: the paytable multiplier for `(spot_count, hits)` times the
/// bet. Combinations the table does not list pay nothing.
///
/// ```
/// use keno_engine::paytable::Preset;
/// use keno_engine::scoring::get_card_win;
///
/// let fun = Preset::Fun.table();
/// assert_eq!(get_card_win(4, 3, 5, fun), 25);
/// assert_eq!(get_card_win(5, 2, 5, fun), 0);
/// ```
pub fn get_card_win(spot_count: usize, hits: usize, bet_per_card: u32, payouts: &Paytable) -> u64 {
    let multiplier = payouts.multiplier(spot_count, hits).unwrap_or(0);
    u64::from(multiplier) * u64::from(bet_per_card)
}

pub fn score_card(
    card: &Card,
    drawn: &HashSet<u8>,
    bet_per_card: u32,
    payouts: &Paytable,
) -> CardResult {
    let spots = card.spot_count();
    let hits = count_hits(&card.picks, drawn);
    CardResult {
        card_id: card.id,
        spots,
        hits,
        win: get_card_win(spots, hits, bet_per_card, payouts),
    }
}

/// Scores every card against the same draw.
pub fn score_cards(
    cards: &[Card],
    drawn: &[u8],
    bet_per_card: u32,
    payouts: &Paytable,
) -> Vec<CardResult> {
    let set = drawn_set(drawn);
    cards
        .iter()
        .map(|card| score_card(card, &set, bet_per_card, payouts))
        .collect()
}

pub fn total_win(results: &[CardResult]) -> u64 {
    results.iter().map(|r| r.win).sum()
}
