use std::collections::VecDeque;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::card::{
    are_cards_valid, clear_picks, create_cards, repeat_cards, resize_cards, toggle_pick, Card,
};
use crate::draw::{Drawer, TOTAL_NUMBERS};
use crate::errors::KenoError;
use crate::logger::{CardRecord, RoundRecord};
use crate::paytable::Preset;
use crate::scoring::{score_cards, total_win, CardResult};

/// Allowed number of cards per round.
pub const CARD_COUNT_RANGE: RangeInclusive<usize> = 1..=8;
/// Allowed bets per card.
pub const BET_OPTIONS: [u32; 4] = [1, 2, 5, 10];
/// Rounds kept in [`KenoSession::history`].
pub const HISTORY_LIMIT: usize = 20;
/// Bankroll a fresh session starts with.
pub const STARTING_BANKROLL: u64 = 1000;

/// What happened in one drawn round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// 1-based round number within the session
    pub round: u64,
    pub preset: Preset,
    pub bet_per_card: u32,
    pub drawn: Vec<u8>,
    /// Cards as they were when the draw happened
    pub cards: Vec<Card>,
    pub results: Vec<CardResult>,
    pub total_bet: u64,
    pub total_win: u64,
    pub bankroll_after: u64,
}

impl RoundSummary {
    pub fn to_record(&self, round_id: String, seed: Option<u64>) -> RoundRecord {
        let cards = self
            .cards
            .iter()
            .zip(&self.results)
            .map(|(card, result)| CardRecord::new(&card.picks, result))
            .collect();
        RoundRecord {
            round_id,
            seed,
            preset: self.preset,
            bet_per_card: self.bet_per_card,
            drawn: self.drawn.clone(),
            cards,
            total_bet: self.total_bet,
            total_win: self.total_win,
            ts: None,
        }
    }
}

fn default_bankroll() -> u64 {
    STARTING_BANKROLL
}

fn default_card_count() -> usize {
    1
}

fn default_bet() -> u32 {
    1
}

/// Saved session state. Missing fields load as their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    #[serde(default = "default_bankroll")]
    pub bankroll: u64,
    #[serde(default = "default_card_count")]
    pub card_count: usize,
    #[serde(default = "default_bet")]
    pub bet_per_card: u32,
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(default)]
    pub preset: Preset,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            bankroll: STARTING_BANKROLL,
            card_count: default_card_count(),
            bet_per_card: default_bet(),
            cards: create_cards(default_card_count()),
            preset: Preset::Fun,
        }
    }
}

/// A player's running keno session: bankroll, cards, bet, paytable and the
/// rounds drawn so far.
///
/// # Examples
///
/// ```
/// use keno_engine::session::KenoSession;
///
/// let mut session = KenoSession::new(Some(7), 1000);
/// assert!(!session.can_draw());
///
/// session.quick_pick_all();
/// let round = session.draw().unwrap();
/// assert_eq!(round.drawn.len(), 20);
/// assert_eq!(session.bankroll(), 1000 - round.total_bet + round.total_win);
/// ```
#[derive(Debug)]
pub struct KenoSession {
    drawer: Drawer,
    bankroll: u64,
    bet_per_card: u32,
    preset: Preset,
    cards: Vec<Card>,
    drawn: Vec<u8>,
    last_results: Vec<CardResult>,
    last_round_cards: Option<Vec<Card>>,
    history: VecDeque<RoundSummary>,
    rounds_played: u64,
}

impl KenoSession {
    pub fn new(seed: Option<u64>, bankroll: u64) -> Self {
        Self::with_drawer(Drawer::new(seed), bankroll)
    }

    pub fn with_drawer(drawer: Drawer, bankroll: u64) -> Self {
        Self {
            drawer,
            bankroll,
            bet_per_card: default_bet(),
            preset: Preset::Fun,
            cards: create_cards(default_card_count()),
            drawn: Vec::new(),
            last_results: Vec::new(),
            last_round_cards: None,
            history: VecDeque::with_capacity(HISTORY_LIMIT),
            rounds_played: 0,
        }
    }

    /// Rebuilds a session from saved state, replacing anything out of bounds
    /// with its default.
    pub fn restore(snapshot: SessionSnapshot, drawer: Drawer) -> Self {
        let mut session = Self::with_drawer(drawer, snapshot.bankroll);

        if BET_OPTIONS.contains(&snapshot.bet_per_card) {
            session.bet_per_card = snapshot.bet_per_card;
        } else {
            warn!(bet = snapshot.bet_per_card, "saved bet not allowed, using default");
        }

        let count = if CARD_COUNT_RANGE.contains(&snapshot.card_count) {
            snapshot.card_count
        } else {
            warn!(
                count = snapshot.card_count,
                "saved card count out of range, using default"
            );
            default_card_count()
        };

        let cards: Vec<Card> = snapshot
            .cards
            .iter()
            .enumerate()
            .map(|(i, card)| Card {
                id: i as u32 + 1,
                picks: normalize_picks(&card.picks),
            })
            .collect();
        session.cards = resize_cards(&cards, count);
        session.preset = snapshot.preset;
        session
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            bankroll: self.bankroll,
            card_count: self.cards.len(),
            bet_per_card: self.bet_per_card,
            cards: self.cards.clone(),
            preset: self.preset,
        }
    }

    pub fn bankroll(&self) -> u64 {
        self.bankroll
    }
    pub fn bet_per_card(&self) -> u32 {
        self.bet_per_card
    }
    pub fn preset(&self) -> Preset {
        self.preset
    }
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }
    pub fn drawn(&self) -> &[u8] {
        &self.drawn
    }
    pub fn last_results(&self) -> &[CardResult] {
        &self.last_results
    }
    pub fn result_for(&self, card_id: u32) -> Option<&CardResult> {
        self.last_results.iter().find(|r| r.card_id == card_id)
    }
    /// Most recent round first.
    pub fn history(&self) -> impl Iterator<Item = &RoundSummary> {
        self.history.iter()
    }
    pub fn rounds_played(&self) -> u64 {
        self.rounds_played
    }
    pub fn seed(&self) -> Option<u64> {
        self.drawer.seed()
    }

    pub fn set_card_count(&mut self, count: usize) -> Result<(), KenoError> {
        if !CARD_COUNT_RANGE.contains(&count) {
            return Err(KenoError::InvalidCardCount { count });
        }
        if count != self.cards.len() {
            debug!(from = self.cards.len(), to = count, "resizing cards");
            self.cards = resize_cards(&self.cards, count);
        }
        Ok(())
    }

    pub fn set_bet_per_card(&mut self, bet: u32) -> Result<(), KenoError> {
        if !BET_OPTIONS.contains(&bet) {
            return Err(KenoError::InvalidBet { bet });
        }
        self.bet_per_card = bet;
        Ok(())
    }

    pub fn set_preset(&mut self, preset: Preset) {
        self.preset = preset;
    }

    /// Toggles `number` on card `card_id`. A pick beyond the tenth is ignored.
    pub fn toggle_pick(&mut self, card_id: u32, number: u8) -> Result<&Card, KenoError> {
        if !(1..=TOTAL_NUMBERS).contains(&number) {
            return Err(KenoError::NumberOutOfRange {
                number,
                max: TOTAL_NUMBERS,
            });
        }
        let card = self
            .cards
            .iter_mut()
            .find(|c| c.id == card_id)
            .ok_or(KenoError::UnknownCard(card_id))?;
        *card = toggle_pick(card, number);
        debug!(card_id, number, spots = card.spot_count(), "toggled pick");
        Ok(card)
    }

    /// Gives every card its own fresh 10-number quick pick.
    pub fn quick_pick_all(&mut self) {
        for card in &mut self.cards {
            card.picks = self.drawer.quick_pick();
        }
    }

    pub fn clear_all(&mut self) {
        self.cards = clear_picks(&self.cards);
    }

    /// Restores the cards played in the previous round.
    pub fn repeat_last_round(&mut self) -> Result<(), KenoError> {
        let last = self
            .last_round_cards
            .as_ref()
            .ok_or(KenoError::NoPreviousRound)?;
        self.cards = repeat_cards(last);
        Ok(())
    }

    pub fn total_bet(&self) -> u64 {
        self.cards.len() as u64 * u64::from(self.bet_per_card)
    }

    /// Why a draw cannot happen right now, if anything stops it.
    pub fn draw_blocker(&self) -> Option<KenoError> {
        if !are_cards_valid(&self.cards) {
            return Some(KenoError::InvalidCards);
        }
        let needed = self.total_bet();
        if self.bankroll < needed {
            return Some(KenoError::InsufficientBankroll {
                needed,
                available: self.bankroll,
            });
        }
        None
    }

    pub fn can_draw(&self) -> bool {
        self.draw_blocker().is_none()
    }

    /// Draws once and settles every card against that draw.
    pub fn draw(&mut self) -> Result<RoundSummary, KenoError> {
        if let Some(blocker) = self.draw_blocker() {
            debug!(reason = %blocker, "draw blocked");
            return Err(blocker);
        }

        let total_bet = self.total_bet();
        let drawn = self.drawer.draw();
        let results = score_cards(&self.cards, &drawn, self.bet_per_card, self.preset.table());
        let total_win = total_win(&results);

        self.bankroll = self
            .bankroll
            .saturating_sub(total_bet)
            .saturating_add(total_win);
        self.rounds_played += 1;

        let summary = RoundSummary {
            round: self.rounds_played,
            preset: self.preset,
            bet_per_card: self.bet_per_card,
            drawn: drawn.clone(),
            cards: repeat_cards(&self.cards),
            results: results.clone(),
            total_bet,
            total_win,
            bankroll_after: self.bankroll,
        };

        self.drawn = drawn;
        self.last_results = results;
        self.last_round_cards = Some(repeat_cards(&self.cards));
        self.history.push_front(summary.clone());
        self.history.truncate(HISTORY_LIMIT);

        info!(
            round = summary.round,
            total_bet,
            total_win,
            bankroll = self.bankroll,
            "round drawn"
        );
        Ok(summary)
    }
}

// Drops numbers off the board, then sorts and dedups.
fn normalize_picks(picks: &[u8]) -> Vec<u8> {
    let mut out: Vec<u8> = picks
        .iter()
        .copied()
        .filter(|n| (1..=TOTAL_NUMBERS).contains(n))
        .collect();
    out.sort_unstable();
    out.dedup();
    out
}
