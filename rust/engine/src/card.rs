use serde::{Deserialize, Serialize};

/// Fewest picks a card may carry into a draw.
pub const MIN_PICKS: usize = 1;
/// Most picks a card may hold.
pub const MAX_PICKS: usize = 10;

/// A player's keno card: an id and the numbers picked on it.
///
/// Picks are kept unique and ascending by [`toggle_pick`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// 1-based id, unique within a round
    pub id: u32,
    /// Picked numbers in ascending order
    #[serde(default)]
    pub picks: Vec<u8>,
}

/// Where a card sits in its pick lifecycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CardState {
    /// No picks yet
    Empty,
    /// 1 to 9 picks
    Partial,
    /// Exactly 10 picks; only removals are accepted
    Full,
    /// More than 10 picks, only reachable through restored data
    Overfull,
}

impl Card {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            picks: Vec::new(),
        }
    }

    pub fn spot_count(&self) -> usize {
        self.picks.len()
    }

    pub fn has_pick(&self, number: u8) -> bool {
        self.picks.contains(&number)
    }

    pub fn is_valid(&self) -> bool {
        (MIN_PICKS..=MAX_PICKS).contains(&self.picks.len())
    }

    pub fn state(&self) -> CardState {
        match self.picks.len() {
            0 => CardState::Empty,
            n if n < MAX_PICKS => CardState::Partial,
            MAX_PICKS => CardState::Full,
            _ => CardState::Overfull,
        }
    }
}

/// Creates `count` empty cards with ids `1..=count`.
pub fn create_cards(count: usize) -> Vec<Card> {
    (1..=count as u32).map(Card::new).collect()
}

/// Returns a copy of `card` with `number` toggled.
///
/// A picked number is removed. An unpicked number is added in order, unless
/// the card already holds [`MAX_PICKS`] numbers, in which case the card comes
/// back unchanged. The number itself is not range-checked.
///
/// # Examples
///
/// ```
/// use keno_engine::card::{toggle_pick, Card};
///
/// let card = Card::new(1);
/// let card = toggle_pick(&card, 42);
/// let card = toggle_pick(&card, 7);
/// assert_eq!(card.picks, vec![7, 42]);
///
/// let card = toggle_pick(&card, 42);
/// assert_eq!(card.picks, vec![7]);
/// ```
pub fn toggle_pick(card: &Card, number: u8) -> Card {
    if let Some(pos) = card.picks.iter().position(|&p| p == number) {
        let mut picks = card.picks.clone();
        picks.remove(pos);
        return Card { id: card.id, picks };
    }

    if card.picks.len() >= MAX_PICKS {
        return card.clone();
    }

    let mut picks = card.picks.clone();
    picks.push(number);
    picks.sort_unstable();
    Card { id: card.id, picks }
}

/// True when every card holds between 1 and 10 picks. An empty slice passes.
pub fn are_cards_valid(cards: &[Card]) -> bool {
    cards.iter().all(Card::is_valid)
}

/// Grows or shrinks a card list to `count`.
///
/// Existing cards keep their picks; new cards are empty and continue the id
/// sequence.
pub fn resize_cards(cards: &[Card], count: usize) -> Vec<Card> {
    let mut next: Vec<Card> = cards.iter().take(count).cloned().collect();
    for id in (next.len() + 1)..=count {
        next.push(Card::new(id as u32));
    }
    next
}

pub fn clear_picks(cards: &[Card]) -> Vec<Card> {
    cards.iter().map(|c| Card::new(c.id)).collect()
}

/// Independent copies of `cards`; no pick list is shared with the source.
pub fn repeat_cards(cards: &[Card]) -> Vec<Card> {
    cards
        .iter()
        .map(|c| Card {
            id: c.id,
            picks: c.picks.to_vec(),
        })
        .collect()
}
