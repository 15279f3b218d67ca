//! Text rendering for cards, draws, rounds and paytables.

use std::collections::HashSet;

use keno_engine::card::{Card, MAX_PICKS};
use keno_engine::draw::TOTAL_NUMBERS;
use keno_engine::odds::expected_return;
use keno_engine::paytable::Preset;
use keno_engine::scoring::CardResult;
use keno_engine::session::RoundSummary;

/// Comma-separated numbers, or `-` when there are none.
///
/// ```
/// # use keno_cli::formatters::format_numbers;
/// assert_eq!(format_numbers(&[3, 17, 80]), "3, 17, 80");
/// assert_eq!(format_numbers(&[]), "-");
/// ```
pub fn format_numbers(numbers: &[u8]) -> String {
    if numbers.is_empty() {
        return "-".to_string();
    }
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn format_card(card: &Card, result: Option<&CardResult>) -> String {
    let mut line = format!(
        "Card {} [{}/{}]: {}",
        card.id,
        card.spot_count(),
        MAX_PICKS,
        if card.picks.is_empty() {
            "No picks yet".to_string()
        } else {
            format_numbers(&card.picks)
        }
    );
    if let Some(r) = result {
        line.push_str(&format!(" | hits={} win={}", r.hits, r.win));
    }
    line
}

/// The 80-number board for one card, ten numbers per row.
///
/// `[nn]` marks a hit, `(nn)` a pick that missed, `*nn` a drawn number that
/// was not picked.
pub fn format_board(picks: &[u8], drawn: &[u8]) -> String {
    let picked: HashSet<u8> = picks.iter().copied().collect();
    let drawn: HashSet<u8> = drawn.iter().copied().collect();
    let mut rows = Vec::with_capacity(usize::from(TOTAL_NUMBERS) / 10);
    let numbers: Vec<u8> = (1..=TOTAL_NUMBERS).collect();
    for chunk in numbers.chunks(10) {
        let row: Vec<String> = chunk
            .iter()
            .map(|n| match (picked.contains(n), drawn.contains(n)) {
                (true, true) => format!("[{:>2}]", n),
                (true, false) => format!("({:>2})", n),
                (false, true) => format!(" *{:>2}", n),
                (false, false) => format!("  {:>2}", n),
            })
            .collect();
        rows.push(row.join(""));
    }
    rows.join("\n")
}

pub fn format_round(round: &RoundSummary) -> String {
    let mut lines = vec![
        format!("Round {}", round.round),
        format!("Drawn: {}", format_numbers(&round.drawn)),
    ];
    for (card, result) in round.cards.iter().zip(&round.results) {
        lines.push(format!("  {}", format_card(card, Some(result))));
    }
    lines.push(format!(
        "Total bet: {} | Total win: {} | Bankroll: {}",
        round.total_bet, round.total_win, round.bankroll_after
    ));
    lines.join("\n")
}

/// One line per spot count: the paying hits and the long-run return.
pub fn format_paytable(preset: Preset) -> String {
    let table = preset.table();
    let mut lines = vec![
        format!("Paytable: {}", preset),
        format!("{:<6} {:<44} {:>7}", "spots", "hits:multiplier", "return"),
    ];
    for spots in table.spot_counts() {
        let entries = table
            .row(spots)
            .map(|row| {
                row.iter()
                    .map(|(hits, mult)| format!("{}:{}x", hits, mult))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .unwrap_or_default();
        lines.push(format!(
            "{:<6} {:<44} {:>6.2}%",
            spots,
            entries,
            expected_return(table, spots) * 100.0
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_marks_hits_picks_and_draws() {
        let board = format_board(&[1, 2], &[2, 3]);
        let first_row = board.lines().next().unwrap();
        assert!(first_row.starts_with("( 1)[ 2] * 3   4"));
        assert_eq!(board.lines().count(), 8);
    }

    #[test]
    fn card_line_shows_result() {
        let card = Card {
            id: 2,
            picks: vec![1, 2, 3, 4],
        };
        let result = CardResult {
            card_id: 2,
            spots: 4,
            hits: 3,
            win: 25,
        };
        assert_eq!(
            format_card(&card, Some(&result)),
            "Card 2 [4/10]: 1, 2, 3, 4 | hits=3 win=25"
        );
        assert_eq!(format_card(&Card::new(1), None), "Card 1 [0/10]: No picks yet");
    }

    #[test]
    fn paytable_lists_every_spot_count() {
        let text = format_paytable(Preset::Fun);
        assert!(text.starts_with("Paytable: Fun"));
        assert_eq!(text.lines().count(), 12);
        assert!(text.contains("4:50x"));
    }
}
