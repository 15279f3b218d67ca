//! Statistics aggregation over round logs.
//!
//! Reads JSONL round records (plain or `.jsonl.zst`, a single file or a
//! directory tree), totals wagers and wins, and re-scores every card to
//! check that the logged payouts match the paytable.

use crate::error::{BatchValidationError, CliError};
use crate::io_utils::read_text_auto;
use crate::parse_json_or_continue;
use crate::ui;
use keno_engine::logger::RoundRecord;
use keno_engine::scoring::{count_hits, drawn_set, get_card_win};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

#[derive(Default)]
struct StatsState {
    rounds: u64,
    cards: u64,
    total_bet: u64,
    total_win: u64,
    biggest_win: u64,
    by_preset: BTreeMap<String, u64>,
    skipped: Vec<BatchValidationError<String>>,
    incomplete: u64,
    stats_ok: bool,
}

/// Aggregates statistics from JSONL round logs.
///
/// # Returns
///
/// `Ok(())` when every record is consistent. A record whose payouts do not
/// match its paytable is reported and turns the result into an `Err`
/// that maps to exit code `2`; the summary is still printed.
pub fn handle_stats_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let path = Path::new(&input);
    let mut state = StatsState {
        stats_ok: true,
        ..StatsState::default()
    };

    if path.is_dir() {
        let mut stack = vec![path.to_path_buf()];
        while let Some(d) = stack.pop() {
            let rd = match std::fs::read_dir(&d) {
                Ok(v) => v,
                Err(_) => continue,
            };
            for e in rd.filter_map(Result::ok) {
                let p = e.path();
                if p.is_dir() {
                    stack.push(p);
                } else if let Some(fname) = p.file_name().and_then(|f| f.to_str())
                    && (fname.ends_with(".jsonl") || fname.ends_with(".jsonl.zst"))
                {
                    let name = p.to_string_lossy().into_owned();
                    match read_text_auto(&name) {
                        Ok(content) => consume(&name, &content, &mut state, err)?,
                        Err(msg) => state.skipped.push(BatchValidationError {
                            item_context: name,
                            message: msg,
                        }),
                    }
                }
            }
        }
    } else {
        match read_text_auto(&input) {
            Ok(content) => consume(&input, &content, &mut state, err)?,
            Err(e) => {
                ui::write_error(err, &format!("Failed to read {}: {}", input, e))?;
                return Err(CliError::InvalidInput(format!(
                    "Failed to read {}: {}",
                    input, e
                )));
            }
        }
    }

    for skipped in &state.skipped {
        ui::display_warning(err, &format!("Skipped {}", skipped))?;
    }
    if state.incomplete > 0 {
        ui::display_warning(
            err,
            &format!("Discarded {} incomplete final line(s)", state.incomplete),
        )?;
    }
    if !path.is_dir() && state.rounds == 0 && (!state.skipped.is_empty() || state.incomplete > 0)
    {
        ui::write_error(err, "No valid round records")?;
        return Err(CliError::InvalidInput("No valid round records".to_string()));
    }

    let return_ratio = if state.total_bet == 0 {
        0.0
    } else {
        state.total_win as f64 / state.total_bet as f64
    };
    let summary = serde_json::json!({
        "rounds": state.rounds,
        "cards": state.cards,
        "total_bet": state.total_bet,
        "total_win": state.total_win,
        "net": state.total_win as i64 - state.total_bet as i64,
        "return_ratio": return_ratio,
        "biggest_win": state.biggest_win,
        "by_preset": state.by_preset,
    });
    let json_output = serde_json::to_string_pretty(&summary)
        .map_err(|e| CliError::InvalidInput(format!("Failed to serialize stats: {}", e)))?;
    writeln!(out, "{}", json_output)?;
    if state.stats_ok {
        Ok(())
    } else {
        Err(CliError::InvalidInput(
            "Round log validation failed".to_string(),
        ))
    }
}

fn consume(
    source: &str,
    content: &str,
    state: &mut StatsState,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let has_trailing_nl = content.ends_with('\n');
    let lines: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .collect();
    let last = lines.len().saturating_sub(1);
    for (i, (line_no, line)) in lines.iter().enumerate() {
        if i == last && !has_trailing_nl && serde_json::from_str::<RoundRecord>(line).is_err() {
            state.incomplete += 1;
            continue;
        }
        let rec: RoundRecord =
            parse_json_or_continue!(line, state.skipped, format!("{}:{}", source, line_no + 1));

        if let Some(problem) = check_record(&rec) {
            state.stats_ok = false;
            ui::write_error(err, &format!("{} at round {}", problem, rec.round_id))?;
        }

        state.rounds += 1;
        state.cards += rec.cards.len() as u64;
        state.total_bet += rec.total_bet;
        state.total_win += rec.total_win;
        state.biggest_win = state.biggest_win.max(rec.total_win);
        *state.by_preset.entry(rec.preset.to_string()).or_insert(0) += 1;
    }
    Ok(())
}

// Re-scores every card against the record's own draw and paytable.
fn check_record(rec: &RoundRecord) -> Option<String> {
    let drawn = drawn_set(&rec.drawn);
    let table = rec.preset.table();
    for card in &rec.cards {
        let hits = count_hits(&card.picks, &drawn);
        if hits != card.hits {
            return Some(format!("Hit count mismatch on card {}", card.card_id));
        }
        let expected = get_card_win(card.picks.len(), hits, rec.bet_per_card, table);
        if expected != card.win {
            return Some(format!("Payout mismatch on card {}", card.card_id));
        }
    }
    let expected_bet = rec.cards.len() as u64 * u64::from(rec.bet_per_card);
    if expected_bet != rec.total_bet {
        return Some("Total bet mismatch".to_string());
    }
    let card_wins: u64 = rec.cards.iter().map(|c| c.win).sum();
    if card_wins != rec.total_win {
        return Some("Total win mismatch".to_string());
    }
    None
}
