//! Simulation command handler.
//!
//! Plays `rounds` unattended rounds where every card gets a fresh random
//! set of `spots` picks, then reports the realized return next to the
//! paytable's expected return.

use crate::commands::{load_config, resolve_preset};
use crate::error::CliError;
use keno_engine::card::Card;
use keno_engine::draw::{Drawer, TOTAL_NUMBERS};
use keno_engine::logger::{CardRecord, RoundLogger, RoundRecord};
use keno_engine::odds::expected_return;
use keno_engine::scoring::{score_cards, total_win};
use keno_engine::session::{BET_OPTIONS, CARD_COUNT_RANGE};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

/// Flags accepted by `keno sim`.
#[derive(Debug, Clone)]
pub struct SimArgs {
    pub rounds: u32,
    pub spots: u8,
    pub cards: Option<u8>,
    pub bet: Option<u32>,
    pub preset: Option<String>,
    pub seed: Option<u64>,
    pub output: Option<String>,
}

#[derive(Debug, Serialize)]
struct SimReport {
    rounds: u32,
    seed: u64,
    preset: String,
    spots: u8,
    cards: usize,
    bet_per_card: u32,
    total_bet: u64,
    total_win: u64,
    return_ratio: f64,
    expected_return: f64,
    /// Cards per hit count
    hit_distribution: BTreeMap<usize, u64>,
}

/// Handle the sim command.
///
/// Without a seed on the command line or in configuration a random one is
/// chosen and reported, so any run can be replayed.
///
/// # Errors
///
/// Returns `CliError::InvalidInput` for zero rounds or an out-of-range
/// card count or bet, and `CliError::Io` when the round log cannot be
/// written.
pub fn handle_sim_command(
    args: SimArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if args.rounds == 0 {
        return Err(CliError::InvalidInput("rounds must be at least 1".to_string()));
    }
    let config = load_config()?;
    let cards = args.cards.map_or(config.cards, usize::from);
    if !CARD_COUNT_RANGE.contains(&cards) {
        return Err(CliError::InvalidInput(format!(
            "cards must be between {} and {}",
            CARD_COUNT_RANGE.start(),
            CARD_COUNT_RANGE.end()
        )));
    }
    let bet = args.bet.unwrap_or(config.bet_per_card);
    if !BET_OPTIONS.contains(&bet) {
        return Err(CliError::InvalidInput(format!(
            "bet must be one of {:?}",
            BET_OPTIONS
        )));
    }
    let preset = resolve_preset(args.preset.as_deref(), config.preset)?;
    let seed = args.seed.or(config.seed).unwrap_or_else(rand::random);
    let table = preset.table();

    let mut logger = match args.output.as_deref() {
        Some(path) => Some(RoundLogger::create(path)?),
        None => None,
    };

    let mut drawer = Drawer::new_with_seed(seed);
    let mut total_bet_all = 0u64;
    let mut total_win_all = 0u64;
    let mut hit_distribution: BTreeMap<usize, u64> = BTreeMap::new();

    for _ in 0..args.rounds {
        let mut hand = Vec::with_capacity(cards);
        for id in 1..=cards {
            hand.push(Card {
                id: id as u32,
                picks: drawer.draw_numbers(args.spots, TOTAL_NUMBERS)?,
            });
        }
        let drawn = drawer.draw();
        let results = score_cards(&hand, &drawn, bet, table);
        let round_bet = cards as u64 * u64::from(bet);
        let round_win = total_win(&results);
        total_bet_all += round_bet;
        total_win_all += round_win;
        for r in &results {
            *hit_distribution.entry(r.hits).or_insert(0) += 1;
        }

        if let Some(logger) = logger.as_mut() {
            let record = RoundRecord {
                round_id: logger.next_id(),
                seed: Some(seed),
                preset,
                bet_per_card: bet,
                drawn,
                cards: hand
                    .iter()
                    .zip(&results)
                    .map(|(card, result)| CardRecord::new(&card.picks, result))
                    .collect(),
                total_bet: round_bet,
                total_win: round_win,
                ts: None,
            };
            logger.write(&record)?;
        }
    }

    let report = SimReport {
        rounds: args.rounds,
        seed,
        preset: preset.to_string(),
        spots: args.spots,
        cards,
        bet_per_card: bet,
        total_bet: total_bet_all,
        total_win: total_win_all,
        return_ratio: total_win_all as f64 / total_bet_all as f64,
        expected_return: expected_return(table, args.spots),
        hit_distribution,
    };
    tracing::info!(
        rounds = report.rounds,
        return_ratio = report.return_ratio,
        "simulation finished"
    );
    let json = serde_json::to_string_pretty(&report).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json)?;
    if let Some(path) = args.output.as_deref() {
        writeln!(err, "Round log written to {}", path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn args(rounds: u32, seed: Option<u64>) -> SimArgs {
        SimArgs {
            rounds,
            spots: 10,
            cards: None,
            bet: None,
            preset: None,
            seed,
            output: None,
        }
    }

    fn run_sim(args: SimArgs) -> serde_json::Value {
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_sim_command(args, &mut out, &mut err).unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    #[serial]
    fn test_sim_reports_totals() {
        let report = run_sim(SimArgs {
            cards: Some(4),
            bet: Some(2),
            ..args(25, Some(5))
        });
        assert_eq!(report["rounds"], 25);
        assert_eq!(report["total_bet"], 25 * 4 * 2);
        let cards_counted: u64 = report["hit_distribution"]
            .as_object()
            .unwrap()
            .values()
            .map(|v| v.as_u64().unwrap())
            .sum();
        assert_eq!(cards_counted, 100);
    }

    #[test]
    #[serial]
    fn test_sim_same_seed_same_report() {
        assert_eq!(run_sim(args(10, Some(77))), run_sim(args(10, Some(77))));
    }

    #[test]
    #[serial]
    fn test_sim_rejects_zero_rounds() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_sim_command(args(0, Some(1)), &mut out, &mut err);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    #[serial]
    fn test_sim_writes_one_record_per_round() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sim.jsonl");
        run_sim(SimArgs {
            output: Some(path.to_string_lossy().into_owned()),
            ..args(6, Some(3))
        });
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 6);
        let first: RoundRecord = serde_json::from_str(contents.lines().next().unwrap()).unwrap();
        assert_eq!(first.seed, Some(3));
        assert_eq!(first.drawn.len(), 20);
    }
}
