//! Play command handler.
//!
//! Settings are layered: configuration first, then the saved state file,
//! then command-line flags. `--auto N` quick-picks every card and draws N
//! rounds unattended; otherwise commands are read line by line from stdin.
//!
//! Play draws always come from an OS-seeded generator. A configured seed
//! only applies to `sim`.

use crate::commands::{load_config, resolve_preset};
use crate::error::CliError;
use crate::formatters::{format_board, format_card, format_numbers, format_round};
use crate::io_utils::read_stdin_line;
use crate::state::{load_snapshot, save_snapshot};
use crate::ui;
use crate::validation::{HELP, ParseResult, SessionCommand, parse_session_command};
use keno_engine::draw::{Drawer, TOTAL_NUMBERS};
use keno_engine::errors::KenoError;
use keno_engine::logger::RoundLogger;
use keno_engine::session::{KenoSession, RoundSummary};
use std::io::{BufRead, Write};
use std::path::Path;

/// Flags accepted by `keno play`.
#[derive(Debug, Default, Clone)]
pub struct PlayArgs {
    pub cards: Option<u8>,
    pub bet: Option<u32>,
    pub preset: Option<String>,
    pub state: Option<String>,
    pub output: Option<String>,
    pub auto: Option<u32>,
}

/// Handle the play command.
///
/// # Errors
///
/// Returns `CliError::Config` for an invalid configuration,
/// `CliError::Engine` when a flag breaks a session rule, and
/// `CliError::Io` when the round log or state file cannot be written.
pub fn handle_play_command(
    args: PlayArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let config = load_config()?;
    let drawer = Drawer::from_entropy();

    let state_path = args.state.as_deref().map(Path::new);
    let snapshot = match state_path {
        Some(path) => load_snapshot(path, err)?,
        None => None,
    };
    let mut session = match snapshot {
        Some(snapshot) => KenoSession::restore(snapshot, drawer),
        None => {
            let mut session = KenoSession::with_drawer(drawer, config.starting_bankroll);
            session.set_card_count(config.cards)?;
            session.set_bet_per_card(config.bet_per_card)?;
            session.set_preset(config.preset);
            session
        }
    };

    if let Some(cards) = args.cards {
        session.set_card_count(usize::from(cards))?;
    }
    if let Some(bet) = args.bet {
        session.set_bet_per_card(bet)?;
    }
    if args.preset.is_some() {
        let preset = resolve_preset(args.preset.as_deref(), session.preset())?;
        session.set_preset(preset);
    }

    let mut logger = match args.output.as_deref() {
        Some(path) => Some(RoundLogger::append(path)?),
        None => None,
    };

    writeln!(
        out,
        "play: cards={} bet={} preset={}",
        session.card_count(),
        session.bet_per_card(),
        session.preset()
    )?;

    match args.auto {
        Some(rounds) => play_auto(&mut session, rounds, &mut logger, out, err)?,
        None => play_interactive(&mut session, &mut logger, out, err, stdin)?,
    }

    if let Some(path) = state_path {
        save_snapshot(path, &session.snapshot())?;
    }

    writeln!(out, "Rounds played: {}", session.rounds_played())?;
    writeln!(out, "Bankroll: {}", session.bankroll())?;
    Ok(())
}

fn play_auto(
    session: &mut KenoSession,
    rounds: u32,
    logger: &mut Option<RoundLogger>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    for _ in 0..rounds {
        session.quick_pick_all();
        match session.draw() {
            Ok(round) => {
                writeln!(out, "{}", format_round(&round))?;
                log_round(logger, &round, session.seed())?;
            }
            Err(e @ KenoError::InsufficientBankroll { .. }) => {
                ui::display_warning(err, &format!("{}; stopping", e))?;
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

fn play_interactive(
    session: &mut KenoSession,
    logger: &mut Option<RoundLogger>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    writeln!(out, "{}", HELP)?;
    loop {
        ui::write_prompt(out, session.bankroll(), session.total_bet())?;
        let Some(line) = read_stdin_line(stdin) else {
            writeln!(out)?;
            break;
        };
        if line.is_empty() {
            continue;
        }
        match parse_session_command(&line) {
            ParseResult::Quit => break,
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
            ParseResult::Command(cmd) => {
                if let Err(e) = apply_command(session, cmd, logger, out, err) {
                    match e {
                        CliError::Engine(msg) => ui::write_error(err, &msg)?,
                        other => return Err(other),
                    }
                }
            }
        }
    }
    Ok(())
}

fn apply_command(
    session: &mut KenoSession,
    cmd: SessionCommand,
    logger: &mut Option<RoundLogger>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    match cmd {
        SessionCommand::Pick { card, numbers } => {
            if let Some(&number) = numbers.iter().find(|n| !(1..=TOTAL_NUMBERS).contains(*n)) {
                return Err(KenoError::NumberOutOfRange {
                    number,
                    max: TOTAL_NUMBERS,
                }
                .into());
            }
            for number in numbers {
                let before = session
                    .cards()
                    .iter()
                    .find(|c| c.id == card)
                    .map(|c| c.spot_count());
                let updated = session.toggle_pick(card, number)?;
                if before == Some(updated.spot_count()) {
                    ui::display_warning(
                        err,
                        &format!("Card {} already has 10 picks; {} ignored", card, number),
                    )?;
                }
            }
            if let Some(c) = session.cards().iter().find(|c| c.id == card) {
                writeln!(out, "{}", format_card(c, None))?;
            }
        }
        SessionCommand::QuickPick => {
            session.quick_pick_all();
            write_cards(session, out)?;
        }
        SessionCommand::Clear => {
            session.clear_all();
            write_cards(session, out)?;
        }
        SessionCommand::Repeat => {
            session.repeat_last_round()?;
            write_cards(session, out)?;
        }
        SessionCommand::Cards(count) => {
            session.set_card_count(count)?;
            write_cards(session, out)?;
        }
        SessionCommand::Bet(bet) => {
            session.set_bet_per_card(bet)?;
            writeln!(
                out,
                "Bet per card: {} (total {})",
                session.bet_per_card(),
                session.total_bet()
            )?;
        }
        SessionCommand::Preset(preset) => {
            session.set_preset(preset);
            writeln!(out, "Paytable: {}", preset)?;
        }
        SessionCommand::Draw => {
            let round = session.draw()?;
            writeln!(out, "{}", format_round(&round))?;
            log_round(logger, &round, session.seed())?;
        }
        SessionCommand::Show => {
            writeln!(
                out,
                "Bankroll: {} | Bet per card: {} | Paytable: {}",
                session.bankroll(),
                session.bet_per_card(),
                session.preset()
            )?;
            for card in session.cards() {
                writeln!(out, "{}", format_card(card, session.result_for(card.id)))?;
                if !session.drawn().is_empty() {
                    writeln!(out, "{}", format_board(&card.picks, session.drawn()))?;
                }
            }
            writeln!(out, "Last draw: {}", format_numbers(session.drawn()))?;
            match session.draw_blocker() {
                Some(reason) => writeln!(out, "Draw blocked: {}", reason)?,
                None => writeln!(out, "Ready to draw")?,
            }
        }
        SessionCommand::Help => writeln!(out, "{}", HELP)?,
    }
    Ok(())
}

fn write_cards(session: &KenoSession, out: &mut dyn Write) -> Result<(), CliError> {
    for card in session.cards() {
        writeln!(out, "{}", format_card(card, None))?;
    }
    Ok(())
}

fn log_round(
    logger: &mut Option<RoundLogger>,
    round: &RoundSummary,
    seed: Option<u64>,
) -> Result<(), CliError> {
    if let Some(logger) = logger {
        let id = logger.next_id();
        logger.write(&round.to_record(id, seed))?;
    }
    Ok(())
}
