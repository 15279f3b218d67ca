//! Input parsing for the interactive `play` session.
//!
//! Each stdin line becomes a [`ParseResult`]: a session command, a quit
//! request, or an error message to show the player.

use keno_engine::paytable::Preset;

/// One thing the player asked the session to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Toggle each number on one card
    Pick { card: u32, numbers: Vec<u8> },
    QuickPick,
    Clear,
    Repeat,
    Cards(usize),
    Bet(u32),
    Preset(Preset),
    Draw,
    Show,
    Help,
}

/// Result type for parsing user input into session commands.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Command(SessionCommand),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

pub const HELP: &str = "Commands: pick <card> <n>..., quick, clear, repeat, cards <n>, bet <amount>, preset <name>, draw, show, help, q";

/// Parse one line of session input (case-insensitive).
///
/// # Example
///
/// ```rust
/// # use keno_cli::validation::{parse_session_command, ParseResult, SessionCommand};
///
/// assert_eq!(
///     parse_session_command("pick 2 7 19"),
///     ParseResult::Command(SessionCommand::Pick { card: 2, numbers: vec![7, 19] })
/// );
/// assert_eq!(parse_session_command("d"), ParseResult::Command(SessionCommand::Draw));
/// assert_eq!(parse_session_command("q"), ParseResult::Quit);
/// ```
pub fn parse_session_command(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    match parts[0] {
        "q" | "quit" | "exit" => ParseResult::Quit,
        "draw" | "d" => ParseResult::Command(SessionCommand::Draw),
        "quick" | "qp" => ParseResult::Command(SessionCommand::QuickPick),
        "clear" => ParseResult::Command(SessionCommand::Clear),
        "repeat" | "r" => ParseResult::Command(SessionCommand::Repeat),
        "show" | "s" => ParseResult::Command(SessionCommand::Show),
        "help" | "h" | "?" => ParseResult::Command(SessionCommand::Help),
        "pick" | "p" => parse_pick(&parts[1..]),
        "cards" => match parts.get(1).map(|v| v.parse::<usize>()) {
            Some(Ok(n)) => ParseResult::Command(SessionCommand::Cards(n)),
            Some(Err(_)) => ParseResult::Invalid("Invalid card count".to_string()),
            None => ParseResult::Invalid("Cards requires a count (e.g., 'cards 3')".to_string()),
        },
        "bet" => match parts.get(1).map(|v| v.parse::<u32>()) {
            Some(Ok(n)) => ParseResult::Command(SessionCommand::Bet(n)),
            Some(Err(_)) => ParseResult::Invalid("Invalid bet amount".to_string()),
            None => ParseResult::Invalid("Bet requires an amount (e.g., 'bet 5')".to_string()),
        },
        "preset" => {
            if parts.len() < 2 {
                return ParseResult::Invalid(
                    "Preset requires a name (e.g., 'preset casino-ish')".to_string(),
                );
            }
            match Preset::from_name(&parts[1..].join(" ")) {
                Ok(p) => ParseResult::Command(SessionCommand::Preset(p)),
                Err(e) => ParseResult::Invalid(e.to_string()),
            }
        }
        other => ParseResult::Invalid(format!("Unrecognized command '{}'. {}", other, HELP)),
    }
}

fn parse_pick(args: &[&str]) -> ParseResult {
    if args.len() < 2 {
        return ParseResult::Invalid(
            "Pick requires a card and at least one number (e.g., 'pick 1 7 42')".to_string(),
        );
    }
    let Ok(card) = args[0].parse::<u32>() else {
        return ParseResult::Invalid(format!("Invalid card id '{}'", args[0]));
    };
    let mut numbers = Vec::with_capacity(args.len() - 1);
    for raw in &args[1..] {
        match raw.parse::<u8>() {
            Ok(n) => numbers.push(n),
            Err(_) => return ParseResult::Invalid(format!("Invalid number '{}'", raw)),
        }
    }
    ParseResult::Command(SessionCommand::Pick { card, numbers })
}
