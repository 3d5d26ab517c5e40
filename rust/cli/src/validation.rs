//! Input parsing for the interactive `play` command.

use holdem_engine::ledger::ActionKind;

/// Outcome of parsing one line typed by the acting player.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// An action to submit, with its amount if one was typed
    Action {
        kind: ActionKind,
        amount: Option<u32>,
    },
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input into an action or a quit request.
///
/// Accepted forms (case-insensitive):
/// - `f` / `fold`
/// - `c` / `check`
/// - `call` or `call N`
/// - `bet N`, `raise N`
/// - `allin N` / `all-in N`
/// - `q` / `quit`
///
/// Whether the action is legal is for the engine to decide; this only checks
/// the shape of the input.
///
/// # Example
///
/// ```rust
/// # use holdem_cli::validation::{parse_player_action, ParseResult};
/// use holdem_engine::ledger::ActionKind;
///
/// assert_eq!(
///     parse_player_action("bet 40"),
///     ParseResult::Action { kind: ActionKind::Bet, amount: Some(40) }
/// );
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }
    if parts.len() > 2 {
        return ParseResult::Invalid(format!("Unexpected input: {}", input));
    }

    let amount = match parts.get(1) {
        None => None,
        Some(raw) => match raw.parse::<u32>() {
            Ok(n) if n > 0 => Some(n),
            Ok(_) => return ParseResult::Invalid("Amount must be positive".to_string()),
            Err(_) => return ParseResult::Invalid(format!("Invalid amount: {}", raw)),
        },
    };

    let kind = match parts[0] {
        "q" | "quit" => return ParseResult::Quit,
        "fold" | "f" => ActionKind::Fold,
        "check" | "c" => ActionKind::Check,
        "call" => ActionKind::Call,
        "bet" => ActionKind::Bet,
        "raise" => ActionKind::Raise,
        "allin" | "all-in" => ActionKind::AllIn,
        other => return ParseResult::Invalid(format!("Unrecognized action: {}", other)),
    };

    match kind {
        ActionKind::Fold | ActionKind::Check if amount.is_some() => {
            ParseResult::Invalid(format!("{} takes no amount", kind))
        }
        ActionKind::Bet | ActionKind::Raise | ActionKind::AllIn if amount.is_none() => {
            ParseResult::Invalid(format!("{} requires an amount (e.g., '{} 40')", kind, parts[0]))
        }
        _ => ParseResult::Action { kind, amount },
    }
}
