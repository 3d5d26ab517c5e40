//! Card, board, and action formatters for terminal display.
//!
//! Pure functions over engine values. Suits are drawn with Unicode symbols
//! where the terminal is known to support them and fall back to letters
//! otherwise.
//!
//! - **Unicode mode**: ♥ ♦ ♣ ♠
//! - **ASCII mode**: h d c s
//!
//! ## Example
//!
//! ```rust
//! use holdem_engine::cards::{Card, Rank, Suit};
//! use holdem_cli::formatters::{format_card, format_board};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//!
//! let board = vec![ace_spades];
//! assert!(format_board(&board).starts_with("[A"));
//! ```

use std::collections::BTreeSet;

use holdem_engine::cards::{Card, Rank, Suit};
use holdem_engine::ledger::{ActionEntry, ActionKind};
use holdem_engine::session::HandOutcome;
use holdem_engine::table::RoleAssignment;

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Single-character rank (2-9, T, J, Q, K, A).
pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Ten => "T".to_string(),
        other => other.label().to_string(),
    }
}

/// Format a Card as a string combining rank and suit.
///
/// # Example
///
/// ```rust
/// use holdem_engine::cards::{Card, Rank, Suit};
/// # use holdem_cli::formatters::format_card;
///
/// let ten_hearts = Card::new(Rank::Ten, Suit::Hearts);
/// let formatted = format_card(&ten_hearts);
/// assert!(formatted == "T♥" || formatted == "Th");
/// ```
pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Cards in bracket notation, `[]` when there are none.
pub fn format_board(cards: &[Card]) -> String {
    let formatted_cards: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted_cards.join(" "))
}

/// Format a recorded action as "fold", "call 40", "bet 100", etc.
///
/// # Example
///
/// ```rust
/// use holdem_engine::ledger::{ActionEntry, ActionKind};
/// use holdem_engine::table::Seat;
/// # use holdem_cli::formatters::format_action;
///
/// let entry = ActionEntry { seat: Seat::new(0), kind: ActionKind::Bet, amount: Some(100) };
/// assert_eq!(format_action(&entry), "bet 100");
/// ```
pub fn format_action(entry: &ActionEntry) -> String {
    match entry.amount {
        Some(amount) => format!("{} {}", entry.kind, amount),
        None => entry.kind.to_string(),
    }
}

pub fn format_legal(actions: &BTreeSet<ActionKind>) -> String {
    let names: Vec<&str> = actions.iter().map(|a| a.as_str()).collect();
    names.join("/")
}

pub fn format_roles(roles: &RoleAssignment) -> String {
    format!(
        "Dealer: {} | SB: {} ({}) | BB: {} ({})",
        roles.dealer.seat,
        roles.small_blind.seat,
        roles.small_blind.amount,
        roles.big_blind.seat,
        roles.big_blind.amount
    )
}

pub fn format_outcome(outcome: &HandOutcome) -> String {
    match outcome {
        HandOutcome::Showdown => "Showdown: betting complete, no winner declared".to_string(),
        HandOutcome::AllOthersFolded {
            last_standing: Some(seat),
        } => format!("{} wins uncontested", seat),
        HandOutcome::AllOthersFolded {
            last_standing: None,
        } => "Every seat folded".to_string(),
    }
}
