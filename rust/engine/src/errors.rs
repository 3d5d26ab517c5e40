use thiserror::Error;

use crate::ledger::{ActionKind, Round};
use crate::table::Seat;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("{kind} is not a legal action for {seat} during {round}")]
    IllegalAction {
        seat: Seat,
        kind: ActionKind,
        round: Round,
    },
    #[error("Invalid amount for {kind}: {reason}")]
    InvalidAmount { kind: ActionKind, reason: String },
    #[error("Deck exhausted: {requested} cards requested, {remaining} remaining")]
    InsufficientDeck { requested: usize, remaining: usize },
    #[error("No eligible seat left to act; every other seat has folded")]
    NoEligibleSeat,
    #[error("It's not {actual}'s turn (expected {expected})")]
    NotSeatsTurn { expected: Seat, actual: Seat },
    #[error("Invalid table: {0}")]
    InvalidTable(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("No hand in progress")]
    NoHandInProgress,
    #[error("Hand already complete")]
    HandComplete,
    #[error("Session storage poisoned")]
    StoragePoisoned,
}
