use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::errors::GameError;
use crate::table::Seat;

/// Stage of a hand. The first four are betting rounds; `Complete` is the
/// terminal state reached after the river settles.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Round {
    /// Hole cards dealt, no community cards
    PreFlop,
    /// Three community cards
    Flop,
    /// Fourth community card
    Turn,
    /// Fifth community card
    River,
    /// Betting finished
    Complete,
}

impl Round {
    pub const BETTING: [Round; 4] = [Round::PreFlop, Round::Flop, Round::Turn, Round::River];

    pub fn is_betting(self) -> bool {
        self != Round::Complete
    }

    /// Community cards revealed when this round opens.
    pub fn community_cards_to_draw(self) -> usize {
        match self {
            Round::Flop => 3,
            Round::Turn | Round::River => 1,
            Round::PreFlop | Round::Complete => 0,
        }
    }

    /// Betting rounds from the first up to and including `self`.
    pub fn betting_rounds_through(self) -> impl Iterator<Item = Round> {
        Round::BETTING.into_iter().filter(move |r| *r <= self)
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Round::PreFlop => "pre-flop",
            Round::Flop => "flop",
            Round::Turn => "turn",
            Round::River => "river",
            Round::Complete => "complete",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    AllIn,
}

impl ActionKind {
    /// Whether entries of this kind put chips in.
    pub fn commits_chips(self) -> bool {
        matches!(
            self,
            ActionKind::Bet | ActionKind::Raise | ActionKind::Call | ActionKind::AllIn
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Fold => "fold",
            ActionKind::Check => "check",
            ActionKind::Call => "call",
            ActionKind::Bet => "bet",
            ActionKind::Raise => "raise",
            ActionKind::AllIn => "all-in",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionEntry {
    pub seat: Seat,
    #[serde(rename = "action")]
    pub kind: ActionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<u32>,
}

impl ActionEntry {
    /// Chips this entry adds to the seat's round total.
    pub fn committed(&self) -> u32 {
        if self.kind.commits_chips() {
            self.amount.unwrap_or(0)
        } else {
            0
        }
    }
}

/// Append-only action log, one list per betting round.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionLedger {
    pre_flop: Vec<ActionEntry>,
    flop: Vec<ActionEntry>,
    turn: Vec<ActionEntry>,
    river: Vec<ActionEntry>,
}

impl ActionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, round: Round) -> Option<&Vec<ActionEntry>> {
        match round {
            Round::PreFlop => Some(&self.pre_flop),
            Round::Flop => Some(&self.flop),
            Round::Turn => Some(&self.turn),
            Round::River => Some(&self.river),
            Round::Complete => None,
        }
    }

    fn slot_mut(&mut self, round: Round) -> Option<&mut Vec<ActionEntry>> {
        match round {
            Round::PreFlop => Some(&mut self.pre_flop),
            Round::Flop => Some(&mut self.flop),
            Round::Turn => Some(&mut self.turn),
            Round::River => Some(&mut self.river),
            Round::Complete => None,
        }
    }

    /// Entries of `round` in the order they were recorded.
    pub fn entries(&self, round: Round) -> &[ActionEntry] {
        self.slot(round).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns a new ledger with the entry appended to `round`. The receiver
    /// is left as it was, so readers holding it never see a half-applied
    /// action.
    pub fn record(
        &self,
        round: Round,
        seat: Seat,
        kind: ActionKind,
        amount: Option<u32>,
    ) -> Result<Self, GameError> {
        self.append(round, ActionEntry { seat, kind, amount })
    }

    pub fn append(&self, round: Round, entry: ActionEntry) -> Result<Self, GameError> {
        let mut next = self.clone();
        next.slot_mut(round)
            .ok_or(GameError::HandComplete)?
            .push(entry);
        Ok(next)
    }

    /// Sum of chips `seat` committed in `round` (bet, raise, call, all-in),
    /// saturating at `u32::MAX`.
    pub fn total_committed(&self, round: Round, seat: Seat) -> u32 {
        self.entries(round)
            .iter()
            .filter(|e| e.seat == seat)
            .map(ActionEntry::committed)
            .fold(0u32, u32::saturating_add)
    }

    /// Highest per-seat total among seats that committed chips in `round`;
    /// zero before anyone has.
    pub fn max_committed(&self, round: Round) -> u32 {
        self.committing_seats(round)
            .into_iter()
            .map(|seat| self.total_committed(round, seat))
            .max()
            .unwrap_or(0)
    }

    /// Seats with at least one chip-committing entry in `round`.
    pub fn committing_seats(&self, round: Round) -> BTreeSet<Seat> {
        self.entries(round)
            .iter()
            .filter(|e| e.kind.commits_chips())
            .map(|e| e.seat)
            .collect()
    }

    pub fn has_acted(&self, round: Round, seat: Seat) -> bool {
        self.entries(round).iter().any(|e| e.seat == seat)
    }

    /// Seats with a fold entry in any round from pre-flop through `upto`.
    pub fn folded_seats(&self, upto: Round) -> BTreeSet<Seat> {
        upto.betting_rounds_through()
            .flat_map(|round| self.entries(round).iter())
            .filter(|e| e.kind == ActionKind::Fold)
            .map(|e| e.seat)
            .collect()
    }

    pub fn len(&self) -> usize {
        Round::BETTING
            .iter()
            .map(|r| self.entries(*r).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
