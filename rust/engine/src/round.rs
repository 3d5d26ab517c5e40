use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::ledger::{ActionLedger, Round};
use crate::table::Seat;

/// How [`round_is_settled`] decides that betting in a round is over.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SettlementRule {
    /// Every seat at the table, folded or not, must have acted in the round,
    /// and the committed totals must collapse to exactly one value.
    ///
    /// Two consequences differ from regular hold'em: a round where everyone
    /// checks never settles, and a seat that folded earlier in the hand keeps
    /// later rounds open because it never acts again.
    #[default]
    Strict,
    /// Folded seats are ignored, and a round where every live seat checked
    /// is settled.
    ActiveSeats,
}

/// Whether betting in `round` is finished.
pub fn round_is_settled(
    ledger: &ActionLedger,
    round: Round,
    seats: &[Seat],
    rule: SettlementRule,
) -> bool {
    let folded = match rule {
        SettlementRule::Strict => BTreeSet::new(),
        SettlementRule::ActiveSeats => ledger.folded_seats(round),
    };

    let all_acted = seats
        .iter()
        .filter(|seat| !folded.contains(seat))
        .all(|seat| ledger.has_acted(round, *seat));
    if !all_acted {
        return false;
    }

    let totals: BTreeSet<u32> = ledger
        .committing_seats(round)
        .into_iter()
        .filter(|seat| !folded.contains(seat))
        .map(|seat| ledger.total_committed(round, seat))
        .collect();

    match rule {
        SettlementRule::Strict => totals.len() == 1,
        SettlementRule::ActiveSeats => totals.len() <= 1,
    }
}

/// The round after `current`; `Complete` stays `Complete`.
pub fn advance_round(current: Round) -> Round {
    match current {
        Round::PreFlop => Round::Flop,
        Round::Flop => Round::Turn,
        Round::Turn => Round::River,
        Round::River | Round::Complete => Round::Complete,
    }
}

/// Next seat after `current` (circularly) that has not folded in any round up
/// to `upto_round`. `None` when every other seat has folded.
pub fn next_active_seat(
    ledger: &ActionLedger,
    seats: &[Seat],
    current: Seat,
    upto_round: Round,
) -> Option<Seat> {
    let folded = ledger.folded_seats(upto_round);
    let start = seats.iter().position(|s| *s == current)?;
    (1..seats.len())
        .map(|step| seats[(start + step) % seats.len()])
        .find(|seat| !folded.contains(seat))
}

/// First seat in table order that has not folded; opens a new round.
pub fn first_active_seat(ledger: &ActionLedger, seats: &[Seat], upto_round: Round) -> Option<Seat> {
    let folded = ledger.folded_seats(upto_round);
    seats.iter().copied().find(|seat| !folded.contains(seat))
}
