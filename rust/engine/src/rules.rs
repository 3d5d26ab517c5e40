use std::collections::BTreeSet;

use crate::errors::GameError;
use crate::ledger::{ActionEntry, ActionKind, ActionLedger, Round};
use crate::table::Seat;

/// Actions `seat` may take in `round` given what the ledger already holds.
///
/// Fold and all-in are always offered. With no chips in yet the seat may
/// check or bet; behind the current bet it may call or raise; level with it,
/// it may only check.
///
/// A seat that has already matched the bet is not offered a raise. Regular
/// hold'em lets any live seat re-raise; this table does not.
///
/// # Examples
///
/// ```
/// use holdem_engine::ledger::{ActionKind, ActionLedger, Round};
/// use holdem_engine::rules::legal_actions;
/// use holdem_engine::table::Seat;
///
/// let a = Seat::new(0);
/// let b = Seat::new(1);
/// let ledger = ActionLedger::new()
///     .record(Round::Flop, a, ActionKind::Bet, Some(40))
///     .unwrap();
///
/// let for_b = legal_actions(&ledger, Round::Flop, b);
/// assert!(for_b.contains(&ActionKind::Call));
/// assert!(for_b.contains(&ActionKind::Raise));
///
/// let for_a = legal_actions(&ledger, Round::Flop, a);
/// assert!(for_a.contains(&ActionKind::Check));
/// assert!(!for_a.contains(&ActionKind::Raise));
/// ```
pub fn legal_actions(ledger: &ActionLedger, round: Round, seat: Seat) -> BTreeSet<ActionKind> {
    let current_bet = ledger.max_committed(round);
    let player_bet = ledger.total_committed(round, seat);

    let mut actions = BTreeSet::from([ActionKind::Fold, ActionKind::AllIn]);
    if current_bet == 0 {
        actions.insert(ActionKind::Check);
        actions.insert(ActionKind::Bet);
    } else if player_bet < current_bet {
        actions.insert(ActionKind::Call);
        actions.insert(ActionKind::Raise);
    } else if player_bet == current_bet {
        actions.insert(ActionKind::Check);
    }
    actions
}

/// Chips `seat` still owes to match the current bet in `round`.
pub fn amount_to_call(ledger: &ActionLedger, round: Round, seat: Seat) -> u32 {
    ledger
        .max_committed(round)
        .saturating_sub(ledger.total_committed(round, seat))
}

/// Checks a submitted action and turns it into the entry to record.
///
/// A call without an amount is filled in with the outstanding amount. Every
/// other amount is taken as given, never adjusted. Bets and raises must be at
/// least `min_bet` (the table's big blind); an all-in may be smaller.
///
/// # Errors
///
/// - [`GameError::IllegalAction`] if `kind` is not in [`legal_actions`]
/// - [`GameError::InvalidAmount`] if the amount is missing, zero, below
///   `min_bet`, does not fit the action, or would push the seat's total in
///   the round past `u32::MAX`
///
/// # Examples
///
/// ```
/// use holdem_engine::ledger::{ActionKind, ActionLedger, Round};
/// use holdem_engine::rules::validate_action;
/// use holdem_engine::table::Seat;
/// use holdem_engine::errors::GameError;
///
/// let ledger = ActionLedger::new()
///     .record(Round::PreFlop, Seat::new(0), ActionKind::Bet, Some(40))
///     .unwrap();
///
/// let call = validate_action(&ledger, Round::PreFlop, Seat::new(1), 40, ActionKind::Call, None).unwrap();
/// assert_eq!(call.amount, Some(40));
///
/// let check = validate_action(&ledger, Round::PreFlop, Seat::new(1), 40, ActionKind::Check, None);
/// assert!(matches!(check, Err(GameError::IllegalAction { .. })));
///
/// let small = validate_action(&ledger, Round::PreFlop, Seat::new(1), 40, ActionKind::Raise, Some(10));
/// assert!(matches!(small, Err(GameError::InvalidAmount { .. })));
/// ```
pub fn validate_action(
    ledger: &ActionLedger,
    round: Round,
    seat: Seat,
    min_bet: u32,
    kind: ActionKind,
    amount: Option<u32>,
) -> Result<ActionEntry, GameError> {
    if !legal_actions(ledger, round, seat).contains(&kind) {
        return Err(GameError::IllegalAction { seat, kind, round });
    }

    let invalid = |reason: &str| GameError::InvalidAmount {
        kind,
        reason: reason.to_string(),
    };

    let amount = match kind {
        ActionKind::Fold | ActionKind::Check => {
            if amount.is_some() {
                return Err(invalid("no chips are committed"));
            }
            None
        }
        ActionKind::Call => {
            let owed = amount_to_call(ledger, round, seat);
            match amount {
                None => Some(owed),
                Some(given) if given == owed => Some(owed),
                Some(_) => return Err(invalid(&format!("calling requires exactly {}", owed))),
            }
        }
        ActionKind::Bet | ActionKind::Raise | ActionKind::AllIn => {
            let given = match amount {
                Some(given) if given > 0 => given,
                _ => return Err(invalid("a positive amount is required")),
            };
            if kind != ActionKind::AllIn && given < min_bet {
                return Err(invalid(&format!("the minimum is {}", min_bet)));
            }
            let total = ledger
                .total_committed(round, seat)
                .checked_add(given)
                .ok_or_else(|| invalid("the round total would overflow"))?;
            let current_bet = ledger.max_committed(round);
            if kind == ActionKind::Raise && total <= current_bet {
                return Err(invalid(&format!(
                    "raise must lift the total above {}",
                    current_bet
                )));
            }
            Some(given)
        }
    };

    Ok(ActionEntry { seat, kind, amount })
}
