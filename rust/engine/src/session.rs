use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard};

use crate::cards::Card;
use crate::deck::{Deck, SeatHand};
use crate::errors::GameError;
use crate::ledger::{ActionKind, ActionLedger, Round};
use crate::random::{RandomSource, SeededRandom};
use crate::round::{
    advance_round, first_active_seat, next_active_seat, round_is_settled, SettlementRule,
};
use crate::rules::{legal_actions, validate_action};
use crate::table::{assign_roles, choose_dealer, seats, RoleAssignment, Seat, TableConfig};

/// How a hand ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum HandOutcome {
    /// River betting settled. Nobody is declared the winner: there is no
    /// hand evaluation behind this table.
    Showdown,
    /// Nobody was left to act because every other seat folded.
    #[serde(rename_all = "camelCase")]
    AllOthersFolded { last_standing: Option<Seat> },
}

/// Read-only view of a hand, rebuilt after every call into the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub seat_count: usize,
    pub big_blind: u32,
    pub roles: RoleAssignment,
    pub hole_cards: Vec<SeatHand>,
    pub community_cards: Vec<Card>,
    pub round: Round,
    pub acting_seat: Option<Seat>,
    /// Legal actions of the acting seat; empty once the hand is over
    pub legal_actions: BTreeSet<ActionKind>,
    pub ledger: ActionLedger,
    pub deck_remaining: usize,
    pub hand_complete: bool,
    pub outcome: Option<HandOutcome>,
    pub declared_winner: Option<Seat>,
}

impl SessionSnapshot {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn hole_cards_for(&self, seat: Seat) -> Option<[Card; 2]> {
        self.hole_cards
            .iter()
            .find(|h| h.seat == seat)
            .map(|h| h.cards)
    }
}

#[derive(Debug, Clone)]
struct HandState {
    seats: Vec<Seat>,
    roles: RoleAssignment,
    hole_cards: Vec<SeatHand>,
    deck: Deck,
    ledger: ActionLedger,
    community: Vec<Card>,
    round: Round,
    acting: Option<Seat>,
    outcome: Option<HandOutcome>,
}

impl HandState {
    fn ensure_open(&self) -> Result<(), GameError> {
        match self.outcome {
            None => Ok(()),
            Some(HandOutcome::AllOthersFolded { .. }) => Err(GameError::NoEligibleSeat),
            Some(HandOutcome::Showdown) => Err(GameError::HandComplete),
        }
    }

    /// Applies one action to a copy of the hand; `self` is never modified.
    fn apply(
        &self,
        seat: Seat,
        kind: ActionKind,
        amount: Option<u32>,
        rule: SettlementRule,
    ) -> Result<HandState, GameError> {
        self.ensure_open()?;
        let acting = self.acting.ok_or(GameError::NoEligibleSeat)?;
        if seat != acting {
            return Err(GameError::NotSeatsTurn {
                expected: acting,
                actual: seat,
            });
        }

        let round = self.round;
        let entry = validate_action(
            &self.ledger,
            round,
            seat,
            self.roles.big_blind.amount,
            kind,
            amount,
        )?;
        let mut next = self.clone();
        next.ledger = self.ledger.append(round, entry)?;

        tracing::debug!(
            seat = %seat,
            action = %entry.kind,
            amount = ?entry.amount,
            round = %round,
            "action recorded"
        );

        if rule == SettlementRule::ActiveSeats {
            let live: Vec<Seat> = next.live_seats(round);
            if live.len() <= 1 {
                next.finish(HandOutcome::AllOthersFolded {
                    last_standing: live.first().copied(),
                });
                return Ok(next);
            }
        }

        if round_is_settled(&next.ledger, round, &next.seats, rule) {
            let upcoming = advance_round(round);
            let drawn = next.deck.draw_community_cards(upcoming)?;
            next.community.extend(drawn);
            next.round = upcoming;
            tracing::info!(
                from = %round,
                to = %upcoming,
                board = next.community.len(),
                "round settled"
            );
            if upcoming == Round::Complete {
                next.finish(HandOutcome::Showdown);
            } else {
                next.acting = first_active_seat(&next.ledger, &next.seats, upcoming);
                if next.acting.is_none() {
                    next.finish(HandOutcome::AllOthersFolded {
                        last_standing: None,
                    });
                }
            }
        } else {
            match next_active_seat(&next.ledger, &next.seats, seat, round) {
                Some(following) => next.acting = Some(following),
                None => {
                    let last_standing = next.live_seats(round).first().copied();
                    next.finish(HandOutcome::AllOthersFolded { last_standing });
                }
            }
        }
        Ok(next)
    }

    fn live_seats(&self, upto: Round) -> Vec<Seat> {
        let folded = self.ledger.folded_seats(upto);
        self.seats
            .iter()
            .copied()
            .filter(|s| !folded.contains(s))
            .collect()
    }

    fn finish(&mut self, outcome: HandOutcome) {
        self.acting = None;
        self.outcome = Some(outcome);
        tracing::info!(outcome = ?outcome, "hand complete");
    }

    fn declared_winner(&self) -> Option<Seat> {
        match self.outcome {
            Some(HandOutcome::AllOthersFolded { last_standing }) => last_standing,
            _ => None,
        }
    }
}

/// One table running one hand at a time.
///
/// Every hand is built from scratch by [`GameSession::start_hand`]; nothing
/// but the configuration and the random source carries over.
pub struct GameSession {
    config: TableConfig,
    rng: Box<dyn RandomSource>,
    hand: Option<HandState>,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("config", &self.config)
            .field("round", &self.hand.as_ref().map(|h| h.round))
            .field("acting", &self.hand.as_ref().and_then(|h| h.acting))
            .finish()
    }
}

impl GameSession {
    /// Session whose random source is seeded from `config.seed`, or from
    /// entropy when no seed is configured.
    pub fn new(config: TableConfig) -> Result<Self, GameError> {
        let rng = match config.seed {
            Some(seed) => SeededRandom::new_with_seed(seed),
            None => SeededRandom::from_entropy(),
        };
        Self::with_random(config, Box::new(rng))
    }

    pub fn with_random(
        config: TableConfig,
        rng: Box<dyn RandomSource>,
    ) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            hand: None,
        })
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Resizes the table, sets the blind and deals a fresh hand.
    ///
    /// A pinned dealer that no longer fits the table is dropped, so the
    /// dealer is drawn at random from then on.
    pub fn start_or_reset_session(
        &mut self,
        seat_count: usize,
        big_blind: u32,
    ) -> Result<SessionSnapshot, GameError> {
        let dealer = self.config.dealer.filter(|d| *d < seat_count);
        if dealer != self.config.dealer {
            tracing::info!(seat_count, "pinned dealer dropped on resize");
        }
        let config = TableConfig {
            seat_count,
            big_blind,
            dealer,
            ..self.config.clone()
        };
        config.validate()?;
        self.config = config;
        self.start_hand()
    }

    /// Deals a new hand with the current configuration, discarding any
    /// previous one.
    pub fn start_hand(&mut self) -> Result<SessionSnapshot, GameError> {
        let seat_count = self.config.seat_count;
        let dealer = match self.config.dealer {
            Some(dealer) => dealer,
            None => choose_dealer(seat_count, self.rng.as_mut())?,
        };
        let roles = assign_roles(seat_count, dealer, self.config.big_blind)?;
        let mut deck = Deck::shuffled(self.rng.as_mut());
        let hole_cards = deck.deal_hole_cards(seat_count, dealer)?;
        let first_to_act = Seat::new((roles.big_blind.seat.index() + 1) % seat_count);

        tracing::info!(
            seats = seat_count,
            dealer = %roles.dealer.seat,
            small_blind = %roles.small_blind.seat,
            big_blind = %roles.big_blind.seat,
            first_to_act = %first_to_act,
            "hand started"
        );

        self.hand = Some(HandState {
            seats: seats(seat_count),
            roles,
            hole_cards,
            deck,
            ledger: ActionLedger::new(),
            community: Vec::with_capacity(5),
            round: Round::PreFlop,
            acting: Some(first_to_act),
            outcome: None,
        });
        self.snapshot()
    }

    /// Validates and applies one action from `seat`.
    ///
    /// Either the whole action lands (ledger, round, community cards, acting
    /// seat) or the call fails and the session is exactly as before.
    pub fn submit_action(
        &mut self,
        seat: Seat,
        kind: ActionKind,
        amount: Option<u32>,
    ) -> Result<SessionSnapshot, GameError> {
        let hand = self.hand.as_ref().ok_or(GameError::NoHandInProgress)?;
        match hand.apply(seat, kind, amount, self.config.settlement) {
            Ok(next) => {
                self.hand = Some(next);
                self.snapshot()
            }
            Err(err) => {
                tracing::warn!(
                    seat = %seat,
                    action = %kind,
                    amount = ?amount,
                    error = %err,
                    "action rejected"
                );
                Err(err)
            }
        }
    }

    pub fn legal_actions_for(&self, seat: Seat) -> Result<BTreeSet<ActionKind>, GameError> {
        let hand = self.hand.as_ref().ok_or(GameError::NoHandInProgress)?;
        hand.ensure_open()?;
        Ok(legal_actions(&hand.ledger, hand.round, seat))
    }

    pub fn snapshot(&self) -> Result<SessionSnapshot, GameError> {
        let hand = self.hand.as_ref().ok_or(GameError::NoHandInProgress)?;
        let legal = match hand.acting {
            Some(seat) if hand.outcome.is_none() => legal_actions(&hand.ledger, hand.round, seat),
            _ => BTreeSet::new(),
        };
        Ok(SessionSnapshot {
            seat_count: self.config.seat_count,
            big_blind: self.config.big_blind,
            roles: hand.roles,
            hole_cards: hand.hole_cards.clone(),
            community_cards: hand.community.clone(),
            round: hand.round,
            acting_seat: hand.acting,
            legal_actions: legal,
            ledger: hand.ledger.clone(),
            deck_remaining: hand.deck.remaining(),
            hand_complete: hand.outcome.is_some(),
            outcome: hand.outcome,
            declared_winner: hand.declared_winner(),
        })
    }

    /// Cards still in the deck, front first.
    pub fn remaining_deck(&self) -> Result<Vec<Card>, GameError> {
        let hand = self.hand.as_ref().ok_or(GameError::NoHandInProgress)?;
        Ok(hand.deck.remaining_cards().to_vec())
    }
}

/// A [`GameSession`] behind one lock, for hosts that call in from several
/// threads. Each call holds the lock for its whole duration.
#[derive(Debug)]
pub struct SharedSession {
    inner: Mutex<GameSession>,
}

impl SharedSession {
    pub fn new(session: GameSession) -> Self {
        Self {
            inner: Mutex::new(session),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, GameSession>, GameError> {
        self.inner.lock().map_err(|_| GameError::StoragePoisoned)
    }

    pub fn start_or_reset_session(
        &self,
        seat_count: usize,
        big_blind: u32,
    ) -> Result<SessionSnapshot, GameError> {
        self.lock()?.start_or_reset_session(seat_count, big_blind)
    }

    pub fn submit_action(
        &self,
        seat: Seat,
        kind: ActionKind,
        amount: Option<u32>,
    ) -> Result<SessionSnapshot, GameError> {
        self.lock()?.submit_action(seat, kind, amount)
    }

    pub fn legal_actions_for(&self, seat: Seat) -> Result<BTreeSet<ActionKind>, GameError> {
        self.lock()?.legal_actions_for(seat)
    }

    pub fn snapshot(&self) -> Result<SessionSnapshot, GameError> {
        self.lock()?.snapshot()
    }
}
