use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::GameError;
use crate::random::RandomSource;
use crate::round::SettlementRule;

/// Smallest table that can run a hand.
pub const MIN_SEATS: usize = 2;
/// Largest table a single deck serves in this simulator.
pub const MAX_SEATS: usize = 10;
pub const DEFAULT_SEATS: usize = 6;
pub const DEFAULT_BIG_BLIND: u32 = 40;

/// A player position at the table.
///
/// Stored as a 0-based index; displayed and serialized 1-based, the way the
/// table is presented to players.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Seat(usize);

impl Seat {
    pub const fn new(index: usize) -> Self {
        Seat(index)
    }

    /// Seat from its 1-based table number.
    pub fn from_number(number: usize) -> Option<Self> {
        number.checked_sub(1).map(Seat)
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn number(self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seat {}", self.number())
    }
}

impl From<Seat> for usize {
    fn from(seat: Seat) -> Self {
        seat.number()
    }
}

impl TryFrom<usize> for Seat {
    type Error = String;

    fn try_from(number: usize) -> Result<Self, Self::Error> {
        Seat::from_number(number).ok_or_else(|| "seat numbers start at 1".to_string())
    }
}

/// A role seat and the chips it posts when the hand starts.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RolePost {
    pub seat: Seat,
    pub amount: u32,
}

/// Dealer and blind positions for one hand. Fixed once the hand starts.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignment {
    pub dealer: RolePost,
    pub small_blind: RolePost,
    pub big_blind: RolePost,
}

/// Assigns dealer, small blind and big blind around a circular table.
///
/// `dealer_offset` is the dealer's 0-based seat index. The small blind sits
/// one seat after the dealer and posts half the big blind; the big blind sits
/// two seats after.
///
/// # Examples
///
/// ```
/// use holdem_engine::table::assign_roles;
///
/// let roles = assign_roles(6, 0, 40).unwrap();
/// assert_eq!(roles.small_blind.seat.number(), 2);
/// assert_eq!(roles.big_blind.seat.number(), 3);
/// assert_eq!(roles.small_blind.amount, 20);
/// ```
pub fn assign_roles(
    seat_count: usize,
    dealer_offset: usize,
    big_blind_amount: u32,
) -> Result<RoleAssignment, GameError> {
    check_seat_count(seat_count)?;
    if dealer_offset >= seat_count {
        return Err(GameError::InvalidTable(format!(
            "dealer offset {} outside a {}-seat table",
            dealer_offset, seat_count
        )));
    }
    Ok(RoleAssignment {
        dealer: RolePost {
            seat: Seat(dealer_offset),
            amount: 0,
        },
        small_blind: RolePost {
            seat: Seat((dealer_offset + 1) % seat_count),
            amount: big_blind_amount / 2,
        },
        big_blind: RolePost {
            seat: Seat((dealer_offset + 2) % seat_count),
            amount: big_blind_amount,
        },
    })
}

/// Picks the dealer uniformly at random.
pub fn choose_dealer(seat_count: usize, rng: &mut dyn RandomSource) -> Result<usize, GameError> {
    check_seat_count(seat_count)?;
    Ok(rng.next_index(seat_count))
}

/// All seats of an `seat_count` table in table order.
pub fn seats(seat_count: usize) -> Vec<Seat> {
    (0..seat_count).map(Seat).collect()
}

fn check_seat_count(seat_count: usize) -> Result<(), GameError> {
    if !(MIN_SEATS..=MAX_SEATS).contains(&seat_count) {
        return Err(GameError::InvalidTable(format!(
            "seat count must be between {} and {}, got {}",
            MIN_SEATS, MAX_SEATS, seat_count
        )));
    }
    Ok(())
}

/// Table-level settings that survive from one hand to the next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub seat_count: usize,
    pub big_blind: u32,
    /// 0-based dealer seat; chosen at random each hand when unset
    pub dealer: Option<usize>,
    /// RNG seed for shuffles and dealer picks; entropy when unset
    pub seed: Option<u64>,
    pub settlement: SettlementRule,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            seat_count: DEFAULT_SEATS,
            big_blind: DEFAULT_BIG_BLIND,
            dealer: None,
            seed: None,
            settlement: SettlementRule::default(),
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        check_seat_count(self.seat_count)
            .map_err(|e| GameError::InvalidConfig(e.to_string()))?;
        if self.big_blind < 2 {
            return Err(GameError::InvalidConfig(
                "big_blind must be at least 2".to_string(),
            ));
        }
        if let Some(dealer) = self.dealer {
            if dealer >= self.seat_count {
                return Err(GameError::InvalidConfig(format!(
                    "dealer must be below seat_count ({})",
                    self.seat_count
                )));
            }
        }
        Ok(())
    }
}
