use serde::{Deserialize, Serialize};

use crate::cards::{full_deck, Card};
use crate::errors::GameError;
use crate::ledger::Round;
use crate::random::RandomSource;
use crate::table::Seat;

/// Two hole cards dealt to one seat.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeatHand {
    pub seat: Seat,
    pub cards: [Card; 2],
}

/// One hand's worth of cards. Cards are consumed from the front and never
/// handed out twice; a new hand gets a new deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
}

/// Builds the 52 cards and applies a uniform Fisher-Yates permutation.
pub fn build_shuffled_deck(rng: &mut dyn RandomSource) -> Vec<Card> {
    let mut cards = full_deck();
    for i in (1..cards.len()).rev() {
        let j = rng.next_index(i + 1);
        cards.swap(i, j);
    }
    cards
}

impl Deck {
    pub fn shuffled(rng: &mut dyn RandomSource) -> Self {
        Self::from_cards(build_shuffled_deck(rng))
    }

    /// A deck in exactly the given order, front first.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards, position: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    pub fn remaining_cards(&self) -> &[Card] {
        &self.cards[self.position..]
    }

    fn take(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(GameError::InsufficientDeck {
                requested: n,
                remaining,
            });
        }
        let drawn = self.cards[self.position..self.position + n].to_vec();
        self.position += n;
        Ok(drawn)
    }

    /// Deals two cards to every seat, starting with the seat after the dealer
    /// and wrapping around the table. Hands come back in deal order.
    pub fn deal_hole_cards(
        &mut self,
        seat_count: usize,
        dealer_offset: usize,
    ) -> Result<Vec<SeatHand>, GameError> {
        if seat_count == 0 {
            return Err(GameError::InvalidTable("no seats to deal to".into()));
        }
        let needed = 2 * seat_count;
        if self.remaining() < needed {
            return Err(GameError::InsufficientDeck {
                requested: needed,
                remaining: self.remaining(),
            });
        }
        let start = (dealer_offset + 1) % seat_count;
        let mut hands = Vec::with_capacity(seat_count);
        for i in 0..seat_count {
            let pair = self.take(2)?;
            hands.push(SeatHand {
                seat: Seat::new((start + i) % seat_count),
                cards: [pair[0], pair[1]],
            });
        }
        Ok(hands)
    }

    /// Reveals the community cards that open `round`: three for the flop, one
    /// each for turn and river, none otherwise.
    pub fn draw_community_cards(&mut self, round: Round) -> Result<Vec<Card>, GameError> {
        self.take(round.community_cards_to_draw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededRandom;

    #[test]
    fn draw_fails_without_consuming_when_short() {
        let mut deck = Deck::from_cards(full_deck()[..2].to_vec());
        let err = deck.draw_community_cards(Round::Flop).unwrap_err();
        assert_eq!(
            err,
            GameError::InsufficientDeck {
                requested: 3,
                remaining: 2
            }
        );
        assert_eq!(deck.remaining(), 2);
    }

    #[test]
    fn preflop_and_complete_draw_nothing() {
        let mut deck = Deck::shuffled(&mut SeededRandom::new_with_seed(3));
        assert!(deck.draw_community_cards(Round::PreFlop).unwrap().is_empty());
        assert!(deck.draw_community_cards(Round::Complete).unwrap().is_empty());
        assert_eq!(deck.remaining(), 52);
    }

    #[test]
    fn hole_cards_start_after_dealer_and_wrap() {
        let mut deck = Deck::from_cards(full_deck());
        let hands = deck.deal_hole_cards(6, 4).unwrap();
        let seats: Vec<usize> = hands.iter().map(|h| h.seat.index()).collect();
        assert_eq!(seats, vec![5, 0, 1, 2, 3, 4]);
        // consecutive pairs from the front of the deck
        let pack = full_deck();
        assert_eq!(hands[0].cards, [pack[0], pack[1]]);
        assert_eq!(hands[1].cards, [pack[2], pack[3]]);
        assert_eq!(deck.remaining(), 40);
    }
}
