//! # holdem-engine: Single-Table Hold'em Core
//!
//! Deals cards, tracks betting rounds, works out which actions the acting
//! seat may take, and advances turn order for one Texas Hold'em table. A
//! presentation layer drives it through [`session::GameSession`] and renders
//! the [`session::SessionSnapshot`] each call returns.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card)
//! - [`random`] - Injectable, seedable random source
//! - [`deck`] - Uniform shuffle, hole-card deal, community draws
//! - [`table`] - Seats, dealer/blind roles, table configuration
//! - [`ledger`] - Rounds and the append-only per-round action log
//! - [`rules`] - Legal actions and action validation
//! - [`round`] - Round settlement, advancement and turn order
//! - [`session`] - Hand orchestration and snapshots
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::ledger::ActionKind;
//! use holdem_engine::session::GameSession;
//! use holdem_engine::table::TableConfig;
//!
//! let config = TableConfig { seed: Some(42), ..TableConfig::default() };
//! let mut session = GameSession::new(config).unwrap();
//! let snapshot = session.start_or_reset_session(6, 40).unwrap();
//!
//! let seat = snapshot.acting_seat.unwrap();
//! assert!(snapshot.legal_actions.contains(&ActionKind::Bet));
//!
//! let snapshot = session.submit_action(seat, ActionKind::Bet, Some(40)).unwrap();
//! assert_ne!(snapshot.acting_seat, Some(seat));
//! ```
//!
//! ## Deterministic Dealing
//!
//! ```rust
//! use holdem_engine::deck::Deck;
//! use holdem_engine::random::SeededRandom;
//!
//! let a = Deck::shuffled(&mut SeededRandom::new_with_seed(7));
//! let b = Deck::shuffled(&mut SeededRandom::new_with_seed(7));
//! assert_eq!(a.remaining_cards(), b.remaining_cards());
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod ledger;
pub mod random;
pub mod round;
pub mod rules;
pub mod session;
pub mod table;
