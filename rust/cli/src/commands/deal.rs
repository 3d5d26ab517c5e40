//! Deal command handler.
//!
//! Starts one hand and prints the roles, every seat's hole cards in deal
//! order, and who acts first. Nothing is played.

use super::resolve_table;
use crate::config::FlagOverrides;
use crate::error::CliError;
use crate::formatters::{format_board, format_roles};
use holdem_engine::session::GameSession;
use holdem_engine::table::Seat;
use std::io::Write;

pub fn handle_deal_command(
    seed: Option<u64>,
    seats: Option<usize>,
    dealer: Option<usize>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let flags = FlagOverrides {
        seed,
        seats,
        dealer,
        ..FlagOverrides::default()
    };
    let table = resolve_table(&flags, err)?;
    let seed = table.seed.unwrap_or_default();
    let mut session = GameSession::new(table)?;
    let snapshot = session.start_hand()?;

    writeln!(out, "deal: seats={} seed={}", snapshot.seat_count, seed)?;
    writeln!(out, "{}", format_roles(&snapshot.roles))?;
    let dealer = snapshot.roles.dealer.seat.index();
    for offset in 1..=snapshot.seat_count {
        let seat = Seat::new((dealer + offset) % snapshot.seat_count);
        if let Some(cards) = snapshot.hole_cards_for(seat) {
            writeln!(out, "{}: {}", seat, format_board(&cards))?;
        }
    }
    if let Some(seat) = snapshot.acting_seat {
        writeln!(out, "First to act: {}", seat)?;
    }
    writeln!(out, "Deck remaining: {}", snapshot.deck_remaining)?;
    Ok(())
}
