//! # Play Command
//!
//! One interactive hand at a single table. Every seat is driven from the same
//! input stream: the prompt names the acting seat and its legal actions, and
//! each line is parsed and submitted for that seat.
//!
//! ## Features
//!
//! - Input validation with clear error messages; rejected actions leave the
//!   hand untouched and the same seat is asked again
//! - Round and board display as each round opens
//! - Graceful quit handling (`q`, `quit`, or end of input)
//! - `--json` prints the full session snapshot after every accepted action

use crate::config::FlagOverrides;
use crate::error::CliError;
use crate::formatters::{format_action, format_board, format_legal, format_outcome, format_roles};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_player_action};
use holdem_engine::ledger::Round;
use holdem_engine::round::SettlementRule;
use holdem_engine::session::{GameSession, SessionSnapshot};
use std::io::{BufRead, Write};

use super::resolve_table;

/// How an interactive hand ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The hand reached an outcome
    Finished,
    /// The player quit, or input ran out, first
    Quit,
}

/// Options for [`handle_play_command`], straight from the command line.
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    pub flags: FlagOverrides,
    pub json: bool,
}

/// Handle the play command: deal one hand and run it to completion.
///
/// # Examples
///
/// ```ignore
/// use std::io::Cursor;
///
/// let mut input = Cursor::new(b"fold\nfold\n".to_vec());
/// let outcome = handle_play_command(&opts, &mut out, &mut err, &mut input)?;
/// assert_eq!(outcome, PlayOutcome::Finished);
/// ```
pub fn handle_play_command(
    opts: &PlayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<PlayOutcome, CliError> {
    let table = resolve_table(&opts.flags, err)?;
    let seed = table.seed.unwrap_or_default();

    if table.settlement == SettlementRule::Strict {
        ui::display_warning(
            err,
            "strict settlement: a round where every seat checks does not end, and a fold keeps later rounds open. Use --settlement active-seats for regular play.",
        )?;
    }

    writeln!(
        out,
        "play: seats={} big_blind={} seed={}",
        table.seat_count, table.big_blind, seed
    )?;

    let mut session = GameSession::new(table)?;
    let mut snapshot = session.start_hand()?;
    writeln!(out, "{}", format_roles(&snapshot.roles))?;
    for hand in &snapshot.hole_cards {
        writeln!(out, "{}: {}", hand.seat, format_board(&hand.cards))?;
    }
    announce_round(&snapshot, out)?;

    loop {
        if let Some(outcome) = snapshot.outcome {
            writeln!(out, "Hand complete: {}", format_outcome(&outcome))?;
            return Ok(PlayOutcome::Finished);
        }
        let Some(seat) = snapshot.acting_seat else {
            return Err(CliError::Engine(
                holdem_engine::errors::GameError::NoEligibleSeat,
            ));
        };

        write!(
            out,
            "{} to act ({}): ",
            seat,
            format_legal(&snapshot.legal_actions)
        )?;
        out.flush()?;

        let Some(line) = read_stdin_line(stdin) else {
            writeln!(out)?;
            writeln!(out, "Input closed; hand abandoned.")?;
            return Ok(PlayOutcome::Quit);
        };

        let (kind, amount) = match parse_player_action(&line) {
            ParseResult::Action { kind, amount } => (kind, amount),
            ParseResult::Quit => {
                writeln!(out, "Hand abandoned.")?;
                return Ok(PlayOutcome::Quit);
            }
            ParseResult::Invalid(msg) => {
                ui::write_error(err, &msg)?;
                continue;
            }
        };

        let round = snapshot.round;
        match session.submit_action(seat, kind, amount) {
            Ok(next) => {
                if let Some(entry) = next.ledger.entries(round).last() {
                    writeln!(out, "{}: {}", seat, format_action(entry))?;
                }
                if opts.json {
                    let json = next.to_json_pretty().map_err(std::io::Error::other)?;
                    writeln!(out, "{}", json)?;
                }
                let advanced = next.round != round;
                snapshot = next;
                if advanced && snapshot.round.is_betting() && snapshot.outcome.is_none() {
                    announce_round(&snapshot, out)?;
                }
            }
            Err(e) => {
                ui::write_error(err, &format!("Invalid action: {}", e))?;
            }
        }
    }
}

fn announce_round(snapshot: &SessionSnapshot, out: &mut dyn Write) -> Result<(), CliError> {
    match snapshot.round {
        Round::PreFlop => writeln!(out, "== {} ==", snapshot.round)?,
        _ => writeln!(
            out,
            "== {} == {}",
            snapshot.round,
            format_board(&snapshot.community_cards)
        )?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Cursor;

    fn opts(seats: usize, settlement: SettlementRule) -> PlayOptions {
        PlayOptions {
            flags: FlagOverrides {
                seed: Some(42),
                seats: Some(seats),
                dealer: Some(1),
                settlement: Some(settlement),
                ..FlagOverrides::default()
            },
            json: false,
        }
    }

    fn run(opts: &PlayOptions, input: &str) -> (Result<PlayOutcome, CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let result = handle_play_command(opts, &mut out, &mut err, &mut stdin);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    #[serial]
    fn test_quit_immediately() {
        let (result, out, _) = run(&opts(3, SettlementRule::Strict), "q\n");
        assert_eq!(result.unwrap(), PlayOutcome::Quit);
        assert!(out.contains("play: seats=3 big_blind=40 seed=42"));
        assert!(out.contains("Hand abandoned."));
    }

    #[test]
    #[serial]
    fn test_eof_is_a_quit() {
        let (result, out, _) = run(&opts(3, SettlementRule::Strict), "");
        assert_eq!(result.unwrap(), PlayOutcome::Quit);
        assert!(out.contains("Input closed"));
    }

    #[test]
    #[serial]
    fn test_everyone_folds_to_the_last_seat() {
        // Three seats, dealer seat 1: seat 1 acts first pre-flop.
        let (result, out, _) = run(&opts(3, SettlementRule::ActiveSeats), "fold\nfold\n");
        assert_eq!(result.unwrap(), PlayOutcome::Finished);
        assert!(out.contains("Seat 1 to act (fold/check/bet/all-in): "));
        assert!(out.contains("Seat 1: fold"));
        assert!(out.contains("Seat 2: fold"));
        assert!(out.contains("Hand complete: Seat 3 wins uncontested"));
    }

    #[test]
    #[serial]
    fn test_strict_needs_the_last_seat_to_act() {
        let (result, out, _) = run(&opts(3, SettlementRule::Strict), "fold\nfold\ncheck\n");
        assert_eq!(result.unwrap(), PlayOutcome::Finished);
        assert!(out.contains("Seat 3 to act (fold/check/bet/all-in): "));
        assert!(out.contains("Hand complete: Seat 3 wins uncontested"));
    }

    #[test]
    #[serial]
    fn test_rejected_action_asks_again() {
        let (result, out, err) = run(
            &opts(2, SettlementRule::ActiveSeats),
            "raise 10\nbet\nfold\n",
        );
        assert_eq!(result.unwrap(), PlayOutcome::Finished);
        assert!(err.contains("Error: Invalid action:"));
        assert!(err.contains("requires an amount"));
        assert!(out.contains("Hand complete:"));
    }

    #[test]
    #[serial]
    fn test_active_seats_plays_through_to_showdown() {
        let input = "check\ncheck\n".repeat(4);
        let (result, out, err) = run(&opts(2, SettlementRule::ActiveSeats), &input);
        assert_eq!(result.unwrap(), PlayOutcome::Finished);
        assert!(out.contains("== flop == ["));
        assert!(out.contains("== turn == ["));
        assert!(out.contains("== river == ["));
        assert!(out.contains("Hand complete: Showdown"));
        assert!(!err.contains("WARNING"));
    }

    #[test]
    #[serial]
    fn test_strict_settlement_warns() {
        let (_, _, err) = run(&opts(2, SettlementRule::Strict), "q\n");
        assert!(err.contains("WARNING: strict settlement"));
    }

    #[test]
    #[serial]
    fn test_json_prints_snapshot_after_each_action() {
        let mut o = opts(3, SettlementRule::Strict);
        o.json = true;
        let (result, out, _) = run(&o, "fold\nq\n");
        assert_eq!(result.unwrap(), PlayOutcome::Quit);
        assert!(out.contains("\"actingSeat\": 2"));
        assert!(out.contains("\"action\": \"fold\""));
    }
}
