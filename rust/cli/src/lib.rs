//! # Hold'em CLI Library
//!
//! Command-line front end for `holdem-engine`: deal a hand, play one
//! interactively, and inspect the resolved configuration.
//!
//! ## Main Entry Point
//!
//! [`run`] parses command-line arguments, dispatches to the subcommand and
//! returns the process exit code. [`run_with_input`] does the same with an
//! explicit input stream for `play`.
//!
//! ## Example Usage
//!
//! ```
//! use std::io;
//! let args = vec!["holdem", "deal", "--seed", "42"];
//! let code = holdem_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `deal`: Deal a single hand and show roles and hole cards
//! - `play`: Play one hand, entering each seat's action in turn
//! - `cfg`: Display the resolved configuration and its sources

use clap::Parser;
use std::io::{BufRead, Write};

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, HoldemCli};
use commands::play::PlayOptions;
use commands::{PlayOutcome, handle_cfg_command, handle_deal_command, handle_play_command};
use config::FlagOverrides;

pub use error::CliError;

const COMMANDS: &[&str] = &["deal", "play", "cfg"];

/// Main entry point for the CLI application.
///
/// `play` reads actions from the process's stdin.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` when a hand is abandoned
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// [`run`] with the input stream supplied by the caller.
///
/// # Example
///
/// ```
/// use std::io::{self, Cursor};
/// let mut input = Cursor::new(b"q\n".to_vec());
/// let code = holdem_cli::run_with_input(
///     ["holdem", "play", "--seed", "1"],
///     &mut input,
///     &mut io::sink(),
///     &mut io::sink(),
/// );
/// assert_eq!(code, 130);
/// ```
pub fn run_with_input<I, S>(
    args: I,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HoldemCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_usage(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out, err).map(|()| exit_code::SUCCESS),
        Commands::Deal {
            seed,
            seats,
            dealer,
        } => handle_deal_command(
            seed,
            seats.map(usize::from),
            dealer.map(usize::from),
            out,
            err,
        )
        .map(|()| exit_code::SUCCESS),
        Commands::Play {
            seed,
            seats,
            big_blind,
            dealer,
            settlement,
            json,
        } => {
            let opts = PlayOptions {
                flags: FlagOverrides {
                    seats: seats.map(usize::from),
                    big_blind,
                    seed,
                    dealer: dealer.map(usize::from),
                    settlement: settlement.map(Into::into),
                },
                json,
            };
            handle_play_command(&opts, out, err, stdin).map(|outcome| match outcome {
                PlayOutcome::Finished => exit_code::SUCCESS,
                PlayOutcome::Quit => exit_code::INTERRUPTED,
            })
        }
    };

    match result {
        Ok(code) => code,
        // Config errors are reported where they are detected.
        Err(CliError::Config(_)) => exit_code::ERROR,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn report_usage(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version go to stdout and succeed.
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }

    let _ = writeln!(err, "{}", e);
    let _ = writeln!(err);
    let _ = writeln!(err, "Hold'em CLI");
    let _ = writeln!(err, "Usage: holdem <command> [options]\n");
    let _ = writeln!(err, "Commands:");
    for c in COMMANDS {
        let _ = writeln!(err, "  {}", c);
    }
    let _ = writeln!(err, "\nFor full help, run: holdem --help");
    exit_code::ERROR
}
