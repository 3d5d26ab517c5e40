//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use holdem_engine::round::SettlementRule;

#[derive(Parser, Debug)]
#[command(
    name = "holdem",
    author,
    version,
    about = "Single-table Texas Hold'em",
    long_about = None
)]
pub struct HoldemCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deal one hand and show roles and hole cards
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_parser = clap::value_parser!(u16).range(2..=10))]
        seats: Option<u16>,
        /// Dealer seat number (1-based)
        #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
        dealer: Option<u16>,
    },
    /// Play one hand, entering every seat's action in turn
    Play {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_parser = clap::value_parser!(u16).range(2..=10))]
        seats: Option<u16>,
        #[arg(long)]
        big_blind: Option<u32>,
        /// Dealer seat number (1-based)
        #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
        dealer: Option<u16>,
        #[arg(long, value_enum)]
        settlement: Option<Settlement>,
        /// Print the session snapshot as JSON after each accepted action
        #[arg(long)]
        json: bool,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

/// Command-line spelling of [`SettlementRule`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Settlement {
    /// Every seat must have acted and all totals must match
    Strict,
    /// Folded seats are ignored when deciding whether a round is over
    ActiveSeats,
}

impl From<Settlement> for SettlementRule {
    fn from(value: Settlement) -> Self {
        match value {
            Settlement::Strict => SettlementRule::Strict,
            Settlement::ActiveSeats => SettlementRule::ActiveSeats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_play_flags() {
        let cli = HoldemCli::try_parse_from([
            "holdem",
            "play",
            "--seats",
            "4",
            "--big-blind",
            "100",
            "--settlement",
            "active-seats",
            "--json",
        ])
        .unwrap();
        match cli.cmd {
            Commands::Play {
                seats,
                big_blind,
                settlement,
                json,
                ..
            } => {
                assert_eq!(seats, Some(4));
                assert_eq!(big_blind, Some(100));
                assert_eq!(settlement, Some(Settlement::ActiveSeats));
                assert!(json);
            }
            other => panic!("expected play, got {:?}", other),
        }
    }

    #[test]
    fn seat_count_is_range_checked() {
        assert!(HoldemCli::try_parse_from(["holdem", "deal", "--seats", "1"]).is_err());
        assert!(HoldemCli::try_parse_from(["holdem", "deal", "--seats", "11"]).is_err());
        assert!(HoldemCli::try_parse_from(["holdem", "deal", "--seats", "10"]).is_ok());
        assert!(HoldemCli::try_parse_from(["holdem", "deal", "--dealer", "0"]).is_err());
    }

    #[test]
    fn settlement_maps_to_engine_rule() {
        assert_eq!(
            SettlementRule::from(Settlement::ActiveSeats),
            SettlementRule::ActiveSeats
        );
        assert_eq!(SettlementRule::from(Settlement::Strict), SettlementRule::Strict);
    }
}
