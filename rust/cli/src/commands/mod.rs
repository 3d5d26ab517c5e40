//! Command handlers for the `holdem` CLI.
//!
//! Each subcommand lives in its own module and follows one pattern:
//!
//! - Public handler: `pub fn handle_COMMAND_command(...) -> Result<_, CliError>`
//! - Output streams (`&mut dyn Write`) and input (`&mut dyn BufRead`) passed in
//! - Errors propagated via [`CliError`]

pub mod cfg;
pub mod deal;
pub mod play;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::{PlayOutcome, handle_play_command};

use crate::config::{self, FlagOverrides};
use crate::error::CliError;
use crate::ui;
use holdem_engine::table::TableConfig;
use std::io::Write;

/// Resolves defaults, file, environment and `flags` into an engine
/// configuration. An unset seed is drawn here so it can be printed and
/// replayed.
pub(crate) fn resolve_table(
    flags: &FlagOverrides,
    err: &mut dyn Write,
) -> Result<TableConfig, CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r.apply_flags(flags),
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(e.into());
        }
    };
    let mut table = match resolved.config.table_config() {
        Ok(table) => table,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(e.into());
        }
    };
    if table.seed.is_none() {
        table.seed = Some(rand::random());
    }
    Ok(table)
}
