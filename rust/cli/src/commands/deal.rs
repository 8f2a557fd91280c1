//! Deal command handler.
//!
//! Prints a seeded sample hand record as JSON, ready to feed back into
//! `settle` or `verify`. Command-line values win over configuration.

use std::io::Write;

use potsettle_engine::sample::checked_down_hand;

use crate::config::Config;
use crate::error::CliError;

/// Handle the deal command.
///
/// Without a seed from the command line or configuration, a random one is
/// drawn and recorded in the hand id (`sample-<seed>`).
pub fn handle_deal_command(
    seed: Option<u64>,
    bb_size: Option<u32>,
    stack: Option<u32>,
    cfg: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let bb_size = bb_size.unwrap_or(cfg.bb_size);
    let stack = stack.unwrap_or(cfg.starting_stack);
    if stack <= bb_size {
        return Err(CliError::InvalidInput(format!(
            "stack {} must exceed the big blind {}",
            stack, bb_size
        )));
    }

    let hand = checked_down_hand(seed, bb_size, stack);
    writeln!(out, "{}", serde_json::to_string(&hand)?)?;
    Ok(())
}
