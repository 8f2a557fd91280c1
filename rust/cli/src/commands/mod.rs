//! Command handler modules for the potsettle CLI.
//!
//! Each subcommand lives in its own module with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in, never taken from the process
//! - Errors propagated through `CliError`

mod cfg;
mod deal;
mod settle;
mod verify;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use settle::handle_settle_command;
pub use verify::handle_verify_command;
