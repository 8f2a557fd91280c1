//! Configuration command handler.
//!
//! Prints the resolved configuration, each value paired with where it came
//! from (default, file, or environment).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "bb_size": {
//!     "value": 40,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config::ConfigResolved;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command for an already loaded configuration.
pub fn handle_cfg_command(resolved: &ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "bb_size": {
            "value": config.bb_size,
            "source": sources.bb_size,
        },
        "starting_stack": {
            "value": config.starting_stack,
            "source": sources.starting_stack,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "log_filter": {
            "value": config.log_filter,
            "source": sources.log_filter,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
