//! # potsettle CLI Library
//!
//! Command-line front end for the potsettle hand settlement engine.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ## Available Subcommands
//!
//! - `settle`: Settle JSON/JSONL hand records and print winnings and short lines
//! - `verify`: Settle every record of a JSONL file and report rejected hands
//! - `deal`: Print a seeded sample hand record
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod io_utils;
pub mod logging;
pub mod ui;

use cli::{Commands, PotsettleCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_settle_command, handle_verify_command,
};

pub use error::{BatchValidationError, CliError};

const COMMANDS: &[&str] = &["settle", "verify", "deal", "cfg"];

/// Main entry point for the CLI application.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["potsettle", "deal", "--seed", "42"];
/// let code = potsettle_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match PotsettleCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_usage(e, out, err),
    };

    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            let _ = ui::write_error(err, &CliError::Config(e.to_string()).to_string());
            return exit_code::ERROR;
        }
    };
    logging::init_logging(&resolved.config.log_filter);

    let outcome = match cli.cmd {
        Commands::Settle { input, pretty } => handle_settle_command(&input, pretty, out),
        Commands::Verify { input } => handle_verify_command(&input, out, err),
        Commands::Deal {
            seed,
            bb_size,
            stack,
        } => handle_deal_command(seed, bb_size, stack, &resolved.config, out),
        Commands::Cfg => handle_cfg_command(&resolved, out),
    };

    match outcome {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            if writeln!(err, "Error: {}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::ERROR
        }
    }
}

fn report_usage(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if write!(out, "{}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::SUCCESS
        }
        _ => {
            if writeln!(err, "{}", e).is_err()
                || writeln!(err).is_err()
                || writeln!(err, "potsettle hand settlement CLI").is_err()
                || writeln!(err, "Usage: potsettle <command> [options]\n").is_err()
                || writeln!(err, "Commands:").is_err()
            {
                return exit_code::ERROR;
            }
            for c in COMMANDS {
                if writeln!(err, "  {}", c).is_err() {
                    return exit_code::ERROR;
                }
            }
            if writeln!(err, "\nFor full help, run: potsettle --help").is_err() {
                return exit_code::ERROR;
            }
            exit_code::ERROR
        }
    }
}
