//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "potsettle",
    version,
    about = "Six-max hold'em hand settlement"
)]
pub struct PotsettleCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Settle hand records and print winnings and the short line
    Settle {
        /// JSON hand record, or JSONL with one record per line (.zst accepted)
        #[arg(long)]
        input: String,
        /// Pretty-print each result
        #[arg(long)]
        pretty: bool,
    },
    /// Settle every record of a JSONL file and report failures
    Verify {
        /// JSONL file of hand records (.zst accepted)
        #[arg(long)]
        input: String,
    },
    /// Print a seeded sample hand record
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long = "bb-size", value_parser = clap::value_parser!(u32).range(1..))]
        bb_size: Option<u32>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        stack: Option<u32>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
