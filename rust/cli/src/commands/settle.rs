//! Settle command handler.
//!
//! Reads one or more hand records, stamps an id and timestamp on records that
//! lack them, settles each one and prints the response the hands service
//! returns: `{"id", "result", "short_line"}`.

use std::collections::BTreeMap;
use std::io::Write;

use chrono::Utc;
use potsettle_engine::{Hand, settle};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::error::CliError;
use crate::io_utils::read_text_auto;

#[derive(Debug, Serialize)]
struct SettleResponse<'a> {
    id: &'a str,
    /// Seat index to net winnings
    result: &'a BTreeMap<usize, i64>,
    short_line: &'a str,
}

/// Handle the settle command.
///
/// `input` may hold a single JSON object (pretty-printed or not) or JSONL.
/// Processing stops at the first record that fails to parse or settle;
/// results already written stay on `out`.
pub fn handle_settle_command(
    input: &str,
    pretty: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let content = read_text_auto(input)?;
    let mut settled = 0usize;

    for record in serde_json::Deserializer::from_str(&content).into_iter::<Hand>() {
        let mut hand = record?;
        stamp(&mut hand);
        let result = settle(&hand)?;

        let response = SettleResponse {
            id: &hand.id,
            result: &result.winnings,
            short_line: &result.short_line,
        };
        let text = if pretty {
            serde_json::to_string_pretty(&response)?
        } else {
            serde_json::to_string(&response)?
        };
        writeln!(out, "{}", text)?;
        settled += 1;
        info!(id = %hand.id, pot = result.pot, "settled hand");
    }

    if settled == 0 {
        return Err(CliError::InvalidInput(format!(
            "{}: no hand records found",
            input
        )));
    }
    Ok(())
}

/// Fills in a missing id (UUID v4) and creation time.
pub(crate) fn stamp(hand: &mut Hand) {
    if hand.id.trim().is_empty() {
        hand.id = Uuid::new_v4().to_string();
    }
    if hand.created_at.is_none() {
        hand.created_at = Some(Utc::now());
    }
}
