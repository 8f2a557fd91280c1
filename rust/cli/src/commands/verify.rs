//! Verify command handler module.
//!
//! Settles every record of a JSONL hand file and reports each one that fails,
//! keyed by line number. Besides the engine's own validation it re-checks:
//!
//! - Chip conservation (net winnings sum to zero)
//! - The pot equals the sum of the awarded tiers
//! - Unique ids across the file (when ids are present)
//!
//! Errors are collected using the shared `BatchValidationError` pattern.

use std::collections::HashMap;
use std::io::Write;

use potsettle_engine::{Hand, SettlementResult, settle};
use tracing::debug;

use crate::error::{BatchValidationError, CliError};
use crate::io_utils::{jsonl_lines, read_text_auto};
use crate::ui;

/// Line-numbered verification failure.
type VerifyError = BatchValidationError<usize>;

/// Handle the verify command.
///
/// Prints `Verified N hands: M settled, K rejected` to `out` and one
/// `line: message` entry per rejected record to `err`.
///
/// # Returns
///
/// `Ok(())` when every record settles cleanly, otherwise an `Err` that maps
/// to exit code `2`.
pub fn handle_verify_command(
    input: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = read_text_auto(input)?;
    let mut errors: Vec<VerifyError> = Vec::new();
    let mut seen_ids: HashMap<String, usize> = HashMap::new();
    let mut total = 0usize;

    for (line_no, line) in jsonl_lines(&content) {
        total += 1;
        let hand: Hand = match serde_json::from_str(line) {
            Ok(h) => h,
            Err(e) => {
                errors.push(VerifyError {
                    item_context: line_no,
                    message: format!("Invalid hand record: {}", e),
                });
                continue;
            }
        };

        if !hand.id.is_empty() {
            if let Some(first) = seen_ids.get(&hand.id) {
                errors.push(VerifyError {
                    item_context: line_no,
                    message: format!("Duplicate hand id {} (first seen on line {})", hand.id, first),
                });
                continue;
            }
            seen_ids.insert(hand.id.clone(), line_no);
        }

        match settle(&hand) {
            Ok(result) => {
                if let Some(message) = audit(&result) {
                    errors.push(VerifyError {
                        item_context: line_no,
                        message,
                    });
                }
            }
            Err(e) => errors.push(VerifyError {
                item_context: line_no,
                message: e.to_string(),
            }),
        }
    }

    if total == 0 {
        ui::display_warning(err, &format!("{} holds no hand records", input))?;
    }
    for e in &errors {
        writeln!(err, "{}", e)?;
    }
    let rejected = errors.len();
    writeln!(
        out,
        "Verified {} hands: {} settled, {} rejected",
        total,
        total - rejected,
        rejected
    )?;
    debug!(total, rejected, "verify finished");

    if rejected > 0 {
        return Err(CliError::InvalidInput(format!(
            "{} of {} hands rejected",
            rejected, total
        )));
    }
    Ok(())
}

// Cross-checks a settlement result; the engine guarantees these, so a hit
// points at a broken invariant.
fn audit(result: &SettlementResult) -> Option<String> {
    let net = result.net_total();
    if net != 0 {
        return Some(format!("Chip conservation violated: net winnings sum to {}", net));
    }
    let awarded: u64 = result.pots.iter().map(|p| p.amount).sum();
    if awarded != result.pot {
        return Some(format!(
            "Pot mismatch: tiers award {} of {}",
            awarded, result.pot
        ));
    }
    None
}
