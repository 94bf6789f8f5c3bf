//! Transaction display formatting
//!
//! Renders ledger records as the one-line history entries shown by the
//! "Print Activities" menu option.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};

use crate::models::TransactionRecord;

/// Message shown when the ledger holds no records
pub const EMPTY_HISTORY: &str = "No transaction history available.";

/// Default timestamp pattern for history lines
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Whether `pattern` is a strftime pattern chrono can render
pub fn is_valid_timestamp_format(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

/// Render `timestamp` with `pattern`, falling back to the default pattern
/// when chrono cannot render it
fn format_timestamp(timestamp: &DateTime<Local>, pattern: &str) -> String {
    let mut rendered = String::new();
    if write!(rendered, "{}", timestamp.format(pattern)).is_ok() {
        return rendered;
    }

    tracing::warn!(pattern, "unusable timestamp format, using default");
    timestamp.format(DEFAULT_TIMESTAMP_FORMAT).to_string()
}

/// Format a single record, e.g. `[2025-02-19 10:00:00] Deposited: $500.00`
pub fn format_record(record: &TransactionRecord, timestamp_format: &str, symbol: &str) -> String {
    format!(
        "[{}] {}: {}",
        format_timestamp(&record.timestamp(), timestamp_format),
        record.kind().verb(),
        record.amount().format_with_symbol(symbol)
    )
}

/// Format a list of records, one per line, in the order given
pub fn format_history(records: &[TransactionRecord], timestamp_format: &str, symbol: &str) -> String {
    if records.is_empty() {
        return EMPTY_HISTORY.to_string();
    }

    records
        .iter()
        .map(|record| format_record(record, timestamp_format, symbol))
        .collect::<Vec<_>>()
        .join("\n")
}
