//! Display formatting for terminal output

pub mod transaction;

pub use transaction::{
    format_history, format_record, is_valid_timestamp_format, DEFAULT_TIMESTAMP_FORMAT,
    EMPTY_HISTORY,
};
