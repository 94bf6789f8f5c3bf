//! Core data models for the ATM simulator
//!
//! Amounts, ledger record identifiers and the ledger records themselves.

pub mod ids;
pub mod money;
pub mod transaction;

pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use transaction::{TransactionKind, TransactionRecord};
