//! Transaction ledger
//!
//! Append-only, chronologically ordered list of balance mutations. Used for
//! display only; the balance is never recomputed from it.

use std::cell::RefCell;

use crate::display::{format_history, DEFAULT_TIMESTAMP_FORMAT};
use crate::error::{AtmError, AtmResult};
use crate::models::{Money, TransactionKind, TransactionRecord};

/// Append-only record of deposits and withdrawals
#[derive(Debug)]
pub struct TransactionLedger {
    records: RefCell<Vec<TransactionRecord>>,
    timestamp_format: String,
    currency_symbol: String,
}

impl Default for TransactionLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionLedger {
    /// Create an empty ledger with the default display format
    pub fn new() -> Self {
        Self::with_format(DEFAULT_TIMESTAMP_FORMAT, "$")
    }

    /// Create an empty ledger with a custom timestamp pattern and currency symbol
    pub fn with_format(timestamp_format: impl Into<String>, currency_symbol: impl Into<String>) -> Self {
        Self {
            records: RefCell::new(Vec::new()),
            timestamp_format: timestamp_format.into(),
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Append a record stamped with the current time
    ///
    /// Amounts must be positive; nothing is appended on error.
    pub fn record(&self, kind: TransactionKind, amount: Money) -> AtmResult<TransactionRecord> {
        if !amount.is_positive() {
            return Err(AtmError::InvalidArgument(format!(
                "Transaction amount must be positive, got {}",
                amount
            )));
        }

        let record = TransactionRecord::new(kind, amount);
        self.records.borrow_mut().push(record.clone());
        tracing::debug!(id = %record.id(), %kind, %amount, "ledger entry recorded");
        Ok(record)
    }

    /// Append a record from a free-form tag such as `"deposit"` or `"withdraw"`
    ///
    /// Unknown tags fail with [`AtmError::InvalidArgument`].
    pub fn record_tagged(&self, tag: &str, amount: Money) -> AtmResult<TransactionRecord> {
        let kind: TransactionKind = tag.parse()?;
        self.record(kind, amount)
    }

    /// Snapshot of every record in insertion order
    pub fn all(&self) -> Vec<TransactionRecord> {
        self.records.borrow().clone()
    }

    /// Records of a single kind, in insertion order
    pub fn filtered(&self, kind: TransactionKind) -> Vec<TransactionRecord> {
        self.records
            .borrow()
            .iter()
            .filter(|record| record.kind() == kind)
            .cloned()
            .collect()
    }

    /// Human-readable history, one line per record
    pub fn formatted(&self) -> String {
        format_history(
            &self.records.borrow(),
            &self.timestamp_format,
            &self.currency_symbol,
        )
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::EMPTY_HISTORY;

    fn dollars(d: i64) -> Money {
        Money::from_dollars(d)
    }

    #[test]
    fn test_record_deposit() {
        let ledger = TransactionLedger::new();
        ledger.record(TransactionKind::Deposit, dollars(500)).unwrap();

        let records = ledger.all();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind(), TransactionKind::Deposit);
        assert_eq!(records[0].amount(), dollars(500));
        assert!(ledger.formatted().contains("Deposited: $500.0"));
    }

    #[test]
    fn test_record_withdrawal() {
        let ledger = TransactionLedger::new();
        ledger.record(TransactionKind::Withdrawal, dollars(200)).unwrap();
        assert_eq!(ledger.len(), 1);
        assert!(ledger.formatted().contains("Withdrawn: $200.0"));
    }

    #[test]
    fn test_record_rejects_non_positive_amount() {
        let ledger = TransactionLedger::new();
        assert!(ledger.record(TransactionKind::Deposit, Money::zero()).is_err());
        assert!(ledger.record(TransactionKind::Withdrawal, dollars(-5)).is_err());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_record_tagged() {
        let ledger = TransactionLedger::new();
        ledger.record_tagged("deposit", dollars(10)).unwrap();
        ledger.record_tagged("withdraw", dollars(5)).unwrap();
        assert_eq!(ledger.filtered(TransactionKind::Deposit).len(), 1);
        assert_eq!(ledger.filtered(TransactionKind::Withdrawal).len(), 1);
    }

    #[test]
    fn test_invalid_transaction_type() {
        let ledger = TransactionLedger::new();
        let err = ledger.record_tagged("invalidType", dollars(100)).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("Invalid transaction type"));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_filtered_deposits_keep_order() {
        let ledger = TransactionLedger::new();
        ledger.record(TransactionKind::Deposit, dollars(100)).unwrap();
        ledger.record(TransactionKind::Withdrawal, dollars(50)).unwrap();
        ledger.record(TransactionKind::Deposit, dollars(200)).unwrap();

        let deposits = ledger.filtered(TransactionKind::Deposit);
        assert_eq!(deposits.len(), 2);
        assert_eq!(deposits[0].amount(), dollars(100));
        assert_eq!(deposits[1].amount(), dollars(200));
    }

    #[test]
    fn test_filtered_withdrawals_keep_order() {
        let ledger = TransactionLedger::new();
        ledger.record(TransactionKind::Deposit, dollars(300)).unwrap();
        ledger.record(TransactionKind::Withdrawal, dollars(75)).unwrap();
        ledger.record(TransactionKind::Withdrawal, dollars(25)).unwrap();

        let withdrawals = ledger.filtered(TransactionKind::Withdrawal);
        assert_eq!(withdrawals.len(), 2);
        assert_eq!(withdrawals[0].amount(), dollars(75));
        assert_eq!(withdrawals[1].amount(), dollars(25));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let ledger = TransactionLedger::new();
        ledger.record(TransactionKind::Deposit, dollars(1)).unwrap();

        let mut snapshot = ledger.all();
        snapshot.clear();
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_formatted_order() {
        let ledger = TransactionLedger::new();
        ledger.record(TransactionKind::Deposit, dollars(500)).unwrap();
        ledger.record(TransactionKind::Withdrawal, dollars(200)).unwrap();

        let text = ledger.formatted();
        let deposit_at = text.find("Deposited: $500.0").unwrap();
        let withdrawal_at = text.find("Withdrawn: $200.0").unwrap();
        assert!(deposit_at < withdrawal_at);
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_empty_history_message() {
        assert_eq!(TransactionLedger::new().formatted(), EMPTY_HISTORY);
        assert_eq!(EMPTY_HISTORY, "No transaction history available.");
    }

    #[test]
    fn test_custom_currency_symbol() {
        let ledger = TransactionLedger::with_format("%Y", "£");
        ledger.record(TransactionKind::Deposit, dollars(3)).unwrap();
        assert!(ledger.formatted().ends_with("Deposited: £3.00"));
    }
}
