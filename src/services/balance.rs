//! Account balance service
//!
//! Owns the session balance and, when a ledger is attached, records every
//! successful deposit and withdrawal in it. Failed operations change nothing.

use std::cell::Cell;

use crate::models::{Money, TransactionKind};

use super::ledger::TransactionLedger;

/// The single balance of an ATM session
#[derive(Debug)]
pub struct AccountBalance<'a> {
    balance: Cell<Money>,
    ledger: Option<&'a TransactionLedger>,
}

impl<'a> AccountBalance<'a> {
    /// Create a balance that records mutations in `ledger`
    pub fn new(initial: Money, ledger: &'a TransactionLedger) -> Self {
        Self::with_optional_ledger(initial, Some(ledger))
    }

    /// Create a balance with no ledger; mutations succeed but are not recorded
    pub fn without_ledger(initial: Money) -> Self {
        Self::with_optional_ledger(initial, None)
    }

    pub fn with_optional_ledger(initial: Money, ledger: Option<&'a TransactionLedger>) -> Self {
        Self {
            balance: Cell::new(initial),
            ledger,
        }
    }

    /// Current balance
    pub fn balance(&self) -> Money {
        self.balance.get()
    }

    /// Whether mutations are being recorded
    pub fn has_ledger(&self) -> bool {
        self.ledger.is_some()
    }

    /// The ledger mutations are recorded in, if any
    pub fn ledger(&self) -> Option<&'a TransactionLedger> {
        self.ledger
    }

    /// Add `amount` to the balance
    ///
    /// Returns false, changing nothing, for non-positive amounts or when the
    /// new balance would overflow.
    pub fn deposit(&self, amount: Money) -> bool {
        if !amount.is_positive() {
            tracing::debug!(%amount, "deposit rejected: amount must be positive");
            return false;
        }

        let Some(updated) = self.balance().checked_add(amount) else {
            tracing::debug!(%amount, "deposit rejected: balance would overflow");
            return false;
        };

        self.commit(TransactionKind::Deposit, amount, updated)
    }

    /// Remove `amount` from the balance
    ///
    /// Returns false, changing nothing, for non-positive amounts or amounts
    /// greater than the balance. Withdrawing the whole balance is allowed.
    pub fn withdraw(&self, amount: Money) -> bool {
        if !amount.is_positive() {
            tracing::debug!(%amount, "withdrawal rejected: amount must be positive");
            return false;
        }

        if amount > self.balance() {
            tracing::debug!(%amount, balance = %self.balance(), "withdrawal rejected: insufficient funds");
            return false;
        }

        let Some(updated) = self.balance().checked_sub(amount) else {
            return false;
        };

        self.commit(TransactionKind::Withdrawal, amount, updated)
    }

    /// Record the mutation (if a ledger is attached), then apply it
    fn commit(&self, kind: TransactionKind, amount: Money, updated: Money) -> bool {
        if let Some(ledger) = self.ledger {
            if let Err(e) = ledger.record(kind, amount) {
                tracing::error!("failed to record {}: {}", kind, e);
                return false;
            }
        }

        self.balance.set(updated);
        tracing::debug!(%kind, %amount, balance = %updated, "balance updated");
        true
    }
}
