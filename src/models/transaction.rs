//! Transaction record model
//!
//! A record is created as a side effect of a successful deposit or
//! withdrawal and never changes afterwards.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;
use crate::error::AtmError;

/// Kind of balance mutation a record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    /// Past-tense verb used in history lines
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Deposit => "Deposited",
            Self::Withdrawal => "Withdrawn",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposit => write!(f, "Deposit"),
            Self::Withdrawal => write!(f, "Withdrawal"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = AtmError;

    /// Parse a free-form tag such as `"deposit"` or `"withdraw"` (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "deposit" => Ok(Self::Deposit),
            "withdraw" | "withdrawal" => Ok(Self::Withdrawal),
            _ => Err(AtmError::invalid_transaction_type(s)),
        }
    }
}

/// A single immutable ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    id: TransactionId,
    kind: TransactionKind,
    amount: Money,
    timestamp: DateTime<Local>,
}

impl TransactionRecord {
    /// Create a record stamped with the current wall-clock time
    pub fn new(kind: TransactionKind, amount: Money) -> Self {
        Self::with_timestamp(kind, amount, Local::now())
    }

    /// Create a record with an explicit timestamp
    pub fn with_timestamp(kind: TransactionKind, amount: Money, timestamp: DateTime<Local>) -> Self {
        Self {
            id: TransactionId::new(),
            kind,
            amount,
            timestamp,
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_kind_from_tag() {
        assert_eq!("deposit".parse::<TransactionKind>().unwrap(), TransactionKind::Deposit);
        assert_eq!("DEPOSIT".parse::<TransactionKind>().unwrap(), TransactionKind::Deposit);
        assert_eq!("withdraw".parse::<TransactionKind>().unwrap(), TransactionKind::Withdrawal);
        assert_eq!(
            "Withdrawal".parse::<TransactionKind>().unwrap(),
            TransactionKind::Withdrawal
        );
    }

    #[test]
    fn test_kind_from_unknown_tag() {
        let err = "invalidType".parse::<TransactionKind>().unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("Invalid transaction type"));
    }

    #[test]
    fn test_verbs() {
        assert_eq!(TransactionKind::Deposit.verb(), "Deposited");
        assert_eq!(TransactionKind::Withdrawal.verb(), "Withdrawn");
    }

    #[test]
    fn test_record_fields() {
        let at = Local.with_ymd_and_hms(2025, 2, 19, 10, 0, 0).unwrap();
        let record = TransactionRecord::with_timestamp(
            TransactionKind::Deposit,
            Money::from_dollars(500),
            at,
        );
        assert_eq!(record.kind(), TransactionKind::Deposit);
        assert_eq!(record.amount(), Money::from_dollars(500));
        assert_eq!(record.timestamp(), at);
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&TransactionKind::Withdrawal).unwrap();
        assert_eq!(json, "\"withdrawal\"");
    }
}
