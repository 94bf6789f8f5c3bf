//! Business logic layer
//!
//! The four in-memory components behind an ATM session. Each takes `&self`
//! for mutation so the balance, the password policy and the session can
//! share the same ledger and credential store by reference.

pub mod balance;
pub mod credentials;
pub mod ledger;
pub mod password;

pub use balance::AccountBalance;
pub use credentials::CredentialStore;
pub use ledger::TransactionLedger;
pub use password::PasswordPolicy;
