//! atm-cli - Terminal ATM simulator
//!
//! This library provides the core of a single-user ATM: a credential store
//! with a shared login attempt counter, an account balance, an append-only
//! transaction ledger and a password change policy. All state lives in
//! memory for the duration of one session.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Session settings (defaults, JSON file, CLI overrides)
//! - `crypto`: Argon2id password hashing for stored credentials
//! - `display`: Text formatting for history output
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Money, ledger records and their identifiers
//! - `services`: The four core components
//! - `session`: The interactive login and menu loop
//!
//! # Example
//!
//! ```
//! use atm_cli::models::Money;
//! use atm_cli::services::{AccountBalance, CredentialStore, PasswordPolicy, TransactionLedger};
//! use atm_cli::crypto::HashParams;
//!
//! # fn main() -> atm_cli::AtmResult<()> {
//! let store = CredentialStore::with_params(HashParams::with_values(64, 1, 1), 3)?;
//! let ledger = TransactionLedger::new();
//! let balance = AccountBalance::new(Money::from_dollars(2000), &ledger);
//!
//! assert!(store.authenticate("1234567", "abcdef"));
//! assert!(balance.deposit(Money::from_dollars(500)));
//! assert!(!balance.withdraw(Money::from_dollars(3000)));
//! assert_eq!(balance.balance(), Money::from_dollars(2500));
//!
//! let policy = PasswordPolicy::new(&store);
//! assert!(policy.change_password("1234567", "abcdef", "xyz"));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod session;

pub use error::{AtmError, AtmResult};
