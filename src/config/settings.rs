//! Session settings for the ATM simulator
//!
//! Every field has a default, so a settings file only needs the values it
//! wants to change. Settings are read-only input: nothing is written back.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::crypto::HashParams;
use crate::display::{is_valid_timestamp_format, DEFAULT_TIMESTAMP_FORMAT};
use crate::error::{AtmError, AtmResult};
use crate::models::Money;
use crate::services::credentials::{DEFAULT_ACCOUNT, DEFAULT_MAX_ATTEMPTS, DEFAULT_PASSWORD};
use crate::services::{CredentialStore, TransactionLedger};

/// An additional credential installed at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEntry {
    pub account: String,
    pub password: String,
}

impl UserEntry {
    /// Parse `ACCOUNT:PASSWORD`; the password may itself contain colons or be empty
    pub fn parse(s: &str) -> AtmResult<Self> {
        let (account, password) = s.split_once(':').ok_or_else(|| {
            AtmError::Config(format!("Expected ACCOUNT:PASSWORD, got '{}'", s))
        })?;

        Ok(Self {
            account: account.to_string(),
            password: password.to_string(),
        })
    }
}

/// Settings for one ATM session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Starting balance in cents
    #[serde(default = "default_initial_balance")]
    pub initial_balance: Money,

    /// Failed logins allowed before lockout
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Account seeded into the credential store
    #[serde(default = "default_seed_account")]
    pub seed_account: String,

    /// Password of the seeded account
    #[serde(default = "default_seed_password")]
    pub seed_password: String,

    /// Further credentials installed after the seed
    #[serde(default)]
    pub extra_users: Vec<UserEntry>,

    /// Currency symbol used for balances and history
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Timestamp pattern for history lines (strftime format)
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,

    /// Argon2 cost parameters for stored passwords
    #[serde(default)]
    pub hashing: HashParams,
}

fn default_initial_balance() -> Money {
    Money::from_dollars(2000)
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

fn default_seed_account() -> String {
    DEFAULT_ACCOUNT.to_string()
}

fn default_seed_password() -> String {
    DEFAULT_PASSWORD.to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial_balance: default_initial_balance(),
            max_attempts: default_max_attempts(),
            seed_account: default_seed_account(),
            seed_password: default_seed_password(),
            extra_users: Vec::new(),
            currency_symbol: default_currency(),
            timestamp_format: default_timestamp_format(),
            hashing: HashParams::default(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: &Path) -> AtmResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AtmError::Io(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            AtmError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        Ok(settings)
    }

    /// Load settings from `path` if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> AtmResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Reject values a session cannot start with
    pub fn validate(&self) -> AtmResult<()> {
        if self.initial_balance.is_negative() {
            return Err(AtmError::Config(format!(
                "initial_balance cannot be negative, got {}",
                self.initial_balance
            )));
        }

        if self.max_attempts == 0 {
            return Err(AtmError::Config(
                "max_attempts must be at least 1".into(),
            ));
        }

        if !is_valid_timestamp_format(&self.timestamp_format) {
            return Err(AtmError::Config(format!(
                "timestamp_format is not a valid strftime pattern: '{}'",
                self.timestamp_format
            )));
        }

        self.hashing
            .validate()
            .map_err(|e| AtmError::Config(e.to_string()))
    }

    /// Build the credential store: seed account first, then extra users in order
    pub fn credential_store(&self) -> AtmResult<CredentialStore> {
        let store = CredentialStore::empty(self.hashing, self.max_attempts)?;
        store.add_user(&self.seed_account, &self.seed_password)?;
        for user in &self.extra_users {
            store.add_user(&user.account, &user.password)?;
        }
        Ok(store)
    }

    /// Build an empty ledger using the configured display format
    pub fn ledger(&self) -> TransactionLedger {
        TransactionLedger::with_format(&self.timestamp_format, &self.currency_symbol)
    }
}
