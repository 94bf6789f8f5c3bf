//! Credential store
//!
//! Owns the account → password map and the login attempt counter. The
//! counter is shared by every account: a failed login against any account
//! (including an unknown one) consumes an attempt, and any successful
//! login restores the full allowance.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::crypto::{CredentialHasher, HashParams};
use crate::error::{AtmError, AtmResult};

/// Account seeded into every new store
pub const DEFAULT_ACCOUNT: &str = "1234567";
/// Password of the seeded account
pub const DEFAULT_PASSWORD: &str = "abcdef";
/// Login attempts allowed before lockout
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// In-memory credential map with a shared attempt counter
#[derive(Debug)]
pub struct CredentialStore {
    hasher: CredentialHasher,
    credentials: RefCell<HashMap<String, String>>,
    max_attempts: u32,
    attempts_left: Cell<u32>,
}

impl CredentialStore {
    /// Create a store holding the default account and three attempts
    pub fn new() -> AtmResult<Self> {
        Self::with_params(HashParams::default(), DEFAULT_MAX_ATTEMPTS)
    }

    /// Create a seeded store with custom hashing cost and attempt limit
    pub fn with_params(params: HashParams, max_attempts: u32) -> AtmResult<Self> {
        let store = Self::empty(params, max_attempts)?;
        store.add_user(DEFAULT_ACCOUNT, DEFAULT_PASSWORD)?;
        Ok(store)
    }

    /// Create a store with no credentials at all
    pub fn empty(params: HashParams, max_attempts: u32) -> AtmResult<Self> {
        if max_attempts == 0 {
            return Err(AtmError::InvalidArgument(
                "max_attempts must be at least 1".into(),
            ));
        }

        Ok(Self {
            hasher: CredentialHasher::new(params)?,
            credentials: RefCell::new(HashMap::new()),
            max_attempts,
            attempts_left: Cell::new(max_attempts),
        })
    }

    /// Insert or overwrite the password for `account`
    ///
    /// Any string is accepted, including empty ones. If hashing fails the
    /// previous credential is left in place.
    pub fn add_user(&self, account: &str, password: &str) -> AtmResult<()> {
        let hash = self.hasher.hash(password)?;
        let replaced = self
            .credentials
            .borrow_mut()
            .insert(account.to_string(), hash)
            .is_some();

        tracing::debug!(account, replaced, "credential stored");
        Ok(())
    }

    /// Check `password` against the stored credential for `account`
    ///
    /// Success restores the attempt counter to its limit; any failure,
    /// including an unknown account, consumes one attempt. The counter never
    /// drops below zero. Lockout is the caller's decision via
    /// [`has_attempts_left`](Self::has_attempts_left).
    pub fn authenticate(&self, account: &str, password: &str) -> bool {
        let verified = match self.credentials.borrow().get(account) {
            Some(stored) => self.hasher.verify(password, stored),
            None => false,
        };

        if verified {
            self.attempts_left.set(self.max_attempts);
            tracing::info!(account, "authentication succeeded");
        } else {
            let remaining = self.attempts_left.get().saturating_sub(1);
            self.attempts_left.set(remaining);
            tracing::warn!(account, remaining, "authentication failed");
        }

        verified
    }

    pub fn has_attempts_left(&self) -> bool {
        self.attempts_left.get() > 0
    }

    /// Remaining attempts, for display
    pub fn attempts_left(&self) -> u32 {
        self.attempts_left.get()
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Whether a credential exists for `account`
    pub fn contains(&self, account: &str) -> bool {
        self.credentials.borrow().contains_key(account)
    }

    pub fn account_count(&self) -> usize {
        self.credentials.borrow().len()
    }
}
