//! Password change policy
//!
//! Validates a password change against the credential store and installs
//! the new password. The old-password check goes through
//! [`CredentialStore::authenticate`], so it consumes or restores login
//! attempts exactly like a login would.

use super::credentials::CredentialStore;

/// Rules for replacing an account's password
#[derive(Debug)]
pub struct PasswordPolicy<'a> {
    store: &'a CredentialStore,
}

impl<'a> PasswordPolicy<'a> {
    /// Create a policy operating on `store`
    pub fn new(store: &'a CredentialStore) -> Self {
        Self { store }
    }

    /// Replace the password of `account`
    ///
    /// Fails when the old password does not authenticate, when the new
    /// password is empty, or when it equals the old one. On failure the
    /// stored credential is unchanged.
    pub fn change_password(&self, account: &str, old_password: &str, new_password: &str) -> bool {
        if !self.store.authenticate(account, old_password) {
            tracing::warn!(account, "password change rejected: current password is wrong");
            return false;
        }

        if new_password.is_empty() {
            tracing::info!(account, "password change rejected: new password is empty");
            return false;
        }

        if new_password == old_password {
            tracing::info!(account, "password change rejected: new password is unchanged");
            return false;
        }

        match self.store.add_user(account, new_password) {
            Ok(()) => {
                tracing::info!(account, "password changed");
                true
            }
            Err(e) => {
                tracing::error!(account, "failed to store new password: {}", e);
                false
            }
        }
    }
}
