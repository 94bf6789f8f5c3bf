//! Credential protection
//!
//! Passwords are kept as Argon2id hashes; see [`password_hash`].

pub mod password_hash;

pub use password_hash::{CredentialHasher, HashParams};
