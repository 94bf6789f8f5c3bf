//! Configuration module for the ATM simulator
//!
//! Settings come from built-in defaults, an optional JSON file and command
//! line overrides, in that order.

pub mod settings;

pub use settings::{Settings, UserEntry};
