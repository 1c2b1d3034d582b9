//! Seedgate CLI
//!
//! Confirms the operator holds the OTP secret, then derives a batch of
//! Ethereum accounts from a BIP-39 mnemonic and prints them.

pub mod args;
pub mod config;
pub mod controller;
pub mod report;

pub use config::{ReportFormat, SessionConfig};
pub use controller::{Outcome, SessionController};
