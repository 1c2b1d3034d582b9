//! Seedgate Core
//!
//! Mnemonic resolution and deterministic account derivation.
//!
//! # Key Derivation
//!
//! From a single BIP-39 mnemonic (empty passphrase), one Ethereum account per
//! index along the BIP-44 path `m/44'/60'/0'/0/{index}`:
//! - public key: compressed SEC1 (33 bytes)
//! - address: Keccak-256 of the uncompressed key, last 20 bytes, lowercase hex
//! - private key: only when explicitly revealed
//!
//! Each index is derived independently. A failure at one index is reported
//! and the next index is still attempted.

pub mod accounts;
pub mod keys;
pub mod memory;
pub mod seed;

pub use accounts::{derive_accounts, AccountFailure, AccountOutcome, AccountReport};
pub use keys::*;
pub use seed::*;
