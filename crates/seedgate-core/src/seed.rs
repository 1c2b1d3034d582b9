//! BIP-39 mnemonic resolution
//!
//! Picks the phrase to derive from: the operator's configured phrase, or a
//! freshly generated one that is shown exactly once.

use bip39::{Language, Mnemonic};
use std::io::Write;
use thiserror::Error;
use zeroize::Zeroizing;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Invalid mnemonic: {0}")]
    InvalidMnemonic(String),
    #[error("Mnemonic generation failed: {0}")]
    GenerationFailed(String),
    #[error("Failed to write generated mnemonic: {0}")]
    Output(#[from] std::io::Error),
}

/// Length of a freshly generated mnemonic
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WordCount {
    /// 12 words (128 bits of entropy)
    #[default]
    Words12,
    /// 24 words (256 bits of entropy)
    Words24,
}

impl WordCount {
    pub fn words(self) -> usize {
        match self {
            Self::Words12 => 12,
            Self::Words24 => 24,
        }
    }

    /// Parse "12" or "24".
    pub fn from_words(words: usize) -> Option<Self> {
        match words {
            12 => Some(Self::Words12),
            24 => Some(Self::Words24),
            _ => None,
        }
    }
}

/// Generate a new English BIP-39 mnemonic
pub fn generate_mnemonic(word_count: WordCount) -> Result<Mnemonic, SeedError> {
    Mnemonic::generate_in(Language::English, word_count.words())
        .map_err(|e| SeedError::GenerationFailed(e.to_string()))
}

/// Parse a mnemonic from words
pub fn parse_mnemonic(words: &str) -> Result<Mnemonic, SeedError> {
    Mnemonic::parse_in(Language::English, words)
        .map_err(|e| SeedError::InvalidMnemonic(e.to_string()))
}

/// Derive seed bytes from mnemonic (with optional passphrase)
pub fn derive_seed(mnemonic: &Mnemonic, passphrase: &str) -> Zeroizing<[u8; 64]> {
    Zeroizing::new(mnemonic.to_seed(passphrase))
}

/// Resolve the phrase to derive accounts from.
///
/// A non-blank `explicit` phrase is returned verbatim; it is validated later,
/// per account, by the key deriver. Otherwise a new mnemonic is generated and
/// written to `out` once. That output is the operator's only copy.
pub fn resolve_phrase<W: Write>(
    explicit: Option<&str>,
    word_count: WordCount,
    out: &mut W,
) -> Result<Zeroizing<String>, SeedError> {
    if let Some(phrase) = explicit.filter(|p| !p.trim().is_empty()) {
        return Ok(Zeroizing::new(phrase.to_string()));
    }

    let mnemonic = generate_mnemonic(word_count)?;
    let phrase = Zeroizing::new(mnemonic.to_string());
    log::info!("No seed phrase configured, generated a new {}-word mnemonic", word_count.words());

    writeln!(out, "New mnemonic phrase (write it down, it will not be shown again):")?;
    writeln!(out, "{}", phrase.as_str())?;
    writeln!(out)?;
    out.flush()?;

    Ok(phrase)
}
