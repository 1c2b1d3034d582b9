//! Session configuration: defaults, then `.env` / process environment, then
//! command-line arguments.
//!
//! Priority: arguments > environment > defaults.

use anyhow::{Context, Result};
use seedgate_core::WordCount;
use std::fmt;
use std::path::Path;

use crate::args::CliArgs;

/// Accounts derived when no count is given
pub const DEFAULT_ACCOUNT_COUNT: u32 = 5;

/// Highest count whose last index is still a non-hardened child
pub const MAX_ACCOUNT_COUNT: u32 = 1 << 31;

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Human,
    Json,
}

/// Everything the session controller needs, resolved up front
#[derive(Clone)]
pub struct SessionConfig {
    /// BIP-39 phrase; `None` means generate a new one
    pub seed_phrase: Option<String>,
    /// Base32 OTP shared secret
    pub otp_secret: Option<String>,
    /// Bypass the OTP confirmation entirely
    pub skip_check: bool,
    /// Include private keys in the report
    pub reveal_private: bool,
    pub account_count: u32,
    /// Length of a generated mnemonic
    pub word_count: WordCount,
    pub format: ReportFormat,
    pub log_level: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed_phrase: None,
            otp_secret: None,
            skip_check: false,
            reveal_private: false,
            account_count: DEFAULT_ACCOUNT_COUNT,
            word_count: WordCount::default(),
            format: ReportFormat::default(),
            log_level: "warn".to_string(),
        }
    }
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("SessionConfig")
            .field("seed_phrase", &redact(&self.seed_phrase))
            .field("otp_secret", &redact(&self.otp_secret))
            .field("skip_check", &self.skip_check)
            .field("reveal_private", &self.reveal_private)
            .field("account_count", &self.account_count)
            .field("word_count", &self.word_count)
            .field("format", &self.format)
            .field("log_level", &self.log_level)
            .finish()
    }
}

/// Load a dotenv file into the process environment.
///
/// With no explicit path, `./.env` is used if it exists. Variables already set
/// in the environment win over the file.
pub fn load_env_file(path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            dotenv::from_path(path)
                .with_context(|| format!("Failed to load env file: {}", path.display()))?;
        }
        None => {
            if let Err(e) = dotenv::dotenv() {
                if !e.not_found() {
                    return Err(e).context("Failed to load .env");
                }
            }
        }
    }
    Ok(())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl SessionConfig {
    /// Apply overrides from the process environment.
    ///
    /// Supported env vars:
    /// - `SEED_PHRASE`
    /// - `SECRET_KEY`
    /// - `SEEDGATE_WORD_COUNT`
    /// - `SEEDGATE_LOG_LEVEL`
    ///
    /// Returns a message per ignored value. Logging is not set up yet at this
    /// point, so the caller logs them once it is.
    pub fn apply_env_overrides(&mut self) -> Vec<String> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup. Empty values count as unset.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Vec<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut ignored = Vec::new();
        if let Some(v) = non_empty(lookup("SEED_PHRASE")) {
            self.seed_phrase = Some(v);
        }
        if let Some(v) = non_empty(lookup("SECRET_KEY")) {
            self.otp_secret = Some(v);
        }
        if let Some(v) = non_empty(lookup("SEEDGATE_WORD_COUNT")) {
            match v.trim().parse().ok().and_then(WordCount::from_words) {
                Some(words) => self.word_count = words,
                None => ignored.push(format!(
                    "Ignoring SEEDGATE_WORD_COUNT={} (expected 12 or 24)",
                    v
                )),
            }
        }
        if let Some(v) = non_empty(lookup("SEEDGATE_LOG_LEVEL")) {
            self.log_level = v;
        }
        ignored
    }

    /// Apply command-line arguments.
    pub fn apply_args(&mut self, args: &CliArgs) {
        if args.show_private {
            self.reveal_private = true;
        }
        if args.no_check {
            self.skip_check = true;
        }
        if args.json {
            self.format = ReportFormat::Json;
        }
        if let Some(count) = args.count {
            self.account_count = count;
        }
    }

    /// Validate that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(self.account_count > 0, "account count must be > 0");
        anyhow::ensure!(
            self.account_count <= MAX_ACCOUNT_COUNT,
            "account count must be <= {}",
            MAX_ACCOUNT_COUNT
        );
        Ok(())
    }
}
