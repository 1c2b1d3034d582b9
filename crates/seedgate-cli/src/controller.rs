//! Session orchestration: secret → challenge → confirm → derive

use anyhow::{Context, Result};
use seedgate_core::{derive_accounts, resolve_phrase, AccountReport};
use seedgate_otp::{Clock, Totp};
use seedgate_prompt::Prompt;
use std::io::Write;

use crate::config::SessionConfig;

/// How a session ended
#[derive(Debug)]
pub enum Outcome {
    /// Confirmation passed (or was skipped) and accounts were derived
    Derived(AccountReport),
    /// No OTP secret configured; nothing was derived
    MissingSecret,
    /// The submitted code did not match; nothing was derived
    Rejected,
}

pub struct SessionController<C: Clock> {
    config: SessionConfig,
    clock: C,
}

impl<C: Clock> SessionController<C> {
    pub fn new(config: SessionConfig, clock: C) -> Self {
        Self { config, clock }
    }

    /// Run one session.
    ///
    /// `out` receives a newly generated mnemonic, if one is generated. The
    /// report itself is left to the caller.
    ///
    /// With `skip_check` set the OTP step is bypassed entirely: no clock read,
    /// no prompt. That is the escape hatch for trusted, automated runs.
    pub async fn run<P, W>(&self, prompt: &mut P, out: &mut W) -> Result<Outcome>
    where
        P: Prompt,
        W: Write,
    {
        if self.config.skip_check {
            log::warn!("OTP confirmation skipped (--no-check)");
        } else if let Some(stop) = self.confirm(prompt).await? {
            return Ok(stop);
        }

        let phrase = resolve_phrase(
            self.config.seed_phrase.as_deref(),
            self.config.word_count,
            out,
        )
        .context("Failed to resolve seed phrase")?;

        log::info!("Deriving {} account(s)", self.config.account_count);
        let outcomes = derive_accounts(
            &phrase,
            self.config.account_count,
            self.config.reveal_private,
        );
        Ok(Outcome::Derived(AccountReport::from_outcomes(outcomes)))
    }

    /// Returns the terminal outcome when confirmation does not pass.
    async fn confirm<P: Prompt>(&self, prompt: &mut P) -> Result<Option<Outcome>> {
        let Some(secret) = self
            .config
            .otp_secret
            .as_deref()
            .filter(|s| !s.trim().is_empty())
        else {
            log::error!("No OTP secret configured");
            return Ok(Some(Outcome::MissingSecret));
        };

        let totp = Totp::from_base32(secret).context("Invalid OTP secret")?;
        let challenge = totp.current_code(&self.clock)?;
        let submitted = prompt
            .confirm(challenge.as_str(), totp.digits() as usize)
            .await?;

        // Recomputed so a step rollover while editing is judged on the new code
        if totp.verify(&self.clock, &submitted)? {
            Ok(None)
        } else {
            log::warn!("OTP rejected");
            Ok(Some(Outcome::Rejected))
        }
    }
}
