//! TOTP code generation and checking

use data_encoding::{Encoding, BASE32_NOPAD};
use hmac::{Hmac, Mac};
use sha1::Sha1;
use std::fmt;
use thiserror::Error;
use zeroize::Zeroizing;

use crate::clock::Clock;

type HmacSha1 = Hmac<Sha1>;

/// Digits per code
pub const DEFAULT_DIGITS: u32 = 6;

/// Seconds per time step
pub const DEFAULT_STEP_SECS: u64 = 30;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum OtpError {
    #[error("OTP secret is empty")]
    EmptySecret,
    #[error("Invalid OTP secret: {0}")]
    InvalidSecret(String),
    #[error("Unsupported digit count: {0} (expected 6..=8)")]
    InvalidDigits(u32),
}

/// A fixed-length numeric one-time password
#[derive(Clone, PartialEq, Eq)]
pub struct OtpCode(String);

impl OtpCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Compare against operator input, ignoring surrounding whitespace and case.
    pub fn matches(&self, input: &str) -> bool {
        input.trim().to_lowercase() == self.0
    }
}

impl fmt::Display for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OtpCode(******)")
    }
}

/// TOTP generator bound to one shared secret
pub struct Totp {
    key: Zeroizing<Vec<u8>>,
    digits: u32,
    step: u64,
}

impl fmt::Debug for Totp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Totp")
            .field("digits", &self.digits)
            .field("step", &self.step)
            .finish_non_exhaustive()
    }
}

/// Base32 without padding, tolerant of non-zero trailing bits the way
/// authenticator apps are.
fn lenient_base32() -> Result<Encoding, OtpError> {
    let mut lenient = BASE32_NOPAD.specification();
    lenient.check_trailing_bits = false;
    lenient.encoding().map_err(|e| OtpError::InvalidSecret(e.to_string()))
}

impl Totp {
    /// Build from a base32 secret. Case, whitespace and `=` padding are ignored.
    pub fn from_base32(secret: &str) -> Result<Self, OtpError> {
        let normalized: Zeroizing<String> = Zeroizing::new(
            secret
                .chars()
                .filter(|c| !c.is_whitespace() && *c != '=')
                .map(|c| c.to_ascii_uppercase())
                .collect(),
        );
        if normalized.is_empty() {
            return Err(OtpError::EmptySecret);
        }

        let key = lenient_base32()?
            .decode(normalized.as_bytes())
            .map_err(|e| OtpError::InvalidSecret(e.to_string()))?;
        Self::from_bytes(key)
    }

    /// Build from raw key bytes.
    pub fn from_bytes(key: Vec<u8>) -> Result<Self, OtpError> {
        if key.is_empty() {
            return Err(OtpError::EmptySecret);
        }
        Ok(Self {
            key: Zeroizing::new(key),
            digits: DEFAULT_DIGITS,
            step: DEFAULT_STEP_SECS,
        })
    }

    pub fn with_digits(mut self, digits: u32) -> Result<Self, OtpError> {
        if !(6..=8).contains(&digits) {
            return Err(OtpError::InvalidDigits(digits));
        }
        self.digits = digits;
        Ok(self)
    }

    pub fn digits(&self) -> u32 {
        self.digits
    }

    pub fn step(&self) -> u64 {
        self.step
    }

    /// HOTP value for a counter (RFC 4226 section 5.3)
    pub fn hotp(&self, counter: u64) -> Result<OtpCode, OtpError> {
        let mut mac = HmacSha1::new_from_slice(&self.key)
            .map_err(|e| OtpError::InvalidSecret(e.to_string()))?;
        mac.update(&counter.to_be_bytes());
        let hash = mac.finalize().into_bytes();

        let offset = (hash[hash.len() - 1] & 0x0f) as usize;
        let binary = u32::from_be_bytes([
            hash[offset] & 0x7f,
            hash[offset + 1],
            hash[offset + 2],
            hash[offset + 3],
        ]);
        let code = binary % 10u32.pow(self.digits);

        Ok(OtpCode(format!("{:0width$}", code, width = self.digits as usize)))
    }

    /// Time step containing `unix_time`
    pub fn counter_at(&self, unix_time: u64) -> u64 {
        unix_time / self.step
    }

    /// Code valid at `unix_time`
    pub fn code_at(&self, unix_time: u64) -> Result<OtpCode, OtpError> {
        self.hotp(self.counter_at(unix_time))
    }

    /// Code valid now according to `clock`
    pub fn current_code<C: Clock + ?Sized>(&self, clock: &C) -> Result<OtpCode, OtpError> {
        self.code_at(clock.unix_time())
    }

    /// Codes for the steps `-skew..=skew` around now, oldest first.
    pub fn window_codes<C: Clock + ?Sized>(
        &self,
        clock: &C,
        skew: u64,
    ) -> Result<Vec<OtpCode>, OtpError> {
        let now = self.counter_at(clock.unix_time());
        (now.saturating_sub(skew)..=now.saturating_add(skew))
            .map(|counter| self.hotp(counter))
            .collect()
    }

    /// Check operator input against a freshly computed current code.
    pub fn verify<C: Clock + ?Sized>(&self, clock: &C, input: &str) -> Result<bool, OtpError> {
        let counter = self.counter_at(clock.unix_time());
        let accepted = self.hotp(counter)?.matches(input);
        log::debug!("OTP checked at step {} (accepted: {})", counter, accepted);
        Ok(accepted)
    }
}

/// Current code for a base32 `secret`.
pub fn current_code<C: Clock + ?Sized>(secret: &str, clock: &C) -> Result<OtpCode, OtpError> {
    Totp::from_base32(secret)?.current_code(clock)
}
