//! Seedgate OTP
//!
//! Time-based one-time passwords for the confirmation step that gates
//! account derivation.
//!
//! # Algorithm
//!
//! TOTP (RFC 6238) over HOTP (RFC 4226) with the usual authenticator-app
//! defaults:
//! - HMAC-SHA1
//! - 6 digits
//! - 30-second time step from the Unix epoch
//! - base32 shared secret
//!
//! # Example
//!
//! ```
//! use seedgate_otp::{FixedClock, Totp};
//!
//! let totp = Totp::from_base32("GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ").unwrap();
//! let code = totp.current_code(&FixedClock(59)).unwrap();
//! assert_eq!(code.as_str(), "287082");
//! ```

pub mod clock;
pub mod totp;

pub use clock::{Clock, FixedClock, SystemClock};
pub use totp::{current_code, OtpCode, OtpError, Totp, DEFAULT_DIGITS, DEFAULT_STEP_SECS};
