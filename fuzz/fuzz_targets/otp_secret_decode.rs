#![no_main]

use libfuzzer_sys::fuzz_target;
use seedgate_otp::{FixedClock, Totp};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(totp) = Totp::from_base32(s) {
            let code = totp.current_code(&FixedClock(59));
            assert!(matches!(code, Ok(ref c) if c.len() == totp.digits() as usize));
        }
    }
});
