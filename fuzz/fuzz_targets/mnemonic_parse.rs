#![no_main]

use libfuzzer_sys::fuzz_target;
use seedgate_core::{derive_account, parse_mnemonic};

fuzz_target!(|data: &[u8]| {
    // Neither parsing nor derivation may panic on arbitrary phrases
    if let Ok(s) = std::str::from_utf8(data) {
        if parse_mnemonic(s).is_ok() {
            let _ = derive_account(s, 0, false);
        }
    }
});
