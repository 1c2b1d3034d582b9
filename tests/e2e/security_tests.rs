//! Security-specific tests.
//!
//! These tests verify:
//! 1. Private keys never reach any output unless reveal was requested
//! 2. Revealed keys actually belong to the reported public key
//! 3. Secrets stay out of Debug output
//! 4. Malformed inputs are rejected without panicking

use secp256k1::{PublicKey, Secp256k1, SecretKey};
use seedgate_cli::config::{ReportFormat, SessionConfig};
use seedgate_cli::controller::Outcome;
use seedgate_cli::report::write_outcome;
use seedgate_core::{derive_account, derive_accounts, parse_mnemonic, AccountReport};
use seedgate_otp::{OtpError, Totp};

const PHRASE: &str = "test test test test test test test test test test test junk";
const FIRST_PRIVATE_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

fn render(report: AccountReport, format: ReportFormat) -> String {
    let mut out = Vec::new();
    write_outcome(&mut out, &Outcome::Derived(report), format).unwrap();
    String::from_utf8(out).unwrap()
}

// ============================================================================
// 1. Private Key Exposure
// ============================================================================

#[test]
fn test_no_private_key_in_human_report() {
    let report = AccountReport::from_outcomes(derive_accounts(PHRASE, 5, false));
    let text = render(report, ReportFormat::Human);
    assert!(!text.contains(FIRST_PRIVATE_KEY));
    assert!(!text.contains("Private Key"));
}

#[test]
fn test_no_private_key_field_in_json_report() {
    let report = AccountReport::from_outcomes(derive_accounts(PHRASE, 5, false));
    let text = render(report, ReportFormat::Json);
    assert!(!text.contains(FIRST_PRIVATE_KEY));

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    for wallet in value["wallets"].as_array().unwrap() {
        let fields = wallet.as_object().unwrap();
        assert!(!fields.contains_key("privateKey"), "field must be absent, not null");
    }
}

#[test]
fn test_private_key_present_only_when_revealed() {
    let hidden = derive_account(PHRASE, 0, false).unwrap();
    assert!(hidden.private_key.is_none());

    let shown = derive_account(PHRASE, 0, true).unwrap();
    let json = serde_json::to_value(&shown).unwrap();
    assert_eq!(json["privateKey"], format!("0x{}", FIRST_PRIVATE_KEY));
}

// ============================================================================
// 2. Key Consistency
// ============================================================================

#[test]
fn test_revealed_private_key_matches_public_key() {
    let secp = Secp256k1::new();
    for record in derive_accounts(PHRASE, 4, true)
        .into_iter()
        .map(|o| match o {
            seedgate_core::AccountOutcome::Derived(r) => r,
            seedgate_core::AccountOutcome::Failed(f) => panic!("derivation failed: {}", f.error),
        })
    {
        let private = record.private_key.as_ref().unwrap();
        let secret = SecretKey::from_slice(private.as_slice()).unwrap();
        let public = PublicKey::from_secret_key(&secp, &secret);
        assert_eq!(public.serialize(), record.public_key, "account {}", record.number);
    }
}

#[test]
fn test_public_key_is_valid_compressed_point() {
    let record = derive_account(PHRASE, 2, false).unwrap();
    assert!(matches!(record.public_key[0], 0x02 | 0x03));
    assert!(PublicKey::from_slice(&record.public_key).is_ok());
}

// ============================================================================
// 3. Debug Redaction
// ============================================================================

#[test]
fn test_wallet_debug_hides_private_key() {
    let record = derive_account(PHRASE, 0, true).unwrap();
    let debug = format!("{:?}", record);
    assert!(!debug.contains(FIRST_PRIVATE_KEY));
}

#[test]
fn test_config_debug_hides_secrets() {
    let config = SessionConfig {
        seed_phrase: Some(PHRASE.to_string()),
        otp_secret: Some("JBSWY3DPEHPK3PXP".to_string()),
        ..SessionConfig::default()
    };
    let debug = format!("{:?}", config);
    assert!(!debug.contains("junk"));
    assert!(!debug.contains("JBSWY3DPEHPK3PXP"));
}

#[test]
fn test_totp_debug_hides_key() {
    let totp = Totp::from_base32("JBSWY3DPEHPK3PXP").unwrap();
    let debug = format!("{:?}", totp);
    assert!(!debug.contains("JBSWY3DPEHPK3PXP"));
    assert!(!debug.contains("48656c6c6f"));
}

// ============================================================================
// 4. Malformed Input Rejection
// ============================================================================

#[test]
fn test_malformed_mnemonics_rejected() {
    let inputs = [
        "",
        "test",
        "zzzz zzzz zzzz zzzz zzzz zzzz zzzz zzzz zzzz zzzz zzzz zzzz",
        "\u{0}\u{1}\u{2}",
    ];
    for input in inputs {
        assert!(parse_mnemonic(input).is_err(), "accepted {:?}", input);
    }
}

#[test]
fn test_malformed_otp_secrets_rejected() {
    assert_eq!(Totp::from_base32("").unwrap_err(), OtpError::EmptySecret);
    assert_eq!(Totp::from_base32("  = ").unwrap_err(), OtpError::EmptySecret);
    assert!(matches!(
        Totp::from_base32("01189998819991197253"),
        Err(OtpError::InvalidSecret(_))
    ));
}

#[test]
fn test_hardened_index_rejected() {
    assert!(derive_account(PHRASE, 1 << 31, false).is_err());
}
