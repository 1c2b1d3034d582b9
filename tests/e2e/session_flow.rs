//! End-to-end session tests
//!
//! Drives the full controller (config → OTP challenge → scripted prompt →
//! derivation → report) with a fixed clock.

use seedgate_cli::args::parse_args;
use seedgate_cli::config::{ReportFormat, SessionConfig};
use seedgate_cli::controller::{Outcome, SessionController};
use seedgate_cli::report::{write_outcome, MISSING_SECRET, WRONG_OTP};
use seedgate_otp::{FixedClock, Totp};
use seedgate_prompt::ScriptedPrompt;
use std::collections::HashSet;

const PHRASE: &str = "test test test test test test test test test test test junk";
const SECRET: &str = "JBSWY3DPEHPK3PXP";
const NOW: u64 = 1_700_000_000;

const ADDRESSES: [&str; 3] = [
    "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266",
    "0x70997970c51812dc3a010c7d01b50e0d17dc79c8",
    "0x3c44cdddb6a900fa2b585dd299e03d12fa4293bc",
];

fn config_from(argv: &[&str]) -> SessionConfig {
    let args = parse_args(argv.iter().copied()).unwrap();
    let mut config = SessionConfig::default();
    config.apply_env_from(|key| match key {
        "SEED_PHRASE" => Some(PHRASE.to_string()),
        "SECRET_KEY" => Some(SECRET.to_string()),
        _ => None,
    });
    config.apply_args(&args);
    config.validate().unwrap();
    config
}

async fn run(config: SessionConfig, prompt: &mut ScriptedPrompt) -> (Outcome, String) {
    let format = config.format;
    let controller = SessionController::new(config, FixedClock(NOW));
    let mut out = Vec::new();
    let outcome = controller.run(prompt, &mut out).await.unwrap();
    write_outcome(&mut out, &outcome, format).unwrap();
    (outcome, String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn test_full_flow_with_prefilled_code() {
    let mut prompt = ScriptedPrompt::accept();
    let (outcome, text) = run(config_from(&["3"]), &mut prompt).await;

    let expected = Totp::from_base32(SECRET)
        .unwrap()
        .code_at(NOW)
        .unwrap();
    assert_eq!(prompt.prefills(), &[expected.to_string()]);
    assert!(prompt.frames().contains(expected.as_str()));

    let Outcome::Derived(report) = outcome else {
        panic!("expected derivation");
    };
    let addresses: Vec<_> = report.wallets.iter().map(|w| w.address.as_str()).collect();
    assert_eq!(addresses, ADDRESSES);
    let numbers: Vec<_> = report.wallets.iter().map(|w| w.number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    for address in ADDRESSES {
        assert!(text.contains(address));
    }
}

#[tokio::test]
async fn test_operator_retypes_code() {
    let code = Totp::from_base32(SECRET)
        .unwrap()
        .code_at(NOW)
        .unwrap()
        .to_string();
    let mut prompt = ScriptedPrompt::replace_with(&code, 6);
    let (outcome, _) = run(config_from(&["1"]), &mut prompt).await;
    assert!(matches!(outcome, Outcome::Derived(_)));
}

#[tokio::test]
async fn test_wrong_code_derives_nothing() {
    let window = Totp::from_base32(SECRET)
        .unwrap()
        .window_codes(&FixedClock(NOW), 1)
        .unwrap();
    let wrong = ["000000", "111111", "222222", "333333"]
        .into_iter()
        .find(|c| window.iter().all(|w| w.as_str() != *c))
        .unwrap();

    let mut prompt = ScriptedPrompt::replace_with(wrong, 6);
    let (outcome, text) = run(config_from(&[]), &mut prompt).await;

    assert!(matches!(outcome, Outcome::Rejected));
    assert_eq!(text.trim_end().lines().count(), 1);
    assert!(text.contains(WRONG_OTP));
    assert!(!text.contains("0x"));
}

#[tokio::test]
async fn test_missing_secret_produces_no_derivation_output() {
    let mut config = config_from(&[]);
    config.otp_secret = None;
    let mut prompt = ScriptedPrompt::accept();

    let (outcome, text) = run(config, &mut prompt).await;

    assert!(matches!(outcome, Outcome::MissingSecret));
    assert_eq!(prompt.calls(), 0);
    assert_eq!(text.trim_end().lines().count(), 1);
    assert!(text.contains(MISSING_SECRET));
}

#[tokio::test]
async fn test_no_check_skips_prompt() {
    let mut config = config_from(&["--no-check", "2"]);
    config.otp_secret = None;
    let mut prompt = ScriptedPrompt::default();

    let (outcome, _) = run(config, &mut prompt).await;

    assert_eq!(prompt.calls(), 0);
    let Outcome::Derived(report) = outcome else {
        panic!("expected derivation");
    };
    assert_eq!(report.wallets.len(), 2);
}

#[tokio::test]
async fn test_default_count_is_five() {
    let (outcome, _) = run(config_from(&["--no-check"]), &mut ScriptedPrompt::default()).await;
    let Outcome::Derived(report) = outcome else {
        panic!("expected derivation");
    };
    assert_eq!(report.wallets.len(), 5);
    let addresses: HashSet<_> = report.wallets.iter().map(|w| &w.address).collect();
    assert_eq!(addresses.len(), 5);
}

#[tokio::test]
async fn test_json_report_is_deterministic() {
    let argv = ["--no-check", "--json", "-sp", "3"];
    let (_, first) = run(config_from(&argv), &mut ScriptedPrompt::default()).await;
    let (_, second) = run(config_from(&argv), &mut ScriptedPrompt::default()).await;
    assert_eq!(first, second);

    let value: serde_json::Value = serde_json::from_str(&first).unwrap();
    assert_eq!(value["wallets"].as_array().unwrap().len(), 3);
    assert_eq!(
        value["wallets"][1]["privateKey"],
        "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d"
    );
    assert_eq!(config_from(&argv).format, ReportFormat::Json);
}

#[tokio::test]
async fn test_generated_mnemonic_shown_once_then_used() {
    let mut config = config_from(&["--no-check", "1"]);
    config.seed_phrase = None;

    let (outcome, text) = run(config, &mut ScriptedPrompt::default()).await;

    assert_eq!(text.matches("New mnemonic phrase").count(), 1);
    let phrase = text.lines().nth(1).unwrap();
    assert_eq!(phrase.split_whitespace().count(), 12);

    let Outcome::Derived(report) = outcome else {
        panic!("expected derivation");
    };
    let again = seedgate_core::derive_account(phrase, 0, false).unwrap();
    assert_eq!(report.wallets[0].address, again.address);
}
