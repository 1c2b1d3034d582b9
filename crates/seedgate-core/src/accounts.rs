//! Batch derivation over account indices
//!
//! Each index yields its own outcome. A failed index never stops or reorders
//! the ones after it; the report keeps successes and failures apart, both in
//! index order.

use serde::Serialize;

use crate::keys::{account_path, derive_account, WalletRecord};

/// Result of deriving a single index
#[derive(Debug)]
pub enum AccountOutcome {
    Derived(WalletRecord),
    Failed(AccountFailure),
}

/// A derivation that failed at one index
#[derive(Debug, Clone, Serialize)]
pub struct AccountFailure {
    pub index: u32,
    pub path: String,
    pub error: String,
}

/// Successful records and failures from one batch
#[derive(Debug, Default, Serialize)]
pub struct AccountReport {
    pub wallets: Vec<WalletRecord>,
    pub failures: Vec<AccountFailure>,
}

impl AccountReport {
    /// Split outcomes into wallets and failures, preserving order.
    pub fn from_outcomes(outcomes: impl IntoIterator<Item = AccountOutcome>) -> Self {
        outcomes
            .into_iter()
            .fold(Self::default(), |mut report, outcome| {
                match outcome {
                    AccountOutcome::Derived(record) => report.wallets.push(record),
                    AccountOutcome::Failed(failure) => report.failures.push(failure),
                }
                report
            })
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

fn derive_one(phrase: &str, index: u32, reveal_private: bool) -> AccountOutcome {
    match derive_account(phrase, index, reveal_private) {
        Ok(record) => AccountOutcome::Derived(record),
        Err(e) => {
            log::error!("Error deriving key {}: {}", index, e);
            AccountOutcome::Failed(AccountFailure {
                index,
                path: account_path(index),
                error: e.to_string(),
            })
        }
    }
}

/// Derive accounts `0..count`, one outcome per index.
pub fn derive_accounts(phrase: &str, count: u32, reveal_private: bool) -> Vec<AccountOutcome> {
    (0..count)
        .map(|index| derive_one(phrase, index, reveal_private))
        .collect()
}
