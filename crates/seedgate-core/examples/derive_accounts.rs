//! Derive the first few accounts of a throwaway mnemonic
//! Run with: cargo run --example derive_accounts

use seedgate_core::{derive_accounts, generate_mnemonic, AccountReport, WordCount};

fn main() {
    let mnemonic = generate_mnemonic(WordCount::Words12).unwrap();
    println!("=== THROWAWAY WALLET ===\n");
    println!("Mnemonic (do not fund these accounts):\n");
    println!("{}\n", mnemonic);

    let report = AccountReport::from_outcomes(derive_accounts(&mnemonic.to_string(), 3, false));
    for wallet in &report.wallets {
        println!("#{} {}", wallet.number, wallet.address);
        println!("   public key: {}", wallet.public_key_hex());
    }
}
