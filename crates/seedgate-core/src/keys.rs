//! Ethereum key derivation from a BIP-39 mnemonic
//!
//! Derives one account per index along `m/44'/60'/0'/0/{index}`.

use bitcoin::bip32::{DerivationPath, Xpriv};
use bitcoin::secp256k1::{PublicKey, Secp256k1};
use bitcoin::Network;
use serde::{Serialize, Serializer};
use thiserror::Error;
use tiny_keccak::{Hasher, Keccak};
use zeroize::Zeroizing;

use crate::seed::{derive_seed, parse_mnemonic, SeedError};

/// BIP-44 account prefix for Ethereum (coin type 60), external chain
pub const ACCOUNT_PATH_PREFIX: &str = "m/44'/60'/0'/0";

#[derive(Error, Debug)]
pub enum KeyError {
    #[error("Invalid mnemonic: {0}")]
    InvalidMnemonic(String),
    #[error("Invalid path: {0}")]
    InvalidPath(String),
    #[error("Derivation failed: {0}")]
    DerivationFailed(String),
}

impl From<SeedError> for KeyError {
    fn from(e: SeedError) -> Self {
        match e {
            SeedError::InvalidMnemonic(msg) => KeyError::InvalidMnemonic(msg),
            other => KeyError::DerivationFailed(other.to_string()),
        }
    }
}

/// One derived account.
///
/// `private_key` is `None` unless reveal was requested, and is then left out
/// of the serialized form entirely.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletRecord {
    /// 1-based position in the report (index + 1)
    pub number: u32,
    #[serde(serialize_with = "serialize_hex")]
    pub public_key: [u8; 33],
    /// `0x`-prefixed lowercase hex
    pub address: String,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_secret_hex"
    )]
    pub private_key: Option<Zeroizing<[u8; 32]>>,
}

impl std::fmt::Debug for WalletRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletRecord")
            .field("number", &self.number)
            .field("public_key", &self.public_key_hex())
            .field("address", &self.address)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl WalletRecord {
    /// Compressed public key as `0x`-prefixed hex
    pub fn public_key_hex(&self) -> String {
        format!("0x{}", hex::encode(self.public_key))
    }

    /// Private key as `0x`-prefixed hex, if revealed
    pub fn private_key_hex(&self) -> Option<Zeroizing<String>> {
        self.private_key
            .as_ref()
            .map(|k| Zeroizing::new(format!("0x{}", hex::encode(k.as_slice()))))
    }
}

fn serialize_hex<S: Serializer>(bytes: &[u8; 33], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("0x{}", hex::encode(bytes)))
}

fn serialize_secret_hex<S: Serializer>(
    key: &Option<Zeroizing<[u8; 32]>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match key {
        Some(k) => {
            let encoded = Zeroizing::new(format!("0x{}", hex::encode(k.as_slice())));
            serializer.serialize_str(&encoded)
        }
        None => serializer.serialize_none(),
    }
}

/// Full derivation path for an account index
pub fn account_path(index: u32) -> String {
    format!("{}/{}", ACCOUNT_PATH_PREFIX, index)
}

/// Ethereum address of a public key: last 20 bytes of Keccak-256 over the
/// uncompressed point (without the 0x04 tag), lowercase hex.
pub fn eth_address(public_key: &PublicKey) -> String {
    let uncompressed = public_key.serialize_uncompressed();

    let mut keccak = Keccak::v256();
    let mut hash = [0u8; 32];
    keccak.update(&uncompressed[1..]);
    keccak.finalize(&mut hash);

    format!("0x{}", hex::encode(&hash[12..]))
}

/// Derive the account at `index` from `phrase`.
///
/// The phrase is parsed on every call, so parsed key material lives no
/// longer than one derivation.
pub fn derive_account(phrase: &str, index: u32, reveal_private: bool) -> Result<WalletRecord, KeyError> {
    let path: DerivationPath = account_path(index)
        .parse()
        .map_err(|e: bitcoin::bip32::Error| KeyError::InvalidPath(e.to_string()))?;

    let mnemonic = parse_mnemonic(phrase)?;
    let seed = derive_seed(&mnemonic, "");

    let secp = Secp256k1::new();
    let master = Xpriv::new_master(Network::Bitcoin, seed.as_slice())
        .map_err(|e| KeyError::DerivationFailed(e.to_string()))?;
    let derived = master
        .derive_priv(&secp, &path)
        .map_err(|e| KeyError::DerivationFailed(e.to_string()))?;

    let public_key = derived.private_key.public_key(&secp);
    let private_key = reveal_private.then(|| Zeroizing::new(derived.private_key.secret_bytes()));

    Ok(WalletRecord {
        number: index + 1,
        public_key: public_key.serialize(),
        address: eth_address(&public_key),
        private_key,
    })
}
