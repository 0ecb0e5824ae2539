//! Local signing handle.
//!
//! The Rust counterpart of the front end's wallet adapter: it turns a raw
//! account secret into the signing interface the contract-call layer
//! expects, and exposes the derived account address and chain id.

use secp256k1::SecretKey;
use web3::signing::{Key, SecretKeyRef};
use web3::types::Address;

use crate::error::{ClientError, Result};

pub struct LocalSigner {
    secret: SecretKey,
    address: Address,
    chain_id: u64,
}

impl LocalSigner {
    /// Build a signer from a 32-byte hex-encoded secret key, with or without
    /// the `0x` prefix.
    pub fn from_hex_key(hex_key: &str, chain_id: u64) -> Result<Self> {
        let raw = hex::decode(hex_key.trim().trim_start_matches("0x"))
            .map_err(|err| ClientError::invalid_input(format!("malformed secret key: {err}")))?;
        let secret = SecretKey::from_slice(&raw)
            .map_err(|err| ClientError::invalid_input(format!("invalid secret key: {err}")))?;
        let address = SecretKeyRef::new(&secret).address();
        Ok(Self { secret, address, chain_id })
    }

    /// The account address derived from the secret key.
    pub fn address(&self) -> Address {
        self.address
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Borrow the signing handle for a contract call.
    pub fn key(&self) -> SecretKeyRef<'_> {
        SecretKeyRef::new(&self.secret)
    }
}

impl std::fmt::Debug for LocalSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalSigner")
            .field("address", &self.address)
            .field("chain_id", &self.chain_id)
            .finish_non_exhaustive()
    }
}
