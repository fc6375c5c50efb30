// src/wallet/key_management.rs
//! Cryptographic key management for the signer and claimer tools.
//!
//! Wraps a secp256k1 private key (via the `k256` crate) and provides:
//! - Ethereum address derivation
//! - Raw digest signing with recoverable signatures
//! - A chain-bound ethers wallet for transaction signing

use crate::error::{KycError, KycResult};
use ethers::signers::{LocalWallet, Signer};
use ethers::types::{Address, Signature, H256, U256};
use ethers::utils::{hex, secret_key_to_address};
use k256::ecdsa::SigningKey;
use std::fmt;

/// Offset added to the recovery id to obtain the legacy `v` value (27/28).
const LEGACY_V_OFFSET: u64 = 27;

/// Holder of a single secp256k1 key.
///
/// # Security Notes
/// - The signing key is never exposed publicly
/// - `Debug` output only shows the derived address
/// - Signatures are deterministic (RFC 6979) and low-S normalized
#[derive(Clone)]
pub struct KeyManager {
    /// Securely stored private key (never exposed)
    signing_key: SigningKey,
    /// Ethereum address derived from the public key
    address: Address,
}

impl KeyManager {
    /// Parses a hex-encoded private key (with or without 0x prefix).
    ///
    /// # Errors
    /// Returns [`KycError::InvalidKey`] if the string is not hex or is not a
    /// valid secp256k1 scalar.
    pub fn from_hex(private_key: &str) -> KycResult<Self> {
        let trimmed = private_key.trim();
        let stripped = trimmed.strip_prefix("0x").unwrap_or(trimmed);
        let bytes = hex::decode(stripped).map_err(|e| KycError::InvalidKey(e.to_string()))?;
        let signing_key =
            SigningKey::from_slice(&bytes).map_err(|e| KycError::InvalidKey(e.to_string()))?;
        Ok(Self::from_signing_key(signing_key))
    }

    pub fn from_signing_key(signing_key: SigningKey) -> Self {
        let address = secret_key_to_address(&signing_key);
        KeyManager {
            signing_key,
            address,
        }
    }

    /// Ethereum address controlled by this key.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Signs a 32-byte digest as-is, without any message prefixing.
    ///
    /// # Arguments
    /// * `digest` - Pre-computed hash to sign
    ///
    /// # Returns
    /// Recoverable signature with `v` in `{27, 28}`, serializable to the
    /// 65-byte `r || s || v` form expected by `ecrecover`.
    pub fn sign_digest(&self, digest: H256) -> KycResult<Signature> {
        let (signature, recovery_id) = self
            .signing_key
            .sign_prehash_recoverable(digest.as_bytes())
            .map_err(|e| KycError::Signing(e.to_string()))?;

        let bytes = signature.to_bytes();
        let (r, s) = bytes.split_at(32);
        Ok(Signature {
            r: U256::from_big_endian(r),
            s: U256::from_big_endian(s),
            v: u64::from(recovery_id.to_byte()) + LEGACY_V_OFFSET,
        })
    }

    /// Builds an ethers wallet for transaction signing on `chain_id`.
    pub fn wallet(&self, chain_id: u64) -> LocalWallet {
        LocalWallet::from(self.signing_key.clone()).with_chain_id(chain_id)
    }
}

impl fmt::Debug for KeyManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyManager")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}
