// src/services/verifier.rs
//! Off-chain verification of claim signatures.
//!
//! Mirrors the registry's `ecrecover` check so that a bad signature can be
//! caught before a transaction is paid for.

use crate::error::{KycError, KycResult};
use crate::utils::crypto::claim_digest;
use ethers::types::{Address, Signature, H256};

/// Checks claim signatures against a trusted backend address.
#[derive(Debug, Clone, Copy)]
pub struct Verifier {
    /// Address of the KYC backend the registry trusts
    expected_signer: Address,
}

impl Verifier {
    pub fn new(expected_signer: Address) -> Self {
        Self { expected_signer }
    }

    /// Recovers the address that signed the claim digest for `(user, id_hash)`.
    ///
    /// # Errors
    /// Returns [`KycError::InvalidSignature`] if `v` is not a valid recovery
    /// value or the signature does not correspond to any public key.
    pub fn recover_signer(user: Address, id_hash: H256, signature: &Signature) -> KycResult<Address> {
        signature
            .recover(claim_digest(user, id_hash))
            .map_err(|e| KycError::InvalidSignature(e.to_string()))
    }

    /// Checks an already recovered signer against the trusted backend.
    ///
    /// # Errors
    /// Returns [`KycError::InvalidSignature`] naming both addresses if the
    /// signature came from anyone else.
    pub fn ensure(&self, recovered: Address) -> KycResult<()> {
        if recovered != self.expected_signer {
            return Err(KycError::InvalidSignature(format!(
                "signed by {:#x}, expected backend {:#x}",
                recovered, self.expected_signer
            )));
        }
        Ok(())
    }
}
