// src/services/authorizer.rs
//! Claim authorization service (the signer side).
//!
//! Turns `(user address, national ID)` into a [`ClaimAuthorization`] signed by
//! the backend key. Nothing is persisted and nothing touches the network.

use crate::error::KycResult;
use crate::models::kyc::ClaimAuthorization;
use crate::utils::crypto::{claim_digest, id_hash};
use crate::wallet::key_management::KeyManager;
use ethers::types::Address;
use log::debug;

/// Backend-side signer of claim authorizations.
#[derive(Debug, Clone)]
pub struct Authorizer {
    /// Backend key whose address the registry trusts
    key_manager: KeyManager,
}

impl Authorizer {
    pub fn new(key_manager: KeyManager) -> Self {
        Self { key_manager }
    }

    /// Creates an authorizer from a hex-encoded backend private key.
    pub fn from_hex(backend_key: &str) -> KycResult<Self> {
        KeyManager::from_hex(backend_key).map(Self::new)
    }

    /// Address the registry must recognise as the KYC backend.
    pub fn signer_address(&self) -> Address {
        self.key_manager.address()
    }

    /// Authorizes `user` to claim the identity behind `dni`.
    ///
    /// # Process Flow
    /// 1. Hashes the DNI's UTF-8 bytes with Keccak-256
    /// 2. Builds the prefixed claim digest over `user || idHash`
    /// 3. Signs the digest directly with the backend key
    pub fn authorize(&self, user: Address, dni: &str) -> KycResult<ClaimAuthorization> {
        let id_hash = id_hash(dni);
        let digest = claim_digest(user, id_hash);
        debug!(
            "signing claim digest {:#x} for user {:#x} with backend {:#x}",
            digest,
            user,
            self.signer_address()
        );

        let signature = self.key_manager.sign_digest(digest)?;
        Ok(ClaimAuthorization {
            user,
            id_hash,
            signature,
        })
    }
}
