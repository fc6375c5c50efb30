// src/models/kyc.rs
//! Data exchanged by the KYC claim flow.

use ethers::types::{Address, Signature, H256, U256};

/// A backend attestation that `user` may claim the identity behind `id_hash`.
///
/// Produced by the signer and consumed by the registry's `claim` entry point.
/// The national ID itself is never stored; only its Keccak-256 hash travels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimAuthorization {
    /// Address allowed to submit the claim
    pub user: Address,

    /// Keccak-256 of the national ID's UTF-8 bytes
    pub id_hash: H256,

    /// Backend signature over the claim digest
    pub signature: Signature,
}

/// Inputs for a claim transaction, as read back from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimRequest {
    pub id_hash: H256,
    pub signature: Signature,
}

/// Outcome of a confirmed claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimReceipt {
    /// Hash of the mined `claim` transaction
    pub tx_hash: H256,

    /// Registry balance of the claimer after confirmation
    pub balance: U256,
}
