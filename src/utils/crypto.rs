// src/utils/crypto.rs
//! Cryptographic utilities optimized for blockchain compatibility.
//!
//! Uses Keccak-256 (Ethereum's standard hash function) for all operations, and
//! builds the exact byte layout the KYC registry recomputes on-chain:
//!
//! ```text
//! keccak256("\x19Ethereum Signed Message:\n84" || user (20 bytes) || idHash (32 bytes))
//! ```

use ethers::types::{Address, H256};
use ethers::utils::keccak256;

/// Preamble the KYC registry prepends before hashing a claim.
///
/// The registry hardcodes the length field as `84`. It does not match the
/// 52-byte payload, so the digest is not an EIP-191 `hash_message` of the
/// payload and must be built by hand.
pub const CLAIM_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n84";

/// Byte length of the claim payload: a raw address followed by a raw hash.
pub const CLAIM_PAYLOAD_LEN: usize = Address::len_bytes() + H256::len_bytes();

/// Computes a Keccak-256 hash of the input data (Ethereum-compatible).
///
/// # Arguments
/// * `data` - Binary data to hash (as bytes slice)
///
/// # Returns
/// Fixed-size 32-byte array (`[u8; 32]`) containing the hash.
pub fn hash_data(data: &[u8]) -> [u8; 32] {
    keccak256(data)
}

/// Derives the on-chain identity hash of a national ID.
///
/// Only the UTF-8 bytes of the DNI are hashed; the user address plays no part.
pub fn id_hash(dni: &str) -> H256 {
    H256(hash_data(dni.as_bytes()))
}

/// Raw `user || id_hash` payload covered by the backend signature.
pub fn claim_payload(user: Address, id_hash: H256) -> [u8; CLAIM_PAYLOAD_LEN] {
    let mut payload = [0u8; CLAIM_PAYLOAD_LEN];
    payload[..Address::len_bytes()].copy_from_slice(user.as_bytes());
    payload[Address::len_bytes()..].copy_from_slice(id_hash.as_bytes());
    payload
}

/// Computes the digest the backend key signs for a claim.
///
/// # Arguments
/// * `user` - Address that will submit the claim
/// * `id_hash` - Identity hash of the user's national ID
///
/// # Returns
/// Keccak-256 of [`CLAIM_MESSAGE_PREFIX`] followed by the raw address and hash
/// bytes. The preamble is applied here, so the result must be signed with a
/// raw digest primitive and never passed to a message-signing helper.
pub fn claim_digest(user: Address, id_hash: H256) -> H256 {
    let mut message = Vec::with_capacity(CLAIM_MESSAGE_PREFIX.len() + CLAIM_PAYLOAD_LEN);
    message.extend_from_slice(CLAIM_MESSAGE_PREFIX);
    message.extend_from_slice(&claim_payload(user, id_hash));
    H256(hash_data(&message))
}
