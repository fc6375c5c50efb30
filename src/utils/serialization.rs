// src/utils/serialization.rs
//! Hex encoding and decoding of the values exchanged between the tools.
//!
//! The signer prints an identity hash and a signature; the claimer reads them
//! back from the environment. Both sides go through these helpers so the
//! textual form stays `0x`-prefixed hex.

use crate::error::{KycError, KycResult};
use ethers::types::{Address, Signature, H256};
use ethers::utils::{hex, to_checksum};
use std::str::FromStr;

/// Parses a 20-byte address (with or without 0x prefix, any checksum casing).
pub fn parse_address(data: &str) -> KycResult<Address> {
    Address::from_str(data.trim()).map_err(|e| KycError::InvalidAddress(format!("{data}: {e}")))
}

/// Parses a 32-byte identity hash.
pub fn parse_id_hash(data: &str) -> KycResult<H256> {
    H256::from_str(data.trim()).map_err(|e| KycError::InvalidHash(format!("{data}: {e}")))
}

/// Parses a 65-byte `r || s || v` signature.
pub fn parse_signature(data: &str) -> KycResult<Signature> {
    Signature::from_str(data.trim()).map_err(|e| KycError::InvalidSignature(e.to_string()))
}

/// Formats an address with its EIP-55 checksum casing.
pub fn encode_address(address: Address) -> String {
    to_checksum(&address, None)
}

/// Formats a hash as `0x` followed by 64 lowercase hex characters.
pub fn encode_hash(hash: H256) -> String {
    format!("{hash:#x}")
}

/// Formats a signature in its 65-byte compact form (`0x` + 130 hex characters).
pub fn encode_signature(signature: &Signature) -> String {
    format!("0x{}", hex::encode(signature.to_vec()))
}
