// src/error.rs
//! Error taxonomy shared by the signer, the claimer and their helpers.

use ethers::types::H256;
use thiserror::Error;

/// Errors surfaced by the KYC claim tooling.
///
/// Input-format errors (`Invalid*`) are never retried; they come straight from
/// whatever the operator passed on the command line or in the environment.
#[derive(Debug, Error)]
pub enum KycError {
    /// Wrong number of command-line arguments. Carries the usage line.
    #[error("{0}")]
    Usage(String),

    #[error("invalid private key: {0}")]
    InvalidKey(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid identity hash: {0}")]
    InvalidHash(String),

    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    /// The raw digest signing primitive failed.
    #[error("signing failed: {0}")]
    Signing(String),

    #[error("configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    /// Provider construction or JSON-RPC transport failure.
    #[error("rpc error: {0}")]
    Rpc(String),

    /// The registry rejected the claim, either while the transaction was being
    /// built (gas estimation) or after it was mined with a failed status.
    #[error("claim reverted: {reason}")]
    Reverted { reason: String },

    #[error("transaction {0:#x} dropped before confirmation")]
    Dropped(H256),
}

pub type KycResult<T> = Result<T, KycError>;
