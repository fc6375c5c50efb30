//! # KYC Claim Tooling
//!
//! Library behind the `sign`, `claim` and `backend_address` binaries.
//!
//! ## Layout
//! 1. **Cryptography**: identity hashing and the prefixed claim digest (`utils`)
//! 2. **Wallet**: secp256k1 key handling and raw digest signing (`wallet`)
//! 3. **Services**: authorizing, verifying and submitting claims (`services`)
//! 4. **Blockchain**: JSON-RPC client and the KYC registry binding
//!    (`blockchain`, `contracts`)

pub mod blockchain; // EVM client
pub mod cli;
pub mod config;
pub mod contracts; // KYC registry binding
pub mod error;
pub mod models;
pub mod services; // Signer and claimer logic
pub mod utils;
pub mod wallet;

pub use error::{KycError, KycResult};
