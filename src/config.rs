// src/config.rs
//! Claimer configuration, read from the process environment.
//!
//! ## Environment Variables
//! - `RPC_URL`: JSON-RPC endpoint of the chain hosting the registry
//! - `USER_PK`: private key of the account submitting the claim
//! - `KYC_REGISTRY`: address of the deployed KYC registry
//! - `IDHASH`: identity hash printed by the signer
//! - `SIG`: signature printed by the signer
//! - `LEGACY_TX`: (Optional) send legacy transactions (default: false)
//! - `KYC_SIGNER`: (Optional) trusted backend address, checked before sending
//! - `POLL_INTERVAL_MS`: (Optional) receipt polling interval in milliseconds
//!   (default: the provider's 7 seconds)

use crate::error::KycResult;
use crate::models::kyc::ClaimRequest;
use crate::utils::serialization::{parse_address, parse_id_hash, parse_signature};
use ::config::{Config, Environment};
use ethers::types::Address;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

/// Settings for one `claim` invocation.
#[derive(Clone, Deserialize)]
pub struct ClaimConfig {
    pub rpc_url: String,
    pub user_pk: String,
    pub kyc_registry: String,
    pub idhash: String,
    pub sig: String,
    #[serde(default)]
    pub legacy_tx: bool,
    #[serde(default)]
    pub kyc_signer: Option<String>,
    #[serde(default)]
    pub poll_interval_ms: Option<u64>,
}

impl ClaimConfig {
    /// Loads the configuration from the process environment.
    ///
    /// Call `dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> KycResult<Self> {
        Self::from_source(Environment::default())
    }

    /// Loads the configuration from an explicit environment source.
    pub fn from_source(source: Environment) -> KycResult<Self> {
        let settings = Config::builder().add_source(source).build()?;
        Ok(settings.try_deserialize()?)
    }

    pub fn registry_address(&self) -> KycResult<Address> {
        parse_address(&self.kyc_registry)
    }

    pub fn expected_signer(&self) -> KycResult<Option<Address>> {
        self.kyc_signer.as_deref().map(parse_address).transpose()
    }

    pub fn poll_interval(&self) -> Option<Duration> {
        self.poll_interval_ms.map(Duration::from_millis)
    }

    /// Decodes `IDHASH` and `SIG` into a claim request.
    pub fn request(&self) -> KycResult<ClaimRequest> {
        Ok(ClaimRequest {
            id_hash: parse_id_hash(&self.idhash)?,
            signature: parse_signature(&self.sig)?,
        })
    }
}

impl fmt::Debug for ClaimConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClaimConfig")
            .field("rpc_url", &self.rpc_url)
            .field("user_pk", &"<redacted>")
            .field("kyc_registry", &self.kyc_registry)
            .field("idhash", &self.idhash)
            .field("sig", &self.sig)
            .field("legacy_tx", &self.legacy_tx)
            .field("kyc_signer", &self.kyc_signer)
            .field("poll_interval_ms", &self.poll_interval_ms)
            .finish()
    }
}
