// src/blockchain/evm_client.rs
//! EVM JSON-RPC client implementation.
//!
//! Connects an HTTP provider, discovers the chain id and binds the user's key
//! to it through signer middleware, so contract calls made through
//! [`ChainClient::client`] are signed locally and broadcast raw.

use crate::error::{KycError, KycResult};
use crate::wallet::key_management::KeyManager;
use ethers::middleware::SignerMiddleware;
use ethers::providers::{Http, Middleware, Provider};
use ethers::signers::LocalWallet;
use ethers::types::Address;
use log::info;
use std::sync::Arc;
use std::time::Duration;

/// Provider stack used for every chain interaction.
pub type SignerClient = SignerMiddleware<Provider<Http>, LocalWallet>;

/// EVM client holding a signing wallet bound to the connected chain.
#[derive(Clone)]
pub struct ChainClient {
    /// Signing middleware over the HTTP provider
    client: Arc<SignerClient>,
    /// Chain id reported by the node at connection time
    chain_id: u64,
}

impl ChainClient {
    /// Creates a new client instance.
    ///
    /// # Arguments
    /// * `rpc_url` - JSON-RPC endpoint URL
    /// * `key_manager` - Key of the account that will send transactions
    /// * `poll_interval` - Receipt polling interval, if not the provider default
    ///
    /// # Errors
    /// Returns [`KycError::Rpc`] if the URL is malformed or the chain id
    /// cannot be retrieved.
    pub async fn connect(
        rpc_url: &str,
        key_manager: &KeyManager,
        poll_interval: Option<Duration>,
    ) -> KycResult<Self> {
        let mut provider = Provider::<Http>::try_from(rpc_url)
            .map_err(|e| KycError::Rpc(format!("invalid RPC url {rpc_url}: {e}")))?;
        if let Some(interval) = poll_interval {
            provider.set_interval(interval);
        }

        let chain_id = provider
            .get_chainid()
            .await
            .map_err(|e| KycError::Rpc(format!("failed to get chain id: {e}")))?
            .as_u64();
        info!("connected to chain {} at {}", chain_id, rpc_url);

        let client = SignerMiddleware::new(provider, key_manager.wallet(chain_id));
        Ok(Self {
            client: Arc::new(client),
            chain_id,
        })
    }

    /// Gets the address transactions are sent from.
    pub fn address(&self) -> Address {
        self.client.address()
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Shared handle for contract bindings.
    pub fn client(&self) -> Arc<SignerClient> {
        self.client.clone()
    }
}
