// src/services/claimer.rs
//! Claim submission service (the user side).
//!
//! Presents a backend authorization to the KYC registry on behalf of the user
//! account. The steps are strictly ordered: submit, wait for the receipt, then
//! read the balance. Nothing is retried.

use crate::blockchain::evm_client::{ChainClient, SignerClient};
use crate::config::ClaimConfig;
use crate::contracts::kyc_registry::KycRegistry;
use crate::error::KycResult;
use crate::models::kyc::{ClaimReceipt, ClaimRequest};
use crate::services::verifier::Verifier;
use crate::wallet::key_management::KeyManager;
use ethers::types::{Address, TransactionReceipt, H256, U256};
use log::{info, warn};

/// Submits claims to a KYC registry from a single user account.
pub struct Claimer {
    /// Signing client for the user's account
    chain: ChainClient,
    /// Registry binding sharing the same client
    registry: KycRegistry<SignerClient>,
    /// Backend address to check signatures against before sending
    verifier: Option<Verifier>,
}

impl Claimer {
    /// Connects to the chain and binds the registry described by `config`.
    ///
    /// # Errors
    /// Fails on a malformed key or address, or if the node is unreachable.
    pub async fn connect(config: &ClaimConfig) -> KycResult<Self> {
        let key_manager = KeyManager::from_hex(&config.user_pk)?;
        let registry_address = config.registry_address()?;
        let verifier = config.expected_signer()?.map(Verifier::new);

        let chain = ChainClient::connect(&config.rpc_url, &key_manager, config.poll_interval()).await?;
        let registry = KycRegistry::new(registry_address, chain.client())
            .with_legacy_transactions(config.legacy_tx);

        info!(
            "claiming from {:#x} against registry {:#x} on chain {}",
            chain.address(),
            registry.address(),
            chain.chain_id()
        );
        Ok(Self {
            chain,
            registry,
            verifier,
        })
    }

    /// Address the claim is sent from, and whose balance is reported.
    pub fn account(&self) -> Address {
        self.chain.address()
    }

    /// Checks the signature locally before any transaction is built.
    ///
    /// # Returns
    /// The address the signature recovers to for this account. If a trusted
    /// backend is configured, any other signer is an error.
    pub fn preflight(&self, request: &ClaimRequest) -> KycResult<Address> {
        let signer = Verifier::recover_signer(self.account(), request.id_hash, &request.signature)?;
        match &self.verifier {
            Some(verifier) => verifier.ensure(signer)?,
            None => warn!(
                "no trusted backend configured; signature recovers to {:#x}",
                signer
            ),
        }
        Ok(signer)
    }

    /// Broadcasts the `claim` transaction and returns its hash.
    pub async fn submit(&self, request: &ClaimRequest) -> KycResult<H256> {
        info!("calling claim({:#x}, <signature>)", request.id_hash);
        self.registry
            .send_claim(request.id_hash, &request.signature)
            .await
    }

    /// Blocks until the claim transaction is mined successfully.
    pub async fn confirm(&self, tx_hash: H256) -> KycResult<TransactionReceipt> {
        self.registry.wait_for_receipt(tx_hash).await
    }

    /// Current registry balance of the claiming account.
    pub async fn balance(&self) -> KycResult<U256> {
        self.registry.balance_of(self.account()).await
    }

    /// Runs the whole flow, reporting the transaction hash through
    /// `on_submitted` before waiting for confirmation.
    pub async fn claim<F>(&self, request: &ClaimRequest, on_submitted: F) -> KycResult<ClaimReceipt>
    where
        F: FnOnce(H256),
    {
        self.preflight(request)?;
        let tx_hash = self.submit(request).await?;
        on_submitted(tx_hash);

        self.confirm(tx_hash).await?;
        let balance = self.balance().await?;
        Ok(ClaimReceipt { tx_hash, balance })
    }
}
