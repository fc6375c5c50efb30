// src/contracts/kyc_registry.rs
//! KYC Registry smart contract interface.
//!
//! Only the two entry points the claim flow needs are bound:
//! - `claim(bytes32 idHash, bytes sig)`: records the caller as verified
//! - `balanceOf(address)`: reads the caller's balance afterwards

use crate::error::{KycError, KycResult};
use ethers::contract::{abigen, ContractError};
use ethers::providers::{Middleware, PendingTransaction};
use ethers::types::{Address, Signature, TransactionReceipt, H256, U256, U64};
use log::debug;
use std::sync::Arc;

abigen!(
    KycRegistryContract,
    r#"[
        function claim(bytes32 idHash, bytes sig) external
        function balanceOf(address account) external view returns (uint256)
    ]"#
);

/// KYC Registry smart contract wrapper.
///
/// # Type Parameters
/// * `M` - Middleware used to reach the chain; must sign transactions for
///   [`KycRegistry::send_claim`] to succeed
pub struct KycRegistry<M> {
    /// Generated contract binding
    contract: KycRegistryContract<M>,
    /// Client shared with the binding, kept for receipt polling
    client: Arc<M>,
    /// Send legacy (type 0) transactions instead of EIP-1559 ones
    legacy: bool,
}

impl<M> KycRegistry<M>
where
    M: Middleware + 'static,
{
    /// Binds the registry deployed at `address`.
    pub fn new(address: Address, client: Arc<M>) -> Self {
        KycRegistry {
            contract: KycRegistryContract::new(address, client.clone()),
            client,
            legacy: false,
        }
    }

    pub fn with_legacy_transactions(mut self, legacy: bool) -> Self {
        self.legacy = legacy;
        self
    }

    pub fn address(&self) -> Address {
        self.contract.address()
    }

    /// Submits `claim(idHash, sig)` without waiting for it to be mined.
    ///
    /// # Returns
    /// Hash of the broadcast transaction
    ///
    /// # Errors
    /// - [`KycError::Reverted`] when the node rejects the call during gas
    ///   estimation and returns revert data
    /// - [`KycError::Rpc`] for every other provider or signer failure
    pub async fn send_claim(&self, id_hash: H256, signature: &Signature) -> KycResult<H256> {
        let mut call = self.contract.claim(id_hash.0, signature.to_vec().into());
        if self.legacy {
            call = call.legacy();
        }

        let pending = call.send().await.map_err(contract_error)?;
        Ok(pending.tx_hash())
    }

    /// Waits until `tx_hash` is mined and checks its status.
    ///
    /// # Errors
    /// - [`KycError::Dropped`] if the transaction disappears from the mempool
    /// - [`KycError::Reverted`] if it was mined with a failed status
    pub async fn wait_for_receipt(&self, tx_hash: H256) -> KycResult<TransactionReceipt> {
        let receipt = PendingTransaction::new(tx_hash, self.client.provider())
            .await
            .map_err(|e| KycError::Rpc(e.to_string()))?
            .ok_or(KycError::Dropped(tx_hash))?;

        debug!(
            "claim {:#x} mined in block {:?}, status {:?}",
            tx_hash, receipt.block_number, receipt.status
        );
        if receipt.status == Some(U64::zero()) {
            return Err(KycError::Reverted {
                reason: format!("transaction {tx_hash:#x} failed on-chain"),
            });
        }
        Ok(receipt)
    }

    /// Reads `balanceOf(account)`.
    pub async fn balance_of(&self, account: Address) -> KycResult<U256> {
        self.contract
            .balance_of(account)
            .call()
            .await
            .map_err(contract_error)
    }
}

/// Classifies a contract call failure, decoding `Error(string)` reverts.
fn contract_error<M: Middleware>(err: ContractError<M>) -> KycError {
    if let Some(reason) = err.decode_revert::<String>() {
        return KycError::Reverted { reason };
    }
    if let Some(data) = err.as_revert() {
        return KycError::Reverted {
            reason: format!("undecoded revert data {data}"),
        };
    }
    KycError::Rpc(err.to_string())
}
