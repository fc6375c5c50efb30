//! KYC Claim Submitter
//!
//! Sends `claim(idHash, sig)` to the KYC registry from the user's account,
//! waits for it to be mined and prints the resulting balance.
//!
//! ## Environment Variables Required
//! - `RPC_URL`: JSON-RPC endpoint
//! - `USER_PK`: user's private key
//! - `KYC_REGISTRY`: deployed KycRegistry contract address
//! - `IDHASH`: identity hash printed by `sign`
//! - `SIG`: signature printed by `sign`
//!
//! Exits with status 1 on any failure, including contract reverts.

use anyhow::{Context, Result};
use dotenv::dotenv;
use kyc_claim::config::ClaimConfig;
use kyc_claim::services::claimer::Claimer;
use kyc_claim::utils::serialization::encode_hash;

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = ClaimConfig::from_env().context("failed to load claim configuration")?;
    let request = config.request()?;

    let claimer = Claimer::connect(&config).await?;
    let receipt = claimer
        .claim(&request, |tx_hash| println!("TxHash: {}", encode_hash(tx_hash)))
        .await?;

    println!("balanceOf user: {}", receipt.balance);
    Ok(())
}
