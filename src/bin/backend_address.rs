//! Get Ethereum Address from the Backend Key
//!
//! Prints the address derived from the backend private key. This is the
//! signer address the KYC registry must be deployed with.

use anyhow::Result;
use dotenv::dotenv;
use kyc_claim::cli::{backend_key_arg, collect_args};
use kyc_claim::services::authorizer::Authorizer;
use kyc_claim::utils::serialization::encode_address;

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let backend_pk = match collect_args(std::env::args_os()).and_then(|args| backend_key_arg(&args)) {
        Ok(backend_pk) => backend_pk,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let authorizer = Authorizer::from_hex(&backend_pk)?;
    println!("{}", encode_address(authorizer.signer_address()));

    Ok(())
}
