//! Claim Authorization Signer
//!
//! Prints the identity hash of a national ID and the backend signature that
//! lets `USER_ADDR` claim it on the KYC registry.
//!
//! ## Usage
//!
//! ```bash
//! sign <BACKEND_PK> <USER_ADDR> <DNI>
//! ```
//!
//! Output (copy into `IDHASH` and `SIG` for the `claim` tool):
//!
//! ```text
//! idHash=0x…
//! signature=0x…
//! ```

use anyhow::Result;
use dotenv::dotenv;
use kyc_claim::cli::{collect_args, SignArgs};
use kyc_claim::services::authorizer::Authorizer;
use kyc_claim::utils::serialization::{encode_hash, encode_signature, parse_address};

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match collect_args(std::env::args_os()).and_then(|args| SignArgs::from_args(&args)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let authorizer = Authorizer::from_hex(&args.backend_pk)?;
    let user = parse_address(&args.user_addr)?;
    let authorization = authorizer.authorize(user, &args.dni)?;

    println!("idHash={}", encode_hash(authorization.id_hash));
    println!("signature={}", encode_signature(&authorization.signature));

    Ok(())
}
