//! A claim that is mined but fails on-chain is reported as a revert, and
//! the balance is never queried.

mod helpers;

use helpers::*;
use kyc_claim::config::ClaimConfig;
use kyc_claim::services::claimer::Claimer;
use kyc_claim::KycError;

#[tokio::test]
async fn test_failed_receipt_is_revert() {
    let _broadcast = stub_broadcast();
    let _inclusion = stub_inclusion(mined_transaction(), "0x0");
    let balance = rpc_result("eth_call", serde_json::json!("0x")).expect(0).create();

    let config = ClaimConfig {
        rpc_url: mockito::server_url(),
        user_pk: USER_PK.to_string(),
        kyc_registry: REGISTRY_ADDRESS.to_string(),
        idhash: ID_HASH.to_string(),
        sig: SIGNATURE.to_string(),
        legacy_tx: true,
        kyc_signer: None,
        poll_interval_ms: Some(10),
    };
    let claimer = Claimer::connect(&config).await.unwrap();

    let err = claimer
        .claim(&config.request().unwrap(), |_| {})
        .await
        .unwrap_err();
    match err {
        KycError::Reverted { reason } => {
            assert_eq!(reason, format!("transaction {} failed on-chain", TX_HASH))
        }
        other => panic!("expected revert, got {other:?}"),
    }
    balance.assert();
}

#[test]
fn test_failed_receipt_exits_one_after_hash() {
    let _broadcast = stub_broadcast();
    let _inclusion = stub_inclusion(mined_transaction(), "0x0");

    let output = claim_against_mock().output().expect("failed to run claim");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        format!("TxHash: {}\n", TX_HASH)
    );
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("failed on-chain"), "stderr: {stderr}");
}
