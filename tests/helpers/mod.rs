//! Shared fixtures for the integration tests.
//!
//! Keys and addresses are the well-known Hardhat development accounts:
//! account #0 plays the KYC backend, account #1 the user.

#![allow(dead_code)]

use ethers::abi::{encode, Token};
use ethers::types::U256;
use ethers::utils::hex;
use mockito::{mock, Matcher, Mock};
use serde_json::{json, Value};
use std::process::Command;

pub const BACKEND_PK: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
pub const BACKEND_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
pub const USER_PK: &str = "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";
pub const USER_ADDRESS: &str = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";
pub const REGISTRY_ADDRESS: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

pub const DNI: &str = "12345678";
pub const ID_HASH: &str = "0xa9224faa7bc236091f6153e7ce013a1b0a2c802c18a7cedfeb708f2117359032";
pub const SIGNATURE: &str = "0x412a5e23484d9a2be494a47b34f9ee0433c965fdbffc613c45683073d0761c544e9d689aa5d393150c5cb39a6d311bdda36624d324a9c3c60ebee48306ff06391c";

/// Hardhat's default chain id.
pub const CHAIN_ID: &str = "0x7a69";

/// Hash the stubbed node returns for every broadcast transaction.
pub const TX_HASH: &str = "0xabababababababababababababababababababababababababababababababab";
const BLOCK_HASH: &str = "0xcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcd";
const BLOCK_NUMBER: &str = "0x2";

/// Stubs a JSON-RPC method with a successful result. Call `create()` on the
/// returned mock to register it.
pub fn rpc_result(method: &str, result: Value) -> Mock {
    rpc_response(method, json!({ "jsonrpc": "2.0", "id": 1, "result": result }))
}

/// Stubs a JSON-RPC method with an error object.
pub fn rpc_error(method: &str, error: Value) -> Mock {
    rpc_response(method, json!({ "jsonrpc": "2.0", "id": 1, "error": error }))
}

fn rpc_response(method: &str, body: Value) -> Mock {
    mock("POST", "/")
        .match_body(Matcher::Regex(format!(r#""method":"{}""#, method)))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
}

/// Stubs everything a signer middleware needs to build a legacy transaction,
/// except gas estimation.
pub fn stub_transaction_fill() -> Vec<Mock> {
    vec![
        rpc_result("eth_chainId", json!(CHAIN_ID)).create(),
        rpc_result("eth_getTransactionCount", json!("0x0")).create(),
        rpc_result("eth_gasPrice", json!("0x3b9aca00")).create(),
    ]
}

/// ABI-encoded `Error(string)` revert payload, `0x`-prefixed.
pub fn revert_data(reason: &str) -> String {
    let mut data = vec![0x08, 0xc3, 0x79, 0xa0];
    data.extend(encode(&[Token::String(reason.to_string())]));
    format!("0x{}", hex::encode(data))
}

/// Node response for a `claim` call that reverts with `reason`.
pub fn stub_reverting_estimate(reason: &str) -> Mock {
    rpc_error(
        "eth_estimateGas",
        json!({
            "code": 3,
            "message": format!("execution reverted: {}", reason),
            "data": revert_data(reason),
        }),
    )
    .create()
}

/// Stubs fill, gas estimation and broadcast of a legacy `claim` transaction
/// that is accepted with [`TX_HASH`].
pub fn stub_broadcast() -> Vec<Mock> {
    let mut mocks = stub_transaction_fill();
    mocks.push(rpc_result("eth_estimateGas", json!("0x186a0")).create());
    mocks.push(rpc_result("eth_sendRawTransaction", json!(TX_HASH)).create());
    mocks
}

/// `eth_getTransactionByHash` result for [`TX_HASH`] mined in block 2.
pub fn mined_transaction() -> Value {
    json!({
        "hash": TX_HASH,
        "nonce": "0x0",
        "blockHash": BLOCK_HASH,
        "blockNumber": BLOCK_NUMBER,
        "transactionIndex": "0x0",
        "from": USER_ADDRESS,
        "to": REGISTRY_ADDRESS,
        "value": "0x0",
        "gasPrice": "0x3b9aca00",
        "gas": "0x186a0",
        "input": "0x",
        "v": "0xf4f5",
        "r": "0x1",
        "s": "0x1",
    })
}

/// `eth_getTransactionReceipt` result for [`TX_HASH`] with the given status
/// (`"0x1"` success, `"0x0"` failure).
pub fn receipt(status: &str) -> Value {
    json!({
        "transactionHash": TX_HASH,
        "transactionIndex": "0x0",
        "blockHash": BLOCK_HASH,
        "blockNumber": BLOCK_NUMBER,
        "from": USER_ADDRESS,
        "to": REGISTRY_ADDRESS,
        "cumulativeGasUsed": "0x5208",
        "gasUsed": "0x5208",
        "contractAddress": null,
        "logs": [],
        "status": status,
        "logsBloom": format!("0x{}", "00".repeat(256)),
        "type": "0x0",
        "effectiveGasPrice": "0x3b9aca00",
    })
}

/// Stubs the node's view of [`TX_HASH`] after broadcast. `transaction` is
/// the `eth_getTransactionByHash` result (`null` once dropped).
pub fn stub_inclusion(transaction: Value, status: &str) -> Vec<Mock> {
    vec![
        rpc_result("eth_getTransactionByHash", transaction).create(),
        rpc_result("eth_getTransactionReceipt", receipt(status)).create(),
        rpc_result("eth_blockNumber", json!(BLOCK_NUMBER)).create(),
    ]
}

/// Stubs `balanceOf` to return `amount`.
pub fn stub_balance(amount: u64) -> Mock {
    let data = encode(&[Token::Uint(U256::from(amount))]);
    rpc_result("eth_call", json!(format!("0x{}", hex::encode(data)))).create()
}

/// `claim` binary with the optional settings cleared and logging off.
pub fn claim_command() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_claim"));
    command
        .env_remove("LEGACY_TX")
        .env_remove("KYC_SIGNER")
        .env_remove("POLL_INTERVAL_MS")
        .env("RUST_LOG", "off");
    command
}

/// `claim` binary configured against the mock node with the Hardhat fixtures.
pub fn claim_against_mock() -> Command {
    let mut command = claim_command();
    command
        .env("RPC_URL", mockito::server_url())
        .env("USER_PK", USER_PK)
        .env("KYC_REGISTRY", REGISTRY_ADDRESS)
        .env("IDHASH", ID_HASH)
        .env("SIG", SIGNATURE)
        .env("LEGACY_TX", "true")
        .env("POLL_INTERVAL_MS", "10");
    command
}
