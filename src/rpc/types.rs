//! # RPC Wire Types
//!
//! The JSON-RPC envelope, the three-way outcome every call collapses into,
//! and the typed result records the daemon returns. Field names follow the
//! daemon's camelCase wire format.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Job
// ============================================================================

/// An immutable (method, parameters, endpoint) triple ready for transmission.
///
/// Construction is total: no validation happens here. The daemon is the
/// authority on whether the parameters make sense.
#[derive(Clone, Debug, PartialEq)]
pub struct Job {
    pub method: String,
    pub params: Vec<serde_json::Value>,
    pub endpoint: String,
}

impl Job {
    pub fn new(
        method: impl Into<String>,
        params: Vec<serde_json::Value>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            params,
            endpoint: endpoint.into(),
        }
    }
}

// ============================================================================
// JSON-RPC Envelope
// ============================================================================

/// Request body sent to the daemon.
#[derive(Debug, Serialize)]
pub struct RpcRequest {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: String,
    pub params: Vec<serde_json::Value>,
}

/// Response body: exactly one of `result` / `error` is expected.
#[derive(Debug, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<RpcError>,
}

/// The daemon executed the call but rejected it.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

/// The three-way outcome of attempting a [`Job`].
///
/// Exactly one variant per call. Anything the dispatcher cannot classify as
/// `Success` or `Rpc` becomes `Transport`; there is no fourth path.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome<T> {
    /// Well-formed response carrying a result.
    Success(T),
    /// Well-formed response carrying the daemon's error object.
    Rpc(RpcError),
    /// The call never completed or the response was unreadable.
    Transport(String),
}

// ============================================================================
// Result Records
// ============================================================================

/// `getstatus` result.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusInfo {
    pub tor_status: Option<String>,
    pub backend_status: Option<String>,
    pub best_blockchain_height: Option<String>,
    pub best_blockchain_hash: Option<String>,
    pub filters_count: Option<u64>,
    pub filters_left: Option<u64>,
    pub network: Option<String>,
    pub exchange_rate: Option<f64>,
    #[serde(default)]
    pub peers: Vec<PeerInfo>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PeerInfo {
    pub is_connected: Option<bool>,
    pub last_seen: Option<String>,
}

/// One coin from `listcoins` / `listunspentcoins`. Amounts are satoshis.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CoinInfo {
    pub txid: String,
    pub index: u32,
    pub amount: i64,
    pub anonymity_score: Option<f64>,
    pub confirmed: Option<bool>,
    pub confirmations: Option<i64>,
    pub key_path: Option<String>,
    pub address: Option<String>,
    pub spent_by: Option<String>,
}

/// `getwalletinfo` result.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalletInfo {
    pub wallet_name: Option<String>,
    pub wallet_file: Option<String>,
    pub state: Option<String>,
    pub master_key_fingerprint: Option<String>,
    pub anon_score_target: Option<u32>,
    pub is_watch_only: Option<bool>,
    pub balance: Option<i64>,
    #[serde(default)]
    pub accounts: Vec<AccountInfo>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    pub name: Option<String>,
    pub public_key: Option<String>,
    pub key_path: Option<String>,
}

/// `getnewaddress` result.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddressInfo {
    pub address: String,
    pub key_path: Option<String>,
    pub label: Option<String>,
    pub public_key: Option<String>,
    pub script_pub_key: Option<String>,
}

/// `send` / `speeduptransaction` / `canceltransaction` result.
/// Speed-up and cancel may omit the txid.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInfo {
    pub txid: Option<String>,
    pub tx: String,
}

/// `broadcast` result.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastInfo {
    pub txid: String,
}

/// One entry from `gethistory`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub datetime: DateTime<Utc>,
    pub height: Option<u64>,
    pub amount: i64,
    pub label: Option<String>,
    pub tx: String,
    #[serde(rename = "islikelycoinjoin", default)]
    pub is_likely_coinjoin: bool,
}

/// One key from `listkeys`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KeyInfo {
    pub full_key_path: Option<String>,
    pub internal: Option<bool>,
    pub key_state: Option<i32>,
    pub label: Option<String>,
    pub script_pub_key: Option<String>,
    pub pubkey: Option<String>,
    pub pub_key_hash: Option<String>,
    pub address: Option<String>,
}

/// `getfeerates` result: confirmation target (blocks) → sat/vB.
/// Keys arrive as strings on the wire; kept sorted for display.
pub type FeeRates = BTreeMap<String, u64>;
