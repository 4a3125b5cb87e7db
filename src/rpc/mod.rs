pub mod client;
pub mod types;

pub use client::{HttpDispatcher, RpcDispatcher, execute_as};
pub use types::{
    AccountInfo, AddressInfo, BroadcastInfo, CoinInfo, FeeRates, HistoryEntry, Job, KeyInfo,
    Outcome, PeerInfo, RpcError, RpcRequest, RpcResponse, StatusInfo, TransactionInfo, WalletInfo,
};
