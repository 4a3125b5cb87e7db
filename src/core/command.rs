//! # Operation Commands
//!
//! The 19 remote operations as one value-level catalog. Each variant knows
//! its wire method name, whether it is wallet-scoped, which input fields it
//! needs, how to build its [`Job`], and how a success maps onto the
//! navigation stack. The three-way outcome handling lives in exactly one
//! place ([`reduce`]); per-operation code only supplies the success mapping.
//!
//! ```text
//! input state ──► create_job ──► Job ──► dispatcher ──► Outcome ──► NavAction
//! ```

use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::core::nav::{Dialog, ErrorInfo, NavAction};
use crate::rpc::{
    AddressInfo, BroadcastInfo, CoinInfo, FeeRates, HistoryEntry, Job, KeyInfo, Outcome,
    RpcDispatcher, StatusInfo, TransactionInfo, WalletInfo, execute_as,
};

/// Free-form fields the operations read. Editing any of them re-evaluates
/// `can_execute`, so enablement always tracks the current text.
#[derive(Clone, Debug, Default)]
pub struct OperationInput {
    pub label: String,
    pub password: String,
    pub mnemonic: String,
    pub address: String,
    /// Satoshis, as typed. Parsed at job build; the daemon rejects nonsense.
    pub amount: String,
    pub txid: String,
    pub raw_tx: String,
    /// Confirmation target in blocks. Empty means the default target.
    pub fee_target: String,
}

const DEFAULT_FEE_TARGET: u32 = 2;

/// One remote operation. `ALL` is the palette order the UI presents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RpcOp {
    GetStatus,
    CreateWallet,
    RecoverWallet,
    LoadWallet,
    ListCoins,
    ListUnspentCoins,
    GetWalletInfo,
    GetNewAddress,
    Send,
    SpeedUpTransaction,
    CancelTransaction,
    Build,
    Broadcast,
    GetHistory,
    ListKeys,
    StartCoinJoin,
    StopCoinJoin,
    GetFeeRates,
    Stop,
}

pub const ALL: [RpcOp; 19] = [
    RpcOp::GetStatus,
    RpcOp::CreateWallet,
    RpcOp::RecoverWallet,
    RpcOp::LoadWallet,
    RpcOp::ListCoins,
    RpcOp::ListUnspentCoins,
    RpcOp::GetWalletInfo,
    RpcOp::GetNewAddress,
    RpcOp::Send,
    RpcOp::SpeedUpTransaction,
    RpcOp::CancelTransaction,
    RpcOp::Build,
    RpcOp::Broadcast,
    RpcOp::GetHistory,
    RpcOp::ListKeys,
    RpcOp::StartCoinJoin,
    RpcOp::StopCoinJoin,
    RpcOp::GetFeeRates,
    RpcOp::Stop,
];

impl RpcOp {
    /// The daemon's method name.
    pub fn method(&self) -> &'static str {
        match self {
            RpcOp::GetStatus => "getstatus",
            RpcOp::CreateWallet => "createwallet",
            RpcOp::RecoverWallet => "recoverwallet",
            RpcOp::LoadWallet => "loadwallet",
            RpcOp::ListCoins => "listcoins",
            RpcOp::ListUnspentCoins => "listunspentcoins",
            RpcOp::GetWalletInfo => "getwalletinfo",
            RpcOp::GetNewAddress => "getnewaddress",
            RpcOp::Send => "send",
            RpcOp::SpeedUpTransaction => "speeduptransaction",
            RpcOp::CancelTransaction => "canceltransaction",
            RpcOp::Build => "build",
            RpcOp::Broadcast => "broadcast",
            RpcOp::GetHistory => "gethistory",
            RpcOp::ListKeys => "listkeys",
            RpcOp::StartCoinJoin => "startcoinjoin",
            RpcOp::StopCoinJoin => "stopcoinjoin",
            RpcOp::GetFeeRates => "getfeerates",
            RpcOp::Stop => "stop",
        }
    }

    /// Display name for the method palette.
    pub fn label(&self) -> &'static str {
        match self {
            RpcOp::GetStatus => "GetStatus",
            RpcOp::CreateWallet => "CreateWallet",
            RpcOp::RecoverWallet => "RecoverWallet",
            RpcOp::LoadWallet => "LoadWallet",
            RpcOp::ListCoins => "ListCoins",
            RpcOp::ListUnspentCoins => "ListUnspentCoins",
            RpcOp::GetWalletInfo => "GetWalletInfo",
            RpcOp::GetNewAddress => "GetNewAddress",
            RpcOp::Send => "Send",
            RpcOp::SpeedUpTransaction => "SpeedUpTransaction",
            RpcOp::CancelTransaction => "CancelTransaction",
            RpcOp::Build => "Build",
            RpcOp::Broadcast => "Broadcast",
            RpcOp::GetHistory => "GetHistory",
            RpcOp::ListKeys => "ListKeys",
            RpcOp::StartCoinJoin => "StartCoinJoin",
            RpcOp::StopCoinJoin => "StopCoinJoin",
            RpcOp::GetFeeRates => "GetFeeRates",
            RpcOp::Stop => "Stop",
        }
    }

    /// Wallet-scoped operations POST to `{base}/{wallet}`; the rest to `{base}`.
    pub fn wallet_scoped(&self) -> bool {
        matches!(
            self,
            RpcOp::ListCoins
                | RpcOp::ListUnspentCoins
                | RpcOp::GetWalletInfo
                | RpcOp::GetNewAddress
                | RpcOp::Send
                | RpcOp::SpeedUpTransaction
                | RpcOp::CancelTransaction
                | RpcOp::Build
                | RpcOp::Broadcast
                | RpcOp::GetHistory
                | RpcOp::ListKeys
                | RpcOp::StartCoinJoin
                | RpcOp::StopCoinJoin
        )
    }

    /// False iff a required input field is empty. This gates the palette
    /// entry; it is not a validity check: a well-formed job is built from
    /// whatever the fields hold, and the daemon is the authority.
    pub fn can_execute(&self, wallet: &str, input: &OperationInput) -> bool {
        let wallet_set = !wallet.is_empty();
        match self {
            RpcOp::GetStatus | RpcOp::GetFeeRates | RpcOp::Stop => true,
            RpcOp::CreateWallet => wallet_set && !input.password.is_empty(),
            RpcOp::RecoverWallet => {
                wallet_set && !input.mnemonic.is_empty() && !input.password.is_empty()
            }
            RpcOp::LoadWallet
            | RpcOp::ListCoins
            | RpcOp::ListUnspentCoins
            | RpcOp::GetWalletInfo
            | RpcOp::GetHistory
            | RpcOp::ListKeys
            | RpcOp::StopCoinJoin => wallet_set,
            RpcOp::GetNewAddress => wallet_set && !input.label.is_empty(),
            RpcOp::Send | RpcOp::Build => {
                wallet_set
                    && !input.address.is_empty()
                    && !input.amount.is_empty()
                    && !input.password.is_empty()
            }
            RpcOp::SpeedUpTransaction | RpcOp::CancelTransaction => {
                wallet_set && !input.txid.is_empty()
            }
            RpcOp::Broadcast => wallet_set && !input.raw_tx.is_empty(),
            RpcOp::StartCoinJoin => wallet_set && !input.password.is_empty(),
        }
    }

    /// Build the job: fixed method name, ordered params from the input
    /// fields, endpoint per scope. Total: never fails.
    pub fn create_job(&self, wallet: &str, input: &OperationInput, base: &str) -> Job {
        let params = match self {
            RpcOp::CreateWallet => vec![json!(wallet), json!(input.password)],
            RpcOp::RecoverWallet => {
                vec![json!(wallet), json!(input.mnemonic), json!(input.password)]
            }
            RpcOp::LoadWallet => vec![json!(wallet)],
            RpcOp::GetNewAddress => vec![json!(input.label)],
            RpcOp::Send | RpcOp::Build => vec![
                json!(input.address),
                json!(input.amount.trim().parse::<u64>().unwrap_or(0)),
                json!(
                    input
                        .fee_target
                        .trim()
                        .parse::<u32>()
                        .unwrap_or(DEFAULT_FEE_TARGET)
                ),
                json!(input.password),
            ],
            RpcOp::SpeedUpTransaction | RpcOp::CancelTransaction => vec![json!(input.txid)],
            RpcOp::Broadcast => vec![json!(input.raw_tx)],
            RpcOp::StartCoinJoin => vec![json!(input.password), json!(true), json!(true)],
            RpcOp::GetStatus
            | RpcOp::ListCoins
            | RpcOp::ListUnspentCoins
            | RpcOp::GetWalletInfo
            | RpcOp::GetHistory
            | RpcOp::ListKeys
            | RpcOp::StopCoinJoin
            | RpcOp::GetFeeRates
            | RpcOp::Stop => vec![],
        };

        let endpoint = if self.wallet_scoped() {
            format!("{base}/{wallet}")
        } else {
            base.to_string()
        };

        Job::new(self.method(), params, endpoint)
    }

    /// Execute the job and translate the outcome into a navigation action.
    ///
    /// `wallet` is the name the job was built against, used by the fixed
    /// success templates.
    pub async fn dispatch(
        &self,
        dispatcher: &dyn RpcDispatcher,
        job: &Job,
        wallet: &str,
    ) -> NavAction {
        match self {
            RpcOp::GetStatus => {
                reduce(dispatcher, job, |v: StatusInfo| {
                    NavAction::Push(Dialog::Status(v))
                })
                .await
            }
            RpcOp::CreateWallet => {
                reduce(dispatcher, job, |mnemonic: String| {
                    NavAction::Push(Dialog::WalletCreated(mnemonic))
                })
                .await
            }
            RpcOp::RecoverWallet => {
                let message = format!("Recovered wallet {wallet}");
                reduce(dispatcher, job, move |_: Value| {
                    NavAction::Push(Dialog::Success { message })
                })
                .await
            }
            RpcOp::LoadWallet => {
                let message = format!("Loaded wallet {wallet}");
                reduce(dispatcher, job, move |_: Value| {
                    NavAction::Push(Dialog::Success { message })
                })
                .await
            }
            RpcOp::ListCoins => {
                reduce(dispatcher, job, |v: Vec<CoinInfo>| {
                    NavAction::Push(Dialog::Coins(v))
                })
                .await
            }
            RpcOp::ListUnspentCoins => {
                reduce(dispatcher, job, |v: Vec<CoinInfo>| {
                    NavAction::Push(Dialog::UnspentCoins(v))
                })
                .await
            }
            RpcOp::GetWalletInfo => {
                reduce(dispatcher, job, |v: WalletInfo| {
                    NavAction::Push(Dialog::WalletInfo(v))
                })
                .await
            }
            // A fresh address replaces the whole context rather than
            // stacking on top of it.
            RpcOp::GetNewAddress => {
                reduce(dispatcher, job, |v: AddressInfo| {
                    NavAction::Replace(Dialog::Address(v))
                })
                .await
            }
            RpcOp::Send => {
                reduce(dispatcher, job, |v: TransactionInfo| {
                    NavAction::Push(Dialog::Transaction(v))
                })
                .await
            }
            RpcOp::SpeedUpTransaction | RpcOp::CancelTransaction => {
                reduce(dispatcher, job, |v: TransactionInfo| {
                    NavAction::Push(Dialog::Transaction(v))
                })
                .await
            }
            RpcOp::Build => {
                reduce(dispatcher, job, |v: String| {
                    NavAction::Push(Dialog::BuiltTransaction(v))
                })
                .await
            }
            RpcOp::Broadcast => {
                reduce(dispatcher, job, |v: BroadcastInfo| {
                    NavAction::Push(Dialog::Broadcasted(v))
                })
                .await
            }
            RpcOp::GetHistory => {
                reduce(dispatcher, job, |v: Vec<HistoryEntry>| {
                    NavAction::Push(Dialog::History(v))
                })
                .await
            }
            RpcOp::ListKeys => {
                reduce(dispatcher, job, |v: Vec<KeyInfo>| {
                    NavAction::Push(Dialog::Keys(v))
                })
                .await
            }
            RpcOp::StartCoinJoin => {
                let message = format!("Started coinjoin for wallet {wallet}");
                reduce(dispatcher, job, move |_: Value| {
                    NavAction::Push(Dialog::Success { message })
                })
                .await
            }
            RpcOp::StopCoinJoin => {
                let message = format!("Stopped coinjoin for wallet {wallet}");
                reduce(dispatcher, job, move |_: Value| {
                    NavAction::Push(Dialog::Success { message })
                })
                .await
            }
            RpcOp::GetFeeRates => {
                reduce(dispatcher, job, |v: FeeRates| {
                    NavAction::Push(Dialog::FeeRates(v))
                })
                .await
            }
            // Fixed template regardless of what the daemon sends back.
            RpcOp::Stop => {
                reduce(dispatcher, job, |_: Value| {
                    NavAction::Push(Dialog::Success {
                        message: "Stopped daemon.".to_string(),
                    })
                })
                .await
            }
        }
    }
}

/// The shared three-way reducer: success goes through the operation's
/// mapping, both error kinds become a pushed error record.
async fn reduce<T, F>(dispatcher: &dyn RpcDispatcher, job: &Job, on_success: F) -> NavAction
where
    T: DeserializeOwned,
    F: FnOnce(T) -> NavAction,
{
    match execute_as::<T>(dispatcher, job).await {
        Outcome::Success(value) => on_success(value),
        Outcome::Rpc(err) => NavAction::Push(Dialog::Error(err.into())),
        Outcome::Transport(message) => {
            NavAction::Push(Dialog::Error(ErrorInfo::transport(message)))
        }
    }
}
