//! # Navigation Stack
//!
//! A LIFO of presentable items drives what the user currently sees: the top
//! is the current dialog, `Back` pops, and every operation outcome lands
//! here as a push (or a clear-then-push for context switches).
//!
//! ```text
//! op outcome ──► NavAction ──► NavigationStack ──► current() ──► render
//! ```
//!
//! The stack is owned by the app state and mutated only through
//! `navigate`/`back`/`clear`. It starts with the wallet-selection context
//! and lives for the process.

use crate::rpc::{
    AddressInfo, BroadcastInfo, CoinInfo, FeeRates, HistoryEntry, KeyInfo, RpcError, StatusInfo,
    TransactionInfo, WalletInfo,
};

/// An error record as presented to the user. Application and transport
/// errors render identically; only application errors carry a code.
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorInfo {
    pub code: Option<i64>,
    pub message: String,
}

impl ErrorInfo {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }
}

impl From<RpcError> for ErrorInfo {
    fn from(err: RpcError) -> Self {
        Self {
            code: Some(err.code),
            message: err.message,
        }
    }
}

/// Everything that can be the current view.
#[derive(Clone, Debug, PartialEq)]
pub enum Dialog {
    /// The initial context: pick a wallet, pick a method.
    WalletSelect,
    Status(StatusInfo),
    /// `createwallet` returns the fresh recovery mnemonic.
    WalletCreated(String),
    Coins(Vec<CoinInfo>),
    UnspentCoins(Vec<CoinInfo>),
    WalletInfo(WalletInfo),
    Address(AddressInfo),
    Transaction(TransactionInfo),
    /// `build` returns the raw transaction hex without broadcasting it.
    BuiltTransaction(String),
    Broadcasted(BroadcastInfo),
    History(Vec<HistoryEntry>),
    Keys(Vec<KeyInfo>),
    FeeRates(FeeRates),
    Success { message: String },
    Error(ErrorInfo),
}

/// What an operation outcome asks the stack to do.
#[derive(Clone, Debug, PartialEq)]
pub enum NavAction {
    Push(Dialog),
    /// Clear the stack first: the new dialog replaces the whole context.
    Replace(Dialog),
}

impl NavAction {
    pub fn apply(self, nav: &mut NavigationStack) {
        match self {
            NavAction::Push(dialog) => nav.navigate(Some(dialog)),
            NavAction::Replace(dialog) => {
                nav.clear();
                nav.navigate(Some(dialog));
            }
        }
    }
}

/// The LIFO view history. Never indexed or spliced; push, pop, clear only.
pub struct NavigationStack {
    dialogs: Vec<Dialog>,
}

impl NavigationStack {
    /// A fresh stack already holds the wallet-selection context.
    pub fn new() -> Self {
        Self {
            dialogs: vec![Dialog::WalletSelect],
        }
    }

    /// The top of the stack, or `None` when empty.
    pub fn current(&self) -> Option<&Dialog> {
        self.dialogs.last()
    }

    pub fn depth(&self) -> usize {
        self.dialogs.len()
    }

    /// The single entry point operations use: `None` clears, `Some` pushes.
    pub fn navigate(&mut self, dialog: Option<Dialog>) {
        match dialog {
            None => self.dialogs.clear(),
            Some(dialog) => self.dialogs.push(dialog),
        }
    }

    /// Pop the current dialog. A no-op on an empty stack.
    pub fn back(&mut self) {
        self.dialogs.pop();
    }

    pub fn clear(&mut self) {
        self.dialogs.clear();
    }
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn success(message: &str) -> Dialog {
        Dialog::Success {
            message: message.to_string(),
        }
    }

    #[test]
    fn test_starts_with_wallet_selection() {
        let nav = NavigationStack::new();
        assert_eq!(nav.current(), Some(&Dialog::WalletSelect));
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_navigate_then_back_restores_previous() {
        let mut nav = NavigationStack::new();
        nav.navigate(Some(success("one")));
        nav.navigate(Some(success("two")));
        assert_eq!(nav.current(), Some(&success("two")));

        nav.back();
        assert_eq!(nav.current(), Some(&success("one")));
    }

    #[test]
    fn test_navigate_onto_empty_then_back_leaves_absent() {
        let mut nav = NavigationStack::new();
        nav.clear();
        nav.navigate(Some(success("only")));
        nav.back();
        assert_eq!(nav.current(), None);
    }

    #[test]
    fn test_navigate_none_clears() {
        let mut nav = NavigationStack::new();
        nav.navigate(Some(success("one")));
        nav.navigate(None);
        assert_eq!(nav.current(), None);
        assert_eq!(nav.depth(), 0);
    }

    #[test]
    fn test_back_on_empty_is_noop() {
        let mut nav = NavigationStack::new();
        nav.clear();
        nav.back();
        assert_eq!(nav.current(), None);
    }

    #[test]
    fn test_clear_then_back_is_noop() {
        let mut nav = NavigationStack::new();
        nav.navigate(Some(success("one")));
        nav.clear();
        nav.back();
        assert_eq!(nav.current(), None);
        assert_eq!(nav.depth(), 0);
    }

    #[test]
    fn test_replace_clears_then_pushes() {
        let mut nav = NavigationStack::new();
        nav.navigate(Some(success("one")));
        NavAction::Replace(success("fresh")).apply(&mut nav);
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.current(), Some(&success("fresh")));
    }

    #[test]
    fn test_error_info_from_rpc_error_keeps_code() {
        let info: ErrorInfo = RpcError {
            code: -32601,
            message: "Method not found".to_string(),
        }
        .into();
        assert_eq!(info.code, Some(-32601));

        let transport = ErrorInfo::transport("timeout");
        assert_eq!(transport.code, None);
    }
}
