//! # Application State
//!
//! Core business state for sabi. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── dispatcher: Arc<dyn RpcDispatcher>  // transport boundary
//! ├── nav: NavigationStack                // what the user sees
//! ├── batch: BatchCoordinator             // immediate vs batching
//! ├── endpoint: String                    // daemon base URI
//! ├── wallets / selected                  // wallet roster
//! ├── input: OperationInput               // fields commands read
//! ├── status_message: String              // status bar text
//! └── in_flight: usize                    // outstanding dispatches
//! ```
//!
//! The navigation stack and batch queue are owned here and mutated only
//! from the UI-driven control flow; commands hold references, never
//! ownership.

use std::sync::Arc;

use crate::core::batch::BatchCoordinator;
use crate::core::command::{OperationInput, RpcOp};
use crate::core::config::ResolvedConfig;
use crate::core::nav::NavigationStack;
use crate::rpc::{Job, RpcDispatcher};

pub struct App {
    pub dispatcher: Arc<dyn RpcDispatcher>,
    pub nav: NavigationStack,
    pub batch: BatchCoordinator,
    pub endpoint: String,
    pub wallets: Vec<String>,
    pub selected: usize,
    pub input: OperationInput,
    pub status_message: String,
    pub in_flight: usize,
}

impl App {
    pub fn new(dispatcher: Arc<dyn RpcDispatcher>, config: &ResolvedConfig) -> Self {
        Self {
            dispatcher,
            nav: NavigationStack::new(),
            batch: BatchCoordinator::new(),
            endpoint: config.endpoint.clone(),
            wallets: vec![config.wallet.clone()],
            selected: 0,
            input: OperationInput::default(),
            status_message: String::from("Welcome to sabi!"),
            in_flight: 0,
        }
    }

    /// The selected wallet's name, or "" when the roster is empty.
    pub fn selected_wallet(&self) -> &str {
        self.wallets
            .get(self.selected)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn add_wallet(&mut self) {
        self.wallets.push(String::from("Wallet"));
        self.selected = self.wallets.len() - 1;
    }

    pub fn remove_wallet(&mut self) {
        if self.wallets.is_empty() {
            return;
        }
        self.wallets.remove(self.selected);
        self.selected = self.selected.min(self.wallets.len().saturating_sub(1));
    }

    /// Rename the selected roster entry (the wallet form field edits this).
    pub fn rename_selected_wallet(&mut self, name: String) {
        if let Some(slot) = self.wallets.get_mut(self.selected) {
            *slot = name;
        }
    }

    pub fn select_prev_wallet(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next_wallet(&mut self) {
        if !self.wallets.is_empty() {
            self.selected = (self.selected + 1).min(self.wallets.len() - 1);
        }
    }

    pub fn can_execute(&self, op: RpcOp) -> bool {
        op.can_execute(self.selected_wallet(), &self.input)
    }

    pub fn create_job(&self, op: RpcOp) -> Job {
        op.create_job(self.selected_wallet(), &self.input, &self.endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::command::RpcOp;
    use crate::core::nav::Dialog;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to sabi!");
        assert_eq!(app.wallets, vec!["Wallet 1".to_string()]);
        assert_eq!(app.selected_wallet(), "Wallet 1");
        assert_eq!(app.nav.current(), Some(&Dialog::WalletSelect));
        assert_eq!(app.in_flight, 0);
    }

    #[test]
    fn test_wallet_roster() {
        let mut app = test_app();
        app.add_wallet();
        assert_eq!(app.wallets.len(), 2);
        assert_eq!(app.selected, 1);

        app.rename_selected_wallet("Cold Storage".to_string());
        assert_eq!(app.selected_wallet(), "Cold Storage");

        app.select_prev_wallet();
        assert_eq!(app.selected_wallet(), "Wallet 1");

        app.remove_wallet();
        assert_eq!(app.wallets, vec!["Cold Storage".to_string()]);
        assert_eq!(app.selected_wallet(), "Cold Storage");

        app.remove_wallet();
        assert_eq!(app.selected_wallet(), "");
        // Removing from an empty roster stays a no-op.
        app.remove_wallet();
    }

    #[test]
    fn test_enablement_tracks_input_edits() {
        let mut app = test_app();
        assert!(!app.can_execute(RpcOp::GetNewAddress));
        app.input.label = "Label".to_string();
        assert!(app.can_execute(RpcOp::GetNewAddress));
        app.input.label.clear();
        assert!(!app.can_execute(RpcOp::GetNewAddress));
    }

    #[test]
    fn test_job_built_against_selected_wallet() {
        let mut app = test_app();
        app.rename_selected_wallet("Wallet 2".to_string());
        let job = app.create_job(RpcOp::ListCoins);
        assert!(job.endpoint.ends_with("/Wallet 2"));
    }
}
