//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::rpc::{Job, Outcome, RpcDispatcher};

/// A dispatcher that replays scripted outcomes in order and records every
/// job it is handed. Calls beyond the script get a transport outcome.
pub struct ScriptedDispatcher {
    outcomes: Mutex<VecDeque<Outcome<serde_json::Value>>>,
    jobs: Mutex<Vec<Job>>,
}

impl ScriptedDispatcher {
    pub fn returning(outcomes: Vec<Outcome<serde_json::Value>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            jobs: Mutex::new(Vec::new()),
        }
    }

    /// Every job dispatched so far, in order.
    pub fn jobs(&self) -> Vec<Job> {
        self.jobs.lock().unwrap().clone()
    }
}

#[async_trait]
impl RpcDispatcher for ScriptedDispatcher {
    async fn dispatch(&self, job: &Job) -> Outcome<serde_json::Value> {
        self.jobs.lock().unwrap().push(job.clone());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Outcome::Transport("script exhausted".to_string()))
    }
}

/// Creates a test App with an empty ScriptedDispatcher.
pub fn test_app() -> App {
    let config = ResolvedConfig {
        endpoint: "http://127.0.0.1:37128".to_string(),
        wallet: "Wallet 1".to_string(),
        rpc_user: None,
        rpc_password: None,
    };
    App::new(Arc::new(ScriptedDispatcher::returning(Vec::new())), &config)
}
