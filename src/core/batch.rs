//! # Batch Coordinator
//!
//! The alternate execution mode. While batching, operations enqueue their
//! job instead of sending it; a later flush sends everything in enqueue
//! order. Each job resolves independently (one failure never skips the
//! jobs behind it) and the queue is cleared once a flush completes so
//! nothing is resubmitted.
//!
//! The flush is split into `begin_flush` / [`run_flush`] / `end_flush` so
//! the UI can drain the queue synchronously, run the sequential dispatch on
//! a background task, and close the flush when the results come back. The
//! async [`BatchCoordinator::flush`] composes the three for direct callers.

use log::{debug, warn};

use crate::core::command::RpcOp;
use crate::core::nav::NavAction;
use crate::rpc::{Job, RpcDispatcher};

/// A job waiting for the next flush, with enough context to apply the
/// operation's outcome mapping when it finally runs.
#[derive(Clone, Debug)]
pub struct PendingCall {
    pub op: RpcOp,
    pub job: Job,
    pub wallet: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BatchMode {
    #[default]
    Immediate,
    Batching,
}

pub struct BatchCoordinator {
    mode: BatchMode,
    queue: Vec<PendingCall>,
    flushing: bool,
}

impl BatchCoordinator {
    pub fn new() -> Self {
        Self {
            mode: BatchMode::Immediate,
            queue: Vec::new(),
            flushing: false,
        }
    }

    pub fn mode(&self) -> BatchMode {
        self.mode
    }

    pub fn is_batching(&self) -> bool {
        self.mode == BatchMode::Batching
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Switch modes. Ignored while a flush is in progress. Leaving
    /// `Batching` with jobs still queued discards them.
    pub fn set_mode(&mut self, mode: BatchMode) {
        if self.flushing {
            debug!("ignoring mode change during flush");
            return;
        }
        if self.mode == BatchMode::Batching && mode == BatchMode::Immediate && !self.queue.is_empty()
        {
            warn!("leaving batch mode discards {} queued job(s)", self.queue.len());
            self.queue.clear();
        }
        self.mode = mode;
    }

    /// Append a call to the queue. Returns false (and drops the call) when
    /// not in batching mode; the caller should have dispatched instead.
    pub fn enqueue(&mut self, call: PendingCall) -> bool {
        if !self.is_batching() {
            warn!("enqueue of {} outside batching mode", call.job.method);
            return false;
        }
        debug!("queued {} ({} pending)", call.job.method, self.queue.len() + 1);
        self.queue.push(call);
        true
    }

    /// Drain the queue and mark the flush as in progress. `None` when not
    /// batching or when a flush is already running; callers that get a
    /// queue (even an empty one) own the flush and must `end_flush`.
    pub fn begin_flush(&mut self) -> Option<Vec<PendingCall>> {
        if !self.is_batching() || self.flushing {
            return None;
        }
        self.flushing = true;
        Some(std::mem::take(&mut self.queue))
    }

    pub fn end_flush(&mut self) {
        self.flushing = false;
    }

    /// Execute every queued job and return the navigation actions in
    /// enqueue order.
    pub async fn flush(&mut self, dispatcher: &dyn RpcDispatcher) -> Vec<NavAction> {
        let Some(calls) = self.begin_flush() else {
            return Vec::new();
        };
        let actions = run_flush(calls, dispatcher).await;
        self.end_flush();
        actions
    }
}

impl Default for BatchCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

/// Sequential dispatch of a drained queue. One action per call, in order;
/// a failed call contributes its error record and the next call still runs.
pub async fn run_flush(calls: Vec<PendingCall>, dispatcher: &dyn RpcDispatcher) -> Vec<NavAction> {
    let mut actions = Vec::with_capacity(calls.len());
    for call in &calls {
        let action = call.op.dispatch(dispatcher, &call.job, &call.wallet).await;
        actions.push(action);
    }
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::core::command::{OperationInput, RpcOp};
    use crate::core::nav::{Dialog, NavigationStack};
    use crate::rpc::Outcome;
    use crate::test_support::ScriptedDispatcher;

    const BASE: &str = "http://127.0.0.1:37128";

    fn pending(op: RpcOp) -> PendingCall {
        let input = OperationInput::default();
        PendingCall {
            op,
            job: op.create_job("Wallet 1", &input, BASE),
            wallet: "Wallet 1".to_string(),
        }
    }

    #[test]
    fn test_enqueue_requires_batching_mode() {
        let mut batch = BatchCoordinator::new();
        assert!(!batch.enqueue(pending(RpcOp::GetStatus)));
        assert_eq!(batch.pending(), 0);

        batch.set_mode(BatchMode::Batching);
        assert!(batch.enqueue(pending(RpcOp::GetStatus)));
        assert_eq!(batch.pending(), 1);
    }

    #[test]
    fn test_enqueue_does_not_navigate() {
        let mut batch = BatchCoordinator::new();
        batch.set_mode(BatchMode::Batching);
        let nav = NavigationStack::new();
        let depth = nav.depth();
        batch.enqueue(pending(RpcOp::LoadWallet));
        batch.enqueue(pending(RpcOp::ListCoins));
        // Nothing touched the stack; the jobs are just queued.
        assert_eq!(nav.depth(), depth);
        assert_eq!(batch.pending(), 2);
    }

    #[test]
    fn test_leaving_batch_mode_discards_queue() {
        let mut batch = BatchCoordinator::new();
        batch.set_mode(BatchMode::Batching);
        batch.enqueue(pending(RpcOp::GetStatus));
        batch.set_mode(BatchMode::Immediate);
        assert_eq!(batch.pending(), 0);

        // Re-entering batching starts from an empty queue.
        batch.set_mode(BatchMode::Batching);
        assert_eq!(batch.pending(), 0);
    }

    #[test]
    fn test_mode_toggle_ignored_during_flush() {
        let mut batch = BatchCoordinator::new();
        batch.set_mode(BatchMode::Batching);
        batch.enqueue(pending(RpcOp::GetStatus));

        let drained = batch.begin_flush().unwrap();
        assert_eq!(drained.len(), 1);

        batch.set_mode(BatchMode::Immediate);
        assert_eq!(batch.mode(), BatchMode::Batching);

        batch.end_flush();
        batch.set_mode(BatchMode::Immediate);
        assert_eq!(batch.mode(), BatchMode::Immediate);
    }

    #[test]
    fn test_begin_flush_is_not_reentrant() {
        let mut batch = BatchCoordinator::new();
        batch.set_mode(BatchMode::Batching);
        batch.enqueue(pending(RpcOp::GetStatus));

        let first = batch.begin_flush().unwrap();
        assert_eq!(first.len(), 1);

        batch.enqueue(pending(RpcOp::ListCoins));
        assert!(batch.begin_flush().is_none());
    }

    #[tokio::test]
    async fn test_flush_reports_all_outcomes_in_order() {
        // Job 2 of 3 fails; 1 and 3 must still run and report in order.
        let dispatcher = ScriptedDispatcher::returning(vec![
            Outcome::Success(serde_json::Value::Null),
            Outcome::Transport("connection reset".to_string()),
            Outcome::Success(json!([])),
        ]);

        let mut batch = BatchCoordinator::new();
        batch.set_mode(BatchMode::Batching);
        batch.enqueue(pending(RpcOp::LoadWallet));
        batch.enqueue(pending(RpcOp::StopCoinJoin));
        batch.enqueue(pending(RpcOp::ListCoins));

        let actions = batch.flush(&dispatcher).await;
        assert_eq!(actions.len(), 3);
        assert!(matches!(
            &actions[0],
            crate::core::nav::NavAction::Push(Dialog::Success { message })
                if message == "Loaded wallet Wallet 1"
        ));
        assert!(matches!(
            &actions[1],
            crate::core::nav::NavAction::Push(Dialog::Error(info))
                if info.message.contains("connection reset")
        ));
        assert!(matches!(
            &actions[2],
            crate::core::nav::NavAction::Push(Dialog::Coins(coins)) if coins.is_empty()
        ));

        // Jobs went out in enqueue order.
        let methods: Vec<String> = dispatcher
            .jobs()
            .iter()
            .map(|job| job.method.clone())
            .collect();
        assert_eq!(methods, vec!["loadwallet", "stopcoinjoin", "listcoins"]);

        // Queue cleared even though one job failed.
        assert_eq!(batch.pending(), 0);
        assert_eq!(batch.mode(), BatchMode::Batching);
    }

    #[tokio::test]
    async fn test_flush_in_immediate_mode_is_noop() {
        let dispatcher = ScriptedDispatcher::returning(vec![]);
        let mut batch = BatchCoordinator::new();
        let actions = batch.flush(&dispatcher).await;
        assert!(actions.is_empty());
        assert!(dispatcher.jobs().is_empty());
    }
}
