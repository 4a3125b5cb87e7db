//! # RPC Dispatcher
//!
//! The transport boundary. One trait method: send a [`Job`], get an
//! [`Outcome`]. Nothing escapes this layer as a panic or an `Err`: every
//! failure mode collapses into `Outcome::Transport`. No retries here;
//! the caller decides whether to re-invoke.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;

use super::types::{Job, Outcome, RpcRequest, RpcResponse};

#[async_trait]
pub trait RpcDispatcher: Send + Sync {
    /// Send one job and classify the response.
    ///
    /// Returns the raw JSON result; use [`execute_as`] to apply an
    /// operation's result shape.
    async fn dispatch(&self, job: &Job) -> Outcome<serde_json::Value>;
}

/// Deserialize a dispatch result into the operation's result shape.
///
/// A success value that does not match `T` is a transport outcome: the
/// response could not be understood, and must not be silently dropped.
pub async fn execute_as<T: DeserializeOwned>(
    dispatcher: &dyn RpcDispatcher,
    job: &Job,
) -> Outcome<T> {
    match dispatcher.dispatch(job).await {
        Outcome::Success(value) => match serde_json::from_value(value) {
            Ok(typed) => Outcome::Success(typed),
            Err(e) => Outcome::Transport(format!("unexpected result shape: {e}")),
        },
        Outcome::Rpc(err) => Outcome::Rpc(err),
        Outcome::Transport(msg) => Outcome::Transport(msg),
    }
}

/// Dispatcher backed by reqwest, speaking JSON-RPC 2.0 over HTTP POST.
///
/// The daemon reports application errors inside a 200 body; a non-2xx
/// status without a parseable body is a transport failure.
pub struct HttpDispatcher {
    http: reqwest::Client,
    credentials: Option<(String, String)>,
    next_id: AtomicU64,
}

impl HttpDispatcher {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            credentials: None,
            next_id: AtomicU64::new(1),
        }
    }

    /// HTTP basic auth, for daemons configured with JSON-RPC credentials.
    pub fn with_credentials(user: String, password: String) -> Self {
        let mut dispatcher = Self::new();
        dispatcher.credentials = Some((user, password));
        dispatcher
    }
}

impl Default for HttpDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RpcDispatcher for HttpDispatcher {
    async fn dispatch(&self, job: &Job) -> Outcome<serde_json::Value> {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            method: job.method.clone(),
            params: job.params.clone(),
        };
        debug!("dispatching {} to {}", job.method, job.endpoint);

        let mut req = self.http.post(&job.endpoint).json(&request);
        if let Some((user, password)) = &self.credentials {
            req = req.basic_auth(user, Some(password));
        }

        let response = match req.send().await {
            Ok(r) => r,
            Err(e) => return Outcome::Transport(format!("request failed: {e}")),
        };

        let status = response.status();
        let body = match response.bytes().await {
            Ok(b) => b,
            Err(e) => return Outcome::Transport(format!("failed to read response: {e}")),
        };

        match serde_json::from_slice::<RpcResponse>(&body) {
            Ok(RpcResponse {
                error: Some(err), ..
            }) => Outcome::Rpc(err),
            Ok(RpcResponse { result, .. }) if status.is_success() => {
                Outcome::Success(result.unwrap_or(serde_json::Value::Null))
            }
            // Parsed, no error object, non-2xx status: nothing to trust.
            Ok(_) => Outcome::Transport(format!("HTTP {status}")),
            Err(_) if !status.is_success() => Outcome::Transport(format!("HTTP {status}")),
            Err(e) => Outcome::Transport(format!("malformed response: {e}")),
        }
    }
}
