use sabi::core::command::{OperationInput, RpcOp};
use sabi::core::nav::{Dialog, NavAction};
use sabi::rpc::{CoinInfo, HttpDispatcher, Job, Outcome, RpcDispatcher, StatusInfo, execute_as};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helper Functions
// ============================================================================

fn job(rpc_method: &str, endpoint: String) -> Job {
    Job::new(rpc_method, vec![], endpoint)
}

// ============================================================================
// Classification: the three-way outcome
// ============================================================================

#[tokio::test]
async fn test_success_result_decodes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(json!({
            "jsonrpc": "2.0",
            "method": "getstatus",
            "params": []
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": {"torStatus": "Running", "network": "Main"}
        })))
        .mount(&mock_server)
        .await;

    let dispatcher = HttpDispatcher::new();
    let outcome = execute_as::<StatusInfo>(&dispatcher, &job("getstatus", mock_server.uri())).await;

    match outcome {
        Outcome::Success(status) => {
            assert_eq!(status.tor_status.as_deref(), Some("Running"));
            assert_eq!(status.network.as_deref(), Some("Main"));
        }
        other => panic!("expected success, got {other:?}"),
    }
}

#[tokio::test]
async fn test_daemon_error_is_application_error() {
    let mock_server = MockServer::start().await;

    // The daemon reports application errors inside a 200 body.
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": {"code": -32601, "message": "Method not found"}
        })))
        .mount(&mock_server)
        .await;

    let dispatcher = HttpDispatcher::new();
    let outcome = dispatcher.dispatch(&job("bogus", mock_server.uri())).await;

    match outcome {
        Outcome::Rpc(err) => {
            assert_eq!(err.code, -32601);
            assert_eq!(err.message, "Method not found");
        }
        other => panic!("expected rpc error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&mock_server)
        .await;

    let dispatcher = HttpDispatcher::new();
    let outcome = dispatcher.dispatch(&job("getstatus", mock_server.uri())).await;

    match outcome {
        Outcome::Transport(message) => assert!(message.contains("malformed")),
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_2xx_without_body_is_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let dispatcher = HttpDispatcher::new();
    let outcome = dispatcher.dispatch(&job("getstatus", mock_server.uri())).await;

    match outcome {
        Outcome::Transport(message) => assert!(message.contains("500")),
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_2xx_with_error_body_is_application_error() {
    let mock_server = MockServer::start().await;

    // Some daemons pair the error object with a 4xx status; the structured
    // body wins over the status line.
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": {"code": -32602, "message": "Invalid params"}
        })))
        .mount(&mock_server)
        .await;

    let dispatcher = HttpDispatcher::new();
    let outcome = dispatcher.dispatch(&job("send", mock_server.uri())).await;

    match outcome {
        Outcome::Rpc(err) => assert_eq!(err.code, -32602),
        other => panic!("expected rpc error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_daemon_is_transport_error() {
    // Nothing listens here.
    let dispatcher = HttpDispatcher::new();
    let outcome = dispatcher
        .dispatch(&job("getstatus", "http://127.0.0.1:1".to_string()))
        .await;

    assert!(matches!(outcome, Outcome::Transport(_)));
}

#[tokio::test]
async fn test_shape_mismatch_is_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": "a bare string, not a coin list"
        })))
        .mount(&mock_server)
        .await;

    let dispatcher = HttpDispatcher::new();
    let outcome =
        execute_as::<Vec<CoinInfo>>(&dispatcher, &job("listcoins", mock_server.uri())).await;

    match outcome {
        Outcome::Transport(message) => assert!(message.contains("unexpected result shape")),
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_null_result_is_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": null
        })))
        .mount(&mock_server)
        .await;

    let dispatcher = HttpDispatcher::new();
    let outcome = dispatcher.dispatch(&job("loadwallet", mock_server.uri())).await;

    assert_eq!(outcome, Outcome::Success(serde_json::Value::Null));
}

// ============================================================================
// Auth and routing
// ============================================================================

#[tokio::test]
async fn test_basic_auth_header_sent() {
    let mock_server = MockServer::start().await;

    // "user:pass" base64-encoded
    Mock::given(method("POST"))
        .and(header("Authorization", "Basic dXNlcjpwYXNz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": null
        })))
        .mount(&mock_server)
        .await;

    let dispatcher = HttpDispatcher::with_credentials("user".to_string(), "pass".to_string());
    let outcome = dispatcher.dispatch(&job("getstatus", mock_server.uri())).await;

    assert!(matches!(outcome, Outcome::Success(_)));
}

#[tokio::test]
async fn test_wallet_scoped_job_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/TestWallet"))
        .and(body_partial_json(json!({"method": "listcoins"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": [{
                "txid": "ab", "index": 3, "amount": 5000,
                "anonymityScore": 2.0, "confirmed": true, "confirmations": 12
            }]
        })))
        .mount(&mock_server)
        .await;

    let dispatcher = HttpDispatcher::new();
    let input = OperationInput::default();
    let job = RpcOp::ListCoins.create_job("TestWallet", &input, &mock_server.uri());

    let action = RpcOp::ListCoins.dispatch(&dispatcher, &job, "TestWallet").await;
    match action {
        NavAction::Push(Dialog::Coins(coins)) => {
            assert_eq!(coins.len(), 1);
            assert_eq!(coins[0].amount, 5000);
            assert_eq!(coins[0].index, 3);
        }
        other => panic!("expected coins dialog, got {other:?}"),
    }
}
