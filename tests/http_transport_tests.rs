// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Tests for the HTTP transport against a local mock operator
//!
//! Each test starts an axum server on an ephemeral port whose handler decides
//! how the "operator" answers.

mod helpers;

use std::sync::Arc;
use std::time::Duration;

use axum::{http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use helpers::{init_tracing, ALICE};
use plasma_client::codec::buffer_marker;
use plasma_client::{
    HttpTransport, OperatorClient, PlasmaClient, PlasmaError, RpcMethod, Transport,
    TransportConfig, TransportError,
};
use serde_json::{json, Value};

/// Serves `app` on 127.0.0.1 and returns its base URL.
async fn spawn(app: Router) -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}"))
}

/// Operator that answers every request with `result`, echoing the request id.
fn answering(result: Value) -> Router {
    Router::new().route(
        "/",
        post(move |Json(request): Json<Value>| {
            let result = result.clone();
            async move {
                Json(json!({
                    "jsonrpc": "2.0",
                    "id": request["id"].clone(),
                    "result": result,
                }))
            }
        }),
    )
}

fn transport(endpoint: &str) -> HttpTransport {
    HttpTransport::new(&TransportConfig::new(endpoint).with_timeout(Duration::from_secs(5)))
        .expect("valid endpoint")
}

#[tokio::test]
async fn test_request_envelope_shape() -> anyhow::Result<()> {
    init_tracing();
    let app = Router::new().route(
        "/",
        post(|Json(request): Json<Value>| async move {
            // Reflect the request back so the test can inspect it
            Json(json!({ "jsonrpc": "2.0", "id": request["id"].clone(), "result": request }))
        }),
    );
    let endpoint = spawn(app).await?;

    let echoed = transport(&endpoint)
        .invoke(RpcMethod::GetBlock, vec![json!(5)], false)
        .await?;

    assert_eq!(echoed["jsonrpc"], "2.0");
    assert_eq!(echoed["method"], "pg_getBlock");
    assert_eq!(echoed["params"], json!([5]));
    assert!(echoed["id"].as_str().is_some_and(|id| id.len() == 36));
    Ok(())
}

#[tokio::test]
async fn test_fresh_id_per_call() -> anyhow::Result<()> {
    let app = Router::new().route(
        "/",
        post(|Json(request): Json<Value>| async move {
            Json(json!({ "jsonrpc": "2.0", "id": request["id"].clone(), "result": request["id"].clone() }))
        }),
    );
    let transport = transport(&spawn(app).await?);

    let first = transport.invoke(RpcMethod::GetHeight, vec![], false).await?;
    let second = transport.invoke(RpcMethod::GetHeight, vec![], false).await?;

    assert_ne!(first, second);
    Ok(())
}

#[tokio::test]
async fn test_string_encoded_body_is_parsed() -> anyhow::Result<()> {
    let app = Router::new().route(
        "/",
        post(|| async {
            let inner = json!({ "jsonrpc": "2.0", "id": "1", "result": { "ETH": "64" } });
            Json(Value::String(inner.to_string()))
        }),
    );
    let client = PlasmaClient::new(Arc::new(transport(&spawn(app).await?)));

    let balances = client.get_balances(ALICE).await?;

    assert_eq!(balances["ETH"], alloy_primitives::U256::from(100));
    Ok(())
}

#[tokio::test]
async fn test_error_member_becomes_rpc_error() -> anyhow::Result<()> {
    let app = Router::new().route(
        "/",
        post(|| async {
            Json(json!({
                "jsonrpc": "2.0",
                "id": "1",
                "error": { "code": -32000, "message": "insufficient ranges" }
            }))
        }),
    );
    let client = PlasmaClient::new(Arc::new(transport(&spawn(app).await?)));

    let err = client
        .send_transaction_auto(ALICE, ALICE, "ETH", 1u64)
        .await
        .unwrap_err();

    let rpc = err.as_rpc().expect("rpc error");
    assert_eq!(rpc.message(), "insufficient ranges");
    assert_eq!(rpc.code(), Some(-32000));
    Ok(())
}

#[tokio::test]
async fn test_top_level_message_is_used_for_errors() -> anyhow::Result<()> {
    let app = Router::new().route(
        "/",
        post(|| async { Json(json!({ "error": true, "message": "block not found" })) }),
    );
    let transport = transport(&spawn(app).await?);

    let err = transport
        .invoke(RpcMethod::GetBlock, vec![json!(99)], false)
        .await
        .unwrap_err();

    assert!(err.is_rpc());
    assert_eq!(err.to_string(), "block not found");
    Ok(())
}

#[tokio::test]
async fn test_binary_conversion_only_when_requested() -> anyhow::Result<()> {
    let endpoint = spawn(answering(json!({ "root": buffer_marker(&[0xca, 0xfe]) }))).await?;
    let transport = Arc::new(transport(&endpoint));

    let raw = transport
        .invoke(RpcMethod::OperatorGetBlockNumber, vec![], false)
        .await?;
    assert_eq!(raw["root"]["type"], "Buffer");

    let operator = OperatorClient::new(transport);
    let converted = operator.get_block_metadata_at(1).await?;
    assert_eq!(converted, json!({ "root": "cafe" }));
    Ok(())
}

#[tokio::test]
async fn test_null_result_is_success() -> anyhow::Result<()> {
    let endpoint = spawn(answering(Value::Null)).await?;

    let result = transport(&endpoint)
        .invoke(RpcMethod::OperatorNewBlock, vec![], false)
        .await?;

    assert_eq!(result, Value::Null);
    Ok(())
}

#[tokio::test]
async fn test_non_json_error_status_is_transport_error() -> anyhow::Result<()> {
    let app = Router::new().route(
        "/",
        post(|| async { (StatusCode::BAD_GATEWAY, "upstream down").into_response() }),
    );
    let transport = transport(&spawn(app).await?);

    let err = transport
        .invoke(RpcMethod::GetHeight, vec![], false)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PlasmaError::Transport(TransportError::HttpStatus { status: 502, .. })
    ));
    Ok(())
}

#[tokio::test]
async fn test_garbage_body_is_malformed() -> anyhow::Result<()> {
    let app = Router::new().route("/", post(|| async { "definitely not json" }));
    let transport = transport(&spawn(app).await?);

    let err = transport
        .invoke(RpcMethod::GetHeight, vec![], false)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PlasmaError::Transport(TransportError::MalformedResponse { .. })
    ));
    Ok(())
}

#[tokio::test]
async fn test_slow_operator_times_out() -> anyhow::Result<()> {
    let app = Router::new().route(
        "/",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({ "jsonrpc": "2.0", "id": "1", "result": 1 }))
        }),
    );
    let endpoint = spawn(app).await?;
    let transport = HttpTransport::new(
        &TransportConfig::new(endpoint).with_timeout(Duration::from_millis(100)),
    )?;

    let err = transport
        .invoke(RpcMethod::GetHeight, vec![], false)
        .await
        .unwrap_err();

    match err {
        PlasmaError::Transport(inner) => assert!(inner.is_timeout()),
        other => panic!("expected timeout, got {other:?}"),
    }
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_unset_timeout_still_bounds_silent_operator() -> anyhow::Result<()> {
    let app = Router::new().route(
        "/",
        post(|| async {
            std::future::pending::<()>().await;
            Json(json!({ "jsonrpc": "2.0", "id": "1", "result": 1 }))
        }),
    );
    let endpoint = spawn(app).await?;
    let transport = HttpTransport::new(&TransportConfig::new(endpoint))?;

    let err = transport
        .invoke(RpcMethod::GetHeight, vec![], false)
        .await
        .unwrap_err();

    match err {
        PlasmaError::Transport(inner) => assert!(inner.is_timeout()),
        other => panic!("expected timeout, got {other:?}"),
    }
    Ok(())
}
