//! Integration tests for the HTTP surface
//!
//! Health, install script, MCP transport and fallbacks.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use finlab_mcp::mcp::protocol::PARSE_ERROR;
use finlab_mcp::mcp::tools::DEPRECATION_NOTICE;
use serde_json::json;

use crate::common::*;

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    for uri in ["/health", "/"] {
        let response = send(&app, Request::get(uri).body(Body::empty()).unwrap()).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"status": "ok", "server": "finlab-mcp"})
        );
    }
}

#[tokio::test]
async fn test_install_script() {
    let app = create_test_app();

    let response = send(
        &app,
        Request::get("/install.sh").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "text/plain; charset=utf-8"
    );
    let script = body_text(response).await;
    assert!(script.starts_with("#!/bin/sh"));
    assert_eq!(script, finlab_mcp::http::handlers::INSTALL_SCRIPT);
}

#[tokio::test]
async fn test_initialize_over_http() {
    let app = create_test_app();

    let response = send(&app, mcp_request(json!(1), "initialize", None)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["jsonrpc"], "2.0");
    assert_eq!(body["id"], 1);
    assert_eq!(body["result"]["protocolVersion"], "2024-11-05");
    assert_eq!(body["result"]["serverInfo"]["name"], "finlab-docs");
    assert_eq!(body["result"]["capabilities"], json!({"tools": {}}));
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn test_sse_alias_behaves_like_mcp() {
    let app = create_test_app();

    let request = json_request(
        "POST",
        "/sse",
        json!({"jsonrpc": "2.0", "id": "s-1", "method": "tools/list"}).to_string(),
    );
    let response = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["id"], "s-1");
    assert_eq!(body["result"]["tools"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_factor_examples_over_http() {
    let app = create_test_app();

    let response = send(
        &app,
        mcp_request(
            json!(7),
            "tools/call",
            Some(json!({
                "name": "get_factor_examples",
                "arguments": {"factor_type": "momentum"}
            })),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let text = body["result"]["content"][0]["text"].as_str().unwrap();
    assert_eq!(body["result"]["content"][0]["type"], "text");
    assert!(text.starts_with(DEPRECATION_NOTICE));
    assert!(text.contains("momentum strategies"));
    assert!(!text.contains("value strategies"));
}

#[tokio::test]
async fn test_unknown_method_is_200_with_error() {
    let app = create_test_app();

    let response = send(&app, mcp_request(json!(3), "prompts/list", None)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["id"], 3);
    assert_eq!(body["error"]["code"], -32601);
    assert_eq!(body["error"]["message"], "Method not found: prompts/list");
    assert!(body.get("result").is_none());
}

#[tokio::test]
async fn test_malformed_mcp_body() {
    let app = create_test_app();

    let response = send(&app, json_request("POST", "/mcp", "{not json")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({
            "jsonrpc": "2.0",
            "id": null,
            "error": {"code": PARSE_ERROR, "message": "Parse error"}
        })
    );
}

#[tokio::test]
async fn test_mcp_rejects_get() {
    let app = create_test_app();

    for uri in ["/mcp", "/sse"] {
        let response = send(&app, Request::get(uri).body(Body::empty()).unwrap()).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body_text(response).await, "Method not allowed");
    }
}

#[tokio::test]
async fn test_unknown_path() {
    let app = create_test_app();

    let response = send(
        &app,
        Request::get("/api/v1/anything").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, "Not found");
}

#[tokio::test]
async fn test_wrong_method_on_known_path_is_not_found() {
    let app = create_test_app();

    let requests = vec![
        json_request("PUT", "/feedback", "{}"),
        Request::get("/feedback/abc").body(Body::empty()).unwrap(),
        Request::post("/health").body(Body::empty()).unwrap(),
        Request::post("/install.sh").body(Body::empty()).unwrap(),
        Request::delete("/").body(Body::empty()).unwrap(),
        Request::get("/feedback/").body(Body::empty()).unwrap(),
    ];

    for request in requests {
        let label = format!("{} {}", request.method(), request.uri());
        let response = send(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{label}");
        assert_eq!(body_text(response).await, "Not found", "{label}");
    }
}

#[tokio::test]
async fn test_embedded_corpus_lists_four_documents() {
    let app = create_embedded_app();

    let response = send(
        &app,
        mcp_request(
            json!(1),
            "tools/call",
            Some(json!({"name": "list_documents", "arguments": {}})),
        ),
    )
    .await;

    let body = body_json(response).await;
    let text = body["result"]["content"][0]["text"].as_str().unwrap();
    for name in ["getting-started", "data-reference", "backtest", "factor-examples"] {
        assert!(text.contains(&format!("- **{name}**: ")), "missing {name}");
    }
}
