// Test helper functions

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use finlab_mcp::core::config::{Config, StoreBackend};
use finlab_mcp::core::docs::DocumentStore;
use finlab_mcp::core::kv::MemoryKv;
use finlab_mcp::core::services::Services;
use finlab_mcp::http::{self, AppState};
use serde_json::{json, Value};
use tower::ServiceExt as TowerServiceExt;

use super::fixtures::sample_docs;

/// Services over the sample corpus with in-memory feedback
#[allow(dead_code)]
pub fn create_test_services() -> Services {
    services_with(sample_docs())
}

fn services_with(docs: DocumentStore) -> Services {
    let mut config = Config::default();
    config.feedback.backend = StoreBackend::Memory;
    Services::from_parts(config, docs, Arc::new(MemoryKv::new()))
}

/// Full router over the sample corpus
#[allow(dead_code)]
pub fn create_test_app() -> Router {
    http::router(AppState::new(Arc::new(create_test_services())))
}

/// Full router over the built-in documents
#[allow(dead_code)]
pub fn create_embedded_app() -> Router {
    let services = services_with(DocumentStore::embedded().clone());
    http::router(AppState::new(Arc::new(services)))
}

/// Send one request through a clone of the router
#[allow(dead_code)]
pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

#[allow(dead_code)]
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), 1_000_000)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 1_000_000)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Request with a raw body and JSON content type
#[allow(dead_code)]
pub fn json_request(method: &str, uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

/// JSON-RPC request to `/mcp`
#[allow(dead_code)]
pub fn mcp_request(id: Value, method: &str, params: Option<Value>) -> Request<Body> {
    let mut envelope = json!({ "jsonrpc": "2.0", "id": id, "method": method });
    if let Some(params) = params {
        envelope["params"] = params;
    }
    json_request("POST", "/mcp", envelope.to_string())
}
