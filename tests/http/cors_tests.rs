//! CORS behaviour across the router

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;

use crate::common::*;

#[tokio::test]
async fn test_preflight_on_any_path() {
    let app = create_test_app();

    for uri in ["/mcp", "/feedback", "/no/such/route"] {
        let request = Request::builder()
            .method("OPTIONS")
            .uri(uri)
            .header("origin", "https://claude.ai")
            .header("access-control-request-method", "POST")
            .body(Body::empty())
            .unwrap();
        let response = send(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK, "preflight for {uri}");
        let headers = response.headers();
        assert_eq!(headers["access-control-allow-origin"], "*");

        assert_eq!(
            headers["access-control-allow-methods"],
            "GET, POST, DELETE, OPTIONS"
        );
        assert_eq!(headers["access-control-allow-headers"], "content-type");
        assert!(body_text(response).await.is_empty());
    }
}

#[tokio::test]
async fn test_cors_headers_on_regular_responses() {
    let app = create_test_app();

    let requests = vec![
        Request::get("/health").body(Body::empty()).unwrap(),
        Request::get("/missing").body(Body::empty()).unwrap(),
        json_request("POST", "/feedback", "{}"),
        mcp_request(json!(1), "tools/list", None),
    ];

    for request in requests {
        let response = send(&app, request).await;
        let headers = response.headers();
        assert_eq!(headers["access-control-allow-origin"], "*");
        assert_eq!(
            headers["access-control-allow-methods"],
            "GET, POST, DELETE, OPTIONS"
        );
        assert_eq!(headers["access-control-allow-headers"], "content-type");
    }
}
