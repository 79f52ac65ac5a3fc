//! Route table and middleware stack

use axum::{
    http::{
        header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::Level;

use crate::http::handlers;
use crate::http::state::AppState;

/// Methods accepted by the CORS preflight
pub const ALLOWED_METHODS: [Method; 4] =
    [Method::GET, Method::POST, Method::DELETE, Method::OPTIONS];

/// Build the application router
///
/// Only `/mcp` and `/sse` answer 405 for a wrong method; every other
/// unrouted method or path is a plain 404.
///
/// Any `OPTIONS` request is answered by the CORS layer as a preflight
/// before routing. The outer header layers stamp the same allow-methods
/// and allow-headers values on every response, preflight included.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health_handler).fallback(handlers::not_found))
        .route(
            "/health",
            get(handlers::health_handler).fallback(handlers::not_found),
        )
        .route(
            "/install.sh",
            get(handlers::install_script_handler).fallback(handlers::not_found),
        )
        .route(
            "/feedback",
            get(handlers::list_feedback_handler)
                .post(handlers::create_feedback_handler)
                .fallback(handlers::not_found),
        )
        .route(
            "/feedback/",
            delete(handlers::delete_feedback_missing_id).fallback(handlers::not_found),
        )
        .route(
            "/feedback/{id}",
            delete(handlers::delete_feedback_handler).fallback(handlers::not_found),
        )
        .route(
            "/mcp",
            post(handlers::mcp_handler).fallback(handlers::method_not_allowed),
        )
        .route(
            "/sse",
            post(handlers::mcp_handler).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(ALLOWED_METHODS)
                .allow_headers([CONTENT_TYPE]),
        )
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, DELETE, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("content-type"),
        ))
        .with_state(state)
}
