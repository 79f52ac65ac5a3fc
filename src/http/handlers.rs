//! HTTP request handlers
//!
//! Install script, health check, feedback CRUD and the MCP endpoint.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::core::error::FinlabError;
use crate::core::types::*;
use crate::http::state::AppState;
use crate::mcp::protocol::JsonRpcResponse;

/// Shell installer for the successor skill, served verbatim
pub const INSTALL_SCRIPT: &str = include_str!("../../assets/install.sh");

/// Identity reported by the health check
pub const SERVICE_NAME: &str = "finlab-mcp";

/// `GET /install.sh`
pub async fn install_script_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        INSTALL_SCRIPT,
    )
}

/// `GET /health` and `GET /`
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        server: SERVICE_NAME.to_string(),
    })
}

/// `POST /feedback`
///
/// # Errors
///
/// - `InvalidJson`: body is not a JSON object of the expected shape
/// - `MissingField`: message absent or empty
pub async fn create_feedback_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<FeedbackCreated>, FinlabError> {
    let req: FeedbackRequest =
        serde_json::from_slice(&body).map_err(FinlabError::InvalidJson)?;

    let id = state.services.feedback.create(req).await?;

    Ok(Json(FeedbackCreated { success: true, id }))
}

/// `GET /feedback`, newest first
pub async fn list_feedback_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<FeedbackRecord>>, FinlabError> {
    let records = state.services.feedback.list().await?;
    Ok(Json(records))
}

/// `DELETE /feedback/{id}`
pub async fn delete_feedback_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, FinlabError> {
    state.services.feedback.delete(&id).await?;
    Ok(Json(SuccessResponse { success: true }))
}

/// `DELETE /feedback/` with no id segment
pub async fn delete_feedback_missing_id() -> FinlabError {
    FinlabError::MissingId
}

/// `POST /mcp` and `POST /sse`
///
/// Protocol-level errors travel inside a 200 envelope; only a body that
/// cannot be decoded at all gets a 400.
pub async fn mcp_handler(State(state): State<AppState>, body: Bytes) -> Response {
    match state.mcp.handle_message(&body) {
        Ok(response) => Json(response).into_response(),
        Err(e) => {
            tracing::warn!("Rejecting MCP body: {}", e);
            (
                StatusCode::BAD_REQUEST,
                Json(JsonRpcResponse::parse_error()),
            )
                .into_response()
        }
    }
}

/// Non-POST requests to the MCP endpoints
pub async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

/// Any unrouted path
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}
