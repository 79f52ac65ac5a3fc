//! MCP-specific error types

use crate::mcp::protocol::{INTERNAL_ERROR, INVALID_PARAMS, PARSE_ERROR};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum McpError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl McpError {
    /// JSON-RPC error code for this error
    pub fn code(&self) -> i32 {
        match self {
            McpError::ParseError(_) => PARSE_ERROR,
            McpError::InvalidParams(_) => INVALID_PARAMS,
            McpError::Json(_) => INTERNAL_ERROR,
        }
    }
}
