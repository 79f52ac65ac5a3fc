//! MCP request dispatcher
//!
//! Decodes a JSON-RPC envelope, routes it by method and always produces
//! a response envelope. Each call is independent; no session state is
//! kept between requests.

use crate::core::docs::DocumentStore;
use crate::mcp::error::McpError;
use crate::mcp::handlers::ProtocolHandlers;
use crate::mcp::protocol::*;
use std::sync::Arc;
use tracing::{debug, warn};

/// The closed set of protocol methods
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum McpMethod {
    Initialize,
    ToolsList,
    ToolsCall,
    Unknown(String),
}

impl From<&str> for McpMethod {
    fn from(method: &str) -> Self {
        match method {
            "initialize" => McpMethod::Initialize,
            "tools/list" => McpMethod::ToolsList,
            "tools/call" => McpMethod::ToolsCall,
            other => McpMethod::Unknown(other.to_string()),
        }
    }
}

pub struct McpServer {
    handlers: ProtocolHandlers,
}

impl McpServer {
    pub fn new(docs: Arc<DocumentStore>) -> Self {
        Self {
            handlers: ProtocolHandlers::new(docs),
        }
    }

    /// Decode a raw request body
    fn parse_request(body: &[u8]) -> Result<JsonRpcRequest, McpError> {
        serde_json::from_slice(body).map_err(|e| McpError::ParseError(e.to_string()))
    }

    /// Decode and handle a raw request body
    ///
    /// # Errors
    ///
    /// - `ParseError`: the body is not a request envelope. Callers answer
    ///   with [`JsonRpcResponse::parse_error`].
    pub fn handle_message(&self, body: &[u8]) -> Result<JsonRpcResponse, McpError> {
        let request = Self::parse_request(body)?;
        Ok(self.handle_request(request))
    }

    /// Route a decoded request; the response id always equals the request id
    pub fn handle_request(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        debug!(method = %request.method, id = ?request.id, "Dispatching request");

        let id = request.id.clone();
        let result = match McpMethod::from(request.method.as_str()) {
            McpMethod::Initialize => self.handlers.handle_initialize(request),
            McpMethod::ToolsList => self.handlers.handle_tools_list(request),
            McpMethod::ToolsCall => self.handlers.handle_tools_call(request),
            McpMethod::Unknown(method) => Ok(JsonRpcResponse::error(
                id.clone(),
                METHOD_NOT_FOUND,
                format!("Method not found: {method}"),
            )),
        };

        result.unwrap_or_else(|e| {
            warn!("Request failed: {}", e);
            JsonRpcResponse::error(id, e.code(), e.to_string())
        })
    }
}
