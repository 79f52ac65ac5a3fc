//! MCP protocol method handlers

use crate::core::docs::DocumentStore;
use crate::mcp::error::McpError;
use crate::mcp::protocol::*;
use crate::mcp::tools::{call_tool, text_content, ToolRegistry};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, info};

pub struct ProtocolHandlers {
    docs: Arc<DocumentStore>,
    tool_registry: ToolRegistry,
}

impl ProtocolHandlers {
    pub fn new(docs: Arc<DocumentStore>) -> Self {
        let tool_registry = ToolRegistry::new(&docs);
        Self {
            docs,
            tool_registry,
        }
    }

    pub fn tool_registry(&self) -> &ToolRegistry {
        &self.tool_registry
    }

    /// Handle initialize request
    pub fn handle_initialize(&self, request: JsonRpcRequest) -> Result<JsonRpcResponse, McpError> {
        info!("Client initialized");

        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            capabilities: ServerCapabilities::default(),
        };

        Ok(JsonRpcResponse::success(
            request.id,
            serde_json::to_value(result)?,
        ))
    }

    /// Handle tools/list request
    pub fn handle_tools_list(&self, request: JsonRpcRequest) -> Result<JsonRpcResponse, McpError> {
        let tools = self.tool_registry.list();

        Ok(JsonRpcResponse::success(
            request.id,
            json!({ "tools": tools }),
        ))
    }

    /// Handle tools/call request
    ///
    /// Tool-level problems (unknown tool, missing document) come back as
    /// text in a successful result; only a malformed `params` object is
    /// a protocol error.
    pub fn handle_tools_call(&self, request: JsonRpcRequest) -> Result<JsonRpcResponse, McpError> {
        let params: ToolCallParams =
            serde_json::from_value(request.params.unwrap_or(Value::Null))
                .map_err(|e| McpError::InvalidParams(e.to_string()))?;

        let arguments = params
            .arguments
            .unwrap_or_else(|| Value::Object(Default::default()));
        debug!(tool = %params.name, "Calling tool");

        let text = call_tool(&self.docs, &params.name, &arguments);

        Ok(JsonRpcResponse::success(
            request.id,
            serde_json::to_value(text_content(text))?,
        ))
    }
}
