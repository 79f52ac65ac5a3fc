//! Application state for the HTTP adapter

use std::sync::Arc;

use crate::core::services::Services;
use crate::mcp::McpServer;

/// Shared application state for Axum handlers
///
/// Cloned per request; every field is an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Core services (documents, feedback, config)
    pub services: Arc<Services>,

    /// JSON-RPC dispatcher over the same document store
    pub mcp: Arc<McpServer>,
}

impl AppState {
    pub fn new(services: Arc<Services>) -> Self {
        let mcp = Arc::new(McpServer::new(Arc::clone(&services.docs)));
        Self { services, mcp }
    }
}
