//! MCP (Model Context Protocol) module
//!
//! This module implements the JSON-RPC 2.0 request dispatcher that
//! exposes the FinLab documentation as MCP tools. Transport is left to
//! the HTTP adapter, which hands request bodies to [`McpServer`].

pub mod error;
pub mod handlers;
pub mod protocol;
pub mod server;
pub mod tools;

// Re-export main types
pub use error::McpError;
pub use server::{McpMethod, McpServer};
pub use tools::{ToolKind, ToolRegistry};
