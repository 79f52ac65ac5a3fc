//! FinLab MCP - documentation server for the FinLab quant platform
//!
//! Exposes a fixed set of FinLab Markdown documents to LLM clients as
//! Model Context Protocol tools over JSON-RPC, and keeps a small
//! feedback log with expiring entries.
//!
//! # Architecture
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types, xdg
//!   - docs, text (corpus and lookups)
//!   - kv, feedback (expiring records)
//!   - services (unified service container)
//!
//! - **mcp**: JSON-RPC dispatcher (depends on core)
//!   - server, handlers, tools, protocol
//!
//! - **http**: Axum adapter (depends on core and mcp)
//!   - routes, handlers, state
//!
//! - **cli**: Flag parsing and server startup
//!
//! Every tool response carries a deprecation banner pointing users at
//! the successor skill package.

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP adapter
pub mod http;

// MCP (Model Context Protocol) dispatcher
pub mod mcp;

// Command-line entry
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{FinlabError, Result};
pub use core::services::Services;
pub use mcp::McpServer;
