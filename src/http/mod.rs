//! HTTP adapter
//!
//! Serves the install script, health check and feedback endpoints from
//! core/, and forwards `/mcp` and `/sse` bodies to the MCP dispatcher.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;
