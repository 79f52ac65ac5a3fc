//! MCP tool implementations
//!
//! The four documentation tools form a closed set ([`ToolKind`]); the
//! registry advertises their schemas and the handler runs them against
//! the document store.

pub mod handler;
pub mod registry;

pub use handler::{call_tool, text_content, DEPRECATION_NOTICE};
pub use registry::{ToolKind, ToolRegistry};
