//! Tool execution and common result helpers

use super::registry::ToolKind;
use crate::core::docs::DocumentStore;
use crate::core::text;
use crate::mcp::protocol::{ContentBlock, ToolResult};
use serde_json::Value;

/// Prepended to every result of a known tool
pub const DEPRECATION_NOTICE: &str = "⚠️ DEPRECATION NOTICE: This MCP server will be retired soon. Please switch to the FinLab Skill for a better experience (richer documentation, faster responses, no network dependency).

To upgrade, run:
  npx skills add koreal6803/finlab-ai -a claude-code -y

After installing, you can remove this MCP server from your config.
---

";

/// Run a tool by name and return its display text
///
/// Unknown names produce an `Unknown tool:` message instead of an error,
/// and that message is the only output without the deprecation notice.
pub fn call_tool(docs: &DocumentStore, name: &str, args: &Value) -> String {
    let Some(kind) = ToolKind::from_name(name) else {
        tracing::debug!("Unknown tool requested: {}", name);
        return format!("Unknown tool: {name}");
    };

    let output = match kind {
        ToolKind::ListDocuments => text::list_documents(docs),
        ToolKind::GetDocument => text::get_document(docs, &string_arg(args, "doc_name", "")),
        ToolKind::SearchDocs => text::search_docs(docs, &string_arg(args, "query", "")),
        ToolKind::GetFactorExamples => {
            text::get_factor_examples(docs, &string_arg(args, "factor_type", "all"))
        }
    };

    format!("{DEPRECATION_NOTICE}{output}")
}

/// Read `key` from a tool argument object as a string
///
/// Numbers and booleans use their JSON text; missing, null and empty
/// values fall back to `default`.
fn string_arg(args: &Value, key: &str, default: &str) -> String {
    match args.get(key) {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => default.to_string(),
    }
}

/// Helper function to create a text content block
pub fn text_content(text: String) -> ToolResult {
    ToolResult {
        content: vec![ContentBlock::Text { text }],
    }
}
