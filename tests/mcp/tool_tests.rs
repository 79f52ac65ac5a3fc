//! Tool output over the sample corpus

use finlab_mcp::core::docs::DocumentStore;
use finlab_mcp::mcp::tools::{call_tool, DEPRECATION_NOTICE};
use serde_json::json;

use crate::common::{sample_docs, GUIDE_DOC};

fn body(output: &str) -> &str {
    output
        .strip_prefix(DEPRECATION_NOTICE)
        .expect("tool output should carry the deprecation notice")
}

#[test]
fn test_list_documents() {
    let docs = sample_docs();
    let output = call_tool(&docs, "list_documents", &json!({}));

    assert_eq!(
        body(&output),
        "## Available FinLab Documents\n\n- **guide**: Quick Guide\n- **factor-examples**: Factor Examples"
    );
}

#[test]
fn test_get_document_returns_full_text() {
    let docs = sample_docs();
    let output = call_tool(&docs, "get_document", &json!({"doc_name": "guide"}));
    assert_eq!(body(&output), GUIDE_DOC);
}

#[test]
fn test_search_is_case_insensitive_with_context() {
    let docs = sample_docs();
    let output = call_tool(&docs, "search_finlab_docs", &json!({"query": "LOGIN"}));

    assert_eq!(
        body(&output),
        "## Search Results: LOGIN\n\n### guide (line 4)\n```\n\nInstall with pip install finlab.\nThen call finlab.login().\n\n```\n\n"
    );
}

#[test]
fn test_search_no_results() {
    let docs = sample_docs();
    let output = call_tool(&docs, "search_finlab_docs", &json!({"query": "xyzzy"}));
    assert_eq!(body(&output), "No results found for 'xyzzy'");
}

#[test]
fn test_search_caps_results() {
    let content: String = (0..30).map(|i| format!("hit {i}\n")).collect();
    let docs = DocumentStore::from_pairs([("many", content)]);

    let output = call_tool(&docs, "search_finlab_docs", &json!({"query": "hit"}));
    assert_eq!(body(&output).matches("### many (line").count(), 10);
}

#[test]
fn test_factor_filter_momentum() {
    let docs = sample_docs();
    let output = call_tool(&docs, "get_factor_examples", &json!({"factor_type": "momentum"}));
    assert_eq!(body(&output), "## momentum strategies\nbuy winners\n");
}

#[test]
fn test_factor_filter_defaults_to_all() {
    let docs = sample_docs();
    let all = call_tool(&docs, "get_factor_examples", &json!({}));
    assert_eq!(body(&all), crate::common::FACTOR_DOC);
}

#[test]
fn test_factor_filter_no_match() {
    let docs = sample_docs();
    let output = call_tool(&docs, "get_factor_examples", &json!({"factor_type": "crypto"}));
    assert_eq!(
        body(&output),
        "No examples found for factor type 'crypto'. Try: value, momentum, technical, quality, ml"
    );
}

#[test]
fn test_embedded_factor_sections() {
    let docs = DocumentStore::embedded();
    for category in ["value", "momentum", "technical", "quality", "ml"] {
        let output = call_tool(docs, "get_factor_examples", &json!({"factor_type": category}));
        let text = body(&output);
        assert!(text.starts_with("## "), "{category}: {text}");
    }
}
