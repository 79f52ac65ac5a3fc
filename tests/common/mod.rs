// Common test utilities and fixtures

pub mod helpers;

// Re-export commonly used items
// Note: These may appear unused in some test binaries
#[allow(unused_imports)]
pub use fixtures::{sample_docs, FACTOR_DOC, GUIDE_DOC};
#[allow(unused_imports)]
pub use helpers::{
    body_json, body_text, create_embedded_app, create_test_app, create_test_services,
    json_request, mcp_request, send,
};
