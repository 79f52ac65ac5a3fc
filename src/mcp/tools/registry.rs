//! Tool registry for the documentation tools

use crate::core::docs::DocumentStore;
use crate::core::text::FACTOR_CATEGORIES;
use crate::mcp::protocol::ToolSchema;
use serde_json::json;

/// The closed set of callable tools
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    ListDocuments,
    GetDocument,
    SearchDocs,
    GetFactorExamples,
}

impl ToolKind {
    /// Every tool, in the order `tools/list` reports them
    pub const ALL: [ToolKind; 4] = [
        ToolKind::ListDocuments,
        ToolKind::GetDocument,
        ToolKind::SearchDocs,
        ToolKind::GetFactorExamples,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ToolKind::ListDocuments => "list_documents",
            ToolKind::GetDocument => "get_document",
            ToolKind::SearchDocs => "search_finlab_docs",
            ToolKind::GetFactorExamples => "get_factor_examples",
        }
    }

    /// Resolve a tool name; `None` for anything not in the closed set
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Descriptor advertised by `tools/list`
    ///
    /// `get_document` lists the document names, so the schema depends
    /// on the loaded corpus.
    pub fn schema(self, docs: &DocumentStore) -> ToolSchema {
        let (description, input_schema) = match self {
            ToolKind::ListDocuments => (
                "List all available FinLab documentation files".to_string(),
                json!({
                    "type": "object",
                    "properties": {}
                }),
            ),
            ToolKind::GetDocument => (
                "Get the full content of a FinLab documentation file".to_string(),
                json!({
                    "type": "object",
                    "properties": {
                        "doc_name": {
                            "type": "string",
                            "description": format!(
                                "Name of the document (without .md extension). Available: {}",
                                docs.names().collect::<Vec<_>>().join(", ")
                            )
                        }
                    },
                    "required": ["doc_name"]
                }),
            ),
            ToolKind::SearchDocs => (
                "Search for a keyword or phrase in all FinLab documentation".to_string(),
                json!({
                    "type": "object",
                    "properties": {
                        "query": {
                            "type": "string",
                            "description": "The search term to look for (case-insensitive)"
                        }
                    },
                    "required": ["query"]
                }),
            ),
            ToolKind::GetFactorExamples => (
                "Get factor/strategy examples from the documentation".to_string(),
                json!({
                    "type": "object",
                    "properties": {
                        "factor_type": {
                            "type": "string",
                            "description": format!(
                                "Type of factor: all, {}",
                                FACTOR_CATEGORIES.join(", ")
                            ),
                            "default": "all"
                        }
                    }
                }),
            ),
        };

        ToolSchema {
            name: self.name().to_string(),
            description,
            input_schema,
        }
    }
}

/// Static tool descriptors, built once from the document corpus
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    schemas: Vec<ToolSchema>,
}

impl ToolRegistry {
    pub fn new(docs: &DocumentStore) -> Self {
        Self {
            schemas: ToolKind::ALL.iter().map(|kind| kind.schema(docs)).collect(),
        }
    }

    /// All tool schemas in registration order
    pub fn list(&self) -> &[ToolSchema] {
        &self.schemas
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
