//! Document store
//!
//! An immutable, insertion-ordered set of named text documents. The
//! default corpus is compiled into the binary; a directory of `*.md`
//! files can be served instead.

use crate::core::error::{FinlabError, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Name of the document the factor examples tool filters
pub const FACTOR_EXAMPLES_DOC: &str = "factor-examples";

static EMBEDDED: Lazy<DocumentStore> = Lazy::new(|| {
    DocumentStore::from_pairs([
        (
            "getting-started",
            include_str!("../../docs/getting-started.md"),
        ),
        (
            "data-reference",
            include_str!("../../docs/data-reference.md"),
        ),
        ("backtest", include_str!("../../docs/backtest.md")),
        (
            FACTOR_EXAMPLES_DOC,
            include_str!("../../docs/factor-examples.md"),
        ),
    ])
});

/// A named unit of documentation text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub name: String,
    pub content: String,
}

/// Ordered, read-only collection of documents
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    documents: Vec<Document>,
    index: HashMap<String, usize>,
}

impl DocumentStore {
    /// The corpus compiled into the binary
    pub fn embedded() -> &'static DocumentStore {
        &EMBEDDED
    }

    /// Build a store from `(name, content)` pairs, keeping the first
    /// occurrence of a duplicated name.
    pub fn from_pairs<I, N, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<String>,
    {
        let mut store = Self::default();
        for (name, content) in pairs {
            let name = name.into();
            if store.index.contains_key(&name) {
                tracing::warn!("Duplicate document name '{}', keeping first", name);
                continue;
            }
            store.index.insert(name.clone(), store.documents.len());
            store.documents.push(Document {
                name,
                content: content.into(),
            });
        }
        store
    }

    /// Load every `*.md` file under `dir`, named by file stem and
    /// ordered by path.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(FinlabError::DocumentLoad(format!(
                "Not a directory: {}",
                dir.display()
            )));
        }

        let mut pairs = Vec::new();
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry.map_err(|e| FinlabError::DocumentLoad(e.to_string()))?;
            let path = entry.path();
            if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "md") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                tracing::warn!("Skipping document with non UTF-8 name: {:?}", path);
                continue;
            };
            let content = fs::read_to_string(path)?;
            pairs.push((stem.to_string(), content));
        }

        if pairs.is_empty() {
            return Err(FinlabError::DocumentLoad(format!(
                "No .md files found in {}",
                dir.display()
            )));
        }

        tracing::info!("Loaded {} documents from {:?}", pairs.len(), dir);
        Ok(Self::from_pairs(pairs))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|&i| self.documents[i].content.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.documents.iter().map(|d| d.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
