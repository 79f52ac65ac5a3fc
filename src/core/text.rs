//! Text operations over the document store
//!
//! Every function here is pure: it reads the store and returns
//! displayable markdown. Missing documents and empty searches produce
//! guidance text rather than errors.

use crate::core::docs::{DocumentStore, FACTOR_EXAMPLES_DOC};
use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum number of search hits rendered
pub const MAX_SEARCH_RESULTS: usize = 10;

/// Lines of context shown before a matching line
pub const CONTEXT_BEFORE: usize = 2;

/// Lines of context shown after a matching line
pub const CONTEXT_AFTER: usize = 5;

/// Factor categories suggested when a filter matches nothing
pub const FACTOR_CATEGORIES: &[&str] = &["value", "momentum", "technical", "quality", "ml"];

static HEADING_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#+\s*").unwrap());

/// A single matching line with its surrounding context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub document: String,
    /// 1-based line number of the match
    pub line: usize,
    pub context: String,
}

/// Summarize every document by its first non-blank line
pub fn list_documents(store: &DocumentStore) -> String {
    let lines: Vec<String> = store
        .iter()
        .map(|doc| format!("- **{}**: {}", doc.name, summary_line(&doc.content)))
        .collect();

    format!("## Available FinLab Documents\n\n{}", lines.join("\n"))
}

fn summary_line(content: &str) -> String {
    content
        .split('\n')
        .find(|line| !line.trim().is_empty())
        .map(|line| HEADING_MARKER.replace(line, "").trim().to_string())
        .unwrap_or_default()
}

/// Full text of a document, or a not-found message naming the valid documents
pub fn get_document(store: &DocumentStore, name: &str) -> String {
    match store.get(name) {
        Some(content) => content.to_string(),
        None => format!(
            "Document '{}' not found.\n\nAvailable documents: {}",
            name,
            store.names().collect::<Vec<_>>().join(", ")
        ),
    }
}

/// Case-insensitive line search across all documents
///
/// Hits are returned in encounter order (documents in store order,
/// lines in file order) and capped at [`MAX_SEARCH_RESULTS`].
pub fn search(store: &DocumentStore, query: &str) -> Vec<SearchHit> {
    let needle = query.to_lowercase();
    let mut hits = Vec::new();

    for doc in store.iter() {
        if !doc.content.to_lowercase().contains(&needle) {
            continue;
        }

        let lines: Vec<&str> = doc.content.split('\n').collect();
        for (i, line) in lines.iter().enumerate() {
            if !line.to_lowercase().contains(&needle) {
                continue;
            }

            let start = i.saturating_sub(CONTEXT_BEFORE);
            let end = (i + CONTEXT_AFTER + 1).min(lines.len());
            hits.push(SearchHit {
                document: doc.name.clone(),
                line: i + 1,
                context: lines[start..end].join("\n"),
            });

            if hits.len() == MAX_SEARCH_RESULTS {
                return hits;
            }
        }
    }

    hits
}

/// Render [`search`] results as markdown
pub fn search_docs(store: &DocumentStore, query: &str) -> String {
    let hits = search(store, query);
    if hits.is_empty() {
        return format!("No results found for '{query}'");
    }

    let mut output = format!("## Search Results: {query}\n\n");
    for hit in &hits {
        output.push_str(&format!(
            "### {} (line {})\n```\n{}\n```\n\n",
            hit.document, hit.line, hit.context
        ));
    }
    output
}

/// Sections of the factor examples document mentioning `factor_type`
///
/// `all` (or an empty argument) returns the whole document. Otherwise
/// the document is split on `## ` headings and every heading section
/// whose text contains the category, ignoring case, is kept.
pub fn get_factor_examples(store: &DocumentStore, factor_type: &str) -> String {
    let Some(content) = store.get(FACTOR_EXAMPLES_DOC) else {
        return format!("{FACTOR_EXAMPLES_DOC} not found");
    };

    if factor_type.is_empty() || factor_type == "all" {
        return content.to_string();
    }

    let needle = factor_type.to_lowercase();
    let matching: Vec<String> = heading_sections(content)
        .into_iter()
        .filter(|section| section.to_lowercase().contains(&needle))
        .map(|section| format!("## {section}"))
        .collect();

    if matching.is_empty() {
        return format!(
            "No examples found for factor type '{}'. Try: {}",
            factor_type,
            FACTOR_CATEGORIES.join(", ")
        );
    }

    matching.join("\n\n")
}

/// Split on second-level headings, dropping any text before the first one.
/// Returned sections start with the heading title (marker removed).
fn heading_sections(content: &str) -> Vec<&str> {
    let mut parts = content.split("\n## ");
    let mut sections = Vec::new();

    if let Some(first) = parts.next() {
        if let Some(section) = first.strip_prefix("## ") {
            sections.push(section);
        }
    }
    sections.extend(parts);
    sections
}
