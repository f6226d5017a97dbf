//! Multi-document manifest stream parsing
//!
//! `helm template` prints every rendered object as its own YAML document,
//! separated by `---`. Each document is parsed into a generic JSON value so
//! the indexer can work on any kind, including CRDs.

use crate::error::VisualizerResult;
use serde::Deserialize;
use serde_json::Value;

/// Parse a `---`-delimited YAML stream into one value per document
///
/// Empty documents (e.g. templates that rendered to nothing) come back as
/// `Value::Null`; the indexer skips them.
pub fn parse_documents(text: &str) -> VisualizerResult<Vec<Value>> {
    let mut documents = Vec::new();
    if text.trim().is_empty() {
        return Ok(documents);
    }

    for document in serde_yaml::Deserializer::from_str(text) {
        documents.push(Value::deserialize(document)?);
    }

    tracing::debug!(
        "Parsed {} documents from {} bytes of manifest output",
        documents.len(),
        text.len()
    );
    Ok(documents)
}
