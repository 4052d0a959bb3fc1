use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::Value;

/// One ingested chunk of text with its metadata and stored embedding.
///
/// Records are written by the external ingestion process and are read-only
/// here. The chunk identifier, when present, lives under the `"id"` metadata
/// key as an opaque string.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Document {
    pub content: String,
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
}

impl Document {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            metadata: HashMap::new(),
            embedding: None,
        }
    }

    /// The `"id"` metadata entry, or `None` when the ingestion process did
    /// not record one (or recorded something other than a string).
    pub fn source_id(&self) -> Option<&str> {
        self.metadata.get("id").and_then(Value::as_str)
    }
}
