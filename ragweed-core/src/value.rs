/// Metadata values are arbitrary JSON, matching whatever the ingestion
/// process chose to store alongside each chunk.
pub type Value = serde_json::Value;
