use std::path::PathBuf;

/// Fixed configuration for one query run, passed in at construction rather
/// than read from process-wide globals. There are deliberately no runtime
/// flags for any of these.
#[derive(Clone, Debug)]
pub struct RagConfig {
    /// Name handed to the embedding provider selector ("Ollama" or
    /// "Bedrock"; anything else fails at startup).
    pub embedding_provider: String,
    /// Where the ingestion pipeline persisted the chunk collection.
    pub collection_path: PathBuf,
    pub ollama_base_url: String,
    /// llama3, llama2:13b and wizardlm2 also work here.
    pub generation_model: String,
    /// How many context chunks each query retrieves.
    pub top_k: usize,
}

impl Default for RagConfig {
    fn default() -> Self {
        Self {
            embedding_provider: "Ollama".to_string(),
            collection_path: PathBuf::from("chroma"),
            ollama_base_url: "http://localhost:11434".to_string(),
            generation_model: "mistral".to_string(),
            top_k: 3,
        }
    }
}
