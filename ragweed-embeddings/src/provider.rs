use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

use crate::{BedrockEmbedding, OllamaEmbedding};
use ragweed_core::Embedding;

/// The closed set of supported embedding providers.
///
/// Adding a provider is an explicit code change; an unrecognized name is a
/// fatal configuration error surfaced before any network traffic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmbeddingProvider {
    Ollama,
    Bedrock,
}

#[derive(Debug, Error)]
pub enum SelectProviderError {
    #[error("embedding provider '{name}' is not supported; only 'Ollama' and 'Bedrock' are")]
    Unsupported { name: String },
}

impl FromStr for EmbeddingProvider {
    type Err = SelectProviderError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "Ollama" => Ok(Self::Ollama),
            "Bedrock" => Ok(Self::Bedrock),
            other => Err(SelectProviderError::Unsupported {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for EmbeddingProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ollama => f.write_str("Ollama"),
            Self::Bedrock => f.write_str("Bedrock"),
        }
    }
}

/// Connection constants for both providers. Which half applies is decided by
/// the selected [`EmbeddingProvider`]; the other half is ignored.
#[derive(Clone, Debug)]
pub struct EmbeddingSettings {
    pub ollama_base_url: String,
    /// nomic-embed-text is the smaller alternative.
    pub ollama_model: String,
    pub ollama_dimension: usize,
    pub bedrock_profile: String,
    pub bedrock_region: String,
    pub bedrock_model_id: String,
    pub bedrock_dimension: usize,
}

impl Default for EmbeddingSettings {
    fn default() -> Self {
        Self {
            ollama_base_url: "http://localhost:11434".to_string(),
            ollama_model: "snowflake-arctic-embed".to_string(),
            ollama_dimension: 1024,
            bedrock_profile: "default".to_string(),
            bedrock_region: "us-east-1".to_string(),
            bedrock_model_id: "amazon.titan-embed-text-v1".to_string(),
            bedrock_dimension: 1536,
        }
    }
}

impl EmbeddingProvider {
    /// Builds the embedding client for this provider. Constructing the
    /// client performs no I/O; the first `embed` call does.
    pub fn connect(&self, settings: &EmbeddingSettings) -> Arc<dyn Embedding> {
        match self {
            Self::Ollama => Arc::new(OllamaEmbedding::new(
                settings.ollama_base_url.clone(),
                settings.ollama_model.clone(),
                settings.ollama_dimension,
            )),
            Self::Bedrock => Arc::new(BedrockEmbedding::new(
                settings.bedrock_profile.clone(),
                settings.bedrock_region.clone(),
                settings.bedrock_model_id.clone(),
                settings.bedrock_dimension,
            )),
        }
    }
}
