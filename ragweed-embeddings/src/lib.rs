mod bedrock;
mod error;
mod ollama;
mod provider;

pub use bedrock::BedrockEmbedding;
pub use error::EmbeddingProviderError;
pub use ollama::OllamaEmbedding;
pub use provider::{EmbeddingProvider, EmbeddingSettings, SelectProviderError};
