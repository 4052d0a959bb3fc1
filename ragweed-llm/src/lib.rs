mod ollama;

pub use ollama::OllamaGenerator;
pub use ragweed_core::{GenerationError, Llm};
