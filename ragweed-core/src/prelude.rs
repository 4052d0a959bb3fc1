// Prelude module for ragweed-core
//
// Import commonly used types with: `use ragweed_core::prelude::*;`

pub use crate::{
    // Documents
    Document,
    // Embeddings & vector stores
    Embedding,
    EmbeddingError,
    // Generation
    GenerationError,
    Llm,
    SearchResult,
    StoreError,
    Value,
    VectorStore,
};
