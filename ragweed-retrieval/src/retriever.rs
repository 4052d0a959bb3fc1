use ragweed_core::{Embedding, SearchResult, VectorStore};

use crate::RetrievalError;

/// Embeds a query and asks the store for the nearest chunks.
///
/// Callers own input sanitation: the query is expected to be non-empty and
/// `top_k` at least 1, but neither is enforced here.
pub struct Retriever<E, S> {
    embedder: E,
    store: S,
}

impl<E, S> Retriever<E, S>
where
    E: Embedding,
    S: VectorStore,
{
    pub fn new(embedder: E, store: S) -> Self {
        Self { embedder, store }
    }

    pub async fn retrieve(
        &self,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<SearchResult>, RetrievalError> {
        let embedding = self.embedder.embed(query).await?;
        let results = self.store.search(&embedding, top_k).await?;
        tracing::debug!(top_k, returned = results.len(), "retrieved context chunks");
        Ok(results)
    }
}
