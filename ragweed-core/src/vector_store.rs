use std::sync::Arc;

use async_trait::async_trait;

use crate::{Document, StoreError};

/// A retrieved chunk paired with its similarity score (higher is closer).
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    pub document: Document,
    pub score: f32,
}

/// Read-only similarity search over a collection of stored chunks.
///
/// The store owns the distance metric; callers only see the resulting
/// scores, ordered nearest first. A store with fewer than `top_k` records
/// returns everything it has; an empty store returns an empty result.
#[async_trait]
pub trait VectorStore: Send + Sync {
    async fn search(
        &self,
        query_embedding: &[f32],
        top_k: usize,
    ) -> Result<Vec<SearchResult>, StoreError>;
}

#[async_trait]
impl<T> VectorStore for Arc<T>
where
    T: VectorStore + ?Sized,
{
    async fn search(
        &self,
        query_embedding: &[f32],
        top_k: usize,
    ) -> Result<Vec<SearchResult>, StoreError> {
        (**self).search(query_embedding, top_k).await
    }
}
