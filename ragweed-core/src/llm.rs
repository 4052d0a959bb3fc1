use std::sync::Arc;

use async_trait::async_trait;

use crate::GenerationError;

/// A single blocking completion call against a model endpoint.
///
/// No streaming, no retries, no fallback model; the full completion comes
/// back as one string once generation finishes. Callers needing resilience
/// wrap this externally.
#[async_trait]
pub trait Llm: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

#[async_trait]
impl<T> Llm for Arc<T>
where
    T: Llm + ?Sized,
{
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        (**self).generate(prompt).await
    }
}
