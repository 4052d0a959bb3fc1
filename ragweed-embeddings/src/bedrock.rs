use async_trait::async_trait;
use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use aws_sdk_bedrockruntime::operation::invoke_model::InvokeModelError;
use aws_sdk_bedrockruntime::primitives::Blob;
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;

use crate::EmbeddingProviderError;
use ragweed_core::{Embedding, EmbeddingError};

/// Embedding client for Amazon Bedrock (Titan text embeddings).
///
/// The SDK client is created on first use, so selecting this provider does
/// not touch the network or the credential chain by itself.
pub struct BedrockEmbedding {
    profile: String,
    region: String,
    model_id: String,
    dimension: usize,
    client: OnceCell<aws_sdk_bedrockruntime::Client>,
}

impl BedrockEmbedding {
    pub fn new(
        profile: impl Into<String>,
        region: impl Into<String>,
        model_id: impl Into<String>,
        dimension: usize,
    ) -> Self {
        Self {
            profile: profile.into(),
            region: region.into(),
            model_id: model_id.into(),
            dimension,
            client: OnceCell::new(),
        }
    }

    async fn client(&self) -> &aws_sdk_bedrockruntime::Client {
        self.client
            .get_or_init(|| async {
                let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
                    .profile_name(&self.profile)
                    .region(aws_config::Region::new(self.region.clone()))
                    .load()
                    .await;
                aws_sdk_bedrockruntime::Client::new(&config)
            })
            .await
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TitanEmbedRequest<'a> {
    input_text: &'a str,
}

#[derive(Deserialize)]
struct TitanEmbedResponse {
    embedding: Vec<f32>,
}

#[async_trait]
impl Embedding for BedrockEmbedding {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let body = serde_json::to_vec(&TitanEmbedRequest { input_text: text })
            .map_err(|err| EmbeddingProviderError::Request(err.to_string()))?;

        let output = self
            .client()
            .await
            .invoke_model()
            .model_id(&self.model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|err| {
                if err
                    .as_service_error()
                    .is_some_and(InvokeModelError::is_throttling_exception)
                {
                    EmbeddingError::RateLimited { retry_after: None }
                } else {
                    EmbeddingError::Provider(DisplayErrorContext(&err).to_string())
                }
            })?;

        let response: TitanEmbedResponse = serde_json::from_slice(output.body().as_ref())
            .map_err(|err| EmbeddingProviderError::InvalidResponse(err.to_string()))?;

        if response.embedding.len() != self.dimension {
            return Err(EmbeddingProviderError::InvalidResponse(format!(
                "expected embedding dimension {}, got {}",
                self.dimension,
                response.embedding.len()
            ))
            .into());
        }

        tracing::debug!(model_id = %self.model_id, chars = text.len(), "embedded query via bedrock");
        Ok(response.embedding)
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let mut out = Vec::with_capacity(texts.len());
        for text in texts {
            out.push(self.embed(text).await?);
        }
        Ok(out)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titan_request_uses_the_documented_field_name() {
        let body = serde_json::to_string(&TitanEmbedRequest {
            input_text: "How much money does a player start with?",
        })
        .unwrap();
        assert_eq!(
            body,
            r#"{"inputText":"How much money does a player start with?"}"#
        );
    }

    #[test]
    fn titan_response_parses_the_embedding_array() {
        let parsed: TitanEmbedResponse =
            serde_json::from_str(r#"{"embedding":[0.25,-0.5],"inputTextTokenCount":9}"#).unwrap();
        assert_eq!(parsed.embedding, vec![0.25, -0.5]);
    }
}
