use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use ragweed_core::{GenerationError, Llm};

/// Completion client for a locally hosted Ollama daemon.
///
/// One prompt in, one full completion out. Generation against a local model
/// can be slow, hence the generous request timeout.
#[derive(Clone)]
pub struct OllamaGenerator {
    base_url: String,
    model: String,
    http: Client,
}

impl OllamaGenerator {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, GenerationError> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(|err| GenerationError::Request(err.to_string()))?;
        Ok(Self {
            base_url: base_url.into(),
            model: model.into(),
            http,
        })
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Serialize)]
struct OllamaGenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct OllamaGenerateResponse {
    response: String,
    #[serde(default)]
    done: bool,
}

#[async_trait]
impl Llm for OllamaGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let request = OllamaGenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let response = self
            .http
            .post(self.generate_url())
            .json(&request)
            .send()
            .await
            .map_err(|err| GenerationError::Request(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Request(format!("HTTP {status}: {body}")));
        }

        let response: OllamaGenerateResponse = response
            .json()
            .await
            .map_err(|err| GenerationError::InvalidResponse(err.to_string()))?;

        // A non-streaming request must come back in one finished piece.
        if !response.done {
            return Err(GenerationError::InvalidResponse(
                "generation did not run to completion".to_string(),
            ));
        }

        tracing::debug!(
            model = %self.model,
            prompt_chars = prompt.len(),
            completion_chars = response.response.len(),
            "ollama generation finished"
        );
        Ok(response.response)
    }
}
