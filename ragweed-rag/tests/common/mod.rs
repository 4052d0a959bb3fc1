#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use ragweed_core::{
    Document, Embedding, EmbeddingError, GenerationError, Llm, SearchResult, StoreError, Value,
    VectorStore,
};
use ragweed_rag::{PhaseObserver, QueryPhase};

/// Embeds everything to the same vector; retrieval order is then decided
/// entirely by the store fixture.
pub struct StubEmbedder;

#[async_trait]
impl Embedding for StubEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(vec![0.5, 0.5, 0.5, 0.5])
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        Ok(texts.iter().map(|_| vec![0.5, 0.5, 0.5, 0.5]).collect())
    }

    fn dimension(&self) -> usize {
        4
    }
}

/// Serves a pre-canned result list, truncated to the requested k.
pub struct StaticStore {
    pub results: Vec<SearchResult>,
}

#[async_trait]
impl VectorStore for StaticStore {
    async fn search(
        &self,
        _query_embedding: &[f32],
        top_k: usize,
    ) -> Result<Vec<SearchResult>, StoreError> {
        Ok(self.results.iter().take(top_k).cloned().collect())
    }
}

/// Replies with a fixed completion and records every prompt it was sent.
pub struct ScriptedLlm {
    pub reply: String,
    pub prompts: Mutex<Vec<String>>,
}

impl ScriptedLlm {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn last_prompt(&self) -> String {
        self.prompts.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

#[async_trait]
impl Llm for ScriptedLlm {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.reply.clone())
    }
}

pub struct RecordingObserver {
    pub phases: Mutex<Vec<QueryPhase>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self {
            phases: Mutex::new(Vec::new()),
        }
    }
}

impl PhaseObserver for RecordingObserver {
    fn on_phase(&self, phase: QueryPhase) {
        self.phases.lock().unwrap().push(phase);
    }
}

pub fn chunk(id: Option<&str>, content: &str, score: f32) -> SearchResult {
    let mut metadata: HashMap<String, Value> = HashMap::new();
    if let Some(id) = id {
        metadata.insert("id".to_string(), json!(id));
    }
    SearchResult {
        document: Document {
            content: content.to_string(),
            metadata,
            embedding: None,
        },
        score,
    }
}
