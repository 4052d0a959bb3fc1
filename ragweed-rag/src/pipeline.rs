use std::collections::HashMap;
use std::sync::Arc;

use ragweed_core::{Embedding, Llm, SearchResult, Value, VectorStore};
use ragweed_prompt::PromptTemplate;
use ragweed_retrieval::Retriever;

use crate::{PhaseObserver, QueryPhase, RagError};

pub const PROMPT_TEMPLATE: &str = "
Answer the question based only on the following context:

{{context}}

---

Answer the question based only on the above context: {{question}}
";

/// Separator between chunk texts inside the context block.
pub const CONTEXT_DELIMITER: &str = "\n\n---\n\n";

/// The completion plus the ids of the chunks it was conditioned on, in
/// retrieval order. `None` marks a chunk whose metadata carried no `"id"`.
#[derive(Clone, Debug, PartialEq)]
pub struct RagResponse {
    pub answer: String,
    pub sources: Vec<Option<String>>,
}

/// One-shot question answering: embed, search, assemble, generate, report.
///
/// Holds no state between queries; every stage runs to completion before
/// the next begins and every failure is fatal.
pub struct RagPipeline {
    retriever: Retriever<Arc<dyn Embedding>, Arc<dyn VectorStore>>,
    llm: Arc<dyn Llm>,
    observer: Option<Arc<dyn PhaseObserver>>,
    top_k: usize,
}

impl RagPipeline {
    pub fn builder() -> RagPipelineBuilder {
        RagPipelineBuilder::default()
    }

    pub async fn query(&self, question: &str) -> Result<RagResponse, RagError> {
        self.notify(QueryPhase::RetrievingContext);
        let results = self.retriever.retrieve(question, self.top_k).await?;
        for (index, result) in results.iter().enumerate() {
            tracing::debug!(
                context = index + 1,
                score = result.score,
                id = ?result.document.source_id(),
                content = %result.document.content,
                "retrieved chunk"
            );
        }

        let prompt = assemble_prompt(&results, question)?;
        tracing::debug!(prompt = %prompt, "assembled prompt");

        self.notify(QueryPhase::Generating);
        let answer = self.llm.generate(&prompt).await?;

        self.notify(QueryPhase::Done);
        let sources = results
            .iter()
            .map(|result| result.document.source_id().map(str::to_string))
            .collect();
        Ok(RagResponse { answer, sources })
    }

    fn notify(&self, phase: QueryPhase) {
        if let Some(observer) = &self.observer {
            observer.on_phase(phase);
        }
    }
}

/// Renders the fixed template with the chunk texts joined in retrieval
/// order. Pure: identical inputs always yield an identical prompt, and an
/// empty retrieval yields an empty context block rather than an error.
pub fn assemble_prompt(results: &[SearchResult], question: &str) -> Result<String, RagError> {
    let context = results
        .iter()
        .map(|result| result.document.content.as_str())
        .collect::<Vec<_>>()
        .join(CONTEXT_DELIMITER);

    let vars = HashMap::from([
        ("context".to_string(), Value::String(context)),
        ("question".to_string(), Value::String(question.to_string())),
    ]);
    Ok(PromptTemplate::new(PROMPT_TEMPLATE).render(&vars)?)
}

pub struct RagPipelineBuilder {
    embedder: Option<Arc<dyn Embedding>>,
    store: Option<Arc<dyn VectorStore>>,
    llm: Option<Arc<dyn Llm>>,
    observer: Option<Arc<dyn PhaseObserver>>,
    top_k: usize,
}

impl Default for RagPipelineBuilder {
    fn default() -> Self {
        Self {
            embedder: None,
            store: None,
            llm: None,
            observer: None,
            top_k: 3,
        }
    }
}

impl RagPipelineBuilder {
    pub fn with_embedder<T>(mut self, embedder: T) -> Self
    where
        T: Embedding + 'static,
    {
        self.embedder = Some(Arc::new(embedder));
        self
    }

    pub fn with_store<T>(mut self, store: T) -> Self
    where
        T: VectorStore + 'static,
    {
        self.store = Some(Arc::new(store));
        self
    }

    pub fn with_llm<T>(mut self, llm: T) -> Self
    where
        T: Llm + 'static,
    {
        self.llm = Some(Arc::new(llm));
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn PhaseObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        if top_k > 0 {
            self.top_k = top_k;
        }
        self
    }

    pub fn build(self) -> Result<RagPipeline, RagError> {
        let embedder = self.embedder.ok_or(RagError::Misconfigured("embedder"))?;
        let store = self.store.ok_or(RagError::Misconfigured("vector store"))?;
        let llm = self.llm.ok_or(RagError::Misconfigured("llm"))?;

        Ok(RagPipeline {
            retriever: Retriever::new(embedder, store),
            llm,
            observer: self.observer,
            top_k: self.top_k,
        })
    }
}
