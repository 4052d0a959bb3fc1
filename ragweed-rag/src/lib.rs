mod config;
mod eval;
mod observer;
mod pipeline;

pub use config::RagConfig;
pub use eval::{evaluate, judge_match, EVAL_PROMPT_TEMPLATE};
pub use observer::{PhaseObserver, QueryPhase};
pub use pipeline::{
    assemble_prompt, RagPipeline, RagPipelineBuilder, RagResponse, CONTEXT_DELIMITER,
    PROMPT_TEMPLATE,
};

use thiserror::Error;

use ragweed_core::GenerationError;
use ragweed_prompt::TemplateError;
use ragweed_retrieval::RetrievalError;

#[derive(Debug, Error)]
pub enum RagError {
    #[error("pipeline misconfigured: missing {0}")]
    Misconfigured(&'static str),
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error("evaluation judgment is neither 'true' nor 'false': {output}")]
    AmbiguousJudgment { output: String },
}
