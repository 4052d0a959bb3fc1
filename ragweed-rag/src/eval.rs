use std::collections::HashMap;

use ragweed_core::{Llm, Value};
use ragweed_prompt::PromptTemplate;

use crate::{RagError, RagPipeline};

pub const EVAL_PROMPT_TEMPLATE: &str = "
Expected Response: {{expected_response}}
Actual Response: {{actual_response}}
---
(Answer with 'true' or 'false') Does the actual response match the expected response?
";

/// Runs the full pipeline for `question`, then asks `judge` whether the
/// actual answer matches `expected_response`. Test support, not part of the
/// production query path.
pub async fn evaluate(
    pipeline: &RagPipeline,
    judge: &dyn Llm,
    question: &str,
    expected_response: &str,
) -> Result<bool, RagError> {
    let response = pipeline.query(question).await?;
    judge_match(judge, expected_response, &response.answer).await
}

/// Parses the judgment case-insensitively for the literal words "true" and
/// "false". "true" is checked first, so a judgment pathologically
/// containing both reads as a match; models should answer with exactly one
/// of the two words. A judgment containing neither is fatal.
pub async fn judge_match(
    judge: &dyn Llm,
    expected: &str,
    actual: &str,
) -> Result<bool, RagError> {
    let vars = HashMap::from([
        (
            "expected_response".to_string(),
            Value::String(expected.to_string()),
        ),
        (
            "actual_response".to_string(),
            Value::String(actual.to_string()),
        ),
    ]);
    let prompt = PromptTemplate::new(EVAL_PROMPT_TEMPLATE).render(&vars)?;

    let judgment = judge.generate(&prompt).await?;
    let cleaned = judgment.trim().to_lowercase();
    if cleaned.contains("true") {
        tracing::debug!(judgment = %cleaned, "evaluation judged a match");
        Ok(true)
    } else if cleaned.contains("false") {
        tracing::debug!(judgment = %cleaned, "evaluation judged a mismatch");
        Ok(false)
    } else {
        Err(RagError::AmbiguousJudgment { output: judgment })
    }
}
