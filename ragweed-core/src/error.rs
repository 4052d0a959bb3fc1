use std::error::Error as StdError;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Failure while turning text into a vector. Fatal; nothing here retries.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding invalid response: {0}")]
    InvalidResponse(String),
    #[error("embedding rate limited (retry_after={retry_after:?})")]
    RateLimited { retry_after: Option<Duration> },
    #[error("embedding provider error: {0}")]
    Provider(String),
    #[error("embedding error: {0}")]
    Other(#[source] Box<dyn StdError + Send + Sync>),
}

/// Failure opening or querying the chunk collection. Fatal.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("chunk collection unavailable at '{path}': {reason}")]
    Unavailable { path: PathBuf, reason: String },
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
    #[error("store error: {0}")]
    Internal(#[source] Box<dyn StdError + Send + Sync>),
}

/// Failure from the model endpoint during completion. Fatal; no retry, no
/// timeout handling beyond the client's own, no fallback model.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation request failed: {0}")]
    Request(String),
    #[error("generation endpoint returned an invalid response: {0}")]
    InvalidResponse(String),
}
