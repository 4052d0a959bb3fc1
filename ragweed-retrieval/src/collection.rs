use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use ragweed_core::{Document, SearchResult, StoreError, VectorStore};

/// A persisted chunk collection, opened read-only from a single file of
/// line-delimited JSON records written by the ingestion pipeline.
///
/// Each line is one [`Document`] with its stored embedding. The whole
/// collection is loaded up front; a query never touches the file again.
#[derive(Debug)]
pub struct ChunkCollection {
    path: PathBuf,
    documents: Vec<Document>,
    embeddings: Vec<Vec<f32>>,
    dimension: Option<usize>,
}

impl ChunkCollection {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|err| unavailable(&path, err.to_string()))?;
        let reader = BufReader::new(file);

        let mut documents = Vec::new();
        let mut embeddings = Vec::new();
        let mut dimension: Option<usize> = None;

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|err| unavailable(&path, err.to_string()))?;
            if line.trim().is_empty() {
                continue;
            }

            let mut document: Document = serde_json::from_str(&line)
                .map_err(|err| unavailable(&path, format!("record {}: {err}", index + 1)))?;
            let embedding = document.embedding.take().ok_or_else(|| {
                unavailable(&path, format!("record {}: no stored embedding", index + 1))
            })?;

            match dimension {
                Some(expected) if expected != embedding.len() => {
                    return Err(StoreError::DimensionMismatch {
                        expected,
                        got: embedding.len(),
                    });
                }
                None => dimension = Some(embedding.len()),
                _ => {}
            }

            documents.push(document);
            embeddings.push(embedding);
        }

        tracing::debug!(
            path = %path.display(),
            records = documents.len(),
            "opened chunk collection"
        );

        Ok(Self {
            path,
            documents,
            embeddings,
            dimension,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait::async_trait]
impl VectorStore for ChunkCollection {
    async fn search(
        &self,
        query_embedding: &[f32],
        top_k: usize,
    ) -> Result<Vec<SearchResult>, StoreError> {
        if top_k == 0 || self.documents.is_empty() {
            return Ok(Vec::new());
        }

        let expected = self.dimension.unwrap_or(query_embedding.len());
        if expected != query_embedding.len() {
            return Err(StoreError::DimensionMismatch {
                expected,
                got: query_embedding.len(),
            });
        }

        let mut scored = Vec::with_capacity(self.documents.len());
        for (document, embedding) in self.documents.iter().zip(self.embeddings.iter()) {
            let mut score = cosine_similarity(query_embedding, embedding);
            if score.is_nan() {
                score = f32::NEG_INFINITY;
            }
            scored.push(SearchResult {
                document: document.clone(),
                score,
            });
        }

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap());
        scored.truncate(top_k);
        Ok(scored)
    }
}

fn unavailable(path: &Path, reason: String) -> StoreError {
    StoreError::Unavailable {
        path: path.to_path_buf(),
        reason,
    }
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}
