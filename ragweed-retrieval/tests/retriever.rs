use std::io::Write;

use serde_json::json;
use tempfile::NamedTempFile;

use ragweed_core::Embedding;
use ragweed_retrieval::{ChunkCollection, HashEmbedder, Retriever};

async fn collection_for(
    embedder: &HashEmbedder,
    chunks: &[(&str, &str)],
) -> (NamedTempFile, ChunkCollection) {
    let mut file = NamedTempFile::new().unwrap();
    for (id, content) in chunks {
        let embedding = embedder.embed(content).await.unwrap();
        let line = json!({
            "content": content,
            "metadata": {"id": id},
            "embedding": embedding,
        });
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    let collection = ChunkCollection::open(file.path()).unwrap();
    (file, collection)
}

#[tokio::test]
async fn retrieve_ranks_the_identical_chunk_first() {
    let embedder = HashEmbedder::new(16);
    let (_file, collection) = collection_for(
        &embedder,
        &[
            ("rules:1", "Each player is given $1500 at the start."),
            ("rules:2", "The longest continuous train earns 10 points."),
            ("rules:3", "Players may trade properties at any time."),
        ],
    )
    .await;

    let retriever = Retriever::new(embedder, collection);
    let results = retriever
        .retrieve("The longest continuous train earns 10 points.", 2)
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].document.source_id(), Some("rules:2"));
    assert!((results[0].score - 1.0).abs() < 1e-5);
    assert!(results[0].score >= results[1].score);
}

#[tokio::test]
async fn retrieve_from_empty_collection_is_empty() {
    let embedder = HashEmbedder::new(16);
    let (_file, collection) = collection_for(&embedder, &[]).await;

    let retriever = Retriever::new(embedder, collection);
    let results = retriever.retrieve("anything", 3).await.unwrap();
    assert!(results.is_empty());
}
