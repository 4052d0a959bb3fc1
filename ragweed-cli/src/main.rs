use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use ragweed_embeddings::{EmbeddingProvider, EmbeddingSettings};
use ragweed_llm::OllamaGenerator;
use ragweed_rag::{PhaseObserver, QueryPhase, RagConfig, RagPipeline};
use ragweed_retrieval::ChunkCollection;

/// Ask a question against the local chunk collection.
#[derive(Parser)]
#[command(name = "ragweed", version)]
struct Cli {
    /// The query text.
    query_text: String,
}

struct SpinnerObserver {
    bar: ProgressBar,
}

impl PhaseObserver for SpinnerObserver {
    fn on_phase(&self, phase: QueryPhase) {
        match phase {
            QueryPhase::Done => self.bar.finish_and_clear(),
            other => self.bar.set_message(format!("{}...", other.label())),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = RagConfig::default();

    let bar = ProgressBar::new_spinner();
    bar.set_style(ProgressStyle::with_template("{spinner:.blue} {msg}")?);
    bar.enable_steady_tick(Duration::from_millis(80));
    bar.set_message("processing query...");
    let observer = Arc::new(SpinnerObserver { bar });

    observer.on_phase(QueryPhase::InitializingStore);
    let provider: EmbeddingProvider = config.embedding_provider.parse()?;
    let embedder = provider.connect(&EmbeddingSettings::default());
    let collection = ChunkCollection::open(&config.collection_path)?;
    let generator = OllamaGenerator::new(
        config.ollama_base_url.clone(),
        config.generation_model.clone(),
    )?;

    let pipeline = RagPipeline::builder()
        .with_embedder(embedder)
        .with_store(collection)
        .with_llm(generator)
        .with_observer(observer)
        .with_top_k(config.top_k)
        .build()?;

    let response = pipeline.query(&cli.query_text).await?;

    println!("\n{}", "Response:".green().bold());
    println!("{}", response.answer.trim());
    println!("{}", "Sources:".green().bold());
    for source in &response.sources {
        match source {
            Some(id) => println!("- {id}"),
            None => println!("- {}", "(no id)".dimmed()),
        }
    }

    Ok(())
}
