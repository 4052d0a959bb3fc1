use ragweed_core::Embedding;
use ragweed_embeddings::{EmbeddingProvider, EmbeddingSettings, SelectProviderError};

#[test]
fn recognizes_the_two_supported_providers() {
    assert_eq!(
        "Ollama".parse::<EmbeddingProvider>().unwrap(),
        EmbeddingProvider::Ollama
    );
    assert_eq!(
        "Bedrock".parse::<EmbeddingProvider>().unwrap(),
        EmbeddingProvider::Bedrock
    );
}

#[test]
fn unsupported_provider_fails_with_the_offending_name() {
    let err = "OpenAI".parse::<EmbeddingProvider>().unwrap_err();
    let SelectProviderError::Unsupported { name } = &err;
    assert_eq!(name, "OpenAI");
    assert!(err.to_string().contains("OpenAI"));
}

#[test]
fn provider_names_are_matched_exactly() {
    // Config values are opaque strings; "ollama" is not "Ollama".
    assert!("ollama".parse::<EmbeddingProvider>().is_err());
    assert!("".parse::<EmbeddingProvider>().is_err());
}

#[test]
fn connect_builds_a_client_without_touching_the_network() {
    let settings = EmbeddingSettings::default();

    let ollama = EmbeddingProvider::Ollama.connect(&settings);
    assert_eq!(ollama.dimension(), settings.ollama_dimension);

    let bedrock = EmbeddingProvider::Bedrock.connect(&settings);
    assert_eq!(bedrock.dimension(), settings.bedrock_dimension);
}
