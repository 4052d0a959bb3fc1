use std::path::PathBuf;

use ragweed_core::{GenerationError, StoreError};

#[test]
fn unavailable_store_names_the_offending_path() {
    let err = StoreError::Unavailable {
        path: PathBuf::from("chroma"),
        reason: "No such file or directory".to_string(),
    };

    let message = err.to_string();
    assert!(message.contains("chroma"));
    assert!(message.contains("No such file or directory"));
}

#[test]
fn dimension_mismatch_reports_both_sizes() {
    let err = StoreError::DimensionMismatch {
        expected: 1024,
        got: 768,
    };
    assert_eq!(err.to_string(), "dimension mismatch: expected 1024, got 768");
}

#[test]
fn generation_errors_carry_the_endpoint_failure() {
    let err = GenerationError::Request("connection refused".to_string());
    assert!(err.to_string().contains("connection refused"));
}
