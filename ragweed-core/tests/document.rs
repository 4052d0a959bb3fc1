use std::collections::HashMap;

use serde_json::json;

use ragweed_core::Document;

#[test]
fn source_id_reads_string_metadata() {
    let mut doc = Document::new("Each player receives $1500.");
    doc.metadata
        .insert("id".to_string(), json!("data/monopoly.pdf:2:1"));

    assert_eq!(doc.source_id(), Some("data/monopoly.pdf:2:1"));
}

#[test]
fn source_id_absent_when_metadata_has_no_id() {
    let doc = Document::new("orphan chunk");
    assert_eq!(doc.source_id(), None);
}

#[test]
fn source_id_absent_when_id_is_not_a_string() {
    let mut doc = Document::new("chunk");
    doc.metadata.insert("id".to_string(), json!(42));
    assert_eq!(doc.source_id(), None);
}

#[test]
fn document_round_trips_through_json() {
    let doc = Document {
        content: "The longest continuous train earns 10 points.".to_string(),
        metadata: HashMap::from([
            ("id".to_string(), json!("data/ticket_to_ride.pdf:0:3")),
            ("page".to_string(), json!(4)),
        ]),
        embedding: Some(vec![0.1, 0.2, 0.3]),
    };

    let encoded = serde_json::to_string(&doc).unwrap();
    let decoded: Document = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, doc);
}

#[test]
fn embedding_and_metadata_are_optional_on_the_wire() {
    let decoded: Document = serde_json::from_str(r#"{"content":"bare chunk"}"#).unwrap();
    assert_eq!(decoded.content, "bare chunk");
    assert!(decoded.metadata.is_empty());
    assert!(decoded.embedding.is_none());
}
