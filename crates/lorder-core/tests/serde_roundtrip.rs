use lorder_core::{
    Presentation, RunProvenance, SchemaVersion, Verdict, Word, CERTIFICATE_SCHEMA,
};

#[test]
fn words_serialize_as_plain_strings() {
    let word = Word::parse("abAB").expect("word");
    let json = serde_json::to_string(&word).expect("serialize");
    assert_eq!(json, "\"abAB\"");
    let decoded: Word = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, word);
}

#[test]
fn unreduced_words_are_rejected_on_deserialize() {
    let result: Result<Word, _> = serde_json::from_str("\"aA\"");
    assert!(result.is_err());
}

#[test]
fn presentation_round_trip_json() {
    let presentation = Presentation::parse(
        "a.b",
        &["ababaBaaB".to_string(), "ababAbbAb".to_string()],
    )
    .expect("presentation");
    let json = serde_json::to_string_pretty(&presentation).expect("serialize");
    let decoded: Presentation = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, presentation);
    assert_eq!(decoded.generators_dotted(), "a.b");
    assert_eq!(decoded.letters(), vec!['a', 'b', 'A', 'B']);
}

#[test]
fn provenance_round_trip_json() {
    let provenance = RunProvenance::new("rep", 3, 52, "2024-01-01T00:00:00Z")
        .with_tool("lorder-core", "0.1.0");
    let json = serde_json::to_value(&provenance).expect("serialize");
    assert_eq!(json["schema"], "1.0.0");
    let decoded: RunProvenance = serde_json::from_value(json).expect("deserialize");
    assert_eq!(decoded, provenance);
    assert!(decoded.schema.is_compatible(&SchemaVersion::new(1, 4, 0)));
    assert!(!decoded.schema.is_compatible(&SchemaVersion::new(2, 0, 0)));
}

#[test]
fn provenance_without_schema_defaults_to_current() {
    let json = r#"{"input_hash": "x", "radius": 2, "precision_bits": 53, "created_at": ""}"#;
    let decoded: RunProvenance = serde_json::from_str(json).expect("deserialize");
    assert_eq!(decoded.schema, CERTIFICATE_SCHEMA);
    assert!(decoded.tool_versions.is_empty());
}

#[test]
fn malformed_schema_version_is_rejected() {
    assert!(serde_json::from_str::<SchemaVersion>("\"1.0\"").is_err());
    assert!(serde_json::from_str::<SchemaVersion>("\"1.x.0\"").is_err());
}

#[test]
fn verdicts_use_kebab_case() {
    let json = serde_json::to_string(&Verdict::Indeterminate).expect("serialize");
    assert_eq!(json, "\"indeterminate\"");
}
