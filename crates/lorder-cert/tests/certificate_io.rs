mod common;

use common::{weeks_certificate, weeks_claims};
use lorder_cert::{content_digest, Certificate};
use lorder_core::{LoError, RunProvenance};
use tempfile::tempdir;

const WEEKS_JSON: &str = r#"{
  "name": "weeks",
  "gens": "a.b",
  "rels": ["ababaBaaB", "ababAbbAb"],
  "proof": [
    ["a.b.aB", "a.b.a.b.aB.a.aB"],
    ["a.b.bA", "b.a.b.a.bA.b.bA"],
    ["a.B", "B.a.B.B.a.a.B.a.a.B"]
  ],
  "group_args": [1, 1, 1]
}"#;

fn provenance() -> RunProvenance {
    RunProvenance::new("abc", 3, 53, "2026-01-01T00:00:00Z").with_tool("lorder", "0.1.0")
}

#[test]
fn parses_the_published_layout() -> Result<(), LoError> {
    let parsed = Certificate::from_json(WEEKS_JSON)?;
    assert_eq!(parsed, weeks_certificate(weeks_claims())?);
    assert_eq!(parsed.proof[2].trivial_len(), 10);
    Ok(())
}

#[test]
fn json_text_round_trips() -> Result<(), LoError> {
    let certificate = weeks_certificate(weeks_claims())?.with_provenance(provenance());
    let text = certificate.to_json()?;
    assert!(text.contains("\"a.b.aB\""));
    assert_eq!(Certificate::from_json(&text)?, certificate);
    Ok(())
}

#[test]
fn write_creates_directories_and_load_reads_back() -> Result<(), LoError> {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("weeks.json");
    let certificate = weeks_certificate(weeks_claims())?;
    certificate.write(&path)?;
    assert_eq!(Certificate::load(&path)?, certificate);
    Ok(())
}

#[test]
fn missing_file_reports_path() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("absent.json");
    let err = Certificate::load(&path).unwrap_err();
    assert_eq!(err.info().code, "cert-read");
    assert!(err.info().context.contains_key("path"));
}

#[test]
fn malformed_claim_is_rejected_on_load() {
    let text = WEEKS_JSON.replace("\"a.b.aB\", \"a.b.a.b.aB.a.aB\"", "\"a.b.aA\", \"a\"");
    let err = Certificate::from_json(&text).unwrap_err();
    assert_eq!(err.info().code, "json-read");
}

#[test]
fn content_hash_ignores_provenance() -> Result<(), LoError> {
    let bare = weeks_certificate(weeks_claims())?;
    let stamped = bare.clone().with_provenance(provenance());
    assert_eq!(bare.content_hash()?, stamped.content_hash()?);
    assert_eq!(bare.content_hash()?.len(), 64);
    assert_eq!(bare.content_hash()?, content_digest(&bare)?);

    let mut renamed = bare.clone();
    renamed.name = "weeks-copy".to_string();
    assert_ne!(bare.content_hash()?, renamed.content_hash()?);
    Ok(())
}

#[test]
fn unknown_claim_letters_fail_presentation_check() -> Result<(), LoError> {
    let mut certificate = weeks_certificate(weeks_claims())?;
    certificate.proof[0].trivial[0] = lorder_core::Word::parse("c")?;
    let err = certificate.presentation().unwrap_err();
    assert_eq!(err.info().code, "word-alphabet");
    Ok(())
}
