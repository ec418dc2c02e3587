//! Canonical JSON and content digests of certificates.

use std::collections::BTreeMap;

use lorder_core::{ErrorInfo, LoError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

fn sorted(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered: BTreeMap<String, Value> =
                map.into_iter().map(|(key, item)| (key, sorted(item))).collect();
            Value::Object(ordered.into_iter().collect::<Map<String, Value>>())
        }
        Value::Array(items) => items.into_iter().map(sorted).collect(),
        other => other,
    }
}

/// Compact JSON with object keys sorted at every level.
pub fn canonical_json<T: Serialize>(value: &T) -> Result<String, LoError> {
    let value = serde_json::to_value(value)
        .map_err(|err| LoError::Serde(ErrorInfo::new("json-encode", err.to_string())))?;
    Ok(sorted(value).to_string())
}

/// Lower-case hex SHA-256 of [`canonical_json`].
pub fn content_digest<T: Serialize>(value: &T) -> Result<String, LoError> {
    let digest = Sha256::digest(canonical_json(value)?.as_bytes());
    Ok(digest.iter().map(|byte| format!("{byte:02x}")).collect())
}

pub(crate) fn read_json<T: DeserializeOwned>(data: &[u8]) -> Result<T, LoError> {
    serde_json::from_slice(data).map_err(|err| {
        LoError::Serde(
            ErrorInfo::new("json-read", err.to_string())
                .with_context("line", err.line().to_string())
                .with_context("column", err.column().to_string()),
        )
    })
}
