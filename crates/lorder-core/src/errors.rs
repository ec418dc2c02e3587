//! Error payloads and the error family enum used by every lorder crate.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Code, message and structured context of a failure.
///
/// Codes are stable kebab-case identifiers prefixed by the area that raised
/// them (`word-letter`, `ball-precision`, `cert-read`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable code.
    pub code: String,
    /// Human readable message.
    pub message: String,
    /// Words, sizes, precisions and paths involved.
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// What the caller can change to make the error go away.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a payload without context.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds or replaces a context entry.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets the hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if !self.context.is_empty() {
            let pairs: Vec<String> = self
                .context
                .iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect();
            write!(f, " ({})", pairs.join(", "))?;
        }
        if let Some(hint) = &self.hint {
            write!(f, "; hint: {hint}")?;
        }
        Ok(())
    }
}

/// Error family raised by the lorder pipeline.
///
/// Outcomes such as "not orderable" or "inconclusive" are values, never
/// errors; an `LoError` means the input or the numerics were unusable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum LoError {
    /// Malformed words or presentations.
    #[error("word: {0}")]
    Word(ErrorInfo),
    /// Failures reported by an element oracle.
    #[error("oracle: {0}")]
    Oracle(ErrorInfo),
    /// Cayley ball construction.
    #[error("ball: {0}")]
    Ball(ErrorInfo),
    /// Order and torsion searches.
    #[error("search: {0}")]
    Search(ErrorInfo),
    /// Certificate contents.
    #[error("certificate: {0}")]
    Certificate(ErrorInfo),
    /// Invalid configuration values.
    #[error("config: {0}")]
    Config(ErrorInfo),
    /// Reading, writing and (de)serializing files.
    #[error("serde: {0}")]
    Serde(ErrorInfo),
}

/// Suffix of every code meaning "the oracle precision was not enough".
pub const PRECISION_CODE_SUFFIX: &str = "-precision";

impl LoError {
    /// Payload of the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            LoError::Word(info)
            | LoError::Oracle(info)
            | LoError::Ball(info)
            | LoError::Search(info)
            | LoError::Certificate(info)
            | LoError::Config(info)
            | LoError::Serde(info) => info,
        }
    }

    fn info_mut(&mut self) -> &mut ErrorInfo {
        match self {
            LoError::Word(info)
            | LoError::Oracle(info)
            | LoError::Ball(info)
            | LoError::Search(info)
            | LoError::Certificate(info)
            | LoError::Config(info)
            | LoError::Serde(info) => info,
        }
    }

    /// Stable code of the error.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Adds a context entry without changing the family.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.info_mut().context.insert(key.into(), value.into());
        self
    }

    /// Whether retrying at a higher oracle precision could clear the error.
    pub fn is_precision_limited(&self) -> bool {
        self.code().ends_with(PRECISION_CODE_SUFFIX)
    }
}
