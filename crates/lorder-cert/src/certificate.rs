use std::fs;
use std::path::Path;

use lorder_core::{Claim, ErrorInfo, LoError, Presentation, RunProvenance};
use serde::{Deserialize, Serialize};

use crate::digest::{content_digest, read_json};

/// Serialized non-orderability proof.
///
/// ```json
/// {"name": "weeks", "gens": "a.b", "rels": ["ababaBaaB", "ababAbbAb"],
///  "proof": [["a.b.aB", "a.b.a.b.aB.a.aB"], ...], "group_args": [1, 1, 1]}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    /// Group name.
    pub name: String,
    /// Dot-joined generators.
    pub gens: String,
    /// Relators of the presentation.
    pub rels: Vec<String>,
    /// One claim per leaf of the proof tree, in depth-first order.
    pub proof: Vec<Claim>,
    /// Construction arguments of the group representation.
    #[serde(default)]
    pub group_args: Vec<serde_json::Value>,
    /// Where and how the certificate was produced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provenance: Option<RunProvenance>,
}

fn io_error(code: &str, err: impl ToString, path: &Path) -> LoError {
    LoError::Serde(
        ErrorInfo::new(code, err.to_string()).with_context("path", path.display().to_string()),
    )
}

impl Certificate {
    /// Packs claims produced for `presentation`.
    pub fn new(
        name: impl Into<String>,
        presentation: &Presentation,
        proof: Vec<Claim>,
        group_args: Vec<serde_json::Value>,
    ) -> Self {
        Self {
            name: name.into(),
            gens: presentation.generators_dotted(),
            rels: presentation
                .relators()
                .iter()
                .map(|word| word.as_str().to_string())
                .collect(),
            proof,
            group_args,
            provenance: None,
        }
    }

    /// Attaches run provenance.
    pub fn with_provenance(mut self, provenance: RunProvenance) -> Self {
        self.provenance = Some(provenance);
        self
    }

    /// Parses the presentation and checks every claim token against its alphabet.
    pub fn presentation(&self) -> Result<Presentation, LoError> {
        let presentation = Presentation::parse(&self.gens, &self.rels)?;
        for claim in &self.proof {
            for word in claim.path.iter().chain(&claim.trivial) {
                presentation.check_word(word).map_err(|err| {
                    LoError::Certificate(
                        err.info()
                            .clone()
                            .with_context("path", claim.path_dotted()),
                    )
                })?;
            }
        }
        Ok(presentation)
    }

    /// Pretty JSON text.
    pub fn to_json(&self) -> Result<String, LoError> {
        serde_json::to_string_pretty(self)
            .map_err(|err| LoError::Serde(ErrorInfo::new("cert-serialize", err.to_string())))
    }

    /// Parses JSON text.
    pub fn from_json(text: &str) -> Result<Self, LoError> {
        read_json(text.as_bytes())
    }

    /// SHA-256 of the canonical JSON form, ignoring provenance.
    pub fn content_hash(&self) -> Result<String, LoError> {
        let mut bare = self.clone();
        bare.provenance = None;
        content_digest(&bare)
    }

    /// Writes the certificate as pretty JSON, creating parent directories.
    pub fn write(&self, path: &Path) -> Result<(), LoError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| io_error("cert-mkdir", err, parent))?;
        }
        let json = self.to_json()?;
        fs::write(path, json).map_err(|err| io_error("cert-write", err, path))
    }

    /// Loads a certificate from disk.
    pub fn load(path: &Path) -> Result<Self, LoError> {
        let contents = fs::read(path).map_err(|err| io_error("cert-read", err, path))?;
        read_json(&contents)
            .map_err(|err| err.with_context("path", path.display().to_string()))
    }
}
