//! Where a certificate came from: schema, input and run parameters.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Version of the certificate layout, `major.minor.patch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SchemaVersion {
    /// Bumped when old readers can no longer parse the layout.
    pub major: u32,
    /// Bumped for additive fields.
    pub minor: u32,
    /// Bumped for fixes that do not change the layout.
    pub patch: u32,
}

/// Layout written by this version of the tools.
pub const CERTIFICATE_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

impl SchemaVersion {
    /// Creates a version.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Readers accept any layout with the same major version.
    pub fn is_compatible(&self, other: &SchemaVersion) -> bool {
        self.major == other.major
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        CERTIFICATE_SCHEMA
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl TryFrom<String> for SchemaVersion {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let parts = value
            .split('.')
            .map(|part| part.parse::<u32>().map_err(|err| format!("{value}: {err}")))
            .collect::<Result<Vec<_>, _>>()?;
        match parts.as_slice() {
            [major, minor, patch] => Ok(Self::new(*major, *minor, *patch)),
            _ => Err(format!("{value}: expected major.minor.patch")),
        }
    }
}

impl From<SchemaVersion> for String {
    fn from(version: SchemaVersion) -> Self {
        version.to_string()
    }
}

/// Run parameters recorded next to a generated certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RunProvenance {
    /// Layout version of the enclosing artefact.
    #[serde(default)]
    pub schema: SchemaVersion,
    /// SHA-256 of the representation the oracle was built from.
    pub input_hash: String,
    /// Ball radius of the search.
    pub radius: usize,
    /// Oracle precision of the search, in bits.
    pub precision_bits: u32,
    /// RFC 3339 timestamp.
    pub created_at: String,
    /// Tool name to version.
    #[serde(default)]
    pub tool_versions: BTreeMap<String, String>,
}

impl RunProvenance {
    /// Records a search run at the current schema.
    pub fn new(
        input_hash: impl Into<String>,
        radius: usize,
        precision_bits: u32,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            schema: CERTIFICATE_SCHEMA,
            input_hash: input_hash.into(),
            radius,
            precision_bits,
            created_at: created_at.into(),
            tool_versions: BTreeMap::new(),
        }
    }

    /// Adds a tool version entry.
    pub fn with_tool(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.tool_versions.insert(name.into(), version.into());
        self
    }
}
