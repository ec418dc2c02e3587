//! Contradiction claims shared by the order search and the certificate checker.

use serde::{Deserialize, Serialize};

use crate::errors::LoError;
use crate::word::{join_dotted, parse_dotted, product_of, Word};

/// One leaf of a non-orderability proof.
///
/// `path` lists the words chosen positive from the root of the search down to
/// this leaf. `trivial` lists path words whose product is the identity, so the
/// positive cone spanned by the path would contain the identity.
///
/// Serialized as a two-element array of dot-joined token lists, for example
/// `["a.b.aB", "a.b.a.b.aB.a.aB"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(String, String)", into = "(String, String)")]
pub struct Claim {
    /// Words chosen along the branch, seed first.
    pub path: Vec<Word>,
    /// Tokens drawn from `path` that multiply to the identity.
    pub trivial: Vec<Word>,
}

impl Claim {
    /// Creates a claim from already parsed words.
    pub fn new(path: Vec<Word>, trivial: Vec<Word>) -> Self {
        Self { path, trivial }
    }

    /// Parses a claim from its two dot-joined token lists.
    pub fn parse(path: &str, trivial: &str) -> Result<Self, LoError> {
        let path = parse_dotted(path).map_err(|err| claim_error(err, "path", path))?;
        let trivial = parse_dotted(trivial).map_err(|err| claim_error(err, "trivial", trivial))?;
        Ok(Self { path, trivial })
    }

    /// Dot-joined path tokens.
    pub fn path_dotted(&self) -> String {
        join_dotted(&self.path)
    }

    /// Dot-joined trivial tokens.
    pub fn trivial_dotted(&self) -> String {
        join_dotted(&self.trivial)
    }

    /// Freely reduced product of the trivial tokens.
    pub fn trivial_product(&self) -> Word {
        product_of(&self.trivial)
    }

    /// Total letter count of the trivial tokens before reduction.
    pub fn trivial_len(&self) -> usize {
        self.trivial.iter().map(Word::len).sum()
    }
}

fn claim_error(err: LoError, field: &str, text: &str) -> LoError {
    LoError::Certificate(
        err.info()
            .clone()
            .with_context("field", field)
            .with_context("tokens", text),
    )
}

impl TryFrom<(String, String)> for Claim {
    type Error = LoError;

    fn try_from((path, trivial): (String, String)) -> Result<Self, Self::Error> {
        Self::parse(&path, &trivial)
    }
}

impl From<Claim> for (String, String) {
    fn from(claim: Claim) -> Self {
        (claim.path_dotted(), claim.trivial_dotted())
    }
}
