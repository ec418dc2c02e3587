//! The element oracle contract consumed by the ball builder, the searches and the verifier.

use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, LoError};
use crate::word::Word;

/// Three-valued answer to "is this word the identity" at a fixed precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    /// The word evaluates to the identity within the oracle's error bound.
    Trivial,
    /// The word is provably not the identity.
    Nontrivial,
    /// The precision is not enough to tell.
    Indeterminate,
}

impl Verdict {
    /// Returns whether the verdict is [`Verdict::Trivial`].
    pub fn is_trivial(self) -> bool {
        matches!(self, Verdict::Trivial)
    }

    /// Returns whether the verdict is [`Verdict::Nontrivial`].
    pub fn is_nontrivial(self) -> bool {
        matches!(self, Verdict::Nontrivial)
    }
}

/// Numeric model of a group: words map to comparable elements.
///
/// Implementations own the numeric representation; the combinatorial code
/// only multiplies, inverts and compares what the oracle hands back.
/// `class_key` must agree with `equal`: whenever `equal(a, b)` holds, the key
/// of `b` is among the [`GroupOracle::neighbour_keys`] of the key of `a`, so
/// keys can bucket elements before the finer `equal` comparison.
pub trait GroupOracle {
    /// Numeric group element.
    type Element: Clone + Debug;
    /// Hashable bucket key for elements.
    type Key: Clone + Debug + Eq + Hash;

    /// Generator letters understood by the oracle, in presentation order.
    fn generators(&self) -> &[char];

    /// Defining relators, when the oracle models a finite presentation.
    ///
    /// Oracles built for a known group without one keep the default.
    fn relators(&self) -> Option<&[Word]> {
        None
    }

    /// Working precision in bits.
    fn precision(&self) -> u32;

    /// Returns the same oracle working at a different precision.
    fn with_precision(&self, bits: u32) -> Self
    where
        Self: Sized;

    /// Element for a single generator letter or its inverse.
    fn letter(&self, letter: char) -> Result<Self::Element, LoError>;

    /// The identity element.
    fn identity(&self) -> Self::Element;

    /// Group product `a * b`.
    fn multiply(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// Group inverse.
    fn inverse(&self, a: &Self::Element) -> Self::Element;

    /// Whether `a` equals the identity up to the element tolerance.
    fn is_identity(&self, a: &Self::Element) -> bool;

    /// Whether two elements are equal up to the element tolerance.
    fn equal(&self, a: &Self::Element, b: &Self::Element) -> bool;

    /// Bucket key used to look elements up before calling [`GroupOracle::equal`].
    fn class_key(&self, a: &Self::Element) -> Self::Key;

    /// Keys whose buckets may hold elements equal to one keyed by `key`.
    ///
    /// Exact oracles key by a normal form and keep the default. Tolerance
    /// based oracles return the adjacent cells too, since two elements within
    /// the tolerance can straddle a cell boundary.
    fn neighbour_keys(&self, key: &Self::Key) -> Vec<Self::Key> {
        vec![key.clone()]
    }

    /// Word problem at the oracle's precision.
    fn decide(&self, word: &Word) -> Result<Verdict, LoError>;

    /// Maps a word to its element by multiplying letter elements left to right.
    fn represent(&self, word: &Word) -> Result<Self::Element, LoError> {
        let mut element = self.identity();
        for letter in word.letters() {
            let factor = self.letter(letter)?;
            element = self.multiply(&element, &factor);
        }
        Ok(element)
    }
}

/// Error returned by oracles asked about a letter they do not know.
pub fn unknown_letter(letter: char) -> LoError {
    LoError::Oracle(
        ErrorInfo::new("oracle-letter", "letter is not a generator of the group")
            .with_context("letter", letter.to_string()),
    )
}
