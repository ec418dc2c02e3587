//! Exact oracles for small groups with integer normal forms.
//!
//! These groups are decided without rounding, so every [`Verdict`] they
//! return is definite. They serve as reference models for the combinatorial
//! crates: a free abelian group, the Klein bottle group and a finite cyclic
//! group on two generators `a` and `b`.

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, LoError};
use crate::oracle::{unknown_letter, GroupOracle, Verdict};
use crate::word::Word;

/// Group law selector for [`ExactOracle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "order", rename_all = "kebab-case")]
pub enum ExactGroup {
    /// `Z^2` with `a = (1, 0)` and `b = (0, 1)`.
    FreeAbelian,
    /// `Z ⋊ Z` with `(m, n)(m', n') = (m + (-1)^n m', n + n')`,
    /// `b = (1, 0)` and `a = (0, 1)`, so `a b a^-1 = b^-1`.
    KleinBottle,
    /// `Z/n` with `a = 1` and `b = 2`.
    Cyclic(i64),
}

/// Exact integer model of an [`ExactGroup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactOracle {
    group: ExactGroup,
    generators: Vec<char>,
    precision: u32,
}

impl ExactOracle {
    /// Creates an oracle, rejecting cyclic groups of order below two.
    pub fn new(group: ExactGroup) -> Result<Self, LoError> {
        if let ExactGroup::Cyclic(order) = group {
            if order < 2 {
                return Err(LoError::Oracle(
                    ErrorInfo::new("oracle-order", "cyclic group order must be at least 2")
                        .with_context("order", order.to_string()),
                ));
            }
        }
        Ok(Self {
            group,
            generators: vec!['a', 'b'],
            precision: 53,
        })
    }

    /// Group law of this oracle.
    pub fn group(&self) -> ExactGroup {
        self.group
    }

    fn normalize(&self, (m, n): (i64, i64)) -> (i64, i64) {
        match self.group {
            ExactGroup::Cyclic(order) => (m.rem_euclid(order), 0),
            _ => (m, n),
        }
    }
}

fn sign(n: i64) -> i64 {
    if n.rem_euclid(2) == 0 {
        1
    } else {
        -1
    }
}

impl GroupOracle for ExactOracle {
    type Element = (i64, i64);
    type Key = (i64, i64);

    fn generators(&self) -> &[char] {
        &self.generators
    }

    fn precision(&self) -> u32 {
        self.precision
    }

    fn with_precision(&self, bits: u32) -> Self {
        Self {
            precision: bits,
            ..self.clone()
        }
    }

    fn letter(&self, letter: char) -> Result<Self::Element, LoError> {
        let base = match (self.group, letter.to_ascii_lowercase()) {
            (ExactGroup::FreeAbelian, 'a') => (1, 0),
            (ExactGroup::FreeAbelian, 'b') => (0, 1),
            (ExactGroup::KleinBottle, 'a') => (0, 1),
            (ExactGroup::KleinBottle, 'b') => (1, 0),
            (ExactGroup::Cyclic(_), 'a') => (1, 0),
            (ExactGroup::Cyclic(_), 'b') => (2, 0),
            _ => return Err(unknown_letter(letter)),
        };
        if letter.is_ascii_uppercase() {
            Ok(self.inverse(&base))
        } else {
            Ok(self.normalize(base))
        }
    }

    fn identity(&self) -> Self::Element {
        (0, 0)
    }

    fn multiply(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        let product = match self.group {
            ExactGroup::KleinBottle => (a.0 + sign(a.1) * b.0, a.1 + b.1),
            _ => (a.0 + b.0, a.1 + b.1),
        };
        self.normalize(product)
    }

    fn inverse(&self, a: &Self::Element) -> Self::Element {
        let inverse = match self.group {
            ExactGroup::KleinBottle => (-sign(a.1) * a.0, -a.1),
            _ => (-a.0, -a.1),
        };
        self.normalize(inverse)
    }

    fn is_identity(&self, a: &Self::Element) -> bool {
        self.normalize(*a) == (0, 0)
    }

    fn equal(&self, a: &Self::Element, b: &Self::Element) -> bool {
        self.normalize(*a) == self.normalize(*b)
    }

    fn class_key(&self, a: &Self::Element) -> Self::Key {
        self.normalize(*a)
    }

    fn decide(&self, word: &Word) -> Result<Verdict, LoError> {
        let element = self.represent(word)?;
        Ok(if self.is_identity(&element) {
            Verdict::Trivial
        } else {
            Verdict::Nontrivial
        })
    }
}
