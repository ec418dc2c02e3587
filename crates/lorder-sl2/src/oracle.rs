use std::sync::Arc;

use lorder_core::{unknown_letter, GroupOracle, LoError, Verdict, Word};
use nalgebra::{Complex, Normed};

use crate::representation::{sl2_inverse, Sl2Matrix, Sl2Representation};

/// Default element tolerance exponent: entries equal within `2^-15`.
pub const DEFAULT_ACCURACY_BITS: u32 = 15;
/// Default working precision for word-problem decisions.
pub const DEFAULT_PRECISION_BITS: u32 = 53;

/// Bits of `f64` arithmetic that an error bound may rely on.
const MANTISSA_BITS: u32 = 52;

/// Weights of the real coordinates in the bucket projection. Their absolute
/// sum stays below one, so entries within the tolerance project less than one
/// cell apart.
const KEY_WEIGHTS: [f64; 8] = [0.2, 0.1618, 0.1414, 0.1303, 0.1111, 0.0955, 0.0866, 0.0707];

/// Element oracle for a group given by SL(2,C) generator matrices.
///
/// Elements are compared entrywise with tolerance `2^-accuracy_bits`.
/// [`GroupOracle::decide`] instead tracks a forward rounding bound for the
/// evaluated word and only answers when the bound allows it. Precisions above
/// the `f64` mantissa behave like 52 bits.
#[derive(Debug, Clone)]
pub struct Sl2Oracle {
    representation: Arc<Sl2Representation>,
    letters: Vec<(char, Sl2Matrix)>,
    accuracy_bits: u32,
    precision_bits: u32,
}

impl Sl2Oracle {
    /// Oracle with default accuracy and precision.
    pub fn new(representation: Sl2Representation) -> Self {
        let letters = representation
            .presentation()
            .generators()
            .iter()
            .zip(representation.matrices())
            .flat_map(|(&generator, matrix)| {
                [
                    (generator, *matrix),
                    (generator.to_ascii_uppercase(), sl2_inverse(matrix)),
                ]
            })
            .collect();
        Self {
            representation: Arc::new(representation),
            letters,
            accuracy_bits: DEFAULT_ACCURACY_BITS,
            precision_bits: DEFAULT_PRECISION_BITS,
        }
    }

    /// Same oracle with a different element tolerance.
    pub fn with_accuracy(mut self, bits: u32) -> Self {
        self.accuracy_bits = bits;
        self
    }

    /// Underlying representation.
    pub fn representation(&self) -> &Sl2Representation {
        &self.representation
    }

    /// Element tolerance exponent.
    pub fn accuracy_bits(&self) -> u32 {
        self.accuracy_bits
    }

    fn tolerance(&self) -> f64 {
        2f64.powi(-(self.accuracy_bits as i32))
    }

    /// Relators that do not evaluate to the identity at the current precision.
    pub fn failing_relators(&self) -> Result<Vec<Word>, LoError> {
        let mut failing = Vec::new();
        for relator in self.representation.presentation().relators() {
            if !self.decide(relator)?.is_trivial() {
                failing.push(relator.clone());
            }
        }
        Ok(failing)
    }
}

fn max_entry_distance(a: &Sl2Matrix, b: &Sl2Matrix) -> f64 {
    (a - b).iter().map(|z| z.norm()).fold(0.0, f64::max)
}

impl GroupOracle for Sl2Oracle {
    type Element = Sl2Matrix;
    type Key = i64;

    fn generators(&self) -> &[char] {
        self.representation.presentation().generators()
    }

    fn relators(&self) -> Option<&[Word]> {
        Some(self.representation.presentation().relators())
    }

    fn precision(&self) -> u32 {
        self.precision_bits
    }

    fn with_precision(&self, bits: u32) -> Self {
        Self {
            precision_bits: bits,
            ..self.clone()
        }
    }

    fn letter(&self, letter: char) -> Result<Self::Element, LoError> {
        self.letters
            .iter()
            .find(|(name, _)| *name == letter)
            .map(|(_, matrix)| *matrix)
            .ok_or_else(|| unknown_letter(letter))
    }

    fn identity(&self) -> Self::Element {
        Sl2Matrix::identity()
    }

    fn multiply(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a * b
    }

    fn inverse(&self, a: &Self::Element) -> Self::Element {
        sl2_inverse(a)
    }

    fn is_identity(&self, a: &Self::Element) -> bool {
        max_entry_distance(a, &Sl2Matrix::identity()) < self.tolerance()
    }

    fn equal(&self, a: &Self::Element, b: &Self::Element) -> bool {
        max_entry_distance(a, b) < self.tolerance()
    }

    fn class_key(&self, a: &Self::Element) -> Self::Key {
        let projection: f64 = a
            .iter()
            .flat_map(|z| [z.re, z.im])
            .zip(KEY_WEIGHTS)
            .map(|(value, weight)| value * weight)
            .sum();
        (projection / self.tolerance()).floor() as i64
    }

    fn neighbour_keys(&self, key: &Self::Key) -> Vec<Self::Key> {
        vec![*key, key - 1, key + 1]
    }

    fn decide(&self, word: &Word) -> Result<Verdict, LoError> {
        let bits = self.precision_bits.min(MANTISSA_BITS);
        let unit = 2f64.powi(-(bits as i32));
        let mut product = Sl2Matrix::identity();
        let mut bound = 0.0;
        for letter in word.letters() {
            let factor = self.letter(letter)?;
            let factor_norm = factor.norm();
            bound = bound * factor_norm + 4.0 * unit * product.norm() * factor_norm;
            product *= factor;
        }
        let distance = max_entry_distance(&product, &Sl2Matrix::identity());
        let settled = 2f64.powi(-((bits / 2) as i32));
        Ok(if distance > bound {
            Verdict::Nontrivial
        } else if bound <= settled {
            Verdict::Trivial
        } else {
            Verdict::Indeterminate
        })
    }
}

/// Trace of an element, used to compare representations.
pub fn trace(m: &Sl2Matrix) -> Complex<f64> {
    m[(0, 0)] + m[(1, 1)]
}
