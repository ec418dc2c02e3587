//! Abelianisation filters for torsion candidates.

use lorder_core::{ErrorInfo, LoError, Presentation, Word};
use serde::{Deserialize, Serialize};

/// Map from words to a free abelian quotient of the group.
///
/// A generalized torsion element maps to zero under every homomorphism to a
/// torsion-free abelian group, so non-null classes can be skipped.
pub trait HomologyMap {
    /// Class of `word` in `Z^r`.
    fn image(&self, word: &Word) -> Vec<i64>;

    /// Whether `word` maps to the zero class.
    fn is_null(&self, word: &Word) -> bool {
        self.image(word).iter().all(|&value| value == 0)
    }
}

/// Linear functionals on generator exponent sums.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExponentSumMap {
    generators: Vec<char>,
    basis: Vec<Vec<i64>>,
}

fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn lcm(a: i64, b: i64) -> i64 {
    if a == 0 || b == 0 {
        return 0;
    }
    (a / gcd(a, b) * b).abs()
}

fn primitive(mut row: Vec<i64>) -> Vec<i64> {
    let divisor = row.iter().fold(0, |acc, &value| gcd(acc, value));
    if divisor > 1 {
        row.iter_mut().for_each(|value| *value /= divisor);
    }
    if row.iter().find(|&&value| value != 0).is_some_and(|&lead| lead < 0) {
        row.iter_mut().for_each(|value| *value = -*value);
    }
    row
}

/// Reduced integer echelon form: pivot rows with zeros in the other pivot columns.
fn integer_rref(mut rows: Vec<Vec<i64>>, width: usize) -> (Vec<Vec<i64>>, Vec<usize>) {
    let mut pivots = Vec::new();
    let mut rank = 0;
    for col in 0..width {
        let Some(found) = (rank..rows.len()).find(|&r| rows[r][col] != 0) else {
            continue;
        };
        rows.swap(rank, found);
        for r in 0..rows.len() {
            if r == rank || rows[r][col] == 0 {
                continue;
            }
            let pivot = rows[rank][col];
            let factor = rows[r][col];
            let reduced: Vec<i64> = rows[r]
                .iter()
                .zip(&rows[rank])
                .map(|(&value, &pivot_value)| value * pivot - pivot_value * factor)
                .collect();
            rows[r] = primitive(reduced);
        }
        pivots.push(col);
        rank += 1;
    }
    rows.truncate(rank);
    (rows, pivots)
}

impl ExponentSumMap {
    /// Builds a map from explicit functional rows, one weight per generator.
    pub fn new(generators: Vec<char>, basis: Vec<Vec<i64>>) -> Result<Self, LoError> {
        if let Some(row) = basis.iter().find(|row| row.len() != generators.len()) {
            return Err(LoError::Config(
                ErrorInfo::new("homology-shape", "functional has the wrong number of weights")
                    .with_context("generators", generators.len().to_string())
                    .with_context("weights", row.len().to_string()),
            ));
        }
        Ok(Self { generators, basis })
    }

    /// Functionals vanishing on every relator, one per free rank of `H_1`.
    pub fn from_presentation(presentation: &Presentation) -> Self {
        let generators = presentation.generators().to_vec();
        let width = generators.len();
        let rows: Vec<Vec<i64>> = presentation
            .relators()
            .iter()
            .map(|relator| generators.iter().map(|&g| relator.exponent_sum(g)).collect())
            .collect();
        let (rows, pivots) = integer_rref(rows, width);
        let scale = rows
            .iter()
            .zip(&pivots)
            .fold(1, |acc, (row, &col)| lcm(acc, row[col]));

        let mut basis = Vec::new();
        for free in (0..width).filter(|col| !pivots.contains(col)) {
            let mut vector = vec![0; width];
            vector[free] = scale;
            for (row, &col) in rows.iter().zip(&pivots) {
                vector[col] = -row[free] * scale / row[col];
            }
            basis.push(primitive(vector));
        }
        Self { generators, basis }
    }

    /// Free rank of the target group.
    pub fn rank(&self) -> usize {
        self.basis.len()
    }

    /// Functional rows, one weight per generator.
    pub fn basis(&self) -> &[Vec<i64>] {
        &self.basis
    }
}

impl HomologyMap for ExponentSumMap {
    fn image(&self, word: &Word) -> Vec<i64> {
        let sums: Vec<i64> = self
            .generators
            .iter()
            .map(|&g| word.exponent_sum(g))
            .collect();
        self.basis
            .iter()
            .map(|row| row.iter().zip(&sums).map(|(w, s)| w * s).sum())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presentation(gens: &str, rels: &[&str]) -> Presentation {
        let rels: Vec<String> = rels.iter().map(|r| r.to_string()).collect();
        Presentation::parse(gens, &rels).unwrap()
    }

    #[test]
    fn rational_homology_sphere_has_zero_map() {
        let map = ExponentSumMap::from_presentation(&presentation(
            "a.b",
            &["ababaBaaB", "ababAbbAb"],
        ));
        assert_eq!(map.rank(), 0);
        assert!(map.is_null(&Word::parse("aab").unwrap()));
    }

    #[test]
    fn klein_bottle_keeps_the_a_exponent() {
        let map = ExponentSumMap::from_presentation(&presentation("a.b", &["abAb"]));
        assert_eq!(map.basis(), &[vec![1, 0]]);
        assert!(map.is_null(&Word::parse("bb").unwrap()));
        assert_eq!(map.image(&Word::parse("aBa").unwrap()), vec![2]);
    }

    #[test]
    fn kernel_is_primitive_and_positive() {
        let map = ExponentSumMap::from_presentation(&presentation("a.b.c", &["aabbbC", "ab"]));
        // rows (2,3,-1) and (1,1,0) leave the kernel spanned by (1,-1,-1)
        assert_eq!(map.basis(), &[vec![1, -1, -1]]);
    }

    #[test]
    fn free_group_keeps_every_exponent() {
        let map = ExponentSumMap::from_presentation(&presentation("a.b", &[]));
        assert_eq!(map.basis(), &[vec![1, 0], vec![0, 1]]);
    }

    #[test]
    fn explicit_rows_are_checked() {
        let err = ExponentSumMap::new(vec!['a', 'b'], vec![vec![1]]).unwrap_err();
        assert_eq!(err.info().code, "homology-shape");
    }
}
