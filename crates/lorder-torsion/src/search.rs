use std::collections::HashSet;

use lorder_ball::{CayleyBall, ElementId, ElementPool};
use lorder_core::{product_of, ErrorInfo, GroupOracle, LoError, Word};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::homology::HomologyMap;

/// Parameters of the generalized torsion search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorsionConfig {
    /// Largest number of conjugates in a product.
    #[serde(default = "default_max_factors")]
    pub max_factors: usize,
    /// Skip candidates with a non-zero homology class.
    #[serde(default = "default_use_homology")]
    pub use_homology: bool,
}

fn default_max_factors() -> usize {
    2
}

fn default_use_homology() -> bool {
    true
}

impl Default for TorsionConfig {
    fn default() -> Self {
        Self {
            max_factors: default_max_factors(),
            use_homology: default_use_homology(),
        }
    }
}

impl TorsionConfig {
    /// A product needs at least two conjugates.
    pub fn validate(&self) -> Result<(), LoError> {
        if self.max_factors < 2 {
            return Err(LoError::Config(
                ErrorInfo::new("config-factors", "factor bound must be at least 2")
                    .with_context("max_factors", self.max_factors.to_string()),
            ));
        }
        Ok(())
    }
}

/// Element together with conjugators whose conjugates multiply to the identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorsionWitness {
    /// The generalized torsion element `g`.
    pub element: Word,
    /// Words `h_i` with `Π h_i g h_i^-1 = 1`.
    pub conjugators: Vec<Word>,
}

impl TorsionWitness {
    /// Freely reduced product of the conjugates, trivial in the group.
    pub fn product_word(&self) -> Word {
        let conjugates: Vec<Word> = self
            .conjugators
            .iter()
            .map(|h| self.element.conjugate_by(h))
            .collect();
        product_of(&conjugates)
    }
}

/// Result of a torsion search on one ball.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum TorsionOutcome {
    /// A product of conjugates collapsed to the identity.
    Found(TorsionWitness),
    /// No product within the factor bound reaches the identity.
    Exhausted,
}

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorsionStats {
    /// Candidates whose orbit was searched.
    pub candidates: usize,
    /// Candidates skipped by the homology filter.
    pub filtered: usize,
    /// Partial products expanded.
    pub states: usize,
}

/// Outcome of [`TorsionSearch::run`] together with its statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorsionReport {
    /// What the search found.
    pub outcome: TorsionOutcome,
    /// How much work it took.
    pub stats: TorsionStats,
}

/// Conjugate `h * g * h^-1` of the candidate, labelled by its conjugator.
struct Conjugate<E> {
    value: E,
    word: Word,
    conjugator: ElementId,
}

/// Product of conjugates so far. `product` indexes the search-local pool,
/// `conjugators` index the ball.
struct Partial {
    product: ElementId,
    factors: usize,
    conjugators: Vec<ElementId>,
}

/// Bounded search for products of conjugates equal to the identity.
pub struct TorsionSearch;

impl TorsionSearch {
    /// Tries one candidate per inverse pair, in discovery order.
    pub fn run<O: GroupOracle>(
        ball: &CayleyBall<O>,
        config: &TorsionConfig,
        homology: Option<&dyn HomologyMap>,
    ) -> Result<TorsionReport, LoError> {
        config.validate()?;
        let mut stats = TorsionStats::default();
        for pair in ball.pairs() {
            let candidate = pair.first;
            if config.use_homology {
                if let Some(map) = homology {
                    if !map.is_null(ball.word(candidate)) {
                        stats.filtered += 1;
                        continue;
                    }
                }
            }
            stats.candidates += 1;
            if let Some(conjugators) = search_orbit(ball, candidate, config.max_factors, &mut stats)
            {
                let witness = TorsionWitness {
                    element: ball.word(candidate).clone(),
                    conjugators: conjugators
                        .into_iter()
                        .map(|h| ball.word(h).clone())
                        .collect(),
                };
                info!(
                    element = %witness.element,
                    factors = witness.conjugators.len(),
                    "generalized torsion found"
                );
                return Ok(TorsionReport {
                    outcome: TorsionOutcome::Found(witness),
                    stats,
                });
            }
        }
        info!(
            candidates = stats.candidates,
            filtered = stats.filtered,
            "torsion search exhausted"
        );
        Ok(TorsionReport {
            outcome: TorsionOutcome::Exhausted,
            stats,
        })
    }
}

/// Distinct conjugates of `g` by ball elements, each with the first conjugator
/// reaching it. Conjugates need not lie in the ball.
fn orbit<O: GroupOracle>(ball: &CayleyBall<O>, g: ElementId) -> Vec<Conjugate<O::Element>> {
    let oracle = ball.oracle();
    let mut seen = ElementPool::new();
    let mut orbit = Vec::new();
    for h in ball.ids() {
        let value = ball.conjugate_value(h, g);
        let word = ball.word(g).conjugate_by(ball.word(h));
        let (_, fresh) = seen.intern(oracle, value.clone(), word.clone());
        if fresh {
            orbit.push(Conjugate {
                value,
                word,
                conjugator: h,
            });
        }
    }
    orbit
}

/// Depth-first search over products of conjugates, memoised on the
/// (product class, factor count) pair.
fn search_orbit<O: GroupOracle>(
    ball: &CayleyBall<O>,
    g: ElementId,
    max_factors: usize,
    stats: &mut TorsionStats,
) -> Option<Vec<ElementId>> {
    let oracle = ball.oracle();
    let orbit = orbit(ball, g);
    debug!(element = %ball.word(g), orbit = orbit.len(), "searching conjugacy orbit");
    let mut products: ElementPool<O> = ElementPool::new();
    let mut visited: HashSet<(ElementId, usize)> = HashSet::new();
    let mut stack = Vec::new();
    for conjugate in orbit.iter().rev() {
        let (product, _) =
            products.intern(oracle, conjugate.value.clone(), conjugate.word.clone());
        if visited.insert((product, 1)) {
            stack.push(Partial {
                product,
                factors: 1,
                conjugators: vec![conjugate.conjugator],
            });
        }
    }

    while let Some(partial) = stack.pop() {
        stats.states += 1;
        let mut children = Vec::new();
        for conjugate in &orbit {
            let value = oracle.multiply(products.element(partial.product), &conjugate.value);
            let mut conjugators = partial.conjugators.clone();
            conjugators.push(conjugate.conjugator);
            if oracle.is_identity(&value) {
                return Some(conjugators);
            }
            let factors = partial.factors + 1;
            if factors < max_factors {
                let word = products.word(partial.product).concat(&conjugate.word);
                let (product, _) = products.intern(oracle, value, word);
                if visited.insert((product, factors)) {
                    children.push(Partial {
                        product,
                        factors,
                        conjugators,
                    });
                }
            }
        }
        stack.extend(children.into_iter().rev());
    }
    None
}

/// Builds the ball of `radius` and runs the torsion search.
pub fn has_generalized_torsion<O: GroupOracle>(
    oracle: O,
    radius: usize,
    config: &TorsionConfig,
    homology: Option<&dyn HomologyMap>,
) -> Result<TorsionReport, LoError> {
    let ball = CayleyBall::build(oracle, radius)?;
    TorsionSearch::run(&ball, config, homology)
}
