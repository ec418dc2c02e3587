use std::cell::RefCell;
use std::collections::HashMap;

use lorder_core::{ErrorInfo, GroupOracle, LoError, Verdict, Word};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::BallConfig;
use crate::free::free_ball;
use crate::pool::{ElementId, ElementPool};

/// Unordered pair `(g, g^-1)` of non-identity ball elements.
///
/// `first` is the element discovered first; the word label of `second` is the
/// inverse of the label of `first`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InversePair {
    /// Element discovered first.
    pub first: ElementId,
    /// Its inverse.
    pub second: ElementId,
}

impl InversePair {
    /// Returns whether `id` is one of the two elements.
    pub fn contains(&self, id: ElementId) -> bool {
        self.first == id || self.second == id
    }
}

/// Serializable overview of a built ball.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallSummary {
    /// Word length bound used for the enumeration.
    pub radius: usize,
    /// Number of distinct elements, identity included.
    pub elements: usize,
    /// Number of inverse pairs.
    pub pairs: usize,
    /// Free words that landed on an already known element.
    pub collisions: usize,
    /// Oracle precision in bits at construction time.
    pub precision_bits: u32,
}

/// Finite neighbourhood of the identity with canonical representatives.
///
/// The ball owns its oracle and its element pool. Products are resolved
/// against the pool from canonical representatives and cached.
#[derive(Debug)]
pub struct CayleyBall<O: GroupOracle> {
    oracle: O,
    radius: usize,
    pool: ElementPool<O>,
    inverses: Vec<ElementId>,
    pairs: Vec<InversePair>,
    collisions: usize,
    products: RefCell<HashMap<(ElementId, ElementId), Option<ElementId>>>,
}

fn ball_error(code: &str, message: impl Into<String>) -> ErrorInfo {
    ErrorInfo::new(code, message)
}

impl<O: GroupOracle> CayleyBall<O> {
    /// Builds the ball of the given radius from the oracle's generators.
    pub fn build(oracle: O, radius: usize) -> Result<Self, LoError> {
        if radius == 0 {
            return Err(LoError::Ball(
                ball_error("ball-radius", "ball radius must be at least 1")
                    .with_hint("use radius 3 for a first attempt"),
            ));
        }

        let words = free_ball(oracle.generators(), radius);
        let mut pool = ElementPool::new();
        let identity = pool.insert(&oracle, oracle.identity(), Word::empty());
        let mut partner: Vec<Option<ElementId>> = vec![Some(identity)];
        let mut pairs = Vec::new();
        let mut collisions = 0;

        for word in words.into_iter().skip(1) {
            let element = oracle.represent(&word)?;
            if let Some(existing) = pool.lookup(&oracle, &element) {
                let quotient = word.concat(&pool.word(existing).invert());
                match oracle.decide(&quotient)? {
                    Verdict::Trivial => {
                        debug!(word = %word, existing = %pool.word(existing), "ball collision");
                        collisions += 1;
                        continue;
                    }
                    verdict => {
                        return Err(LoError::Ball(
                            ball_error(
                                "ball-precision",
                                "oracle equality disagrees with the word problem",
                            )
                            .with_context("word", word.as_str())
                            .with_context("existing", pool.word(existing).as_str())
                            .with_context("verdict", format!("{verdict:?}"))
                            .with_hint("raise the oracle accuracy or precision"),
                        ));
                    }
                }
            }
            if oracle.is_identity(&element) {
                return Err(LoError::Ball(
                    ball_error("ball-precision", "identity element missed by the pool lookup")
                        .with_context("word", word.as_str()),
                ));
            }

            let inverse = oracle.inverse(&element);
            if oracle.equal(&element, &inverse) {
                return Err(LoError::Ball(
                    ball_error("ball-involution", "element equals its own inverse")
                        .with_context("word", word.as_str())
                        .with_hint("the group is expected to be torsion-free"),
                ));
            }
            let found = pool.lookup(&oracle, &inverse);
            let id = pool.insert(&oracle, element, word);
            partner.push(None);
            if let Some(first) = found {
                if partner[first.index()].is_some() {
                    return Err(LoError::Ball(
                        ball_error("ball-precision", "inverse element is already paired")
                            .with_context("word", pool.word(id).as_str())
                            .with_context("partner", pool.word(first).as_str()),
                    ));
                }
                let label = pool.word(first).invert();
                pool.relabel(id, label);
                partner[first.index()] = Some(id);
                partner[id.index()] = Some(first);
                pairs.push(InversePair { first, second: id });
            }
        }

        let mut inverses = Vec::with_capacity(partner.len());
        for (index, entry) in partner.iter().enumerate() {
            match entry {
                Some(id) => inverses.push(*id),
                None => {
                    let id = ElementId::from_raw(index as u32);
                    return Err(LoError::Ball(
                        ball_error("ball-unpaired", "inverse of a ball element was never found")
                            .with_context("word", pool.word(id).as_str())
                            .with_context("radius", radius.to_string()),
                    ));
                }
            }
        }

        info!(
            radius,
            elements = pool.len(),
            pairs = pairs.len(),
            collisions,
            precision = oracle.precision(),
            "cayley ball built"
        );

        Ok(Self {
            oracle,
            radius,
            pool,
            inverses,
            pairs,
            collisions,
            products: RefCell::new(HashMap::new()),
        })
    }

    /// Builds the ball described by a validated [`BallConfig`].
    pub fn from_config(oracle: O, config: &BallConfig) -> Result<Self, LoError> {
        config.validate()?;
        Self::build(oracle, config.radius)
    }

    /// Oracle the ball was built with.
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Radius used for the enumeration.
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Number of elements, identity included.
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    /// A ball always holds the identity, so this is never true.
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// Identifier of the identity element.
    pub fn identity(&self) -> ElementId {
        ElementId::from_raw(0)
    }

    /// Whether `id` names an element of this ball.
    pub fn contains(&self, id: ElementId) -> bool {
        id.index() < self.pool.len()
    }

    /// All element identifiers, identity first.
    pub fn ids(&self) -> impl ExactSizeIterator<Item = ElementId> {
        self.pool.ids()
    }

    /// Finds the ball element equal to a numeric element.
    pub fn lookup(&self, element: &O::Element) -> Option<ElementId> {
        self.pool.lookup(&self.oracle, element)
    }

    /// Finds the ball element a word evaluates to.
    pub fn find_word(&self, word: &Word) -> Result<Option<ElementId>, LoError> {
        let element = self.oracle.represent(word)?;
        Ok(self.lookup(&element))
    }

    /// Product `x * y` when it lies in the ball.
    pub fn product(&self, x: ElementId, y: ElementId) -> Option<ElementId> {
        if let Some(cached) = self.products.borrow().get(&(x, y)) {
            return *cached;
        }
        let value = self
            .oracle
            .multiply(self.pool.element(x), self.pool.element(y));
        let resolved = self.pool.lookup(&self.oracle, &value);
        self.products.borrow_mut().insert((x, y), resolved);
        resolved
    }

    /// Numeric conjugate `h * g * h^-1`, wherever it lies.
    ///
    /// The product is formed from canonical representatives without requiring
    /// the intermediate `h * g` to be a ball element.
    pub fn conjugate_value(&self, h: ElementId, g: ElementId) -> O::Element {
        let left = self.oracle.multiply(self.pool.element(h), self.pool.element(g));
        self.oracle
            .multiply(&left, self.pool.element(self.inverse_of(h)))
    }

    /// Conjugate `h * g * h^-1` when it lies in the ball.
    pub fn conjugate(&self, h: ElementId, g: ElementId) -> Option<ElementId> {
        self.pool.lookup(&self.oracle, &self.conjugate_value(h, g))
    }

    /// Inverse of a ball element.
    pub fn inverse_of(&self, id: ElementId) -> ElementId {
        self.inverses[id.index()]
    }

    /// Canonical word label of an element.
    pub fn word(&self, id: ElementId) -> &Word {
        self.pool.word(id)
    }

    /// Canonical numeric representative of an element.
    pub fn element(&self, id: ElementId) -> &O::Element {
        self.pool.element(id)
    }

    /// Inverse pairs in discovery order.
    pub fn pairs(&self) -> &[InversePair] {
        &self.pairs
    }

    /// Serializable overview.
    pub fn summary(&self) -> BallSummary {
        BallSummary {
            radius: self.radius,
            elements: self.pool.len(),
            pairs: self.pairs.len(),
            collisions: self.collisions,
            precision_bits: self.oracle.precision(),
        }
    }
}
