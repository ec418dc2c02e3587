use lorder_ball::{CayleyBall, ElementId};
use lorder_core::{GroupOracle, Word};

/// How a member entered a [`Monoid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Derivation {
    /// Added directly as a generator of the monoid.
    Seed,
    /// Produced as `left * right` from two earlier members.
    Product(ElementId, ElementId),
}

/// Multiplicatively closed subset of a fixed [`CayleyBall`].
///
/// Closure is relative to the ball: a product is only taken into account when
/// it lands on a ball element. Branching copies the monoid and saturates the
/// copy, so sibling branches never share mutable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monoid {
    present: Vec<bool>,
    members: Vec<ElementId>,
    derivations: Vec<Option<Derivation>>,
    has_identity: bool,
}

impl Monoid {
    /// Empty monoid over a ball with `ball_len` elements.
    pub fn empty(ball_len: usize) -> Self {
        Self {
            present: vec![false; ball_len],
            members: Vec::new(),
            derivations: vec![None; ball_len],
            has_identity: false,
        }
    }

    /// Smallest ball-closed set containing `seeds`.
    pub fn saturate<O: GroupOracle>(ball: &CayleyBall<O>, seeds: &[ElementId]) -> Self {
        let mut monoid = Self::empty(ball.len());
        monoid.extend(ball, seeds);
        monoid
    }

    /// Copy of this monoid saturated with one extra seed.
    pub fn with_seed<O: GroupOracle>(&self, ball: &CayleyBall<O>, seed: ElementId) -> Self {
        let mut monoid = self.clone();
        monoid.extend(ball, &[seed]);
        monoid
    }

    /// Copy of this monoid saturated with extra seeds.
    pub fn with_seeds<O: GroupOracle>(&self, ball: &CayleyBall<O>, seeds: &[ElementId]) -> Self {
        let mut monoid = self.clone();
        monoid.extend(ball, seeds);
        monoid
    }

    fn admit(&mut self, id: ElementId, derivation: Derivation, identity: ElementId) -> bool {
        self.present[id.index()] = true;
        self.members.push(id);
        self.derivations[id.index()] = Some(derivation);
        if id == identity {
            self.has_identity = true;
        }
        self.has_identity
    }

    fn extend<O: GroupOracle>(&mut self, ball: &CayleyBall<O>, seeds: &[ElementId]) {
        if self.has_identity {
            return;
        }
        let identity = ball.identity();
        let mut active = Vec::new();
        for &seed in seeds {
            if self.present[seed.index()] {
                continue;
            }
            active.push(seed);
            if self.admit(seed, Derivation::Seed, identity) {
                return;
            }
        }

        while !active.is_empty() {
            let snapshot: Vec<ElementId> = ball.ids().filter(|id| self.present[id.index()]).collect();
            let mut next = Vec::new();
            for &x in &snapshot {
                for &y in &active {
                    for (left, right) in [(x, y), (y, x)] {
                        let Some(product) = ball.product(left, right) else {
                            continue;
                        };
                        if self.present[product.index()] {
                            continue;
                        }
                        next.push(product);
                        if self.admit(product, Derivation::Product(left, right), identity) {
                            return;
                        }
                    }
                }
            }
            active = next;
        }
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the monoid has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether `id` is a member.
    pub fn contains(&self, id: ElementId) -> bool {
        self.present.get(id.index()).copied().unwrap_or(false)
    }

    /// Whether saturation produced the identity.
    pub fn has_identity(&self) -> bool {
        self.has_identity
    }

    /// Members in the order they were added.
    pub fn members(&self) -> &[ElementId] {
        &self.members
    }

    /// How a member was obtained.
    pub fn derivation(&self, id: ElementId) -> Option<Derivation> {
        self.derivations.get(id.index()).copied().flatten()
    }

    /// Seed words whose left-to-right product is the member `id`.
    ///
    /// Returns an empty list for non-members.
    pub fn expand<O: GroupOracle>(&self, ball: &CayleyBall<O>, id: ElementId) -> Vec<Word> {
        let mut tokens = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            match self.derivation(current) {
                Some(Derivation::Seed) => tokens.push(ball.word(current).clone()),
                Some(Derivation::Product(left, right)) => {
                    stack.push(right);
                    stack.push(left);
                }
                None => return Vec::new(),
            }
        }
        tokens
    }
}
