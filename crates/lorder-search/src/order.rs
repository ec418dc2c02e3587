use std::rc::Rc;

use lorder_ball::{CayleyBall, ElementId, InversePair};
use lorder_core::{Claim, ErrorInfo, GroupOracle, LoError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::SearchConfig;
use crate::monoid::Monoid;

/// Why the search stopped with a positive cone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConeTermination {
    /// Every inverse pair is resolved and the identity never appeared.
    Complete,
    /// The density heuristic accepted a partial cone.
    DensityCutoff,
}

/// Result of an order search on one ball.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderOutcome {
    /// A candidate positive cone that avoids the identity.
    ConeFound {
        /// The accepted cone.
        cone: Monoid,
        /// How the cone was accepted.
        termination: ConeTermination,
    },
    /// Every branch produced the identity.
    NotOrderable {
        /// One claim per contradiction, in depth-first order.
        claims: Vec<Claim>,
    },
}

impl OrderOutcome {
    /// Claims of a non-orderability proof, if the search produced one.
    pub fn certificate_claims(&self) -> Option<&[Claim]> {
        match self {
            OrderOutcome::NotOrderable { claims } => Some(claims),
            OrderOutcome::ConeFound { .. } => None,
        }
    }

    /// Whether every branch ended in a contradiction.
    pub fn is_not_orderable(&self) -> bool {
        matches!(self, OrderOutcome::NotOrderable { .. })
    }
}

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Branches whose cone was saturated.
    pub branches: usize,
    /// Branches whose cone contained the identity.
    pub contradictions: usize,
    /// Longest path of positive choices, seed included.
    pub max_depth: usize,
    /// Largest identity-free cone seen.
    pub largest_cone: usize,
}

/// Outcome of [`OrderSearch::run`] together with its statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderReport {
    /// What the search found.
    pub outcome: OrderOutcome,
    /// How much work it took.
    pub stats: SearchStats,
}

struct Pending {
    parent: Rc<Monoid>,
    choice: ElementId,
    path: Vec<ElementId>,
}

/// Depth-first backtracking search for a positive cone.
///
/// Each branch point takes the first inverse pair the cone leaves unresolved
/// and explores "first element positive" to completion before "second element
/// positive". Both children start from the same parent cone.
pub struct OrderSearch;

impl OrderSearch {
    /// Searches the ball for a cone containing `seed`.
    pub fn run<O: GroupOracle>(
        ball: &CayleyBall<O>,
        seed: ElementId,
        config: &SearchConfig,
    ) -> Result<OrderReport, LoError> {
        config.validate()?;
        if !ball.contains(seed) || seed == ball.identity() {
            return Err(LoError::Search(
                ErrorInfo::new("search-seed", "seed must be a non-identity ball element")
                    .with_context("seed", seed.as_raw().to_string()),
            ));
        }

        let threshold = config
            .density_cutoff
            .map(|fraction| fraction * ball.len() as f64);
        let mut stats = SearchStats::default();
        let mut claims = Vec::new();
        let mut stack = vec![Pending {
            parent: Rc::new(Monoid::empty(ball.len())),
            choice: seed,
            path: vec![seed],
        }];

        while let Some(Pending {
            parent,
            choice,
            path,
        }) = stack.pop()
        {
            stats.branches += 1;
            stats.max_depth = stats.max_depth.max(path.len());
            let cone = parent.with_seed(ball, choice);

            if cone.has_identity() {
                let claim = Claim::new(
                    path.iter().map(|&id| ball.word(id).clone()).collect(),
                    cone.expand(ball, ball.identity()),
                );
                debug!(
                    path = %claim.path_dotted(),
                    trivial = %claim.trivial_dotted(),
                    "branch contradiction"
                );
                stats.contradictions += 1;
                claims.push(claim);
                continue;
            }
            stats.largest_cone = stats.largest_cone.max(cone.len());
            debug!(depth = path.len(), cone = cone.len(), "branch saturated");

            if let Some(limit) = threshold {
                if cone.len() as f64 > limit {
                    info!(cone = cone.len(), ball = ball.len(), "density cutoff reached");
                    return Ok(OrderReport {
                        outcome: OrderOutcome::ConeFound {
                            cone,
                            termination: ConeTermination::DensityCutoff,
                        },
                        stats,
                    });
                }
            }

            let Some(pair) = first_unresolved(ball.pairs(), &cone) else {
                info!(cone = cone.len(), "complete cone found");
                return Ok(OrderReport {
                    outcome: OrderOutcome::ConeFound {
                        cone,
                        termination: ConeTermination::Complete,
                    },
                    stats,
                });
            };

            let parent = Rc::new(cone);
            let mut second_path = path.clone();
            second_path.push(pair.second);
            let mut first_path = path;
            first_path.push(pair.first);
            stack.push(Pending {
                parent: Rc::clone(&parent),
                choice: pair.second,
                path: second_path,
            });
            stack.push(Pending {
                parent,
                choice: pair.first,
                path: first_path,
            });
        }

        info!(
            claims = claims.len(),
            branches = stats.branches,
            "every branch contradicts"
        );
        Ok(OrderReport {
            outcome: OrderOutcome::NotOrderable { claims },
            stats,
        })
    }
}

fn first_unresolved(pairs: &[InversePair], cone: &Monoid) -> Option<InversePair> {
    pairs
        .iter()
        .copied()
        .find(|pair| !cone.contains(pair.first) && !cone.contains(pair.second))
}

/// Builds the ball of `radius` and runs the order search from the configured seed.
pub fn has_non_orderable_group<O: GroupOracle>(
    oracle: O,
    radius: usize,
    config: &SearchConfig,
) -> Result<OrderReport, LoError> {
    let ball = CayleyBall::build(oracle, radius)?;
    let seed = ball.find_word(&config.seed_word)?.ok_or_else(|| {
        LoError::Search(
            ErrorInfo::new("search-seed", "seed word is not in the ball")
                .with_context("seed", config.seed_word.as_str())
                .with_context("radius", radius.to_string()),
        )
    })?;
    OrderSearch::run(&ball, seed, config)
}
