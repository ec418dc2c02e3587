#![deny(missing_docs)]
#![doc = "Search for generalized torsion: non-trivial elements with a product of conjugates equal to the identity."]

pub mod homology;
mod search;

pub use homology::{ExponentSumMap, HomologyMap};
pub use search::{
    has_generalized_torsion, TorsionConfig, TorsionOutcome, TorsionReport, TorsionSearch,
    TorsionStats, TorsionWitness,
};
