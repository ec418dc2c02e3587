#![deny(missing_docs)]
#![doc = "Monoid saturation inside a Cayley ball and the backtracking search for a positive cone."]

mod config;
mod monoid;
mod order;

pub use config::SearchConfig;
pub use monoid::{Derivation, Monoid};
pub use order::{
    has_non_orderable_group, ConeTermination, OrderOutcome, OrderReport, OrderSearch, SearchStats,
};
