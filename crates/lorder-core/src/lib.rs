#![deny(missing_docs)]
#![doc = "Words, presentations, error types and the element oracle contract shared by the lorder crates."]

pub mod claim;
pub mod errors;
pub mod exact;
pub mod oracle;
pub mod presentation;
pub mod provenance;
pub mod word;

pub use claim::Claim;
pub use errors::{ErrorInfo, LoError};
pub use exact::{ExactGroup, ExactOracle};
pub use oracle::{unknown_letter, GroupOracle, Verdict};
pub use presentation::Presentation;
pub use provenance::{RunProvenance, SchemaVersion, CERTIFICATE_SCHEMA};
pub use word::{invert_letter, join_dotted, parse_dotted, product_of, Word};
