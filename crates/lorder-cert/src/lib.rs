#![deny(missing_docs)]
#![doc = "Non-orderability certificates: serialized claims, proof-tree validation and a verifier with precision escalation."]

mod certificate;
mod digest;
pub mod tree;
mod verify;

pub use certificate::Certificate;
pub use digest::{canonical_json, content_digest};
pub use lorder_core::Claim;
pub use tree::{check_structure, ProofStats, ProofTree, StructuralDefect};
pub use verify::{
    verify_claims, CertificateVerdict, ClaimCheck, ClaimFailure, VerificationReport, Verifier,
    VerifierConfig,
};
