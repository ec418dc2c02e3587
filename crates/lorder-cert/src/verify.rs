use std::collections::BTreeSet;

use lorder_core::{join_dotted, Claim, ErrorInfo, GroupOracle, LoError, Verdict, Word};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::certificate::Certificate;
use crate::tree::{check_structure, ProofStats, ProofTree, StructuralDefect};

/// A definite reason why the claims do not prove non-orderability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "failure", rename_all = "kebab-case")]
pub enum ClaimFailure {
    /// An edge label is the identity, so it cannot be positive.
    TrivialEdgeLabel {
        /// The offending label.
        label: Word,
    },
    /// A trivial token that does not appear on the claim's path.
    ForeignToken {
        /// Dot-joined path of the claim.
        path: String,
        /// The token.
        token: Word,
    },
    /// The trivial tokens do not multiply to the identity.
    NotTrivial {
        /// Dot-joined path of the claim.
        path: String,
        /// The reduced product.
        product: Word,
    },
}

/// Numeric check of a claim set at one precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum ClaimCheck {
    /// Every query settled in favour of the proof.
    Passed,
    /// A query settled against the proof.
    Failed(ClaimFailure),
    /// No query failed but some could not be settled.
    Indeterminate {
        /// Number of unsettled queries.
        unsettled: usize,
    },
}

/// Runs the oracle checks on claims whose tree is already known to be valid.
///
/// Every edge label must be non-trivial and every claim's trivial tokens must
/// come from its own path and multiply to the identity. A definite failure
/// wins over unsettled queries.
pub fn verify_claims<O: GroupOracle>(
    oracle: &O,
    tree: &ProofTree,
    claims: &[Claim],
) -> Result<ClaimCheck, LoError> {
    let mut unsettled = 0;
    for label in tree.edge_labels() {
        match oracle.decide(&label)? {
            Verdict::Nontrivial => {}
            Verdict::Trivial => {
                return Ok(ClaimCheck::Failed(ClaimFailure::TrivialEdgeLabel { label }))
            }
            Verdict::Indeterminate => unsettled += 1,
        }
    }
    for claim in claims {
        let allowed: BTreeSet<&Word> = claim.path.iter().collect();
        if let Some(token) = claim.trivial.iter().find(|token| !allowed.contains(token)) {
            return Ok(ClaimCheck::Failed(ClaimFailure::ForeignToken {
                path: claim.path_dotted(),
                token: token.clone(),
            }));
        }
        let product = claim.trivial_product();
        match oracle.decide(&product)? {
            Verdict::Trivial => {}
            Verdict::Nontrivial => {
                return Ok(ClaimCheck::Failed(ClaimFailure::NotTrivial {
                    path: claim.path_dotted(),
                    product,
                }))
            }
            Verdict::Indeterminate => {
                debug!(path = %claim.path_dotted(), bits = oracle.precision(), "claim unsettled");
                unsettled += 1;
            }
        }
    }
    Ok(if unsettled == 0 {
        ClaimCheck::Passed
    } else {
        ClaimCheck::Indeterminate { unsettled }
    })
}

/// Overall answer of the verifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CertificateVerdict {
    /// Structure and every numeric claim check out.
    Verified,
    /// A numeric check settled against the certificate.
    Disproved,
    /// The claims do not form a valid proof tree.
    StructuralInvalid,
    /// Some query stayed unsettled up to the precision ceiling.
    Inconclusive,
}

/// Precision schedule of the verifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifierConfig {
    /// First precision tried, in bits.
    #[serde(default = "default_initial_bits")]
    pub initial_bits: u32,
    /// Precision ceiling, in bits.
    #[serde(default = "default_max_bits")]
    pub max_bits: u32,
}

fn default_initial_bits() -> u32 {
    16
}

fn default_max_bits() -> u32 {
    64
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            initial_bits: default_initial_bits(),
            max_bits: default_max_bits(),
        }
    }
}

/// Everything the verifier learned about a certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    /// Overall answer.
    pub verdict: CertificateVerdict,
    /// Precisions tried, in order.
    pub bits_tried: Vec<u32>,
    /// Precision at which the numeric checks settled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settled_bits: Option<u32>,
    /// Structural defect for [`CertificateVerdict::StructuralInvalid`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defect: Option<StructuralDefect>,
    /// Failure for [`CertificateVerdict::Disproved`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<ClaimFailure>,
    /// Size of the proof.
    pub stats: ProofStats,
    /// Content hash of the verified certificate.
    pub certificate_hash: String,
}

impl VerificationReport {
    /// Whether the verdict is [`CertificateVerdict::Verified`].
    pub fn is_verified(&self) -> bool {
        self.verdict == CertificateVerdict::Verified
    }
}

/// Certificate checker with precision escalation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verifier {
    initial_bits: u32,
    max_bits: u32,
}

impl Verifier {
    /// Creates a verifier trying `initial_bits` first and never exceeding `max_bits`.
    pub fn new(initial_bits: u32, max_bits: u32) -> Result<Self, LoError> {
        if initial_bits == 0 || max_bits < initial_bits {
            return Err(LoError::Config(
                ErrorInfo::new("config-precision", "need 0 < initial_bits <= max_bits")
                    .with_context("initial_bits", initial_bits.to_string())
                    .with_context("max_bits", max_bits.to_string()),
            ));
        }
        Ok(Self {
            initial_bits,
            max_bits,
        })
    }

    /// Creates a verifier from a validated configuration.
    pub fn from_config(config: &VerifierConfig) -> Result<Self, LoError> {
        Self::new(config.initial_bits, config.max_bits)
    }

    /// Checks structure once, then the numeric claims at doubling precision.
    ///
    /// Only unsettled queries trigger a retry, and every retry re-runs all
    /// numeric checks. Errors are reserved for malformed input such as
    /// letters the oracle does not know.
    pub fn verify<O: GroupOracle>(
        &self,
        oracle: &O,
        certificate: &Certificate,
    ) -> Result<VerificationReport, LoError> {
        let presentation = certificate.presentation()?;
        if presentation.generators() != oracle.generators() {
            return Err(LoError::Certificate(
                ErrorInfo::new(
                    "cert-generators",
                    "certificate generators differ from the oracle's",
                )
                .with_context("certificate", presentation.generators_dotted())
                .with_context("oracle", oracle.generators().iter().collect::<String>()),
            ));
        }
        if let Some(relators) = oracle.relators() {
            if !same_relators(presentation.relators(), relators) {
                return Err(LoError::Certificate(
                    ErrorInfo::new(
                        "cert-relators",
                        "certificate relators differ from the oracle's",
                    )
                    .with_context("certificate", join_dotted(presentation.relators()))
                    .with_context("oracle", join_dotted(relators)),
                ));
            }
        }

        let claims = &certificate.proof;
        let mut report = VerificationReport {
            verdict: CertificateVerdict::Inconclusive,
            bits_tried: Vec::new(),
            settled_bits: None,
            defect: None,
            failure: None,
            stats: ProofStats::compute(claims),
            certificate_hash: certificate.content_hash()?,
        };

        let tree = match check_structure(claims) {
            Ok(tree) => tree,
            Err(defect) => {
                info!(%defect, "certificate structure rejected");
                report.verdict = CertificateVerdict::StructuralInvalid;
                report.defect = Some(defect);
                return Ok(report);
            }
        };

        let mut bits = self.initial_bits;
        loop {
            report.bits_tried.push(bits);
            let check = verify_claims(&oracle.with_precision(bits), &tree, claims)?;
            match check {
                ClaimCheck::Passed => {
                    report.verdict = CertificateVerdict::Verified;
                    report.settled_bits = Some(bits);
                    break;
                }
                ClaimCheck::Failed(failure) => {
                    report.verdict = CertificateVerdict::Disproved;
                    report.settled_bits = Some(bits);
                    report.failure = Some(failure);
                    break;
                }
                ClaimCheck::Indeterminate { unsettled } => {
                    if bits >= self.max_bits {
                        warn!(bits, unsettled, "precision ceiling reached");
                        break;
                    }
                    let next = bits.saturating_mul(2).min(self.max_bits);
                    warn!(bits, next, unsettled, "escalating precision");
                    bits = next;
                }
            }
        }
        info!(
            name = %certificate.name,
            verdict = ?report.verdict,
            bits = ?report.settled_bits,
            "certificate checked"
        );
        Ok(report)
    }
}

/// Relator lists agree up to order and repetition.
fn same_relators(certificate: &[Word], oracle: &[Word]) -> bool {
    let left: BTreeSet<&str> = certificate.iter().map(Word::as_str).collect();
    let right: BTreeSet<&str> = oracle.iter().map(Word::as_str).collect();
    left == right
}
