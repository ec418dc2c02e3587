use lorder_core::{ErrorInfo, LoError, Word};
use serde::{Deserialize, Serialize};

/// Parameters of the positive cone search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Accept a cone once it holds more than this fraction of the ball.
    ///
    /// This is a heuristic: an accepted cone is reported as
    /// [`ConeTermination::DensityCutoff`](crate::ConeTermination::DensityCutoff).
    /// `None` disables it and the search only stops on a complete cone or
    /// exhaustion.
    #[serde(default = "default_density_cutoff")]
    pub density_cutoff: Option<f64>,
    /// Word whose element is positive in every branch.
    #[serde(default = "default_seed_word")]
    pub seed_word: Word,
}

fn default_density_cutoff() -> Option<f64> {
    Some(0.45)
}

fn default_seed_word() -> Word {
    Word::letter('a')
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            density_cutoff: default_density_cutoff(),
            seed_word: default_seed_word(),
        }
    }
}

impl SearchConfig {
    /// Rejects cutoffs outside `(0, 1]` and an empty seed word.
    pub fn validate(&self) -> Result<(), LoError> {
        if let Some(cutoff) = self.density_cutoff {
            if !(cutoff > 0.0 && cutoff <= 1.0) {
                return Err(LoError::Config(
                    ErrorInfo::new("config-density", "density cutoff must lie in (0, 1]")
                        .with_context("density_cutoff", cutoff.to_string())
                        .with_hint("use null to disable the heuristic"),
                ));
            }
        }
        if self.seed_word.is_empty() {
            return Err(LoError::Config(ErrorInfo::new(
                "config-seed",
                "seed word must not be the identity",
            )));
        }
        Ok(())
    }
}
