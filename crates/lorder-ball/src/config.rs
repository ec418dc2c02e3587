use lorder_core::{ErrorInfo, LoError};
use serde::{Deserialize, Serialize};

/// Parameters controlling Cayley ball construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallConfig {
    /// Maximal word length enumerated from the identity.
    #[serde(default = "default_radius")]
    pub radius: usize,
}

fn default_radius() -> usize {
    3
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: default_radius(),
        }
    }
}

impl BallConfig {
    /// Rejects configurations that cannot produce a ball.
    pub fn validate(&self) -> Result<(), LoError> {
        if self.radius == 0 {
            return Err(LoError::Config(
                ErrorInfo::new("config-radius", "ball radius must be at least 1")
                    .with_context("radius", self.radius.to_string()),
            ));
        }
        Ok(())
    }
}
