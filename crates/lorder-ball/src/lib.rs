#![deny(missing_docs)]
#![doc = "Cayley balls: finite neighbourhoods of the identity built through a group oracle."]

//! Free-ball enumeration, the canonical element pool and inverse pairing.

mod ball;
mod config;
mod free;
mod pool;

pub use ball::{BallSummary, CayleyBall, InversePair};
pub use config::BallConfig;
pub use free::{free_ball, free_ball_size, letters};
pub use pool::{ElementId, ElementPool};
