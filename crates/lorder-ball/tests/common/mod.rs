#![allow(dead_code)]

use lorder_ball::CayleyBall;
use lorder_core::{ExactGroup, ExactOracle, LoError};

pub fn exact(group: ExactGroup) -> ExactOracle {
    ExactOracle::new(group).expect("valid exact group")
}

pub fn ball(group: ExactGroup, radius: usize) -> Result<CayleyBall<ExactOracle>, LoError> {
    CayleyBall::build(exact(group), radius)
}
