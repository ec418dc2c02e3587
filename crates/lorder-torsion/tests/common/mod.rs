#![allow(dead_code)]

use lorder_ball::CayleyBall;
use lorder_core::{ExactGroup, ExactOracle, Presentation};

pub fn exact_ball(group: ExactGroup, radius: usize) -> CayleyBall<ExactOracle> {
    let oracle = ExactOracle::new(group).expect("valid exact group");
    CayleyBall::build(oracle, radius).expect("exact ball")
}

pub fn klein_presentation() -> Presentation {
    Presentation::parse("a.b", &["abAb".to_string()]).expect("presentation")
}

pub fn free_abelian_presentation() -> Presentation {
    Presentation::parse("a.b", &["abAB".to_string()]).expect("presentation")
}
