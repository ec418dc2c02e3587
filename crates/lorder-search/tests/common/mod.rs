#![allow(dead_code)]

use lorder_ball::{CayleyBall, ElementId};
use lorder_core::{ExactGroup, ExactOracle, GroupOracle, LoError, Word};
use lorder_sl2::samples::weeks;
use lorder_sl2::Sl2Oracle;

pub fn exact_ball(group: ExactGroup, radius: usize) -> CayleyBall<ExactOracle> {
    let oracle = ExactOracle::new(group).expect("valid exact group");
    CayleyBall::build(oracle, radius).expect("exact ball")
}

pub fn weeks_ball(radius: usize) -> Result<CayleyBall<Sl2Oracle>, LoError> {
    CayleyBall::build(Sl2Oracle::new(weeks()?), radius)
}

pub fn id_of<O: GroupOracle>(ball: &CayleyBall<O>, text: &str) -> ElementId {
    let word = Word::parse(text).expect("reduced word");
    ball.find_word(&word)
        .expect("oracle accepts word")
        .expect("word inside the ball")
}
