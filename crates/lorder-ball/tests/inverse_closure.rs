mod common;

use common::ball;
use lorder_core::{ExactGroup, GroupOracle};
use proptest::prelude::*;

fn group_strategy() -> impl Strategy<Value = ExactGroup> {
    prop_oneof![
        Just(ExactGroup::FreeAbelian),
        Just(ExactGroup::KleinBottle),
        (0i64..4).prop_map(|k| ExactGroup::Cyclic(2 * k + 3)),
    ]
}

proptest! {
    #[test]
    fn balls_are_closed_under_inversion(group in group_strategy(), radius in 1usize..5) {
        let ball = ball(group, radius).unwrap();
        prop_assert_eq!(ball.pairs().len() * 2 + 1, ball.len());
        for id in ball.ids() {
            let inverse = ball.oracle().inverse(ball.element(id));
            prop_assert_eq!(ball.lookup(&inverse), Some(ball.inverse_of(id)));
            prop_assert_eq!(ball.product(id, ball.inverse_of(id)), Some(ball.identity()));
            prop_assert!(ball.word(id).len() <= radius);
        }
    }
}
