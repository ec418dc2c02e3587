mod common;

use common::{ball, exact};
use lorder_ball::{BallConfig, CayleyBall};
use lorder_core::{ExactGroup, GroupOracle, LoError, Word};

#[test]
fn free_abelian_ball_counts_lattice_points() -> Result<(), LoError> {
    let ball = ball(ExactGroup::FreeAbelian, 3)?;
    assert_eq!(ball.len(), 25);
    assert_eq!(ball.pairs().len(), 12);
    let summary = ball.summary();
    assert_eq!(summary.radius, 3);
    assert_eq!(summary.elements, 25);
    assert_eq!(summary.collisions, 53 - 25);
    Ok(())
}

#[test]
fn klein_bottle_ball_sizes() -> Result<(), LoError> {
    assert_eq!(ball(ExactGroup::KleinBottle, 1)?.len(), 5);
    assert_eq!(ball(ExactGroup::KleinBottle, 2)?.len(), 13);
    assert_eq!(ball(ExactGroup::KleinBottle, 3)?.len(), 25);
    Ok(())
}

#[test]
fn identity_is_the_empty_word() -> Result<(), LoError> {
    let ball = ball(ExactGroup::KleinBottle, 2)?;
    let identity = ball.identity();
    assert!(ball.word(identity).is_empty());
    assert_eq!(ball.inverse_of(identity), identity);
    assert!(ball.oracle().is_identity(ball.element(identity)));
    Ok(())
}

#[test]
fn pair_labels_are_mutually_inverse() -> Result<(), LoError> {
    let ball = ball(ExactGroup::KleinBottle, 3)?;
    for pair in ball.pairs() {
        assert_eq!(ball.word(pair.second), &ball.word(pair.first).invert());
        assert_eq!(ball.inverse_of(pair.first), pair.second);
        assert_eq!(ball.inverse_of(pair.second), pair.first);
        assert!(pair.first < pair.second);
    }
    Ok(())
}

#[test]
fn every_non_identity_element_is_in_exactly_one_pair() -> Result<(), LoError> {
    let ball = ball(ExactGroup::FreeAbelian, 2)?;
    for id in ball.ids().skip(1) {
        let count = ball.pairs().iter().filter(|pair| pair.contains(id)).count();
        assert_eq!(count, 1, "element {} pairing", ball.word(id));
    }
    Ok(())
}

#[test]
fn products_resolve_inside_the_ball() -> Result<(), LoError> {
    let ball = ball(ExactGroup::FreeAbelian, 2)?;
    let a = ball.find_word(&Word::parse("a")?)?.expect("a in ball");
    let b = ball.find_word(&Word::parse("b")?)?.expect("b in ball");
    let ab = ball.product(a, b).expect("ab in ball");
    assert_eq!(Some(ab), ball.product(b, a));
    assert_eq!(ball.product(a, ball.inverse_of(a)), Some(ball.identity()));
    let aa = ball.product(a, a).expect("aa in ball");
    assert_eq!(ball.product(aa, aa), None);
    Ok(())
}

#[test]
fn radius_zero_is_rejected() {
    let err = ball(ExactGroup::FreeAbelian, 0).unwrap_err();
    assert_eq!(err.info().code, "ball-radius");
    let config = BallConfig { radius: 0 };
    let err = CayleyBall::from_config(exact(ExactGroup::FreeAbelian), &config).unwrap_err();
    assert_eq!(err.info().code, "config-radius");
}

#[test]
fn involutions_are_rejected() {
    let err = ball(ExactGroup::Cyclic(4), 1).unwrap_err();
    assert_eq!(err.info().code, "ball-involution");
    assert_eq!(err.info().context.get("word"), Some(&"b".to_string()));
}

#[test]
fn finite_cyclic_group_collapses_to_its_elements() -> Result<(), LoError> {
    let ball = ball(ExactGroup::Cyclic(5), 2)?;
    assert_eq!(ball.len(), 5);
    assert_eq!(ball.pairs().len(), 2);
    Ok(())
}

#[test]
fn default_config_uses_radius_three() -> Result<(), LoError> {
    let config: BallConfig = serde_json::from_str("{}").expect("config");
    assert_eq!(config, BallConfig::default());
    let ball = CayleyBall::from_config(exact(ExactGroup::FreeAbelian), &config)?;
    assert_eq!(ball.radius(), 3);
    Ok(())
}

#[test]
fn conjugates_skip_intermediate_products() -> Result<(), LoError> {
    let ball = ball(ExactGroup::KleinBottle, 1)?;
    let a = ball.find_word(&Word::parse("a")?)?.expect("a");
    let b = ball.find_word(&Word::parse("b")?)?.expect("b");
    assert_eq!(ball.product(a, b), None);
    assert_eq!(ball.conjugate(a, b), Some(ball.inverse_of(b)));
    assert_eq!(ball.conjugate(ball.identity(), a), Some(a));
    // b·a·B lies outside the radius-1 ball.
    assert_eq!(ball.conjugate(b, a), None);
    let outside = ball.conjugate_value(b, a);
    assert!(ball.oracle().equal(&outside, &ball.oracle().represent(&Word::parse("bba")?)?));
    Ok(())
}
