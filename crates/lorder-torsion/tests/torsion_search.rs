mod common;

use common::{exact_ball, free_abelian_presentation, klein_presentation};
use lorder_core::{ExactGroup, GroupOracle, LoError};
use lorder_sl2::samples::weeks;
use lorder_sl2::Sl2Oracle;
use lorder_torsion::{
    has_generalized_torsion, ExponentSumMap, HomologyMap, TorsionConfig, TorsionOutcome,
    TorsionSearch,
};

fn factors(max_factors: usize) -> TorsionConfig {
    TorsionConfig {
        max_factors,
        ..TorsionConfig::default()
    }
}

#[test]
fn klein_bottle_b_is_conjugate_to_its_inverse() -> Result<(), LoError> {
    let ball = exact_ball(ExactGroup::KleinBottle, 3);
    let map = ExponentSumMap::from_presentation(&klein_presentation());
    let report = TorsionSearch::run(&ball, &TorsionConfig::default(), Some(&map))?;
    let TorsionOutcome::Found(witness) = report.outcome else {
        panic!("expected a witness");
    };
    assert_eq!(witness.element.as_str(), "b");
    assert_eq!(witness.conjugators.len(), 2);
    assert!(ball.oracle().decide(&witness.product_word())?.is_trivial());
    assert_eq!(report.stats.filtered, 1);
    assert_eq!(report.stats.candidates, 1);
    Ok(())
}

#[test]
fn homology_filter_only_prunes() -> Result<(), LoError> {
    let ball = exact_ball(ExactGroup::KleinBottle, 3);
    let config = TorsionConfig {
        use_homology: false,
        ..TorsionConfig::default()
    };
    let report = TorsionSearch::run(&ball, &config, None)?;
    assert!(matches!(report.outcome, TorsionOutcome::Found(_)));
    assert_eq!(report.stats.filtered, 0);
    assert_eq!(report.stats.candidates, 2);
    Ok(())
}

#[test]
fn free_abelian_group_has_no_generalized_torsion() -> Result<(), LoError> {
    let ball = exact_ball(ExactGroup::FreeAbelian, 3);
    let map = ExponentSumMap::from_presentation(&free_abelian_presentation());
    assert_eq!(map.rank(), 2);
    let report = TorsionSearch::run(&ball, &factors(4), None)?;
    assert_eq!(report.outcome, TorsionOutcome::Exhausted);
    assert_eq!(report.stats.candidates, 12);
    let filtered = TorsionSearch::run(&ball, &factors(4), Some(&map))?;
    assert_eq!(filtered.outcome, TorsionOutcome::Exhausted);
    assert_eq!(filtered.stats.filtered, 12);
    Ok(())
}

#[test]
fn factor_bound_limits_the_product_length() -> Result<(), LoError> {
    let ball = exact_ball(ExactGroup::Cyclic(5), 2);
    let short = TorsionSearch::run(&ball, &factors(4), None)?;
    assert_eq!(short.outcome, TorsionOutcome::Exhausted);
    let long = TorsionSearch::run(&ball, &factors(5), None)?;
    let TorsionOutcome::Found(witness) = long.outcome else {
        panic!("expected a witness");
    };
    assert_eq!(witness.element.as_str(), "a");
    assert_eq!(witness.conjugators.len(), 5);
    assert_eq!(witness.product_word().as_str(), "aaaaa");
    Ok(())
}

#[test]
fn partial_products_may_leave_the_ball() -> Result<(), LoError> {
    let ball = exact_ball(ExactGroup::Cyclic(7), 1);
    let config = TorsionConfig {
        max_factors: 7,
        use_homology: false,
    };
    let report = TorsionSearch::run(&ball, &config, None)?;
    let TorsionOutcome::Found(witness) = report.outcome else {
        panic!("expected a witness");
    };
    assert_eq!(witness.element.as_str(), "a");
    assert_eq!(witness.conjugators.len(), 7);
    assert_eq!(witness.product_word().as_str(), "aaaaaaa");
    assert!(ball.oracle().decide(&witness.product_word())?.is_trivial());
    Ok(())
}

#[test]
fn factor_bound_below_two_is_rejected() {
    let ball = exact_ball(ExactGroup::FreeAbelian, 1);
    let err = TorsionSearch::run(&ball, &factors(1), None).unwrap_err();
    assert_eq!(err.info().code, "config-factors");
}

#[test]
fn weeks_search_terminates_with_a_checkable_answer() -> Result<(), LoError> {
    let rep = weeks()?;
    let map = ExponentSumMap::from_presentation(rep.presentation());
    assert!(map.is_null(&lorder_core::Word::parse("ab")?));
    let oracle = Sl2Oracle::new(rep);
    let report = has_generalized_torsion(oracle.clone(), 2, &factors(3), Some(&map))?;
    if let TorsionOutcome::Found(witness) = &report.outcome {
        assert!(oracle.decide(&witness.product_word())?.is_trivial());
    }
    assert_eq!(report.stats.filtered, 0);
    Ok(())
}

#[test]
fn config_defaults_from_yaml() {
    let config: TorsionConfig = serde_yaml::from_str("max_factors: 3").expect("config");
    assert_eq!(config.max_factors, 3);
    assert!(config.use_homology);
    let report = serde_json::to_value(TorsionOutcome::Exhausted).expect("json");
    assert_eq!(report["status"], "exhausted");
}
