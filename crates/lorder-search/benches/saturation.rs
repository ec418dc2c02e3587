use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lorder_ball::CayleyBall;
use lorder_core::{ExactGroup, ExactOracle, Word};
use lorder_search::{Monoid, OrderSearch, SearchConfig};
use lorder_sl2::samples::weeks;
use lorder_sl2::Sl2Oracle;

fn saturation_bench(c: &mut Criterion) {
    let oracle = ExactOracle::new(ExactGroup::FreeAbelian).unwrap();
    let ball = CayleyBall::build(oracle, 6).unwrap();
    let a = ball.find_word(&Word::letter('a')).unwrap().unwrap();
    let b = ball.find_word(&Word::letter('b')).unwrap().unwrap();
    c.bench_function("free_abelian_radius_6_quadrant", |bench| {
        bench.iter(|| black_box(Monoid::saturate(&ball, &[a, b]).len()));
    });
}

fn weeks_search_bench(c: &mut Criterion) {
    let ball = CayleyBall::build(Sl2Oracle::new(weeks().unwrap()), 3).unwrap();
    let a = ball.find_word(&Word::letter('a')).unwrap().unwrap();
    c.bench_function("weeks_radius_3_order_search", |bench| {
        bench.iter(|| black_box(OrderSearch::run(&ball, a, &SearchConfig::default()).unwrap()));
    });
}

criterion_group!(benches, saturation_bench, weeks_search_bench);
criterion_main!(benches);
