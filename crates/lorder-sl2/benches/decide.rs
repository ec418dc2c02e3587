use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lorder_core::{GroupOracle, Word};
use lorder_sl2::samples::weeks;
use lorder_sl2::Sl2Oracle;

fn decide_bench(c: &mut Criterion) {
    let oracle = Sl2Oracle::new(weeks().unwrap());
    let word = Word::parse("aBaaBaaBBaBaBBaBBaaB").unwrap();
    c.bench_function("weeks_decide_len_20", |b| {
        b.iter(|| black_box(oracle.decide(black_box(&word)).unwrap()));
    });
}

criterion_group!(benches, decide_bench);
criterion_main!(benches);
