use criterion::{criterion_group, criterion_main, Criterion};
use ndgrid_core::{ElementwiseEngine, EngineConfig, PairwiseDistanceEngine, StridedArray};

fn random(shape: &[usize]) -> StridedArray<f64> {
    let mut a = StridedArray::<f64>::new(shape).unwrap();
    a.random(0.0, 1.0).unwrap();
    a
}

fn bench_binary_add_1m(c: &mut Criterion) {
    let engine = ElementwiseEngine::new(&EngineConfig::from_env()).unwrap();
    let a = random(&[1000, 1000]);
    let b = random(&[1000, 1000]);
    c.bench_function("binary_add_1000x1000_1_chunk", |bencher| {
        bencher.iter(|| engine.apply_binary(&a, &b, 1, |l, r| l + r).unwrap());
    });
    c.bench_function("binary_add_1000x1000_16_chunks", |bencher| {
        bencher.iter(|| engine.apply_binary(&a, &b, 16, |l, r| l + r).unwrap());
    });
}

fn bench_sequential_add_1m(c: &mut Criterion) {
    let a = random(&[1000, 1000]);
    let b = random(&[1000, 1000]);
    c.bench_function("sequential_add_1000x1000", |bencher| {
        bencher.iter(|| a.add(&b).unwrap());
    });
}

fn bench_cdist_small_lhs(c: &mut Criterion) {
    let engine = PairwiseDistanceEngine::new(&EngineConfig::from_env()).unwrap();
    let a = random(&[16, 3]);
    let b = random(&[20000, 3]);
    c.bench_function("cdist_16x20000_8_chunks", |bencher| {
        bencher.iter(|| engine.cdist(&a, &b, 8).unwrap());
    });
}

fn bench_cdist_large_lhs(c: &mut Criterion) {
    let engine = PairwiseDistanceEngine::new(&EngineConfig::from_env()).unwrap();
    let a = random(&[20000, 3]);
    let b = random(&[16, 3]);
    c.bench_function("cdist_20000x16_8_chunks", |bencher| {
        bencher.iter(|| engine.cdist(&a, &b, 8).unwrap());
    });
}

criterion_group!(
    benches,
    bench_binary_add_1m,
    bench_sequential_add_1m,
    bench_cdist_small_lhs,
    bench_cdist_large_lhs
);
criterion_main!(benches);
