use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::prelude::*;
use tessel::Lloyd;

fn bench_relaxation(c: &mut Criterion) {
    let mut group = c.benchmark_group("lloyd");

    // Generate synthetic data
    let mut rng = StdRng::seed_from_u64(42);
    let n = 2000;
    let k = 32;

    let points: Vec<[f64; 2]> = (0..n)
        .map(|_| [rng.random::<f64>() * 100.0, rng.random::<f64>() * 100.0])
        .collect();
    let weights: Vec<f64> = (0..n).map(|_| rng.random::<f64>() + 0.1).collect();
    let seeds: Vec<[f64; 2]> = points.iter().step_by(n / k).copied().take(k).collect();

    group.bench_function("tessellate_n2000_k32", |b| {
        b.iter(|| {
            let model = Lloyd::new(10);
            model
                .tessellate(black_box(&points), black_box(&weights), black_box(&seeds))
                .unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_relaxation);
criterion_main!(benches);
