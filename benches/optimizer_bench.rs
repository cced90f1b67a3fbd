use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use packs::{PackOptimizer, PackSize, DEFAULT_PACK_SIZES};

fn bench_compute_distribution(c: &mut Criterion) {
    let optimizer = PackOptimizer::default();

    let default_sizes: Vec<PackSize> = DEFAULT_PACK_SIZES
        .iter()
        .filter_map(|&s| PackSize::try_from(s).ok())
        .collect();
    let odd_sizes: Vec<PackSize> = [23u32, 31, 53]
        .iter()
        .filter_map(|&s| PackSize::try_from(s).ok())
        .collect();

    let mut group = c.benchmark_group("compute_distribution");
    for order in [1_001i64, 12_001, 100_001, 1_000_001] {
        group.bench_with_input(BenchmarkId::new("default_sizes", order), &order, |b, &order| {
            b.iter(|| optimizer.compute_distribution(black_box(order), &default_sizes))
        });
        group.bench_with_input(BenchmarkId::new("odd_sizes", order), &order, |b, &order| {
            b.iter(|| optimizer.compute_distribution(black_box(order), &odd_sizes))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compute_distribution);
criterion_main!(benches);
