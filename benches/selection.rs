//! Performance measurement for weighted selection at varying domain sizes

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use wavetile::algorithm::selection::WeightTable;

/// Measures prefix-sum construction and picking across domain sizes
fn bench_weighted_pick(c: &mut Criterion) {
    let mut group = c.benchmark_group("weighted_pick");

    for domain_size in &[4usize, 16, 64, 256] {
        let weights: Vec<f64> = (0..*domain_size).map(|i| 0.1f64.mul_add(i as f64, 1.0)).collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(domain_size),
            domain_size,
            |b, _| {
                b.iter(|| {
                    let table = WeightTable::new(black_box(&weights));
                    let total = table.total();
                    for step in 0..8 {
                        let draw = total * (step as f64) / 8.0;
                        black_box(table.pick(draw));
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_weighted_pick);
criterion_main!(benches);
