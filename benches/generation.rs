//! Benchmarks for dungeon generation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use delve::{generate, GenerationConfig};
use rand::{rngs::StdRng, SeedableRng};

fn bench_generation(c: &mut Criterion) {
    let default_config = GenerationConfig::new(42);
    c.bench_function("generate_default_50x50", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(default_config.seed);
            generate(black_box(&default_config), &mut rng)
        })
    });

    let large_config = GenerationConfig::new(42)
        .with_size(200, 120)
        .with_room_count(200)
        .with_attempt_cap(5000);
    c.bench_function("generate_large_200x120", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(large_config.seed);
            generate(black_box(&large_config), &mut rng)
        })
    });
}

criterion_group!(benches, bench_generation);
criterion_main!(benches);
