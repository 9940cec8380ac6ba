//! Benchmarks for grid generation.
//!
//! # Benchmarks
//!
//! - **`generator_default`**: Generates a 9x7 grid with the default blocking
//!   probability. Measures wall trials, starting-point selection and grid
//!   assembly.
//! - **`generator_dense`**: Generates a 30x30 grid with a blocking probability
//!   of 0.6, where rejection sampling often runs out of draws and falls back to
//!   enumeration.
//!
//! # Test Data
//!
//! Uses three fixed seeds to keep runs reproducible:
//!
//! - **`seed_0`**: `c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1`
//! - **`seed_1`**: `a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3`
//! - **`seed_2`**: `1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef`
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use conduit_generator::{GeneratorOptions, GridGenerator, GridSeed};
use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_with_options(c: &mut Criterion, name: &str, options: GeneratorOptions) {
    let generator = GridGenerator::new(options);

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = GridSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new(name, format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_generator_default(c: &mut Criterion) {
    bench_with_options(c, "generator_default", GeneratorOptions::default());
}

fn bench_generator_dense(c: &mut Criterion) {
    bench_with_options(
        c,
        "generator_dense",
        GeneratorOptions::default()
            .rows(30)
            .cols(30)
            .block_probability(0.6),
    );
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(8));
    targets =
        bench_generator_default,
        bench_generator_dense
);
criterion_main!(benches);
