//! Criterion benchmarks for montecarlo_core simulation
//!
//! Run with: cargo bench -p montecarlo_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use montecarlo_core::{
    ControlCategory, Criteria, MonteCarlo, SimulationBuilder, SimulationConfig, Walk,
    apply_criteria,
};

fn create_three_arm_config(walks: usize) -> SimulationConfig {
    let (config, _) = SimulationBuilder::new()
        .category("treatment A", 10.0, 1.0, 20)
        .category("treatment B", 11.0, 1.5, 20)
        .category("placebo", 12.0, 2.0, 30)
        .walks(walks)
        .build()
        .expect("benchmark config is valid");
    config
}

fn bench_generate_walks(c: &mut Criterion) {
    let config = create_three_arm_config(1_000);

    c.bench_function("generate_1000_walks", |b| {
        b.iter(|| {
            let mut mc = MonteCarlo::from_config(black_box(config.clone()), black_box(42));
            mc.generate_walks().map(|w| w.sample_count()).sum::<usize>()
        })
    });
}

fn bench_apply_criteria(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_criteria");
    let criteria = Criteria::new(ControlCategory::Last, 11.0);

    for walks in [100, 1_000, 10_000].iter() {
        let config = create_three_arm_config(*walks);

        group.bench_with_input(BenchmarkId::new("walks", walks), walks, |b, _| {
            b.iter(|| {
                let mut mc = MonteCarlo::from_config(config.clone(), 42);
                mc.apply_criteria(black_box(&criteria))
            })
        });
    }

    group.finish();
}

fn bench_score_precomputed(c: &mut Criterion) {
    let config = create_three_arm_config(1_000);
    let mut mc = MonteCarlo::from_config(config, 7);
    let walks: Vec<Walk> = mc.generate_walks().collect();
    let criteria = Criteria::new(ControlCategory::Last, 11.0);

    c.bench_function("score_1000_precomputed_walks", |b| {
        b.iter(|| apply_criteria(black_box(&walks), black_box(&criteria)))
    });
}

criterion_group!(
    benches,
    bench_generate_walks,
    bench_apply_criteria,
    bench_score_precomputed,
);
criterion_main!(benches);
