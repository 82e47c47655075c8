// benches/shot_benchmarks.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use repetition_code_sim::prelude::*;

fn benchmark_correction_loop(c: &mut Criterion) {
    let code = RepetitionCode::new(9).unwrap();
    let noise = BitFlipChannel::new(0.05).unwrap();
    let decoder = MajorityVoteDecoder::new(9);

    c.bench_function("single_shot_depth_20_qec", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| run_single_shot(&code, &noise, Some(&decoder), black_box(20), &mut rng).unwrap());
    });

    c.bench_function("single_shot_depth_20_no_qec", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| run_single_shot(&code, &noise, None, black_box(20), &mut rng).unwrap());
    });

    c.bench_function("infer_flips_dense_delta", |b| {
        let delta = Syndrome::from_bits((0..64).map(|i| i % 3 != 0).collect());
        let mut rng = StdRng::seed_from_u64(7);
        b.iter(|| infer_data_flips_from_delta(black_box(&delta), 65, &mut rng).unwrap());
    });
}

fn benchmark_estimators(c: &mut Criterion) {
    let code = RepetitionCode::new(5).unwrap();
    let noise = BitFlipChannel::new(0.1).unwrap();
    let decoder = MajorityVoteDecoder::new(5);

    c.bench_function("estimate_1000_shots", |b| {
        b.iter(|| estimate_with_ci(&code, &noise, Some(&decoder), 20, 1000, 42, DEFAULT_ALPHA).unwrap());
    });

    c.bench_function("estimate_1000_shots_spawned", |b| {
        b.iter(|| {
            estimate_with_ci_spawned(&code, &noise, Some(&decoder), 20, 1000, 42, DEFAULT_ALPHA)
                .unwrap()
        });
    });
}

criterion_group!(benches, benchmark_correction_loop, benchmark_estimators);
criterion_main!(benches);
