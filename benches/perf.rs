use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

use pes_predictor::demo;
use pes_predictor::model::{Algorithm, Team};
use pes_predictor::predictor::MatchPredictor;
use pes_predictor::strength::{strength_iterative, strength_recursive};

fn roster(size: usize) -> Team {
    let mut rng = StdRng::seed_from_u64(size as u64);
    demo::random_team(&mut rng, "Bench", size)
}

fn bench_strength(c: &mut Criterion) {
    for size in [11usize, 1000] {
        let team = roster(size);
        c.bench_function(&format!("strength_iterative_{size}"), |b| {
            b.iter(|| {
                let (value, n) = strength_iterative(black_box(&team)).unwrap();
                black_box((value, n));
            })
        });
        c.bench_function(&format!("strength_recursive_{size}"), |b| {
            b.iter(|| {
                let (value, n) = strength_recursive(black_box(&team)).unwrap();
                black_box((value, n));
            })
        });
    }
}

fn bench_predict(c: &mut Criterion) {
    let input = demo::sample_match();
    let predictor = MatchPredictor::new();

    for algorithm in Algorithm::ALL {
        c.bench_function(&format!("predict_{algorithm}"), |b| {
            b.iter(|| {
                let out = predictor
                    .predict(
                        black_box(&input.team1),
                        black_box(&input.team2),
                        algorithm,
                    )
                    .unwrap();
                black_box(out.iterations);
            })
        });
    }
}

criterion_group!(perf, bench_strength, bench_predict);
criterion_main!(perf);
