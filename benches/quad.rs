use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bayes_factor::quad::{quad, QuadConfig};
use bayes_factor::{BayesFactor, Interval, Observation, Uniform};

fn bench_flat_marginal(c: &mut Criterion) {
    let obs = Observation::new(30, 15).unwrap();
    c.bench_function("flat marginal, n=30 k=15", |b| {
        b.iter(|| {
            let q =
                quad(&|p| obs.pmf(p), 0.0, 1.0, &QuadConfig::default());
            black_box(q)
        })
    });
}

fn bench_spike_bayes_factor(c: &mut Criterion) {
    let obs = Observation::new(30, 15).unwrap();
    let spike = Interval::new(0.45, 0.55, 10.0).unwrap();
    c.bench_function("spike vs flat, n=30 k=15", |b| {
        b.iter(|| {
            let bf = BayesFactor::new(obs, Uniform, spike);
            black_box(bf.compute().unwrap())
        })
    });
}

criterion_group!(benches, bench_flat_marginal, bench_spike_bayes_factor);
criterion_main!(benches);
