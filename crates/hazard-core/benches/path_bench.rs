// File: crates/hazard-core/benches/path_bench.rs
// Summary: Benchmark smoothed path emission over large point runs.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hazard_core::CurveKind;

fn gen_points(n: usize) -> Vec<(f64, f64)> {
    let mut v = Vec::with_capacity(n);
    for i in 0..n {
        // simple waveform with drift
        let x = i as f64;
        let y = (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001);
        v.push((x, y));
    }
    v
}

fn bench_curves(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_emit");
    for &n in &[10_000usize, 50_000usize] {
        let data = gen_points(n);
        for (name, curve) in [
            ("basis", CurveKind::Basis),
            ("cardinal", CurveKind::Cardinal { tension: 0.5 }),
        ] {
            group.bench_with_input(BenchmarkId::from_parameter(format!("{name}_n{n}")), &curve, |b, curve| {
                b.iter_batched(
                    || data.clone(),
                    |d| {
                        let _ = black_box(curve.emit(&d));
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_curves);
criterion_main!(benches);
