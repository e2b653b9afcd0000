use airfoil_spline_editor::{sample_curve, BSpline};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use std::hint::black_box;

/// Baut eine geschlossene Kurve mit `editable` Punkten auf einem Kreis.
fn build_closed_ring(degree: usize, editable: usize) -> BSpline {
    let points: Vec<Vec2> = (0..editable)
        .map(|i| {
            let angle = i as f32 / editable as f32 * std::f32::consts::TAU;
            Vec2::new(angle.cos() * 0.25, angle.sin() * 0.25)
        })
        .collect();

    BSpline::from_editable_points(degree, &points).expect("Ring-Kurve ist gültig")
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for &editable in &[8usize, 32, 128] {
        let spline = build_closed_ring(3, editable);
        let (low, high) = spline.domain();

        group.bench_with_input(
            BenchmarkId::new("de_boor_sweep", editable),
            &spline,
            |b, spline| {
                b.iter(|| {
                    let mut acc = Vec2::ZERO;
                    for i in 0..256 {
                        let t = low + (high - low) * (i as f32 / 255.0);
                        acc += spline.evaluate(black_box(t));
                    }
                    black_box(acc)
                })
            },
        );
    }

    group.finish();
}

fn bench_sample_curve(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_curve");

    for &n_samples in &[100usize, 1000] {
        let spline = build_closed_ring(3, 32);

        group.bench_with_input(
            BenchmarkId::new("closed_polyline", n_samples),
            &n_samples,
            |b, &n| {
                b.iter(|| black_box(sample_curve(black_box(&spline), n)))
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_sample_curve);
criterion_main!(benches);
