//! Criterion benchmarks for curve resampling, glow noise regeneration,
//! easing evaluation, and sphere picking.

// `criterion_group!` expands to an undocumented `pub fn`, and lint
// attributes on macro invocations are ignored, so the allowance must be
// target-wide.
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::{Vec2, Vec3};
use lissa::camera::Camera;
use lissa::curve::{
    CurveParameters, CurveSample, BASE_SCALE, FULL_POINT_COUNT,
    MINIATURE_POINT_COUNT,
};
use lissa::picking::{pick, PickCandidate};
use lissa::util::easing::EasingFunction;
use web_time::Duration;

fn resample_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("resample");
    let params = CurveParameters::default();

    for count in [500, MINIATURE_POINT_COUNT, FULL_POINT_COUNT] {
        let mut sample = CurveSample::new(count);
        let _ = group.bench_function(format!("{count}_points"), |b| {
            b.iter(|| sample.resample(black_box(&params)))
        });
    }
    group.finish();
}

fn noise_regeneration_benchmark(c: &mut Criterion) {
    let mut sample = CurveSample::with_glow(FULL_POINT_COUNT);
    sample.resample(&CurveParameters::default());

    // 70 ms falls in an odd window, so the gate is open and every
    // iteration regenerates the full glow buffer.
    let elapsed = Duration::from_millis(70);
    let _ = c.bench_function("noise_regeneration_full", |b| {
        b.iter(|| black_box(sample.update_noise(black_box(elapsed))))
    });
}

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::QuadraticOut;
    let _ = c.bench_function("quadratic_out_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.5))))
    });
}

fn pick_benchmark(c: &mut Criterion) {
    let camera =
        Camera::looking_at_origin(Vec3::new(10.0, 10.0, 10.0), Vec3::Y, 16.0 / 9.0);
    let radius = CurveParameters::default().amplitude_envelope()
        * BASE_SCALE
        * 0.35;

    // Worst case: the full 4x4 grid of miniature figures.
    let names: Vec<String> =
        (0..16).map(|i| format!("lissajous-group-{i}")).collect();
    let candidates: Vec<PickCandidate<'_>> = names
        .iter()
        .enumerate()
        .map(|(i, name)| PickCandidate {
            name,
            center: Vec3::new(
                (i % 4) as f32 * 4.0 - 6.0,
                0.0,
                (i / 4) as f32 * 4.0 - 6.0,
            ),
            radius,
        })
        .collect();

    let _ = c.bench_function("pick_16_candidates", |b| {
        b.iter(|| {
            black_box(pick(
                black_box(Vec2::new(0.1, -0.2)),
                &camera,
                &candidates,
            ))
        })
    });
}

criterion_group!(
    benches,
    resample_benchmark,
    noise_regeneration_benchmark,
    easing_benchmark,
    pick_benchmark
);
criterion_main!(benches);
