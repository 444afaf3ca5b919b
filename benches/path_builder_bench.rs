use chrono::{Duration, TimeZone, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use growth_chart::api::{ChartEngine, ChartEngineConfig};
use growth_chart::core::{
    PathInputs, Sample, SampleSequence, ValueTrack, Viewport, build_area_path, build_line_path,
    scale_ceiling,
};
use growth_chart::render::NullRenderer;
use std::hint::black_box;

fn generated_samples(count: usize) -> Vec<Sample> {
    let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    (0..count)
        .map(|i| {
            let t = i as f64;
            let invested = 10_000.0 + t * 50.0;
            let total = invested * (1.05 + (t * 0.1).sin().abs() * 0.2);
            Sample::new(start + Duration::days(i as i64), invested, total)
        })
        .collect()
}

fn bench_area_path_10k(c: &mut Criterion) {
    let viewport = Viewport::new(1920.0, 1080.0);
    let samples = generated_samples(10_000);
    let max_y = scale_ceiling(&samples, 1_000.0);

    c.bench_function("area_path_10k_partial_reveal", |b| {
        b.iter(|| {
            let inputs = PathInputs::new(viewport, max_y, ValueTrack::Total, black_box(0.73));
            let _ = build_area_path(black_box(&samples), inputs);
        })
    });
}

fn bench_line_path_10k(c: &mut Criterion) {
    let viewport = Viewport::new(1920.0, 1080.0);
    let samples = generated_samples(10_000);
    let max_y = scale_ceiling(&samples, 1_000.0);

    c.bench_function("line_path_10k_full", |b| {
        b.iter(|| {
            let inputs = PathInputs::new(viewport, max_y, ValueTrack::Total, black_box(1.0));
            let _ = build_line_path(black_box(&samples), inputs);
        })
    });
}

fn bench_engine_frame_2k(c: &mut Criterion) {
    let config = ChartEngineConfig::new(Viewport::new(1600.0, 900.0));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    let sequence = SampleSequence::new(generated_samples(2_000)).expect("valid sequence");
    engine.replace_sequence(sequence);
    engine.tick(0.6);

    c.bench_function("engine_render_frame_2k", |b| {
        b.iter(|| {
            let _ = black_box(engine.build_render_frame());
        })
    });
}

criterion_group!(
    benches,
    bench_area_path_10k,
    bench_line_path_10k,
    bench_engine_frame_2k
);
criterion_main!(benches);
