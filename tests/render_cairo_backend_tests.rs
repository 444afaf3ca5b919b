#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use chrono::{Duration, TimeZone, Utc};
use growth_chart::ChartError;
use growth_chart::api::{ChartEngine, ChartEngineConfig};
use growth_chart::core::{Sample, SampleSequence, Viewport};
use growth_chart::render::{CairoRenderStats, CairoRenderer};
use growth_chart::store::TimeRange;

fn sequence() -> SampleSequence {
    let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    SampleSequence::new(vec![
        Sample::new(start, 1_000.0, 1_100.0),
        Sample::new(start + Duration::days(30), 1_500.0, 1_700.0),
        Sample::new(start + Duration::days(60), 2_000.0, 2_400.0),
    ])
    .expect("sequence")
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_areas_line_and_cursor() {
    let renderer = CairoRenderer::new(600, 300).expect("renderer");
    let mut engine = ChartEngine::new(
        renderer,
        ChartEngineConfig::new(Viewport::new(600.0, 300.0)),
    )
    .expect("engine init");
    engine.replace_sequence(sequence());
    engine.finish_animation();

    engine.render().expect("render");
    let renderer = engine.into_renderer();
    let stats = renderer.last_stats();
    assert_eq!(stats.fills_drawn, 2);
    assert_eq!(stats.strokes_drawn, 1);
    assert_eq!(stats.lines_drawn, 1);

    let mut png = Vec::new();
    renderer.write_png(&mut png).expect("png");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn cairo_renderer_loading_frame_only_clears() {
    let renderer = CairoRenderer::new(320, 200).expect("renderer");
    let mut engine = ChartEngine::new(
        renderer,
        ChartEngineConfig::new(Viewport::new(320.0, 200.0)),
    )
    .expect("engine init");
    engine.replace_sequence(sequence());
    let _ = engine.request_range(TimeRange::FiveDays);

    engine.render().expect("render");
    assert_eq!(engine.renderer().last_stats(), CairoRenderStats::default());
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(400, 200).expect("renderer");
    let mut engine = ChartEngine::new(
        renderer,
        ChartEngineConfig::new(Viewport::new(400.0, 200.0)),
    )
    .expect("engine init");
    engine.replace_sequence(sequence());
    engine.tick(0.5);

    let surface = ImageSurface::create(Format::ARgb32, 400, 200).expect("surface");
    let context = Context::new(&surface).expect("context");
    engine
        .render_on_cairo_context(&context)
        .expect("render on context");

    let renderer = engine.into_renderer();
    assert_eq!(renderer.last_stats().lines_drawn, 1);
}
