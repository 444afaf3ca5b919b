use approx::assert_abs_diff_eq;
use chrono::{Duration, TimeZone, Utc};
use growth_chart::ChartError;
use growth_chart::animation::{AnimationConfig, Easing};
use growth_chart::api::{ChartEngine, ChartEngineConfig, ChartStyle};
use growth_chart::core::{PathCommand, PlotPoint, Sample, SampleSequence, VectorPath, Viewport};
use growth_chart::render::{
    Color, FillPrimitive, LinePrimitive, NullRenderer, RenderFrame, Renderer, StrokePrimitive,
};

fn engine_with(style: ChartStyle) -> ChartEngine<NullRenderer> {
    let config = ChartEngineConfig::new(Viewport::new(100.0, 50.0))
        .with_style(style)
        .with_animation(AnimationConfig {
            duration_seconds: 1.0,
            easing: Easing::Linear,
        });
    ChartEngine::new(NullRenderer::default(), config).expect("engine init")
}

fn sequence() -> SampleSequence {
    let start = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
    SampleSequence::new(vec![
        Sample::new(start, 80.0, 100.0),
        Sample::new(start + Duration::days(1), 120.0, 200.0),
        Sample::new(start + Duration::days(2), 140.0, 150.0),
    ])
    .expect("sequence")
}

#[test]
fn frame_layers_invested_below_total_then_line_then_cursor() {
    let style = ChartStyle::default();
    let mut engine = engine_with(style);
    engine.replace_sequence(sequence());
    engine.tick(1.0);

    let frame = engine.build_render_frame();
    assert!(!frame.loading);
    assert_eq!(frame.fills.len(), 2);
    assert_eq!(frame.fills[0].color, style.invested_fill);
    assert_eq!(frame.fills[1].color, style.total_fill);
    assert_eq!(frame.strokes.len(), 1);
    assert_eq!(frame.strokes[0].color, style.line_color);

    // Invested track: 80, 120, 140 against the 200 ceiling.
    let invested = frame.fills[0].path.vertices();
    assert_abs_diff_eq!(invested[2].y, 30.0, epsilon = 1e-9);
    assert_abs_diff_eq!(invested[3].y, 20.0, epsilon = 1e-9);
    assert_abs_diff_eq!(invested[4].y, 15.0, epsilon = 1e-9);

    let total_line = frame.strokes[0].path.vertices();
    assert_eq!(total_line.len(), 3);
    assert_abs_diff_eq!(total_line[1].y, 0.0, epsilon = 1e-9);

    assert_eq!(frame.lines.len(), 1);
    let cursor = frame.lines[0];
    assert_abs_diff_eq!(cursor.x1, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(cursor.x2, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(cursor.y1, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(cursor.y2, 50.0, epsilon = 1e-9);
}

#[test]
fn cursor_follows_selection_and_can_be_hidden() {
    let mut engine = engine_with(ChartStyle::default());
    engine.replace_sequence(sequence());
    engine.pointer_move(55.0);
    let frame = engine.build_render_frame();
    assert_abs_diff_eq!(frame.lines[0].x1, 50.0, epsilon = 1e-9);

    let hidden = ChartStyle {
        show_cursor: false,
        ..ChartStyle::default()
    };
    engine.set_style(hidden).expect("style");
    assert!(engine.build_render_frame().lines.is_empty());
}

#[test]
fn frame_at_mount_of_new_sequence_has_no_paths() {
    let mut engine = engine_with(ChartStyle::default());
    engine.replace_sequence(sequence());
    let frame = engine.build_render_frame();
    assert!(frame.fills.is_empty());
    assert!(frame.strokes.is_empty());
    // The cursor is independent of the reveal.
    assert_eq!(frame.lines.len(), 1);
}

#[test]
fn loading_frame_is_a_placeholder() {
    let mut engine = engine_with(ChartStyle::default());
    engine.replace_sequence(sequence());
    engine.request_range(growth_chart::store::TimeRange::OneYear);
    let frame = engine.build_render_frame();
    assert!(frame.loading);
    assert!(frame.is_empty());

    engine.render().expect("render");
    assert!(engine.renderer().last_loading);
}

#[test]
fn null_renderer_counts_layers() {
    let mut engine = engine_with(ChartStyle::default());
    engine.replace_sequence(sequence());
    engine.tick(0.5);
    engine.render().expect("render");

    let renderer = engine.into_renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_fill_count, 2);
    assert_eq!(renderer.last_stroke_count, 1);
    assert_eq!(renderer.last_line_count, 1);
    assert!(!renderer.last_loading);
}

#[test]
fn frame_validation_rejects_non_finite_paths() {
    let mut path = VectorPath::new();
    path.move_to(PlotPoint::new(0.0, 0.0));
    path.line_to(PlotPoint::new(f64::NAN, 3.0));

    let frame = RenderFrame::new(Viewport::new(10.0, 10.0))
        .with_stroke(StrokePrimitive::new(path, 1.0, Color::rgb(0.0, 0.0, 0.0)));
    let mut renderer = NullRenderer::default();
    let err = renderer.render(&frame).expect_err("nan must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn frame_builders_skip_empty_paths() {
    let frame = RenderFrame::new(Viewport::new(10.0, 10.0))
        .with_fill(FillPrimitive::new(VectorPath::new(), Color::rgb(0.0, 0.0, 0.0)))
        .with_stroke(StrokePrimitive::new(
            VectorPath::new(),
            1.0,
            Color::rgb(0.0, 0.0, 0.0),
        ));
    assert!(frame.is_empty());

    let frame = frame.with_line(LinePrimitive::vertical(4.0, 10.0, 1.0, Color::rgb(1.0, 1.0, 1.0)));
    assert!(!frame.is_empty());
    assert!(frame.validate().is_ok());
}

#[test]
fn closing_command_is_last_in_fill_paths() {
    let mut engine = engine_with(ChartStyle::default());
    engine.replace_sequence(sequence());
    engine.tick(0.8);
    for fill in engine.build_render_frame().fills {
        assert_eq!(fill.path.commands().last(), Some(&PathCommand::Close));
    }
}
