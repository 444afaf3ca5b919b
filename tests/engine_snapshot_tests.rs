use chrono::{TimeZone, Utc};
use growth_chart::animation::{AnimationConfig, AnimationPhase, Easing};
use growth_chart::api::{
    ChartEngine, ChartEngineConfig, ChartStyle, ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshot,
};
use growth_chart::core::{Sample, SampleSequence, Viewport};
use growth_chart::render::NullRenderer;
use growth_chart::store::TimeRange;

#[test]
fn config_json_round_trip_preserves_every_field() {
    let config = ChartEngineConfig::new(Viewport::new(320.0, 180.0))
        .with_animation(AnimationConfig {
            duration_seconds: 0.8,
            easing: Easing::EaseOut,
        })
        .with_style(ChartStyle {
            line_width: 3.0,
            ..ChartStyle::default()
        })
        .with_empty_scale_ceiling(250.0)
        .with_initial_range(TimeRange::YearToDate);

    let json = config.to_json_pretty().expect("serialize");
    let parsed = ChartEngineConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn config_json_fills_defaults_for_missing_fields() {
    let parsed = ChartEngineConfig::from_json_str(r#"{"viewport":{"width":200.0,"height":100.0}}"#)
        .expect("parse");
    assert_eq!(parsed, ChartEngineConfig::new(Viewport::new(200.0, 100.0)));
    assert_eq!(parsed.animation.easing, Easing::EaseInOut);
    assert!((parsed.animation.duration_seconds - 1.2).abs() <= 1e-12);
}

#[test]
fn config_json_rejects_garbage() {
    let err = ChartEngineConfig::from_json_str("{not json").expect_err("must fail");
    assert!(format!("{err}").contains("failed to parse engine config"));
}

#[test]
fn snapshot_captures_selection_and_animation_state() {
    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(Viewport::new(100.0, 50.0)),
    )
    .expect("engine init");
    let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let sequence = SampleSequence::new(vec![
        Sample::new(at, 100.0, 120.0),
        Sample::new(at + chrono::Duration::days(1), 100.0, 125.0),
    ])
    .expect("sequence")
    .with_range(TimeRange::OneMonth);
    let sequence_id = sequence.id();
    engine.replace_sequence(sequence);
    engine.tick(10.0);

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.active_range, Some(TimeRange::OneMonth));
    assert_eq!(snapshot.sequence_id, Some(sequence_id));
    assert_eq!(snapshot.samples_len, 2);
    assert_eq!(snapshot.selected_index, Some(1));
    assert_eq!(snapshot.animation_phase, AnimationPhase::Settled);
    assert_eq!(snapshot.animation_progress, 1.0);
    let selection = snapshot.selection.expect("selection");
    assert!((selection.returns - 25.0).abs() <= 1e-12);
    assert_eq!(selection.return_ratio, Some(0.25));

    let json = snapshot.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains(&format!("\"schema_version\": {ENGINE_SNAPSHOT_JSON_SCHEMA_V1}")));
    let parsed = EngineSnapshot::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, snapshot);

    let bare = serde_json::to_string(&snapshot).expect("bare json");
    assert_eq!(EngineSnapshot::from_json_compat_str(&bare).expect("parse bare"), snapshot);
}

#[test]
fn snapshot_contract_rejects_unknown_schema_version() {
    let engine = ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(Viewport::new(100.0, 50.0)),
    )
    .expect("engine init");
    let json = engine
        .snapshot()
        .to_json_contract_v1_pretty()
        .expect("serialize")
        .replace("\"schema_version\": 1", "\"schema_version\": 99");
    let err = EngineSnapshot::from_json_compat_str(&json).expect_err("must fail");
    assert!(format!("{err}").contains("unsupported snapshot schema version"));
}
