mod animation_controller;
mod data_controller;
mod engine;
mod engine_config;
mod engine_snapshot;
mod interaction_controller;
mod plugin_dispatch;
mod plugin_registry;
mod render_frame_builder;
mod validation;

pub use crate::extensions::{ChartPlugin, PluginContext, PluginEvent};
pub use data_controller::{FetchOutcome, FetchTicket};
pub use engine::ChartEngine;
pub use engine_config::{ChartEngineConfig, ChartStyle};
pub use engine_snapshot::{
    ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshot, EngineSnapshotJsonContractV1,
};
pub use interaction_controller::ValueSummary;
