use serde::{Deserialize, Serialize};

use crate::animation::AnimationPhase;
use crate::core::Viewport;
use crate::interaction::InteractionMode;
use crate::store::TimeRange;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub viewport: Viewport,
    pub active_range: Option<TimeRange>,
    pub loading: bool,
    pub samples_len: usize,
    pub scale_ceiling: f64,
    pub animation_phase: AnimationPhase,
    pub animation_progress: f64,
    pub selected_index: Option<usize>,
    pub interaction_mode: InteractionMode,
}

/// State changes observers are notified about.
///
/// Every event marks a point where the host should schedule a re-render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    LoadingStarted { range: TimeRange },
    SequenceReplaced { samples_len: usize },
    LoadFailed { range: TimeRange },
    SelectionChanged { index: Option<usize> },
    ViewportChanged { width: f64, height: f64 },
    AnimationStarted,
    AnimationSettled,
    DragStarted,
    DragEnded,
    Rendered,
}

/// Observer hook for chart state changes.
///
/// Plugins read engine context but cannot mutate engine internals.
pub trait ChartPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PluginEvent, context: PluginContext);
}
