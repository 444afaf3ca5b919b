use serde::{Deserialize, Serialize};

use crate::animation::AnimationPhase;
use crate::core::{SequenceId, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;
use crate::store::TimeRange;

use super::{ChartEngine, ValueSummary};

pub const ENGINE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable state snapshot used by regression tests and debugging tools.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub active_range: Option<TimeRange>,
    pub pending_range: Option<TimeRange>,
    pub sequence_id: Option<SequenceId>,
    pub samples_len: usize,
    pub scale_ceiling: f64,
    pub animation_phase: AnimationPhase,
    pub animation_progress: f64,
    pub animation_generation: u64,
    pub selected_index: Option<usize>,
    pub selection: Option<ValueSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: EngineSnapshot,
}

impl EngineSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = EngineSnapshotJsonContractV1 {
            schema_version: ENGINE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: *self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<EngineSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: EngineSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != ENGINE_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            viewport: self.viewport,
            active_range: self.fetch.active_range,
            pending_range: self.fetch.pending,
            sequence_id: self.sequence.as_ref().map(|sequence| sequence.id()),
            samples_len: self.samples_len(),
            scale_ceiling: self.scale_ceiling(),
            animation_phase: self.animation.phase(),
            animation_progress: self.animation.progress(),
            animation_generation: self.animation.generation().0,
            selected_index: self.selected_index,
            selection: self.selection_summary(),
        }
    }
}
