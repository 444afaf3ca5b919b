use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Sample, x_of};
use crate::interaction::{InteractionMode, nearest_index};
use crate::render::Renderer;

use super::{ChartEngine, PluginEvent};

/// Header values for the selected sample. Text formatting is left to hosts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueSummary {
    pub timestamp: DateTime<Utc>,
    pub invested: f64,
    pub total: f64,
    pub returns: f64,
    /// `returns / invested`, `None` when nothing is invested.
    pub return_ratio: Option<f64>,
}

impl ValueSummary {
    #[must_use]
    pub fn from_sample(sample: &Sample) -> Self {
        let returns = sample.returns();
        let return_ratio =
            (sample.invested_value != 0.0).then(|| returns / sample.invested_value);
        Self {
            timestamp: sample.timestamp,
            invested: sample.invested_value,
            total: sample.total_value,
            returns,
            return_ratio,
        }
    }
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    /// Scrubs the selection to the sample under `x`.
    ///
    /// Never touches the animation; safe to call at pointer-event rate.
    pub fn pointer_move(&mut self, x: f64) -> Option<usize> {
        self.interaction.on_pointer_move(x);
        self.select_at(x)
    }

    pub fn drag_start(&mut self, x: f64) -> Option<usize> {
        self.interaction.on_drag_start(x);
        self.emit_plugin_event(PluginEvent::DragStarted);
        self.select_at(x)
    }

    pub fn drag_move(&mut self, x: f64) -> Option<usize> {
        self.pointer_move(x)
    }

    /// Ends a drag; the last scrubbed sample stays selected.
    pub fn drag_end(&mut self) {
        if self.interaction.mode() == InteractionMode::Dragging {
            self.interaction.on_drag_end();
            self.emit_plugin_event(PluginEvent::DragEnded);
        }
    }

    /// Selects the sample whose slot contains pointer offset `x`.
    pub fn select_at(&mut self, x: f64) -> Option<usize> {
        let index = nearest_index(x, self.viewport.width, self.samples_len());
        trace!(x, ?index, "pointer mapped to sample");
        self.set_selected_index(index);
        index
    }

    /// Selects by index, clamping to the last sample.
    pub fn select_index(&mut self, index: usize) -> Option<usize> {
        let index = self
            .samples_len()
            .checked_sub(1)
            .map(|last| index.min(last));
        self.set_selected_index(index);
        index
    }

    pub fn clear_selection(&mut self) {
        self.set_selected_index(None);
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    #[must_use]
    pub fn selected_sample(&self) -> Option<&Sample> {
        let index = self.selected_index?;
        self.sequence.as_ref()?.get(index)
    }

    #[must_use]
    pub fn selection_summary(&self) -> Option<ValueSummary> {
        self.selected_sample().map(ValueSummary::from_sample)
    }

    /// X coordinate of the selection cursor for the current viewport.
    #[must_use]
    pub fn cursor_x(&self) -> Option<f64> {
        let index = self.selected_index?;
        Some(x_of(index, self.samples_len(), self.viewport.width))
    }

    pub(super) fn set_selected_index(&mut self, index: Option<usize>) {
        if self.selected_index == index {
            return;
        }
        self.selected_index = index;
        self.emit_plugin_event(PluginEvent::SelectionChanged { index });
    }
}
