use serde::{Deserialize, Serialize};

/// Maps a horizontal pointer offset to the sample under it.
///
/// Uses the same even spacing as [`crate::core::x_of`]: the step between
/// samples is `width / (count - 1)` and the index is the floor of
/// `pointer_x / step`, clamped to the sequence. Pointers outside the viewport
/// (including infinities) clamp to the first or last sample; NaN maps to the
/// first. Returns `None` only for an empty sequence.
#[must_use]
pub fn nearest_index(pointer_x: f64, width: f64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let last = count - 1;
    if last == 0 {
        return Some(0);
    }

    let step = width / last as f64;
    if !step.is_finite() || step <= 0.0 {
        return Some(0);
    }

    let raw = (pointer_x / step).floor();
    if raw.is_nan() || raw <= 0.0 {
        return Some(0);
    }
    if raw >= last as f64 {
        return Some(last);
    }
    Some(raw as usize)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    /// A drag (press + move) is scrubbing the selection.
    Dragging,
}

/// Pointer tracking for the scrub cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    mode: InteractionMode,
    pointer_x: Option<f64>,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            mode: InteractionMode::Idle,
            pointer_x: None,
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    /// Last pointer offset seen, if any.
    #[must_use]
    pub fn pointer_x(self) -> Option<f64> {
        self.pointer_x
    }

    pub fn on_pointer_move(&mut self, x: f64) {
        self.pointer_x = Some(x);
    }

    pub fn on_drag_start(&mut self, x: f64) {
        self.mode = InteractionMode::Dragging;
        self.pointer_x = Some(x);
    }

    pub fn on_drag_end(&mut self) {
        self.mode = InteractionMode::Idle;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
