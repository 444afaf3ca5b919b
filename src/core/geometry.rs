use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::Sample;

/// Scale ceiling used when a sequence has no samples.
pub const DEFAULT_EMPTY_SCALE_CEILING: f64 = 1_000.0;

/// Point in plot-space pixels, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

impl PlotPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Maps a sample index to its x coordinate.
///
/// Samples are spread evenly so the first lands on `0` and the last on
/// `width`. Sequences with fewer than two samples anchor at `0`.
#[must_use]
pub fn x_of(index: usize, count: usize, width: f64) -> f64 {
    if count <= 1 {
        return 0.0;
    }
    width * index as f64 / (count - 1) as f64
}

/// Maps a value to its y coordinate on the shared `0..=max_y` scale.
///
/// Higher values plot higher (smaller y). A zero, negative or non-finite
/// ceiling plots everything on the baseline, and the result is kept inside
/// `[0, height]`.
#[must_use]
pub fn y_of(value: f64, max_y: f64, height: f64) -> f64 {
    if !max_y.is_finite() || max_y <= 0.0 || !value.is_finite() {
        return height;
    }
    let y = height * (1.0 - value / max_y);
    y.clamp(0.0, height.max(0.0))
}

/// Largest `total_value` in `samples`, or `fallback` when there are none.
///
/// Both value tracks are drawn against this single ceiling.
#[must_use]
pub fn scale_ceiling(samples: &[Sample], fallback: f64) -> f64 {
    samples
        .iter()
        .map(|sample| OrderedFloat(sample.total_value))
        .max()
        .map_or(fallback, |max| max.into_inner())
}
