use serde::{Deserialize, Serialize};

use crate::animation::AnimationConfig;
use crate::core::{DEFAULT_EMPTY_SCALE_CEILING, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;
use crate::store::TimeRange;

/// Colors and stroke widths for the composited chart layers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    /// Bottom band: invested capital.
    pub invested_fill: Color,
    /// Total-value area drawn over the invested band; translucent so the
    /// invested band stays visible and the gap reads as returns.
    pub total_fill: Color,
    pub line_color: Color,
    pub line_width: f64,
    pub cursor_color: Color,
    pub cursor_width: f64,
    #[serde(default = "default_show_cursor")]
    pub show_cursor: bool,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            invested_fill: Color::rgba(0.40, 0.47, 0.58, 0.45),
            total_fill: Color::rgba(0.16, 0.70, 0.45, 0.35),
            line_color: Color::rgb(0.16, 0.70, 0.45),
            line_width: 2.0,
            cursor_color: Color::rgba(0.55, 0.55, 0.60, 0.9),
            cursor_width: 1.0,
            show_cursor: true,
        }
    }
}

fn default_show_cursor() -> bool {
    true
}

fn default_empty_scale_ceiling() -> f64 {
    DEFAULT_EMPTY_SCALE_CEILING
}

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can persist chart setup as JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub style: ChartStyle,
    /// Scale ceiling used while the sequence is empty.
    #[serde(default = "default_empty_scale_ceiling")]
    pub empty_scale_ceiling: f64,
    /// Range a host should request first.
    #[serde(default)]
    pub initial_range: TimeRange,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            animation: AnimationConfig::default(),
            style: ChartStyle::default(),
            empty_scale_ceiling: DEFAULT_EMPTY_SCALE_CEILING,
            initial_range: TimeRange::default(),
        }
    }

    #[must_use]
    pub fn with_animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_empty_scale_ceiling(mut self, ceiling: f64) -> Self {
        self.empty_scale_ceiling = ceiling;
        self
    }

    #[must_use]
    pub fn with_initial_range(mut self, range: TimeRange) -> Self {
        self.initial_range = range;
        self
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize engine config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse engine config: {e}")))
    }
}
