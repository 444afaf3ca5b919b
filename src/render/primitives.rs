use serde::{Deserialize, Serialize};

use crate::core::{PathCommand, VectorPath};
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self::rgba(self.red, self.green, self.blue, alpha)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn validate_path(path: &VectorPath, kind: &str) -> ChartResult<()> {
    for command in path.commands() {
        if let PathCommand::MoveTo(point) | PathCommand::LineTo(point) = command {
            if !point.x.is_finite() || !point.y.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "{kind} path coordinates must be finite"
                )));
            }
        }
    }
    Ok(())
}

/// Filled region bounded by a closed path.
#[derive(Debug, Clone, PartialEq)]
pub struct FillPrimitive {
    pub path: VectorPath,
    pub color: Color,
}

impl FillPrimitive {
    #[must_use]
    pub fn new(path: VectorPath, color: Color) -> Self {
        Self { path, color }
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_path(&self.path, "fill")?;
        self.color.validate()
    }
}

/// Stroked open polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokePrimitive {
    pub path: VectorPath,
    pub stroke_width: f64,
    pub color: Color,
}

impl StrokePrimitive {
    #[must_use]
    pub fn new(path: VectorPath, stroke_width: f64, color: Color) -> Self {
        Self {
            path,
            stroke_width,
            color,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_path(&self.path, "stroke")?;
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    /// Full-height vertical rule at `x`.
    #[must_use]
    pub const fn vertical(x: f64, height: f64, stroke_width: f64, color: Color) -> Self {
        Self::new(x, 0.0, x, height, stroke_width, color)
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
