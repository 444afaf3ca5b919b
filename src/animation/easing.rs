use serde::{Deserialize, Serialize};

use crate::core::primitives::clamp_unit;

/// Timing curve applied to linear animation time.
///
/// The non-linear variants are the standard CSS cubic-bezier curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

impl Easing {
    /// Maps linear time `t` in `[0, 1]` to eased progress in `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = clamp_unit(t);
        let curve = match self {
            Self::Linear => return t,
            Self::EaseIn => CubicBezier::new(0.42, 0.0, 1.0, 1.0),
            Self::EaseOut => CubicBezier::new(0.0, 0.0, 0.58, 1.0),
            Self::EaseInOut => CubicBezier::new(0.42, 0.0, 0.58, 1.0),
        };
        clamp_unit(curve.solve(t))
    }
}

/// Cubic bezier timing function anchored at `(0,0)` and `(1,1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    const EPSILON: f64 = 1e-7;

    const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn component(t: f64, p1: f64, p2: f64) -> f64 {
        let inv = 1.0 - t;
        3.0 * inv * inv * t * p1 + 3.0 * inv * t * t * p2 + t * t * t
    }

    fn component_derivative(t: f64, p1: f64, p2: f64) -> f64 {
        let inv = 1.0 - t;
        3.0 * inv * inv * p1 + 6.0 * inv * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
    }

    fn solve(self, x: f64) -> f64 {
        let t = self.parameter_for_x(x);
        Self::component(t, self.y1, self.y2)
    }

    // Newton first, bisection when the slope is too flat to trust.
    fn parameter_for_x(self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..8 {
            let error = Self::component(t, self.x1, self.x2) - x;
            if error.abs() < Self::EPSILON {
                return t;
            }
            let slope = Self::component_derivative(t, self.x1, self.x2);
            if slope.abs() < 1e-6 {
                break;
            }
            t -= error / slope;
        }

        let (mut low, mut high) = (0.0, 1.0);
        t = x;
        while high - low > Self::EPSILON {
            let value = Self::component(t, self.x1, self.x2);
            if (value - x).abs() < Self::EPSILON {
                break;
            }
            if value < x {
                low = t;
            } else {
                high = t;
            }
            t = (low + high) * 0.5;
        }
        t
    }
}
