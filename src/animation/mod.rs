//! Time-driven reveal animation.
//!
//! The controller owns the single progress timeline consumed by the path
//! builder. Hosts advance it once per frame with `tick`; restarting replaces
//! the running timeline instead of blending with it.

mod easing;

pub use easing::Easing;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ChartError, ChartResult};

/// Default reveal duration in seconds.
pub const DEFAULT_ANIMATION_DURATION_SECONDS: f64 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationPhase {
    /// Progress is pinned at 1.
    Settled,
    /// Progress is rising from 0 towards 1.
    Animating,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub duration_seconds: f64,
    #[serde(default)]
    pub easing: Easing,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_seconds: DEFAULT_ANIMATION_DURATION_SECONDS,
            easing: Easing::EaseInOut,
        }
    }
}

impl AnimationConfig {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.duration_seconds.is_finite() || self.duration_seconds < 0.0 {
            return Err(ChartError::InvalidData(
                "animation duration must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Identifies one run of the reveal animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AnimationGeneration(pub u64);

/// Outcome of advancing the controller by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationTick {
    pub progress: f64,
    /// `true` only on the tick that moved the controller into `Settled`.
    pub settled_now: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationController {
    config: AnimationConfig,
    phase: AnimationPhase,
    elapsed_seconds: f64,
    generation: AnimationGeneration,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new(AnimationConfig::default())
    }
}

impl AnimationController {
    /// Creates a settled controller; call [`Self::start`] on mount.
    #[must_use]
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            phase: AnimationPhase::Settled,
            elapsed_seconds: 0.0,
            generation: AnimationGeneration(0),
        }
    }

    #[must_use]
    pub fn config(&self) -> AnimationConfig {
        self.config
    }

    /// Replaces timing. A running animation keeps its elapsed time.
    pub fn set_config(&mut self, config: AnimationConfig) -> ChartResult<()> {
        self.config = config.validate()?;
        Ok(())
    }

    #[must_use]
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    #[must_use]
    pub fn generation(&self) -> AnimationGeneration {
        self.generation
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.phase == AnimationPhase::Animating
    }

    /// Un-eased time fraction of the current run.
    #[must_use]
    pub fn linear_progress(&self) -> f64 {
        match self.phase {
            AnimationPhase::Settled => 1.0,
            AnimationPhase::Animating => {
                if self.config.duration_seconds <= 0.0 {
                    return 1.0;
                }
                (self.elapsed_seconds / self.config.duration_seconds).clamp(0.0, 1.0)
            }
        }
    }

    /// Eased progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        match self.phase {
            AnimationPhase::Settled => 1.0,
            AnimationPhase::Animating => self.config.easing.apply(self.linear_progress()),
        }
    }

    /// Resets progress to 0 and begins a new run, superseding any in-flight one.
    pub fn start(&mut self) -> AnimationGeneration {
        self.generation = AnimationGeneration(self.generation.0.wrapping_add(1));
        self.elapsed_seconds = 0.0;
        self.phase = AnimationPhase::Animating;
        trace!(generation = self.generation.0, "animation started");
        self.generation
    }

    /// Jumps to the end of the current run.
    pub fn finish(&mut self) {
        self.phase = AnimationPhase::Settled;
        self.elapsed_seconds = 0.0;
    }

    /// Advances the current run by `delta_seconds`.
    ///
    /// Negative or non-finite deltas leave the timeline untouched.
    pub fn tick(&mut self, delta_seconds: f64) -> AnimationTick {
        if self.phase == AnimationPhase::Settled {
            return AnimationTick {
                progress: 1.0,
                settled_now: false,
            };
        }

        if delta_seconds.is_finite() && delta_seconds > 0.0 {
            self.elapsed_seconds += delta_seconds;
        }

        if self.elapsed_seconds >= self.config.duration_seconds {
            self.finish();
            trace!(generation = self.generation.0, "animation settled");
            return AnimationTick {
                progress: 1.0,
                settled_now: true,
            };
        }

        AnimationTick {
            progress: self.progress(),
            settled_now: false,
        }
    }
}
