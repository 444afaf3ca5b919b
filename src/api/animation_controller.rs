use crate::animation::{AnimationConfig, AnimationGeneration, AnimationPhase};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{ChartEngine, PluginEvent};

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn animation_phase(&self) -> AnimationPhase {
        self.animation.phase()
    }

    /// Eased reveal fraction fed to the path builder.
    #[must_use]
    pub fn animation_progress(&self) -> f64 {
        self.animation.progress()
    }

    #[must_use]
    pub fn animation_generation(&self) -> AnimationGeneration {
        self.animation.generation()
    }

    #[must_use]
    pub fn animation_config(&self) -> AnimationConfig {
        self.animation.config()
    }

    pub fn set_animation_config(&mut self, config: AnimationConfig) -> ChartResult<()> {
        self.animation.set_config(config)
    }

    /// Advances the reveal by one host frame and returns the new progress.
    pub fn tick(&mut self, delta_seconds: f64) -> f64 {
        let tick = self.animation.tick(delta_seconds);
        if tick.settled_now {
            self.emit_plugin_event(PluginEvent::AnimationSettled);
        }
        tick.progress
    }

    /// Skips the running reveal straight to the full trace.
    pub fn finish_animation(&mut self) {
        if self.animation.is_animating() {
            self.animation.finish();
            self.emit_plugin_event(PluginEvent::AnimationSettled);
        }
    }

    pub(super) fn restart_animation(&mut self) {
        self.animation.start();
        self.emit_plugin_event(PluginEvent::AnimationStarted);
    }
}
