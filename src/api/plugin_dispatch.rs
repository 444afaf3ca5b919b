use crate::extensions::PluginContext;
use crate::render::Renderer;

use super::{ChartEngine, PluginEvent};

impl<R: Renderer> ChartEngine<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            viewport: self.viewport,
            active_range: self.fetch.active_range,
            loading: self.is_loading(),
            samples_len: self.samples_len(),
            scale_ceiling: self.scale_ceiling(),
            animation_phase: self.animation.phase(),
            animation_progress: self.animation.progress(),
            selected_index: self.selected_index,
            interaction_mode: self.interaction.mode(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in self.plugins.values_mut() {
            plugin.on_event(event, context);
        }
    }
}
