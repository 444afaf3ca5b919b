use indexmap::IndexMap;
use tracing::debug;

use crate::animation::AnimationController;
use crate::core::{SampleSequence, Viewport, scale_ceiling};
use crate::error::ChartResult;
use crate::extensions::ChartPlugin;
use crate::interaction::InteractionState;
use crate::render::Renderer;
use crate::store::TimeRange;

use super::validation::{validate_chart_style, validate_engine_config, validate_viewport};
use super::{ChartEngineConfig, ChartStyle, PluginEvent};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Bookkeeping for the asynchronous range fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(super) struct FetchState {
    pub(super) generation: u64,
    pub(super) pending: Option<TimeRange>,
    pub(super) active_range: Option<TimeRange>,
}

/// Observable chart state container consumed by host applications.
///
/// `ChartEngine` owns the current sample sequence, the selection, the reveal
/// animation and the viewport. Every mutation goes through a method that
/// notifies registered plugins, which is where hosts schedule re-renders.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) viewport: Viewport,
    pub(super) style: ChartStyle,
    pub(super) empty_scale_ceiling: f64,
    pub(super) initial_range: TimeRange,
    pub(super) animation: AnimationController,
    pub(super) interaction: InteractionState,
    pub(super) sequence: Option<SampleSequence>,
    pub(super) selected_index: Option<usize>,
    pub(super) fetch: FetchState,
    pub(super) plugins: IndexMap<String, Box<dyn ChartPlugin>>,
}

impl<R: Renderer> ChartEngine<R> {
    /// Mounts a chart. The reveal animation starts immediately so the first
    /// sequence to arrive is traced from zero.
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        let config = validate_engine_config(config)?;
        let mut animation = AnimationController::new(config.animation);
        animation.start();
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            "chart engine mounted"
        );

        Ok(Self {
            renderer,
            viewport: config.viewport,
            style: config.style,
            empty_scale_ceiling: config.empty_scale_ceiling,
            initial_range: config.initial_range,
            animation,
            interaction: InteractionState::default(),
            sequence: None,
            selected_index: None,
            fetch: FetchState::default(),
            plugins: IndexMap::new(),
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Applies a layout change. Geometry is recomputed from the new size on
    /// the next frame; the selection is index based and survives.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        let viewport = validate_viewport(viewport)?;
        if viewport == self.viewport {
            return Ok(());
        }
        self.viewport = viewport;
        self.emit_plugin_event(PluginEvent::ViewportChanged {
            width: viewport.width,
            height: viewport.height,
        });
        Ok(())
    }

    #[must_use]
    pub fn style(&self) -> ChartStyle {
        self.style
    }

    pub fn set_style(&mut self, style: ChartStyle) -> ChartResult<()> {
        self.style = validate_chart_style(style)?;
        Ok(())
    }

    #[must_use]
    pub fn initial_range(&self) -> TimeRange {
        self.initial_range
    }

    #[must_use]
    pub fn sequence(&self) -> Option<&SampleSequence> {
        self.sequence.as_ref()
    }

    #[must_use]
    pub fn samples_len(&self) -> usize {
        self.sequence.as_ref().map_or(0, SampleSequence::len)
    }

    /// Ceiling shared by both value tracks.
    #[must_use]
    pub fn scale_ceiling(&self) -> f64 {
        let samples = self
            .sequence
            .as_ref()
            .map_or(&[][..], |sequence| sequence.samples());
        scale_ceiling(samples, self.empty_scale_ceiling)
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame();
        self.renderer.render(&frame)?;
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }

    /// Renders the frame into an external cairo context.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame();
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
