use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests catch invalid geometry without a
/// real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_fill_count: usize,
    pub last_stroke_count: usize,
    pub last_line_count: usize,
    pub last_loading: bool,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_fill_count = frame.fills.len();
        self.last_stroke_count = frame.strokes.len();
        self.last_line_count = frame.lines.len();
        self.last_loading = frame.loading;
        Ok(())
    }
}
