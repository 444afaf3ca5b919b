use crate::core::{PathInputs, ValueTrack, build_area_path, build_line_path};
use crate::render::{FillPrimitive, LinePrimitive, RenderFrame, Renderer, StrokePrimitive};

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Materializes the current state into a backend-agnostic frame.
    ///
    /// Layer order: invested area, total area, total line, selection cursor.
    /// Loading state yields an empty placeholder frame; an empty or missing
    /// sequence yields an empty frame.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        let viewport = self.viewport;
        if self.is_loading() {
            return RenderFrame::loading(viewport);
        }
        let Some(sequence) = self.sequence.as_ref() else {
            return RenderFrame::new(viewport);
        };

        let samples = sequence.samples();
        let max_y = self.scale_ceiling();
        let progress = self.animation.progress();
        let inputs = |track| PathInputs::new(viewport, max_y, track, progress);

        let mut frame = RenderFrame::new(viewport)
            .with_fill(FillPrimitive::new(
                build_area_path(samples, inputs(ValueTrack::Invested)),
                self.style.invested_fill,
            ))
            .with_fill(FillPrimitive::new(
                build_area_path(samples, inputs(ValueTrack::Total)),
                self.style.total_fill,
            ))
            .with_stroke(StrokePrimitive::new(
                build_line_path(samples, inputs(ValueTrack::Total)),
                self.style.line_width,
                self.style.line_color,
            ));

        if self.style.show_cursor {
            if let Some(x) = self.cursor_x() {
                frame = frame.with_line(LinePrimitive::vertical(
                    x,
                    viewport.height,
                    self.style.cursor_width,
                    self.style.cursor_color,
                ));
            }
        }
        frame
    }
}
