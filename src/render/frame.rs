use smallvec::SmallVec;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{FillPrimitive, LinePrimitive, StrokePrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// Layers paint in field order: fills (back to front), strokes, then lines.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    /// A fetch is pending; backends show a placeholder instead of paths.
    pub loading: bool,
    pub fills: SmallVec<[FillPrimitive; 2]>,
    pub strokes: SmallVec<[StrokePrimitive; 1]>,
    pub lines: Vec<LinePrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            loading: false,
            fills: SmallVec::new(),
            strokes: SmallVec::new(),
            lines: Vec::new(),
        }
    }

    #[must_use]
    pub fn loading(viewport: Viewport) -> Self {
        Self {
            loading: true,
            ..Self::new(viewport)
        }
    }

    /// Adds a fill unless its path is empty.
    #[must_use]
    pub fn with_fill(mut self, fill: FillPrimitive) -> Self {
        if !fill.path.is_empty() {
            self.fills.push(fill);
        }
        self
    }

    /// Adds a stroke unless its path is empty.
    #[must_use]
    pub fn with_stroke(mut self, stroke: StrokePrimitive) -> Self {
        if !stroke.path.is_empty() {
            self.strokes.push(stroke);
        }
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for fill in &self.fills {
            fill.validate()?;
        }
        for stroke in &self.strokes {
            stroke.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fills.is_empty() && self.strokes.is_empty() && self.lines.is_empty()
    }
}
