use serde::{Deserialize, Serialize};

use crate::core::geometry::{PlotPoint, x_of, y_of};
use crate::core::primitives::{clamp_unit, lerp};
use crate::core::{Sample, ValueTrack, Viewport};

/// One drawing instruction of a vector outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(PlotPoint),
    LineTo(PlotPoint),
    Close,
}

/// Ordered move/line/close commands in plot-space pixels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VectorPath {
    commands: Vec<PathCommand>,
}

impl VectorPath {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    pub fn move_to(&mut self, point: PlotPoint) {
        self.commands.push(PathCommand::MoveTo(point));
    }

    pub fn line_to(&mut self, point: PlotPoint) {
        self.commands.push(PathCommand::LineTo(point));
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// Vertices in drawing order.
    ///
    /// A closed path repeats its first vertex at the end so consumers can treat
    /// the output as an explicit polygon.
    #[must_use]
    pub fn vertices(&self) -> Vec<PlotPoint> {
        let mut vertices = Vec::with_capacity(self.commands.len() + 1);
        let mut subpath_start = None;
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(point) => {
                    subpath_start = Some(point);
                    vertices.push(point);
                }
                PathCommand::LineTo(point) => vertices.push(point),
                PathCommand::Close => {
                    if let Some(start) = subpath_start {
                        vertices.push(start);
                    }
                }
            }
        }
        vertices
    }

    /// Axis-aligned bounds as `(min, max)`, `None` for an empty path.
    #[must_use]
    pub fn bounds(&self) -> Option<(PlotPoint, PlotPoint)> {
        let mut points = self.commands.iter().filter_map(|command| match *command {
            PathCommand::MoveTo(point) | PathCommand::LineTo(point) => Some(point),
            PathCommand::Close => None,
        });
        let first = points.next()?;
        Some(points.fold((first, first), |(min, max), point| {
            (
                PlotPoint::new(min.x.min(point.x), min.y.min(point.y)),
                PlotPoint::new(max.x.max(point.x), max.y.max(point.y)),
            )
        }))
    }
}

/// Everything a path needs besides the samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathInputs {
    pub viewport: Viewport,
    pub max_y: f64,
    pub track: ValueTrack,
    pub progress: f64,
}

impl PathInputs {
    #[must_use]
    pub fn new(viewport: Viewport, max_y: f64, track: ValueTrack, progress: f64) -> Self {
        Self {
            viewport,
            max_y,
            track,
            progress,
        }
    }
}

struct Tracer<'a> {
    samples: &'a [Sample],
    inputs: PathInputs,
    progress: f64,
}

impl Tracer<'_> {
    fn count(&self) -> usize {
        self.samples.len()
    }

    fn point(&self, index: usize) -> PlotPoint {
        let value = self.samples[index].value(self.inputs.track);
        PlotPoint::new(
            x_of(index, self.count(), self.inputs.viewport.width),
            y_of(value, self.inputs.max_y, self.inputs.viewport.height),
        )
    }

    fn points_to_draw(&self) -> usize {
        (self.count() as f64 * self.progress).floor() as usize
    }

    /// Leading edge between the next two samples while the reveal is running.
    ///
    /// A zero fraction adds nothing so the edge does not flicker at whole
    /// sample boundaries.
    fn frontier(&self, points_to_draw: usize) -> Option<PlotPoint> {
        let count = self.count();
        if self.progress >= 1.0 || points_to_draw >= count || points_to_draw == 0 {
            return None;
        }
        let partial = count as f64 * self.progress;
        let full = partial.floor();
        let frac = partial - full;
        let full = full as usize;
        if full + 1 >= count || frac <= 0.0 {
            return None;
        }
        let from = self.point(full);
        let to = self.point(full + 1);
        Some(PlotPoint::new(
            lerp(from.x, to.x, frac),
            lerp(from.y, to.y, frac),
        ))
    }
}

fn tracer<'a>(samples: &'a [Sample], inputs: PathInputs) -> Tracer<'a> {
    Tracer {
        samples,
        inputs,
        progress: clamp_unit(inputs.progress),
    }
}

/// Builds the filled outline of one value track, revealed up to `progress`.
///
/// The outline rises from the bottom-left corner, traces the drawn samples and
/// the interpolated frontier, then drops back to the baseline and closes.
/// Empty or single-sample sequences produce an empty path.
#[must_use]
pub fn build_area_path(samples: &[Sample], inputs: PathInputs) -> VectorPath {
    let tracer = tracer(samples, inputs);
    let count = tracer.count();
    if count <= 1 {
        return VectorPath::new();
    }
    let points_to_draw = tracer.points_to_draw();
    if points_to_draw == 0 {
        return VectorPath::new();
    }

    let Viewport { width, height } = inputs.viewport;
    let drawn = points_to_draw.min(count);
    let mut path = VectorPath::with_capacity(drawn + 5);

    path.move_to(PlotPoint::new(0.0, height));
    path.line_to(PlotPoint::new(0.0, tracer.point(0).y));
    for index in 0..drawn {
        path.line_to(tracer.point(index));
    }
    if let Some(edge) = tracer.frontier(points_to_draw) {
        path.line_to(edge);
    }

    if points_to_draw >= count {
        path.line_to(PlotPoint::new(width, height));
    } else {
        path.line_to(PlotPoint::new(x_of(points_to_draw - 1, count, width), height));
    }
    path.close();
    path
}

/// Builds the open stroked polyline of one value track, revealed up to
/// `progress`.
///
/// A single-sample sequence yields a lone `MoveTo` once fully revealed.
#[must_use]
pub fn build_line_path(samples: &[Sample], inputs: PathInputs) -> VectorPath {
    let tracer = tracer(samples, inputs);
    let count = tracer.count();
    if count == 0 {
        return VectorPath::new();
    }
    let points_to_draw = tracer.points_to_draw();
    if points_to_draw == 0 {
        return VectorPath::new();
    }

    let drawn = points_to_draw.min(count);
    let mut path = VectorPath::with_capacity(drawn + 1);
    path.move_to(tracer.point(0));
    for index in 1..drawn {
        path.line_to(tracer.point(index));
    }
    if let Some(edge) = tracer.frontier(points_to_draw) {
        path.line_to(edge);
    }
    path
}
