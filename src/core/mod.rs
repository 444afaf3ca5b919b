pub mod geometry;
pub mod path;
pub mod primitives;
pub mod types;

pub use geometry::{DEFAULT_EMPTY_SCALE_CEILING, PlotPoint, scale_ceiling, x_of, y_of};
pub use path::{PathCommand, PathInputs, VectorPath, build_area_path, build_line_path};
pub use types::{Sample, SampleId, SampleSequence, SequenceId, ValueTrack, Viewport};
