//! growth-chart: animated invested-vs-returns chart engine.
//!
//! The crate turns an ordered sequence of portfolio samples into animated
//! vector paths, keeps a scrubbable selection cursor, and leaves drawing to a
//! pluggable renderer backend.

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod store;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
