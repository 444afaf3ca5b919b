//! Observer extensions.
//!
//! Plugins subscribe to engine state changes; they never reach into core
//! paths.

pub mod plugins;

pub use plugins::{ChartPlugin, PluginContext, PluginEvent};
