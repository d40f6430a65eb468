//! sparkchart-rs: inline sparkline engine.
//!
//! Turns a compact `points[;max][;mean]` text specification into a small bar
//! or mirrored "tone" chart, optionally overlaid with a mean indicator. The
//! pipeline is split into pure stages (`core`), backend-agnostic draw
//! primitives (`render`) and the engine plus host collaborator seams (`api`).

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{SparkChartConfig, SparkChartEngine};
pub use error::{SparkChartError, SparkChartResult};
