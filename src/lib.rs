//! timeaxis-rs: interactive time-axis engine.
//!
//! This crate computes and renders a zoomable, pannable time axis: adaptive
//! tick granularity for the visible window, a bidirectional time/pixel
//! mapping, and a wheel-gesture state machine that rescales or shifts the
//! window anchored at the cursor's time position.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{AxisEngine, AxisEngineConfig};
pub use error::{AxisError, AxisResult};
