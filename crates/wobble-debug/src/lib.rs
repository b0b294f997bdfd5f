//! # wobble-debug
//!
//! Debug tooling for the Wobble engine: step lifecycle hooks, line
//! output for force/spring visualization, and binary state snapshots
//! for replay and diff-based debugging.

pub mod hooks;
pub mod lines;
pub mod snapshot;

pub use hooks::{StepHook, TelemetryHook};
pub use lines::{draw_body, LineSegment, LineSink, VecLineSink};
pub use snapshot::StateSnapshot;
