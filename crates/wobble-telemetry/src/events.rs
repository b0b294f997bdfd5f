//! Simulation event types.
//!
//! Structured events emitted around each physics step. Events are
//! lightweight value types that carry just enough data to be useful
//! for monitoring and debugging.

use serde::{Deserialize, Serialize};

/// A simulation event emitted by the engine.
///
/// Events are tagged with a step index and carry domain-specific data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Step number (0-indexed).
    pub step: u64,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventKind {
    /// Physics step started.
    StepBegin {
        /// Accumulated simulation time at the start of the step (seconds).
        sim_time: f64,
    },

    /// Physics step completed.
    StepEnd {
        /// Wall-clock time for the entire step (seconds).
        wall_time: f64,
    },

    /// Plane contact summary for the step.
    Contacts {
        /// Number of particles attached to the plane.
        attached_count: u32,
        /// Deepest penetration seen this step (meters).
        max_penetration: f32,
    },

    /// Energy snapshot at the current state.
    Energy {
        /// Kinetic energy (0.5 · m · v²).
        kinetic: f64,
        /// Gravitational potential energy.
        potential: f64,
        /// Elastic energy stored in the spring network.
        elastic: f64,
    },

    /// Custom event for extensibility.
    Custom {
        /// Arbitrary label.
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl SimulationEvent {
    /// Creates a new event for the given step.
    pub fn new(step: u64, kind: EventKind) -> Self {
        Self { step, kind }
    }
}
