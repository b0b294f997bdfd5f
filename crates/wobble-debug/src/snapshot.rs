//! State snapshot serialization for replay and debugging.
//!
//! Snapshots capture the particle state at a point in time, enabling
//! deterministic replay and diff-based debugging.

use serde::{Deserialize, Serialize};
use wobble_sim::Particle;
use wobble_types::{WobbleError, WobbleResult};

/// A complete particle-state snapshot.
///
/// Serialized with `bincode` for compact binary output. Positions and
/// velocities are stored as flat f32 triples so the format stays
/// independent of the in-memory math types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Step index when this snapshot was taken.
    pub step: u64,
    /// Simulation time in seconds.
    pub sim_time: f64,
    /// Particle positions (flat: [x0, y0, z0, x1, y1, z1, ...]).
    pub positions: Vec<f32>,
    /// Particle velocities (flat: [vx0, vy0, vz0, ...]).
    pub velocities: Vec<f32>,
    /// Number of particles.
    pub particle_count: usize,
}

impl StateSnapshot {
    /// Creates a snapshot from the simulation's particle array.
    pub fn from_particles(step: u64, sim_time: f64, particles: &[Particle]) -> Self {
        let n = particles.len();
        let mut positions = Vec::with_capacity(n * 3);
        let mut velocities = Vec::with_capacity(n * 3);

        for p in particles {
            positions.extend_from_slice(&p.position.to_array());
            velocities.extend_from_slice(&p.velocity.to_array());
        }

        Self {
            step,
            sim_time,
            positions,
            velocities,
            particle_count: n,
        }
    }

    /// Serializes to compact binary format.
    pub fn to_bytes(&self) -> Vec<u8> {
        bincode::serialize(self).expect("Snapshot serialization should not fail")
    }

    /// Deserializes from binary format.
    pub fn from_bytes(data: &[u8]) -> WobbleResult<Self> {
        bincode::deserialize(data).map_err(|e| WobbleError::Serialization(e.to_string()))
    }
}
