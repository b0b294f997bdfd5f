//! Simulation configuration.
//!
//! Scalar/boolean/vector settings read by the step pipeline. Changes
//! take effect from the next step. Two exceptions: `particle_mass` is
//! applied once at build time, and contact springs capture the contact
//! stiffness/damping at the moment a particle attaches.

use serde::{Deserialize, Serialize};
use wobble_types::constants;

/// Configuration for a soft body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Contact spring stiffness (N/m) for plane contacts.
    pub contact_stiffness: f32,

    /// Contact spring damping. Applied against the particle's full
    /// velocity vector, so it also damps tangential sliding.
    pub contact_damping: f32,

    /// Stiffness for the inter-particle springs built at init.
    pub spring_stiffness: f32,

    /// Damping for the inter-particle springs (along the spring axis).
    pub spring_damping: f32,

    /// Uniform particle mass (kg). Build-time only; changing it on a
    /// live body does not alter existing particles. Clamped to
    /// [`constants::MIN_PARTICLE_MASS`] at build.
    pub particle_mass: f32,

    /// Whether gravity is applied each step.
    pub gravity_enabled: bool,

    /// Gravity acceleration vector [gx, gy, gz] in m/s².
    pub gravity: [f32; 3],

    /// Whether plane collision handling runs each step.
    pub collisions_enabled: bool,

    /// Whether debug line output (forces, spring connectivity) is
    /// produced. Carries no semantic weight.
    pub debug_draw_enabled: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            contact_stiffness: constants::DEFAULT_CONTACT_STIFFNESS,
            contact_damping: constants::DEFAULT_CONTACT_DAMPING,
            spring_stiffness: constants::DEFAULT_SPRING_STIFFNESS,
            spring_damping: constants::DEFAULT_SPRING_DAMPING,
            particle_mass: 1.0,
            gravity_enabled: true,
            gravity: [0.0, -constants::GRAVITY, 0.0],
            collisions_enabled: true,
            debug_draw_enabled: false,
        }
    }
}

impl SimConfig {
    /// A floppy preset: weak springs, light damping. Wobbles a lot.
    pub fn soft() -> Self {
        Self {
            spring_stiffness: 30.0,
            spring_damping: 0.5,
            ..Default::default()
        }
    }

    /// A stiff preset that holds its shape under contact.
    pub fn rigid() -> Self {
        Self {
            spring_stiffness: 400.0,
            spring_damping: 4.0,
            contact_stiffness: 4000.0,
            ..Default::default()
        }
    }
}
