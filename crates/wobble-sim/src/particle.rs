//! Particle, spring, and contact-spring records.
//!
//! The simulation's hot state is a flat `Vec<Particle>` mutated in
//! place by index. Springs are stored as directed half-edges: for any
//! unordered pair (i, j) with i < j, exactly one [`Spring`] lives on
//! particle i and points at j. The force pass applies each spring's
//! force to both endpoints, so this representation never double-counts
//! an interaction.

use wobble_math::Vec3;
use wobble_types::{constants, ParticleId};

/// One directed half of an undirected spring between two particles.
///
/// Stored on the lower-indexed particle of the pair, pointing at the
/// higher index. Created once at build time; never added or removed
/// afterward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    /// Spring stiffness ks (N/m).
    pub stiffness: f32,
    /// Damping coefficient kd along the spring axis.
    pub damping: f32,
    /// Rest length — the initial distance between the two particles.
    pub rest_length: f32,
    /// The other endpoint. Always greater than the owning index.
    pub other: ParticleId,
}

/// A temporary spring anchoring a penetrating particle to the plane.
///
/// The anchor is a world-fixed point captured at the instant of
/// attachment (the particle's projection onto the plane at that step).
/// It is not re-projected as the plane moves, so the contact pulls the
/// particle back toward where it first touched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactSpring {
    /// Contact stiffness ks, captured from the config at attach time.
    pub stiffness: f32,
    /// Contact damping kd, applied to the particle's full velocity.
    pub damping: f32,
    /// Rest length. Zero for plane contacts.
    pub rest_length: f32,
    /// World-fixed attachment point on the plane.
    pub anchor: Vec3,
}

/// A point mass representing one mesh vertex in world space.
#[derive(Debug, Clone)]
pub struct Particle {
    /// World-space position.
    pub position: Vec3,
    /// World-space velocity.
    pub velocity: Vec3,
    /// Mass (kg). Always positive; clamped at construction.
    pub mass: f32,
    /// Net force accumulated this step. Reset at the start of each step.
    pub force: Vec3,
    /// Springs owned by this particle (half-edges toward higher indices).
    pub springs: Vec<Spring>,
    /// Active plane contact, if any. `Some` means attached — there is
    /// no separate flag that could fall out of sync.
    pub contact: Option<ContactSpring>,
}

impl Particle {
    /// Creates a particle at rest. Non-positive masses are clamped up
    /// to [`constants::MIN_PARTICLE_MASS`] rather than rejected.
    pub fn new(position: Vec3, mass: f32) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            mass: mass.max(constants::MIN_PARTICLE_MASS),
            force: Vec3::ZERO,
            springs: Vec::new(),
            contact: None,
        }
    }

    /// Whether this particle is currently attached to the plane.
    #[inline]
    pub fn attached(&self) -> bool {
        self.contact.is_some()
    }
}
