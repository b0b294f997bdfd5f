//! Particle network construction.
//!
//! Converts a list of world-space points into particles plus an
//! all-pairs spring topology: for every unordered pair (i, j) with
//! i < j, one spring on particle i referencing j, with rest length
//! equal to the pair's initial distance.
//!
//! This is O(N²) in both springs and build time, by design. The
//! target is low-resolution jiggle meshes; callers with high-poly
//! meshes should decimate before building.

use wobble_math::Vec3;
use wobble_types::{ParticleId, WobbleError, WobbleResult};

use crate::config::SimConfig;
use crate::particle::{Particle, Spring};

/// Builds the particle array and spring network from initial
/// world-space points.
///
/// Particles start at rest (zero velocity, zero force) with the
/// configured uniform mass, clamped positive. The resulting network
/// has exactly N·(N−1)/2 springs.
///
/// Returns [`WobbleError::InvalidConfig`] if `points` is empty.
pub fn build_network(points: &[Vec3], config: &SimConfig) -> WobbleResult<Vec<Particle>> {
    if points.is_empty() {
        return Err(WobbleError::InvalidConfig(
            "cannot build a particle network from zero vertices".into(),
        ));
    }

    let n = points.len();
    let mut particles: Vec<Particle> = points
        .iter()
        .map(|&p| Particle::new(p, config.particle_mass))
        .collect();

    // One spring per unordered pair, owned by the lower index.
    for i in 0..n {
        particles[i].springs.reserve(n - i - 1);
        for j in (i + 1)..n {
            let rest = (points[i] - points[j]).length();
            particles[i].springs.push(Spring {
                stiffness: config.spring_stiffness,
                damping: config.spring_damping,
                rest_length: rest,
                other: ParticleId(j as u32),
            });
        }
    }

    tracing::debug!(
        particles = n,
        springs = n * (n - 1) / 2,
        "built all-pairs spring network"
    );

    Ok(particles)
}

/// Total number of springs across all particles.
pub fn spring_count(particles: &[Particle]) -> usize {
    particles.iter().map(|p| p.springs.len()).sum()
}
