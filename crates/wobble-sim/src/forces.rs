//! Force accumulation passes.
//!
//! Each step resets every particle's net force, then sums gravity,
//! contact forces (see [`crate::contact`]), and inter-particle spring
//! forces. Ordering of the passes does not affect the sum.

use wobble_math::Vec3;
use wobble_types::constants::EPSILON;

use crate::particle::Particle;

/// Zeroes every particle's accumulated force.
pub fn reset_forces(particles: &mut [Particle]) {
    for p in particles.iter_mut() {
        p.force = Vec3::ZERO;
    }
}

/// Adds `mass · gravity` to every particle.
pub fn apply_gravity(particles: &mut [Particle], gravity: Vec3) {
    for p in particles.iter_mut() {
        p.force += p.mass * gravity;
    }
}

/// Accumulates damped spring forces for every stored spring.
///
/// For a spring i→j: `F = ks·(rest − dist)·n̂ − kd·dot(v_i − v_j, n̂)·n̂`
/// with `n̂ = (x_i − x_j)/dist`. Positive stretch (particles closer
/// than rest) pushes apart; negative pulls together. The force is
/// added to i and subtracted from j, so each pair's contributions sum
/// to zero and momentum is conserved.
///
/// Springs shorter than the degeneracy epsilon are skipped for the
/// step: coincident particles would need a divide by zero to get a
/// direction, so their force is silently dropped instead.
pub fn apply_spring_forces(particles: &mut [Particle]) {
    let n = particles.len();
    for i in 0..n {
        for s in 0..particles[i].springs.len() {
            // Springs are Copy; read by value so both endpoints can be
            // mutated by index below.
            let spring = particles[i].springs[s];
            let j = spring.other.index();

            let d = particles[i].position - particles[j].position;
            let dist = d.length();
            if dist < EPSILON {
                continue;
            }

            let dir = d / dist;
            let stretch = spring.rest_length - dist;
            let f_spring = spring.stiffness * stretch * dir;

            let rel_vel = particles[i].velocity - particles[j].velocity;
            let f_damp = -spring.damping * rel_vel.dot(dir) * dir;

            let f = f_spring + f_damp;
            particles[i].force += f;
            particles[j].force -= f;
        }
    }
}
