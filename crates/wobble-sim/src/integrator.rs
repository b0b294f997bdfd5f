//! Semi-implicit (symplectic) Euler integration.

use crate::particle::Particle;

/// Advances every particle by one timestep.
///
/// Velocity is updated first and the *new* velocity advances the
/// position:
///
/// ```text
/// v += (F / m) · dt
/// x += v · dt
/// ```
///
/// This ordering is what makes the scheme symplectic — it has far
/// better long-term energy behavior than explicit Euler at the same
/// dt. Do not swap the two updates; that changes the numerical scheme.
pub fn integrate(particles: &mut [Particle], dt: f32) {
    for p in particles.iter_mut() {
        let accel = p.force / p.mass;
        p.velocity += accel * dt;
        p.position += p.velocity * dt;
    }
}
