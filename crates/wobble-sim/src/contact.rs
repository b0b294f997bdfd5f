//! Plane contact tracking and contact forces.
//!
//! Each particle is a two-state machine against the ground plane:
//! **Free** or **Attached**. Evaluated every collision step with the
//! plane's current pose:
//!
//! - Free → Attached when the signed distance goes strictly negative.
//!   The anchor is the particle's orthogonal projection onto the plane
//!   at that instant and stays world-fixed for the contact's lifetime.
//! - Attached → Free when the signed distance becomes non-negative.
//!
//! A signed distance of exactly zero counts as separated (strict
//! less-than penetration test). There is no hysteresis band, so a
//! particle sitting exactly at the surface can toggle rapidly between
//! states; that is accepted behavior, not a bug.

use wobble_math::Plane;

use crate::config::SimConfig;
use crate::particle::{ContactSpring, Particle};

/// Summary of one contact pass, reported up through [`crate::StepReport`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactReport {
    /// Number of particles attached after this pass.
    pub attached: u32,
    /// Deepest penetration seen this pass (meters, ≥ 0).
    pub max_penetration: f32,
}

/// Runs attach/detach transitions and accumulates contact forces.
///
/// While attached, the force is `−ks·depth·n − kd·velocity` where
/// `depth` is the particle's offset from its anchor projected onto the
/// plane normal. Damping acts on the full velocity vector, not just
/// the normal component — tangential sliding is damped too, which
/// behaves like crude friction.
pub fn update_contacts(
    particles: &mut [Particle],
    plane: &Plane,
    config: &SimConfig,
) -> ContactReport {
    let mut report = ContactReport::default();

    for p in particles.iter_mut() {
        let signed_dist = plane.signed_distance(p.position);
        let penetrating = signed_dist < 0.0;

        if penetrating && p.contact.is_none() {
            p.contact = Some(ContactSpring {
                stiffness: config.contact_stiffness,
                damping: config.contact_damping,
                rest_length: 0.0,
                anchor: p.position - signed_dist * plane.normal,
            });
        }
        if !penetrating && p.contact.is_some() {
            p.contact = None;
        }

        if let Some(contact) = p.contact {
            let offset = p.position - contact.anchor;
            let depth = offset.dot(plane.normal);
            p.force += -contact.stiffness * depth * plane.normal
                - contact.damping * p.velocity;

            report.attached += 1;
            report.max_penetration = report.max_penetration.max(-signed_dist);
        }
    }

    report
}
