//! Debug line output — force vectors and spring connectivity.
//!
//! The host supplies a line-drawing collaborator (an immediate-mode
//! debug renderer, a gizmo layer, a capture buffer) through the
//! [`LineSink`] trait. Output carries no semantic weight: skipping it
//! entirely changes nothing about the simulation.

use wobble_math::Vec3;
use wobble_sim::SoftBody;

/// Color for a particle's net-force vector (blue).
pub const FORCE_COLOR: [f32; 3] = [0.0, 0.0, 1.0];

/// Color for spring connectivity lines (red).
pub const SPRING_COLOR: [f32; 3] = [1.0, 0.0, 0.0];

/// A single colored world-space line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub from: Vec3,
    pub to: Vec3,
    pub color: [f32; 3],
}

/// Trait for external line-drawing collaborators.
pub trait LineSink {
    /// Draw one world-space line segment.
    fn line(&mut self, from: Vec3, to: Vec3, color: [f32; 3]);
}

/// A sink that records segments into a `Vec`, for tests and capture.
#[derive(Debug, Default)]
pub struct VecLineSink {
    /// Recorded segments, in emission order.
    pub segments: Vec<LineSegment>,
}

impl VecLineSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl LineSink for VecLineSink {
    fn line(&mut self, from: Vec3, to: Vec3, color: [f32; 3]) {
        self.segments.push(LineSegment { from, to, color });
    }
}

/// Emits one blue line per particle from its position along its
/// currently accumulated net force.
pub fn draw_forces(body: &SoftBody, sink: &mut dyn LineSink) {
    for p in body.particles() {
        sink.line(p.position, p.position + p.force, FORCE_COLOR);
    }
}

/// Emits one red line per spring between its two endpoint particles.
///
/// Each unordered pair is stored exactly once, so each connection is
/// drawn exactly once.
pub fn draw_springs(body: &SoftBody, sink: &mut dyn LineSink) {
    let particles = body.particles();
    for p in particles {
        for spring in &p.springs {
            sink.line(p.position, particles[spring.other.index()].position, SPRING_COLOR);
        }
    }
}

/// Emits the full debug view (forces + springs) if the body's config
/// has `debug_draw_enabled` set; otherwise emits nothing.
pub fn draw_body(body: &SoftBody, sink: &mut dyn LineSink) {
    if !body.config().debug_draw_enabled {
        return;
    }
    draw_forces(body, sink);
    draw_springs(body, sink);
}
