//! The soft body — orchestrates the per-step pipeline.
//!
//! A [`SoftBody`] owns the particle array and runs one full pipeline
//! pass per [`SoftBody::step`] call:
//!
//! 1. **Reset** — zero accumulated forces
//! 2. **Gravity** — `m·g` per particle, if enabled
//! 3. **Contact** — plane attach/detach transitions + contact forces
//! 4. **Springs** — pairwise damped spring forces
//! 5. **Integrate** — symplectic Euler
//!
//! The embedding application owns the scheduling loop: it calls
//! `step(dt, plane)` once per fixed-timestep tick and syncs the mesh
//! afterward. A step is single-threaded and synchronous; it must be
//! serialized with any reads of particle or mesh state.

use std::time::Instant;

use wobble_math::{Frame, Plane, Vec3};
use wobble_mesh::{Aabb, TriangleMesh};
use wobble_types::WobbleResult;

use crate::config::SimConfig;
use crate::contact;
use crate::forces;
use crate::integrator;
use crate::network;
use crate::particle::Particle;
use crate::sync::MeshSync;

/// Result of one simulation step.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepReport {
    /// Number of particles attached to the plane after the step.
    pub attached_contacts: u32,
    /// Deepest plane penetration seen this step (meters, ≥ 0).
    pub max_penetration: f32,
    /// Wall-clock time for this step (seconds).
    pub wall_time: f64,
}

/// A particle-spring soft body bound to a host mesh.
#[derive(Debug)]
pub struct SoftBody {
    particles: Vec<Particle>,
    config: SimConfig,
    /// Last seen plane pose. Refreshed from the host each step that
    /// processes collisions.
    plane: Option<Plane>,
    /// Collision handling availability. Cleared once, at construction,
    /// if no plane collaborator exists; never set again for the life
    /// of the body.
    collisions_available: bool,
    step_count: u64,
    sim_time: f64,
}

impl SoftBody {
    /// Builds a soft body from world-space points.
    ///
    /// `plane` is the ground plane's initial pose from the host scene
    /// graph. Passing `None` while collisions are enabled disables
    /// contact handling for the lifetime of this body and logs a
    /// warning; the simulation continues without contact forces.
    ///
    /// Fails if `points` is empty.
    pub fn from_points(
        points: &[Vec3],
        config: SimConfig,
        plane: Option<Plane>,
    ) -> WobbleResult<Self> {
        let particles = network::build_network(points, &config)?;

        let collisions_available = plane.is_some();
        if config.collisions_enabled && !collisions_available {
            tracing::warn!(
                "no ground plane provided; plane collisions disabled for this body"
            );
        }

        Ok(Self {
            particles,
            config,
            plane,
            collisions_available,
            step_count: 0,
            sim_time: 0.0,
        })
    }

    /// Builds a soft body from a mesh's local-space vertices,
    /// converted to world space through `frame`.
    pub fn from_mesh(
        mesh: &TriangleMesh,
        frame: &Frame,
        config: SimConfig,
        plane: Option<Plane>,
    ) -> WobbleResult<Self> {
        let points: Vec<Vec3> = (0..mesh.vertex_count())
            .map(|i| frame.local_to_world(mesh.position(i)))
            .collect();
        Self::from_points(&points, config, plane)
    }

    /// Advances the simulation by one fixed timestep.
    ///
    /// `plane` is the ground plane's current pose; when collisions are
    /// active the body caches it, so a host that omits the pose for a
    /// step keeps the previous one. A body built without a plane
    /// ignores the argument entirely. An empty body no-ops.
    pub fn step(&mut self, dt: f32, plane: Option<&Plane>) -> StepReport {
        let start = Instant::now();
        let mut report = StepReport::default();

        if self.particles.is_empty() {
            report.wall_time = start.elapsed().as_secs_f64();
            return report;
        }

        forces::reset_forces(&mut self.particles);

        if self.config.gravity_enabled {
            forces::apply_gravity(&mut self.particles, Vec3::from(self.config.gravity));
        }

        if self.config.collisions_enabled && self.collisions_available {
            if let Some(pose) = plane {
                self.plane = Some(*pose);
            }
            if let Some(current) = self.plane {
                let contacts =
                    contact::update_contacts(&mut self.particles, &current, &self.config);
                report.attached_contacts = contacts.attached;
                report.max_penetration = contacts.max_penetration;
            }
        }

        forces::apply_spring_forces(&mut self.particles);
        integrator::integrate(&mut self.particles, dt);

        self.step_count += 1;
        self.sim_time += dt as f64;
        report.wall_time = start.elapsed().as_secs_f64();
        report
    }

    /// Writes current particle positions into the host mesh through
    /// the given sync component and frame.
    pub fn sync_mesh(
        &self,
        sync: &mut MeshSync,
        mesh: &mut TriangleMesh,
        frame: &Frame,
    ) -> WobbleResult<Aabb> {
        sync.write(&self.particles, frame, mesh)
    }

    /// Copies current world-space positions into `out` (cleared first).
    pub fn read_positions(&self, out: &mut Vec<Vec3>) {
        out.clear();
        out.extend(self.particles.iter().map(|p| p.position));
    }

    /// The particle array (read-only).
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable particle access, for hosts that perturb the body
    /// directly (grabbing, impulses, scripted pokes). The spring
    /// topology itself must not be modified.
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Number of particles.
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Total number of springs in the network.
    pub fn spring_count(&self) -> usize {
        network::spring_count(&self.particles)
    }

    /// Current configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Mutable configuration. Changes take effect from the next step;
    /// `particle_mass` does not retroactively alter existing particles.
    pub fn config_mut(&mut self) -> &mut SimConfig {
        &mut self.config
    }

    /// Whether contact handling is available for this body. False for
    /// the body's whole life if it was built without a plane.
    pub fn collisions_available(&self) -> bool {
        self.collisions_available
    }

    /// Steps taken so far.
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Accumulated simulation time (seconds).
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    /// Total kinetic energy: `0.5 · Σ m_i · ||v_i||²`.
    pub fn kinetic_energy(&self) -> f64 {
        self.particles
            .iter()
            .map(|p| 0.5 * p.mass as f64 * p.velocity.length_squared() as f64)
            .sum()
    }

    /// Gravitational potential energy `−Σ m_i · (g · x_i)`,
    /// or zero when gravity is disabled.
    pub fn gravity_potential_energy(&self) -> f64 {
        if !self.config.gravity_enabled {
            return 0.0;
        }
        let g = Vec3::from(self.config.gravity);
        self.particles
            .iter()
            .map(|p| -(p.mass as f64) * g.dot(p.position) as f64)
            .sum()
    }

    /// Elastic energy stored in the spring network:
    /// `Σ 0.5 · ks · (dist − rest)²`.
    pub fn spring_potential_energy(&self) -> f64 {
        let mut energy = 0.0f64;
        for (i, p) in self.particles.iter().enumerate() {
            for spring in &p.springs {
                let j = spring.other.index();
                let dist = (self.particles[i].position - self.particles[j].position).length();
                let stretch = (dist - spring.rest_length) as f64;
                energy += 0.5 * spring.stiffness as f64 * stretch * stretch;
            }
        }
        energy
    }
}
