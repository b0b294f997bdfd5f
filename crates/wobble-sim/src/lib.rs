//! # wobble-sim
//!
//! Force-based particle-spring soft-body simulation.
//!
//! Each mesh vertex becomes a point mass; every unordered pair of
//! particles is connected by exactly one damped spring whose rest
//! length is the pair's initial distance. Per fixed step the pipeline
//! runs: force reset → gravity → plane contact → inter-particle
//! springs → semi-implicit Euler integration, after which the host
//! writes positions back into its mesh via [`MeshSync`].
//!
//! The all-pairs network is O(N²) in springs and step time — a
//! deliberate design limit. It is intended for low-resolution jiggle
//! meshes (tens to low hundreds of vertices), not high-poly cloth.
//!
//! ## Key Types
//!
//! - [`SoftBody`] — The simulation: owns the particle array and drives
//!   one full pipeline pass per [`SoftBody::step`].
//! - [`SimConfig`] — Stiffness/damping/gravity/collision settings.
//! - [`MeshSync`] — Writes particle positions back into a
//!   [`wobble_mesh::TriangleMesh`] and refreshes normals and bounds.

pub mod body;
pub mod config;
pub mod contact;
pub mod forces;
pub mod integrator;
pub mod network;
pub mod particle;
pub mod sync;

pub use body::{SoftBody, StepReport};
pub use config::SimConfig;
pub use particle::{ContactSpring, Particle, Spring};
pub use sync::MeshSync;
