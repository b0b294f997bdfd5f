//! # wobble-mesh
//!
//! Triangle mesh representation with Structure-of-Arrays (SoA) layout.
//!
//! ## Key Types
//!
//! - [`TriangleMesh`] — The core mesh type. Stores positions, normals,
//!   and triangle indices in contiguous SoA buffers that the simulation
//!   overwrites every step.
//! - [`Aabb`] — Axis-aligned bounds, refreshed after each write-back.
//! - Procedural generators for test meshes (quad grids, UV spheres).

pub mod bounds;
pub mod generators;
pub mod mesh;
pub mod normals;

pub use bounds::Aabb;
pub use mesh::TriangleMesh;
