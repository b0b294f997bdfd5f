//! # wobble-math
//!
//! Math primitives for the Wobble soft-body engine.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec3`, `Mat4`, etc.)
//! - [`Plane`] — an infinite plane with signed-distance and projection queries
//! - [`Frame`] — a paired local→world / world→local point transform

pub mod frame;
pub mod plane;

pub use frame::Frame;
pub use plane::Plane;

// Re-export glam types as the canonical math types for Wobble.
pub use glam::{Affine3A, Mat3, Mat4, Quat, Vec2, Vec3, Vec4};
