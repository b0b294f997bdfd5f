//! # wobble-types
//!
//! Shared types, identifiers, error types, and physical constants
//! for the Wobble soft-body deformation engine.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other Wobble crates share.

pub mod constants;
pub mod error;
pub mod ids;
pub mod scalar;

pub use error::{WobbleError, WobbleResult};
pub use ids::ParticleId;
pub use scalar::Scalar;
