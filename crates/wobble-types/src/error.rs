//! Error types for the Wobble engine.
//!
//! All crates return `WobbleResult<T>` from fallible operations.
//! Steady-state simulation stepping never fails: per-step anomalies
//! (degenerate springs, empty bodies, missing collaborators) are
//! recovered locally. Errors surface only at construction and
//! serialization boundaries.

use thiserror::Error;

/// Unified error type for the Wobble engine.
#[derive(Debug, Error)]
pub enum WobbleError {
    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Snapshot encode/decode failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, WobbleError>`.
pub type WobbleResult<T> = Result<T, WobbleError>;
