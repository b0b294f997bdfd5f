//! Physical constants and simulation defaults.

/// Gravitational acceleration magnitude (m/s²).
pub const GRAVITY: f32 = 9.8;

/// Default simulation timestep (seconds). 1/60th of a second.
pub const DEFAULT_DT: f32 = 1.0 / 60.0;

/// Default contact spring stiffness (N/m).
pub const DEFAULT_CONTACT_STIFFNESS: f32 = 1000.0;

/// Default contact spring damping (N·s/m).
pub const DEFAULT_CONTACT_DAMPING: f32 = 20.0;

/// Default inter-particle spring stiffness (N/m).
pub const DEFAULT_SPRING_STIFFNESS: f32 = 100.0;

/// Default inter-particle spring damping (N·s/m).
pub const DEFAULT_SPRING_DAMPING: f32 = 1.0;

/// Smallest allowed particle mass (kg). Requested masses at or below
/// zero are clamped up to this at build time.
pub const MIN_PARTICLE_MASS: f32 = 1.0e-6;

/// Epsilon below which a spring's current length is treated as
/// degenerate and its force contribution is skipped for the step.
pub const EPSILON: f32 = 1.0e-7;
