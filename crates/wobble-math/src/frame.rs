//! Local/world coordinate frame.
//!
//! The simulation runs in world space while the host mesh stores
//! local-space vertices. A [`Frame`] carries both directions of that
//! conversion so the network builder (local→world at construction)
//! and mesh sync (world→local every step) use a consistent pair.

use glam::{Affine3A, Quat, Vec3};

/// A paired local→world / world→local point transform.
///
/// The inverse is computed once at construction and cached; a host
/// that moves its entity should supply a fresh `Frame` each frame.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    local_to_world: Affine3A,
    world_to_local: Affine3A,
}

impl Frame {
    /// Identity frame — local and world coincide.
    pub const IDENTITY: Self = Self {
        local_to_world: Affine3A::IDENTITY,
        world_to_local: Affine3A::IDENTITY,
    };

    /// Creates a frame from an arbitrary affine local→world transform.
    pub fn new(local_to_world: Affine3A) -> Self {
        Self {
            local_to_world,
            world_to_local: local_to_world.inverse(),
        }
    }

    /// Creates a frame from translation, rotation, and scale.
    pub fn from_trs(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self::new(Affine3A::from_scale_rotation_translation(
            scale,
            rotation,
            translation,
        ))
    }

    /// Creates a pure-translation frame.
    pub fn from_translation(translation: Vec3) -> Self {
        Self::new(Affine3A::from_translation(translation))
    }

    /// Transforms a local-space point into world space.
    #[inline]
    pub fn local_to_world(&self, p: Vec3) -> Vec3 {
        self.local_to_world.transform_point3(p)
    }

    /// Transforms a world-space point into local space.
    #[inline]
    pub fn world_to_local(&self, p: Vec3) -> Vec3 {
        self.world_to_local.transform_point3(p)
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::IDENTITY
    }
}
