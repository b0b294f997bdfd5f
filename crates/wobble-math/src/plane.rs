//! Infinite plane with signed-distance and projection queries.
//!
//! The contact tracker classifies particles against the ground plane
//! every collision step; the plane may move or rotate between steps
//! because its pose is owned by the host scene graph.

use glam::Vec3;

/// An infinite plane defined by a point on the plane and a unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// A point on the plane (world space).
    pub point: Vec3,
    /// Unit normal (world space).
    pub normal: Vec3,
}

impl Plane {
    /// Creates a plane from a point and a normal. The normal is
    /// normalized here so callers can pass a raw "up" direction.
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self {
            point,
            normal: normal.normalize(),
        }
    }

    /// Signed distance from `p` to the plane.
    ///
    /// Positive on the normal's side, negative behind it (penetrating).
    #[inline]
    pub fn signed_distance(&self, p: Vec3) -> f32 {
        (p - self.point).dot(self.normal)
    }

    /// Orthogonal projection of `p` onto the plane.
    #[inline]
    pub fn project(&self, p: Vec3) -> Vec3 {
        p - self.signed_distance(p) * self.normal
    }
}
