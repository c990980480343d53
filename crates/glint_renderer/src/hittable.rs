//! SceneEntity trait and RayHit for ray-object intersection.

use crate::{Material, Ray};
use glint_math::Vec3;

/// Record of a ray-object intersection.
///
/// Created fresh by each intersection test and never mutated afterwards.
#[derive(Debug, Clone, Copy)]
pub struct RayHit<'a> {
    /// Point of intersection
    pub position: Vec3,
    /// Unit surface normal (outward for spheres, by winding for triangles)
    pub normal: Vec3,
    /// Unit direction of the ray that produced the hit
    pub incident: Vec3,
    /// Material of the surface that was hit
    pub material: &'a Material,
}

impl<'a> RayHit<'a> {
    /// Create a new hit record.
    pub fn new(position: Vec3, normal: Vec3, incident: Vec3, material: &'a Material) -> Self {
        Self {
            position,
            normal,
            incident,
            material,
        }
    }

    /// Euclidean distance from `origin` to the hit position.
    #[inline]
    pub fn distance_from(&self, origin: Vec3) -> f32 {
        (self.position - origin).length()
    }
}

/// Trait for objects that can be hit by rays.
///
/// "No hit" is an ordinary outcome, reported as `None`.
pub trait SceneEntity: Send + Sync {
    /// Find the nearest forward intersection of `ray` with this entity.
    fn intersect(&self, ray: &Ray) -> Option<RayHit<'_>>;

    /// Material shared by every hit on this entity.
    fn material(&self) -> &Material;
}
