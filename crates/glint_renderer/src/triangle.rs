//! Triangle primitive for ray tracing.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use std::sync::Arc;

use crate::{
    hittable::{RayHit, SceneEntity},
    Material, Ray, SURFACE_EPSILON,
};
use glint_core::TRIANGLE_EPSILON;
use glint_math::{Interval, Vec3};

/// Determinants smaller than this mean the ray runs parallel to the plane.
/// The loader rejects triangles whose doubled area is not above it.
const PARALLEL_EPSILON: f32 = TRIANGLE_EPSILON;

/// A flat-shaded triangle primitive.
pub struct Triangle {
    /// Vertices
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    /// Pre-computed face normal (unit length, follows winding)
    normal: Vec3,
    material: Arc<Material>,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    ///
    /// The normal is `(v1 - v0) x (v2 - v0)`, so counter-clockwise winding
    /// seen from the front faces the viewer.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, material: impl Into<Arc<Material>>) -> Self {
        let normal = (v1 - v0).cross(v2 - v0).normalize();

        Self {
            v0,
            v1,
            v2,
            normal,
            material: material.into(),
        }
    }

    /// Möller-Trumbore test.
    ///
    /// Returns `(t, u, v)` where `t` is the distance along the normalized
    /// ray direction and `(1 - u - v, u, v)` are the barycentric weights of
    /// `v0`, `v1`, `v2`.
    pub fn barycentric(&self, ray: &Ray) -> Option<(f32, f32, f32)> {
        let direction = ray.unit_direction();
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let p = direction.cross(edge2);
        let determinant = edge1.dot(p);

        // Ray is parallel to triangle
        if determinant.abs() < PARALLEL_EPSILON {
            return None;
        }

        let inv_det = 1.0 / determinant;
        let s = ray.origin() - self.v0;
        let u = s.dot(p) * inv_det;
        if !Interval::UNIT.contains(u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = direction.dot(q) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = edge2.dot(q) * inv_det;
        if t <= SURFACE_EPSILON {
            return None;
        }

        Some((t, u, v))
    }
}

impl SceneEntity for Triangle {
    fn intersect(&self, ray: &Ray) -> Option<RayHit<'_>> {
        let (t, _, _) = self.barycentric(ray)?;
        let direction = ray.unit_direction();
        let position = ray.origin() + direction * t;

        Some(RayHit::new(position, self.normal, direction, &self.material))
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
