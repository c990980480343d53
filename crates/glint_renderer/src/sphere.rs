//! Sphere primitive for ray tracing.

use std::sync::Arc;

use crate::{
    hittable::{RayHit, SceneEntity},
    Material, Ray,
};
use glint_math::{Interval, Vec3};

/// A sphere primitive.
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: impl Into<Arc<Material>>) -> Self {
        Self {
            center,
            radius,
            material: material.into(),
        }
    }
}

impl SceneEntity for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<RayHit<'_>> {
        let direction = ray.unit_direction();
        let oc = ray.origin() - self.center;

        // Quadratic a*t^2 + b*t + c = 0 along the normalized direction
        let a = direction.dot(direction);
        let b = 2.0 * direction.dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Nearest root in front of the origin
        let near = (-b - sqrtd) / (2.0 * a);
        let far = (-b + sqrtd) / (2.0 * a);
        let t = [near, far]
            .into_iter()
            .find(|t| Interval::POSITIVE.surrounds(*t))?;

        let position = ray.origin() + direction * t;
        let normal = (position - self.center).normalize();

        Some(RayHit::new(position, normal, direction, &self.material))
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
