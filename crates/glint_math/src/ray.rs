use crate::Vec3;

/// A half-line in 3D space with an origin and a direction.
///
/// The direction is stored exactly as given and need not be unit length.
/// Anything that compares distances, takes angles, or solves a quadratic
/// along the ray should go through [`Ray::unit_direction`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector as constructed.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the normalized direction.
    #[inline]
    pub fn unit_direction(&self) -> Vec3 {
        self.direction.normalize()
    }

    /// Get the point at distance `t` along the normalized direction.
    ///
    /// Returns: origin + t * unit_direction
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.unit_direction() * t
    }
}
