//! Mirror reflection, refraction, and Schlick's Fresnel approximation.

use glint_math::Vec3;

/// Schlick's approximation for reflectance.
///
/// `cos_i` is the cosine of the angle of incidence, `index` the ratio of
/// refractive indices across the boundary. Stays in [0, 1] for
/// `cos_i` in [0, 1] and positive `index`.
pub fn schlick(cos_i: f32, index: f32) -> f32 {
    let r0 = ((1.0 - index) / (1.0 + index)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cos_i).powi(5)
}

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - 2.0 * incident.dot(normal) * normal
}

/// A transmitted direction together with the share of energy reflected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Refraction {
    /// Unit direction of the transmitted ray
    pub direction: Vec3,
    /// Fraction of energy reflected (Schlick); `1 - reflectance` is transmitted
    pub reflectance: f32,
}

/// Refract `incident` through a boundary with outward `normal`.
///
/// If the incident direction agrees with the normal the ray is inside the
/// medium: `refractive_index` is used as the ratio and the normal as is.
/// Otherwise the reciprocal ratio and the negated normal are used.
///
/// Returns `None` on total internal reflection.
pub fn refract(incident: Vec3, normal: Vec3, refractive_index: f32) -> Option<Refraction> {
    let incident = incident.normalize();
    let facing = incident.dot(normal);

    let (ratio, normal, cos_i) = if facing > 0.0 {
        (refractive_index, normal, facing)
    } else {
        (1.0 / refractive_index, -normal, -facing)
    };

    let sin2_t = ratio * ratio * (1.0 - cos_i * cos_i);
    if sin2_t > 1.0 {
        return None;
    }
    let cos_t = (1.0 - sin2_t).sqrt();

    let direction = incident * ratio - normal * (ratio * cos_i - cos_t);

    Some(Refraction {
        direction: direction.normalize(),
        reflectance: schlick(cos_i, ratio),
    })
}
