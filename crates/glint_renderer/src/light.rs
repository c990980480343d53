//! Point light visibility and Lambertian direct lighting.

use crate::{Color, PointLight, Ray, RayHit, Scene, SURFACE_EPSILON};

/// Test whether `light` is hidden from the hit point by any entity.
///
/// The shadow ray starts slightly off the surface along the normal. A
/// blocker only counts if it lies between that origin and the light, which
/// is checked by the sign of `(blocker - origin) . (light - blocker)`.
/// Every entity blocks light, whatever its material.
pub fn is_shadowed(scene: &Scene, hit: &RayHit, light: &PointLight) -> bool {
    let origin = hit.position + hit.normal * SURFACE_EPSILON;
    let to_light = (light.position - hit.position).normalize();
    let shadow_ray = Ray::new(origin, to_light);

    scene
        .entities()
        .iter()
        .filter_map(|entity| entity.intersect(&shadow_ray))
        .any(|blocker| {
            (blocker.position - origin).dot(light.position - blocker.position) > 0.0
        })
}

/// Sum of unshadowed Lambertian contributions from every light.
///
/// Each light's `N . L` is clamped at zero before it is added, so lights
/// behind the surface never darken it. The sum itself is not clamped.
pub fn direct_lighting(scene: &Scene, hit: &RayHit) -> Color {
    let albedo = hit.material.color();

    scene
        .lights()
        .iter()
        .filter(|light| !is_shadowed(scene, hit, light))
        .map(|light| {
            let to_light = (light.position - hit.position).normalize();
            let lambert = hit.normal.dot(to_light).max(0.0);
            albedo * light.color * lambert
        })
        .fold(Color::ZERO, |acc, contribution| acc + contribution)
}
