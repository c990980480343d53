//! Recursive shading kernel.
//!
//! `trace` finds the closest hit and hands it to `shade`, which dispatches
//! on the material and returns a [`Shading`]: a local color plus zero or
//! more weighted continuation rays. `trace` then follows each continuation
//! with one less unit of depth and combines the results.
//!
//! | Material   | local          | continuations                    | clamp |
//! |------------|----------------|----------------------------------|-------|
//! | Diffuse    | direct light   | none                             | yes   |
//! | Reflective | black          | mirror (1.0)                     | no    |
//! | Refractive | black          | mirror (R), transmitted (1 - R)  | no    |
//! | Glossy     | direct light   | mirror (0.25)                    | yes   |

use crate::light::direct_lighting;
use crate::renderer::clamp_color;
use crate::{reflect, refract, Color, Material, Ray, RayHit, Scene, Vec3, SURFACE_EPSILON};

/// Weight of the mirror bounce on glossy surfaces.
const GLOSSY_REFLECTION_WEIGHT: f32 = 0.25;

/// A secondary ray and the weight of its result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Continuation {
    pub ray: Ray,
    pub weight: f32,
}

/// Outcome of shading a single hit.
#[derive(Debug, Clone, PartialEq)]
pub struct Shading {
    /// Color produced at the hit itself
    pub local: Color,
    /// Rays to trace further, with their weights
    pub continuations: Vec<Continuation>,
    /// Clamp the combined color to [0, 1]
    pub clamp: bool,
}

impl Shading {
    fn terminal(local: Color) -> Self {
        Self {
            local,
            continuations: Vec::new(),
            clamp: true,
        }
    }

    fn pass_through(continuations: Vec<Continuation>) -> Self {
        Self {
            local: Color::ZERO,
            continuations,
            clamp: false,
        }
    }
}

/// Compute the color seen along `ray`.
///
/// `depth` is the remaining recursion budget; at zero the result is black
/// whatever the scene holds. Rays that hit nothing are black as well.
pub fn trace(ray: &Ray, scene: &Scene, depth: u32) -> Color {
    if depth == 0 {
        return Color::ZERO;
    }

    let Some(hit) = scene.closest_hit(ray) else {
        return Color::ZERO;
    };

    let shading = shade(scene, &hit);
    let color = shading
        .continuations
        .iter()
        .fold(shading.local, |acc, next| {
            acc + next.weight * trace(&next.ray, scene, depth - 1)
        });

    if shading.clamp {
        clamp_color(color)
    } else {
        color
    }
}

/// Shade a hit according to its material.
pub fn shade(scene: &Scene, hit: &RayHit) -> Shading {
    match *hit.material {
        Material::Diffuse { .. } => shade_diffuse(scene, hit),
        Material::Reflective { .. } => shade_reflective(hit),
        Material::Refractive {
            refractive_index, ..
        } => shade_refractive(hit, refractive_index),
        Material::Glossy { .. } => shade_glossy(scene, hit),
    }
}

fn shade_diffuse(scene: &Scene, hit: &RayHit) -> Shading {
    Shading::terminal(direct_lighting(scene, hit))
}

fn shade_reflective(hit: &RayHit) -> Shading {
    Shading::pass_through(vec![mirror(hit, 1.0)])
}

fn shade_refractive(hit: &RayHit, refractive_index: f32) -> Shading {
    match refract(hit.incident, hit.normal, refractive_index) {
        Some(refraction) => {
            let transmitted = Ray::new(
                hit.position + refraction.direction * SURFACE_EPSILON,
                refraction.direction,
            );
            Shading::pass_through(vec![
                mirror(hit, refraction.reflectance),
                Continuation {
                    ray: transmitted,
                    weight: 1.0 - refraction.reflectance,
                },
            ])
        }
        // Total internal reflection
        None => Shading::pass_through(vec![mirror(hit, 1.0)]),
    }
}

fn shade_glossy(scene: &Scene, hit: &RayHit) -> Shading {
    Shading {
        local: direct_lighting(scene, hit),
        continuations: vec![mirror(hit, GLOSSY_REFLECTION_WEIGHT)],
        clamp: true,
    }
}

/// Mirror continuation leaving from the side of the surface it reflects into.
fn mirror(hit: &RayHit, weight: f32) -> Continuation {
    let direction = reflect(hit.incident, hit.normal);
    Continuation {
        ray: Ray::new(offset_origin(hit, direction), direction),
        weight,
    }
}

fn offset_origin(hit: &RayHit, direction: Vec3) -> Vec3 {
    let side = if direction.dot(hit.normal) >= 0.0 {
        hit.normal
    } else {
        -hit.normal
    };
    hit.position + side * SURFACE_EPSILON
}
