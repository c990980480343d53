//! Glint Renderer - recursive CPU ray tracing.
//!
//! Traces rays against spheres and triangles, shades hits with point
//! lights and hard shadows, and follows mirror, dielectric, and glossy
//! bounces until a depth budget runs out. Pixels are rendered in parallel
//! buckets with per-bucket seeded random streams.

mod bucket;
mod camera;
mod fresnel;
mod hittable;
mod light;
mod renderer;
mod scene;
mod shading;
mod sphere;
mod triangle;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use fresnel::{reflect, refract, schlick, Refraction};
pub use hittable::{RayHit, SceneEntity};
pub use light::{direct_lighting, is_shadowed};
pub use renderer::{
    clamp_color, render, render_pixel, render_with_bucket_size, ImageBuffer, ImageSink,
};
pub use scene::Scene;
pub use shading::{shade, trace, Continuation, Shading};
pub use sphere::Sphere;
pub use triangle::Triangle;

/// Re-export scene description types from glint_core
pub use glint_core::{Material, PointLight, RenderOptions};

/// Re-export Vec3 and common math types from glint_math
pub use glint_math::{Color, Interval, Ray, Vec3};

/// Offset applied to secondary ray origins to avoid re-hitting the surface
/// they start on.
pub const SURFACE_EPSILON: f32 = 1e-4;

/// Draw a uniform f32 in [0, 1).
#[inline]
pub(crate) fn gen_f32(rng: &mut dyn rand::RngCore) -> f32 {
    use rand::Rng;
    rng.gen::<f32>()
}
