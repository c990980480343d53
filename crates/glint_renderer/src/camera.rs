//! Camera for ray generation.
//!
//! The camera sits at the origin looking down +Z with +Y up. Each pixel is
//! covered by an N x N grid of sub-samples at the centres of the grid cells.
//! With a non-zero aperture, every sample is re-aimed from a random point on
//! the lens towards its focal point (thin-lens depth of field).

use crate::{gen_f32, Ray, RenderOptions};
use glint_core::FIELD_OF_VIEW_DEGREES;
use glint_math::Vec3;
use rand::RngCore;

/// Camera for generating primary rays.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,
    pub aa_multiplier: u32,

    // Lens settings
    focal_length: f32,
    aperture_radius: f32,

    // Cached computed values
    center: Vec3,
    half_width: f32,  // tan(fov / 2)
    half_height: f32, // tan(fov / 2) / aspect
}

impl Camera {
    /// Create a camera for an image of the given size.
    pub fn new(image_width: u32, image_height: u32, options: &RenderOptions) -> Self {
        let half_width = (FIELD_OF_VIEW_DEGREES.to_radians() / 2.0).tan();
        let aspect_ratio = image_width as f32 / image_height.max(1) as f32;

        Self {
            image_width,
            image_height,
            aa_multiplier: options.aa_multiplier.max(1),
            focal_length: options.focal_length,
            aperture_radius: options.aperture_radius,
            center: Vec3::ZERO,
            half_width,
            half_height: half_width / aspect_ratio,
        }
    }

    /// Whether rays are jittered over a lens.
    pub fn has_aperture(&self) -> bool {
        self.aperture_radius > 0.0
    }

    /// Number of samples taken per pixel.
    pub fn samples_per_pixel(&self) -> u32 {
        self.aa_multiplier * self.aa_multiplier
    }

    /// Get the samples scale factor (1 / samples_per_pixel).
    pub fn samples_scale(&self) -> f32 {
        1.0 / self.samples_per_pixel() as f32
    }

    /// Sub-pixel offsets in [0, 1) x [0, 1), row by row.
    pub fn sample_offsets(&self) -> impl Iterator<Item = (f32, f32)> {
        let n = self.aa_multiplier;
        let cell = 1.0 / n as f32;
        (0..n).flat_map(move |sy| {
            (0..n).map(move |sx| ((sx as f32 + 0.5) * cell, (sy as f32 + 0.5) * cell))
        })
    }

    /// Pinhole ray through a point of pixel (x, y) given by a sub-pixel offset.
    pub fn pinhole_ray(&self, x: u32, y: u32, offset: (f32, f32)) -> Ray {
        let ndc_x = (x as f32 + offset.0) / self.image_width as f32;
        let ndc_y = (y as f32 + offset.1) / self.image_height as f32;

        let direction = Vec3::new(
            (ndc_x * 2.0 - 1.0) * self.half_width,
            (1.0 - ndc_y * 2.0) * self.half_height,
            1.0,
        );

        Ray::new(self.center, direction)
    }

    /// Generate the ray for one sub-sample of pixel (x, y).
    ///
    /// The random source is only used when the aperture is open.
    pub fn get_ray(&self, x: u32, y: u32, offset: (f32, f32), rng: &mut dyn RngCore) -> Ray {
        let ray = self.pinhole_ray(x, y, offset);
        if !self.has_aperture() {
            return ray;
        }

        let focal_point = self.center + ray.unit_direction() * self.focal_length;
        let lens = random_in_unit_disk(rng) * self.aperture_radius;
        let origin = self.center + lens;

        Ray::new(origin, focal_point - origin)
    }
}

/// Sample a random point in the unit disk.
fn random_in_unit_disk(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(gen_f32(rng) * 2.0 - 1.0, gen_f32(rng) * 2.0 - 1.0, 0.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}
