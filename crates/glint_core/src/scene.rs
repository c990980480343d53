//! Scene description types for Glint.
//!
//! These are the plain-data form of a scene as it comes out of a scene file:
//! a named material table, entity descriptions that reference materials by
//! name, point lights, and render options. The renderer turns a description
//! into intersectable geometry once, before rendering starts.

use std::collections::BTreeMap;

use glint_math::{Color, Vec3};
use serde::{Deserialize, Serialize};

/// Vertical field of view of the camera, in degrees.
pub const FIELD_OF_VIEW_DEGREES: f32 = 60.0;

/// Smallest doubled area a triangle may have.
///
/// A ray/triangle determinant never exceeds the doubled area, so the
/// renderer uses the same value as its parallel-ray cutoff. Smaller
/// triangles could never be hit.
pub const TRIANGLE_EPSILON: f32 = 1e-4;

/// Surface appearance model.
///
/// Every variant carries a base color. Only `Diffuse` and `Glossy` use it
/// for shading; mirror and dielectric surfaces pass along whatever their
/// continuation rays return.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Material {
    /// Lambertian surface lit directly by point lights.
    Diffuse { color: Color },
    /// Perfect mirror.
    Reflective { color: Color },
    /// Dielectric with Fresnel-weighted reflection and transmission.
    Refractive {
        color: Color,
        refractive_index: f32,
    },
    /// Diffuse lighting plus a quarter-weighted mirror bounce.
    Glossy { color: Color },
}

impl Material {
    /// Base reflectance color.
    pub fn color(&self) -> Color {
        match *self {
            Material::Diffuse { color }
            | Material::Reflective { color }
            | Material::Refractive { color, .. }
            | Material::Glossy { color } => color,
        }
    }

    /// Short lowercase name of the variant, as written in scene files.
    pub fn kind(&self) -> &'static str {
        match self {
            Material::Diffuse { .. } => "diffuse",
            Material::Reflective { .. } => "reflective",
            Material::Refractive { .. } => "refractive",
            Material::Glossy { .. } => "glossy",
        }
    }
}

/// An infinitely small light emitting in all directions.
///
/// Color is intensity and is not clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Color,
}

impl PointLight {
    /// Create a new point light.
    pub fn new(position: Vec3, color: Color) -> Self {
        Self { position, color }
    }
}

/// Render settings fixed before rendering begins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Sub-samples per pixel along each axis (N for an N x N grid)
    pub aa_multiplier: u32,
    /// Distance from the lens to the plane in focus
    pub focal_length: f32,
    /// Lens radius; zero selects the pinhole camera
    pub aperture_radius: f32,
    /// Recursion budget for each primary ray
    pub max_depth: u32,
    /// Seed for the lens sampling streams
    pub seed: u64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            aa_multiplier: 1,
            focal_length: 1.0,
            aperture_radius: 0.0,
            max_depth: 10,
            seed: 0,
        }
    }
}

/// Geometry as written in a scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EntityDescription {
    Sphere {
        center: Vec3,
        radius: f32,
        material: String,
    },
    Triangle {
        vertices: [Vec3; 3],
        material: String,
    },
}

impl EntityDescription {
    /// Name of the referenced material.
    pub fn material_name(&self) -> &str {
        match self {
            EntityDescription::Sphere { material, .. }
            | EntityDescription::Triangle { material, .. } => material,
        }
    }
}

/// A complete scene: options, material table, geometry, and lights.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub options: RenderOptions,
    #[serde(default)]
    pub materials: BTreeMap<String, Material>,
    #[serde(default)]
    pub entities: Vec<EntityDescription>,
    #[serde(default)]
    pub lights: Vec<PointLight>,
}

impl SceneDescription {
    /// Register a named material, replacing any previous entry.
    pub fn add_material(&mut self, name: impl Into<String>, material: Material) {
        self.materials.insert(name.into(), material);
    }

    /// Add an entity description.
    pub fn add_entity(&mut self, entity: EntityDescription) {
        self.entities.push(entity);
    }

    /// Add a point light.
    pub fn add_light(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    /// Look up a material by name.
    pub fn material(&self, name: &str) -> Option<&Material> {
        self.materials.get(name)
    }
}
