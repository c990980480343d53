//! Scene file loading.
//!
//! Scene files are JSON documents with four optional top-level keys:
//! `options`, `materials`, `entities`, and `lights`. Entities refer to
//! materials by name. Everything the renderer assumes about its input
//! (positive radii, non-degenerate triangles, positive indices of
//! refraction) is checked here, so the renderer itself never has to fail.

use std::path::Path;

use thiserror::Error;

use crate::scene::{EntityDescription, Material, SceneDescription, TRIANGLE_EPSILON};

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("entity {index} references unknown material '{name}'")]
    UnknownMaterial { index: usize, name: String },

    #[error("entity {index}: sphere radius must be positive and finite, got {radius}")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("entity {index}: triangle is degenerate or too small to hit")]
    DegenerateTriangle { index: usize },

    #[error("material '{name}': refractive index must be positive, got {index}")]
    InvalidRefractiveIndex { name: String, index: f32 },

    #[error("invalid render option: {0}")]
    InvalidOption(String),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load and validate a scene file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<SceneDescription> {
    let path = path.as_ref();
    log::info!("Loading scene from {:?}", path);
    let contents = std::fs::read_to_string(path)?;
    load_scene_from_str(&contents)
}

/// Parse and validate a scene from a JSON string.
pub fn load_scene_from_str(json: &str) -> LoadResult<SceneDescription> {
    let scene: SceneDescription = serde_json::from_str(json)?;
    validate(&scene)?;

    log::info!(
        "Loaded {} entities, {} lights, {} materials",
        scene.entities.len(),
        scene.lights.len(),
        scene.materials.len()
    );

    Ok(scene)
}

/// Check a scene description for input the renderer cannot handle.
pub fn validate(scene: &SceneDescription) -> LoadResult<()> {
    let options = &scene.options;
    if options.aa_multiplier == 0 {
        return Err(LoadError::InvalidOption(
            "aa_multiplier must be at least 1".to_string(),
        ));
    }
    if !(options.aperture_radius >= 0.0) {
        return Err(LoadError::InvalidOption(format!(
            "aperture_radius must be non-negative, got {}",
            options.aperture_radius
        )));
    }
    if options.aperture_radius > 0.0 && !(options.focal_length > 0.0) {
        return Err(LoadError::InvalidOption(format!(
            "focal_length must be positive when an aperture is set, got {}",
            options.focal_length
        )));
    }

    for (name, material) in &scene.materials {
        log::debug!("Material '{}': {}", name, material.kind());
        if let Material::Refractive {
            refractive_index, ..
        } = *material
        {
            if !(refractive_index > 0.0) {
                return Err(LoadError::InvalidRefractiveIndex {
                    name: name.clone(),
                    index: refractive_index,
                });
            }
        }
    }

    for (index, entity) in scene.entities.iter().enumerate() {
        let name = entity.material_name();
        if scene.material(name).is_none() {
            return Err(LoadError::UnknownMaterial {
                index,
                name: name.to_string(),
            });
        }

        match entity {
            EntityDescription::Sphere { radius, .. } => {
                if !(radius.is_finite() && *radius > 0.0) {
                    return Err(LoadError::InvalidRadius {
                        index,
                        radius: *radius,
                    });
                }
            }
            EntityDescription::Triangle { vertices, .. } => {
                let [v0, v1, v2] = *vertices;
                let doubled_area = (v1 - v0).cross(v2 - v0).length();
                if !(doubled_area > TRIANGLE_EPSILON) {
                    return Err(LoadError::DegenerateTriangle { index });
                }
            }
        }
    }

    Ok(())
}
