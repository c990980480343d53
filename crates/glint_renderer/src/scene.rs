//! Renderable scene: intersectable entities, point lights, and options.

use std::collections::BTreeMap;
use std::sync::Arc;

use glint_core::{EntityDescription, SceneDescription};

use crate::{Material, PointLight, Ray, RayHit, RenderOptions, SceneEntity, Sphere, Triangle};

/// Entities and lights ready for tracing.
///
/// Read-only once rendering starts. Entities are kept by identity, so two
/// geometrically identical primitives are both kept.
pub struct Scene {
    entities: Vec<Box<dyn SceneEntity>>,
    lights: Vec<PointLight>,
    options: RenderOptions,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            entities: Vec::new(),
            lights: Vec::new(),
            options,
        }
    }

    /// Build intersectable geometry from a scene description.
    ///
    /// Each named material is allocated once and shared by every entity
    /// that references it. Entities with an unknown material are skipped;
    /// validate descriptions with `glint_core::loader::validate` first.
    pub fn from_description(description: &SceneDescription) -> Self {
        let mut scene = Self::new(description.options);

        let materials: BTreeMap<&str, Arc<Material>> = description
            .materials
            .iter()
            .map(|(name, material)| (name.as_str(), Arc::new(*material)))
            .collect();

        for (index, entity) in description.entities.iter().enumerate() {
            let Some(material) = materials.get(entity.material_name()) else {
                log::warn!(
                    "Skipping entity {}: unknown material '{}'",
                    index,
                    entity.material_name()
                );
                continue;
            };

            let entity: Box<dyn SceneEntity> = match entity {
                EntityDescription::Sphere { center, radius, .. } => {
                    Box::new(Sphere::new(*center, *radius, Arc::clone(material)))
                }
                EntityDescription::Triangle { vertices, .. } => {
                    let [v0, v1, v2] = *vertices;
                    Box::new(Triangle::new(v0, v1, v2, Arc::clone(material)))
                }
            };
            scene.add_entity(entity);
        }

        for light in &description.lights {
            scene.add_point_light(*light);
        }

        log::debug!(
            "Built scene with {} entities and {} lights",
            scene.entities.len(),
            scene.lights.len()
        );

        scene
    }

    /// Add an entity to be rendered.
    pub fn add_entity(&mut self, entity: Box<dyn SceneEntity>) {
        self.entities.push(entity);
    }

    /// Add a point light.
    pub fn add_point_light(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    /// All entities.
    pub fn entities(&self) -> &[Box<dyn SceneEntity>] {
        &self.entities
    }

    /// All point lights.
    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    /// Render options.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Find the hit closest to the ray origin.
    ///
    /// Every entity is tested; ties between coincident surfaces are
    /// resolved arbitrarily.
    pub fn closest_hit(&self, ray: &Ray) -> Option<RayHit<'_>> {
        let origin = ray.origin();
        self.entities
            .iter()
            .filter_map(|entity| entity.intersect(ray))
            .map(|hit| (hit.distance_from(origin), hit))
            .min_by(|(a, _), (b, _)| a.total_cmp(b))
            .map(|(_, hit)| hit)
    }
}
