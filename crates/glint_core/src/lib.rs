//! Glint Core - Scene description and configuration loading.
//!
//! This crate provides:
//!
//! - **Scene description types**: `Material`, `PointLight`, `RenderOptions`,
//!   `EntityDescription`, `SceneDescription`
//! - **JSON loading**: parsing and validation of scene files
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_scene;
//!
//! let scene = load_scene("scenes/showcase.json")?;
//! println!("Loaded {} entities, {} lights",
//!     scene.entities.len(),
//!     scene.lights.len());
//! ```

pub mod loader;
pub mod scene;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_str, LoadError, LoadResult};
pub use scene::{
    EntityDescription, Material, PointLight, RenderOptions, SceneDescription,
    FIELD_OF_VIEW_DEGREES, TRIANGLE_EPSILON,
};
