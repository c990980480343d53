//! Simple ray tracer example.
//!
//! Builds a small scene in code and saves it as PNG.

use glint_renderer::{
    render, Color, ImageBuffer, Material, PointLight, RenderOptions, Scene, Sphere, Triangle,
    Vec3,
};
use std::sync::Arc;

fn main() -> Result<(), image::ImageError> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let start = std::time::Instant::now();
    let scene = build_scene();
    log::info!("Scene built in {:?}", start.elapsed());

    let mut image = ImageBuffer::new(640, 480);
    render(&scene, &mut image);

    let filename = "output.png";
    image.save(filename)?;
    log::info!("Saved to {}", filename);

    Ok(())
}

fn build_scene() -> Scene {
    let mut scene = Scene::new(RenderOptions {
        aa_multiplier: 2,
        focal_length: 5.0,
        aperture_radius: 0.05,
        seed: 42,
        ..Default::default()
    });

    // Ground, two triangles sharing one material
    let ground = Arc::new(Material::Diffuse {
        color: Color::new(0.8, 0.8, 0.8),
    });
    let corners = [
        Vec3::new(-5.0, -1.0, 1.0),
        Vec3::new(5.0, -1.0, 1.0),
        Vec3::new(5.0, -1.0, 12.0),
        Vec3::new(-5.0, -1.0, 12.0),
    ];
    scene.add_entity(Box::new(Triangle::new(
        corners[0],
        corners[2],
        corners[1],
        Arc::clone(&ground),
    )));
    scene.add_entity(Box::new(Triangle::new(
        corners[0],
        corners[3],
        corners[2],
        ground,
    )));

    scene.add_entity(Box::new(Sphere::new(
        Vec3::new(-1.5, 0.0, 6.0),
        1.0,
        Material::Reflective { color: Color::ONE },
    )));
    scene.add_entity(Box::new(Sphere::new(
        Vec3::new(0.0, -0.3, 4.5),
        0.7,
        Material::Refractive {
            color: Color::ONE,
            refractive_index: 1.5,
        },
    )));
    scene.add_entity(Box::new(Sphere::new(
        Vec3::new(1.5, 0.0, 6.0),
        1.0,
        Material::Glossy {
            color: Color::new(0.2, 0.4, 0.8),
        },
    )));
    scene.add_entity(Box::new(Sphere::new(
        Vec3::new(0.3, -0.6, 8.0),
        0.4,
        Material::Diffuse {
            color: Color::new(0.9, 0.2, 0.1),
        },
    )));

    scene.add_point_light(PointLight::new(Vec3::new(0.0, 4.0, 2.0), Color::splat(0.9)));
    scene.add_point_light(PointLight::new(Vec3::new(-3.0, 2.0, 0.0), Color::splat(0.3)));

    log::info!("Created {} objects", scene.entities().len());
    scene
}
