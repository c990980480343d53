//! End-to-end: scene file -> validated description -> render -> pixels.

use glint_core::load_scene_from_str;
use glint_renderer::{render, Color, ImageBuffer, ImageSink, Scene};

const SCENE: &str = r#"{
    "options": { "aa_multiplier": 2, "seed": 3 },
    "materials": {
        "red": { "type": "diffuse", "color": [1.0, 0.0, 0.0] },
        "green": { "type": "diffuse", "color": [0.0, 1.0, 0.0] },
        "mirror": { "type": "reflective", "color": [1.0, 1.0, 1.0] }
    },
    "entities": [
        { "type": "sphere", "center": [0.0, 0.0, 5.0], "radius": 1.0, "material": "red" },
        { "type": "triangle", "vertices": [[-60, -40, 30], [0, 60, 30], [60, -40, 30]], "material": "green" }
    ],
    "lights": [
        { "position": [0.0, 0.0, -6.0], "color": [1.0, 1.0, 1.0] }
    ]
}"#;

#[test]
fn test_render_loaded_scene() {
    let description = load_scene_from_str(SCENE).unwrap();
    let scene = Scene::from_description(&description);

    let mut image = ImageBuffer::new(31, 21);
    render(&scene, &mut image);

    // Centre sees the red sphere head-on
    let centre = image.get(15, 10);
    assert!(centre.x > 0.9, "centre = {centre}");
    assert_eq!(centre.y, 0.0);

    // Edge of the frame sees the lit green backdrop
    let edge = image.get(0, 10);
    assert_eq!(edge.x, 0.0);
    assert!(edge.y > 0.0, "edge = {edge}");

    for color in &image.pixels {
        assert!(color.min_element() >= 0.0 && color.max_element() <= 1.0);
    }
}

#[test]
fn test_mirror_sphere_reflects_scene_behind_camera() {
    let json = r#"{
        "materials": {
            "red": { "type": "diffuse", "color": [1.0, 0.0, 0.0] },
            "mirror": { "type": "reflective", "color": [1.0, 1.0, 1.0] }
        },
        "entities": [
            { "type": "sphere", "center": [0.0, 0.0, 5.0], "radius": 1.0, "material": "mirror" },
            { "type": "sphere", "center": [0.0, 0.0, -5.0], "radius": 1.0, "material": "red" }
        ],
        "lights": [
            { "position": [0.0, 0.0, 0.0], "color": [1.0, 1.0, 1.0] }
        ]
    }"#;
    let scene = Scene::from_description(&load_scene_from_str(json).unwrap());

    let mut image = ImageBuffer::new(11, 11);
    render(&scene, &mut image);

    let centre = image.get(5, 5);
    assert!(centre.x > 0.9, "centre = {centre}");
    assert_eq!(centre.y, 0.0);
    assert_eq!(image.width(), 11);
}

#[test]
fn test_empty_scene_is_black() {
    let scene = Scene::from_description(&load_scene_from_str("{}").unwrap());
    let mut image = ImageBuffer::new(4, 3);
    render(&scene, &mut image);

    assert!(image.pixels.iter().all(|c| *c == Color::ZERO));
}
