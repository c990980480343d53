// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod interval;
mod ray;
pub use interval::Interval;
pub use ray::Ray;

/// RGB color with unbounded channels (r = x, g = y, b = z).
pub type Color = Vec3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_is_vec3() {
        let c: Color = Color::new(1.0, 0.5, 0.0);
        assert_eq!(c.x, 1.0);
        assert_eq!(c * Color::new(0.5, 1.0, 1.0), Color::new(0.5, 0.5, 0.0));
    }
}
