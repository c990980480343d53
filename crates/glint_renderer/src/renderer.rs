//! Pixel sampling, parallel rendering, and the image sink.

use std::path::Path;
use std::time::Instant;

use rand::RngCore;
use rayon::prelude::*;

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::{trace, Camera, Color, Interval, Scene};

/// Destination for finished pixels.
///
/// `render` calls `set_pixel` exactly once per pixel, with every channel
/// already in [0, 1].
pub trait ImageSink {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn set_pixel(&mut self, x: u32, y: u32, color: Color);
}

/// Clamp each channel to [0, 1].
#[inline]
pub fn clamp_color(color: Color) -> Color {
    Color::new(
        Interval::UNIT.clamp(color.x),
        Interval::UNIT.clamp(color.y),
        Interval::UNIT.clamp(color.z),
    )
}

/// Render a single pixel, averaging its N x N sub-samples.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let max_depth = scene.options().max_depth;
    let pixel_color = camera
        .sample_offsets()
        .map(|offset| {
            let ray = camera.get_ray(x, y, offset, rng);
            trace(&ray, scene, max_depth)
        })
        .fold(Color::ZERO, |acc, sample| acc + sample);

    pixel_color * camera.samples_scale()
}

/// Render the scene into `sink` using the default bucket size.
pub fn render(scene: &Scene, sink: &mut dyn ImageSink) {
    render_with_bucket_size(scene, sink, DEFAULT_BUCKET_SIZE);
}

/// Render the scene into `sink`, splitting the image into square buckets.
///
/// Buckets are traced in parallel; pixels are written to the sink once all
/// buckets are done, so the bucket order only affects scheduling.
pub fn render_with_bucket_size(scene: &Scene, sink: &mut dyn ImageSink, bucket_size: u32) {
    let (width, height) = (sink.width(), sink.height());
    let camera = Camera::new(width, height, scene.options());
    let buckets = generate_buckets(width, height, bucket_size);
    let seed = scene.options().seed;

    log::info!(
        "Rendering {}x{} with {}x{} AA in {} buckets on {} threads",
        width,
        height,
        camera.aa_multiplier,
        camera.aa_multiplier,
        buckets.len(),
        rayon::current_num_threads()
    );
    let start = Instant::now();

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| {
            let mut rng = bucket.rng(seed);
            let pixels = render_bucket(bucket, &camera, scene, &mut rng);
            log::debug!("Bucket {} done ({} pixels)", bucket.index, pixels.len());
            BucketResult::new(*bucket, pixels)
        })
        .collect();

    for result in results {
        for ((x, y), color) in result.bucket.pixels().zip(result.pixels) {
            sink.set_pixel(x, y, clamp_color(color));
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
}

/// Simple image buffer for storing render output.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Offset of (x, y) in `pixels`, computed in `usize` so large images don't overflow.
    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Convert to 8-bit RGB. Channels are clamped, no gamma is applied.
    pub fn to_rgb8(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| {
            let c = clamp_color(self.get(x, y)) * 255.0;
            image::Rgb([c.x.round() as u8, c.y.round() as u8, c.z.round() as u8])
        })
    }

    /// Save to disk; the format follows the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> image::ImageResult<()> {
        self.to_rgb8().save(path)
    }
}

impl ImageSink for ImageBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Material, PointLight, RenderOptions, Sphere, Vec3};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn red_sphere_scene(options: RenderOptions) -> Scene {
        let mut scene = Scene::new(options);
        scene.add_entity(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, 5.0),
            1.0,
            Material::Diffuse {
                color: Color::new(1.0, 0.0, 0.0),
            },
        )));
        scene.add_point_light(PointLight::new(Vec3::new(0.0, 0.0, -6.0), Color::ONE));
        scene
    }

    /// Sink that records how often each pixel is written.
    struct CountingSink {
        width: u32,
        height: u32,
        writes: Vec<u32>,
        out_of_range: bool,
    }

    impl ImageSink for CountingSink {
        fn width(&self) -> u32 {
            self.width
        }
        fn height(&self) -> u32 {
            self.height
        }
        fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
            self.writes[y as usize * self.width as usize + x as usize] += 1;
            if color.min_element() < 0.0 || color.max_element() > 1.0 {
                self.out_of_range = true;
            }
        }
    }

    #[test]
    fn test_clamp_color() {
        let clamped = clamp_color(Color::new(-0.5, 0.5, 2.0));
        assert_eq!(clamped, Color::new(0.0, 0.5, 1.0));
    }

    #[test]
    fn test_render_pixel_center_hits_sphere() {
        let scene = red_sphere_scene(RenderOptions::default());
        let camera = Camera::new(11, 11, scene.options());
        let mut rng = StdRng::seed_from_u64(42);

        let color = render_pixel(&camera, &scene, 5, 5, &mut rng);
        assert!(color.x > 0.9);
        assert_eq!(color.y, 0.0);

        let corner = render_pixel(&camera, &scene, 0, 0, &mut rng);
        assert_eq!(corner, Color::ZERO);
    }

    #[test]
    fn test_render_pixel_averages_samples() {
        let options = RenderOptions {
            aa_multiplier: 4,
            ..Default::default()
        };
        let scene = red_sphere_scene(options);
        // Few pixels, so the sphere's silhouette crosses some of them
        let camera = Camera::new(5, 5, scene.options());
        let mut rng = StdRng::seed_from_u64(1);

        let partial = (0..5)
            .flat_map(|y| (0..5).map(move |x| (x, y)))
            .map(|(x, y)| render_pixel(&camera, &scene, x, y, &mut rng).x)
            .any(|r| r > 0.0 && r < 0.9);
        assert!(partial, "expected an anti-aliased edge pixel");
    }

    #[test]
    fn test_render_writes_each_pixel_once() {
        let scene = red_sphere_scene(RenderOptions {
            aa_multiplier: 2,
            ..Default::default()
        });
        let mut sink = CountingSink {
            width: 23,
            height: 17,
            writes: vec![0; 23 * 17],
            out_of_range: false,
        };

        render_with_bucket_size(&scene, &mut sink, 8);

        assert!(sink.writes.iter().all(|&n| n == 1));
        assert!(!sink.out_of_range);
    }

    #[test]
    fn test_render_is_deterministic_with_aperture() {
        let options = RenderOptions {
            aa_multiplier: 2,
            aperture_radius: 0.1,
            focal_length: 4.0,
            seed: 1234,
            ..Default::default()
        };
        let scene = red_sphere_scene(options);

        let mut first = ImageBuffer::new(24, 16);
        let mut second = ImageBuffer::new(24, 16);
        render(&scene, &mut first);
        render(&scene, &mut second);

        assert_eq!(first, second);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_index_past_u32_range() {
        let image = ImageBuffer {
            width: 70_000,
            height: 70_000,
            pixels: Vec::new(),
        };
        assert_eq!(image.index(69_999, 69_999), 70_000usize * 70_000 - 1);
        assert_eq!(image.index(3, 1), 70_003);
    }

    #[test]
    fn test_to_rgb8() {
        let mut image = ImageBuffer::new(2, 1);
        image.set_pixel(0, 0, Color::new(1.0, 0.5, 0.0));
        image.set_pixel(1, 0, Color::new(3.0, -1.0, 0.2));

        let rgb = image.to_rgb8();
        assert_eq!(rgb.get_pixel(0, 0).0, [255, 128, 0]);
        assert_eq!(rgb.get_pixel(1, 0).0, [255, 0, 51]);
    }
}
