use std::time::Instant;

use glam::Vec3;
use log::{debug, info};
use rand::Rng;

use crate::camera::Camera;
use crate::integrator::{ray_color, DEFAULT_MAX_DEPTH};
use crate::world::World;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    pub samples_per_pixel: u32,
    pub max_depth: u32,
}

impl RenderSettings {
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings { width: 1200, height: 800, samples_per_pixel: 50, max_depth: DEFAULT_MAX_DEPTH }
    }
}

/// Quantized pixels in output order: top scanline first, left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<[u8; 3]>,
}

/// Gamma 2, clamp to `[0, 1]`, then scale by 255 and truncate. Negative and NaN channels become 0.
pub fn to_display(color: Vec3) -> [u8; 3] {
    let channel = |c: f32| (c.max(0.0).sqrt().clamp(0.0, 1.0) * 255.0) as u8;
    return [channel(color.x), channel(color.y), channel(color.z)];
}

/// Averages `samples_per_pixel` jittered rays through pixel `(x, y)`, with `y = 0` at the bottom.
pub fn sample_pixel<R: Rng + ?Sized>(
    world: &World,
    camera: &Camera,
    settings: &RenderSettings,
    x: u32,
    y: u32,
    rng: &mut R,
) -> Vec3 {
    let mut c = Vec3::ZERO;

    // random multisampling
    for _ in 0..settings.samples_per_pixel {
        let rand_u: f32 = rng.gen();
        let rand_v: f32 = rng.gen();

        let u = (x as f32 + rand_u) / settings.width as f32;
        let v = (y as f32 + rand_v) / settings.height as f32;
        let ray = camera.create_ray(u, v);

        c += ray_color(world, &ray, 0, settings.max_depth, rng);
    }

    return c / settings.samples_per_pixel as f32;
}

pub fn render<R: Rng + ?Sized>(world: &World, camera: &Camera, settings: &RenderSettings, rng: &mut R) -> Image {
    info!(
        "Rendering {}x{} at {} samples per pixel, {} spheres",
        settings.width,
        settings.height,
        settings.samples_per_pixel,
        world.surfaces.len()
    );
    let start = Instant::now();

    let mut pixels = Vec::with_capacity(settings.pixel_count());

    for y in (0..settings.height).rev() {
        debug!("Scanline {}", y);
        for x in 0..settings.width {
            pixels.push(to_display(sample_pixel(world, camera, settings, x, y, rng)));
        }
    }

    info!("Render finished in {:.2?}", start.elapsed());

    return Image { width: settings.width, height: settings.height, pixels };
}
