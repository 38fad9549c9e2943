use glam::Vec3;
use rand::Rng;

use crate::ray::Ray;
use crate::scatter::Scatter;
use crate::surface::{Surface, SurfaceIntersection};
use crate::world::{PointLight, World};

pub const DEFAULT_MAX_DEPTH: u32 = 50;

const T_MIN: f32 = 0.001;

pub fn background(ray: &Ray) -> Vec3 {
    const COLOR_T: Vec3 = Vec3::new(0.5, 0.7, 1.0);
    const COLOR_B: Vec3 = Vec3::new(1.0, 1.0, 1.0);

    let t = 0.5 * (ray.direction.normalize().y + 1.0);

    return Vec3::lerp(COLOR_B, COLOR_T, t);
}

/// White light from the point source, not clamped: surfaces facing away from it get darker.
pub fn direct_light(light: &PointLight, intersection: &SurfaceIntersection) -> Vec3 {
    let to_light = (light.position - intersection.p).normalize();
    return Vec3::ONE * light.intensity * to_light.dot(intersection.normal.normalize());
}

/// Radiance along `ray`. Hits at `depth >= max_depth` contribute black.
pub fn ray_color<R: Rng + ?Sized>(world: &World, ray: &Ray, depth: u32, max_depth: u32, rng: &mut R) -> Vec3 {
    let Some(intersection) = world.raycast(ray, T_MIN, f32::MAX) else {
        return background(ray);
    };

    if depth >= max_depth {
        return Vec3::ZERO;
    }

    return match intersection.material.scatter(ray, &intersection, rng) {
        Some((attenuation, scattered)) => {
            attenuation * ray_color(world, &scattered, depth + 1, max_depth, rng)
                + direct_light(&world.light, &intersection)
        }
        None => Vec3::ZERO,
    };
}
