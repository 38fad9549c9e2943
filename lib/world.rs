use glam::Vec3;

use crate::ray::Ray;
use crate::sphere::Sphere;
use crate::surface::{Surface, SurfaceIntersection};

/// A single point light. `intensity` scales the white direct-lighting term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub intensity: f32,
}

impl PointLight {
    pub const DEFAULT_INTENSITY: f32 = 0.25;

    pub fn new(position: Vec3) -> PointLight {
        PointLight { position, intensity: Self::DEFAULT_INTENSITY }
    }
}

pub struct World {
    pub surfaces: Vec<Sphere>,
    pub light: PointLight,
}

impl World {
    pub fn new(light: PointLight) -> World {
        World { surfaces: Vec::new(), light }
    }

    pub fn push(&mut self, sphere: Sphere) {
        self.surfaces.push(sphere);
    }
}

impl Surface for World {
    fn raycast(&self, r: &Ray, t_min: f32, t_max: f32) -> Option<SurfaceIntersection> {
        let mut result = None;
        let mut t_nearest = t_max;

        for obj in &self.surfaces {
            if let Some(intersection) = obj.raycast(r, t_min, t_nearest) {
                t_nearest = intersection.t;
                result = Some(intersection);
            }
        }

        return result;
    }
}
