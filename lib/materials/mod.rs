mod dielectric;
mod lambertian;
mod metal;

pub use dielectric::DielectricMaterial;
pub use lambertian::LambertianMaterial;
pub use metal::MetalMaterial;

use crate::ray::Ray;
use crate::scatter::Scatter;
use crate::surface::SurfaceIntersection;
use glam::Vec3;
use rand::Rng;

/// The closed set of surface materials. Shared between spheres behind an `Arc`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    Diffuse(LambertianMaterial),
    Metal(MetalMaterial),
    Dielectric(DielectricMaterial),
}

impl Material {
    pub fn diffuse(albedo: Vec3) -> Material {
        Material::Diffuse(LambertianMaterial::new(albedo))
    }

    pub fn metal(albedo: Vec3) -> Material {
        Material::Metal(MetalMaterial::new(albedo))
    }

    pub fn dielectric(index_of_refraction: f32) -> Material {
        Material::Dielectric(DielectricMaterial::new(index_of_refraction))
    }
}

impl Scatter for Material {
    fn scatter<R: Rng + ?Sized>(&self, r: &Ray, intersection: &SurfaceIntersection, rng: &mut R) -> Option<(Vec3, Ray)> {
        match self {
            Material::Diffuse(m) => m.scatter(r, intersection, rng),
            Material::Metal(m) => m.scatter(r, intersection, rng),
            Material::Dielectric(m) => m.scatter(r, intersection, rng),
        }
    }
}
