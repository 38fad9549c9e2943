use crate::ray::Ray;
use crate::surface::SurfaceIntersection;
use glam::Vec3;
use rand::Rng;

pub trait Scatter {
    /// Returns the attenuation and the continuing ray, or `None` if the ray is absorbed.
    fn scatter<R: Rng + ?Sized>(&self, r: &Ray, intersection: &SurfaceIntersection, rng: &mut R) -> Option<(Vec3, Ray)>;
}
