use crate::ray::Ray;
use crate::scatter::Scatter;
use crate::surface::SurfaceIntersection;
use crate::util::reflect;
use glam::Vec3;
use rand::Rng;

/// Perfect mirror tinted by `albedo`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetalMaterial {
    pub albedo: Vec3,
}

impl MetalMaterial {
    pub fn new(albedo: Vec3) -> MetalMaterial {
        MetalMaterial { albedo }
    }
}

impl Scatter for MetalMaterial {
    fn scatter<R: Rng + ?Sized>(&self, r: &Ray, intersection: &SurfaceIntersection, _rng: &mut R) -> Option<(Vec3, Ray)> {
        let reflected_direction = reflect(r.direction.normalize(), intersection.normal);
        let scattered = Ray::new(intersection.p, reflected_direction);

        return if scattered.direction.dot(intersection.normal) > 0.0 { Some((self.albedo, scattered)) } else { None };
    }
}
