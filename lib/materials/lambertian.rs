use crate::ray::Ray;
use crate::scatter::Scatter;
use crate::surface::SurfaceIntersection;
use crate::util::rand_in_unit_sphere;
use glam::Vec3;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LambertianMaterial {
    pub albedo: Vec3,
}

impl LambertianMaterial {
    pub fn new(albedo: Vec3) -> LambertianMaterial {
        LambertianMaterial { albedo }
    }
}

impl Scatter for LambertianMaterial {
    fn scatter<R: Rng + ?Sized>(&self, _r: &Ray, intersection: &SurfaceIntersection, rng: &mut R) -> Option<(Vec3, Ray)> {
        let target = intersection.p + intersection.normal + rand_in_unit_sphere(rng);
        let scattered = Ray::new(intersection.p, target - intersection.p);

        return Some((self.albedo, scattered));
    }
}
