use crate::ray::Ray;
use crate::scatter::Scatter;
use crate::surface::SurfaceIntersection;
use crate::util::{reflect, refract};
use glam::Vec3;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DielectricMaterial {
    pub index_of_refraction: f32,
}

impl DielectricMaterial {
    pub fn new(index_of_refraction: f32) -> DielectricMaterial {
        DielectricMaterial { index_of_refraction }
    }

    /// Probability of taking the reflected branch for this incidence.
    pub fn reflect_probability(&self, r: &Ray, normal: Vec3) -> (f32, Option<Vec3>) {
        let ior = self.index_of_refraction;
        let incidence = r.direction.dot(normal);

        let (facing_normal, refraction_ratio, cosine) = if incidence > 0.0 {
            // exiting the medium
            let cosine = ior * incidence / r.direction.length();
            (-normal, ior, (1.0 - ior * ior * (1.0 - cosine * cosine)).sqrt())
        } else {
            (normal, 1.0 / ior, -incidence / r.direction.length())
        };

        match refract(r.direction, facing_normal, refraction_ratio) {
            Some(refracted) => (reflectance(cosine, ior), Some(refracted)),
            None => (1.0, None),
        }
    }
}

impl Scatter for DielectricMaterial {
    fn scatter<R: Rng + ?Sized>(&self, r: &Ray, intersection: &SurfaceIntersection, rng: &mut R) -> Option<(Vec3, Ray)> {
        let reflected = reflect(r.direction, intersection.normal);
        let (reflect_probability, refracted) = self.reflect_probability(r, intersection.normal);

        // NaN probabilities compare false and take the refracted branch
        let scattered_direction = match refracted {
            Some(refracted) if !(rng.gen::<f32>() < reflect_probability) => refracted,
            _ => reflected,
        };

        let scattered = Ray::new(intersection.p, scattered_direction);

        Some((Vec3::ONE, scattered))
    }
}

fn reflectance(cosine: f32, index_of_refraction: f32) -> f32 {
    let r = ((1.0 - index_of_refraction) / (1.0 + index_of_refraction)).powi(2);
    return r + (1.0 - r) * (1.0 - cosine).powi(5);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schlick_endpoints() {
        assert!((reflectance(1.0, 1.5) - 0.04).abs() < 1e-6);
        assert!((reflectance(0.0, 1.5) - 1.0).abs() < 1e-6);
        assert_eq!(reflectance(1.0, 1.0), 0.0);
    }

    #[test]
    fn head_on_entry_mostly_refracts() {
        let glass = DielectricMaterial::new(1.5);
        let r = Ray::new(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let (p, refracted) = glass.reflect_probability(&r, Vec3::Y);
        assert!((p - 0.04).abs() < 1e-5);
        assert!(refracted.unwrap().abs_diff_eq(Vec3::new(0.0, -1.0, 0.0), 1e-5));
    }

    #[test]
    fn shallow_exit_always_reflects() {
        let glass = DielectricMaterial::new(1.5);
        // inside the sphere, travelling almost tangentially outwards
        let r = Ray::new(Vec3::ZERO, Vec3::new(1.0, 0.2, 0.0));
        let (p, refracted) = glass.reflect_probability(&r, Vec3::Y);
        assert_eq!(p, 1.0);
        assert!(refracted.is_none());
    }

    #[test]
    fn steep_exit_refracts_with_adjusted_cosine() {
        let glass = DielectricMaterial::new(1.5);
        // leaving the sphere close to the normal, so refraction is possible
        let r = Ray::new(Vec3::ZERO, Vec3::new(0.3, 1.0, 0.0));
        let (p, refracted) = glass.reflect_probability(&r, Vec3::Y);

        // the exit cosine overshoots 1 and drives Schlick negative
        assert!((p + 0.367).abs() < 1e-3, "{p}");
        assert!(refracted.unwrap().abs_diff_eq(Vec3::new(0.431, 0.902, 0.0), 1e-3), "{refracted:?}");
    }

    #[test]
    fn steep_exit_never_takes_the_reflected_branch() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;
        use std::sync::Arc;

        let glass = DielectricMaterial::new(1.5);
        let hit = SurfaceIntersection {
            p: Vec3::ZERO,
            normal: Vec3::Y,
            material: Arc::new(crate::materials::Material::Dielectric(glass)),
            t: 1.0,
        };
        let r = Ray::new(Vec3::new(0.0, -1.0, 0.0), Vec3::new(0.3, 1.0, 0.0));
        let (_, expected) = glass.reflect_probability(&r, hit.normal);
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..200 {
            let (attenuation, scattered) = glass.scatter(&r, &hit, &mut rng).unwrap();
            assert_eq!(attenuation, Vec3::ONE);
            assert_eq!(Some(scattered.direction), expected);
        }
    }
}
