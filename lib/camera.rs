use glam::Vec3;

use crate::ray::Ray;

/// Pinhole camera; image plane sits one unit in front of `origin`.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub origin: Vec3,
    llc: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
}

impl Camera {
    pub fn new(origin: Vec3, target: Vec3, up: Vec3, vertical_fov: f32, aspect_ratio: f32) -> Camera {
        let theta = vertical_fov.to_radians();

        let half_h = (theta * 0.5).tan();
        let half_w = half_h * aspect_ratio;

        let cw = (origin - target).normalize();
        let cu = up.cross(cw).normalize();
        let cv = cw.cross(cu);

        let llc = origin - half_w * cu - half_h * cv - cw;

        return Camera { origin, llc, horizontal: 2.0 * half_w * cu, vertical: 2.0 * half_h * cv };
    }

    /// `s` and `t` are fractions of the image plane measured from the bottom-left corner.
    pub fn create_ray(&self, s: f32, t: f32) -> Ray {
        return Ray::new(self.origin, self.llc + s * self.horizontal + t * self.vertical - self.origin);
    }
}
