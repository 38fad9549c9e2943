use std::sync::Arc;

use crate::materials::Material;
use crate::ray::Ray;
use glam::Vec3;

pub trait Surface {
    /// Nearest intersection with a ray parameter strictly inside `(t_min, t_max)`.
    fn raycast(&self, r: &Ray, t_min: f32, t_max: f32) -> Option<SurfaceIntersection>;
}

#[derive(Debug, Clone)]
pub struct SurfaceIntersection {
    pub p: Vec3,
    /// Unit length, pointing away from the sphere center regardless of which side was hit.
    pub normal: Vec3,
    pub material: Arc<Material>,
    pub t: f32,
}
