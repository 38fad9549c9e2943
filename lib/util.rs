use glam::Vec3;
use rand::Rng;
use rand_distr::*;

/// Uniform point strictly inside the unit ball, drawn by rejection from the `[-1, 1]^3` cube.
pub fn rand_in_unit_sphere<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    return Vec3::from(UnitBall.sample(rng));
}

pub fn reflect(v: Vec3, normal: Vec3) -> Vec3 {
    return v - (2.0 * v.dot(normal) * normal);
}

/// Snell's law in vector form. `normal` must face the incoming side; `None` on total internal reflection.
pub fn refract(v: Vec3, normal: Vec3, ratio: f32) -> Option<Vec3> {
    let uv = v.normalize();
    let dt = uv.dot(normal);
    let discriminant = 1.0 - ratio * ratio * (1.0 - dt * dt);

    if discriminant > 0.0 {
        Some(ratio * (uv - normal * dt) - normal * discriminant.sqrt())
    } else {
        None
    }
}
