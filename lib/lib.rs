pub mod camera;
pub mod config;
pub mod error;
pub mod integrator;
pub mod materials;
pub mod ppm;
pub mod ray;
pub mod render;
pub mod scatter;
pub mod sphere;
pub mod surface;
pub mod util;
pub mod world;
