use thiserror::Error;

/// Errors that can occur while loading or validating a scene description.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Image must be at least 1x1, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("Samples per pixel must be positive")]
    NoSamples,

    #[error("Camera position, target and up vector do not span a view")]
    DegenerateCamera,

    #[error("Vertical field of view must be between 0 and 180 degrees, got {vertical_fov}")]
    InvalidFieldOfView { vertical_fov: f32 },

    #[error("Sphere {index} has invalid radius {radius}")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("Sphere {index} references unknown material '{name}'")]
    UnknownMaterial { index: usize, name: String },

    #[error("Material '{name}' has invalid refractive index {refractive_index}")]
    InvalidRefractiveIndex { name: String, refractive_index: f32 },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
