//! JSON scene descriptions.
//!
//! A description names its materials once and lets any number of spheres refer to
//! them, so glass or metal shared between spheres is a single `Arc<Material>` at
//! render time. Everything except `materials` and `spheres` falls back to the
//! reference render settings when omitted.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use glam::Vec3;
use log::info;
use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::error::{ConfigError, ConfigResult};
use crate::materials::Material;
use crate::render::RenderSettings;
use crate::sphere::Sphere;
use crate::world::{PointLight, World};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub width: u32,
    pub height: u32,
    pub samples_per_pixel: u32,
    pub max_depth: u32,
    pub seed: u64,
}

impl Default for ImageConfig {
    fn default() -> Self {
        let settings = RenderSettings::default();
        ImageConfig {
            width: settings.width,
            height: settings.height,
            samples_per_pixel: settings.samples_per_pixel,
            max_depth: settings.max_depth,
            seed: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub look_from: Vec3,
    pub look_at: Vec3,
    pub up: Vec3,
    /// Degrees.
    pub vertical_fov: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        CameraConfig { look_from: Vec3::splat(5.0), look_at: Vec3::ONE, up: Vec3::Y, vertical_fov: 15.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    pub position: Vec3,
    pub intensity: f32,
}

impl Default for LightConfig {
    fn default() -> Self {
        LightConfig { position: Vec3::new(0.0, 5.0, 0.0), intensity: PointLight::DEFAULT_INTENSITY }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MaterialConfig {
    Diffuse { albedo: Vec3 },
    Metal { albedo: Vec3 },
    Dielectric { refractive_index: f32 },
}

impl From<MaterialConfig> for Material {
    fn from(config: MaterialConfig) -> Material {
        match config {
            MaterialConfig::Diffuse { albedo } => Material::diffuse(albedo),
            MaterialConfig::Metal { albedo } => Material::metal(albedo),
            MaterialConfig::Dielectric { refractive_index } => Material::dielectric(refractive_index),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphereConfig {
    pub center: Vec3,
    pub radius: f32,
    pub material: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(default)]
    pub image: ImageConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub light: LightConfig,
    pub materials: BTreeMap<String, MaterialConfig>,
    pub spheres: Vec<SphereConfig>,
}

/// Everything needed to render: the built world, the camera and the sampling settings.
pub struct Scene {
    pub world: World,
    pub camera: Camera,
    pub settings: RenderSettings,
    pub seed: u64,
}

impl SceneConfig {
    pub fn from_json(json: &str) -> ConfigResult<SceneConfig> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<SceneConfig> {
        let path = path.as_ref();
        info!("Loading scene from {}", path.display());
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let ImageConfig { width, height, samples_per_pixel, .. } = self.image;
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyImage { width, height });
        }
        if samples_per_pixel == 0 {
            return Err(ConfigError::NoSamples);
        }

        let view = self.camera.look_from - self.camera.look_at;
        if view.length_squared() == 0.0 || self.camera.up.cross(view).length_squared() == 0.0 {
            return Err(ConfigError::DegenerateCamera);
        }
        let vertical_fov = self.camera.vertical_fov;
        if !(vertical_fov > 0.0 && vertical_fov < 180.0) {
            return Err(ConfigError::InvalidFieldOfView { vertical_fov });
        }

        for (name, material) in &self.materials {
            if let MaterialConfig::Dielectric { refractive_index } = *material {
                if !(refractive_index > 0.0 && refractive_index.is_finite()) {
                    return Err(ConfigError::InvalidRefractiveIndex { name: name.clone(), refractive_index });
                }
            }
        }

        for (index, sphere) in self.spheres.iter().enumerate() {
            if !(sphere.radius > 0.0 && sphere.radius.is_finite()) {
                return Err(ConfigError::InvalidRadius { index, radius: sphere.radius });
            }
            if !self.materials.contains_key(&sphere.material) {
                return Err(ConfigError::UnknownMaterial { index, name: sphere.material.clone() });
            }
        }

        Ok(())
    }

    pub fn build(&self) -> ConfigResult<Scene> {
        self.validate()?;

        let materials: HashMap<&str, Arc<Material>> =
            self.materials.iter().map(|(name, m)| (name.as_str(), Arc::new(Material::from(*m)))).collect();

        let mut world = World::new(PointLight { position: self.light.position, intensity: self.light.intensity });
        for (index, sphere) in self.spheres.iter().enumerate() {
            let material = materials
                .get(sphere.material.as_str())
                .ok_or_else(|| ConfigError::UnknownMaterial { index, name: sphere.material.clone() })?;
            world.push(Sphere::new(sphere.center, sphere.radius, material.clone()));
        }

        let settings = RenderSettings {
            width: self.image.width,
            height: self.image.height,
            samples_per_pixel: self.image.samples_per_pixel,
            max_depth: self.image.max_depth,
        };

        let camera = Camera::new(
            self.camera.look_from,
            self.camera.look_at,
            self.camera.up,
            self.camera.vertical_fov,
            settings.aspect_ratio(),
        );

        Ok(Scene { world, camera, settings, seed: self.image.seed })
    }
}

impl Default for SceneConfig {
    /// Blue ground, a glass and a red ball, a mirror, three small spheres and a large pink one.
    fn default() -> Self {
        let materials = BTreeMap::from([
            ("ground".to_string(), MaterialConfig::Diffuse { albedo: Vec3::new(0.2, 0.2, 0.8) }),
            ("glass".to_string(), MaterialConfig::Dielectric { refractive_index: 1.5 }),
            ("red".to_string(), MaterialConfig::Diffuse { albedo: Vec3::new(1.0, 0.0, 0.0) }),
            ("steel".to_string(), MaterialConfig::Metal { albedo: Vec3::splat(0.5) }),
            ("magenta".to_string(), MaterialConfig::Diffuse { albedo: Vec3::new(1.0, 0.0, 0.8) }),
            ("pink".to_string(), MaterialConfig::Diffuse { albedo: Vec3::new(1.0, 0.4, 0.8) }),
        ]);

        let sphere = |center: Vec3, radius: f32, material: &str| SphereConfig {
            center,
            radius,
            material: material.to_string(),
        };

        let spheres = vec![
            sphere(Vec3::new(0.0, -1000.0, -1.0), 1000.0, "ground"),
            sphere(Vec3::new(2.0, 1.0, 0.0), 1.0, "glass"),
            sphere(Vec3::new(0.0, 1.0, -1.5), 1.0, "red"),
            sphere(Vec3::new(0.0, 1.0, 1.5), 1.0, "steel"),
            sphere(Vec3::new(4.0, 0.25, 2.0), 0.25, "glass"),
            sphere(Vec3::new(4.0, 0.25, 0.0), 0.25, "steel"),
            sphere(Vec3::new(4.0, 0.25, 1.0), 0.25, "magenta"),
            sphere(Vec3::new(-3.0, 1.0, 0.0), 2.0, "pink"),
        ];

        SceneConfig {
            image: ImageConfig::default(),
            camera: CameraConfig::default(),
            light: LightConfig::default(),
            materials,
            spheres,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "materials": { "chrome": { "type": "metal", "albedo": [0.9, 0.9, 0.9] } },
        "spheres": [
            { "center": [0, 0, -1], "radius": 0.5, "material": "chrome" },
            { "center": [1, 0, -1], "radius": 0.5, "material": "chrome" }
        ]
    }"#;

    #[test]
    fn omitted_sections_use_reference_settings() {
        let config = SceneConfig::from_json(MINIMAL).unwrap();

        assert_eq!(config.image, ImageConfig::default());
        assert_eq!(config.camera, CameraConfig::default());
        assert_eq!(config.light.intensity, 0.25);
        assert_eq!(config.materials["chrome"], MaterialConfig::Metal { albedo: Vec3::splat(0.9) });
    }

    #[test]
    fn spheres_share_named_materials() {
        let scene = SceneConfig::from_json(MINIMAL).unwrap().build().unwrap();

        assert_eq!(scene.world.surfaces.len(), 2);
        assert!(Arc::ptr_eq(&scene.world.surfaces[0].material, &scene.world.surfaces[1].material));
    }

    #[test]
    fn partial_image_section_keeps_other_defaults() {
        let json = r#"{
            "image": { "width": 64, "height": 32, "seed": 9 },
            "materials": { "glass": { "type": "dielectric", "refractive_index": 1.33 } },
            "spheres": []
        }"#;
        let scene = SceneConfig::from_json(json).unwrap().build().unwrap();

        assert_eq!(scene.settings.width, 64);
        assert_eq!(scene.settings.height, 32);
        assert_eq!(scene.settings.samples_per_pixel, 50);
        assert_eq!(scene.seed, 9);
    }

    #[test]
    fn rejects_invalid_descriptions() {
        let mut config = SceneConfig::default();
        config.spheres[3].radius = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRadius { index: 3, .. })));

        let mut config = SceneConfig::default();
        config.spheres[0].material = "mud".to_string();
        assert!(matches!(config.build(), Err(ConfigError::UnknownMaterial { index: 0, .. })));

        let mut config = SceneConfig::default();
        config.image.height = 0;
        assert!(matches!(config.validate(), Err(ConfigError::EmptyImage { width: 1200, height: 0 })));

        let mut config = SceneConfig::default();
        config.image.samples_per_pixel = 0;
        assert!(matches!(config.validate(), Err(ConfigError::NoSamples)));

        let mut config = SceneConfig::default();
        config.camera.look_at = config.camera.look_from;
        assert!(matches!(config.validate(), Err(ConfigError::DegenerateCamera)));

        for vertical_fov in [0.0, -15.0, 180.0, 270.0, f32::NAN] {
            let mut config = SceneConfig::default();
            config.camera.vertical_fov = vertical_fov;
            assert!(matches!(config.validate(), Err(ConfigError::InvalidFieldOfView { .. })), "{vertical_fov}");
        }

        let mut config = SceneConfig::default();
        config.materials.insert("odd".to_string(), MaterialConfig::Dielectric { refractive_index: -1.0 });
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRefractiveIndex { .. })));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(SceneConfig::from_json("{ \"spheres\": 3 }"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn default_scene_round_trips_through_json() {
        let config = SceneConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        assert_eq!(SceneConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn default_scene_builds() {
        let scene = SceneConfig::default().build().unwrap();
        assert_eq!(scene.world.surfaces.len(), 8);
        assert_eq!(scene.world.light.position, Vec3::new(0.0, 5.0, 0.0));
        assert_eq!(scene.settings, RenderSettings::default());
    }
}
