use crate::{DEFAULT_CLEAR_COLOR, Entity, Light, Material, Model, Scene, SceneError};
use lumen_assets::{MeshData, ResourceCache};
use lumen_camera::{Camera, CameraState};
use lumen_common::Transform;
use lumen_math::{Vec3, deg_to_rad};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Built-in mesh a model description can reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeshSource {
    #[default]
    Cube,
}

impl MeshSource {
    pub fn mesh_data(self) -> MeshData {
        match self {
            MeshSource::Cube => MeshData::cube(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraDescription {
    pub name: String,
    #[serde(default)]
    pub camera: CameraState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightDescription {
    pub name: String,
    #[serde(default)]
    pub transform: Transform,
    #[serde(default)]
    pub light: Light,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDescription {
    pub name: String,
    #[serde(default)]
    pub transform: Transform,
    #[serde(default)]
    pub mesh: MeshSource,
    #[serde(default)]
    pub material: Material,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diffuse_texture: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specular_texture: Option<PathBuf>,
}

/// On-disk scene layout (YAML). Every section is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    pub clear_color: Vec3,
    pub cameras: Vec<CameraDescription>,
    pub lights: Vec<LightDescription>,
    pub models: Vec<ModelDescription>,
}

impl Default for SceneDescription {
    fn default() -> Self {
        Self {
            clear_color: DEFAULT_CLEAR_COLOR,
            cameras: Vec::new(),
            lights: Vec::new(),
            models: Vec::new(),
        }
    }
}

/// Where the ten demo cubes sit.
const DEMO_CUBE_POSITIONS: [Vec3; 10] = [
    Vec3::new(0.0, 0.0, -3.0),
    Vec3::new(2.0, 5.0, -15.0),
    Vec3::new(-1.5, -2.2, -2.5),
    Vec3::new(-3.8, -2.0, -12.3),
    Vec3::new(2.4, -0.4, -3.5),
    Vec3::new(-1.7, 3.0, -7.5),
    Vec3::new(1.3, -2.0, -2.5),
    Vec3::new(1.5, 2.0, -2.5),
    Vec3::new(1.5, 0.2, -1.5),
    Vec3::new(-1.3, 1.0, -1.5),
];

impl SceneDescription {
    /// Ten rotated cubes, one point light and a camera five units back.
    pub fn demo() -> Self {
        let models = DEMO_CUBE_POSITIONS
            .iter()
            .enumerate()
            .map(|(i, &position)| {
                let angle = 20.0 * i as f32;
                ModelDescription {
                    name: format!("Cube {i}"),
                    transform: Transform {
                        position,
                        rotation: Vec3::new(
                            deg_to_rad(angle),
                            deg_to_rad(angle * 0.3),
                            deg_to_rad(angle * 0.5),
                        ),
                        scale: Vec3::ONE,
                    },
                    mesh: MeshSource::Cube,
                    material: Material::default(),
                    diffuse_texture: None,
                    specular_texture: None,
                }
            })
            .collect();

        Self {
            clear_color: DEFAULT_CLEAR_COLOR,
            cameras: vec![CameraDescription {
                name: "Main Camera".into(),
                camera: CameraState {
                    position: Vec3::new(0.0, 0.0, 5.0),
                    ..CameraState::default()
                },
            }],
            lights: vec![LightDescription {
                name: "Key Light".into(),
                transform: Transform::from_position(Vec3::new(1.2, 1.0, 2.0)),
                light: Light::default(),
            }],
            models,
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, SceneError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn to_yaml_string(&self) -> Result<String, SceneError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let desc = Self::from_yaml_str(&text)?;
        info!(
            path = %path.display(),
            cameras = desc.cameras.len(),
            lights = desc.lights.len(),
            models = desc.models.len(),
            "loaded scene description"
        );
        Ok(desc)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SceneError> {
        std::fs::write(path, self.to_yaml_string()?)?;
        Ok(())
    }

    /// Build a live scene, registering meshes and textures in `cache`.
    ///
    /// The first listed camera becomes active. A description without
    /// cameras gets the default "Main Camera".
    pub fn instantiate(&self, cache: &mut ResourceCache) -> Result<Scene, SceneError> {
        let mut scene = if self.cameras.is_empty() {
            Scene::new()
        } else {
            Scene::empty()
        };
        scene.set_clear_color(self.clear_color);

        for cam in &self.cameras {
            scene.spawn(Entity::camera(cam.name.clone(), Camera::from(cam.camera)));
        }
        for light in &self.lights {
            scene.spawn(Entity::light(
                light.name.clone(),
                light.transform,
                light.light.clone(),
            ));
        }
        for desc in &self.models {
            let mut model = Model::new(cache.add_mesh(desc.mesh.mesh_data())?);
            model.material = desc.material.clone();
            if let Some(path) = &desc.diffuse_texture {
                model.material.diffuse_texture = Some(cache.add_texture(path));
            }
            if let Some(path) = &desc.specular_texture {
                model.material.specular_texture = Some(cache.add_texture(path));
            }
            scene.spawn(Entity::model(desc.name.clone(), desc.transform, model));
        }
        Ok(scene)
    }
}
