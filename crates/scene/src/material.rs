use lumen_assets::TextureHandle;
use lumen_math::Vec3;
use serde::{Deserialize, Serialize};

pub const MIN_SHININESS: f32 = 1.0;
pub const MAX_SHININESS: f32 = 256.0;

/// Phong surface parameters with optional diffuse/specular maps.
///
/// Texture units are fixed: diffuse binds to unit 0, specular to unit 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "MaterialParams")]
pub struct Material {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    shininess: f32,
    pub diffuse_texture: Option<TextureHandle>,
    pub specular_texture: Option<TextureHandle>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Vec3::splat(0.1),
            diffuse: Vec3::splat(0.8),
            specular: Vec3::ONE,
            shininess: 32.0,
            diffuse_texture: None,
            specular_texture: None,
        }
    }
}

impl Material {
    pub fn new(ambient: Vec3, diffuse: Vec3, specular: Vec3, shininess: f32) -> Self {
        let mut material = Self {
            ambient,
            diffuse,
            specular,
            ..Self::default()
        };
        material.set_shininess(shininess);
        material
    }

    pub fn with_diffuse_texture(mut self, texture: TextureHandle) -> Self {
        self.diffuse_texture = Some(texture);
        self
    }

    pub fn shininess(&self) -> f32 {
        self.shininess
    }

    /// Clamped to `[MIN_SHININESS, MAX_SHININESS]`.
    pub fn set_shininess(&mut self, shininess: f32) {
        self.shininess = shininess.clamp(MIN_SHININESS, MAX_SHININESS);
    }
}

#[derive(Deserialize)]
#[serde(default)]
struct MaterialParams {
    ambient: Vec3,
    diffuse: Vec3,
    specular: Vec3,
    shininess: f32,
    diffuse_texture: Option<TextureHandle>,
    specular_texture: Option<TextureHandle>,
}

impl Default for MaterialParams {
    fn default() -> Self {
        let m = Material::default();
        Self {
            ambient: m.ambient,
            diffuse: m.diffuse,
            specular: m.specular,
            shininess: m.shininess,
            diffuse_texture: None,
            specular_texture: None,
        }
    }
}

impl From<MaterialParams> for Material {
    fn from(p: MaterialParams) -> Self {
        let mut material = Material::new(p.ambient, p.diffuse, p.specular, p.shininess);
        material.diffuse_texture = p.diffuse_texture;
        material.specular_texture = p.specular_texture;
        material
    }
}
