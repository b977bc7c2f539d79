use crate::{FrameUniforms, LightUniform};
use lumen_math::{Mat4, Vec3};
use lumen_scene::Material;
use std::collections::BTreeMap;

/// Texture unit the diffuse map binds to.
pub const DIFFUSE_TEXTURE_UNIT: i32 = 0;
/// Texture unit the specular map binds to.
pub const SPECULAR_TEXTURE_UNIT: i32 = 1;

/// Named uniform setter: the seam between the renderer and a linked shader
/// program.
pub trait UniformSink {
    fn set_bool(&mut self, name: &str, value: bool);
    fn set_int(&mut self, name: &str, value: i32);
    fn set_float(&mut self, name: &str, value: f32);
    fn set_vec3(&mut self, name: &str, value: Vec3);
    fn set_mat4(&mut self, name: &str, value: &Mat4);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    Vec3(Vec3),
    Mat4(Mat4),
}

/// In-memory sink; the last write to each name wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordedUniforms {
    values: BTreeMap<String, UniformValue>,
}

impl RecordedUniforms {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<UniformValue> {
        self.values.get(name).copied()
    }

    pub fn int(&self, name: &str) -> Option<i32> {
        match self.get(name)? {
            UniformValue::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn float(&self, name: &str) -> Option<f32> {
        match self.get(name)? {
            UniformValue::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn vec3(&self, name: &str) -> Option<Vec3> {
        match self.get(name)? {
            UniformValue::Vec3(v) => Some(v),
            _ => None,
        }
    }

    pub fn mat4(&self, name: &str) -> Option<Mat4> {
        match self.get(name)? {
            UniformValue::Mat4(v) => Some(v),
            _ => None,
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl UniformSink for RecordedUniforms {
    fn set_bool(&mut self, name: &str, value: bool) {
        self.values.insert(name.to_owned(), UniformValue::Bool(value));
    }

    fn set_int(&mut self, name: &str, value: i32) {
        self.values.insert(name.to_owned(), UniformValue::Int(value));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.values.insert(name.to_owned(), UniformValue::Float(value));
    }

    fn set_vec3(&mut self, name: &str, value: Vec3) {
        self.values.insert(name.to_owned(), UniformValue::Vec3(value));
    }

    fn set_mat4(&mut self, name: &str, value: &Mat4) {
        self.values.insert(name.to_owned(), UniformValue::Mat4(*value));
    }
}

/// Uploads `view`, `projection` and `viewPos`.
pub fn bind_frame(sink: &mut impl UniformSink, frame: &FrameUniforms) {
    sink.set_mat4("view", &frame.view);
    sink.set_mat4("projection", &frame.projection);
    sink.set_vec3("viewPos", frame.view_pos);
}

pub fn bind_model(sink: &mut impl UniformSink, model: &Mat4) {
    sink.set_mat4("model", model);
}

/// Uploads `material.*`. Texture samplers are only set when a map is present.
pub fn bind_material(sink: &mut impl UniformSink, material: &Material) {
    sink.set_vec3("material.ambient", material.ambient);
    sink.set_vec3("material.diffuse", material.diffuse);
    sink.set_vec3("material.specular", material.specular);
    sink.set_float("material.shininess", material.shininess());
    if material.diffuse_texture.is_some() {
        sink.set_int("material.diffuseTexture", DIFFUSE_TEXTURE_UNIT);
    }
    if material.specular_texture.is_some() {
        sink.set_int("material.specularTexture", SPECULAR_TEXTURE_UNIT);
    }
}

/// Uploads one `lights[index].*` entry.
pub fn bind_light(sink: &mut impl UniformSink, index: usize, light: &LightUniform) {
    let prefix = format!("lights[{index}].");
    let name = |field: &str| format!("{prefix}{field}");
    sink.set_int(&name("type"), light.kind);
    sink.set_vec3(&name("position"), light.position);
    sink.set_vec3(&name("direction"), light.direction);
    sink.set_vec3(&name("color"), light.color);
    sink.set_float(&name("intensity"), light.intensity);
    sink.set_float(&name("range"), light.range);
    sink.set_float(&name("innerAngle"), light.inner_cos);
    sink.set_float(&name("outerAngle"), light.outer_cos);
    sink.set_bool(&name("enabled"), light.enabled != 0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_assets::TextureHandle;
    use lumen_scene::{Light, LightKind};

    #[test]
    fn material_binding_names() {
        let mut sink = RecordedUniforms::new();
        bind_material(&mut sink, &Material::default());
        assert_eq!(sink.vec3("material.ambient"), Some(Vec3::splat(0.1)));
        assert_eq!(sink.vec3("material.diffuse"), Some(Vec3::splat(0.8)));
        assert_eq!(sink.vec3("material.specular"), Some(Vec3::ONE));
        assert_eq!(sink.float("material.shininess"), Some(32.0));
        assert_eq!(sink.get("material.diffuseTexture"), None);
        assert_eq!(sink.len(), 4);
    }

    #[test]
    fn material_textures_bind_fixed_units() {
        let mut material = Material::default().with_diffuse_texture(TextureHandle(3));
        material.specular_texture = Some(TextureHandle(4));
        let mut sink = RecordedUniforms::new();
        bind_material(&mut sink, &material);
        assert_eq!(sink.int("material.diffuseTexture"), Some(0));
        assert_eq!(sink.int("material.specularTexture"), Some(1));
    }

    #[test]
    fn light_binding_uses_indexed_prefix() {
        let mut light = Light::new(LightKind::Spot);
        light.enabled = false;
        let block = LightUniform::new(&light, Vec3::new(1.0, 2.0, 3.0), Vec3::Z);

        let mut sink = RecordedUniforms::new();
        bind_light(&mut sink, 2, &block);
        assert_eq!(sink.int("lights[2].type"), Some(2));
        assert_eq!(sink.vec3("lights[2].position"), Some(Vec3::new(1.0, 2.0, 3.0)));
        assert_eq!(sink.vec3("lights[2].direction"), Some(Vec3::Z));
        assert_eq!(sink.float("lights[2].innerAngle"), Some(block.inner_cos));
        assert_eq!(sink.get("lights[2].enabled"), Some(UniformValue::Bool(false)));
        assert!(sink.names().all(|n| n.starts_with("lights[2].")));
        assert_eq!(sink.len(), 9);
    }

    #[test]
    fn frame_and_model_binding() {
        let frame = FrameUniforms::new(
            Mat4::from_translation(Vec3::X),
            Mat4::IDENTITY,
            Vec3::new(0.0, 0.0, 5.0),
        );
        let mut sink = RecordedUniforms::new();
        bind_frame(&mut sink, &frame);
        bind_model(&mut sink, &Mat4::from_scale(Vec3::splat(2.0)));
        assert_eq!(sink.mat4("view"), Some(frame.view));
        assert_eq!(sink.mat4("projection"), Some(Mat4::IDENTITY));
        assert_eq!(sink.vec3("viewPos"), Some(Vec3::new(0.0, 0.0, 5.0)));
        assert_eq!(sink.mat4("model"), Some(Mat4::from_scale(Vec3::splat(2.0))));
        // typed getters reject mismatched kinds
        assert_eq!(sink.float("view"), None);
    }
}
