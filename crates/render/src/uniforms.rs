use bytemuck::{Pod, Zeroable};
use lumen_math::{Mat4, Vec3, deg_to_rad};
use lumen_scene::{Entity, Light};
use serde::Serialize;

/// Per-frame camera block: 144 bytes, no implicit padding.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Pod, Zeroable)]
pub struct FrameUniforms {
    pub view: Mat4,
    pub projection: Mat4,
    pub view_pos: Vec3,
    #[serde(skip)]
    _pad: f32,
}

impl FrameUniforms {
    pub fn new(view: Mat4, projection: Mat4, view_pos: Vec3) -> Self {
        Self {
            view,
            projection,
            view_pos,
            _pad: 0.0,
        }
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }
}

/// Per-draw block.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Pod, Zeroable)]
pub struct ModelUniforms {
    pub model: Mat4,
}

/// One entry of the `lights[]` array: 64 bytes.
///
/// Cone angles are stored as cosines so the shader compares against
/// `dot(light_dir, frag_dir)` directly.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Pod, Zeroable)]
pub struct LightUniform {
    pub position: Vec3,
    pub kind: i32,
    pub direction: Vec3,
    pub intensity: f32,
    pub color: Vec3,
    pub range: f32,
    pub inner_cos: f32,
    pub outer_cos: f32,
    pub enabled: u32,
    #[serde(skip)]
    _pad: f32,
}

impl LightUniform {
    pub fn new(light: &Light, position: Vec3, direction: Vec3) -> Self {
        Self {
            position,
            kind: light.kind.shader_index(),
            direction,
            intensity: light.intensity,
            color: light.color,
            range: light.range,
            inner_cos: deg_to_rad(light.inner_angle()).cos(),
            outer_cos: deg_to_rad(light.outer_angle()).cos(),
            enabled: u32::from(light.enabled),
            _pad: 0.0,
        }
    }

    /// Built from a light entity's position and rotation; `None` for other kinds.
    pub fn from_entity(entity: &Entity) -> Option<Self> {
        entity
            .as_light()
            .map(|light| Self::new(light, entity.transform().position, entity.forward()))
    }
}
