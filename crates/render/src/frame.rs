use crate::{FrameUniforms, LightUniform, ModelUniforms, UniformSink, bind_frame, bind_light};
use crate::{bind_material, bind_model};
use lumen_assets::MeshHandle;
use lumen_common::EntityId;
use lumen_math::Vec3;
use lumen_scene::{Material, Scene};
use serde::Serialize;
use tracing::trace;

pub const DEFAULT_ASPECT: f32 = 1920.0 / 1080.0;
pub const DEFAULT_NEAR: f32 = 0.1;
pub const DEFAULT_FAR: f32 = 100.0;

/// One model to draw with its model block and material.
#[derive(Debug, Clone, Serialize)]
pub struct DrawItem {
    pub entity: EntityId,
    pub name: String,
    pub mesh: MeshHandle,
    pub model: ModelUniforms,
    pub material: Material,
}

impl DrawItem {
    /// Uploads `model` and `material.*`.
    pub fn bind(&self, sink: &mut impl UniformSink) {
        bind_model(sink, &self.model.model);
        bind_material(sink, &self.material);
    }
}

/// Everything a backend needs to draw one frame.
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub number: u64,
    pub camera: EntityId,
    pub clear_color: Vec3,
    pub uniforms: FrameUniforms,
    pub lights: Vec<LightUniform>,
    pub draws: Vec<DrawItem>,
}

impl Frame {
    /// Uploads the frame block and every `lights[i]` entry.
    pub fn bind_globals(&self, sink: &mut impl UniformSink) {
        bind_frame(sink, &self.uniforms);
        for (i, light) in self.lights.iter().enumerate() {
            bind_light(sink, i, light);
        }
    }
}

/// Projection settings plus the scene walk that produces a [`Frame`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameBuilder {
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for FrameBuilder {
    fn default() -> Self {
        Self {
            aspect: DEFAULT_ASPECT,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }
}

impl FrameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aspect from a viewport size; a zero height keeps the current aspect.
    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
        self
    }

    /// Builds the frame seen by the scene's active camera, or `None` when
    /// the scene has no camera. Hidden models are skipped.
    pub fn build(&self, scene: &Scene, number: u64) -> Option<Frame> {
        let camera_entity = scene.active_camera_entity()?;
        let camera = camera_entity.as_camera()?;
        let uniforms = FrameUniforms::new(
            camera.view_matrix(),
            camera.projection_matrix(self.aspect, self.near, self.far),
            camera.position,
        );

        let lights = scene
            .lights()
            .filter_map(LightUniform::from_entity)
            .collect();

        let draws: Vec<DrawItem> = scene
            .models()
            .filter_map(|entity| {
                let model = entity.as_model().filter(|m| m.visible)?;
                Some(DrawItem {
                    entity: entity.id(),
                    name: entity.name.clone(),
                    mesh: model.mesh,
                    model: ModelUniforms {
                        model: entity.model_matrix(),
                    },
                    material: model.material.clone(),
                })
            })
            .collect();

        trace!(
            frame = number,
            camera = %camera_entity.id(),
            draws = draws.len(),
            zoom = camera.zoom(),
            "built frame"
        );

        Some(Frame {
            number,
            camera: camera_entity.id(),
            clear_color: scene.clear_color(),
            uniforms,
            lights,
            draws,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_assets::ResourceCache;
    use lumen_common::Transform;
    use lumen_math::{Mat4, deg_to_rad};
    use lumen_scene::{Entity, Light, SceneDescription};

    fn demo_scene() -> Scene {
        SceneDescription::demo()
            .instantiate(&mut ResourceCache::new())
            .unwrap()
    }

    #[test]
    fn builds_demo_frame() {
        let scene = demo_scene();
        let frame = FrameBuilder::new().build(&scene, 7).unwrap();
        assert_eq!(frame.number, 7);
        assert_eq!(frame.draws.len(), 10);
        assert_eq!(frame.lights.len(), 1);
        assert_eq!(frame.uniforms.view_pos, Vec3::new(0.0, 0.0, 5.0));

        let cam = scene.active_camera().unwrap();
        assert_eq!(frame.uniforms.view, cam.view_matrix());
        assert_eq!(
            frame.uniforms.projection,
            Mat4::perspective(deg_to_rad(45.0), DEFAULT_ASPECT, 0.1, 100.0)
        );
    }

    #[test]
    fn first_cube_is_translated_only() {
        let frame = FrameBuilder::new().build(&demo_scene(), 0).unwrap();
        let first = &frame.draws[0];
        assert_eq!(first.name, "Cube 0");
        assert_eq!(
            first.model.model,
            Mat4::from_translation(Vec3::new(0.0, 0.0, -3.0))
        );
    }

    #[test]
    fn hidden_models_are_skipped() {
        let mut scene = demo_scene();
        let id = scene.find_by_name("Cube 3").unwrap().id();
        scene.get_mut(id).unwrap().as_model_mut().unwrap().visible = false;
        let frame = FrameBuilder::new().build(&scene, 0).unwrap();
        assert_eq!(frame.draws.len(), 9);
        assert!(frame.draws.iter().all(|d| d.entity != id));
    }

    #[test]
    fn no_camera_no_frame() {
        let mut scene = Scene::empty();
        scene.spawn(Entity::light("lamp", Transform::default(), Light::default()));
        assert!(FrameBuilder::new().build(&scene, 0).is_none());
    }

    #[test]
    fn viewport_sets_aspect() {
        let b = FrameBuilder::new().with_viewport(800, 600);
        assert!((b.aspect - 4.0 / 3.0).abs() < 1e-6);
        let b = b.with_viewport(800, 0);
        assert!((b.aspect - 4.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn frame_serializes_to_json() {
        let frame = FrameBuilder::new().build(&demo_scene(), 1).unwrap();
        let json = serde_json::to_value(&frame).unwrap();
        assert_eq!(json["number"], 1);
        assert_eq!(json["draws"].as_array().unwrap().len(), 10);
        assert!(json["uniforms"]["view_pos"]["z"].is_number());
    }
}
