use lumen_camera::MAX_PITCH;
use lumen_common::{EntityId, Transform};
use lumen_math::Vec3;
use lumen_scene::{EntityKind, Material, Scene, SceneError};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Errors from inspector edits.
#[derive(Debug, thiserror::Error)]
pub enum EditError {
    #[error("entity not found: {0}")]
    EntityNotFound(EntityId),
    #[error("entity {id} is not a {expected}")]
    WrongKind { id: EntityId, expected: &'static str },
}

/// Scene inspector for developer tooling.
pub struct SceneInspector;

impl SceneInspector {
    pub fn summary(scene: &Scene) -> SceneSummary {
        SceneSummary {
            entity_count: scene.len(),
            cameras: scene.cameras().count(),
            lights: scene.lights().count(),
            models: scene.models().count(),
            active_camera: scene.active_camera_entity().map(|e| e.name.clone()),
        }
    }

    /// Entity ids in scene order.
    pub fn list_entities(scene: &Scene) -> Vec<EntityId> {
        scene.entities().map(|e| e.id()).collect()
    }

    pub fn inspect_entity(scene: &Scene, id: EntityId) -> Option<EntityInfo> {
        let entity = scene.get(id)?;
        let detail = match entity.kind() {
            EntityKind::Camera(c) => EntityDetail::Camera {
                yaw: c.yaw(),
                pitch: c.pitch(),
                zoom: c.zoom(),
                active: scene.active_camera_id() == Some(id),
            },
            EntityKind::Light(l) => EntityDetail::Light {
                kind: format!("{:?}", l.kind),
                enabled: l.enabled,
                color: l.color,
                intensity: l.intensity,
            },
            EntityKind::Model(m) => EntityDetail::Model {
                mesh: m.mesh.0,
                visible: m.visible,
                shininess: m.material.shininess(),
            },
            EntityKind::Generic => EntityDetail::Generic,
        };
        Some(EntityInfo {
            id,
            name: entity.name.clone(),
            transform: *entity.transform(),
            detail,
        })
    }

    /// On a camera entity the rotation is read as `(pitch, yaw, roll)` in
    /// radians and turns the camera; roll is dropped.
    pub fn set_transform(
        scene: &mut Scene,
        id: EntityId,
        transform: Transform,
    ) -> Result<(), EditError> {
        let entity = scene.get_mut(id).ok_or(EditError::EntityNotFound(id))?;
        entity.set_transform(transform);
        debug!(entity = %id, "transform edited");
        Ok(())
    }

    /// Yaw and pitch in degrees; pitch is clamped like mouse-look.
    pub fn set_camera_orientation(
        scene: &mut Scene,
        id: EntityId,
        yaw: f32,
        pitch: f32,
    ) -> Result<(), EditError> {
        let mut camera = scene.camera_mut(id).map_err(|e| match e {
            SceneError::NotACamera(id) => EditError::WrongKind {
                id,
                expected: "camera",
            },
            _ => EditError::EntityNotFound(id),
        })?;
        camera.set_orientation(yaw, pitch.clamp(-MAX_PITCH, MAX_PITCH));
        debug!(entity = %id, yaw, pitch, "camera orientation edited");
        Ok(())
    }

    pub fn set_light_color(scene: &mut Scene, id: EntityId, color: Vec3) -> Result<(), EditError> {
        let entity = scene.get_mut(id).ok_or(EditError::EntityNotFound(id))?;
        let light = entity.as_light_mut().ok_or(EditError::WrongKind {
            id,
            expected: "light",
        })?;
        light.color = color;
        debug!(entity = %id, %color, "light color edited");
        Ok(())
    }

    pub fn set_material(
        scene: &mut Scene,
        id: EntityId,
        material: Material,
    ) -> Result<(), EditError> {
        let entity = scene.get_mut(id).ok_or(EditError::EntityNotFound(id))?;
        let model = entity.as_model_mut().ok_or(EditError::WrongKind {
            id,
            expected: "model",
        })?;
        model.material = material;
        debug!(entity = %id, "material edited");
        Ok(())
    }
}

/// Scene counts for the inspector header.
#[derive(Debug, Clone, Serialize)]
pub struct SceneSummary {
    pub entity_count: usize,
    pub cameras: usize,
    pub lights: usize,
    pub models: usize,
    pub active_camera: Option<String>,
}

impl fmt::Display for SceneSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scene: entities={} cameras={} lights={} models={} active={}",
            self.entity_count,
            self.cameras,
            self.lights,
            self.models,
            self.active_camera.as_deref().unwrap_or("none"),
        )
    }
}

/// Kind-specific fields shown under an entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EntityDetail {
    Camera {
        yaw: f32,
        pitch: f32,
        zoom: f32,
        active: bool,
    },
    Light {
        kind: String,
        enabled: bool,
        color: Vec3,
        intensity: f32,
    },
    Model {
        mesh: u64,
        visible: bool,
        shininess: f32,
    },
    Generic,
}

/// Detailed info about a single entity.
#[derive(Debug, Clone, Serialize)]
pub struct EntityInfo {
    pub id: EntityId,
    pub name: String,
    pub transform: Transform,
    pub detail: EntityDetail,
}

impl fmt::Display for EntityInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = &self.transform;
        write!(
            f,
            "[{}] {:<16} pos={} rot={} scale={}",
            self.id, self.name, t.position, t.rotation, t.scale
        )?;
        match &self.detail {
            EntityDetail::Camera {
                yaw,
                pitch,
                zoom,
                active,
            } => write!(
                f,
                " camera yaw={yaw:.1} pitch={pitch:.1} zoom={zoom:.1}{}",
                if *active { " (active)" } else { "" }
            ),
            EntityDetail::Light {
                kind,
                enabled,
                intensity,
                ..
            } => write!(f, " light {kind} intensity={intensity:.2} enabled={enabled}"),
            EntityDetail::Model { mesh, visible, .. } => {
                write!(f, " model mesh={mesh:016x} visible={visible}")
            }
            EntityDetail::Generic => Ok(()),
        }
    }
}
