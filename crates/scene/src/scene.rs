use crate::{CameraMut, Entity, EntityKind, SceneError};
use lumen_camera::Camera;
use lumen_common::EntityId;
use lumen_math::Vec3;
use std::collections::BTreeMap;
use tracing::{debug, warn};

pub const DEFAULT_CLEAR_COLOR: Vec3 = Vec3::new(0.2, 0.3, 0.3);

/// The set of entities being rendered, plus which camera views them.
///
/// Entities are stored in a `BTreeMap` and listed in insertion order.
/// Cameras, lights and models are additionally indexed by kind at spawn.
#[derive(Debug, Clone)]
pub struct Scene {
    entities: BTreeMap<EntityId, Entity>,
    order: Vec<EntityId>,
    cameras: Vec<EntityId>,
    lights: Vec<EntityId>,
    models: Vec<EntityId>,
    active_camera: Option<EntityId>,
    clear_color: Vec3,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// A scene holding a single active camera named "Main Camera".
    pub fn new() -> Self {
        let mut scene = Self::empty();
        scene.spawn(Entity::camera("Main Camera", Camera::default()));
        scene
    }

    /// A scene with no entities and no active camera.
    pub fn empty() -> Self {
        Self {
            entities: BTreeMap::new(),
            order: Vec::new(),
            cameras: Vec::new(),
            lights: Vec::new(),
            models: Vec::new(),
            active_camera: None,
            clear_color: DEFAULT_CLEAR_COLOR,
        }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn clear_color(&self) -> Vec3 {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Vec3) {
        self.clear_color = color;
    }

    /// Add an entity and return its id. The first camera added to a scene
    /// without an active camera becomes active.
    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        let id = entity.id();
        match entity.kind() {
            EntityKind::Camera(_) => {
                self.cameras.push(id);
                if self.active_camera.is_none() {
                    self.active_camera = Some(id);
                }
            }
            EntityKind::Light(_) => self.lights.push(id),
            EntityKind::Model(_) => self.models.push(id),
            EntityKind::Generic => {}
        }
        debug!(entity = %id, name = %entity.name, kind = entity.kind().label(), "spawned");
        self.order.push(id);
        self.entities.insert(id, entity);
        id
    }

    /// Remove an entity. Despawning the active camera hands activity to the
    /// next remaining camera, if any.
    pub fn despawn(&mut self, id: EntityId) -> Result<Entity, SceneError> {
        let Some(entity) = self.entities.remove(&id) else {
            warn!(entity = %id, "despawn of missing entity");
            return Err(SceneError::EntityNotFound(id));
        };
        self.order.retain(|e| *e != id);
        self.cameras.retain(|e| *e != id);
        self.lights.retain(|e| *e != id);
        self.models.retain(|e| *e != id);
        if self.active_camera == Some(id) {
            self.active_camera = self.cameras.first().copied();
            debug!(active = ?self.active_camera, "active camera despawned");
        }
        debug!(entity = %id, name = %entity.name, "despawned");
        Ok(entity)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Entity> {
        self.entities().find(|e| e.name == name)
    }

    /// All entities, in insertion order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.order.iter().filter_map(|id| self.entities.get(id))
    }

    pub fn cameras(&self) -> impl Iterator<Item = &Entity> {
        self.cameras.iter().filter_map(|id| self.entities.get(id))
    }

    pub fn lights(&self) -> impl Iterator<Item = &Entity> {
        self.lights.iter().filter_map(|id| self.entities.get(id))
    }

    pub fn models(&self) -> impl Iterator<Item = &Entity> {
        self.models.iter().filter_map(|id| self.entities.get(id))
    }

    pub fn set_active_camera(&mut self, id: EntityId) -> Result<(), SceneError> {
        let Some(entity) = self.entities.get(&id) else {
            warn!(entity = %id, "cannot activate missing entity");
            return Err(SceneError::EntityNotFound(id));
        };
        if entity.as_camera().is_none() {
            return Err(SceneError::NotACamera(id));
        }
        if self.active_camera != Some(id) {
            debug!(camera = %id, name = %entity.name, "active camera changed");
            self.active_camera = Some(id);
        }
        Ok(())
    }

    pub fn active_camera_id(&self) -> Option<EntityId> {
        self.active_camera
    }

    pub fn active_camera_entity(&self) -> Option<&Entity> {
        self.active_camera.and_then(|id| self.entities.get(&id))
    }

    pub fn active_camera(&self) -> Option<&Camera> {
        self.active_camera_entity().and_then(Entity::as_camera)
    }

    /// Mutable access to the active camera; its pose is written back to the
    /// entity transform when the guard drops.
    pub fn active_camera_mut(&mut self) -> Option<CameraMut<'_>> {
        let id = self.active_camera?;
        self.camera_mut(id).ok()
    }

    /// Mutable access to any camera, synced like [`Scene::active_camera_mut`].
    pub fn camera_mut(&mut self, id: EntityId) -> Result<CameraMut<'_>, SceneError> {
        self.entities
            .get_mut(&id)
            .ok_or(SceneError::EntityNotFound(id))?
            .camera_mut()
            .ok_or(SceneError::NotACamera(id))
    }

    /// Move an entity. Cameras move with their entity.
    pub fn set_position(&mut self, id: EntityId, position: Vec3) -> Result<(), SceneError> {
        match self.entities.get_mut(&id) {
            Some(entity) => {
                entity.set_position(position);
                Ok(())
            }
            None => {
                warn!(entity = %id, "set_position on missing entity");
                Err(SceneError::EntityNotFound(id))
            }
        }
    }
}
