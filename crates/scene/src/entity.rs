use crate::{Light, Material, forward_from_rotation};
use lumen_assets::{MeshHandle, ShaderHandle};
use lumen_camera::Camera;
use lumen_common::{EntityId, Transform};
use lumen_math::{Mat4, Vec3, deg_to_rad, rad_to_deg};
use std::ops::{Deref, DerefMut};

/// A drawable mesh instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub mesh: MeshHandle,
    pub material: Material,
    pub shader: Option<ShaderHandle>,
    pub visible: bool,
}

impl Model {
    pub fn new(mesh: MeshHandle) -> Self {
        Self {
            mesh,
            material: Material::default(),
            shader: None,
            visible: true,
        }
    }
}

/// What an entity is, beyond its transform.
#[derive(Debug, Clone)]
pub enum EntityKind {
    Camera(Camera),
    Light(Light),
    Model(Model),
    Generic,
}

impl EntityKind {
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Camera(_) => "camera",
            EntityKind::Light(_) => "light",
            EntityKind::Model(_) => "model",
            EntityKind::Generic => "generic",
        }
    }
}

/// A named object in the scene.
///
/// The kind is fixed at construction. For cameras the transform mirrors the
/// camera pose: position is the camera position and rotation is
/// `(pitch, yaw, 0)` in radians. Transform edits are applied to the camera,
/// and camera edits go through [`Entity::camera_mut`], whose guard writes the
/// pose back.
#[derive(Debug, Clone)]
pub struct Entity {
    id: EntityId,
    pub name: String,
    transform: Transform,
    kind: EntityKind,
}

impl Entity {
    /// For cameras the transform wins: the camera adopts its position and
    /// its pitch and yaw. Roll is dropped.
    pub fn new(name: impl Into<String>, transform: Transform, kind: EntityKind) -> Self {
        let mut entity = Self {
            id: EntityId::new(),
            name: name.into(),
            transform,
            kind,
        };
        entity.sync_camera_from_transform();
        entity
    }

    /// A camera entity posed where the camera currently is.
    pub fn camera(name: impl Into<String>, camera: Camera) -> Self {
        let transform = Transform {
            position: camera.position,
            rotation: camera_rotation(&camera),
            ..Transform::default()
        };
        Self::new(name, transform, EntityKind::Camera(camera))
    }

    pub fn light(name: impl Into<String>, transform: Transform, light: Light) -> Self {
        Self::new(name, transform, EntityKind::Light(light))
    }

    pub fn model(name: impl Into<String>, transform: Transform, model: Model) -> Self {
        Self::new(name, transform, EntityKind::Model(model))
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn kind(&self) -> &EntityKind {
        &self.kind
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
        self.sync_camera_from_transform();
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.transform.position = position;
        self.sync_camera_from_transform();
    }

    pub fn set_rotation(&mut self, rotation: Vec3) {
        self.transform.rotation = rotation;
        self.sync_camera_from_transform();
    }

    pub fn set_scale(&mut self, scale: Vec3) {
        self.transform.scale = scale;
    }

    pub fn model_matrix(&self) -> Mat4 {
        self.transform.model_matrix()
    }

    pub fn as_camera(&self) -> Option<&Camera> {
        match &self.kind {
            EntityKind::Camera(c) => Some(c),
            _ => None,
        }
    }

    /// Mutable camera access. The pose is written back to the transform when
    /// the guard drops.
    pub fn camera_mut(&mut self) -> Option<CameraMut<'_>> {
        match &mut self.kind {
            EntityKind::Camera(camera) => Some(CameraMut {
                camera,
                transform: &mut self.transform,
            }),
            _ => None,
        }
    }

    pub fn as_light(&self) -> Option<&Light> {
        match &self.kind {
            EntityKind::Light(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_light_mut(&mut self) -> Option<&mut Light> {
        match &mut self.kind {
            EntityKind::Light(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_model(&self) -> Option<&Model> {
        match &self.kind {
            EntityKind::Model(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_model_mut(&mut self) -> Option<&mut Model> {
        match &mut self.kind {
            EntityKind::Model(m) => Some(m),
            _ => None,
        }
    }

    /// Direction a light entity points, from its rotation.
    pub fn forward(&self) -> Vec3 {
        forward_from_rotation(self.transform.rotation)
    }

    fn sync_camera_from_transform(&mut self) {
        if let EntityKind::Camera(camera) = &mut self.kind {
            let rotation = self.transform.rotation;
            camera.position = self.transform.position;
            camera.set_orientation(rad_to_deg(rotation.y), rad_to_deg(rotation.x));
            write_pose(camera, &mut self.transform);
        }
    }
}

fn camera_rotation(camera: &Camera) -> Vec3 {
    Vec3::new(deg_to_rad(camera.pitch()), deg_to_rad(camera.yaw()), 0.0)
}

fn write_pose(camera: &Camera, transform: &mut Transform) {
    transform.position = camera.position;
    transform.rotation = camera_rotation(camera);
}

/// Mutable camera borrow that mirrors the camera pose into its entity's
/// transform on drop.
pub struct CameraMut<'a> {
    camera: &'a mut Camera,
    transform: &'a mut Transform,
}

impl Deref for CameraMut<'_> {
    type Target = Camera;

    fn deref(&self) -> &Camera {
        &*self.camera
    }
}

impl DerefMut for CameraMut<'_> {
    fn deref_mut(&mut self) -> &mut Camera {
        &mut *self.camera
    }
}

impl Drop for CameraMut<'_> {
    fn drop(&mut self) {
        write_pose(&*self.camera, &mut *self.transform);
    }
}
