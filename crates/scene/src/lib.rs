//! Scene: entities, lights, materials and the active camera.
//!
//! # Invariants
//! - An entity's kind is fixed at spawn; the per-kind indices are built at
//!   insertion and never go stale.
//! - A camera entity's transform mirrors its camera after every scene or
//!   entity operation: position equals the camera position and rotation is
//!   `(pitch, yaw, 0)` in radians. Camera mutation is only reachable through
//!   the [`CameraMut`] guard.
//! - The active camera, when set, always names a live camera entity.

mod description;
mod entity;
mod light;
mod material;
mod scene;

pub use description::{
    CameraDescription, LightDescription, MeshSource, ModelDescription, SceneDescription,
};
pub use entity::{CameraMut, Entity, EntityKind, Model};
pub use light::{Light, LightKind, forward_from_rotation};
pub use material::{MAX_SHININESS, MIN_SHININESS, Material};
pub use scene::{DEFAULT_CLEAR_COLOR, Scene};

use lumen_common::EntityId;

/// Errors from scene operations.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("entity not found: {0}")]
    EntityNotFound(EntityId),
    #[error("entity {0} is not a camera")]
    NotACamera(EntityId),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("asset error: {0}")]
    Asset(#[from] lumen_assets::AssetError),
}
