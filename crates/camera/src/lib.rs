//! FPS camera: yaw/pitch state machine over the math core.
//!
//! # Invariants
//! - `front`, `right`, `up` are derived from yaw, pitch and world-up by
//!   [`derive_basis`] after every mutation and are never set directly.
//! - Pitch is clamped to `[-89, 89]` degrees when constrained; zoom to
//!   `[1, 45]` degrees. Inputs are clamped, never rejected.
//! - Zoom doubles as the vertical field of view.

mod camera;

pub use camera::{
    Camera, CameraBasis, CameraMovement, CameraState, DEFAULT_PITCH, DEFAULT_SENSITIVITY,
    DEFAULT_SPEED, DEFAULT_YAW, DEFAULT_ZOOM, MAX_PITCH, MAX_ZOOM, MIN_ZOOM, derive_basis,
};
