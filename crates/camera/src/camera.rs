use lumen_math::{Mat4, Vec3, deg_to_rad};
use serde::{Deserialize, Serialize};

pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;
pub const DEFAULT_SPEED: f32 = 2.5;
pub const DEFAULT_SENSITIVITY: f32 = 0.08;
pub const DEFAULT_ZOOM: f32 = 45.0;

/// Pitch limit in degrees applied by constrained mouse look.
pub const MAX_PITCH: f32 = 89.0;
pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 45.0;

/// Keyboard movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
    /// Along world-up, independent of pitch.
    Up,
    Down,
}

/// Orthonormal right-handed camera basis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    pub front: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

/// Derives the look basis from Euler angles in degrees.
///
/// `front` comes from yaw/pitch, then `right = front x world_up` and
/// `up = right x front`, so the three stay orthonormal whatever `front` is.
/// Looking straight along `world_up` makes `right` degenerate (zero).
pub fn derive_basis(yaw: f32, pitch: f32, world_up: Vec3) -> CameraBasis {
    let (yaw, pitch) = (deg_to_rad(yaw), deg_to_rad(pitch));
    let front = Vec3::new(
        yaw.cos() * pitch.cos(),
        pitch.sin(),
        yaw.sin() * pitch.cos(),
    )
    .normalized();
    let right = front.cross(world_up).normalized();
    let up = right.cross(front).normalized();
    CameraBasis { front, right, up }
}

/// Canonical camera state, without the derived basis.
///
/// This is the serialized form of [`Camera`]; missing fields take the
/// camera defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraState {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub world_up: Vec3,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    pub zoom: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            world_up: Vec3::Y,
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// Fly camera driven by keyboard, mouse-look and scroll deltas.
///
/// Yaw, pitch and zoom are in degrees. Only the canonical state is mutable
/// from outside; the basis is recomputed by every setter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "CameraState", into = "CameraState")]
pub struct Camera {
    pub position: Vec3,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    yaw: f32,
    pitch: f32,
    world_up: Vec3,
    zoom: f32,
    basis: CameraBasis,
}

impl Default for Camera {
    fn default() -> Self {
        Self::from(CameraState::default())
    }
}

impl From<CameraState> for Camera {
    fn from(state: CameraState) -> Self {
        Self {
            position: state.position,
            movement_speed: state.movement_speed,
            mouse_sensitivity: state.mouse_sensitivity,
            yaw: state.yaw,
            pitch: state.pitch,
            world_up: state.world_up,
            zoom: state.zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            basis: derive_basis(state.yaw, state.pitch, state.world_up),
        }
    }
}

impl From<Camera> for CameraState {
    fn from(camera: Camera) -> Self {
        camera.state()
    }
}

impl Camera {
    /// Camera at `position` with default orientation (looking down `-Z`).
    pub fn new(position: Vec3) -> Self {
        Self::from(CameraState {
            position,
            ..CameraState::default()
        })
    }

    pub fn with_orientation(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        Self::from(CameraState {
            position,
            world_up,
            yaw,
            pitch,
            ..CameraState::default()
        })
    }

    pub fn state(&self) -> CameraState {
        CameraState {
            position: self.position,
            yaw: self.yaw,
            pitch: self.pitch,
            world_up: self.world_up,
            movement_speed: self.movement_speed,
            mouse_sensitivity: self.mouse_sensitivity,
            zoom: self.zoom,
        }
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    /// Zoom level in degrees, also the vertical field of view.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn basis(&self) -> CameraBasis {
        self.basis
    }

    pub fn front(&self) -> Vec3 {
        self.basis.front
    }

    pub fn right(&self) -> Vec3 {
        self.basis.right
    }

    pub fn up(&self) -> Vec3 {
        self.basis.up
    }

    /// Sets yaw and pitch verbatim (no pitch clamp) and rebuilds the basis.
    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch;
        self.update_basis();
    }

    pub fn set_yaw(&mut self, yaw: f32) {
        self.set_orientation(yaw, self.pitch);
    }

    pub fn set_pitch(&mut self, pitch: f32) {
        self.set_orientation(self.yaw, pitch);
    }

    pub fn set_world_up(&mut self, world_up: Vec3) {
        self.world_up = world_up;
        self.update_basis();
    }

    /// Sets zoom, clamped to `[1, 45]` degrees.
    pub fn set_zoom(&mut self, zoom: f32) {
        let clamped = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        if clamped != zoom {
            tracing::debug!(requested = zoom, clamped, "camera zoom clamped");
        }
        self.zoom = clamped;
    }

    /// Translates along the basis: `position += dir * speed * dt`.
    /// Orientation is untouched.
    pub fn process_keyboard(&mut self, direction: CameraMovement, dt: f32) {
        let velocity = self.movement_speed * dt;
        let dir = match direction {
            CameraMovement::Forward => self.basis.front,
            CameraMovement::Backward => -self.basis.front,
            CameraMovement::Left => -self.basis.right,
            CameraMovement::Right => self.basis.right,
            CameraMovement::Up => self.world_up,
            CameraMovement::Down => -self.world_up,
        };
        self.position += dir * velocity;
    }

    /// Mouse look. Offsets are scaled by the sensitivity; with
    /// `constrain_pitch` the pitch is held inside `[-89, 89]` so the view
    /// never flips through vertical.
    pub fn process_mouse_movement(&mut self, dx: f32, dy: f32, constrain_pitch: bool) {
        self.yaw += dx * self.mouse_sensitivity;
        self.pitch += dy * self.mouse_sensitivity;

        if constrain_pitch {
            let clamped = self.pitch.clamp(-MAX_PITCH, MAX_PITCH);
            if clamped != self.pitch {
                tracing::debug!(requested = self.pitch, clamped, "camera pitch clamped");
                self.pitch = clamped;
            }
        }

        self.update_basis();
    }

    /// Scroll zoom: `zoom -= dy`, clamped to `[1, 45]`.
    pub fn process_mouse_scroll(&mut self, dy: f32) {
        self.set_zoom(self.zoom - dy);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.position + self.basis.front, self.basis.up)
    }

    /// Perspective projection using [`Camera::zoom`] as the vertical FOV.
    pub fn projection_matrix(&self, aspect: f32, near: f32, far: f32) -> Mat4 {
        Mat4::perspective(deg_to_rad(self.zoom), aspect, near, far)
    }

    pub fn view_projection(&self, aspect: f32, near: f32, far: f32) -> Mat4 {
        self.projection_matrix(aspect, near, far) * self.view_matrix()
    }

    fn update_basis(&mut self) {
        self.basis = derive_basis(self.yaw, self.pitch, self.world_up);
        tracing::trace!(
            yaw = self.yaw,
            pitch = self.pitch,
            front = %self.basis.front,
            "camera basis updated"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).magnitude() < 1e-5
    }

    #[test]
    fn default_camera_looks_down_negative_z() {
        let cam = Camera::default();
        assert!(close(cam.front(), Vec3::new(0.0, 0.0, -1.0)));
        assert!(close(cam.right(), Vec3::X));
        assert!(close(cam.up(), Vec3::Y));
        assert_eq!(cam.zoom(), DEFAULT_ZOOM);
        assert_eq!(cam.movement_speed, DEFAULT_SPEED);
    }

    #[test]
    fn forward_moves_along_front() {
        let mut cam = Camera::new(Vec3::new(0.0, 0.0, 5.0));
        cam.process_keyboard(CameraMovement::Forward, 1.0);
        assert!((cam.position.z - 2.5).abs() < 1e-5);
        assert!(cam.position.x.abs() < 1e-5);
    }

    #[test]
    fn looks_down_negative_z_then_walks_forward() {
        let mut cam = Camera::with_orientation(Vec3::new(0.0, 0.0, 5.0), Vec3::Y, -90.0, 0.0);
        // a point one unit ahead of the eye lands on the view-space -Z axis
        assert!(close(cam.view_matrix() * Vec3::new(0.0, 0.0, 4.0), Vec3::new(0.0, 0.0, -1.0)));

        cam.process_keyboard(CameraMovement::Forward, 1.0);
        assert!((cam.position.z - 2.5).abs() < 1e-5);
        assert!(close(cam.view_matrix() * Vec3::new(0.0, 0.0, 1.5), Vec3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn keyboard_directions_map_to_basis() {
        let start = Vec3::new(1.0, 2.0, 3.0);
        let cases = [
            (CameraMovement::Forward, Vec3::new(0.0, 0.0, -1.0)),
            (CameraMovement::Backward, Vec3::new(0.0, 0.0, 1.0)),
            (CameraMovement::Left, Vec3::new(-1.0, 0.0, 0.0)),
            (CameraMovement::Right, Vec3::new(1.0, 0.0, 0.0)),
            (CameraMovement::Up, Vec3::new(0.0, 1.0, 0.0)),
            (CameraMovement::Down, Vec3::new(0.0, -1.0, 0.0)),
        ];
        for (dir, expected) in cases {
            let mut cam = Camera::new(start);
            cam.movement_speed = 1.0;
            cam.process_keyboard(dir, 2.0);
            assert!(close(cam.position - start, expected * 2.0), "{dir:?}");
            assert_eq!(cam.yaw(), DEFAULT_YAW);
            assert_eq!(cam.pitch(), DEFAULT_PITCH);
        }
    }

    #[test]
    fn pitch_is_clamped_when_constrained() {
        let mut cam = Camera::default();
        for _ in 0..50 {
            cam.process_mouse_movement(0.0, 10_000.0, true);
            assert!(cam.pitch() <= MAX_PITCH);
        }
        assert_eq!(cam.pitch(), MAX_PITCH);
        for _ in 0..50 {
            cam.process_mouse_movement(0.0, -10_000.0, true);
            assert!(cam.pitch() >= -MAX_PITCH);
        }
        assert_eq!(cam.pitch(), -MAX_PITCH);
    }

    #[test]
    fn pitch_is_free_when_unconstrained() {
        let mut cam = Camera::default();
        cam.process_mouse_movement(0.0, 2000.0, false);
        assert!(cam.pitch() > MAX_PITCH);
    }

    #[test]
    fn mouse_look_scales_by_sensitivity() {
        let mut cam = Camera::default();
        cam.process_mouse_movement(100.0, 50.0, true);
        assert!((cam.yaw() - (DEFAULT_YAW + 8.0)).abs() < 1e-4);
        assert!((cam.pitch() - 4.0).abs() < 1e-4);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut cam = Camera::default();
        for dy in [100.0, -500.0, 3.0, 1e6, -1e6] {
            cam.process_mouse_scroll(dy);
            assert!((MIN_ZOOM..=MAX_ZOOM).contains(&cam.zoom()));
        }
        cam.process_mouse_scroll(1e6);
        assert_eq!(cam.zoom(), MIN_ZOOM);
        cam.process_mouse_scroll(-1e6);
        assert_eq!(cam.zoom(), MAX_ZOOM);
        cam.process_mouse_scroll(5.0);
        assert_eq!(cam.zoom(), 40.0);
    }

    #[test]
    fn basis_stays_orthonormal() {
        let mut cam = Camera::default();
        for (dx, dy) in [(30.0, 12.0), (-400.0, 90.0), (1234.0, -800.0)] {
            cam.process_mouse_movement(dx, dy, true);
            let CameraBasis { front, right, up } = cam.basis();
            assert!((front.magnitude() - 1.0).abs() < 1e-5);
            assert!((right.magnitude() - 1.0).abs() < 1e-5);
            assert!((up.magnitude() - 1.0).abs() < 1e-5);
            assert!(front.dot(right).abs() < 1e-5);
            assert!(front.dot(up).abs() < 1e-5);
            assert!(right.dot(up).abs() < 1e-5);
            // right-handed: right x up = -front
            assert!(close(right.cross(up), -front));
        }
    }

    #[test]
    fn setters_refresh_basis() {
        let mut cam = Camera::default();
        cam.set_yaw(0.0);
        assert!(close(cam.front(), Vec3::X));
        cam.set_pitch(90.0);
        assert!(close(cam.front(), Vec3::Y));
        cam.set_orientation(-90.0, 0.0);
        cam.set_world_up(Vec3::new(0.0, -1.0, 0.0));
        assert!(close(cam.up(), Vec3::new(0.0, -1.0, 0.0)));
    }

    #[test]
    fn view_matrix_puts_eye_at_origin() {
        let mut cam = Camera::new(Vec3::new(4.0, 1.0, -2.0));
        cam.process_mouse_movement(120.0, -60.0, true);
        let view = cam.view_matrix();
        assert!(close(view * cam.position, Vec3::ZERO));
        let ahead = view * (cam.position + cam.front());
        assert!(close(ahead, Vec3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn projection_uses_zoom_as_fov() {
        let mut cam = Camera::default();
        cam.set_zoom(30.0);
        assert_eq!(
            cam.projection_matrix(1.5, 0.1, 100.0),
            Mat4::perspective(deg_to_rad(30.0), 1.5, 0.1, 100.0)
        );
    }

    #[test]
    fn serde_round_trip_rebuilds_basis() {
        let mut cam = Camera::new(Vec3::new(1.0, 2.0, 3.0));
        cam.process_mouse_movement(200.0, 100.0, true);
        let json = serde_json::to_string(&cam).unwrap();
        assert!(!json.contains("front"));
        let back: Camera = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cam);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let cam: Camera = serde_json::from_str(r#"{"position": {"x": 0.0, "y": 0.0, "z": 5.0}}"#).unwrap();
        assert_eq!(cam.yaw(), DEFAULT_YAW);
        assert_eq!(cam.zoom(), DEFAULT_ZOOM);
        assert!(close(cam.front(), Vec3::new(0.0, 0.0, -1.0)));
    }
}
