use lumen_camera::{Camera, CameraMovement};
use tracing::trace;

/// A high-level input action.
///
/// The camera and the application loop consume actions, never raw events,
/// so a window backend only has to translate its events once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Held movement key, applied once per frame scaled by frame time.
    Move(CameraMovement),
    /// Cursor delta in pixels; `dy` is positive when the mouse moves up.
    Look { dx: f32, dy: f32 },
    /// Scroll wheel delta.
    Zoom(f32),
    /// Switch between camera control and a free cursor.
    ToggleCursor,
    /// Close the application.
    Quit,
}

/// Applies a camera action. Pitch is always constrained. `ToggleCursor` and
/// `Quit` are application-level and leave the camera untouched.
pub fn apply(action: Action, camera: &mut Camera, dt: f32) {
    trace!(?action, dt, "apply");
    match action {
        Action::Move(direction) => camera.process_keyboard(direction, dt),
        Action::Look { dx, dy } => camera.process_mouse_movement(dx, dy, true),
        Action::Zoom(dy) => camera.process_mouse_scroll(dy),
        Action::ToggleCursor | Action::Quit => {}
    }
}
