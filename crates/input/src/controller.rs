use crate::{Action, CursorMode, InputState, Key, KeyBindings, MouseTracker};
use tracing::debug;

/// Event-to-action front end owned by the application loop.
///
/// Window callbacks feed raw events in; the loop collects the resulting
/// actions plus [`InputController::held_actions`] once per frame and hands
/// them to [`crate::apply`].
#[derive(Debug, Clone, Default)]
pub struct InputController {
    pub bindings: KeyBindings,
    state: InputState,
    mouse: MouseTracker,
    cursor: CursorMode,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            ..Self::default()
        }
    }

    pub fn cursor_mode(&self) -> CursorMode {
        self.cursor
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    /// Key press or release. Toggle and quit fire once per press, not while
    /// held. Movement keys only update the held set.
    pub fn key_event(&mut self, key: Key, pressed: bool) -> Option<Action> {
        if !pressed {
            self.state.release(key);
            return None;
        }
        if !self.state.press(key) {
            return None;
        }
        if key == self.bindings.quit {
            return Some(Action::Quit);
        }
        if key == self.bindings.toggle_cursor {
            self.cursor = self.cursor.toggled();
            // re-seed on the next sample so the view does not jump
            self.mouse.reset();
            debug!(mode = ?self.cursor, "cursor toggled");
            return Some(Action::ToggleCursor);
        }
        None
    }

    /// Absolute cursor position. Ignored while the cursor is free.
    pub fn cursor_moved(&mut self, x: f32, y: f32) -> Option<Action> {
        if !self.cursor.is_captured() {
            return None;
        }
        let (dx, dy) = self.mouse.track(x, y)?;
        Some(Action::Look { dx, dy })
    }

    /// Scroll wheel. Ignored while the cursor is free.
    pub fn scrolled(&mut self, dy: f32) -> Option<Action> {
        self.cursor.is_captured().then_some(Action::Zoom(dy))
    }

    /// One `Move` per held movement key, in key order. Empty while the
    /// cursor is free.
    pub fn held_actions(&self) -> Vec<Action> {
        if !self.cursor.is_captured() {
            return Vec::new();
        }
        self.state
            .held()
            .filter_map(|k| self.bindings.movement_for(k))
            .map(Action::Move)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apply;
    use lumen_camera::{Camera, CameraMovement};
    use lumen_math::Vec3;

    #[test]
    fn held_keys_become_moves() {
        let mut input = InputController::new();
        assert_eq!(input.key_event(Key::W, true), None);
        input.key_event(Key::D, true);
        assert_eq!(
            input.held_actions(),
            [
                Action::Move(CameraMovement::Forward),
                Action::Move(CameraMovement::Right)
            ]
        );
        input.key_event(Key::W, false);
        assert_eq!(input.held_actions(), [Action::Move(CameraMovement::Right)]);
    }

    #[test]
    fn toggle_fires_once_per_press() {
        let mut input = InputController::new();
        assert_eq!(input.key_event(Key::Tab, true), Some(Action::ToggleCursor));
        assert_eq!(input.cursor_mode(), CursorMode::Free);
        // auto-repeat while held
        assert_eq!(input.key_event(Key::Tab, true), None);
        assert_eq!(input.cursor_mode(), CursorMode::Free);
        input.key_event(Key::Tab, false);
        assert_eq!(input.key_event(Key::Tab, true), Some(Action::ToggleCursor));
        assert_eq!(input.cursor_mode(), CursorMode::Captured);
    }

    #[test]
    fn escape_quits() {
        let mut input = InputController::new();
        assert_eq!(input.key_event(Key::Escape, true), Some(Action::Quit));
    }

    #[test]
    fn free_cursor_suppresses_camera_input() {
        let mut input = InputController::new();
        input.key_event(Key::W, true);
        input.key_event(Key::Tab, true);
        assert!(input.held_actions().is_empty());
        assert_eq!(input.cursor_moved(10.0, 10.0), None);
        assert_eq!(input.scrolled(1.0), None);
    }

    #[test]
    fn recapture_does_not_jump() {
        let mut input = InputController::new();
        input.cursor_moved(100.0, 100.0);
        assert_eq!(
            input.cursor_moved(104.0, 98.0),
            Some(Action::Look { dx: 4.0, dy: 2.0 })
        );

        input.key_event(Key::Tab, true);
        input.key_event(Key::Tab, false);
        input.key_event(Key::Tab, true);
        assert_eq!(input.cursor_moved(900.0, 900.0), None);
        assert_eq!(
            input.cursor_moved(900.0, 901.0),
            Some(Action::Look { dx: 0.0, dy: -1.0 })
        );
    }

    #[test]
    fn drives_a_camera() {
        let mut input = InputController::new();
        let mut cam = Camera::new(Vec3::new(0.0, 0.0, 5.0));
        input.key_event(Key::W, true);
        for action in input.held_actions() {
            apply(action, &mut cam, 0.4);
        }
        assert!((cam.position - Vec3::new(0.0, 0.0, 4.0)).magnitude() < 1e-5);

        input.cursor_moved(0.0, 0.0);
        if let Some(look) = input.cursor_moved(0.0, -100.0) {
            apply(look, &mut cam, 0.0);
        }
        assert!((cam.pitch() - 8.0).abs() < 1e-4);
        assert!(cam.front().y > 0.0);
    }
}
