use tracing::debug;

/// Whether the cursor drives the camera or is free for UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CursorMode {
    /// Hidden and locked; mouse motion turns the camera.
    #[default]
    Captured,
    /// Visible; mouse motion is left to the UI.
    Free,
}

impl CursorMode {
    pub fn toggled(self) -> Self {
        match self {
            CursorMode::Captured => CursorMode::Free,
            CursorMode::Free => CursorMode::Captured,
        }
    }

    pub fn is_captured(self) -> bool {
        self == CursorMode::Captured
    }
}

/// Turns absolute cursor positions into look deltas.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MouseTracker {
    last: Option<(f32, f32)>,
}

impl MouseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset since the previous sample as `(dx, dy)`, with `dy` positive
    /// when the cursor moves up the screen. The first sample after
    /// construction or [`MouseTracker::reset`] only seeds the position.
    pub fn track(&mut self, x: f32, y: f32) -> Option<(f32, f32)> {
        let previous = self.last.replace((x, y));
        let (last_x, last_y) = previous?;
        Some((x - last_x, last_y - y))
    }

    /// Forget the last sample so the next one produces no jump.
    pub fn reset(&mut self) {
        if self.last.take().is_some() {
            debug!("mouse tracker reset");
        }
    }

    pub fn has_sample(&self) -> bool {
        self.last.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_yields_nothing() {
        let mut m = MouseTracker::new();
        assert_eq!(m.track(960.0, 540.0), None);
        assert!(m.has_sample());
    }

    #[test]
    fn y_offset_is_inverted() {
        let mut m = MouseTracker::new();
        m.track(100.0, 100.0);
        // screen y grows downward; moving up gives positive dy
        assert_eq!(m.track(110.0, 90.0), Some((10.0, 10.0)));
        assert_eq!(m.track(105.0, 95.0), Some((-5.0, -5.0)));
    }

    #[test]
    fn reset_suppresses_jump() {
        let mut m = MouseTracker::new();
        m.track(0.0, 0.0);
        m.reset();
        assert_eq!(m.track(500.0, 500.0), None);
        assert_eq!(m.track(501.0, 500.0), Some((1.0, 0.0)));
    }

    #[test]
    fn cursor_mode_toggles() {
        let mode = CursorMode::default();
        assert!(mode.is_captured());
        assert_eq!(mode.toggled(), CursorMode::Free);
        assert_eq!(mode.toggled().toggled(), CursorMode::Captured);
    }
}
