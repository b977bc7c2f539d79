use lumen_input::Key;

/// A raw window event, as a backend would deliver it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key(Key, bool),
    Cursor(f32, f32),
    Scroll(f32),
}

/// Deterministic input for headless runs over `frames` frames.
///
/// The first quarter walks forward, the second strafes right while
/// sweeping the view, the third climbs and zooms in, and the rest stands
/// still. Escape is pressed on the final frame.
pub fn scripted_events(frame: u64, frames: u64) -> Vec<InputEvent> {
    let quarter = (frames / 4).max(1);
    let mut events = Vec::new();

    if frame == 0 {
        events.push(InputEvent::Key(Key::W, true));
        events.push(InputEvent::Cursor(960.0, 540.0));
    }
    if frame == quarter {
        events.push(InputEvent::Key(Key::W, false));
        events.push(InputEvent::Key(Key::D, true));
    }
    if (quarter..2 * quarter).contains(&frame) {
        let step = (frame - quarter + 1) as f32;
        events.push(InputEvent::Cursor(960.0 + 12.0 * step, 540.0 - 3.0 * step));
    }
    if frame == 2 * quarter {
        events.push(InputEvent::Key(Key::D, false));
        events.push(InputEvent::Key(Key::Space, true));
    }
    if (2 * quarter..3 * quarter).contains(&frame) {
        events.push(InputEvent::Scroll(1.0));
    }
    if frame == 3 * quarter {
        events.push(InputEvent::Key(Key::Space, false));
    }
    if frame + 1 == frames {
        events.push(InputEvent::Key(Key::Escape, true));
    }
    events
}
