use crate::{Frame, RecordedUniforms};

/// Backend interface. A renderer consumes a built [`Frame`] and produces
/// its output; it never sees the scene directly.
pub trait Renderer {
    type Output;

    fn render(&self, frame: &Frame) -> Self::Output;
}

/// Human-readable frame report for the CLI and logs.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, frame: &Frame) -> String {
        let mut out = String::new();
        let u = &frame.uniforms;
        out.push_str(&format!(
            "=== Frame {} (camera {}) ===\n",
            frame.number, frame.camera
        ));
        out.push_str(&format!("viewPos: {}\n", u.view_pos));
        out.push_str(&format!(
            "Lights: {}  Draws: {}\n",
            frame.lights.len(),
            frame.draws.len()
        ));
        for (i, light) in frame.lights.iter().enumerate() {
            out.push_str(&format!(
                "  light[{i}] type={} pos={} dir={} on={}\n",
                light.kind,
                light.position,
                light.direction,
                light.enabled != 0
            ));
        }
        for draw in &frame.draws {
            let m = &draw.model.model;
            out.push_str(&format!(
                "  [{}] {} mesh={:016x} at=({:.2}, {:.2}, {:.2})\n",
                draw.entity,
                draw.name,
                draw.mesh.0,
                m.get(0, 3),
                m.get(1, 3),
                m.get(2, 3)
            ));
        }
        out
    }
}

/// Records the uniforms each draw call would upload: globals first, then
/// the draw's `model` and `material.*`.
#[derive(Debug, Default)]
pub struct RecordingRenderer;

impl RecordingRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for RecordingRenderer {
    type Output = Vec<RecordedUniforms>;

    fn render(&self, frame: &Frame) -> Vec<RecordedUniforms> {
        frame
            .draws
            .iter()
            .map(|draw| {
                let mut sink = RecordedUniforms::new();
                frame.bind_globals(&mut sink);
                draw.bind(&mut sink);
                sink
            })
            .collect()
    }
}
