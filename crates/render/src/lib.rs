//! Rendering adapter: turns a scene into per-frame data and shader uniforms.
//!
//! # Invariants
//! - Rendering reads the scene and never mutates it.
//! - Uniform names and layouts are fixed here so every backend binds the
//!   same program interface: `model`, `view`, `projection`, `viewPos`,
//!   `material.*` and `lights[i].*`.
//!
//! The GPU backend is out of tree. [`DebugTextRenderer`] and
//! [`RecordingRenderer`] implement the same [`Renderer`] trait for the CLI
//! and tests.

mod binding;
mod frame;
mod renderer;
mod uniforms;

pub use binding::{
    DIFFUSE_TEXTURE_UNIT, RecordedUniforms, SPECULAR_TEXTURE_UNIT, UniformSink, UniformValue,
    bind_frame, bind_light, bind_material, bind_model,
};
pub use frame::{DEFAULT_ASPECT, DEFAULT_FAR, DEFAULT_NEAR, DrawItem, Frame, FrameBuilder};
pub use renderer::{DebugTextRenderer, RecordingRenderer, Renderer};
pub use uniforms::{FrameUniforms, LightUniform, ModelUniforms};

pub fn crate_info() -> &'static str {
    concat!("lumen-render v", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
