//! Developer tooling: scene inspector and the live-edit surface a property
//! panel drives.
//!
//! # Invariants
//! - Inspection is read-only.
//! - Edits go through the scene's own setters, so clamps and camera sync
//!   apply exactly as they do for gameplay input.

mod inspector;

pub use inspector::{EditError, EntityDetail, EntityInfo, SceneInspector, SceneSummary};

pub fn crate_info() -> &'static str {
    concat!("lumen-tools v", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("tools"));
    }
}
