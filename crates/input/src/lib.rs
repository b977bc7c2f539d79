//! Input: raw key and mouse events mapped to camera actions.
//!
//! # Invariants
//! - The camera consumes [`Action`]s, never raw events.
//! - Mouse-look and zoom only produce actions while the cursor is captured.
//! - The first cursor sample after capture yields no look delta.

pub mod action;
mod controller;
mod keys;
mod mouse;

pub use action::{Action, apply};
pub use controller::InputController;
pub use keys::{InputState, Key, KeyBindings};
pub use mouse::{CursorMode, MouseTracker};
