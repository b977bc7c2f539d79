//! Shared types used across the lumen crates.

pub mod types;

pub use types::{EntityId, Transform};
