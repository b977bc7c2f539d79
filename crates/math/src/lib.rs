//! Linear algebra core: vectors, column-major 4x4 matrices, quaternions.
//!
//! # Invariants
//! - Right-handed coordinate system; cameras look down `-Z`.
//! - `Mat4` is stored column-major (`m[col * 4 + row]`) and uploads to a GPU
//!   uniform without reordering.
//! - Ill-conditioned inputs degrade instead of failing: normalizing a zero
//!   vector yields zero, a near-zero quaternion is left unchanged.
//! - Matrix composition is right-to-left: `T * R * S` scales first.

mod mat4;
mod quat;
mod vec;

pub use mat4::Mat4;
pub use quat::{Quat, slerp};
pub use vec::{Vec2, Vec3, cross, dot};

/// Single-precision pi, as used by every angle conversion in the engine.
pub const PI: f32 = std::f32::consts::PI;

/// Converts an angle in degrees to radians.
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * PI / 180.0
}

/// Converts an angle in radians to degrees.
pub fn rad_to_deg(radians: f32) -> f32 {
    radians * 180.0 / PI
}
