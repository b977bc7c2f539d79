use crate::mat4::Mat4;
use crate::vec::Vec3;
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Magnitude at or below which [`Quat::normalize`] leaves the value alone.
const NORMALIZE_EPSILON: f32 = 0.0001;

/// Dot product above which [`slerp`] falls back to normalized lerp.
const SLERP_DOT_THRESHOLD: f32 = 0.9995;

/// Rotation quaternion `w + xi + yj + zk`.
///
/// Unit norm is expected but not enforced on construction: operations that
/// need it ([`Quat::to_rotation_matrix`], [`slerp`]) assume it, and callers
/// composing many quaternions should renormalize to keep drift in check.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Quat {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    /// `q = (cos(angle / 2), axis * sin(angle / 2))`.
    ///
    /// `axis` must already be unit length; a non-unit axis produces a
    /// quaternion that is not a pure rotation.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let (s, c) = (angle * 0.5).sin_cos();
        Self::new(c, axis.x * s, axis.y * s, axis.z * s)
    }

    /// Same rotation as [`Mat4::from_rotation_xyz`]: `q_yaw * q_pitch * q_roll`
    /// with `angles = (pitch, yaw, roll)` in radians.
    pub fn from_euler(angles: Vec3) -> Self {
        Self::from_axis_angle(Vec3::Y, angles.y)
            * Self::from_axis_angle(Vec3::X, angles.x)
            * Self::from_axis_angle(Vec3::Z, angles.z)
    }

    pub fn dot(self, other: Self) -> f32 {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn magnitude(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Normalizes in place unless the magnitude is at or below `1e-4`, in
    /// which case the quaternion is left unchanged.
    pub fn normalize(&mut self) {
        let mag = self.magnitude();
        if mag > NORMALIZE_EPSILON {
            let inv = 1.0 / mag;
            *self *= inv;
        }
    }

    pub fn normalized(self) -> Self {
        let mut q = self;
        q.normalize();
        q
    }

    pub fn conjugate(self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Conjugate, renormalized. For unit quaternions this equals the
    /// conjugate; the normalize absorbs accumulated drift.
    pub fn inverse(self) -> Self {
        self.conjugate().normalized()
    }

    /// Rotates `v` by this (unit) quaternion: `q * (0, v) * q^-1`.
    pub fn rotate_vector(self, v: Vec3) -> Vec3 {
        let p = Self::new(0.0, v.x, v.y, v.z);
        let r = self * p * self.conjugate();
        Vec3::new(r.x, r.y, r.z)
    }

    /// Column-major rotation matrix.
    ///
    /// Requires a unit quaternion; the result is not a rotation otherwise.
    /// Signs agree with the axis factories, so
    /// `from_axis_angle(Vec3::X, a).to_rotation_matrix()` equals
    /// `Mat4::from_rotation_x(a)` up to rounding.
    pub fn to_rotation_matrix(self) -> Mat4 {
        let Self { w, x, y, z } = self;
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);

        Mat4::from_cols_array([
            1.0 - 2.0 * (yy + zz),
            2.0 * (xy + wz),
            2.0 * (xz - wy),
            0.0,
            2.0 * (xy - wz),
            1.0 - 2.0 * (xx + zz),
            2.0 * (yz + wx),
            0.0,
            2.0 * (xz + wy),
            2.0 * (yz - wx),
            1.0 - 2.0 * (xx + yy),
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }

    /// Method form of [`slerp`].
    pub fn slerp(self, end: Self, t: f32) -> Self {
        slerp(self, end, t)
    }
}

/// Shortest-path spherical interpolation between unit quaternions.
///
/// - A negative dot product flips `q1`: `q` and `-q` are the same rotation,
///   and interpolating toward the wrong sign takes the long way around.
/// - Above a dot of `0.9995` the arc is nearly flat and `sin(theta_0)` is
///   close to zero, so the result is a normalized lerp instead.
///
/// `t` is not clamped; values outside `[0, 1]` extrapolate.
pub fn slerp(q0: Quat, mut q1: Quat, t: f32) -> Quat {
    let mut d = q0.dot(q1);
    if d < 0.0 {
        q1 = -q1;
        d = -d;
    }

    if d > SLERP_DOT_THRESHOLD {
        return (q0 + (q1 - q0) * t).normalized();
    }

    let theta_0 = d.acos();
    let theta = theta_0 * t;
    let (sin_theta, cos_theta) = theta.sin_cos();
    let sin_theta_0 = theta_0.sin();

    let s0 = cos_theta - d * sin_theta / sin_theta_0;
    let s1 = sin_theta / sin_theta_0;
    q0 * s0 + q1 * s1
}

/// Hamilton product.
///
/// Non-commutative: `(a * b).to_rotation_matrix()` equals
/// `a.to_rotation_matrix() * b.to_rotation_matrix()`, so swapping the
/// operands changes the composed rotation.
impl Mul for Quat {
    type Output = Self;
    fn mul(self, q: Self) -> Self {
        let p = self;
        Self::new(
            p.w * q.w - p.x * q.x - p.y * q.y - p.z * q.z,
            p.w * q.x + p.x * q.w + p.y * q.z - p.z * q.y,
            p.w * q.y - p.x * q.z + p.y * q.w + p.z * q.x,
            p.w * q.z + p.x * q.y - p.y * q.x + p.z * q.w,
        )
    }
}

impl Mul<f32> for Quat {
    type Output = Self;
    fn mul(self, s: f32) -> Self {
        Self::new(self.w * s, self.x * s, self.y * s, self.z * s)
    }
}

impl Mul<Quat> for f32 {
    type Output = Quat;
    fn mul(self, q: Quat) -> Quat {
        q * self
    }
}

impl MulAssign<f32> for Quat {
    fn mul_assign(&mut self, s: f32) {
        *self = *self * s;
    }
}

impl Add for Quat {
    type Output = Self;
    fn add(self, q: Self) -> Self {
        Self::new(self.w + q.w, self.x + q.x, self.y + q.y, self.z + q.z)
    }
}

impl AddAssign for Quat {
    fn add_assign(&mut self, q: Self) {
        *self = *self + q;
    }
}

impl Sub for Quat {
    type Output = Self;
    fn sub(self, q: Self) -> Self {
        Self::new(self.w - q.w, self.x - q.x, self.y - q.y, self.z - q.z)
    }
}

impl SubAssign for Quat {
    fn sub_assign(&mut self, q: Self) {
        *self = *self - q;
    }
}

impl Neg for Quat {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quat(w:{}, x:{}, y:{}, z:{})", self.w, self.x, self.y, self.z)
    }
}
