use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// 2D vector, used for texture coordinates.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}

/// 3D vector.
///
/// Positions, directions, scales and RGB colors all share this type; the
/// calling context decides what the components mean. Equality is exact
/// floating-point comparison, callers wanting a tolerance compare the
/// components themselves.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    /// Unit vector along +X.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit vector along +Y. Default world-up for cameras.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit vector along +Z.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product: `X.cross(Y) == Z`.
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn magnitude(self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    /// Squared length; cheaper than [`Vec3::magnitude`] for comparisons.
    pub fn magnitude_squared(self) -> f32 {
        self.dot(self)
    }

    /// Normalizes in place. A zero-length vector stays zero.
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Returns the unit vector in the same direction, or [`Vec3::ZERO`] when
    /// the magnitude is zero so that no NaN reaches downstream transforms.
    pub fn normalized(self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            self / mag
        } else {
            Self::ZERO
        }
    }
}

/// Free-function form of [`Vec3::dot`].
pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a.dot(b)
}

/// Free-function form of [`Vec3::cross`].
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    a.cross(b)
}

impl From<[f32; 3]> for Vec3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self { x, y, z }
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Vec3 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    fn samples() -> Vec<Vec3> {
        vec![
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-4.5, 0.25, 7.0),
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(1e-3, 5e3, -2.0),
        ]
    }

    #[test]
    fn normalized_has_unit_length() {
        for v in samples() {
            assert!((v.normalized().magnitude() - 1.0).abs() < 1e-5, "{v}");
        }
    }

    #[test]
    fn normalizing_zero_yields_zero() {
        assert_eq!(Vec3::ZERO.normalized(), Vec3::ZERO);
        let mut v = Vec3::ZERO;
        v.normalize();
        assert_eq!(v, Vec3::ZERO);
        assert!(!v.x.is_nan());
    }

    #[test]
    fn normalize_in_place_matches_normalized() {
        let mut v = Vec3::new(3.0, 0.0, 4.0);
        v.normalize();
        assert_eq!(v, Vec3::new(0.6, 0.0, 0.8));
    }

    #[test]
    fn dot_is_symmetric() {
        for a in samples() {
            for b in samples() {
                assert_eq!(dot(a, b), dot(b, a));
            }
        }
    }

    #[test]
    fn cross_is_anticommutative() {
        for a in samples() {
            for b in samples() {
                assert_eq!(cross(a, b), -cross(b, a));
            }
            assert_eq!(cross(a, a), Vec3::ZERO);
        }
    }

    #[test]
    fn cross_is_right_handed() {
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
        assert_eq!(Vec3::Z.cross(Vec3::X), Vec3::Y);
    }

    #[test]
    fn magnitude_squared_skips_sqrt() {
        let v = Vec3::new(2.0, 3.0, 6.0);
        assert_eq!(v.magnitude_squared(), 49.0);
        assert!((v.magnitude() - 7.0).abs() < EPS);
    }

    #[test]
    fn scalar_multiply_commutes() {
        let v = Vec3::new(1.0, -2.0, 0.5);
        assert_eq!(v * 3.0, 3.0 * v);
        assert_eq!(v * 3.0 / 3.0, v);
    }

    #[test]
    fn compound_assignment() {
        let mut v = Vec3::new(1.0, 1.0, 1.0);
        v += Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v, Vec3::new(2.0, 3.0, 4.0));
        v -= Vec3::ONE;
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
        v *= 2.0;
        assert_eq!(v, Vec3::new(2.0, 4.0, 6.0));
        v /= 2.0;
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn display_format() {
        assert_eq!(Vec3::new(1.0, -2.5, 0.0).to_string(), "(1, -2.5, 0)");
    }

    #[test]
    fn vec2_equality_is_exact() {
        assert_eq!(Vec2::new(0.5, 1.0), Vec2::from([0.5, 1.0]));
        assert_ne!(Vec2::new(0.5, 1.0), Vec2::new(0.5, 1.0 + 1e-6));
    }

    #[test]
    fn layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vec3>(), 12);
        assert_eq!(bytemuck::cast::<Vec3, [f32; 3]>(Vec3::new(1.0, 2.0, 3.0)), [1.0, 2.0, 3.0]);
    }
}
