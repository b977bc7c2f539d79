use crate::vec::Vec3;
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;

/// Column-major 4x4 homogeneous transform.
///
/// Element `(row, col)` lives at `data[col * 4 + row]`, so the translation of
/// an affine transform occupies `data[12..15]` and the whole matrix uploads
/// to a GPU uniform as-is (`bytemuck::bytes_of(&m)` is 64 bytes).
///
/// The affine factories keep the last row at `[0, 0, 0, 1]`.
/// [`Mat4::perspective`] deliberately writes `[0, 0, -1, 0]` there to carry
/// the perspective divide.
///
/// ```
/// use lumen_math::{Mat4, Vec3};
/// let t = Mat4::from_translation(Vec3::new(5.0, -3.0, 2.0));
/// assert_eq!(t * Vec3::new(2.0, 4.0, -1.0), Vec3::new(7.0, 1.0, 1.0));
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Mat4 {
    data: [f32; 16],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self::from_cols_array([
        1.0, 0.0, 0.0, 0.0, // col 0
        0.0, 1.0, 0.0, 0.0, // col 1
        0.0, 0.0, 1.0, 0.0, // col 2
        0.0, 0.0, 0.0, 1.0, // col 3
    ]);

    /// Wraps 16 floats already laid out column-major.
    pub const fn from_cols_array(data: [f32; 16]) -> Self {
        Self { data }
    }

    /// The 16 floats in column-major order, ready for upload.
    pub fn to_array(self) -> [f32; 16] {
        self.data
    }

    pub fn as_cols_array(&self) -> &[f32; 16] {
        &self.data
    }

    /// Element at `row`, `col` (both `0..4`).
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[col * 4 + row]
    }

    /// Column `col` as `[x, y, z, w]`.
    pub fn col(&self, col: usize) -> [f32; 4] {
        let base = col * 4;
        [
            self.data[base],
            self.data[base + 1],
            self.data[base + 2],
            self.data[base + 3],
        ]
    }

    /// Places `t` in the translation column of the identity.
    pub fn from_translation(t: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.data[12] = t.x;
        m.data[13] = t.y;
        m.data[14] = t.z;
        m
    }

    /// Places `s` on the diagonal of the identity.
    pub fn from_scale(s: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.data[0] = s.x;
        m.data[5] = s.y;
        m.data[10] = s.z;
        m
    }

    /// Right-hand-rule rotation about +X by `angle` radians.
    pub fn from_rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Self::IDENTITY;
        m.data[5] = c;
        m.data[6] = s;
        m.data[9] = -s;
        m.data[10] = c;
        m
    }

    /// Right-hand-rule rotation about +Y by `angle` radians.
    pub fn from_rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Self::IDENTITY;
        m.data[0] = c;
        m.data[2] = -s;
        m.data[8] = s;
        m.data[10] = c;
        m
    }

    /// Right-hand-rule rotation about +Z by `angle` radians.
    pub fn from_rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Self::IDENTITY;
        m.data[0] = c;
        m.data[1] = s;
        m.data[4] = -s;
        m.data[5] = c;
        m
    }

    /// Tait-Bryan rotation from `angles = (pitch, yaw, roll)` in radians.
    ///
    /// Ordering: `R = R_y(yaw) * R_x(pitch) * R_z(roll)`. Roll is applied
    /// first and yaw last, which keeps yaw-first camera controls free of
    /// gimbal lock until pitch reaches +-90 degrees. Changing this order
    /// changes every rotated model in a scene.
    pub fn from_rotation_xyz(angles: Vec3) -> Self {
        Self::from_rotation_y(angles.y)
            * Self::from_rotation_x(angles.x)
            * Self::from_rotation_z(angles.z)
    }

    /// Right-handed view matrix looking from `eye` toward `target`.
    ///
    /// Basis:
    /// - `z = normalize(eye - target)`: the camera looks down `-z`
    /// - `x = normalize(cross(up, z))`
    /// - `y = cross(z, x)`, already unit length
    ///
    /// The rows of the upper 3x3 are `x`, `y`, `z` (the transpose of the
    /// camera basis) and the translation column is `-R * eye`, so `eye`
    /// itself maps to the view-space origin.
    #[rustfmt::skip]
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let z = (eye - target).normalized();
        let x = up.cross(z).normalized();
        let y = z.cross(x);

        Self::from_cols_array([
            x.x, y.x, z.x, 0.0,
            x.y, y.y, z.y, 0.0,
            x.z, y.z, z.z, 0.0,
            -x.dot(eye), -y.dot(eye), -z.dot(eye), 1.0,
        ])
    }

    /// OpenGL-convention perspective projection.
    ///
    /// Maps view-space depth in `[-near, -far]` to clip-space `[-1, 1]`
    /// with `f = cot(fov_y / 2)`. The caller must guarantee `far > near`;
    /// `far == near` divides by zero (asserted in debug builds only).
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        debug_assert!(far != near, "perspective: far plane equals near plane");
        let f = 1.0 / (fov_y / 2.0).tan();
        let depth = near - far;

        let mut data = [0.0; 16];
        data[0] = f / aspect;
        data[5] = f;
        data[10] = (far + near) / depth;
        data[11] = -1.0;
        data[14] = (2.0 * far * near) / depth;
        Self::from_cols_array(data)
    }

    pub fn transpose(&self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                out[row * 4 + col] = self.get(row, col);
            }
        }
        Self::from_cols_array(out)
    }

    /// `self * rhs`: applies `rhs` first, then `self`.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 16];
        for col in 0..4 {
            for row in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.get(row, k) * rhs.get(k, col);
                }
                out[col * 4 + row] = sum;
            }
        }
        Self::from_cols_array(out)
    }

    /// Transforms a point (implicit `w = 1`).
    ///
    /// No perspective divide is performed: with a projection matrix the
    /// result is only the `x, y, z` numerator. See [`Mat4::project_point`].
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let d = &self.data;
        Vec3::new(
            d[0] * p.x + d[4] * p.y + d[8] * p.z + d[12],
            d[1] * p.x + d[5] * p.y + d[9] * p.z + d[13],
            d[2] * p.x + d[6] * p.y + d[10] * p.z + d[14],
        )
    }

    /// Transforms a direction (implicit `w = 0`); translation is ignored.
    pub fn transform_direction(&self, v: Vec3) -> Vec3 {
        let d = &self.data;
        Vec3::new(
            d[0] * v.x + d[4] * v.y + d[8] * v.z,
            d[1] * v.x + d[5] * v.y + d[9] * v.z,
            d[2] * v.x + d[6] * v.y + d[10] * v.z,
        )
    }

    /// Transforms a point and divides by the resulting `w`.
    ///
    /// Points on the camera plane (`w == 0`) produce non-finite components.
    pub fn project_point(&self, p: Vec3) -> Vec3 {
        let d = &self.data;
        let w = d[3] * p.x + d[7] * p.y + d[11] * p.z + d[15];
        self.transform_point(p) / w
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(data: [f32; 16]) -> Self {
        Self::from_cols_array(data)
    }
}

impl Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl Mul<Vec3> for Mat4 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.transform_point(rhs)
    }
}

/// Prints the matrix in math order (one row per line).
impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            if row > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "[ {:7.2} {:7.2} {:7.2} {:7.2} ]",
                self.get(row, 0),
                self.get(row, 1),
                self.get(row, 2),
                self.get(row, 3)
            )?;
        }
        Ok(())
    }
}
