use lumen_math::Vec3;
use serde::{Deserialize, Serialize};

/// Light source category. The discriminant is the value the shader reads
/// from `lights[i].type`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightKind {
    #[default]
    Point = 0,
    Directional = 1,
    Spot = 2,
    Area = 3,
}

impl LightKind {
    pub fn shader_index(self) -> i32 {
        self as i32
    }
}

/// Light parameters. Position and orientation come from the owning entity.
///
/// Cone angles are in degrees and always satisfy
/// `0 <= inner_angle <= outer_angle <= 90`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "LightParams")]
pub struct Light {
    pub kind: LightKind,
    pub enabled: bool,
    pub color: Vec3,
    pub intensity: f32,
    pub range: f32,
    inner_angle: f32,
    outer_angle: f32,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            kind: LightKind::Point,
            enabled: true,
            color: Vec3::ONE,
            intensity: 1.0,
            range: 10.0,
            inner_angle: 15.0,
            outer_angle: 30.0,
        }
    }
}

impl Light {
    pub fn new(kind: LightKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn inner_angle(&self) -> f32 {
        self.inner_angle
    }

    pub fn outer_angle(&self) -> f32 {
        self.outer_angle
    }

    /// Set the spot cone. `outer` is clamped to `[0, 90]`, then `inner` to
    /// `[0, outer]`.
    pub fn set_cone(&mut self, inner: f32, outer: f32) {
        self.outer_angle = outer.clamp(0.0, 90.0);
        self.inner_angle = inner.clamp(0.0, self.outer_angle);
    }
}

/// Unit forward vector for an Euler rotation in radians, reading pitch from
/// `x` and yaw from `y`. Roll does not affect a light's direction.
pub fn forward_from_rotation(rotation: Vec3) -> Vec3 {
    let (pitch, yaw) = (rotation.x, rotation.y);
    Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalized()
}

#[derive(Deserialize)]
#[serde(default)]
struct LightParams {
    kind: LightKind,
    enabled: bool,
    color: Vec3,
    intensity: f32,
    range: f32,
    inner_angle: f32,
    outer_angle: f32,
}

impl Default for LightParams {
    fn default() -> Self {
        let l = Light::default();
        Self {
            kind: l.kind,
            enabled: l.enabled,
            color: l.color,
            intensity: l.intensity,
            range: l.range,
            inner_angle: l.inner_angle,
            outer_angle: l.outer_angle,
        }
    }
}

impl From<LightParams> for Light {
    fn from(p: LightParams) -> Self {
        let mut light = Light {
            kind: p.kind,
            enabled: p.enabled,
            color: p.color,
            intensity: p.intensity,
            range: p.range,
            ..Light::default()
        };
        light.set_cone(p.inner_angle, p.outer_angle);
        light
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_math::deg_to_rad;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).magnitude() < 1e-5
    }

    #[test]
    fn defaults() {
        let l = Light::default();
        assert_eq!(l.kind, LightKind::Point);
        assert!(l.enabled);
        assert_eq!(l.color, Vec3::ONE);
        assert_eq!(l.range, 10.0);
        assert_eq!((l.inner_angle(), l.outer_angle()), (15.0, 30.0));
    }

    #[test]
    fn cone_stays_ordered() {
        let mut l = Light::new(LightKind::Spot);
        l.set_cone(40.0, 20.0);
        assert_eq!((l.inner_angle(), l.outer_angle()), (20.0, 20.0));
        l.set_cone(-5.0, 120.0);
        assert_eq!((l.inner_angle(), l.outer_angle()), (0.0, 90.0));
    }

    #[test]
    fn forward_direction_follows_pitch_and_yaw() {
        assert!(close(forward_from_rotation(Vec3::ZERO), Vec3::X));
        let yawed = Vec3::new(0.0, deg_to_rad(90.0), 0.0);
        assert!(close(forward_from_rotation(yawed), Vec3::Z));
        let pitched = Vec3::new(deg_to_rad(90.0), 0.0, 0.0);
        assert!(close(forward_from_rotation(pitched), Vec3::Y));
        let rolled = Vec3::new(0.0, 0.0, 1.3);
        assert!(close(forward_from_rotation(rolled), Vec3::X));
    }

    #[test]
    fn shader_indices() {
        assert_eq!(LightKind::Point.shader_index(), 0);
        assert_eq!(LightKind::Directional.shader_index(), 1);
        assert_eq!(LightKind::Spot.shader_index(), 2);
        assert_eq!(LightKind::Area.shader_index(), 3);
    }
}
