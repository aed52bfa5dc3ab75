//! Cylinder placement between two bonded atoms.

use std::f32::consts::FRAC_PI_2;

use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::CylinderInstance;
use crate::color::Color;

/// Position, length and orientation of a bond cylinder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BondTransform {
    /// Midpoint of the two endpoints.
    pub midpoint: Vec3,
    /// Distance between the endpoints.
    pub length: f32,
    /// Unit vector from start to end (zero for coincident endpoints).
    pub direction: Vec3,
    /// XYZ Euler angles: a quarter turn about X, then `atan2(dz, dx)`
    /// about Z.
    pub euler: [f32; 3],
}

impl BondTransform {
    /// Transform for a cylinder spanning `start` → `end`.
    ///
    /// The Euler rotation is the simplified alignment used by the bond
    /// views. It is exact for bonds lying in the XZ plane only; use
    /// [`Self::aligned_rotation`] when the general case matters.
    #[must_use]
    pub fn between(start: Vec3, end: Vec3) -> Self {
        let delta = end - start;
        let direction = delta.normalize_or_zero();
        Self {
            midpoint: (start + end) * 0.5,
            length: delta.length(),
            direction,
            euler: [FRAC_PI_2, 0.0, direction.z.atan2(direction.x)],
        }
    }

    /// The simplified Euler rotation as a quaternion.
    #[must_use]
    pub fn quat(&self) -> Quat {
        let [x, y, z] = self.euler;
        Quat::from_euler(EulerRot::XYZ, x, y, z)
    }

    /// Shortest-arc rotation taking the cylinder's +Y axis onto the bond
    /// direction. Identity for coincident endpoints.
    #[must_use]
    pub fn aligned_rotation(&self) -> Quat {
        if self.direction == Vec3::ZERO {
            return Quat::IDENTITY;
        }
        Quat::from_rotation_arc(Vec3::Y, self.direction)
    }

    /// GPU instance for this bond with the simplified rotation.
    #[must_use]
    pub fn to_instance(&self, radius: f32, color: Color) -> CylinderInstance {
        let [r, g, b] = color.to_unit();
        let m = self.midpoint;
        CylinderInstance {
            position: [m.x, m.y, m.z, self.length],
            rotation: self.quat().to_array(),
            color: [r, g, b, radius],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_and_length() {
        let t = BondTransform::between(Vec3::ZERO, Vec3::new(3.0, 0.0, 4.0));
        assert_eq!(t.midpoint, Vec3::new(1.5, 0.0, 2.0));
        assert!((t.length - 5.0).abs() < 1e-6);
        assert!((t.direction.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn euler_follows_xz_heading() {
        let t = BondTransform::between(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0));
        assert!((t.euler[0] - FRAC_PI_2).abs() < 1e-6);
        assert_eq!(t.euler[1], 0.0);
        assert!((t.euler[2] - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn coincident_endpoints_are_harmless() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        let t = BondTransform::between(p, p);
        assert_eq!(t.length, 0.0);
        assert_eq!(t.direction, Vec3::ZERO);
        assert_eq!(t.aligned_rotation(), Quat::IDENTITY);
        assert!(t.quat().is_finite());
    }

    #[test]
    fn aligned_rotation_maps_y_onto_bond() {
        let dirs = [
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(-2.0, 0.5, 0.1),
        ];
        for d in dirs {
            let t = BondTransform::between(Vec3::ONE, Vec3::ONE + d);
            let mapped = t.aligned_rotation() * Vec3::Y;
            assert!(mapped.distance(d.normalize()) < 1e-5, "{d:?}");
        }
    }

    #[test]
    fn instance_packs_length_and_radius() {
        let t = BondTransform::between(Vec3::ZERO, Vec3::X * 2.0);
        let inst = t.to_instance(0.1, Color::hex(0xCCCCCC));
        assert_eq!(inst.position, [1.0, 0.0, 0.0, 2.0]);
        assert_eq!(inst.color[3], 0.1);
        let q = Quat::from_array(inst.rotation);
        assert!((q.length() - 1.0).abs() < 1e-5);
    }
}
