use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::options::CameraOptions;

/// Perspective camera looking at a fixed target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Closest allowed eye-to-target distance.
    pub min_distance: f32,
    /// Farthest allowed eye-to-target distance.
    pub max_distance: f32,
}

impl Camera {
    /// Camera at the configured position, looking at the origin.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        Self {
            eye: Vec3::from_array(options.position),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fovy: options.fovy,
            znear: 0.1,
            zfar: 1000.0,
            min_distance: options.min_distance,
            max_distance: options.max_distance,
        }
    }

    /// Eye-to-target distance.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.eye.distance(self.target)
    }

    /// Scale the eye-to-target distance by `factor`, clamped to the allowed
    /// range. Direction is kept.
    pub fn zoom(&mut self, factor: f32) {
        let offset = self.eye - self.target;
        let Some(dir) = offset.try_normalize() else {
            return;
        };
        let distance = (offset.length() * factor)
            .clamp(self.min_distance, self.max_distance);
        self.eye = self.target + dir * distance;
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self, aspect: f32) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        // [0,1] depth range
        let proj = Mat4::perspective_rh(
            self.fovy.to_radians(),
            aspect,
            self.znear,
            self.zfar,
        );
        proj * view
    }

    /// Uniform block for a renderer with the given viewport aspect.
    #[must_use]
    pub fn uniform(&self, aspect: f32) -> CameraUniform {
        CameraUniform {
            view_proj: self.build_matrix(aspect).to_cols_array_2d(),
            position: self.eye.to_array(),
            aspect,
            forward: (self.target - self.eye).normalize_or_zero().to_array(),
            fovy: self.fovy,
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_options(&CameraOptions::default())
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_the_z_axis() {
        let cam = Camera::default();
        assert_eq!(cam.eye, Vec3::new(0.0, 0.0, 100.0));
        assert_eq!(cam.fovy, 50.0);
        assert_eq!(cam.distance(), 100.0);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut cam = Camera::default();
        cam.zoom(0.8);
        assert!((cam.distance() - 80.0).abs() < 1e-4);
        for _ in 0..50 {
            cam.zoom(0.8);
        }
        assert!((cam.distance() - 10.0).abs() < 1e-4);
        cam.zoom(1000.0);
        assert!((cam.distance() - 500.0).abs() < 1e-3);
        assert!(cam.eye.x.abs() < 1e-6 && cam.eye.z > 0.0);
    }

    #[test]
    fn uniform_looks_down_negative_z() {
        let u = Camera::default().uniform(1.5);
        assert_eq!(u.forward, [0.0, 0.0, -1.0]);
        assert_eq!(u.position, [0.0, 0.0, 100.0]);
        assert_eq!(size_of::<CameraUniform>(), 96);
    }
}
