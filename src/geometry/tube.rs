//! Cross-section profiles and extrusion along curve frames.
//!
//! A profile blends between a rectangle and an ellipse, so the same sweep
//! produces both round tubes (helix, loop) and flat ribbons (sheet).

use std::f32::consts::TAU;

use glam::Vec3;

use super::spline::CurveFrame;
use super::{Mesh, MeshVertex};

/// Shape swept along a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossSection {
    /// Extent along the frame binormal.
    pub width: f32,
    /// Extent along the frame normal.
    pub thickness: f32,
    /// 0 = rectangle, 1 = ellipse.
    pub roundness: f32,
}

impl CrossSection {
    /// Round tube of the given radius.
    #[must_use]
    pub fn circle(radius: f32) -> Self {
        Self {
            width: radius * 2.0,
            thickness: radius * 2.0,
            roundness: 1.0,
        }
    }

    /// Flat ribbon.
    #[must_use]
    pub fn ribbon(width: f32, thickness: f32) -> Self {
        Self {
            width,
            thickness,
            roundness: 0.0,
        }
    }

    /// In-plane offset and outward normal of vertex `k` of `verts`.
    fn vertex(&self, frame: &CurveFrame, k: usize, verts: usize) -> (Vec3, Vec3) {
        let hw = self.width * 0.5;
        let ht = self.thickness * 0.5;
        let angle = (k as f32 / verts as f32) * TAU;
        let (sin_a, cos_a) = angle.sin_cos();

        // Blend between rectangular corner and elliptical position
        let rect_x = cos_a.signum() * hw;
        let rect_y = sin_a.signum() * ht;
        let x = rect_x + (cos_a * hw - rect_x) * self.roundness;
        let y = rect_y + (sin_a * ht - rect_y) * self.roundness;
        let offset = frame.binormal * x + frame.normal * y;

        // Surface normal from the elliptical gradient: (cos/hw, sin/ht).
        let grad = if hw > 0.0 && ht > 0.0 {
            frame.binormal * (cos_a / hw) + frame.normal * (sin_a / ht)
        } else {
            offset
        };
        let mut normal = grad.normalize_or_zero();
        if normal.dot(offset) < 0.0 {
            normal = -normal;
        }
        (offset, normal)
    }
}

/// Sweep `section` along `frames`, producing one ring of `radial_segments`
/// vertices per frame. Fewer than two frames or fewer than three radial
/// segments yield an empty mesh.
#[must_use]
pub fn extrude(
    frames: &[CurveFrame],
    section: &CrossSection,
    radial_segments: usize,
) -> Mesh {
    let mut mesh = Mesh::default();
    if frames.len() < 2 || radial_segments < 3 {
        return mesh;
    }
    mesh.vertices.reserve(frames.len() * radial_segments);
    for frame in frames {
        for k in 0..radial_segments {
            let (offset, normal) = section.vertex(frame, k, radial_segments);
            mesh.vertices.push(MeshVertex::new(frame.pos + offset, normal));
        }
    }
    mesh.stitch_rings(0, frames.len() as u32, radial_segments as u32);
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::spline::compute_frames;

    fn straight_frames(n: usize) -> Vec<CurveFrame> {
        let pts: Vec<Vec3> = (0..n).map(|i| Vec3::Z * i as f32).collect();
        compute_frames(&pts).unwrap()
    }

    #[test]
    fn circular_tube_is_round_with_radial_normals() {
        let frames = straight_frames(3);
        let mesh = extrude(&frames, &CrossSection::circle(0.6), 8);
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.triangle_count(), 2 * 8 * 2);
        for (i, v) in mesh.vertices.iter().enumerate() {
            let center = frames[i / 8].pos;
            let radial = Vec3::from(v.position) - center;
            assert!((radial.length() - 0.6).abs() < 1e-5);
            assert!(Vec3::from(v.normal).dot(radial.normalize()) > 0.9999);
        }
    }

    #[test]
    fn ribbon_is_flat() {
        let frames = straight_frames(2);
        let mesh = extrude(&frames, &CrossSection::ribbon(2.5, 0.3), 8);
        for (i, v) in mesh.vertices.iter().enumerate() {
            let f = frames[i / 8];
            let d = Vec3::from(v.position) - f.pos;
            assert!((d.dot(f.binormal).abs() - 1.25).abs() < 1e-5);
            assert!((d.dot(f.normal).abs() - 0.15).abs() < 1e-5);
        }
    }

    #[test]
    fn indices_stay_in_bounds() {
        let mesh = extrude(&straight_frames(5), &CrossSection::circle(1.0), 6);
        let n = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < n));
    }

    #[test]
    fn too_few_frames_is_empty() {
        let frames = straight_frames(2);
        assert!(extrude(&frames[..1], &CrossSection::circle(1.0), 8).is_empty());
        assert!(extrude(&frames, &CrossSection::circle(1.0), 2).is_empty());
    }
}
