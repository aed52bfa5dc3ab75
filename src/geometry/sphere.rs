//! UV sphere tessellation.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use super::{Mesh, MeshVertex};

/// UV sphere centered on `center` with `width_segments` around and
/// `height_segments` pole to pole. Segment counts are raised to at least
/// 3 and 2 respectively.
#[must_use]
pub fn uv_sphere(
    center: Vec3,
    radius: f32,
    width_segments: u32,
    height_segments: u32,
) -> Mesh {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut mesh = Mesh::default();
    mesh.vertices.reserve(((ws + 1) * (hs + 1)) as usize);

    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        let (sin_t, cos_t) = (v * PI).sin_cos();
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let (sin_p, cos_p) = (u * TAU).sin_cos();
            let normal = Vec3::new(-cos_p * sin_t, cos_t, sin_p * sin_t);
            mesh.vertices
                .push(MeshVertex::new(center + normal * radius, normal));
        }
    }

    let row = ws + 1;
    for iy in 0..hs {
        for ix in 0..ws {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            if iy != 0 {
                mesh.indices.extend_from_slice(&[a, b, d]);
            }
            if iy != hs - 1 {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertices_lie_on_the_sphere() {
        let center = Vec3::new(1.0, -2.0, 3.0);
        let mesh = uv_sphere(center, 20.0, 16, 12);
        assert_eq!(mesh.vertices.len(), 17 * 13);
        for v in &mesh.vertices {
            let d = Vec3::from(v.position).distance(center);
            assert!((d - 20.0).abs() < 1e-3);
            assert!((Vec3::from(v.normal).length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn pole_rows_emit_single_triangles() {
        let mesh = uv_sphere(Vec3::ZERO, 1.0, 8, 4);
        // Two pole rows of 8 plus two middle rows of 16.
        assert_eq!(mesh.triangle_count(), 8 + 8 + 16 + 16);
        let n = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < n));
    }

    #[test]
    fn tiny_segment_counts_are_raised() {
        let mesh = uv_sphere(Vec3::ZERO, 1.0, 0, 0);
        assert_eq!(mesh.vertices.len(), 4 * 3);
        assert!(!mesh.is_empty());
    }
}
