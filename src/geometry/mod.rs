//! Renderable geometry derived from structural records.
//!
//! Everything here is a pure function of its inputs: curves and swept
//! meshes for the cartoon view, sphere and cylinder instances for atom
//! views, and the placeholder surface. Output types are `#[repr(C)]`
//! [`bytemuck::Pod`] so an embedding renderer can upload them directly.

pub mod atoms;
pub mod bond;
pub mod cartoon;
pub mod molecule;
pub mod sphere;
pub mod spline;
pub mod surface;
pub mod tube;

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// A mesh vertex: position and unit normal.
#[repr(C)]
#[derive(
    Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize, Deserialize,
)]
pub struct MeshVertex {
    /// Position.
    pub position: [f32; 3],
    /// Unit surface normal.
    pub normal: [f32; 3],
}

impl MeshVertex {
    /// Vertex from glam vectors.
    #[must_use]
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.into(),
            normal: normal.into(),
        }
    }
}

/// Indexed triangle mesh.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Vertex buffer.
    pub vertices: Vec<MeshVertex>,
    /// Triangle list, three indices per triangle.
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Whether the mesh has no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Raw vertex bytes for GPU upload.
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw index bytes for GPU upload.
    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Axis-aligned bounds, `None` for an empty vertex buffer.
    #[must_use]
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut iter = self.vertices.iter().map(|v| Vec3::from(v.position));
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }

    /// Connect consecutive rings of `ring_size` vertices, starting at
    /// vertex `base`, into a closed-around, open-ended tube surface.
    pub(crate) fn stitch_rings(&mut self, base: u32, rings: u32, ring_size: u32) {
        for i in 0..rings.saturating_sub(1) {
            for k in 0..ring_size {
                let k1 = (k + 1) % ring_size;
                let a = base + i * ring_size + k;
                let b = base + i * ring_size + k1;
                let c = base + (i + 1) * ring_size + k;
                let d = base + (i + 1) * ring_size + k1;
                self.indices.extend_from_slice(&[a, c, b, b, c, d]);
            }
        }
    }
}

/// One instanced sphere.
#[repr(C)]
#[derive(
    Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize, Deserialize,
)]
pub struct SphereInstance {
    /// xyz = position, w = radius
    pub center: [f32; 4],
    /// xyz = RGB color, w = opacity
    pub color: [f32; 4],
}

impl SphereInstance {
    /// Opaque sphere.
    #[must_use]
    pub fn new(position: Vec3, radius: f32, color: Color) -> Self {
        let [r, g, b] = color.to_unit();
        Self {
            center: [position.x, position.y, position.z, radius],
            color: [r, g, b, 1.0],
        }
    }

    /// Sphere center.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.center[0], self.center[1], self.center[2])
    }

    /// Sphere radius.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.center[3]
    }
}

/// One instanced cylinder, placed the way a unit Y-aligned cylinder mesh
/// is transformed: translate to the midpoint, rotate, scale Y by length.
#[repr(C)]
#[derive(
    Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize, Deserialize,
)]
pub struct CylinderInstance {
    /// xyz = midpoint, w = length
    pub position: [f32; 4],
    /// Orientation quaternion (x, y, z, w).
    pub rotation: [f32; 4],
    /// xyz = RGB color, w = radius
    pub color: [f32; 4],
}
