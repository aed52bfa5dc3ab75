//! Cartoon geometry: one swept mesh per secondary-structure segment.
//!
//! Helices are synthesized spirals between the first and last reference
//! atoms; sheets and loops follow a smooth curve through every reference
//! atom of the segment. Segments that cannot produce a curve (missing
//! reference atoms, fewer than two points, zero length) yield `None`.

use std::f32::consts::TAU;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::spline::{compute_frames, smooth_curve};
use super::tube::{extrude, CrossSection};
use super::Mesh;
use crate::color::Color;
use crate::options::GeometryOptions;
use crate::secondary_structure::{SSType, Segment};

/// A swept cartoon piece for one segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartoonPiece {
    /// Segment class.
    pub ss: SSType,
    /// Owning chain.
    pub chain_id: String,
    /// Number of residues in the segment.
    pub residue_count: usize,
    /// Flat color for the whole piece.
    pub color: Color,
    /// Centerline the mesh was swept along.
    pub curve: Vec<Vec3>,
    /// Swept mesh.
    pub mesh: Mesh,
}

/// Spiral from `start` to `end` for an `n_residues` helix.
///
/// The axis is the straight line between the endpoints; the offset rotates
/// in the XY plane through `n_residues / residues_per_turn` full turns.
/// The curve has `n_residues × samples_per_residue + 1` points.
#[must_use]
pub fn helix_curve(
    start: Vec3,
    end: Vec3,
    n_residues: usize,
    geo: &GeometryOptions,
) -> Vec<Vec3> {
    let segments =
        (n_residues * geo.helix_samples_per_residue as usize).max(1);
    let turns = n_residues as f32 / geo.residues_per_turn;
    let direction = end - start;
    (0..=segments)
        .map(|i| {
            let t = i as f32 / segments as f32;
            let (sin_a, cos_a) = (t * TAU * turns).sin_cos();
            start
                + direction * t
                + Vec3::new(cos_a, sin_a, 0.0) * geo.helix_radius
        })
        .collect()
}

/// Reference-atom positions of every residue in the segment that has one.
#[must_use]
pub fn reference_points(segment: &Segment<'_>, geo: &GeometryOptions) -> Vec<Vec3> {
    segment
        .residues
        .iter()
        .filter_map(|r| r.atom_position(&geo.reference_atom))
        .collect()
}

/// Sweep `section` along a smooth curve through `control`.
fn sweep(
    control: &[Vec3],
    section: &CrossSection,
    geo: &GeometryOptions,
) -> Option<(Vec<Vec3>, Mesh)> {
    let curve = smooth_curve(control, geo.tubular_segments as usize)?;
    let frames = compute_frames(&curve)?;
    let mesh = extrude(&frames, section, geo.radial_segments as usize);
    (!mesh.is_empty()).then_some((curve, mesh))
}

/// Helix tube, or `None` when either end residue lacks a reference atom.
#[must_use]
pub fn build_helix(
    segment: &Segment<'_>,
    geo: &GeometryOptions,
) -> Option<(Vec<Vec3>, Mesh)> {
    let reference = geo.reference_atom.as_str();
    let start = segment.residues.first()?.atom_position(reference)?;
    let end = segment.residues.last()?.atom_position(reference)?;
    let spiral = helix_curve(start, end, segment.len(), geo);
    sweep(&spiral, &CrossSection::circle(geo.helix_tube_radius), geo)
}

/// Sheet ribbon, or `None` with fewer than two reference atoms.
#[must_use]
pub fn build_sheet(
    segment: &Segment<'_>,
    geo: &GeometryOptions,
) -> Option<(Vec<Vec3>, Mesh)> {
    let points = reference_points(segment, geo);
    if points.len() < 2 {
        return None;
    }
    sweep(
        &points,
        &CrossSection::ribbon(geo.sheet_width, geo.sheet_thickness),
        geo,
    )
}

/// Loop tube, or `None` with fewer than two reference atoms.
#[must_use]
pub fn build_loop(
    segment: &Segment<'_>,
    geo: &GeometryOptions,
) -> Option<(Vec<Vec3>, Mesh)> {
    let points = reference_points(segment, geo);
    if points.len() < 2 {
        return None;
    }
    sweep(&points, &CrossSection::circle(geo.loop_radius), geo)
}

/// Build the cartoon piece for any segment, colored `color`.
#[must_use]
pub fn build_segment(
    segment: &Segment<'_>,
    color: Color,
    geo: &GeometryOptions,
) -> Option<CartoonPiece> {
    let built = match segment.ss {
        SSType::Helix => build_helix(segment, geo),
        SSType::Sheet => build_sheet(segment, geo),
        SSType::Loop => build_loop(segment, geo),
    };
    let Some((curve, mesh)) = built else {
        log::debug!(
            "skipping degenerate {} segment ({} residues) in chain {}",
            segment.ss.label(),
            segment.len(),
            segment.chain_id
        );
        return None;
    };
    Some(CartoonPiece {
        ss: segment.ss,
        chain_id: segment.chain_id.to_owned(),
        residue_count: segment.len(),
        color,
        curve,
        mesh,
    })
}
