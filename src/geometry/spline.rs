//! Curve sampling and frame computation for swept geometry.
//!
//! Pure Vec3 → Vec3 transforms with no secondary-structure knowledge.

use glam::Vec3;

/// Control points closer together than this are treated as coincident.
const DEGENERATE_LENGTH: f32 = 1e-5;

/// A point along a curve with position, tangent, and frame vectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveFrame {
    /// Position on the curve.
    pub pos: Vec3,
    /// Unit tangent.
    pub tangent: Vec3,
    /// Unit normal, perpendicular to the tangent.
    pub normal: Vec3,
    /// Unit binormal, `tangent × normal`.
    pub binormal: Vec3,
}

/// Catmull-Rom spline interpolation (passes through all control points).
///
/// Ends are extended by reflection so the first and last spans are
/// well-defined; two points degrade to a straight line.
#[must_use]
pub fn catmull_rom(points: &[Vec3], segments_per_span: usize) -> Vec<Vec3> {
    let n = points.len();
    if n < 2 || segments_per_span == 0 {
        return points.to_vec();
    }
    if n < 3 {
        return linear_interpolate(points, segments_per_span);
    }

    let mut result = Vec::with_capacity((n - 1) * segments_per_span + 1);
    for i in 0..n - 1 {
        let p0 = if i == 0 {
            points[0] * 2.0 - points[1]
        } else {
            points[i - 1]
        };
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = if i + 2 >= n {
            points[n - 1] * 2.0 - points[n - 2]
        } else {
            points[i + 2]
        };

        for j in 0..segments_per_span {
            let t = j as f32 / segments_per_span as f32;
            let t2 = t * t;
            let t3 = t2 * t;

            let pos = 0.5
                * ((2.0 * p1)
                    + (-p0 + p2) * t
                    + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
                    + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3);
            result.push(pos);
        }
    }

    result.push(points[n - 1]);
    result
}

/// Linear interpolation fallback for short point sequences.
#[must_use]
pub fn linear_interpolate(points: &[Vec3], segments_per_span: usize) -> Vec<Vec3> {
    let mut result = Vec::new();
    for pair in points.windows(2) {
        for j in 0..segments_per_span {
            let t = j as f32 / segments_per_span as f32;
            result.push(pair[0].lerp(pair[1], t));
        }
    }
    if let Some(&last) = points.last() {
        result.push(last);
    }
    result
}

/// Total polyline length.
#[must_use]
pub fn polyline_length(points: &[Vec3]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Resample a polyline to `segments + 1` points evenly spaced by arc
/// length. Returns `None` for fewer than two points or a zero-length line.
#[must_use]
pub fn resample(points: &[Vec3], segments: usize) -> Option<Vec<Vec3>> {
    let total = polyline_length(points);
    if points.len() < 2 || segments == 0 || total < DEGENERATE_LENGTH {
        return None;
    }

    let mut out = Vec::with_capacity(segments + 1);
    let mut span = 0;
    let mut span_start = 0.0;
    for i in 0..=segments {
        let target = total * i as f32 / segments as f32;
        while span + 2 < points.len() {
            let len = points[span].distance(points[span + 1]);
            if span_start + len >= target {
                break;
            }
            span_start += len;
            span += 1;
        }
        let (a, b) = (points[span], points[span + 1]);
        let len = a.distance(b);
        let t = if len < DEGENERATE_LENGTH {
            0.0
        } else {
            ((target - span_start) / len).clamp(0.0, 1.0)
        };
        out.push(a.lerp(b, t));
    }
    Some(out)
}

/// Smooth curve through `control` sampled at `segments + 1` evenly spaced
/// points, the way a tube is swept along a Catmull-Rom curve.
#[must_use]
pub fn smooth_curve(control: &[Vec3], segments: usize) -> Option<Vec<Vec3>> {
    // Dense enough that arc-length resampling tracks the true curve.
    let dense = catmull_rom(control, 16);
    resample(&dense, segments)
}

/// Per-point unit tangents by central differences.
fn tangents(points: &[Vec3]) -> Vec<Vec3> {
    let n = points.len();
    (0..n)
        .map(|i| {
            let prev = points[i.saturating_sub(1)];
            let next = points[(i + 1).min(n - 1)];
            (next - prev).normalize_or_zero()
        })
        .collect()
}

/// Any unit vector perpendicular to `t`.
fn any_perpendicular(t: Vec3) -> Vec3 {
    let arbitrary = if t.x.abs() < 0.9 { Vec3::X } else { Vec3::Y };
    t.cross(arbitrary).normalize_or_zero()
}

/// Build frames along `points` using Rotation Minimizing Frames via the
/// double reflection method (Wang et al. 2008).
///
/// Returns `None` when the curve has no usable direction.
#[must_use]
pub fn compute_frames(points: &[Vec3]) -> Option<Vec<CurveFrame>> {
    if points.len() < 2 {
        return None;
    }
    let tangents = tangents(points);
    let t0 = tangents[0];
    if t0 == Vec3::ZERO {
        return None;
    }

    let n0 = any_perpendicular(t0);
    let mut frames = Vec::with_capacity(points.len());
    frames.push(CurveFrame {
        pos: points[0],
        tangent: t0,
        normal: n0,
        binormal: t0.cross(n0).normalize(),
    });

    for i in 0..points.len() - 1 {
        let prev = frames[i];
        let x_i1 = points[i + 1];
        let mut t_i1 = tangents[i + 1];
        if t_i1 == Vec3::ZERO {
            t_i1 = prev.tangent;
        }

        let v1 = x_i1 - prev.pos;
        let c1 = v1.dot(v1);
        if c1 < 1e-10 {
            frames.push(CurveFrame {
                pos: x_i1,
                tangent: t_i1,
                ..prev
            });
            continue;
        }

        // First reflection
        let r_i_l = prev.normal - (2.0 / c1) * v1.dot(prev.normal) * v1;
        let t_i_l = prev.tangent - (2.0 / c1) * v1.dot(prev.tangent) * v1;

        // Second reflection
        let v2 = t_i1 - t_i_l;
        let c2 = v2.dot(v2);
        let r_i1 = if c2 < 1e-10 {
            r_i_l
        } else {
            r_i_l - (2.0 / c2) * v2.dot(r_i_l) * v2
        };

        // Ensure orthonormality
        let mut normal = (r_i1 - t_i1 * t_i1.dot(r_i1)).normalize_or_zero();
        if normal == Vec3::ZERO {
            normal = any_perpendicular(t_i1);
        }
        frames.push(CurveFrame {
            pos: x_i1,
            tangent: t_i1,
            normal,
            binormal: t_i1.cross(normal).normalize_or_zero(),
        });
    }
    Some(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catmull_rom_passes_through_control_points() {
        let pts = [
            Vec3::ZERO,
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(3.0, 1.0, 1.0),
        ];
        let curve = catmull_rom(&pts, 4);
        assert_eq!(curve.len(), 13);
        for (i, p) in pts.iter().enumerate() {
            assert!(curve[i * 4].distance(*p) < 1e-5);
        }
    }

    #[test]
    fn two_points_are_a_line() {
        let curve = catmull_rom(&[Vec3::ZERO, Vec3::X * 2.0], 4);
        assert_eq!(curve.len(), 5);
        assert!(curve[2].distance(Vec3::X) < 1e-6);
    }

    #[test]
    fn resample_spacing_is_even() {
        let pts = [Vec3::ZERO, Vec3::X, Vec3::new(1.0, 3.0, 0.0)];
        let out = resample(&pts, 8).unwrap();
        assert_eq!(out.len(), 9);
        assert!(out[0].distance(Vec3::ZERO) < 1e-6);
        assert!(out[8].distance(pts[2]) < 1e-5);
        for w in out.windows(2) {
            assert!((w[0].distance(w[1]) - 0.5).abs() < 1e-4);
        }
    }

    #[test]
    fn resample_rejects_degenerate_input() {
        assert!(resample(&[Vec3::ONE], 8).is_none());
        assert!(resample(&[Vec3::ONE, Vec3::ONE], 8).is_none());
        assert!(smooth_curve(&[Vec3::ZERO, Vec3::ZERO, Vec3::ZERO], 8).is_none());
    }

    #[test]
    fn frames_are_orthonormal() {
        let pts: Vec<Vec3> = (0..40)
            .map(|i| {
                let a = i as f32 * 0.3;
                Vec3::new(a.cos() * 2.0, a.sin() * 2.0, i as f32 * 0.2)
            })
            .collect();
        let frames = compute_frames(&pts).unwrap();
        assert_eq!(frames.len(), pts.len());
        for f in &frames {
            assert!((f.tangent.length() - 1.0).abs() < 1e-4);
            assert!((f.normal.length() - 1.0).abs() < 1e-4);
            assert!(f.tangent.dot(f.normal).abs() < 1e-4);
            assert!(f.binormal.dot(f.normal).abs() < 1e-4);
        }
    }

    #[test]
    fn straight_line_frames_do_not_twist() {
        let pts: Vec<Vec3> = (0..10).map(|i| Vec3::Z * i as f32).collect();
        let frames = compute_frames(&pts).unwrap();
        let n0 = frames[0].normal;
        assert!(frames.iter().all(|f| f.normal.dot(n0) > 0.9999));
    }
}
