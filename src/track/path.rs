//! Driving-line path reconstruction: smoothed centerline, track half-width
//! estimation, and left/right boundary offsets.
//!
//! Everything here works on plain point slices, so the same construction
//! serves world-space geometry and projected screen-space polylines.

use crate::settings::PathSettings;

use super::{Bounds, CleanedTrackSample, Point};

/// One backend-agnostic draw primitive.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    CubicTo { c1: Point, c2: Point, to: Point },
}

/// An ordered list of path segments; `MoveTo` entries start sub-paths.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PathModel {
    pub segments: Vec<PathSegment>,
}

impl PathModel {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Reconstructed world-space track geometry, before projection.
#[derive(Clone, Debug, Default)]
pub struct TrackPath {
    /// Driving-line points, in driving order
    pub center: Vec<Point>,
    /// Left boundary points, offset by `+half_width`
    pub left: Vec<Point>,
    /// Right boundary points, offset by `-half_width`
    pub right: Vec<Point>,
    /// Estimated track half-width in world units
    pub half_width: f64,
}

/// Build a smoothed path from an ordered polyline.
///
/// A Catmull-Rom-like construction: each segment becomes a cubic whose
/// control points sit `smoothness` of the way toward the neighbors. When the
/// distance to the previous or next point exceeds `max_gap` the path breaks
/// into a new sub-path instead of interpolating - this prevents spurious
/// straight lines across lap-start teleports or data gaps.
pub fn smooth_path(points: &[Point], max_gap: f64, smoothness: f64) -> PathModel {
    let mut model = PathModel::default();
    if points.len() < 2 {
        return model;
    }

    model.segments.push(PathSegment::MoveTo(points[0]));
    for i in 1..points.len() {
        let prev = points[i - 1];
        let curr = points[i];

        if prev.distance_to(curr) > max_gap {
            model.segments.push(PathSegment::MoveTo(curr));
            continue;
        }

        if i == 1 {
            model.segments.push(PathSegment::LineTo(curr));
            continue;
        }

        let next = if i < points.len() - 1 {
            points[i + 1]
        } else {
            curr
        };
        if curr.distance_to(next) > max_gap {
            model.segments.push(PathSegment::LineTo(curr));
            continue;
        }

        let c1 = Point::new(
            prev.x + (curr.x - prev.x) * smoothness,
            prev.y + (curr.y - prev.y) * smoothness,
        );
        let c2 = Point::new(
            curr.x - (next.x - curr.x) * smoothness,
            curr.y - (next.y - curr.y) * smoothness,
        );
        model.segments.push(PathSegment::CubicTo { c1, c2, to: curr });
    }

    model
}

/// Estimate the track half-width from driving-line wobble.
///
/// Each interior point is projected onto the line through its neighbors and
/// the perpendicular residual measured; the half-width is twice the mean
/// residual, floored at `min_half_width` and capped by the largest residual.
/// Short sessions without residuals fall back to a fraction of the diagonal.
pub fn estimate_half_width(
    samples: &[CleanedTrackSample],
    bounds: &Bounds,
    settings: &PathSettings,
) -> f64 {
    let mut residuals: Vec<f64> = Vec::new();

    for i in 1..samples.len().saturating_sub(1) {
        let prev = samples[i - 1].position;
        let curr = samples[i].position;
        let next = samples[i + 1].position;

        let dx = next.x - prev.x;
        let dy = next.y - prev.y;
        let len_sq = dx * dx + dy * dy;
        if len_sq == 0.0 {
            continue;
        }

        let t = ((curr.x - prev.x) * dx + (curr.y - prev.y) * dy) / len_sq;
        let projected = Point::new(prev.x + t * dx, prev.y + t * dy);
        residuals.push(curr.distance_to(projected));
    }

    if residuals.is_empty() {
        return (bounds.diagonal() / 20.0).max(settings.min_half_width);
    }

    let mean: f64 = residuals.iter().sum::<f64>() / residuals.len() as f64;
    let max = residuals.iter().cloned().fold(0.0_f64, f64::max);
    let ceiling = max.max(settings.min_half_width);
    (mean * 2.0).clamp(settings.min_half_width, ceiling)
}

/// Offset a polyline to both sides by `half_width`, using averaged
/// incoming/outgoing tangents.
///
/// Degenerate segments fall back to whichever neighbor direction exists, or
/// the previous tangent, so the offsets never collapse onto the centerline.
pub fn boundary_offsets(points: &[Point], half_width: f64) -> (Vec<Point>, Vec<Point>) {
    let mut left = Vec::with_capacity(points.len());
    let mut right = Vec::with_capacity(points.len());
    if points.len() < 2 {
        return (left, right);
    }

    let mut prev_dir = Point::new(0.0, 1.0);
    for i in 0..points.len() {
        let curr = points[i];
        let dir = if i == 0 {
            normalized_dir(curr, points[i + 1])
        } else if i == points.len() - 1 {
            normalized_dir(points[i - 1], curr)
        } else {
            let incoming = normalized_dir(points[i - 1], curr);
            let outgoing = normalized_dir(curr, points[i + 1]);
            match (incoming, outgoing) {
                (Some(a), Some(b)) => {
                    normalize(Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0))
                }
                (Some(a), None) => Some(a),
                (None, Some(b)) => Some(b),
                (None, None) => None,
            }
        };

        let dir = dir.unwrap_or(prev_dir);
        prev_dir = dir;

        // Rotate the tangent 90 degrees to get the offset direction
        let perp = Point::new(-dir.y, dir.x);
        left.push(Point::new(
            curr.x + perp.x * half_width,
            curr.y + perp.y * half_width,
        ));
        right.push(Point::new(
            curr.x - perp.x * half_width,
            curr.y - perp.y * half_width,
        ));
    }

    (left, right)
}

/// Full world-space reconstruction: centerline points, half-width estimate,
/// and boundary offsets. Needs at least two cleaned samples; callers report
/// "insufficient position data" below that instead of calling this.
pub fn reconstruct_path(
    samples: &[CleanedTrackSample],
    bounds: &Bounds,
    settings: &PathSettings,
) -> TrackPath {
    let center: Vec<Point> = samples.iter().map(|s| s.position).collect();
    let half_width = estimate_half_width(samples, bounds, settings);
    let (left, right) = boundary_offsets(&center, half_width);

    TrackPath {
        center,
        left,
        right,
        half_width,
    }
}

fn normalized_dir(from: Point, to: Point) -> Option<Point> {
    normalize(Point::new(to.x - from.x, to.y - from.y))
}

fn normalize(v: Point) -> Option<Point> {
    let len = (v.x * v.x + v.y * v.y).sqrt();
    if len < 1e-3 {
        None
    } else {
        Some(Point::new(v.x / len, v.y / len))
    }
}
