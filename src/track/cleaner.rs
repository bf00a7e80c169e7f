//! Position sample cleaning: validity, causal ordering, deduplication, and
//! outlier removal.
//!
//! GPS/telemetry position fixes occasionally jump by an order of magnitude.
//! A pure distance threshold would wrongly reject genuine sharp corners at
//! low sample density, so the outlier check is relaxed whenever the implied
//! speed is physically plausible.

use tracing::warn;

use crate::normalize::NormalizedPoint;
use crate::settings::CleanerSettings;

use super::{Bounds, Point};

/// A position-bearing sample that survived validity, ordering, dedup, and
/// outlier filtering. Retains the channels the track HUD displays.
#[derive(Clone, Debug, PartialEq)]
pub struct CleanedTrackSample {
    pub time: f64,
    pub position: Point,
    pub speed: f64,
    /// Heading in degrees
    pub heading: f64,
    pub throttle: f64,
    pub brake: f64,
    pub steering: f64,
    /// Index into the originating raw sample array
    pub source_index: usize,
}

/// Diagnostic record for a rejected outlier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DroppedOutlier {
    pub source_index: usize,
    /// Mean distance to the neighboring retained points, world units
    pub distance: f64,
    /// Implied instantaneous speed in m/s (0 when time deltas were degenerate)
    pub implied_speed: f64,
}

/// Result of the cleaning pipeline.
#[derive(Clone, Debug, Default)]
pub struct CleanOutcome {
    pub samples: Vec<CleanedTrackSample>,
    pub dropped: Vec<DroppedOutlier>,
    /// Bounding box of the retained positions
    pub bounds: Option<Bounds>,
}

/// Run the full cleaning pipeline over normalized points.
///
/// An empty result is the valid "no position data" state, never an error.
pub fn clean(points: &[NormalizedPoint], settings: &CleanerSettings) -> CleanOutcome {
    // 1. Validity: drop samples without a usable position fix
    let mut valid: Vec<&NormalizedPoint> = points
        .iter()
        .filter(|p| {
            p.position_x.is_finite()
                && p.position_y.is_finite()
                && p.position_x != 0.0
                && p.position_y != 0.0
        })
        .collect();

    // 2. Causal order: stable sort keeps original order for equal timestamps
    valid.sort_by(|a, b| a.time.total_cmp(&b.time));

    // 3. Millisecond dedup, first occurrence wins
    let resolution = settings.dedup_resolution.max(f64::EPSILON);
    let mut unique: Vec<&NormalizedPoint> = Vec::with_capacity(valid.len());
    let mut last_key: Option<i64> = None;
    for point in valid {
        let key = (point.time / resolution).round() as i64;
        if last_key != Some(key) {
            last_key = Some(key);
            unique.push(point);
        }
    }

    // Track size from the raw (pre-outlier) bounding box, so one spike does
    // not inflate its own rejection threshold
    let raw_bounds = Bounds::of(
        unique
            .iter()
            .map(|p| Point::new(p.position_x, p.position_y)),
    );
    let track_size = raw_bounds.map(|b| b.diagonal()).unwrap_or(0.0);
    let threshold = (track_size * settings.outlier_diagonal_fraction).max(settings.outlier_floor);

    // 4. Outlier removal; first and last points are always kept
    let mut samples: Vec<CleanedTrackSample> = Vec::with_capacity(unique.len());
    let mut dropped: Vec<DroppedOutlier> = Vec::new();
    for (i, curr) in unique.iter().enumerate() {
        if i == 0 || i == unique.len() - 1 {
            samples.push(to_cleaned(curr));
            continue;
        }

        let prev = unique[i - 1];
        let next = unique[i + 1];
        let here = Point::new(curr.position_x, curr.position_y);
        let dist_prev = here.distance_to(Point::new(prev.position_x, prev.position_y));
        let dist_next = here.distance_to(Point::new(next.position_x, next.position_y));
        let avg_dist = (dist_prev + dist_next) / 2.0;

        let avg_dt = ((curr.time - prev.time) + (next.time - curr.time)) / 2.0;
        let implied_speed = if avg_dt > 0.0 { avg_dist / avg_dt } else { 0.0 };

        let plausible_speed = implied_speed > 0.0 && implied_speed < settings.max_implied_speed;
        if avg_dist < threshold || plausible_speed {
            samples.push(to_cleaned(curr));
        } else {
            warn!(
                source_index = curr.source_index,
                distance = avg_dist,
                speed_kmh = implied_speed * 3.6,
                "dropping position outlier"
            );
            dropped.push(DroppedOutlier {
                source_index: curr.source_index,
                distance: avg_dist,
                implied_speed,
            });
        }
    }

    let bounds = Bounds::of(samples.iter().map(|s| s.position));
    CleanOutcome {
        samples,
        dropped,
        bounds,
    }
}

fn to_cleaned(point: &NormalizedPoint) -> CleanedTrackSample {
    CleanedTrackSample {
        time: point.time,
        position: Point::new(point.position_x, point.position_y),
        speed: point.speed,
        heading: point.heading,
        throttle: point.throttle,
        brake: point.brake,
        steering: point.steering,
        source_index: point.source_index,
    }
}
