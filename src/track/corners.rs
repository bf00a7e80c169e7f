//! Corner detection from consecutive segment headings.

use crate::settings::PathSettings;

use super::CleanedTrackSample;

/// Indices of samples where the heading change between the incoming and
/// outgoing segments exceeds the corner threshold (default 30 degrees).
/// First and last samples have only one segment and are never corners.
pub fn detect_corners(samples: &[CleanedTrackSample], settings: &PathSettings) -> Vec<usize> {
    let mut corners = Vec::new();
    if samples.len() < 3 {
        return corners;
    }

    for i in 1..samples.len() - 1 {
        let prev = samples[i - 1].position;
        let curr = samples[i].position;
        let next = samples[i + 1].position;

        let incoming = (curr.y - prev.y).atan2(curr.x - prev.x);
        let outgoing = (next.y - curr.y).atan2(next.x - curr.x);

        // Wrap the difference into [0, pi]
        let diff = (outgoing - incoming).abs();
        let wrapped = diff.min(2.0 * std::f64::consts::PI - diff);

        if wrapped > settings.corner_threshold {
            corners.push(i);
        }
    }

    corners
}
