//! Timeline normalization for charting.
//!
//! Rebases raw sample timestamps to a zero-origin timeline and flattens each
//! sample into the per-channel values the chart consumes. All derived values
//! are pure functions of the input slice; nothing is mutated in place.

use crate::sample::Sample;

/// One chart-ready point on the zero-origin timeline.
///
/// Pedal positions are scaled to percent for display; `source_index` refers
/// back to the originating entry in the raw sample array so hover/selection
/// state can be cross-referenced.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedPoint {
    /// Seconds since the first sample of the session
    pub time: f64,
    pub speed: f64,
    /// Throttle in percent (0-100)
    pub throttle: f64,
    /// Brake in percent (0-100)
    pub brake: f64,
    /// Steering angle in radians
    pub steering: f64,
    pub rpm: f64,
    pub gear: i32,
    pub tire_fl: f64,
    pub tire_fr: f64,
    pub tire_rl: f64,
    pub tire_rr: f64,
    pub g_lat: f64,
    pub g_long: f64,
    pub position_x: f64,
    pub position_y: f64,
    /// Heading in degrees
    pub heading: f64,
    pub source_index: usize,
}

/// Rebase samples to a zero-origin timeline.
///
/// Returns the normalized points (in input order) and `max_time`, the span
/// `max(elapsed_time) - min(elapsed_time)`. An empty input yields an empty
/// vector and `max_time == 0.0` - the "no data" state, not an error.
pub fn normalize(samples: &[Sample]) -> (Vec<NormalizedPoint>, f64) {
    if samples.is_empty() {
        return (Vec::new(), 0.0);
    }

    // Single pass for the time extent
    let mut min_time = samples[0].elapsed_time;
    let mut max_time_raw = samples[0].elapsed_time;
    for sample in &samples[1..] {
        if sample.elapsed_time < min_time {
            min_time = sample.elapsed_time;
        }
        if sample.elapsed_time > max_time_raw {
            max_time_raw = sample.elapsed_time;
        }
    }

    let points = samples
        .iter()
        .enumerate()
        .map(|(index, s)| NormalizedPoint {
            time: s.elapsed_time - min_time,
            speed: s.speed_kmh,
            throttle: s.throttle_position * 100.0,
            brake: s.brake_position * 100.0,
            steering: s.steering_angle,
            rpm: s.rpm,
            gear: s.gear,
            tire_fl: s.tire_temp_fl,
            tire_fr: s.tire_temp_fr,
            tire_rl: s.tire_temp_rl,
            tire_rr: s.tire_temp_rr,
            g_lat: s.g_force_lateral,
            g_long: s.g_force_longitudinal,
            position_x: s.position_x,
            position_y: s.position_y,
            heading: s.heading,
            source_index: index,
        })
        .collect();

    (points, max_time_raw - min_time)
}

/// Filter points to those inside the visible window `[start, end]`.
/// A degenerate window (`end <= start`) returns everything, matching the
/// full-range default before the first interaction.
pub fn window<'a>(
    points: &'a [NormalizedPoint],
    start: f64,
    end: f64,
) -> impl Iterator<Item = &'a NormalizedPoint> {
    points
        .iter()
        .filter(move |p| end <= start || (p.time >= start && p.time <= end))
}
