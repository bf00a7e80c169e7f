//! Tests for the position-sample cleaning pipeline.

use traceline::sample::Sample;
use traceline::settings::CleanerSettings;
use traceline::track::clean;

use crate::common::{points_from, straight_samples, track_sample};

fn clean_default(samples: &[Sample]) -> traceline::track::CleanOutcome {
    clean(&points_from(samples), &CleanerSettings::default())
}

// ============================================
// Validity Filter
// ============================================

#[test]
fn test_empty_input_is_no_position_data() {
    let outcome = clean_default(&[]);
    assert!(outcome.samples.is_empty());
    assert!(outcome.dropped.is_empty());
    assert_eq!(outcome.bounds, None);
}

#[test]
fn test_zero_coordinates_are_no_fix_sentinel() {
    let samples = vec![
        track_sample(0.0, 100.0, 100.0, 50.0),
        track_sample(0.1, 0.0, 0.0, 50.0),
        track_sample(0.2, 0.0, 105.0, 50.0),
        track_sample(0.3, 102.0, 101.0, 50.0),
    ];
    let outcome = clean_default(&samples);

    assert_eq!(outcome.samples.len(), 2, "Zero coordinates must be dropped");
    assert_eq!(outcome.samples[0].source_index, 0);
    assert_eq!(outcome.samples[1].source_index, 3);
}

#[test]
fn test_non_finite_coordinates_dropped() {
    let samples = vec![
        track_sample(0.0, 100.0, 100.0, 50.0),
        track_sample(0.1, f64::NAN, 100.0, 50.0),
        track_sample(0.2, 101.0, f64::INFINITY, 50.0),
        track_sample(0.3, 102.0, 101.0, 50.0),
    ];
    let outcome = clean_default(&samples);

    assert_eq!(outcome.samples.len(), 2);
}

// ============================================
// Ordering and Dedup
// ============================================

#[test]
fn test_samples_sorted_by_time() {
    let samples = vec![
        track_sample(0.3, 130.0, 100.0, 50.0),
        track_sample(0.1, 110.0, 100.0, 50.0),
        track_sample(0.2, 120.0, 100.0, 50.0),
    ];
    let outcome = clean_default(&samples);

    let times: Vec<f64> = outcome.samples.iter().map(|s| s.time).collect();
    assert_eq!(times, vec![0.1, 0.2, 0.3]);
}

#[test]
fn test_same_millisecond_collapses_to_first() {
    let samples = vec![
        track_sample(1.0, 100.0, 100.0, 50.0),
        track_sample(1.0004, 999.0, 999.0, 50.0),
        track_sample(1.0006, 101.0, 100.0, 50.0),
    ];
    let outcome = clean_default(&samples);

    assert_eq!(outcome.samples.len(), 2, "Sub-millisecond duplicate dropped");
    assert_eq!(
        outcome.samples[0].position.x, 100.0,
        "First occurrence wins within a millisecond"
    );
}

// ============================================
// Outlier Removal
// ============================================

#[test]
fn test_spike_removed_from_straight_run() {
    let mut samples = straight_samples(50, 10.0);
    // Teleport in the middle of the run
    samples[25].position_x = 50_000.0;
    samples[25].position_y = 50_000.0;

    let outcome = clean_default(&samples);

    assert!(
        !outcome
            .samples
            .iter()
            .any(|s| s.position.x > 10_000.0),
        "The teleport spike must be removed"
    );
    let dropped_indices: Vec<usize> =
        outcome.dropped.iter().map(|d| d.source_index).collect();
    assert!(
        dropped_indices.contains(&25),
        "Drop diagnostics should name the spike, got {:?}",
        dropped_indices
    );
}

#[test]
fn test_drop_diagnostics_carry_distance_and_speed() {
    let mut samples = straight_samples(50, 10.0);
    samples[25].position_x = 50_000.0;
    samples[25].position_y = 50_000.0;

    let outcome = clean_default(&samples);
    let spike = outcome
        .dropped
        .iter()
        .find(|d| d.source_index == 25)
        .expect("spike should be in the drop list");

    assert!(spike.distance > 10_000.0);
    assert!(
        spike.implied_speed > CleanerSettings::default().max_implied_speed,
        "A kept point would have had a plausible implied speed"
    );
}

#[test]
fn test_first_and_last_always_kept() {
    // First point far away from the rest of the run
    let mut samples = straight_samples(50, 10.0);
    samples[0].position_x = 90_000.0;
    samples[0].position_y = 90_000.0;
    samples[49].position_x = 95_000.0;
    samples[49].position_y = 95_000.0;

    let outcome = clean_default(&samples);
    let indices: Vec<usize> = outcome.samples.iter().map(|s| s.source_index).collect();

    assert!(indices.contains(&0), "First sample must survive cleaning");
    assert!(indices.contains(&49), "Last sample must survive cleaning");
}

#[test]
fn test_plausible_speed_keeps_distant_point() {
    // 120m jumps at 1Hz exceed the distance threshold for this track size
    // but imply 120 m/s: fast, yet physically possible, so the points stay
    let samples: Vec<Sample> = (0..20)
        .map(|i| track_sample(i as f64, 500.0 + i as f64 * 120.0, 500.0, 300.0))
        .collect();
    let outcome = clean_default(&samples);

    assert_eq!(outcome.samples.len(), 20, "Plausible motion must be kept");
    assert!(outcome.dropped.is_empty());
}

#[test]
fn test_bounds_cover_retained_samples() {
    let samples = straight_samples(10, 10.0);
    let outcome = clean_default(&samples);

    let bounds = outcome.bounds.expect("bounds for non-empty result");
    assert_eq!(bounds.min_x, 500.0);
    assert_eq!(bounds.max_x, 590.0);
    assert_eq!(bounds.height(), 0.0);
}
