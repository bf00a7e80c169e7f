//! Tests for heading-based corner detection.

use traceline::settings::PathSettings;
use traceline::track::{detect_corners, CleanedTrackSample, Point};

fn cleaned(points: &[(f64, f64)]) -> Vec<CleanedTrackSample> {
    points
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| CleanedTrackSample {
            time: i as f64 * 0.1,
            position: Point::new(x, y),
            speed: 100.0,
            heading: 0.0,
            throttle: 0.0,
            brake: 0.0,
            steering: 0.0,
            source_index: i,
        })
        .collect()
}

#[test]
fn test_right_angle_is_a_corner() {
    let samples = cleaned(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
    let corners = detect_corners(&samples, &PathSettings::default());
    assert_eq!(corners, vec![1], "A 90-degree turn must be flagged");
}

#[test]
fn test_gentle_curve_is_not_a_corner() {
    // 10 degrees per step, well under the 30-degree threshold
    let mut points = Vec::new();
    let mut heading = 0.0_f64;
    let mut pos = (0.0, 0.0);
    for _ in 0..12 {
        points.push(pos);
        pos.0 += 10.0 * heading.cos();
        pos.1 += 10.0 * heading.sin();
        heading += 10.0_f64.to_radians();
    }
    let corners = detect_corners(&cleaned(&points), &PathSettings::default());
    assert!(
        corners.is_empty(),
        "Gentle curvature must not be flagged: {:?}",
        corners
    );
}

#[test]
fn test_heading_wrap_does_not_create_false_corner() {
    // Headings of +170 and -170 degrees differ by 20 degrees, not 340
    let east_northish = (170.0_f64.to_radians().cos(), 170.0_f64.to_radians().sin());
    let east_southish = (
        (-170.0_f64).to_radians().cos(),
        (-170.0_f64).to_radians().sin(),
    );
    let samples = cleaned(&[
        (0.0, 0.0),
        (10.0 * east_northish.0, 10.0 * east_northish.1),
        (
            10.0 * east_northish.0 + 10.0 * east_southish.0,
            10.0 * east_northish.1 + 10.0 * east_southish.1,
        ),
    ]);
    let corners = detect_corners(&samples, &PathSettings::default());
    assert!(
        corners.is_empty(),
        "Angle wrap across the +/-180 seam must be handled"
    );
}

#[test]
fn test_forty_five_degrees_is_a_corner() {
    let samples = cleaned(&[(0.0, 0.0), (10.0, 0.0), (20.0, 10.0)]);
    let corners = detect_corners(&samples, &PathSettings::default());
    assert_eq!(corners, vec![1]);
}

#[test]
fn test_endpoints_never_flagged() {
    let samples = cleaned(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    let corners = detect_corners(&samples, &PathSettings::default());
    assert!(!corners.contains(&0));
    assert!(!corners.contains(&(samples.len() - 1)));
}

#[test]
fn test_too_few_points_yields_no_corners() {
    let samples = cleaned(&[(0.0, 0.0), (10.0, 0.0)]);
    assert!(detect_corners(&samples, &PathSettings::default()).is_empty());
}
