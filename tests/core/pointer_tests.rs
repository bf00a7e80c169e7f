//! Tests for screen-to-timeline mapping.

use traceline::interaction::{time_at_x, ChartSurface, Viewport};
use traceline::settings::InteractionSettings;

fn surface() -> ChartSurface {
    ChartSurface {
        left: 0.0,
        top: 0.0,
        width: 800.0,
        height: 400.0,
    }
}

fn full_viewport() -> Viewport {
    Viewport {
        start: 0.0,
        end: 60.0,
    }
}

// ============================================
// Mapping
// ============================================

#[test]
fn test_axis_insets_bound_the_drawable_interior() {
    let settings = InteractionSettings::default();

    // Interior runs from x=60 to x=780
    let at_left = time_at_x(60.0, &surface(), full_viewport(), 60.0, &settings);
    let at_right = time_at_x(780.0, &surface(), full_viewport(), 60.0, &settings);

    assert_eq!(at_left, Some(0.0));
    assert_eq!(at_right, Some(60.0));
}

#[test]
fn test_midpoint_maps_to_viewport_center() {
    let settings = InteractionSettings::default();
    let viewport = Viewport {
        start: 10.0,
        end: 20.0,
    };

    let time = time_at_x(60.0 + 360.0, &surface(), viewport, 60.0, &settings)
        .expect("should map inside the interior");
    assert!((time - 15.0).abs() < 1e-9, "Expected 15.0, got {}", time);
}

#[test]
fn test_mapping_is_monotonic() {
    let settings = InteractionSettings::default();
    let viewport = Viewport {
        start: 5.0,
        end: 45.0,
    };

    let mut last = f64::NEG_INFINITY;
    for px in (0..=800).step_by(10) {
        let time = time_at_x(px as f64, &surface(), viewport, 60.0, &settings)
            .expect("mapping should exist for a non-empty session");
        assert!(
            time >= last,
            "Mapping must be monotonic: x={} gave {} after {}",
            px,
            time,
            last
        );
        last = time;
    }
}

#[test]
fn test_positions_outside_interior_clamp() {
    let settings = InteractionSettings::default();
    let viewport = Viewport {
        start: 10.0,
        end: 20.0,
    };

    assert_eq!(
        time_at_x(-500.0, &surface(), viewport, 60.0, &settings),
        Some(10.0),
        "Left of the interior clamps to viewport start"
    );
    assert_eq!(
        time_at_x(5000.0, &surface(), viewport, 60.0, &settings),
        Some(20.0),
        "Right of the interior clamps to viewport end"
    );
}

// ============================================
// Degenerate Inputs
// ============================================

#[test]
fn test_no_data_yields_none() {
    let settings = InteractionSettings::default();
    assert_eq!(
        time_at_x(400.0, &surface(), full_viewport(), 0.0, &settings),
        None
    );
}

#[test]
fn test_no_drawable_interior_yields_none() {
    let settings = InteractionSettings::default();
    let tiny = ChartSurface {
        left: 0.0,
        top: 0.0,
        width: 70.0,
        height: 400.0,
    };
    assert_eq!(time_at_x(35.0, &tiny, full_viewport(), 60.0, &settings), None);
}

// ============================================
// Surface Containment
// ============================================

#[test]
fn test_contains_with_margin() {
    let s = surface();
    assert!(s.contains(400.0, 200.0, 0.0));
    assert!(!s.contains(810.0, 200.0, 0.0));
    assert!(s.contains(810.0, 200.0, 20.0), "Margin widens the hit box");
    assert!(!s.contains(-30.0, 200.0, 20.0));
}
