//! Tuning constants for cleaning, reconstruction, and interaction.
//!
//! The thresholds below are empirically chosen for car-scale, lap-scale
//! telemetry and were carried over from field use unchanged. They are plain
//! struct fields rather than free constants so a caller can override any of
//! them without forking the algorithms.

use serde::{Deserialize, Serialize};

/// Thresholds for the track sample cleaner (see [`crate::track::cleaner`]).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CleanerSettings {
    /// Outlier distance threshold as a fraction of the bounding-box diagonal
    pub outlier_diagonal_fraction: f64,
    /// Absolute floor for the outlier distance threshold, in world units
    pub outlier_floor: f64,
    /// Implied speeds below this (m/s) are physically plausible and keep a
    /// point even when it fails the distance check. 150 m/s = 540 km/h.
    pub max_implied_speed: f64,
    /// Timestamps rounding to the same multiple of this (seconds) collapse
    /// to a single sample
    pub dedup_resolution: f64,
}

impl Default for CleanerSettings {
    fn default() -> Self {
        Self {
            outlier_diagonal_fraction: 0.05,
            outlier_floor: 100.0,
            max_implied_speed: 150.0,
            dedup_resolution: 0.001,
        }
    }
}

/// Thresholds for path reconstruction and corner detection.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PathSettings {
    /// Control-point pull toward neighbors for the cubic construction.
    /// 0.5 follows the data tightly; 0.3 stays closer to straight lines.
    pub smoothness: f64,
    /// Centerline sub-path break threshold as a fraction of the diagonal
    pub centerline_gap_fraction: f64,
    /// Boundary polyline break threshold as a fraction of the diagonal
    pub boundary_gap_fraction: f64,
    /// Minimum estimated half-width in world units
    pub min_half_width: f64,
    /// Heading change (radians) above which a point counts as a corner
    pub corner_threshold: f64,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            smoothness: 0.3,
            centerline_gap_fraction: 0.10,
            boundary_gap_fraction: 0.15,
            min_half_width: 50.0,
            corner_threshold: std::f64::consts::FRAC_PI_6,
        }
    }
}

/// Thresholds for the chart interaction state machine.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct InteractionSettings {
    /// Pointer travel (px) beyond which a press commits to a drag
    pub drag_pixel_threshold: f64,
    /// Timeline travel (s) beyond which a press commits to a drag
    pub drag_time_threshold: f64,
    /// Wheel-pan step as a fraction of the visible range
    pub wheel_pan_fraction: f64,
    /// Wheel-zoom range multiplier per tick
    pub zoom_factor: f64,
    /// Left axis inset of the chart surface, in pixels
    pub axis_inset_left: f64,
    /// Right axis inset of the chart surface, in pixels
    pub axis_inset_right: f64,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            drag_pixel_threshold: 5.0,
            drag_time_threshold: 0.1,
            wheel_pan_fraction: 0.08,
            zoom_factor: 1.1,
            axis_inset_left: 60.0,
            axis_inset_right: 20.0,
        }
    }
}

/// Bundle of all tunables, convenient to thread through the engine.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct EngineSettings {
    pub cleaner: CleanerSettings,
    pub path: PathSettings,
    pub interaction: InteractionSettings,
}
