//! Telemetry sample and session metadata types.
//!
//! Field names follow the store's wire format (snake_case JSON). The store does
//! not guarantee strict ordering or uniqueness of timestamps; both are enforced
//! downstream by [`crate::normalize`] and [`crate::track::cleaner`].

use serde::{Deserialize, Serialize};

/// One telemetry tick as delivered by the store.
///
/// `position_x`/`position_y` use `0.0` as a "no fix" sentinel; `heading` is in
/// degrees (store convention).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Sample {
    #[serde(default)]
    pub elapsed_time: f64,
    #[serde(default)]
    pub speed_kmh: f64,
    /// Throttle pedal position, 0.0 to 1.0
    #[serde(default)]
    pub throttle_position: f64,
    /// Brake pedal position, 0.0 to 1.0
    #[serde(default)]
    pub brake_position: f64,
    /// Steering angle in radians, negative = left
    #[serde(default)]
    pub steering_angle: f64,
    #[serde(default)]
    pub rpm: f64,
    #[serde(default)]
    pub gear: i32,
    #[serde(default)]
    pub tire_temp_fl: f64,
    #[serde(default)]
    pub tire_temp_fr: f64,
    #[serde(default)]
    pub tire_temp_rl: f64,
    #[serde(default)]
    pub tire_temp_rr: f64,
    #[serde(default)]
    pub g_force_lateral: f64,
    #[serde(default)]
    pub g_force_longitudinal: f64,
    /// World X coordinate in meters; 0.0 means no position fix
    #[serde(default)]
    pub position_x: f64,
    /// World Y coordinate in meters; 0.0 means no position fix
    #[serde(default)]
    pub position_y: f64,
    /// Vehicle heading in degrees
    #[serde(default)]
    pub heading: f64,
}

impl Sample {
    /// Whether both position coordinates carry a usable fix.
    /// Exactly-zero coordinates are the store's "no fix" sentinel.
    pub fn has_position_fix(&self) -> bool {
        self.position_x.is_finite()
            && self.position_y.is_finite()
            && self.position_x != 0.0
            && self.position_y != 0.0
    }
}

/// Session metadata returned alongside the samples.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SessionMeta {
    #[serde(default)]
    pub track_name: Option<String>,
    #[serde(default)]
    pub car_name: Option<String>,
    #[serde(default)]
    pub duration_seconds: Option<f64>,
}
