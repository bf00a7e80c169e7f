//! Speed banding for color-coded track rendering.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter};

/// One of seven discrete speed buckets, ordered slowest to fastest, derived
/// from a sample's position between the session's min and max speed.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, AsRefStr, EnumIter,
)]
pub enum SpeedBand {
    Slowest,
    VerySlow,
    Slow,
    Medium,
    Fast,
    VeryFast,
    Fastest,
}

impl SpeedBand {
    /// Lower ratio bound of each band. A sample lands in the highest band
    /// whose threshold its ratio exceeds.
    const THRESHOLDS: [(f64, SpeedBand); 7] = [
        (0.9, SpeedBand::Fastest),
        (0.75, SpeedBand::VeryFast),
        (0.6, SpeedBand::Fast),
        (0.45, SpeedBand::Medium),
        (0.3, SpeedBand::Slow),
        (0.15, SpeedBand::VerySlow),
        (0.0, SpeedBand::Slowest),
    ];

    /// Classify a speed against the session's observed range.
    /// A flat session (`min == max`) maps everything to the slowest band.
    pub fn classify(speed: f64, min_speed: f64, max_speed: f64) -> SpeedBand {
        let span = max_speed - min_speed;
        let ratio = if span > 0.0 {
            (speed - min_speed) / span
        } else {
            0.0
        };
        for &(threshold, band) in &Self::THRESHOLDS {
            if ratio > threshold {
                return band;
            }
        }
        SpeedBand::Slowest
    }

    /// Fixed display color for this band.
    pub fn color(&self) -> [u8; 3] {
        match self {
            SpeedBand::Slowest => [99, 102, 241],  // Indigo
            SpeedBand::VerySlow => [59, 130, 246], // Blue
            SpeedBand::Slow => [16, 185, 129],     // Green
            SpeedBand::Medium => [252, 211, 77],   // Yellow
            SpeedBand::Fast => [245, 158, 11],     // Orange
            SpeedBand::VeryFast => [239, 68, 68],  // Bright red
            SpeedBand::Fastest => [220, 38, 38],   // Red
        }
    }
}
