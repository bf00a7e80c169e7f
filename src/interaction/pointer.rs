//! Screen-coordinate to timeline-value mapping.
//!
//! Stateless: the result depends on the live viewport, so it must be
//! re-evaluated on every pointer event rather than cached.

use crate::settings::InteractionSettings;

use super::viewport::Viewport;

/// Bounding box of the chart surface in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartSurface {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ChartSurface {
    /// Whether a screen point lies inside the surface, with an optional
    /// margin (drags are tracked slightly beyond the box).
    pub fn contains(&self, x: f64, y: f64, margin: f64) -> bool {
        x >= self.left - margin
            && x <= self.left + self.width + margin
            && y >= self.top - margin
            && y <= self.top + self.height + margin
    }
}

/// Map a pointer's horizontal screen coordinate onto the timeline.
///
/// The drawable interior excludes the fixed axis insets; the fractional
/// position inside it is clamped to `[0, 1]` and mapped linearly onto the
/// current viewport, then clamped to `[0, max_time]`. Returns `None` when
/// there is no data or the insets leave no drawable interior.
pub fn time_at_x(
    x: f64,
    surface: &ChartSurface,
    viewport: Viewport,
    max_time: f64,
    settings: &InteractionSettings,
) -> Option<f64> {
    if max_time <= 0.0 {
        return None;
    }

    let interior = surface.width - settings.axis_inset_left - settings.axis_inset_right;
    if interior <= 0.0 {
        return None;
    }

    let frac = ((x - surface.left - settings.axis_inset_left) / interior).clamp(0.0, 1.0);
    let time = viewport.start + frac * viewport.range();
    Some(time.clamp(0.0, max_time))
}
