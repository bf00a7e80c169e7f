//! The visible time window and its navigation operations.

use serde::{Deserialize, Serialize};

use crate::settings::InteractionSettings;

/// The visible `[start, end]` sub-range of the normalized timeline.
///
/// Invariant (maintained by [`ViewportController`], which is the only writer):
/// `0 <= start` and `start + min_gap <= end <= max_time`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub start: f64,
    pub end: f64,
}

impl Viewport {
    pub fn range(&self) -> f64 {
        self.end - self.start
    }
}

/// Minimum visible range for a session of the given length.
///
/// Derived as `max_time / 200` rounded to milliseconds, floored at 10ms and
/// capped at the session length. Sessions with no data get the floor.
pub fn min_gap_for(max_time: f64) -> f64 {
    if max_time <= 0.0 {
        return 0.01;
    }
    let step = ((max_time / 200.0) * 1000.0).round() / 1000.0;
    step.max(0.01).min(max_time)
}

/// Owns the viewport and applies every operation that may move it.
#[derive(Clone, Debug)]
pub struct ViewportController {
    viewport: Viewport,
    max_time: f64,
    min_gap: f64,
    settings: InteractionSettings,
}

impl ViewportController {
    /// A controller showing the full timeline of a session.
    pub fn new(max_time: f64, settings: InteractionSettings) -> Self {
        let max_time = max_time.max(0.0);
        Self {
            viewport: Viewport {
                start: 0.0,
                end: max_time,
            },
            max_time,
            min_gap: min_gap_for(max_time),
            settings,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn max_time(&self) -> f64 {
        self.max_time
    }

    pub fn min_gap(&self) -> f64 {
        self.min_gap
    }

    /// Show the full timeline again.
    pub fn reset(&mut self) {
        self.viewport = Viewport {
            start: 0.0,
            end: self.max_time,
        };
    }

    /// Zoom to an explicit time range (the zoom-to-selection action).
    /// Bounds are sorted and the range is clamped to at least `min_gap`.
    pub fn zoom_to(&mut self, a: f64, b: f64) {
        if self.max_time <= 0.0 {
            self.reset();
            return;
        }
        let start = a.min(b).clamp(0.0, (self.max_time - self.min_gap).max(0.0));
        let end = a.max(b).clamp(start + self.min_gap, self.max_time);
        self.viewport = Viewport { start, end };
    }

    /// Shift both bounds by `delta` from a drag-start snapshot, preserving the
    /// range and keeping the window inside `[0, max_time]`.
    pub fn shift_from(&mut self, origin: Viewport, delta: f64) {
        let range = origin.range();
        let mut start = origin.start + delta;
        let mut end = origin.end + delta;
        if start < 0.0 {
            start = 0.0;
            end = range;
        } else if end > self.max_time {
            end = self.max_time;
            start = self.max_time - range;
        }
        self.viewport = Viewport { start, end };
    }

    /// Wheel-pan by one tick. `direction > 0` pans toward later times.
    /// No-op when the window already covers the timeline or is at minimum.
    pub fn wheel_pan(&mut self, direction: i32) {
        if direction == 0 || self.max_time <= 0.0 {
            return;
        }
        let range = self.viewport.range();
        if range <= self.min_gap || range >= self.max_time {
            return;
        }

        let step = (range * self.settings.wheel_pan_fraction).max(self.min_gap);
        let mut start = self.viewport.start + direction.signum() as f64 * step;
        start = start.clamp(0.0, (self.max_time - range).max(0.0));
        let mut end = start + range;
        if end > self.max_time {
            end = self.max_time;
            start = self.max_time - range;
        }
        self.viewport = Viewport { start, end };
    }

    /// Wheel-zoom by one tick about the window center. `direction > 0` zooms
    /// out. The new range is clamped to `[min_gap, max_time]` and the window
    /// is shifted back inside bounds with the range preserved.
    pub fn wheel_zoom(&mut self, direction: i32) {
        if direction == 0 || self.max_time <= 0.0 {
            return;
        }
        let range = self.viewport.range();
        let center = (self.viewport.start + self.viewport.end) / 2.0;
        let new_range = if direction > 0 {
            (range * self.settings.zoom_factor).min(self.max_time)
        } else {
            (range / self.settings.zoom_factor).max(self.min_gap)
        };

        let mut start = center - new_range / 2.0;
        let mut end = center + new_range / 2.0;
        if start < 0.0 {
            start = 0.0;
            end = new_range;
        } else if end > self.max_time {
            end = self.max_time;
            start = self.max_time - new_range;
        }
        self.viewport = Viewport { start, end };
    }

    /// Move the window start directly (range-slider handle), clamped so the
    /// window keeps at least `min_gap` of room before its end.
    pub fn set_start(&mut self, value: f64) {
        let clamped = value.clamp(0.0, (self.viewport.end - self.min_gap).max(0.0));
        self.viewport.start = clamped;
    }

    /// Move the window end directly (range-slider handle), clamped into
    /// `[start + min_gap, max_time]`.
    pub fn set_end(&mut self, value: f64) {
        let clamped = value
            .max(self.viewport.start + self.min_gap)
            .min(self.max_time.max(self.min_gap));
        self.viewport.end = clamped;
    }
}
