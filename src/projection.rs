//! World-to-screen projection: a pannable/zoomable orthographic top-down
//! camera for the track map, and a perspective chase camera for the
//! driver's-eye view.

use serde::{Deserialize, Serialize};

use crate::track::{Bounds, Point};

/// Minimum and maximum orthographic zoom.
pub const ZOOM_MIN: f64 = 0.1;
pub const ZOOM_MAX: f64 = 5.0;

/// Top-down camera over the reconstructed track.
///
/// Projection order: recenter on the track bounds, rotate, apply the
/// aspect-preserving fit scale times the user zoom, then translate to the
/// view center plus pan.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct OrthoCamera {
    pub view_width: f64,
    pub view_height: f64,
    /// Pixels left free around the fitted track
    pub padding: f64,
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
    /// View rotation in degrees, counterclockwise
    pub rotation_deg: f64,
}

impl Default for OrthoCamera {
    fn default() -> Self {
        Self {
            view_width: 1200.0,
            view_height: 600.0,
            padding: 80.0,
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            rotation_deg: 0.0,
        }
    }
}

impl OrthoCamera {
    pub fn new(view_width: f64, view_height: f64) -> Self {
        Self {
            view_width,
            view_height,
            ..Self::default()
        }
    }

    /// Scale that fits `bounds` into the padded view, preserving aspect.
    /// Degenerate bounds (a stationary car) fall back to 1.0.
    pub fn base_scale(&self, bounds: &Bounds) -> f64 {
        let usable_w = self.view_width - 2.0 * self.padding;
        let usable_h = self.view_height - 2.0 * self.padding;
        if bounds.width() <= 0.0 || bounds.height() <= 0.0 || usable_w <= 0.0 || usable_h <= 0.0 {
            return 1.0;
        }
        (usable_w / bounds.width()).min(usable_h / bounds.height())
    }

    /// Project a world-space point into view coordinates.
    pub fn project(&self, point: Point, bounds: &Bounds) -> Point {
        let center = bounds.center();
        let x = point.x - center.x;
        let y = point.y - center.y;

        let theta = self.rotation_deg.to_radians();
        let (sin, cos) = theta.sin_cos();
        let rx = x * cos - y * sin;
        let ry = x * sin + y * cos;

        let scale = self.base_scale(bounds) * self.zoom;
        Point::new(
            self.view_width / 2.0 + rx * scale + self.pan_x,
            self.view_height / 2.0 + ry * scale + self.pan_y,
        )
    }

    /// Wheel zoom: one notch in (`1`) or out (`-1`), multiplicative.
    pub fn wheel_zoom(&mut self, direction: i32) {
        let factor = if direction > 0 { 1.1 } else { 0.9 };
        self.zoom = (self.zoom * factor).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Button zoom: a coarser step than the wheel.
    pub fn button_zoom(&mut self, direction: i32) {
        let factor = if direction > 0 { 1.2 } else { 0.8 };
        self.zoom = (self.zoom * factor).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Keyboard zoom: additive step.
    pub fn key_zoom(&mut self, direction: i32) {
        let step = if direction > 0 { 0.1 } else { -0.1 };
        self.zoom = (self.zoom + step).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Keyboard pan, 20 view pixels per press.
    pub fn key_pan(&mut self, dx: i32, dy: i32) {
        self.pan_x += dx as f64 * 20.0;
        self.pan_y += dy as f64 * 20.0;
    }

    /// Drag pan by a raw pointer delta.
    pub fn drag_pan(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Restore the default fit: unit zoom, no pan, no rotation.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
        self.rotation_deg = 0.0;
    }
}

/// Driver's-eye perspective camera, positioned at the car and looking along
/// its heading. Output coordinates are relative to the car's screen anchor;
/// the renderer translates them into place.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ChaseCamera {
    /// Car position in world space
    pub position: Point,
    /// Car heading in degrees
    pub heading_deg: f64,
    /// Virtual eye height; larger values flatten the perspective
    pub camera_height: f64,
    /// Screen y of the horizon line, relative to the car anchor
    pub horizon_y: f64,
}

impl ChaseCamera {
    pub fn new(position: Point, heading_deg: f64) -> Self {
        Self {
            position,
            heading_deg,
            camera_height: 200.0,
            horizon_y: -150.0,
        }
    }

    /// Perspective scale at a given depth ahead of the car.
    pub fn scale_at(&self, depth: f64) -> f64 {
        self.camera_height / (self.camera_height + depth)
    }

    /// Project a world point into the view. Points behind the camera
    /// (negative depth) have no screen position and return `None`.
    pub fn project(&self, point: Point) -> Option<Point> {
        // Translate into car-local coordinates, then rotate so the heading
        // becomes the depth axis
        let dx = point.x - self.position.x;
        let dy = point.y - self.position.y;

        let theta = -self.heading_deg.to_radians();
        let (sin, cos) = theta.sin_cos();
        let lateral = dx * cos - dy * sin;
        let depth = dx * sin + dy * cos;

        if depth < 0.0 {
            return None;
        }

        let scale = self.scale_at(depth);
        Some(Point::new(lateral * scale, self.horizon_y - depth * scale))
    }
}
