//! Render-model assembly.
//!
//! Pulls the normalized channels, interaction state, cleaned track geometry,
//! and projection together into backend-agnostic view structures. Everything
//! here is a pure function of its inputs; a rendering adapter (SVG, canvas,
//! immediate-mode UI) walks the output without re-deriving any geometry.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter};
use tracing::debug;

use crate::interaction::{SelectionRange, Viewport};
use crate::normalize::{normalize, window, NormalizedPoint};
use crate::projection::OrthoCamera;
use crate::sample::SessionMeta;
use crate::settings::EngineSettings;
use crate::store::{DataStatus, SessionResponse};
use crate::track::{
    clean, detect_corners, reconstruct_path, smooth_path, Bounds, CleanedTrackSample, PathModel,
    PathSegment, Point, SpeedBand,
};

/// Maximum time distance for a hover to attach to a track sample, seconds.
const HOVER_ATTACH_WINDOW: f64 = 1.0;

/// Minimum cleaned-sample count before lap detection is attempted.
const LAP_DETECT_MIN_SAMPLES: usize = 100;

/// Lap detection skips this many leading samples so the start point does not
/// match itself.
const LAP_DETECT_SKIP: usize = 50;

/// A lap crossing counts when a point comes within this fraction of the
/// track's x-extent of the start point.
const LAP_DETECT_RADIUS_FRACTION: f64 = 0.05;

/// Channel groupings for the time-series chart tabs.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, AsRefStr, EnumIter, Default,
)]
pub enum ChartGroup {
    #[default]
    Speed,
    Pedals,
    TireTemps,
    GForce,
}

impl ChartGroup {
    /// Series labels, in draw order.
    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            ChartGroup::Speed => &["Speed (km/h)", "RPM"],
            ChartGroup::Pedals => &["Throttle (%)", "Brake (%)", "Steering"],
            ChartGroup::TireTemps => &["FL", "FR", "RL", "RR"],
            ChartGroup::GForce => &["Lateral G", "Longitudinal G"],
        }
    }

    /// Channel values for one point, matching `labels` order.
    pub fn values(&self, point: &NormalizedPoint) -> Vec<f64> {
        match self {
            ChartGroup::Speed => vec![point.speed, point.rpm],
            ChartGroup::Pedals => vec![point.throttle, point.brake, point.steering],
            ChartGroup::TireTemps => {
                vec![point.tire_fl, point.tire_fr, point.tire_rl, point.tire_rr]
            }
            ChartGroup::GForce => vec![point.g_lat, point.g_long],
        }
    }
}

/// The time-series chart: points inside the viewport plus the highlight range.
#[derive(Clone, Debug)]
pub struct ChartView {
    pub viewport: Viewport,
    /// Live preview while selecting, else the finalized selection
    pub highlight: Option<SelectionRange>,
    pub group: ChartGroup,
    pub points: Vec<NormalizedPoint>,
}

/// Build the chart view for one channel group.
pub fn build_chart_view(
    points: &[NormalizedPoint],
    viewport: Viewport,
    highlight: Option<SelectionRange>,
    group: ChartGroup,
) -> ChartView {
    ChartView {
        viewport,
        highlight,
        group,
        points: window(points, viewport.start, viewport.end)
            .cloned()
            .collect(),
    }
}

/// One screen-space point of the driving line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathPoint {
    pub pos: Point,
    pub band: SpeedBand,
    pub color: [u8; 3],
    pub speed: f64,
    pub heading: f64,
    pub is_corner: bool,
    pub source_index: usize,
}

/// The fastest point of the session, for the callout marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaxSpeedMarker {
    pub pos: Point,
    pub speed: f64,
}

/// A detected start-line crossing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LapMarker {
    pub pos: Point,
    /// Index into the cleaned sample array
    pub sample_index: usize,
}

/// Current vehicle pose on the map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarMarker {
    pub pos: Point,
    /// Heading in degrees
    pub heading: f64,
}

/// Live channel readout next to the car marker.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HudSnapshot {
    pub time: f64,
    pub speed: f64,
    pub throttle: f64,
    pub brake: f64,
    pub steering: f64,
}

/// Fully assembled, screen-space track map.
#[derive(Clone, Debug)]
pub struct TrackView {
    pub points: Vec<PathPoint>,
    pub centerline: PathModel,
    pub left_boundary: PathModel,
    pub right_boundary: PathModel,
    /// Screen positions of detected corners
    pub corners: Vec<Point>,
    pub start_marker: Point,
    pub finish_marker: Point,
    pub max_speed: Option<MaxSpeedMarker>,
    pub lap_markers: Vec<LapMarker>,
    pub car: CarMarker,
    pub hud: HudSnapshot,
    /// Estimated half-width, world units
    pub half_width: f64,
    /// Number of position outliers removed during cleaning
    pub dropped_outliers: usize,
}

/// Track map states a renderer must handle explicitly.
#[derive(Clone, Debug)]
pub enum TrackScene {
    /// No sample carried a usable position fix
    NoPositionData,
    /// Too few cleaned samples to reconstruct any geometry
    InsufficientPositionData,
    Ready(TrackView),
}

/// Build the track scene from normalized points.
///
/// `hovered_time` and `selected_time` pick the HUD sample, in that priority;
/// with neither attached the last cleaned sample is shown.
pub fn build_track_scene(
    points: &[NormalizedPoint],
    hovered_time: Option<f64>,
    selected_time: Option<f64>,
    camera: &OrthoCamera,
    settings: &EngineSettings,
) -> TrackScene {
    let outcome = clean(points, &settings.cleaner);
    if outcome.samples.is_empty() {
        return TrackScene::NoPositionData;
    }
    let Some(bounds) = outcome.bounds.filter(|_| outcome.samples.len() >= 2) else {
        return TrackScene::InsufficientPositionData;
    };
    let samples = &outcome.samples;

    let min_speed = samples.iter().map(|s| s.speed).fold(f64::INFINITY, f64::min);
    let max_speed = samples
        .iter()
        .map(|s| s.speed)
        .fold(f64::NEG_INFINITY, f64::max);

    let path = reconstruct_path(samples, &bounds, &settings.path);
    let corner_indices = detect_corners(samples, &settings.path);

    let mut is_corner = vec![false; samples.len()];
    for &i in &corner_indices {
        is_corner[i] = true;
    }

    let points_screen: Vec<PathPoint> = samples
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let band = SpeedBand::classify(s.speed, min_speed, max_speed);
            PathPoint {
                pos: camera.project(s.position, &bounds),
                band,
                color: band.color(),
                speed: s.speed,
                heading: s.heading,
                is_corner: is_corner[i],
                source_index: s.source_index,
            }
        })
        .collect();

    let diagonal = bounds.diagonal();
    let centerline = project_model(
        &smooth_path(
            &path.center,
            diagonal * settings.path.centerline_gap_fraction,
            settings.path.smoothness,
        ),
        camera,
        &bounds,
    );
    let boundary_gap = diagonal * settings.path.boundary_gap_fraction;
    let left_boundary = project_model(
        &smooth_path(&path.left, boundary_gap, settings.path.smoothness),
        camera,
        &bounds,
    );
    let right_boundary = project_model(
        &smooth_path(&path.right, boundary_gap, settings.path.smoothness),
        camera,
        &bounds,
    );

    let corners = corner_indices
        .iter()
        .map(|&i| camera.project(samples[i].position, &bounds))
        .collect();

    let max_speed_marker = samples
        .iter()
        .position(|s| s.speed == max_speed)
        .map(|i| MaxSpeedMarker {
            pos: camera.project(samples[i].position, &bounds),
            speed: max_speed,
        });

    let lap_markers = detect_laps(samples, &bounds)
        .into_iter()
        .map(|i| LapMarker {
            pos: camera.project(samples[i].position, &bounds),
            sample_index: i,
        })
        .collect();

    let hud_sample = current_sample(samples, hovered_time, selected_time);
    let car = CarMarker {
        pos: camera.project(hud_sample.position, &bounds),
        heading: hud_sample.heading,
    };
    let hud = HudSnapshot {
        time: hud_sample.time,
        speed: hud_sample.speed,
        throttle: hud_sample.throttle,
        brake: hud_sample.brake,
        steering: hud_sample.steering,
    };

    debug!(
        samples = samples.len(),
        dropped = outcome.dropped.len(),
        corners = corner_indices.len(),
        "track scene assembled"
    );

    TrackScene::Ready(TrackView {
        points: points_screen,
        centerline,
        left_boundary,
        right_boundary,
        corners,
        start_marker: camera.project(samples[0].position, &bounds),
        finish_marker: camera.project(samples[samples.len() - 1].position, &bounds),
        max_speed: max_speed_marker,
        lap_markers,
        car,
        hud,
        half_width: path.half_width,
        dropped_outliers: outcome.dropped.len(),
    })
}

/// Complete session output: metadata, response status, chart, and track map.
#[derive(Clone, Debug)]
pub struct SessionView {
    pub meta: SessionMeta,
    pub status: DataStatus,
    pub max_time: f64,
    pub chart: ChartView,
    pub track: TrackScene,
}

/// Assemble the whole session view from a store response, showing the full
/// time range with no selection.
pub fn build_session_view(
    response: &SessionResponse,
    group: ChartGroup,
    camera: &OrthoCamera,
    settings: &EngineSettings,
) -> SessionView {
    let status = response.status();
    let (points, max_time) = normalize(&response.samples);
    let viewport = Viewport {
        start: 0.0,
        end: max_time,
    };

    let track = if points.is_empty() {
        TrackScene::NoPositionData
    } else {
        build_track_scene(&points, None, None, camera, settings)
    };

    SessionView {
        meta: response.session.clone(),
        status,
        max_time,
        chart: build_chart_view(&points, viewport, None, group),
        track,
    }
}

/// Start-line crossings: indices of cleaned samples (past the skip window)
/// that pass within a fraction of the x-extent of the start point.
fn detect_laps(samples: &[CleanedTrackSample], bounds: &Bounds) -> Vec<usize> {
    if samples.len() < LAP_DETECT_MIN_SAMPLES {
        return Vec::new();
    }
    let start = samples[0].position;
    let radius = bounds.width() * LAP_DETECT_RADIUS_FRACTION;
    (LAP_DETECT_SKIP..samples.len())
        .filter(|&i| samples[i].position.distance_to(start) < radius)
        .collect()
}

/// HUD sample lookup: hovered time wins when a sample lies within the attach
/// window, then the selected time, then the most recent sample.
fn current_sample<'a>(
    samples: &'a [CleanedTrackSample],
    hovered_time: Option<f64>,
    selected_time: Option<f64>,
) -> &'a CleanedTrackSample {
    hovered_time
        .and_then(|t| nearest_sample(samples, t))
        .or_else(|| selected_time.and_then(|t| nearest_sample(samples, t)))
        .unwrap_or(&samples[samples.len() - 1])
}

fn nearest_sample(samples: &[CleanedTrackSample], time: f64) -> Option<&CleanedTrackSample> {
    let best = samples
        .iter()
        .min_by(|a, b| (a.time - time).abs().total_cmp(&(b.time - time).abs()))?;
    ((best.time - time).abs() < HOVER_ATTACH_WINDOW).then_some(best)
}

/// Map a world-space path model through the camera. The projection is affine,
/// so cubic control points project to the control points of the projected
/// curve.
fn project_model(model: &PathModel, camera: &OrthoCamera, bounds: &Bounds) -> PathModel {
    let segments = model
        .segments
        .iter()
        .map(|segment| match *segment {
            PathSegment::MoveTo(p) => PathSegment::MoveTo(camera.project(p, bounds)),
            PathSegment::LineTo(p) => PathSegment::LineTo(camera.project(p, bounds)),
            PathSegment::CubicTo { c1, c2, to } => PathSegment::CubicTo {
                c1: camera.project(c1, bounds),
                c2: camera.project(c2, bounds),
                to: camera.project(to, bounds),
            },
        })
        .collect();
    PathModel { segments }
}
