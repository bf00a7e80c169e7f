//! Session report CLI.
//!
//! Loads a JSON session dump through the store boundary, builds the full
//! render model, and logs a summary of what a frontend would draw. Useful
//! for sanity-checking exported session files without a rendering backend.
//!
//! Usage: `session_report <data-dir> <session-id>`

use anyhow::{bail, Context};

use traceline::projection::OrthoCamera;
use traceline::render::{build_session_view, ChartGroup, TrackScene};
use traceline::settings::EngineSettings;
use traceline::store::{DataStatus, JsonFileStore, SessionRequest, TelemetryStore};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    let (data_dir, session_id) = match args.as_slice() {
        [_, dir, id] => (dir.clone(), id.clone()),
        _ => bail!("usage: session_report <data-dir> <session-id>"),
    };

    let store = JsonFileStore::new(&data_dir);
    let request = SessionRequest {
        include_advanced: true,
        ..SessionRequest::new(session_id.clone())
    };
    let response = store
        .fetch_session(&request)
        .with_context(|| format!("loading session '{session_id}' from {data_dir}"))?;

    let settings = EngineSettings::default();
    let camera = OrthoCamera::default();
    let view = build_session_view(&response, ChartGroup::Speed, &camera, &settings);

    tracing::info!(
        track = view.meta.track_name.as_deref().unwrap_or("unknown"),
        car = view.meta.car_name.as_deref().unwrap_or("unknown"),
        max_time = view.max_time,
        chart_points = view.chart.points.len(),
        "session loaded"
    );

    match view.status {
        DataStatus::Empty { total } => {
            tracing::warn!(total, "session contains no samples");
        }
        DataStatus::Truncated { received, total } => {
            tracing::warn!(received, total, "partial data; report covers a subset");
        }
        DataStatus::Complete { received } => {
            tracing::info!(received, "complete sample set");
        }
    }

    match &view.track {
        TrackScene::NoPositionData => {
            tracing::info!("no position data; track map unavailable");
        }
        TrackScene::InsufficientPositionData => {
            tracing::info!("too few position fixes to reconstruct the track");
        }
        TrackScene::Ready(track) => {
            tracing::info!(
                path_points = track.points.len(),
                corners = track.corners.len(),
                laps = track.lap_markers.len(),
                dropped_outliers = track.dropped_outliers,
                half_width = track.half_width,
                "track reconstructed"
            );
            if let Some(marker) = &track.max_speed {
                tracing::info!(speed_kmh = marker.speed, "max speed");
            }
        }
    }

    Ok(())
}
