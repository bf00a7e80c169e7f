//! Telemetry store boundary.
//!
//! The engine never fetches data itself: a collaborator implementing
//! [`TelemetryStore`] resolves a session identifier to an ordered sample array
//! plus a total-count hint. This module also owns the stale-response guard -
//! requests carry a monotonically increasing sequence number and only the
//! response matching the latest outstanding one may update visible state.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::sample::{Sample, SessionMeta};

/// Parameters for a session data request.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SessionRequest {
    pub session_id: String,
    /// Keep every Nth sample; `None` or `Some(1)` fetches everything
    #[serde(default)]
    pub downsample: Option<u32>,
    /// Include tire temperature and g-force channels
    #[serde(default)]
    pub include_advanced: bool,
    /// Sample-count ceiling; responses may be truncated to this
    #[serde(default)]
    pub limit: Option<usize>,
}

impl SessionRequest {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            ..Self::default()
        }
    }
}

/// Store response: metadata, samples, and the total available count.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SessionResponse {
    #[serde(default)]
    pub session: SessionMeta,
    #[serde(default)]
    pub samples: Vec<Sample>,
    /// Total samples the store holds for this session, which may exceed
    /// `samples.len()` when a ceiling truncated the response
    #[serde(default)]
    pub total_count: usize,
}

impl SessionResponse {
    /// Classify the response completeness. Truncation
    /// (`0 < samples.len() < total_count`) must be surfaced, never swallowed.
    pub fn status(&self) -> DataStatus {
        let received = self.samples.len();
        if received == 0 {
            DataStatus::Empty {
                total: self.total_count,
            }
        } else if received < self.total_count {
            warn!(
                received,
                total = self.total_count,
                "telemetry response truncated by sample ceiling"
            );
            DataStatus::Truncated {
                received,
                total: self.total_count,
            }
        } else {
            DataStatus::Complete { received }
        }
    }
}

/// Completeness of a store response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataStatus {
    /// No samples at all; `total > 0` means samples exist but none were
    /// returned, which callers should surface as a fetch problem
    Empty { total: usize },
    /// Every stored sample was delivered
    Complete { received: usize },
    /// A sample-count ceiling cut the response short
    Truncated { received: usize, total: usize },
}

/// Errors crossing the store boundary.
///
/// Recoverable data conditions (empty, partial, degenerate geometry) are
/// render-model states, not errors; only transport and decode failures land
/// here.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("session not found: {0}")]
    SessionNotFound(String),
    #[error("failed to read session data: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed session data: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("transport failure: {0}")]
    Transport(String),
}

/// The data-fetch collaborator. Cancellation of in-flight fetches is the
/// implementor's concern; the engine only discards stale responses via
/// [`SequenceGuard`].
pub trait TelemetryStore {
    fn fetch_session(&self, request: &SessionRequest) -> Result<SessionResponse, StoreError>;
}

/// Monotonic request-sequence guard against late responses overwriting newer
/// ones (e.g. when the user switches channel groups rapidly).
///
/// Issue a ticket per fetch; on arrival, only a response whose ticket matches
/// the latest issued one is accepted.
#[derive(Debug, Default)]
pub struct SequenceGuard {
    latest: u64,
}

impl SequenceGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new outstanding request and get its sequence number.
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Whether a response with this sequence number may update visible state.
    /// Stale responses are discarded silently - not an error to the user.
    pub fn accept(&self, sequence: u64) -> bool {
        let fresh = sequence == self.latest;
        if !fresh {
            debug!(sequence, latest = self.latest, "discarding stale telemetry response");
        }
        fresh
    }

    /// Latest issued sequence number (0 before the first request).
    pub fn latest(&self) -> u64 {
        self.latest
    }
}

/// A store backed by one JSON file per session (`<session_id>.json`), holding
/// a serialized [`SessionResponse`]. Used by the `session_report` binary and
/// the test suite; production deployments implement [`TelemetryStore`] over
/// their own transport.
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn session_path(&self, session_id: &str) -> PathBuf {
        self.root.join(format!("{session_id}.json"))
    }
}

impl TelemetryStore for JsonFileStore {
    fn fetch_session(&self, request: &SessionRequest) -> Result<SessionResponse, StoreError> {
        let path = self.session_path(&request.session_id);
        if !Path::new(&path).exists() {
            return Err(StoreError::SessionNotFound(request.session_id.clone()));
        }

        let reader = BufReader::new(File::open(&path)?);
        let mut response: SessionResponse = serde_json::from_reader(reader)?;
        if response.total_count == 0 {
            response.total_count = response.samples.len();
        }

        let step = request.downsample.unwrap_or(1).max(1) as usize;
        if step > 1 {
            response.samples = response
                .samples
                .into_iter()
                .step_by(step)
                .collect();
        }
        if let Some(limit) = request.limit {
            response.samples.truncate(limit);
        }
        if !request.include_advanced {
            for sample in &mut response.samples {
                sample.tire_temp_fl = 0.0;
                sample.tire_temp_fr = 0.0;
                sample.tire_temp_rl = 0.0;
                sample.tire_temp_rr = 0.0;
                sample.g_force_lateral = 0.0;
                sample.g_force_longitudinal = 0.0;
            }
        }

        Ok(response)
    }
}
