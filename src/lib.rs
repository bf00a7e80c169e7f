//! Traceline - telemetry visualization and track reconstruction engine
//!
//! This library turns an irregular stream of time-stamped vehicle samples into
//! a navigable multi-channel time-series view and a reconstructed 2D track map,
//! emitted as a render-agnostic draw model. It contains no drawing code: a thin
//! adapter per rendering backend (canvas, GPU, SVG) consumes [`render`] output.
//!
//! ## Module Structure
//!
//! - [`sample`] - Telemetry sample and session metadata wire types
//! - [`store`] - Telemetry store boundary: requests, responses, stale-response guard
//! - [`normalize`] - Zero-origin timeline rebasing for charting
//! - [`settings`] - Named tuning constants (overridable, defaults from field data)
//! - [`interaction`] - Viewport window, MoTeC-style selection state machine,
//!   pointer-to-time mapping
//! - [`track`] - Position cleaning, path reconstruction, corner detection,
//!   speed banding
//! - [`projection`] - Orthographic and first-person world-to-screen projections
//! - [`render`] - Backend-agnostic render model assembly

pub mod interaction;
pub mod normalize;
pub mod projection;
pub mod render;
pub mod sample;
pub mod settings;
pub mod store;
pub mod track;
