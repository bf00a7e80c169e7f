//! Track reconstruction tests.
//!
//! Covers:
//! - Sample cleaning and outlier removal
//! - Path smoothing and boundary offsets
//! - Corner detection
//! - Speed banding
//! - Orthographic and first-person projection
//! - Render-model assembly

pub mod cleaner_tests;
pub mod corners_tests;
pub mod speed_tests;
