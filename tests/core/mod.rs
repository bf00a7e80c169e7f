//! Core engine tests.
//!
//! Covers:
//! - Timeline normalization
//! - Viewport invariants and navigation
//! - Selection state machine
//! - Pointer-to-time mapping
//! - Store boundary and sequence guard

pub mod pointer_tests;
