//! Chart interaction: viewport window, MoTeC-style selection state machine,
//! and pointer-to-time mapping.
//!
//! The viewport and the selection are deliberately separate pieces of state:
//! selecting never mutates the viewport, and only an explicit zoom action
//! copies a finalized selection into it. This mirrors professional telemetry
//! tools, where an operator marks several candidate regions before committing
//! to one.

pub mod pointer;
pub mod selection;
pub mod viewport;

pub use pointer::{time_at_x, ChartSurface};
pub use selection::{DragCapture, InteractionController, SelectionRange, SelectionState};
pub use viewport::{min_gap_for, Viewport, ViewportController};
