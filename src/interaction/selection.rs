//! MoTeC-style selection state machine.
//!
//! Selection mode is entered only by a double-activation on the chart surface;
//! a drag then marks a candidate time range without touching the viewport, and
//! a second double-activation on the marked range performs the actual zoom.
//! Holding the move modifier during a drag shifts the viewport instead.
//!
//! The state is a tagged enum with a single transition function so illegal
//! combinations (e.g. selecting while moving) are unrepresentable.

use tracing::debug;

use crate::settings::InteractionSettings;

use super::viewport::{Viewport, ViewportController};

/// A finalized candidate range on the timeline, always sorted and clamped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectionRange {
    pub start: f64,
    pub end: f64,
}

/// A pointer press that has not yet committed to a drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pressed {
    pub x: f64,
    pub y: f64,
    pub time: f64,
}

/// Interaction state. `Armed` is "selection mode": the double-activation gate
/// has been passed but no drag is in progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SelectionState {
    /// Default; single activations are inert
    Idle,
    /// Selection mode active; a press may be pending the drag-commit check
    Armed { pressed: Option<Pressed> },
    /// Dragging out a candidate range; `preview` follows the pointer
    Selecting { anchor: f64, preview: f64 },
    /// Shifting the viewport; `origin` is the snapshot at drag commit
    Moving { grab_time: f64, origin: Viewport },
}

/// Token representing the widened (document-scope) pointer subscription that
/// must exist while a drag is in progress, so move/up events keep arriving
/// after the pointer leaves the chart bounds. The rendering adapter creates
/// the real listener when this appears and removes it when it is dropped.
#[derive(Debug)]
pub struct DragCapture(());

impl DragCapture {
    fn acquire() -> Self {
        debug!("drag capture acquired");
        Self(())
    }
}

impl Drop for DragCapture {
    fn drop(&mut self) {
        debug!("drag capture released");
    }
}

/// Owns the viewport, the selection state machine, and the finalized
/// selection. All pointer/wheel/key events funnel through here; no other
/// component writes this state.
#[derive(Debug)]
pub struct InteractionController {
    viewport: ViewportController,
    state: SelectionState,
    selection: Option<SelectionRange>,
    capture: Option<DragCapture>,
    settings: InteractionSettings,
}

impl InteractionController {
    pub fn new(max_time: f64, settings: InteractionSettings) -> Self {
        Self {
            viewport: ViewportController::new(max_time, settings),
            state: SelectionState::Idle,
            selection: None,
            capture: None,
            settings,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport.viewport()
    }

    pub fn viewport_controller(&mut self) -> &mut ViewportController {
        &mut self.viewport
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// The finalized selection, if any.
    pub fn selection(&self) -> Option<SelectionRange> {
        self.selection
    }

    /// The range to highlight right now: the live preview while dragging,
    /// otherwise the finalized selection.
    pub fn highlight(&self) -> Option<SelectionRange> {
        match self.state {
            SelectionState::Selecting { anchor, preview } => Some(SelectionRange {
                start: anchor.min(preview),
                end: anchor.max(preview),
            }),
            _ => self.selection,
        }
    }

    /// Whether a drag capture subscription is currently held.
    pub fn capturing(&self) -> bool {
        self.capture.is_some()
    }

    /// Double-activation on the chart surface. On the highlighted selection
    /// this zooms to it; anywhere else it enters (or stays in) selection mode.
    /// This is the only entry into interactive selection.
    pub fn double_activate(&mut self, on_selection: bool) {
        if on_selection {
            if let Some(range) = self.selection {
                self.viewport.zoom_to(range.start, range.end);
                return;
            }
        }
        if matches!(self.state, SelectionState::Idle) {
            self.state = SelectionState::Armed { pressed: None };
        }
    }

    /// Pointer press on the chart surface. Inert unless armed; records the
    /// press so movement can be checked against the drag-commit thresholds.
    pub fn pointer_down(&mut self, x: f64, y: f64, time: f64) {
        if let SelectionState::Armed { .. } = self.state {
            self.state = SelectionState::Armed {
                pressed: Some(Pressed { x, y, time }),
            };
        }
    }

    /// Pointer movement. `move_held` is the move-modifier state at this event.
    pub fn pointer_move(&mut self, x: f64, y: f64, time: f64, move_held: bool) {
        match self.state {
            SelectionState::Armed {
                pressed: Some(pressed),
            } => {
                let travel = ((x - pressed.x).powi(2) + (y - pressed.y).powi(2)).sqrt();
                let time_travel = (time - pressed.time).abs();
                if travel > self.settings.drag_pixel_threshold
                    || time_travel > self.settings.drag_time_threshold
                {
                    self.capture = Some(DragCapture::acquire());
                    if move_held {
                        self.state = SelectionState::Moving {
                            grab_time: time,
                            origin: self.viewport.viewport(),
                        };
                    } else {
                        self.state = SelectionState::Selecting {
                            anchor: pressed.time,
                            preview: time,
                        };
                    }
                }
            }
            SelectionState::Selecting { anchor, .. } => {
                self.state = SelectionState::Selecting {
                    anchor,
                    preview: time,
                };
            }
            SelectionState::Moving { grab_time, origin } => {
                self.viewport.shift_from(origin, time - grab_time);
            }
            _ => {}
        }
    }

    /// Pointer release. Finalizes a selection drag, ends a move drag, and
    /// turns a bare press (no committed drag) back into plain armed state
    /// without touching the existing selection.
    pub fn pointer_up(&mut self) {
        match self.state {
            SelectionState::Selecting { anchor, preview } => {
                let max_time = self.viewport.max_time();
                let min_gap = self.viewport.min_gap();
                let start = anchor
                    .min(preview)
                    .clamp(0.0, (max_time - min_gap).max(0.0));
                let end = anchor
                    .max(preview)
                    .clamp(start + min_gap, max_time.max(min_gap));
                self.selection = Some(SelectionRange { start, end });
                self.state = SelectionState::Armed { pressed: None };
            }
            SelectionState::Moving { .. } | SelectionState::Armed { pressed: Some(_) } => {
                self.state = SelectionState::Armed { pressed: None };
            }
            _ => {}
        }
        self.capture = None;
    }

    /// Pointer activation outside the chart surface: leave selection mode,
    /// abandoning any in-progress drag but keeping a finalized selection.
    pub fn outside_activate(&mut self) {
        if !matches!(self.state, SelectionState::Idle) {
            self.state = SelectionState::Idle;
            self.capture = None;
        }
    }

    /// Explicit cancel (escape key): leave selection mode and clear the
    /// finalized selection as well.
    pub fn cancel(&mut self) {
        self.state = SelectionState::Idle;
        self.selection = None;
        self.capture = None;
    }

    /// Reset to the full timeline, clearing selection and armed state.
    pub fn reset(&mut self) {
        self.viewport.reset();
        self.state = SelectionState::Idle;
        self.selection = None;
        self.capture = None;
    }

    /// Wheel tick with the pan modifier held.
    pub fn wheel_pan(&mut self, direction: i32) {
        self.viewport.wheel_pan(direction);
    }

    /// Wheel tick with the zoom modifier held.
    pub fn wheel_zoom(&mut self, direction: i32) {
        self.viewport.wheel_zoom(direction);
    }
}
