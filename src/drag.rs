//! Drag controller: repositions the widget within the viewport
//!
//! Holds the widget's position as a typed value instead of reading it
//! back out of container styles. Independent of the sequencing
//! components; the host applies the positions this controller reports.

use tracing::debug;

use crate::input::{Position, Size, Viewport};

/// Gesture state. Dragging is the only non-idle state; a pointer-down
/// while idle is the only way in.
#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    Idle,
    Dragging {
        /// Pointer offset from the widget origin, captured at pointer-down
        grab: Position,
    },
}

/// Tracks one drag gesture at a time and clamps the result on-screen
pub struct DragController {
    position: Position,
    widget_size: Size,
    state: DragState,
}

impl DragController {
    pub fn new(position: Position, widget_size: Size) -> Self {
        Self {
            position,
            widget_size,
            state: DragState::Idle,
        }
    }

    /// Current widget origin
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Pointer went down. Starts a gesture only if it landed inside the
    /// widget's bounding box; returns whether a drag began.
    pub fn pointer_down(&mut self, pointer: Position) -> bool {
        let inside = pointer.x >= self.position.x
            && pointer.x < self.position.x + self.widget_size.width
            && pointer.y >= self.position.y
            && pointer.y < self.position.y + self.widget_size.height;
        if !inside {
            return false;
        }

        self.state = DragState::Dragging {
            grab: Position::new(pointer.x - self.position.x, pointer.y - self.position.y),
        };
        debug!(x = pointer.x, y = pointer.y, "drag started");
        true
    }

    /// Pointer moved. Mid-drag this repositions the widget, clamped to
    /// the viewport, and returns the new origin; otherwise `None`.
    pub fn pointer_move(&mut self, pointer: Position, viewport: Viewport) -> Option<Position> {
        let DragState::Dragging { grab } = self.state else {
            return None;
        };

        let raw = Position::new(pointer.x - grab.x, pointer.y - grab.y);
        self.position = clamp_to_viewport(raw, self.widget_size, viewport);
        Some(self.position)
    }

    /// Pointer released; the gesture ends
    pub fn pointer_up(&mut self) {
        if self.is_dragging() {
            debug!(x = self.position.x, y = self.position.y, "drag ended");
        }
        self.state = DragState::Idle;
    }

    /// Viewport dimensions changed; pull the widget back on-screen if the
    /// shrink left it outside. Returns the (possibly unchanged) origin.
    pub fn viewport_resized(&mut self, viewport: Viewport) -> Position {
        self.position = clamp_to_viewport(self.position, self.widget_size, viewport);
        self.position
    }
}

/// Clamp both axes to `[0, viewport − widget]`. A widget larger than the
/// viewport pins to the top-left corner.
fn clamp_to_viewport(p: Position, size: Size, viewport: Viewport) -> Position {
    let max_x = (viewport.width - size.width).max(0.0);
    let max_y = (viewport.height - size.height).max(0.0);
    Position::new(p.x.clamp(0.0, max_x), p.y.clamp(0.0, max_y))
}
