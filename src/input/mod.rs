//! Input events fed to the widget by its host
//!
//! The host forwards DOM-side happenings (pointer/touch/scroll activity,
//! renderer completion callbacks, audio element events) into a single mpsc
//! channel. Draining one channel gives every handler run-to-completion
//! semantics: no two mutations ever interleave.

mod geometry;

pub use geometry::{Position, Size, Viewport, WidgetLayout};

use crate::catalog::AnimationStep;

/// Everything the widget reacts to, in arrival order
#[derive(Debug, Clone)]
pub enum WidgetInput {
    /// Mouse button pressed somewhere in the viewport
    PointerDown(Position),
    /// Mouse moved (only meaningful mid-drag)
    PointerMove(Position),
    /// Mouse button released
    PointerUp,
    /// Touch began somewhere in the viewport
    TouchStart(Position),
    /// Page scrolled
    Scroll,
    /// Click landed on the widget's own canvas
    CanvasClick,
    /// Viewport dimensions changed
    ViewportResized(Viewport),
    /// The renderer finished playing one animation segment
    SegmentComplete(AnimationStep),
    /// The audio element fired `ended`
    AudioEnded,
    /// The audio element fired `timeupdate`
    AudioTimeUpdate { position: f64, duration: f64 },
}

impl WidgetInput {
    /// User-activity events: the trigger set for lazy initialization and
    /// for re-evaluating the idle-voice timer.
    pub fn is_activity(&self) -> bool {
        matches!(
            self,
            WidgetInput::PointerDown(_) | WidgetInput::TouchStart(_) | WidgetInput::Scroll
        )
    }
}
