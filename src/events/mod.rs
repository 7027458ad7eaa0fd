//! Outbound widget events
//!
//! Every observable state change is published on a broadcast channel so
//! the host can mirror it in the page: show/hide the caption, move the
//! widget container, surface playback failures.

use serde::{Deserialize, Serialize};

use crate::interaction::RejectReason;

/// Events emitted by the widget while it runs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WidgetEvent {
    /// Lazy initialization finished; the renderer is live
    Initialized,

    /// The sequencer handed a step to the renderer
    StepStarted {
        /// Animation name
        name: String,
        /// Whether the segment loops
        looped: bool,
    },

    /// An interaction request passed the gate
    InteractionAccepted,

    /// An interaction request was turned away
    InteractionRejected {
        /// Why the gate said no
        reason: RejectReason,
    },

    /// A voice line started playing
    VoiceStarted {
        /// Caption to display, when the line has one
        caption: Option<String>,
    },

    /// The current voice line reached its natural end
    VoiceEnded,

    /// A voice line could not be started (autoplay block, bad URL)
    VoiceFailed {
        /// Playback error, stringified
        reason: String,
    },

    /// The idle timer fired and queued the idle voice line
    IdleVoiceTriggered,

    /// The widget container moved (drag or viewport re-clamp)
    WidgetMoved { x: f64, y: f64 },
}

impl std::fmt::Display for WidgetEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WidgetEvent::Initialized => write!(f, "INITIALIZED"),
            WidgetEvent::StepStarted { name, looped } => {
                write!(f, "STEP_STARTED ({name}, loop={looped})")
            }
            WidgetEvent::InteractionAccepted => write!(f, "INTERACTION_ACCEPTED"),
            WidgetEvent::InteractionRejected { reason } => {
                write!(f, "INTERACTION_REJECTED ({reason})")
            }
            WidgetEvent::VoiceStarted { .. } => write!(f, "VOICE_STARTED"),
            WidgetEvent::VoiceEnded => write!(f, "VOICE_ENDED"),
            WidgetEvent::VoiceFailed { reason } => write!(f, "VOICE_FAILED ({reason})"),
            WidgetEvent::IdleVoiceTriggered => write!(f, "IDLE_VOICE_TRIGGERED"),
            WidgetEvent::WidgetMoved { x, y } => write!(f, "WIDGET_MOVED ({x}, {y})"),
        }
    }
}
