//! Interaction gating and idle-chatter throttling
//!
//! The gate decides whether a user-triggered interaction is accepted:
//! only "idle animation showing, queue empty, no voice speaking" is a safe
//! moment to start a new animation/voice pair. The idle timer measures
//! wall-clock time since the last accepted interaction and fires the idle
//! voice line when the configured threshold passes.

mod gate;
mod idle;

pub use gate::{Decision, InteractionGate, RejectReason};
pub use idle::IdleTimer;
