//! Voice playback module
//!
//! At most one voice line is ever in flight. The player tracks
//! playing/idle state and the caption shown alongside the line; mutual
//! exclusion between playbacks is the interaction gate's job, not ours.

mod player;

pub use player::{AudioError, AudioSink, VoicePlayer};
