//! Voice player implementation

use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::catalog::VoiceRef;
use crate::events::WidgetEvent;

/// Errors surfaced by an audio sink implementation
#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("playback was blocked by the host: {0}")]
    Blocked(String),

    #[error("audio source unavailable: {0}")]
    Unavailable(String),
}

/// Load and start one audio asset by absolute URL.
///
/// `ended` and `timeupdate` come back to the widget as input events, wired
/// by the host from the underlying audio element.
pub trait AudioSink: Send {
    fn play(&mut self, url: &str) -> Result<(), AudioError>;
}

/// Plays at most one voice line at a time
pub struct VoicePlayer {
    playing: bool,
    caption: Option<String>,
    /// Caption scroll indicator, 0.0 at line start, 1.0 at line end
    progress: f64,
    event_tx: broadcast::Sender<WidgetEvent>,
}

impl VoicePlayer {
    pub fn new(event_tx: broadcast::Sender<WidgetEvent>) -> Self {
        Self {
            playing: false,
            caption: None,
            progress: 0.0,
            event_tx,
        }
    }

    /// Start a voice line.
    ///
    /// On success the caption (if any) is shown and the progress indicator
    /// resets to the start. On failure the player reverts to idle and the
    /// failure is reported; it is never retried, and animation sequencing
    /// continues unaffected.
    pub fn play(&mut self, voice: VoiceRef, url: &str, sink: &mut dyn AudioSink) {
        self.playing = true;
        match sink.play(url) {
            Ok(()) => {
                debug!(%url, "voice line started");
                self.caption = voice.caption.clone();
                self.progress = 0.0;
                let _ = self.event_tx.send(WidgetEvent::VoiceStarted {
                    caption: voice.caption,
                });
            }
            Err(e) => {
                self.playing = false;
                warn!(%url, error = %e, "voice playback failed");
                let _ = self.event_tx.send(WidgetEvent::VoiceFailed {
                    reason: e.to_string(),
                });
            }
        }
    }

    /// The audio element fired `ended`
    pub fn on_ended(&mut self) {
        if !self.playing {
            return;
        }
        debug!("voice line ended");
        self.playing = false;
        self.caption = None;
        let _ = self.event_tx.send(WidgetEvent::VoiceEnded);
    }

    /// The audio element fired `timeupdate`
    pub fn on_time_update(&mut self, position: f64, duration: f64) {
        if !self.playing || duration <= 0.0 {
            return;
        }
        self.progress = (position / duration).clamp(0.0, 1.0);
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }
}
