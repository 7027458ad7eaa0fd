//! Accept/reject decision for user-triggered interactions

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::{debug, info};

use crate::events::WidgetEvent;

/// Why an interaction request was turned away
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// A voice line is still speaking
    VoicePlaying,
    /// Queued animation steps have not played yet
    QueueBusy,
    /// The active track is not showing the idle animation
    NotIdle,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::VoicePlaying => write!(f, "voice playing"),
            RejectReason::QueueBusy => write!(f, "queue busy"),
            RejectReason::NotIdle => write!(f, "not idle"),
        }
    }
}

/// Outcome of an interaction request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accepted,
    Rejected(RejectReason),
}

/// The gate in front of the `interact` behavior
///
/// A rejection is expected steady-state behavior, not an error: it is
/// logged as a notice and reported on the event channel, nothing else
/// changes.
pub struct InteractionGate {
    event_tx: broadcast::Sender<WidgetEvent>,
}

impl InteractionGate {
    pub fn new(event_tx: broadcast::Sender<WidgetEvent>) -> Self {
        Self { event_tx }
    }

    /// Evaluate an interaction request against current widget state
    pub fn evaluate(
        &self,
        voice_playing: bool,
        queue_empty: bool,
        at_idle_step: bool,
    ) -> Decision {
        let reason = if voice_playing {
            Some(RejectReason::VoicePlaying)
        } else if !queue_empty {
            Some(RejectReason::QueueBusy)
        } else if !at_idle_step {
            Some(RejectReason::NotIdle)
        } else {
            None
        };

        match reason {
            Some(reason) => {
                info!(%reason, "interaction too frequent, rejected");
                let _ = self
                    .event_tx
                    .send(WidgetEvent::InteractionRejected { reason });
                Decision::Rejected(reason)
            }
            None => {
                debug!("interaction accepted");
                let _ = self.event_tx.send(WidgetEvent::InteractionAccepted);
                Decision::Accepted
            }
        }
    }
}
