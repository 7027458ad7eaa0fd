//! Behavior catalog: named bundles of animation and voice data
//!
//! A behavior ties a semantic action (`start`, `idle`, `interact`, ...) to
//! the animation segments and voice lines that express it. The catalog is
//! pure data: lookups clone, nothing here mutates after load.

use std::collections::HashMap;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use serde::Deserialize;

/// Behavior name the renderer starts on
pub const START_BEHAVIOR: &str = "start";
/// Behavior name of the always-available fallback animation
pub const IDLE_BEHAVIOR: &str = "idle";
/// Behavior name played when an interaction is accepted
pub const INTERACT_BEHAVIOR: &str = "interact";

/// One atomic animation play request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnimationStep {
    /// Animation name as known to the renderer
    pub name: String,
    /// Restart the segment when it reaches its end
    #[serde(rename = "loop", default)]
    pub looped: bool,
}

impl AnimationStep {
    pub fn once(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            looped: false,
        }
    }
}

/// One voice line plus its optional caption text
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VoiceRef {
    /// Audio locator, relative to the configured URL prefix
    #[serde(rename = "voice")]
    pub audio: String,
    /// Caption shown while the line plays
    #[serde(rename = "text", default)]
    pub caption: Option<String>,
}

/// A configured behavior, in one of its two shapes
///
/// `start` and `idle` use the simple shape (one animation, one voice).
/// Interaction-like behaviors use the multi shape (an ordered segment list
/// and a pool of voice alternatives).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Behavior {
    Multi {
        animations: Vec<AnimationStep>,
        voices: Vec<VoiceRef>,
        #[serde(rename = "maxMinutes", default)]
        max_minutes: Option<u64>,
    },
    Simple {
        animation: String,
        #[serde(default)]
        voice: Option<String>,
        #[serde(default)]
        text: Option<String>,
        #[serde(rename = "maxMinutes", default)]
        max_minutes: Option<u64>,
    },
}

impl Behavior {
    pub fn is_simple(&self) -> bool {
        matches!(self, Behavior::Simple { .. })
    }

    /// `maxMinutes` option, meaningful only on the `idle` behavior
    pub fn max_minutes(&self) -> Option<u64> {
        match self {
            Behavior::Multi { max_minutes, .. } | Behavior::Simple { max_minutes, .. } => {
                *max_minutes
            }
        }
    }
}

/// Immutable name → behavior map
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct BehaviorCatalog {
    behaviors: HashMap<String, Behavior>,
}

impl BehaviorCatalog {
    pub fn get(&self, name: &str) -> Option<&Behavior> {
        self.behaviors.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.behaviors.contains_key(name)
    }

    /// Resolve a behavior to its ordered animation step list.
    ///
    /// Simple behaviors become a non-looping singleton; multi behaviors are
    /// cloned in full so the caller's queue can be consumed without
    /// touching the catalog's own definition.
    pub fn animation_list(&self, name: &str) -> Option<Vec<AnimationStep>> {
        match self.behaviors.get(name)? {
            Behavior::Simple { animation, .. } => Some(vec![AnimationStep::once(animation)]),
            Behavior::Multi { animations, .. } => Some(animations.clone()),
        }
    }

    /// Pick the voice line for one playback of this behavior.
    ///
    /// Multi behaviors choose uniformly at random among their alternatives;
    /// the choice is made once here and stays fixed for the playback.
    pub fn select_voice(&self, name: &str, rng: &mut SmallRng) -> Option<VoiceRef> {
        match self.behaviors.get(name)? {
            Behavior::Simple { voice, text, .. } => voice.as_ref().map(|audio| VoiceRef {
                audio: audio.clone(),
                caption: text.clone(),
            }),
            Behavior::Multi { voices, .. } => voices.choose(rng).cloned(),
        }
    }

    /// The fallback step played whenever the queue drains
    pub fn idle_step(&self) -> Option<AnimationStep> {
        let mut steps = self.animation_list(IDLE_BEHAVIOR)?;
        if steps.is_empty() {
            return None;
        }
        Some(steps.remove(0))
    }

    /// Idle-chatter threshold from the `idle` behavior, if configured
    pub fn idle_max_minutes(&self) -> Option<u64> {
        self.behaviors.get(IDLE_BEHAVIOR)?.max_minutes()
    }
}
