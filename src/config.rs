//! Configuration loading and validation
//!
//! The widget is configured with a single JSON document: asset locations
//! for the renderer, opaque CSS property maps the host applies to its
//! containers, and the behavior catalog. Validation happens once at load
//! time so an unknown or malformed behavior can never surface mid-session.

use std::collections::HashMap;

use serde::Deserialize;

use crate::catalog::{BehaviorCatalog, IDLE_BEHAVIOR, INTERACT_BEHAVIOR, START_BEHAVIOR};

/// Errors detected while loading or validating a widget configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse widget configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("behavior `{0}` is referenced by the widget but not configured")]
    MissingBehavior(&'static str),

    #[error("behavior `{0}` must use the simple shape (single animation and voice)")]
    NotSimple(&'static str),

    #[error("behavior `{name}` has an empty `{list}` list")]
    EmptyList { name: String, list: &'static str },
}

/// CSS property maps the host applies to the widget's containers.
///
/// Opaque to this crate; carried through for the embedder.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleConfig {
    /// Properties for the widget container
    #[serde(default)]
    pub widget: HashMap<String, String>,
    /// Properties for the voice caption container
    #[serde(default)]
    pub voice_text: HashMap<String, String>,
}

/// Full widget configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Prefix prepended to every relative asset path
    #[serde(default)]
    pub url_prefix: String,
    /// Skeleton asset path for the renderer
    pub skeleton: String,
    /// Atlas asset path for the renderer
    pub atlas: String,
    /// Render skin name
    #[serde(default)]
    pub skin: Option<String>,
    /// Single-map form: properties for the widget container only
    #[serde(default)]
    pub style: HashMap<String, String>,
    /// Two-container form
    #[serde(default)]
    pub styles: StyleConfig,
    /// Named behaviors
    pub behaviors: BehaviorCatalog,
}

impl WidgetConfig {
    /// Parse and validate a configuration document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Build the absolute URL for a relative asset path
    pub fn resolve_url(&self, path: &str) -> String {
        format!("{}{}", self.url_prefix, path)
    }

    /// Check every invariant the rest of the widget relies on.
    ///
    /// The sequencer, gate and voice player assume `start`, `idle` and
    /// `interact` exist, that `start`/`idle` resolve to exactly one step,
    /// and that multi behaviors have something to play and say.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for name in [START_BEHAVIOR, IDLE_BEHAVIOR, INTERACT_BEHAVIOR] {
            if !self.behaviors.contains(name) {
                return Err(ConfigError::MissingBehavior(name));
            }
        }

        for name in [START_BEHAVIOR, IDLE_BEHAVIOR] {
            if let Some(behavior) = self.behaviors.get(name) {
                if !behavior.is_simple() {
                    return Err(ConfigError::NotSimple(name));
                }
            }
        }

        if let Some(crate::catalog::Behavior::Multi {
            animations, voices, ..
        }) = self.behaviors.get(INTERACT_BEHAVIOR)
        {
            if animations.is_empty() {
                return Err(ConfigError::EmptyList {
                    name: INTERACT_BEHAVIOR.to_string(),
                    list: "animations",
                });
            }
            if voices.is_empty() {
                return Err(ConfigError::EmptyList {
                    name: INTERACT_BEHAVIOR.to_string(),
                    list: "voices",
                });
            }
        }

        Ok(())
    }
}
