//! mascot-widget: driver for an interactive animated mascot widget
//!
//! This crate is the sequencing brain of an embedded mascot: it decides
//! which skeletal animation plays next, keeps voice-line playback and
//! animation state in sync, gates user interactions, throttles idle
//! chatter, and lets the user drag the widget around the viewport.
//!
//! The heavy machinery stays outside: the skeletal renderer, binary asset
//! download and audio playback are consumed through narrow traits
//! ([`render::AnimationRenderer`], [`assets::AssetFetcher`],
//! [`voice::AudioSink`]), and the host forwards DOM events into a single
//! input channel. Everything runs single-threaded and event-driven:
//! one [`input::WidgetInput`] at a time, to completion.
//!
//! ```no_run
//! # use mascot_widget::{MascotWidget, WidgetConfig, WidgetInput};
//! # use mascot_widget::input::{Position, Size, Viewport, WidgetLayout};
//! # async fn example(renderer: Box<dyn mascot_widget::render::AnimationRenderer>,
//! #                  audio: Box<dyn mascot_widget::voice::AudioSink>,
//! #                  fetcher: Box<dyn mascot_widget::assets::AssetFetcher>,
//! #                  config_json: &str) -> anyhow::Result<()> {
//! let config = WidgetConfig::from_json(config_json)?;
//! let layout = WidgetLayout {
//!     position: Position::new(0.0, 0.0),
//!     size: Size::new(300.0, 400.0),
//!     viewport: Viewport::new(1280.0, 720.0),
//! };
//! let mut widget = MascotWidget::new(config, layout, renderer, audio, fetcher)?;
//! let (input_tx, input_rx) = tokio::sync::mpsc::channel::<WidgetInput>(32);
//! // hand `input_tx` to the DOM/renderer/audio callbacks, then:
//! widget.run(input_rx).await;
//! # Ok(())
//! # }
//! ```

pub mod assets;
pub mod catalog;
pub mod config;
pub mod drag;
pub mod events;
pub mod input;
pub mod interaction;
pub mod render;
pub mod sequencer;
pub mod voice;
pub mod widget;

pub use catalog::{AnimationStep, Behavior, BehaviorCatalog, VoiceRef};
pub use config::{ConfigError, WidgetConfig};
pub use events::WidgetEvent;
pub use input::WidgetInput;
pub use widget::MascotWidget;
