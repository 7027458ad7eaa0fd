//! Widget orchestration and lifecycle
//!
//! `MascotWidget` wires the components together and drives them from a
//! single input channel. The host owns the instance — there is no
//! process-wide singleton — and stops it by dropping its input sender.
//!
//! Lifecycle is two states: Uninitialized → Active, transitioned exactly
//! once by the first qualifying user-activity event (pointer-down,
//! touch-start or scroll). A failed initialization halts setup for good;
//! nothing is retried.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tokio::sync::{broadcast, mpsc};
use tracing::{error, info};

use crate::assets::AssetFetcher;
use crate::catalog::{BehaviorCatalog, IDLE_BEHAVIOR, INTERACT_BEHAVIOR, START_BEHAVIOR};
use crate::config::{ConfigError, WidgetConfig};
use crate::drag::DragController;
use crate::events::WidgetEvent;
use crate::input::{Viewport, WidgetInput, WidgetLayout};
use crate::interaction::{Decision, IdleTimer, InteractionGate};
use crate::render::{AnimationRenderer, RendererSetup, DEFAULT_BACKGROUND};
use crate::sequencer::Sequencer;
use crate::voice::{AudioSink, VoicePlayer};

/// How many outbound events may queue per subscriber before lagging
const EVENT_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    /// Waiting for the first qualifying input event
    Uninitialized,
    /// Renderer is live, all components running
    Active,
    /// Setup failed; every further input is ignored
    Failed,
}

/// The embedded mascot widget driver
pub struct MascotWidget {
    config: WidgetConfig,
    catalog: Arc<BehaviorCatalog>,
    lifecycle: Lifecycle,
    sequencer: Sequencer,
    voice: VoicePlayer,
    gate: InteractionGate,
    idle: IdleTimer,
    drag: DragController,
    viewport: Viewport,
    renderer: Box<dyn AnimationRenderer>,
    audio: Box<dyn AudioSink>,
    fetcher: Box<dyn AssetFetcher>,
    rng: SmallRng,
    event_tx: broadcast::Sender<WidgetEvent>,
}

impl MascotWidget {
    /// Validate the configuration and assemble the widget.
    ///
    /// Nothing is fetched or rendered yet; that happens lazily on the
    /// first user-activity event.
    pub fn new(
        config: WidgetConfig,
        layout: WidgetLayout,
        renderer: Box<dyn AnimationRenderer>,
        audio: Box<dyn AudioSink>,
        fetcher: Box<dyn AssetFetcher>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let catalog = Arc::new(config.behaviors.clone());
        let idle_step = catalog
            .idle_step()
            .ok_or(ConfigError::MissingBehavior(IDLE_BEHAVIOR))?;
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Ok(Self {
            sequencer: Sequencer::new(Arc::clone(&catalog), idle_step, event_tx.clone()),
            voice: VoicePlayer::new(event_tx.clone()),
            gate: InteractionGate::new(event_tx.clone()),
            idle: IdleTimer::new(catalog.idle_max_minutes()),
            drag: DragController::new(layout.position, layout.size),
            viewport: layout.viewport,
            lifecycle: Lifecycle::Uninitialized,
            rng: SmallRng::from_entropy(),
            catalog,
            config,
            renderer,
            audio,
            fetcher,
            event_tx,
        })
    }

    /// Fix the voice-selection RNG seed, for reproducible runs
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    /// Subscribe to the widget's outbound events
    pub fn subscribe(&self) -> broadcast::Receiver<WidgetEvent> {
        self.event_tx.subscribe()
    }

    /// Run the widget, draining host input until the channel closes
    pub async fn run(&mut self, mut input_rx: mpsc::Receiver<WidgetInput>) {
        info!("mascot widget input loop started");

        while let Some(input) = input_rx.recv().await {
            self.handle_input(input);
        }

        info!("mascot widget input loop stopped");
    }

    /// Process one input event to completion
    pub fn handle_input(&mut self, input: WidgetInput) {
        self.handle_input_at(input, Instant::now());
    }

    fn handle_input_at(&mut self, input: WidgetInput, now: Instant) {
        match self.lifecycle {
            Lifecycle::Failed => {}
            Lifecycle::Uninitialized => {
                if input.is_activity() {
                    if let Err(e) = self.initialize() {
                        self.lifecycle = Lifecycle::Failed;
                        error!(error = ?e, "widget initialization failed");
                    }
                }
            }
            Lifecycle::Active => self.handle_active(input, now),
        }
    }

    /// Download assets, bring up the renderer, play the start behavior
    fn initialize(&mut self) -> anyhow::Result<()> {
        let skeleton_url = self.config.resolve_url(&self.config.skeleton);
        let skeleton = self
            .fetcher
            .fetch(&skeleton_url)
            .with_context(|| format!("couldn't download skeleton {skeleton_url}"))?;

        let atlas_url = self.config.resolve_url(&self.config.atlas);
        let start_step = self
            .catalog
            .animation_list(START_BEHAVIOR)
            .and_then(|mut steps| (!steps.is_empty()).then(|| steps.remove(0)))
            .context("start behavior has no animation step")?;

        self.renderer
            .initialize(RendererSetup {
                skeleton: &skeleton,
                atlas_url: &atlas_url,
                skin: self.config.skin.as_deref(),
                animation: &start_step.name,
                background: DEFAULT_BACKGROUND,
                looped: start_step.looped,
            })
            .context("renderer setup failed")?;

        self.lifecycle = Lifecycle::Active;
        info!(animation = %start_step.name, "widget initialized");
        let _ = self.event_tx.send(WidgetEvent::Initialized);

        // The renderer is already showing the start step; record it and
        // say the start line.
        self.sequencer.adopt_initial(start_step);
        self.play_behavior_voice(START_BEHAVIOR);

        Ok(())
    }

    fn handle_active(&mut self, input: WidgetInput, now: Instant) {
        match input {
            WidgetInput::PointerDown(p) | WidgetInput::TouchStart(p) => {
                self.maybe_trigger_idle_voice(now);
                self.drag.pointer_down(p);
            }
            WidgetInput::Scroll => {
                self.maybe_trigger_idle_voice(now);
            }
            WidgetInput::PointerMove(p) => {
                if let Some(pos) = self.drag.pointer_move(p, self.viewport) {
                    let _ = self
                        .event_tx
                        .send(WidgetEvent::WidgetMoved { x: pos.x, y: pos.y });
                }
            }
            WidgetInput::PointerUp => {
                self.drag.pointer_up();
            }
            WidgetInput::CanvasClick => {
                self.request_interaction(now);
            }
            WidgetInput::ViewportResized(viewport) => {
                self.viewport = viewport;
                let pos = self.drag.viewport_resized(viewport);
                let _ = self
                    .event_tx
                    .send(WidgetEvent::WidgetMoved { x: pos.x, y: pos.y });
            }
            WidgetInput::SegmentComplete(step) => {
                self.sequencer.on_segment_complete(
                    &step,
                    self.voice.is_playing(),
                    self.renderer.as_mut(),
                );
            }
            WidgetInput::AudioEnded => {
                self.voice.on_ended();
            }
            WidgetInput::AudioTimeUpdate { position, duration } => {
                self.voice.on_time_update(position, duration);
            }
        }
    }

    /// Run an interaction request through the gate; on acceptance start
    /// the interact behavior and restart the inactivity window.
    fn request_interaction(&mut self, now: Instant) {
        let decision = self.gate.evaluate(
            self.voice.is_playing(),
            self.sequencer.queue_is_empty(),
            self.sequencer.is_idle(),
        );
        if decision != Decision::Accepted {
            return;
        }

        self.idle.mark_interaction(now);
        self.sequencer
            .enqueue(INTERACT_BEHAVIOR, self.renderer.as_mut());
        self.play_behavior_voice(INTERACT_BEHAVIOR);
    }

    /// Activity-triggered idle check: fire the idle voice line when the
    /// inactivity threshold has passed.
    fn maybe_trigger_idle_voice(&mut self, now: Instant) {
        if !self.idle.trigger(now) {
            return;
        }
        info!("idle threshold passed, playing idle voice");
        let _ = self.event_tx.send(WidgetEvent::IdleVoiceTriggered);
        self.play_behavior_voice(IDLE_BEHAVIOR);
    }

    /// Select and start a behavior's voice line. A behavior without a
    /// configured voice is a quiet no-op.
    fn play_behavior_voice(&mut self, behavior: &str) {
        let Some(voice) = self.catalog.select_voice(behavior, &mut self.rng) else {
            return;
        };
        let url = self.config.resolve_url(&voice.audio);
        self.voice.play(voice, &url, self.audio.as_mut());
    }
}
