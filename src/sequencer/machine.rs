//! Core sequencing implementation
//!
//! The sequencer mirrors the renderer's single active track: `current` is
//! the step most recently handed over, `queue` holds the steps behind it.
//! Both are mutated only here, on discrete events, so no locking is
//! needed.

use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::{debug, error};

use crate::catalog::{AnimationStep, BehaviorCatalog};
use crate::events::WidgetEvent;
use crate::render::AnimationRenderer;

/// Decides which animation step plays next
pub struct Sequencer {
    /// Steps waiting behind the current one, front plays first
    queue: VecDeque<AnimationStep>,
    /// Logical mirror of the renderer's active track
    current: Option<AnimationStep>,
    /// Fallback step, never queued, always available
    idle_step: AnimationStep,
    catalog: Arc<BehaviorCatalog>,
    event_tx: broadcast::Sender<WidgetEvent>,
}

impl Sequencer {
    /// Create a sequencer over a validated catalog.
    ///
    /// `idle_step` must be the catalog's resolved idle step; the caller
    /// derives it during config validation.
    pub fn new(
        catalog: Arc<BehaviorCatalog>,
        idle_step: AnimationStep,
        event_tx: broadcast::Sender<WidgetEvent>,
    ) -> Self {
        Self {
            queue: VecDeque::new(),
            current: None,
            idle_step,
            catalog,
            event_tx,
        }
    }

    /// Resolve a behavior, play its first step now, queue the rest.
    ///
    /// The remaining steps keep their original order and are not touched
    /// until their predecessors complete.
    pub fn enqueue(&mut self, behavior: &str, renderer: &mut dyn AnimationRenderer) {
        let Some(mut steps) = self.catalog.animation_list(behavior) else {
            // Unreachable after config validation
            error!(behavior, "behavior missing from catalog, ignoring");
            return;
        };
        if steps.is_empty() {
            error!(behavior, "behavior has no animation steps, ignoring");
            return;
        }

        let first = steps.remove(0);
        debug!(behavior, queued = steps.len(), "behavior enqueued");
        self.queue.extend(steps);
        self.play(first, renderer);
    }

    /// Adopt the step the renderer was initialized with, without issuing
    /// a play command for it.
    pub fn adopt_initial(&mut self, step: AnimationStep) {
        let _ = self.event_tx.send(WidgetEvent::StepStarted {
            name: step.name.clone(),
            looped: step.looped,
        });
        self.current = Some(step);
    }

    /// Decide what plays after a completed segment.
    ///
    /// While a voice line is still speaking, a completed looping step is
    /// restarted in place so the character keeps animating instead of
    /// snapping to idle mid-speech. Otherwise the queue advances; a
    /// drained queue yields the idle step.
    pub fn on_segment_complete(
        &mut self,
        completed: &AnimationStep,
        voice_playing: bool,
        renderer: &mut dyn AnimationRenderer,
    ) {
        if voice_playing && completed.looped {
            debug!(step = %completed.name, "voice still playing, restarting loop");
            self.play(completed.clone(), renderer);
            return;
        }

        let next = self
            .queue
            .pop_front()
            .unwrap_or_else(|| self.idle_step.clone());
        self.play(next, renderer);
    }

    /// Whether the active track is showing the idle step
    pub fn is_idle(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|step| step.name == self.idle_step.name)
    }

    pub fn queue_is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn current_step(&self) -> Option<&AnimationStep> {
        self.current.as_ref()
    }

    fn play(&mut self, step: AnimationStep, renderer: &mut dyn AnimationRenderer) {
        renderer.play_step(&step);
        let _ = self.event_tx.send(WidgetEvent::StepStarted {
            name: step.name.clone(),
            looped: step.looped,
        });
        self.current = Some(step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Renderer stub that records every play command
    #[derive(Default)]
    struct RecordingRenderer {
        plays: Vec<AnimationStep>,
    }

    impl AnimationRenderer for RecordingRenderer {
        fn initialize(
            &mut self,
            _setup: crate::render::RendererSetup<'_>,
        ) -> Result<(), crate::render::RenderError> {
            Ok(())
        }

        fn play_step(&mut self, step: &AnimationStep) {
            self.plays.push(step.clone());
        }
    }

    fn catalog() -> Arc<BehaviorCatalog> {
        Arc::new(
            serde_json::from_str(
                r#"{
                    "start": { "animation": "Start" },
                    "idle": { "animation": "Idle" },
                    "interact": {
                        "animations": [
                            { "name": "A", "loop": false },
                            { "name": "B", "loop": true },
                            { "name": "C", "loop": false }
                        ],
                        "voices": [{ "voice": "v.mp3" }]
                    }
                }"#,
            )
            .unwrap(),
        )
    }

    fn sequencer() -> Sequencer {
        let catalog = catalog();
        let idle_step = catalog.idle_step().unwrap();
        let (event_tx, _) = broadcast::channel(64);
        Sequencer::new(catalog, idle_step, event_tx)
    }

    #[test]
    fn test_enqueue_plays_first_and_queues_rest_in_order() {
        let mut seq = sequencer();
        let mut renderer = RecordingRenderer::default();

        seq.enqueue("interact", &mut renderer);

        assert_eq!(renderer.plays.len(), 1);
        assert_eq!(renderer.plays[0].name, "A");
        assert_eq!(seq.queue_len(), 2);
        assert_eq!(seq.current_step().unwrap().name, "A");
    }

    #[test]
    fn test_completion_advances_queue_in_order() {
        let mut seq = sequencer();
        let mut renderer = RecordingRenderer::default();
        seq.enqueue("interact", &mut renderer);

        let a = renderer.plays[0].clone();
        seq.on_segment_complete(&a, false, &mut renderer);
        assert_eq!(renderer.plays[1].name, "B");

        let b = renderer.plays[1].clone();
        seq.on_segment_complete(&b, false, &mut renderer);
        assert_eq!(renderer.plays[2].name, "C");
        assert!(seq.queue_is_empty());
    }

    #[test]
    fn test_looping_step_replays_while_voice_playing() {
        let mut seq = sequencer();
        let mut renderer = RecordingRenderer::default();
        seq.enqueue("interact", &mut renderer);

        let b = AnimationStep {
            name: "B".to_string(),
            looped: true,
        };
        for _ in 0..3 {
            seq.on_segment_complete(&b, true, &mut renderer);
            assert_eq!(seq.current_step().unwrap().name, "B");
        }
        // The queue never advanced while the loop was held
        assert_eq!(seq.queue_len(), 2);
    }

    #[test]
    fn test_non_looping_step_advances_even_while_voice_playing() {
        let mut seq = sequencer();
        let mut renderer = RecordingRenderer::default();
        seq.enqueue("interact", &mut renderer);

        let a = renderer.plays[0].clone();
        assert!(!a.looped);
        seq.on_segment_complete(&a, true, &mut renderer);
        assert_eq!(seq.current_step().unwrap().name, "B");
    }

    #[test]
    fn test_drained_queue_falls_back_to_idle() {
        let mut seq = sequencer();
        let mut renderer = RecordingRenderer::default();
        seq.enqueue("start", &mut renderer);
        assert!(seq.queue_is_empty());

        let start = renderer.plays[0].clone();
        seq.on_segment_complete(&start, false, &mut renderer);

        assert_eq!(seq.current_step().unwrap().name, "Idle");
        assert!(seq.is_idle());
        // Idle keeps yielding itself, never an empty step
        let idle = seq.current_step().unwrap().clone();
        seq.on_segment_complete(&idle, false, &mut renderer);
        assert!(seq.is_idle());
    }

    #[test]
    fn test_adopt_initial_sets_current_without_playing() {
        let mut seq = sequencer();
        seq.adopt_initial(AnimationStep::once("Start"));
        assert_eq!(seq.current_step().unwrap().name, "Start");
        assert!(!seq.is_idle());
    }

    #[test]
    fn test_unknown_behavior_is_ignored() {
        let mut seq = sequencer();
        let mut renderer = RecordingRenderer::default();
        seq.enqueue("dance", &mut renderer);
        assert!(renderer.plays.is_empty());
        assert!(seq.current_step().is_none());
    }

    #[test]
    fn test_step_started_events_are_emitted() {
        let catalog = catalog();
        let idle_step = catalog.idle_step().unwrap();
        let (event_tx, mut event_rx) = broadcast::channel(64);
        let mut seq = Sequencer::new(catalog, idle_step, event_tx);
        let mut renderer = RecordingRenderer::default();

        seq.enqueue("interact", &mut renderer);

        match event_rx.try_recv().unwrap() {
            WidgetEvent::StepStarted { name, looped } => {
                assert_eq!(name, "A");
                assert!(!looped);
            }
            other => panic!("unexpected event: {other}"),
        }
    }
}
