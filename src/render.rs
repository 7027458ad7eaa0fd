//! Seam to the skeletal-animation renderer
//!
//! The renderer is a black box: it gets skeleton bytes and an atlas URL
//! once, then accepts one "play this step" command at a time on its single
//! track. Segment completions come back to the widget as
//! [`WidgetInput::SegmentComplete`](crate::input::WidgetInput) events,
//! which the host wires from the renderer's completion callback.

use crate::catalog::AnimationStep;

/// Background color applied behind the rendered character
pub const DEFAULT_BACKGROUND: &str = "#00000000";

/// Everything the renderer needs to come up
#[derive(Debug)]
pub struct RendererSetup<'a> {
    /// Raw skeleton asset bytes
    pub skeleton: &'a [u8],
    /// Absolute atlas URL
    pub atlas_url: &'a str,
    /// Render skin to apply
    pub skin: Option<&'a str>,
    /// Animation to show immediately
    pub animation: &'a str,
    /// Canvas background color
    pub background: &'a str,
    /// Whether the initial animation loops
    pub looped: bool,
}

/// Errors surfaced by a renderer implementation
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("renderer failed to initialize: {0}")]
    Init(String),
}

/// Track-based animation player consumed by the sequencer
pub trait AnimationRenderer: Send {
    /// Construct the rendering surface and show the initial animation
    fn initialize(&mut self, setup: RendererSetup<'_>) -> Result<(), RenderError>;

    /// Replace the active track's animation with this step.
    ///
    /// Implementations should swap the animation without resetting the
    /// character's pose, so step transitions stay continuous.
    fn play_step(&mut self, step: &AnimationStep);
}
