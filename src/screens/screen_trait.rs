//! Screen trait and associated types.
//!
//! Screens own their state, consume one message at a time and answer with a
//! [`ScreenAction`]: either "stay here, and here is what the host should do
//! later" or "switch to that screen". They never touch the terminal or the
//! clock; periodic work is requested through [`Effect::ScheduleTick`].

use crate::keymap::Keymap;
use crate::styles::Theme;
use crate::ui::{Msg, ScreenId, Tick};
use ratatui::layout::Rect;
use ratatui::Frame;
use std::time::Duration;

/// Context provided for rendering screens.
pub struct RenderContext<'a> {
    /// Key bindings, for footer help text.
    pub keymap: &'a Keymap,
    /// Active color theme.
    pub theme: &'a Theme,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(keymap: &'a Keymap, theme: &'a Theme) -> Self {
        Self { keymap, theme }
    }
}

/// Context provided for initializing screens and handling messages.
pub struct ScreenContext<'a> {
    /// Key bindings used to resolve key events into actions.
    pub keymap: &'a Keymap,
    /// Last known terminal size.
    pub viewport: Rect,
}

impl<'a> ScreenContext<'a> {
    /// Create a new screen context.
    pub fn new(keymap: &'a Keymap, viewport: Rect) -> Self {
        Self { keymap, viewport }
    }
}

/// Declarative instruction for the host loop.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Effect {
    /// Nothing to do.
    #[default]
    None,
    /// Deliver `Msg::Tick(tick)` after `after` has elapsed.
    ScheduleTick { after: Duration, tick: Tick },
    /// Stop the application.
    Quit,
    /// Several effects at once.
    Batch(Vec<Effect>),
}

impl Effect {
    /// Combine effects, dropping `None`s and flattening nested batches.
    pub fn batch(effects: impl IntoIterator<Item = Effect>) -> Effect {
        let mut flat: Vec<Effect> = Vec::new();
        for effect in effects {
            match effect {
                Effect::None => {}
                Effect::Batch(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        match flat.len() {
            0 => Effect::None,
            1 => flat.pop().unwrap_or_default(),
            _ => Effect::Batch(flat),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Effect::None)
    }

    /// Every tick this effect schedules, in order.
    pub fn scheduled_ticks(&self) -> Vec<(Duration, Tick)> {
        match self {
            Effect::ScheduleTick { after, tick } => vec![(*after, *tick)],
            Effect::Batch(effects) => effects.iter().flat_map(Effect::scheduled_ticks).collect(),
            Effect::None | Effect::Quit => Vec::new(),
        }
    }

    /// Whether this effect asks the host to stop.
    pub fn wants_quit(&self) -> bool {
        match self {
            Effect::Quit => true,
            Effect::Batch(effects) => effects.iter().any(Effect::wants_quit),
            _ => false,
        }
    }
}

/// Outcome of a screen's update step.
///
/// A navigation request and a content effect are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenAction {
    /// Stay on this screen; the host should realize the effect.
    Stay(Effect),
    /// Activate another screen.
    Navigate(ScreenId),
}

impl ScreenAction {
    /// Stay on the current screen with nothing to do.
    pub fn none() -> Self {
        Self::Stay(Effect::None)
    }
}

impl Default for ScreenAction {
    fn default() -> Self {
        Self::none()
    }
}

/// Trait for screen controllers.
///
/// Every screen has a defined answer for every message; an unrecognized
/// message leaves the state untouched and returns [`ScreenAction::none`].
pub trait Screen {
    /// Identity of this screen in the roster.
    fn id(&self) -> ScreenId;

    /// Reset to the initial state and return the startup effect.
    fn init(&mut self, ctx: &ScreenContext) -> Effect;

    /// Called instead of [`Screen::init`] when the screen is re-entered and
    /// its state is kept. Restarts any periodic work the screen needs.
    fn resume(&mut self, _ctx: &ScreenContext) -> Effect {
        Effect::None
    }

    /// Handle one message.
    fn update(&mut self, msg: &Msg, ctx: &ScreenContext) -> ScreenAction;

    /// Draw the screen. Rendering never changes state.
    fn render(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext);
}
