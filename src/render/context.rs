//! Per-draw and per-dispatch context handed to scene objects and handlers

use crate::convert::ScreenToPointsConverter;

use super::clip::ClipStrategy;
use super::handler::{AnyHandler, HandleState, Interactive};
use super::types::{HandlerId, Theme};

/// What an object needs to know to draw itself
#[derive(Clone, Copy)]
pub struct DrawContext<'a> {
    pub converter: &'a ScreenToPointsConverter,
    pub theme: &'a Theme,
    pub clip: ClipStrategy,
    /// Handler table, so objects can style themselves by interaction state.
    pub handlers: &'a [AnyHandler],
}

impl<'a> DrawContext<'a> {
    pub fn new(
        converter: &'a ScreenToPointsConverter,
        theme: &'a Theme,
        clip: ClipStrategy,
        handlers: &'a [AnyHandler],
    ) -> Self {
        Self {
            converter,
            theme,
            clip,
            handlers,
        }
    }

    /// State of a handler; unknown handlers read as idle.
    pub fn handler_state(&self, id: HandlerId) -> HandleState {
        self.handlers
            .get(id.index())
            .map(|h| h.state())
            .unwrap_or_default()
    }
}

/// What a handler needs while reacting to one pointer event
pub struct DispatchContext<'a> {
    pub converter: &'a ScreenToPointsConverter,
    pub hit_radius_px: f64,
    /// Set once some handler holds the drag for this event.
    pub drag_claimed: bool,
}
