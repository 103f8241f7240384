//! The host lifecycle contract.
//!
//! A component owns one element subtree; the host supplies events and
//! layout, drives time via `tick`, and calls `dispose` exactly once when
//! the component is removed.

use std::time::Instant;

use casement::{Element, Event, LayoutResult};

/// Result of handling an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
    /// Event started a drag operation on this component.
    StartDrag,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

pub trait Component {
    /// The element subtree this component owns.
    fn root(&self) -> &Element;

    /// Handle an input event. `layout` is from the most recent render.
    fn handle(&mut self, event: &Event, layout: &LayoutResult, now: Instant) -> EventResult;

    /// Advance timers and tweens. Returns true when a redraw is needed.
    fn tick(&mut self, now: Instant) -> bool;

    /// Called by the host after every layout pass, so derived layout
    /// state (knob geometry, tier offsets) can be synchronized.
    fn after_layout(&mut self, _layout: &LayoutResult, _now: Instant) {}

    /// Earliest instant at which `tick` has work to do.
    fn next_deadline(&self, _now: Instant) -> Option<Instant> {
        None
    }

    /// Release bindings, timers and tweens. The host calls this once
    /// when removing the component.
    fn dispose(&mut self);
}
