//! Scroll area event handling: drag, wheel, hover and resize.

use std::time::Instant;

use casement::{Event, LayoutResult, MouseButton, Rect};

use super::{Axis, ScrollArea, RESIZE_DEBOUNCE, SCROLL_STEP};
use crate::component::EventResult;

impl ScrollArea {
    pub(crate) fn handle_event(
        &mut self,
        event: &Event,
        layout: &LayoutResult,
        now: Instant,
    ) -> EventResult {
        if self.disposables.is_disposed() {
            return EventResult::Ignored;
        }

        match event {
            Event::Click {
                x,
                y,
                button: MouseButton::Left,
            } => self.handle_click(*x, *y, layout, now),
            Event::Drag {
                x,
                y,
                button: MouseButton::Left,
            } => self.handle_drag(*x, *y, now),
            Event::Release {
                button: MouseButton::Left,
                ..
            } => self.handle_release(now),
            Event::Scroll {
                x,
                y,
                delta_x,
                delta_y,
            } => self.handle_wheel(*x, *y, *delta_x, *delta_y, layout, now),
            Event::MouseMove { x, y } => self.handle_mouse_move(*x, *y, layout, now),
            Event::Resize { .. } => {
                // Sizes settle before the debounced update runs.
                self.resize_sync.arm(now, RESIZE_DEBOUNCE);
                EventResult::Ignored
            }
            _ => EventResult::Ignored,
        }
    }

    fn handle_click(
        &mut self,
        x: u16,
        y: u16,
        layout: &LayoutResult,
        now: Instant,
    ) -> EventResult {
        let Some(knob) = layout.get(&self.knob_id) else {
            return EventResult::Ignored;
        };
        if !knob.contains(x, y) {
            return EventResult::Ignored;
        }

        let grab = self.main_pos(x, y) - self.main_start(knob);
        self.dragging = Some(grab);
        self.with_element(&self.knob_id.clone(), |el| el.add_class("dragging"));
        self.show_knob(now);
        self.dirty = true;
        EventResult::StartDrag
    }

    /// Convert the knob's offset along the track into a scroll position.
    fn handle_drag(&mut self, x: u16, y: u16, now: Instant) -> EventResult {
        let Some(grab) = self.dragging else {
            return EventResult::Ignored;
        };

        let track_start = self.main_start(self.track_rect);
        let offset = (self.main_pos(x, y) - track_start - grab)
            .clamp(0.0, self.geometry.knob_range());
        self.place_knob(offset);

        let target = self.geometry.scroll_for_knob(offset);
        self.scroll_to(target);
        self.start_hide(now);
        EventResult::Consumed
    }

    fn handle_release(&mut self, now: Instant) -> EventResult {
        if self.dragging.take().is_none() {
            return EventResult::Ignored;
        }
        self.with_element(&self.knob_id.clone(), |el| el.remove_class("dragging"));
        if !self.hover {
            self.start_hide(now);
        }
        self.dirty = true;
        EventResult::Consumed
    }

    fn handle_wheel(
        &mut self,
        x: u16,
        y: u16,
        delta_x: i16,
        delta_y: i16,
        layout: &LayoutResult,
        now: Instant,
    ) -> EventResult {
        let Some(content) = layout.get(&self.content_id) else {
            return EventResult::Ignored;
        };
        if !content.contains(x, y) {
            return EventResult::Ignored;
        }

        let delta = match self.axis {
            Axis::Vertical => delta_y,
            Axis::Horizontal => delta_x,
        };
        if delta == 0 {
            return EventResult::Ignored;
        }

        self.scroll_by(delta * SCROLL_STEP);
        self.show_knob(now);
        self.on_scroll(now);
        EventResult::Consumed
    }

    fn handle_mouse_move(
        &mut self,
        x: u16,
        y: u16,
        layout: &LayoutResult,
        now: Instant,
    ) -> EventResult {
        let over = layout
            .get(&self.bar_id)
            .map(|bar| bar.contains(x, y))
            .unwrap_or(false);

        if over && !self.hover {
            self.hover = true;
            self.show_knob(now);
        } else if !over && self.hover {
            self.hover = false;
            if self.dragging.is_none() {
                self.start_hide(now);
            }
        }
        EventResult::Ignored
    }

    fn main_pos(&self, x: u16, y: u16) -> f32 {
        match self.axis {
            Axis::Vertical => y as f32,
            Axis::Horizontal => x as f32,
        }
    }

    fn main_start(&self, rect: Rect) -> f32 {
        match self.axis {
            Axis::Vertical => rect.y as f32,
            Axis::Horizontal => rect.x as f32,
        }
    }
}
