//! Carousel: a strip of slides stepped by next/prev affordances.
//!
//! Markers: `slides` (the translated strip), `carousel-next` and
//! `carousel-prev`. Slide elements carry the `slide` class; the active
//! one is flagged `is-active`. The index wraps at both ends.

mod preset;

use std::time::{Duration, Instant};

use casement::element::{collect_paths, element_at_mut, find_element, find_element_mut};
use casement::{
    Easing, Element, Event, LayoutResult, MouseButton, Size, TransitionConfig, TweenProperty,
    TweenState,
};
use log::warn;

use crate::component::{Component, EventResult};
use crate::disposal::Disposables;
use crate::error::WidgetError;
use crate::widgets::require_marker;

const SLIDE_TWEEN: Duration = Duration::from_millis(500);

pub struct Carousel {
    root: Element,
    strip_id: String,
    next_id: String,
    prev_id: String,
    active: usize,
    count: usize,
    /// Viewport width from the last layout; one slide spans it.
    slide_width: u16,
    tweens: TweenState,
    disposables: Disposables,
    dirty: bool,
}

impl Carousel {
    pub fn new(root: Element) -> Result<Self, WidgetError> {
        let strip_id = require_marker(&root, "slides")?;
        let next_id = require_marker(&root, "carousel-next")?;
        let prev_id = require_marker(&root, "carousel-prev")?;
        let count = collect_paths(&root, &|el| el.has_class("slide")).len();

        let mut carousel = Self {
            root,
            strip_id,
            next_id,
            prev_id,
            active: 0,
            count,
            slide_width: 0,
            tweens: TweenState::new(),
            disposables: Disposables::new(),
            dirty: true,
        };
        carousel.mark_active();
        Ok(carousel)
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn slide_count(&self) -> usize {
        self.count
    }

    /// Current horizontal offset of the strip, in cells.
    pub fn strip_offset(&self) -> f32 {
        find_element(&self.root, &self.strip_id)
            .map(|el| el.left as f32)
            .unwrap_or(0.0)
    }

    pub fn next(&mut self, now: Instant) {
        if self.count == 0 {
            return;
        }
        self.go_to((self.active + 1) % self.count, now);
    }

    pub fn prev(&mut self, now: Instant) {
        if self.count == 0 {
            return;
        }
        self.go_to((self.active + self.count - 1) % self.count, now);
    }

    pub fn go_to(&mut self, index: usize, now: Instant) {
        if self.count == 0 || index >= self.count {
            return;
        }
        self.active = index;
        self.mark_active();
        let current = self.strip_offset();
        self.tweens.start(
            &self.strip_id,
            TweenProperty::Left,
            current,
            -(index as f32 * self.slide_width as f32),
            TransitionConfig::new(SLIDE_TWEEN, Easing::ExpoOut),
            now,
        );
        self.dirty = true;
    }

    fn mark_active(&mut self) {
        let active = self.active;
        for (position, path) in collect_paths(&self.root, &|el| el.has_class("slide"))
            .into_iter()
            .enumerate()
        {
            if let Some(el) = element_at_mut(&mut self.root, &path) {
                if position == active {
                    el.add_class("is-active");
                } else {
                    el.remove_class("is-active");
                }
            }
        }
    }
}

impl Component for Carousel {
    fn root(&self) -> &Element {
        &self.root
    }

    fn handle(&mut self, event: &Event, layout: &LayoutResult, now: Instant) -> EventResult {
        if self.disposables.is_disposed() {
            return EventResult::Ignored;
        }

        let Event::Click {
            x,
            y,
            button: MouseButton::Left,
        } = event
        else {
            return EventResult::Ignored;
        };

        let hit = |id: &str| {
            layout
                .get(id)
                .map(|rect| rect.contains(*x, *y))
                .unwrap_or(false)
        };
        if hit(&self.next_id) {
            self.next(now);
            EventResult::Consumed
        } else if hit(&self.prev_id) {
            self.prev(now);
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    fn tick(&mut self, now: Instant) -> bool {
        let mut dirty = std::mem::take(&mut self.dirty);

        for (id, property, value) in self.tweens.tick(now) {
            if property == TweenProperty::Left {
                if let Some(el) = find_element_mut(&mut self.root, &id) {
                    el.left = value.round() as i16;
                }
            }
            dirty = true;
        }
        for (id, property, value) in self.tweens.values(now) {
            if property == TweenProperty::Left {
                if let Some(el) = find_element_mut(&mut self.root, &id) {
                    el.left = value.round() as i16;
                }
            }
            dirty = true;
        }

        dirty
    }

    fn after_layout(&mut self, layout: &LayoutResult, _now: Instant) {
        // Slides track the viewport width so one slide fills the frame.
        let Some(root_rect) = layout.get(&self.root.id) else {
            return;
        };
        let width = root_rect.width;
        self.slide_width = width;
        for path in collect_paths(&self.root, &|el| el.has_class("slide")) {
            if let Some(el) = element_at_mut(&mut self.root, &path) {
                if el.width != Size::Fixed(width) {
                    el.width = Size::Fixed(width);
                    self.dirty = true;
                }
            }
        }
    }

    fn next_deadline(&self, now: Instant) -> Option<Instant> {
        self.tweens
            .has_active()
            .then(|| now + Duration::from_millis(16))
    }

    fn dispose(&mut self) {
        if self.disposables.is_disposed() {
            warn!("carousel disposed twice");
            return;
        }
        self.tweens.clear();
        self.disposables.dispose();
    }
}
