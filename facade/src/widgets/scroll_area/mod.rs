//! Custom scroll area: a content region with a knob/track scrollbar.
//!
//! The knob is kept visually synchronized with the content's scroll
//! offset, and dragging the knob drives scrolling. Expected markers in
//! the subtree: `scroll-content` (the scroll region), `content-inner`
//! (inner wrapper), `scroll-bar` (track) and `scroll-knob` (knob).

mod events;
mod preset;
mod state;

pub use state::{Axis, ScrollAreaOptions, ScrollGeometry, MIN_KNOB_SIZE};

use std::time::{Duration, Instant};

use casement::element::{find_element, find_element_mut};
use casement::{
    Easing, Element, Event, LayoutResult, OneShot, Rect, Size, TransitionConfig, TweenProperty,
    TweenState,
};
use log::{debug, warn};

use crate::component::{Component, EventResult};
use crate::disposal::Disposables;
use crate::error::WidgetError;
use crate::widgets::require_marker;

const FADE: Duration = Duration::from_millis(200);
const RESIZE_DEBOUNCE: Duration = Duration::from_millis(200);
/// Cells scrolled per wheel tick.
const SCROLL_STEP: i16 = 2;

#[derive(Debug)]
pub struct ScrollArea {
    root: Element,
    opts: ScrollAreaOptions,
    axis: Axis,

    content_id: String,
    inner_id: String,
    bar_id: String,
    knob_id: String,

    geometry: ScrollGeometry,
    /// Drag handle bounds, refreshed by `update`.
    track_rect: Rect,
    /// Grab offset within the knob while a drag is in progress.
    dragging: Option<f32>,
    knob_offset: f32,
    hover: bool,

    idle_hide: OneShot,
    resize_sync: OneShot,
    pending_update: bool,
    initialized: bool,

    tweens: TweenState,
    disposables: Disposables,
    dirty: bool,
}

impl ScrollArea {
    pub fn new(mut root: Element, opts: ScrollAreaOptions) -> Result<Self, WidgetError> {
        let content_id = require_marker(&root, "scroll-content")?;
        let inner_id = require_marker(&root, "content-inner")?;
        let bar_id = require_marker(&root, "scroll-bar")?;
        let knob_id = require_marker(&root, "scroll-knob")?;

        if opts.horizontal {
            root.add_class("scroll-x");
        }

        let axis = opts.axis();
        let mut area = Self {
            root,
            opts,
            axis,
            content_id,
            inner_id,
            bar_id,
            knob_id,
            geometry: ScrollGeometry::new(),
            track_rect: Rect::default(),
            dragging: None,
            knob_offset: 0.0,
            hover: false,
            idle_hide: OneShot::new(),
            resize_sync: OneShot::new(),
            pending_update: false,
            initialized: false,
            tweens: TweenState::new(),
            disposables: Disposables::new(),
            dirty: true,
        };

        // Hidden until the first qualifying event, without animating.
        if area.opts.hide_bar {
            area.set_opacity(&area.bar_id.clone(), 0.0);
            area.set_opacity(&area.knob_id.clone(), 0.0);
        }

        Ok(area)
    }

    /// Recompute overflow, content sizing, knob and track geometry from
    /// the current layout. Idempotent for unchanged layout; re-enables
    /// the drag handle's bounds tracking.
    pub fn update(&mut self, layout: &LayoutResult, now: Instant) {
        let (vw, vh) = layout.viewport_size(&self.content_id).unwrap_or((0, 0));
        let (cw, ch) = layout.content_size(&self.content_id).unwrap_or((0, 0));
        let bar = layout.get(&self.bar_id).unwrap_or_default();

        let (viewport, extent, track, track_cross) = match self.axis {
            Axis::Vertical => (vh, ch, bar.height, bar.width),
            Axis::Horizontal => (vw, cw, bar.width, bar.height),
        };
        self.geometry.recompute(
            viewport as f32,
            extent as f32,
            track as f32,
            track_cross as f32,
        );
        self.track_rect = bar;

        debug!(
            "scroll-area update: overflow={} track={} knob={}",
            self.geometry.overflow(),
            track,
            self.geometry.knob_size()
        );

        self.apply_content_size(layout);
        self.apply_knob_size(now);
        self.on_scroll(now);
        self.dirty = true;
    }

    /// Current scroll offset along the active axis.
    pub fn scroll_offset(&self) -> u16 {
        find_element(&self.root, &self.content_id)
            .map(|content| match self.axis {
                Axis::Vertical => content.scroll_offset.1,
                Axis::Horizontal => content.scroll_offset.0,
            })
            .unwrap_or(0)
    }

    pub fn geometry(&self) -> &ScrollGeometry {
        &self.geometry
    }

    pub fn knob_offset(&self) -> f32 {
        self.knob_offset
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    /// Current bar opacity (1.0 when fully shown).
    pub fn bar_opacity(&self) -> f32 {
        find_element(&self.root, &self.bar_id)
            .map(|bar| bar.style.opacity)
            .unwrap_or(1.0)
    }

    /// Pending idle-hide deadline, if armed.
    pub fn hide_deadline(&self) -> Option<Instant> {
        self.idle_hide.deadline()
    }

    /// Scroll the content to `value`, clamped to the overflow.
    pub fn scroll_to(&mut self, value: u16) {
        let max = self.geometry.overflow().round() as u16;
        let value = value.min(max);
        let axis = self.axis;
        self.with_element(&self.content_id.clone(), |content| match axis {
            Axis::Vertical => content.scroll_offset.1 = value,
            Axis::Horizontal => content.scroll_offset.0 = value,
        });
        self.dirty = true;
    }

    pub(crate) fn scroll_by(&mut self, delta: i16) {
        let current = self.scroll_offset() as i32;
        let max = self.geometry.overflow().round() as i32;
        let next = (current + delta as i32).clamp(0, max) as u16;
        self.scroll_to(next);
    }

    /// Synchronize the knob to the content's scroll position. Skipped
    /// while dragging so the two event sources cannot feed back into
    /// each other. Every call re-arms the idle-hide timer.
    pub fn on_scroll(&mut self, now: Instant) {
        if self.dragging.is_none() {
            let offset = self.scroll_offset();
            let dimension = self.geometry.knob_for_scroll(offset as f32);
            self.place_knob(dimension);
        }
        self.start_hide(now);
    }

    fn apply_content_size(&mut self, layout: &LayoutResult) {
        if !self.opts.set_content_size {
            return;
        }
        let Some(root_rect) = layout.get(&self.root.id) else {
            return;
        };
        let wrapper_cross = match self.axis {
            Axis::Vertical => root_rect.width,
            Axis::Horizontal => root_rect.height,
        };
        // Reserve room for the bar when it renders beside the content.
        let reserved = if !self.opts.hide_bar && !self.opts.inside {
            self.geometry.bar_size_cross() as u16
        } else {
            0
        };
        let cross = wrapper_cross.saturating_sub(reserved);
        let axis = self.axis;
        self.with_element(&self.inner_id.clone(), |inner| match axis {
            Axis::Vertical => inner.width = Size::Fixed(cross),
            Axis::Horizontal => inner.height = Size::Fixed(cross),
        });
    }

    fn apply_knob_size(&mut self, now: Instant) {
        let knob = self.geometry.knob_size().round() as u16;
        let axis = self.axis;
        self.with_element(&self.knob_id.clone(), |el| match axis {
            Axis::Vertical => el.height = Size::Fixed(knob),
            Axis::Horizontal => el.width = Size::Fixed(knob),
        });

        // A bar that cannot scroll anything fades out entirely (the
        // auto-hide timer handles this when hide_bar is on).
        if !self.opts.hide_bar {
            let target = if self.geometry.overflow() == 0.0 { 0.0 } else { 1.0 };
            self.fade(&self.bar_id.clone(), target, now);
        }
    }

    pub(crate) fn place_knob(&mut self, offset: f32) {
        self.knob_offset = offset;
        let cells = offset.round() as i16;
        let axis = self.axis;
        self.with_element(&self.knob_id.clone(), |knob| match axis {
            Axis::Vertical => knob.top = cells,
            Axis::Horizontal => knob.left = cells,
        });
        self.dirty = true;
    }

    pub(crate) fn show_knob(&mut self, now: Instant) {
        if self.opts.hide_bar && self.geometry.overflow() > 0.0 {
            self.idle_hide.cancel();
            self.fade(&self.bar_id.clone(), 1.0, now);
            self.fade(&self.knob_id.clone(), 1.0, now);
        }
    }

    pub(crate) fn hide_knob(&mut self, now: Instant) {
        if self.opts.hide_bar {
            self.fade(&self.bar_id.clone(), 0.0, now);
            self.fade(&self.knob_id.clone(), 0.0, now);
        }
    }

    /// (Re)arm the idle-hide timer; a pending deadline is replaced.
    pub(crate) fn start_hide(&mut self, now: Instant) {
        if self.opts.hide_bar {
            self.idle_hide.arm(now, self.opts.hide_delay);
        }
    }

    fn fade(&mut self, id: &str, target: f32, now: Instant) {
        let current = find_element(&self.root, id)
            .map(|el| el.style.opacity)
            .unwrap_or(1.0);
        if (current - target).abs() < f32::EPSILON && self.tweens.target(id, TweenProperty::Opacity).is_none() {
            return;
        }
        self.tweens.start(
            id,
            TweenProperty::Opacity,
            current,
            target,
            TransitionConfig::new(FADE, Easing::Linear),
            now,
        );
    }

    fn set_opacity(&mut self, id: &str, value: f32) {
        self.tweens.set(id, TweenProperty::Opacity);
        self.with_element(id, |el| el.style.opacity = value);
    }

    fn with_element(&mut self, id: &str, f: impl FnOnce(&mut Element)) {
        if let Some(element) = find_element_mut(&mut self.root, id) {
            f(element);
        }
    }

    fn apply_tween(&mut self, id: &str, property: TweenProperty, value: f32) {
        if property == TweenProperty::Opacity {
            self.with_element(id, |el| el.style.opacity = value);
        }
    }
}

impl Component for ScrollArea {
    fn root(&self) -> &Element {
        &self.root
    }

    fn handle(&mut self, event: &Event, layout: &LayoutResult, now: Instant) -> EventResult {
        self.handle_event(event, layout, now)
    }

    fn tick(&mut self, now: Instant) -> bool {
        let mut dirty = std::mem::take(&mut self.dirty);

        if self.resize_sync.fire(now) {
            self.pending_update = true;
            dirty = true;
        }
        if self.idle_hide.fire(now) {
            self.hide_knob(now);
        }

        for (id, property, value) in self.tweens.tick(now) {
            self.apply_tween(&id, property, value);
            dirty = true;
        }
        for (id, property, value) in self.tweens.values(now) {
            self.apply_tween(&id, property, value);
            dirty = true;
        }

        dirty
    }

    fn after_layout(&mut self, layout: &LayoutResult, now: Instant) {
        if !self.initialized || self.pending_update {
            self.initialized = true;
            self.pending_update = false;
            self.update(layout, now);
        } else if let Some(bar) = layout.get(&self.bar_id) {
            // Keep the drag bounds current between full updates.
            self.track_rect = bar;
        }
    }

    fn next_deadline(&self, now: Instant) -> Option<Instant> {
        let mut deadline = self.idle_hide.deadline();
        for candidate in [
            self.resize_sync.deadline(),
            self.tweens.has_active().then(|| now + Duration::from_millis(16)),
        ]
        .into_iter()
        .flatten()
        {
            deadline = Some(deadline.map_or(candidate, |d: Instant| d.min(candidate)));
        }
        deadline
    }

    fn dispose(&mut self) {
        if self.disposables.is_disposed() {
            warn!("scroll-area disposed twice");
            return;
        }
        self.dragging = None;
        self.track_rect = Rect::default();
        self.idle_hide.cancel();
        self.resize_sync.cancel();
        self.tweens.clear();
        self.disposables.dispose();
    }
}
