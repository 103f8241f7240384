//! Drill-down navigation menu.
//!
//! A stack of nested tier lists slides horizontally to expose one level
//! at a time; a separate vertical transition opens and closes the whole
//! menu. Expected markers: `slide-target` (the translated stack),
//! `menu-panel` (the vertically sliding panel); tier lists carry the
//! `tier` class (the root list also `tier-one`), drill triggers the
//! `tier-item` marker (value = ID of the tier they open) and back
//! affordances the `nav-back` marker.

mod events;
mod preset;
mod state;

pub use state::{parent_tier_id, tier_depth, visible_tier_id, ACTIVE_CLASS, ROOT_TIER_CLASS, TIER_CLASS};

use std::collections::HashMap;
use std::time::{Duration, Instant};

use casement::element::{
    collect_paths, collect_paths_by_marker, element_at, element_at_mut, find_element,
    find_element_mut, find_path_by_id, find_path_by_marker,
};
use casement::{Easing, Element, Event, LayoutResult, TransitionConfig, TweenProperty, TweenState};
use log::{debug, warn};

use crate::breakpoint::{Breakpoint, BreakpointWatcher};
use crate::component::{Component, EventResult};
use crate::disposal::Disposables;
use crate::error::WidgetError;
use crate::widgets::require_marker;

/// Horizontal tier transitions.
const TIER_TWEEN: Duration = Duration::from_millis(500);
/// Vertical open/close transitions run on their own, faster clock.
const MENU_TWEEN: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DrillAction {
    /// Open the tier with this ID.
    In(String),
    /// Slide back toward the root.
    Back,
}

#[derive(Debug)]
pub struct NavMenu {
    root: Element,
    slide_id: String,
    panel_id: String,
    toggle_id: Option<String>,

    watcher: BreakpointWatcher,
    mode: Breakpoint,
    /// Element IDs bound for drill clicks in the current mode.
    drill_bindings: HashMap<String, DrillAction>,

    open: bool,
    /// Parent tier to deactivate once the back transition completes.
    pending_back: Option<String>,
    /// Height of the visible tier, for the closed offset.
    close_offset: f32,
    needs_mobile_init: bool,

    tweens: TweenState,
    disposables: Disposables,
    dirty: bool,
}

impl NavMenu {
    pub fn new(root: Element, watcher: BreakpointWatcher) -> Result<Self, WidgetError> {
        let slide_id = require_marker(&root, "slide-target")?;
        let panel_id = require_marker(&root, "menu-panel")?;
        let toggle_id = find_path_by_marker(&root, "menu-toggle")
            .and_then(|path| element_at(&root, &path))
            .map(|el| el.id.clone());

        let mode = watcher.current();
        let mut menu = Self {
            root,
            slide_id,
            panel_id,
            toggle_id,
            watcher,
            mode,
            drill_bindings: HashMap::new(),
            open: mode == Breakpoint::Desktop,
            pending_back: None,
            close_offset: 0.0,
            needs_mobile_init: mode == Breakpoint::Mobile,
            tweens: TweenState::new(),
            disposables: Disposables::new(),
            dirty: true,
        };
        menu.bind_for_mode();
        Ok(menu)
    }

    pub fn mode(&self) -> Breakpoint {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Current horizontal translation of the tier stack, in percent.
    pub fn slide_translation(&self) -> f32 {
        find_element(&self.root, &self.slide_id)
            .map(|el| el.translate_x_pct)
            .unwrap_or(0.0)
    }

    pub fn is_tier_active(&self, tier_id: &str) -> bool {
        find_element(&self.root, tier_id)
            .map(|el| el.has_class(ACTIVE_CLASS))
            .unwrap_or(false)
    }

    pub fn has_binding(&self, id: &str) -> bool {
        self.drill_bindings.contains_key(id)
    }

    pub fn binding_count(&self) -> usize {
        self.drill_bindings.len()
    }

    /// Mark the tier active and slide one level past its own nesting
    /// depth.
    pub fn drill_in(&mut self, tier_id: &str, now: Instant) {
        let Some(path) = find_path_by_id(&self.root, tier_id) else {
            warn!("drill-in target `{tier_id}` not in tree");
            return;
        };
        let depth = tier_depth(&self.root, &path, &self.slide_id);
        if let Some(tier) = element_at_mut(&mut self.root, &path) {
            tier.add_class(ACTIVE_CLASS);
        }
        // A new drill supersedes any pending back deactivation.
        self.pending_back = None;
        self.slide_to(-((depth as f32 + 1.0) * 100.0), Easing::ExpoOut, now);
        debug!("drill-in to {tier_id} at nesting {depth}");
        self.dirty = true;
    }

    /// Slide back to the item's ancestor depth. The immediate parent
    /// list loses its active flag only once the transition completes,
    /// so deeper content does not flash at the old depth.
    pub fn drill_back(&mut self, item_id: &str, now: Instant) {
        let Some(path) = find_path_by_id(&self.root, item_id) else {
            warn!("drill-back source `{item_id}` not in tree");
            return;
        };
        let depth = tier_depth(&self.root, &path, &self.slide_id);
        let target = (depth as f32 - 1.0).max(0.0);
        self.pending_back = parent_tier_id(&self.root, &path, &self.slide_id);
        self.slide_to(-(target * 100.0), Easing::ExpoOut, now);
        debug!("drill-back from {item_id} to depth {target}");
        self.dirty = true;
    }

    /// Slide the panel down into view.
    pub fn open(&mut self, now: Instant) {
        self.open = true;
        let current = self.panel_translate();
        self.tweens.start(
            &self.panel_id,
            TweenProperty::TranslateY,
            current,
            0.0,
            TransitionConfig::new(MENU_TWEEN, Easing::ExpoOut),
            now,
        );
        self.dirty = true;
    }

    /// Slide the panel up behind the visible tier's height.
    pub fn close(&mut self, now: Instant) {
        self.open = false;
        let current = self.panel_translate();
        self.tweens.start(
            &self.panel_id,
            TweenProperty::TranslateY,
            current,
            -self.close_offset,
            TransitionConfig::new(MENU_TWEEN, Easing::ExpoIn),
            now,
        );
        self.dirty = true;
    }

    pub fn toggle(&mut self, now: Instant) {
        if self.open {
            self.close(now);
        } else {
            self.open(now);
        }
    }

    fn panel_translate(&self) -> f32 {
        find_element(&self.root, &self.panel_id)
            .map(|el| el.translate_y as f32)
            .unwrap_or(0.0)
    }

    fn slide_to(&mut self, target_pct: f32, easing: Easing, now: Instant) {
        let current = self.slide_translation();
        self.tweens.start(
            &self.slide_id,
            TweenProperty::TranslateXPct,
            current,
            target_pct,
            TransitionConfig::new(TIER_TWEEN, easing),
            now,
        );
    }

    /// Tear down drill bindings, reset depth and translation styling,
    /// collapse any active tier, then rebind for the new mode.
    pub(crate) fn mode_switch(&mut self, new_mode: Breakpoint, _now: Instant) {
        debug!("breakpoint change: {:?} -> {:?}", self.mode, new_mode);
        self.mode = new_mode;
        self.pending_back = None;

        let slide_id = self.slide_id.clone();
        let panel_id = self.panel_id.clone();
        self.tweens.cancel_all(&slide_id);
        self.tweens.cancel_all(&panel_id);
        if let Some(slide) = find_element_mut(&mut self.root, &slide_id) {
            slide.translate_x_pct = 0.0;
        }
        if let Some(panel) = find_element_mut(&mut self.root, &panel_id) {
            panel.translate_y = 0;
        }
        for path in collect_paths(&self.root, &|el| el.has_class(ACTIVE_CLASS)) {
            if let Some(el) = element_at_mut(&mut self.root, &path) {
                el.remove_class(ACTIVE_CLASS);
            }
        }

        self.open = new_mode == Breakpoint::Desktop;
        self.needs_mobile_init = new_mode == Breakpoint::Mobile;
        self.bind_for_mode();
        self.dirty = true;
    }

    /// Bind drill-down clicks for mobile. Back affordances are bound
    /// only when at least one qualifying tier item exists.
    fn bind_for_mode(&mut self) {
        self.drill_bindings.clear();
        if self.mode != Breakpoint::Mobile {
            return;
        }

        let tier_items = collect_paths_by_marker(&self.root, "tier-item");
        for path in &tier_items {
            if let Some(el) = element_at(&self.root, path) {
                if let Some(target) = el.get_data("tier-item") {
                    self.drill_bindings
                        .insert(el.id.clone(), DrillAction::In(target.clone()));
                }
            }
        }
        if !tier_items.is_empty() {
            for path in collect_paths_by_marker(&self.root, "nav-back") {
                if let Some(el) = element_at(&self.root, &path) {
                    self.drill_bindings.insert(el.id.clone(), DrillAction::Back);
                }
            }
        }
    }

    /// Derived layout sync: anchor each nested tier one stack width per
    /// displayed level right of the slide target, and refresh the
    /// closed-panel offset from the visible tier's height.
    fn sync_layout(&mut self, layout: &LayoutResult) {
        let Some((slide_x, slide_y, slide_w, _)) = layout.frame(&self.slide_id) else {
            return;
        };

        let mut shifts = Vec::new();
        for path in collect_paths(&self.root, &|el| el.has_class(TIER_CLASS)) {
            let depth = tier_depth(&self.root, &path, &self.slide_id);
            if depth == 0 {
                continue;
            }
            let Some(el) = element_at(&self.root, &path) else {
                continue;
            };
            let Some((x, y, _, _)) = layout.frame(&el.id) else {
                continue;
            };
            let desired_x = slide_x + (depth as i32 + 1) * slide_w as i32;
            let dx = (desired_x - x) as i16;
            let dy = (slide_y - y) as i16;
            if dx != 0 || dy != 0 {
                shifts.push((path, dx, dy));
            }
        }
        for (path, dx, dy) in shifts {
            if let Some(el) = element_at_mut(&mut self.root, &path) {
                el.left = el.left.saturating_add(dx);
                el.top = el.top.saturating_add(dy);
            }
            self.dirty = true;
        }

        if let Some(tier_id) = visible_tier_id(&self.root) {
            if let Some((_, _, _, height)) = layout.frame(&tier_id) {
                self.close_offset = height as f32;
            }
        }
    }

    fn apply_tween(&mut self, id: &str, property: TweenProperty, value: f32) {
        match property {
            TweenProperty::TranslateXPct => {
                if let Some(el) = find_element_mut(&mut self.root, id) {
                    el.translate_x_pct = value;
                }
            }
            TweenProperty::TranslateY => {
                if let Some(el) = find_element_mut(&mut self.root, id) {
                    el.translate_y = value.round() as i16;
                }
            }
            _ => {}
        }
    }
}

impl Component for NavMenu {
    fn root(&self) -> &Element {
        &self.root
    }

    fn handle(&mut self, event: &Event, layout: &LayoutResult, now: Instant) -> EventResult {
        self.handle_event(event, layout, now)
    }

    fn tick(&mut self, now: Instant) -> bool {
        let mut dirty = std::mem::take(&mut self.dirty);

        for (id, property, value) in self.tweens.tick(now) {
            self.apply_tween(&id, property, value);
            if id == self.slide_id && property == TweenProperty::TranslateXPct {
                if let Some(parent_id) = self.pending_back.take() {
                    if self.is_tier_active(&parent_id) {
                        if let Some(el) = find_element_mut(&mut self.root, &parent_id) {
                            el.remove_class(ACTIVE_CLASS);
                        }
                    }
                }
            }
            dirty = true;
        }
        for (id, property, value) in self.tweens.values(now) {
            self.apply_tween(&id, property, value);
            dirty = true;
        }

        dirty
    }

    fn after_layout(&mut self, layout: &LayoutResult, _now: Instant) {
        self.sync_layout(layout);

        // Mobile starts collapsed, without animating into place.
        if self.needs_mobile_init && self.close_offset > 0.0 {
            self.needs_mobile_init = false;
            self.open = false;
            let panel_id = self.panel_id.clone();
            self.tweens.set(&panel_id, TweenProperty::TranslateY);
            let offset = -(self.close_offset.round() as i16);
            if let Some(panel) = find_element_mut(&mut self.root, &panel_id) {
                panel.translate_y = offset;
            }
            self.dirty = true;
        }
    }

    fn next_deadline(&self, now: Instant) -> Option<Instant> {
        self.tweens
            .has_active()
            .then(|| now + Duration::from_millis(16))
    }

    fn dispose(&mut self) {
        if self.disposables.is_disposed() {
            warn!("nav-menu disposed twice");
            return;
        }
        self.drill_bindings.clear();
        self.pending_back = None;
        self.tweens.clear();
        self.disposables.dispose();
    }
}
