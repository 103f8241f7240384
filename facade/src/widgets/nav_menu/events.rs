//! Click routing for drill-down navigation.

use std::time::Instant;

use casement::{Event, LayoutResult, MouseButton};

use super::{DrillAction, NavMenu};
use crate::component::EventResult;

impl NavMenu {
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
            Event::Resize { width, .. } => {
                if let Some(mode) = self.watcher.observe(*width) {
                    self.mode_switch(mode, now);
                }
                EventResult::Ignored
            }
            Event::Click {
                x,
                y,
                button: MouseButton::Left,
            } => self.handle_click(*x, *y, layout, now),
            _ => EventResult::Ignored,
        }
    }

    fn handle_click(&mut self, x: u16, y: u16, layout: &LayoutResult, now: Instant) -> EventResult {
        if let Some(toggle_id) = &self.toggle_id {
            let hit = layout
                .get(toggle_id)
                .map(|rect| rect.contains(x, y))
                .unwrap_or(false);
            if hit {
                self.toggle(now);
                return EventResult::Consumed;
            }
        }

        let action = self.drill_bindings.iter().find_map(|(id, action)| {
            layout
                .get(id)
                .filter(|rect| rect.contains(x, y))
                .map(|_| (id.clone(), action.clone()))
        });

        match action {
            Some((_, DrillAction::In(tier_id))) => {
                self.drill_in(&tier_id, now);
                EventResult::Consumed
            }
            Some((item_id, DrillAction::Back)) => {
                self.drill_back(&item_id, now);
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }
}
