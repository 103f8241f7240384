//! Form component: field focus, editing, and submit-time validation.
//!
//! Fields declare their constraints with `validate`/`name` markers; the
//! submit affordance carries the `form-submit` marker. Error text
//! elements are matched by an `error-for` marker naming the field.

mod preset;
mod rules;
mod validator;

pub use rules::{preset_rules, FieldValue, Rule};
pub use validator::{FieldError, FormValidator, ValidationResult};

use std::time::Instant;

use casement::element::{collect_paths, element_at, element_at_mut, find_element_mut};
use casement::{Content, Element, Event, Key, LayoutResult, MouseButton};
use log::warn;

use crate::component::{Component, EventResult};
use crate::disposal::Disposables;
use crate::error::WidgetError;
use crate::widgets::require_marker;

pub const ERROR_CLASS: &str = "has-error";

#[derive(Debug)]
pub struct Form {
    root: Element,
    validator: FormValidator,
    submit_id: String,
    focused: Option<String>,
    last_result: ValidationResult,
    disposables: Disposables,
    dirty: bool,
}

impl Form {
    pub fn new(root: Element, custom_rules: Vec<Rule>) -> Result<Self, WidgetError> {
        let submit_id = require_marker(&root, "form-submit")?;
        let validator = FormValidator::new(&root, custom_rules)?;
        Ok(Self {
            root,
            validator,
            submit_id,
            focused: None,
            last_result: ValidationResult::Valid,
            disposables: Disposables::new(),
            dirty: true,
        })
    }

    pub fn validator(&self) -> &FormValidator {
        &self.validator
    }

    pub fn last_result(&self) -> &ValidationResult {
        &self.last_result
    }

    /// Validate all fields and reflect the outcome in the tree: failing
    /// fields get the error class and their error-text elements filled.
    pub fn submit(&mut self) -> &ValidationResult {
        let result = self.validator.validate(&self.root);
        self.apply_result(&result);
        self.last_result = result;
        self.dirty = true;
        &self.last_result
    }

    fn apply_result(&mut self, result: &ValidationResult) {
        // Clear previous error state wholesale, then mark failures.
        for path in collect_paths(&self.root, &|el| el.has_class(ERROR_CLASS)) {
            if let Some(el) = element_at_mut(&mut self.root, &path) {
                el.remove_class(ERROR_CLASS);
            }
        }
        for path in collect_paths(&self.root, &|el| el.data.contains_key("error-for")) {
            if let Some(el) = element_at_mut(&mut self.root, &path) {
                el.content = Content::Text(String::new());
            }
        }

        for error in result.errors() {
            if let Some(el) = find_element_mut(&mut self.root, &error.element_id) {
                el.add_class(ERROR_CLASS);
            }
            let field = error.field.clone();
            let message = error.message.clone();
            for path in collect_paths(&self.root, &|el| {
                el.get_data("error-for").map(String::as_str) == Some(field.as_str())
            }) {
                if let Some(el) = element_at_mut(&mut self.root, &path) {
                    el.content = Content::Text(message.clone());
                }
            }
        }
    }

    fn focus(&mut self, id: Option<String>) {
        if self.focused == id {
            return;
        }
        if let Some(previous) = self.focused.take() {
            self.set_input_focus(&previous, false);
        }
        if let Some(next) = &id {
            self.set_input_focus(next, true);
        }
        self.focused = id;
        self.dirty = true;
    }

    fn set_input_focus(&mut self, id: &str, focus: bool) {
        if let Some(el) = find_element_mut(&mut self.root, id) {
            if let Content::TextInput { focused, .. } = &mut el.content {
                *focused = focus;
            }
        }
    }

    fn edit_focused(&mut self, key: Key) -> EventResult {
        let Some(id) = self.focused.clone() else {
            return EventResult::Ignored;
        };
        let Some(el) = find_element_mut(&mut self.root, &id) else {
            return EventResult::Ignored;
        };
        let Content::TextInput { value, .. } = &mut el.content else {
            return EventResult::Ignored;
        };

        match key {
            Key::Char(c) if c != '\0' => value.push(c),
            Key::Backspace => {
                value.pop();
            }
            _ => return EventResult::Ignored,
        }
        self.dirty = true;
        EventResult::Consumed
    }

    fn handle_click(&mut self, x: u16, y: u16, layout: &LayoutResult) -> EventResult {
        let submit_hit = layout
            .get(&self.submit_id)
            .map(|rect| rect.contains(x, y))
            .unwrap_or(false);
        if submit_hit {
            self.submit();
            return EventResult::Consumed;
        }

        // Focus text inputs, toggle checkboxes.
        let input = collect_paths(&self.root, &|el| {
            matches!(el.content, Content::TextInput { .. })
        })
        .into_iter()
        .find_map(|path| {
            let el = element_at(&self.root, &path)?;
            let rect = layout.get(&el.id)?;
            rect.contains(x, y).then(|| el.id.clone())
        });
        if let Some(id) = input {
            self.focus(Some(id));
            return EventResult::Consumed;
        }

        let checkbox = collect_paths(&self.root, &|el| el.data.contains_key("checkbox"))
            .into_iter()
            .find_map(|path| {
                let el = element_at(&self.root, &path)?;
                let rect = layout.get(&el.id)?;
                rect.contains(x, y).then(|| el.id.clone())
            });
        if let Some(id) = checkbox {
            self.toggle_checkbox(&id);
            return EventResult::Consumed;
        }

        self.focus(None);
        EventResult::Ignored
    }

    fn toggle_checkbox(&mut self, id: &str) {
        if let Some(el) = find_element_mut(&mut self.root, id) {
            let checked = el.get_data("checked").map(String::as_str) == Some("true");
            let next = (!checked).to_string();
            el.data.insert("checked".into(), next);
            if checked {
                el.remove_class("checked");
            } else {
                el.add_class("checked");
            }
        }
        self.dirty = true;
    }
}

impl Component for Form {
    fn root(&self) -> &Element {
        &self.root
    }

    fn handle(&mut self, event: &Event, layout: &LayoutResult, _now: Instant) -> EventResult {
        if self.disposables.is_disposed() {
            return EventResult::Ignored;
        }

        match event {
            Event::Click {
                x,
                y,
                button: MouseButton::Left,
            } => self.handle_click(*x, *y, layout),
            Event::Key { key, .. } => self.edit_focused(*key),
            _ => EventResult::Ignored,
        }
    }

    fn tick(&mut self, _now: Instant) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn dispose(&mut self) {
        if self.disposables.is_disposed() {
            warn!("form disposed twice");
            return;
        }
        self.focused = None;
        self.disposables.dispose();
    }
}
