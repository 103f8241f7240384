//! Presentation preset for the form.

use casement::{Element, Size, Style};
use serde::Deserialize;

use super::Form;
use crate::component::Component;
use crate::error::WidgetError;
use crate::registry::PresetRegistration;
use crate::theme::Theme;

#[derive(Debug, Deserialize)]
struct FormData {
    fields: Vec<FieldData>,
}

#[derive(Debug, Deserialize)]
struct FieldData {
    name: String,
    label: String,
    rules: String,
    #[serde(default)]
    checkbox: bool,
    #[serde(default)]
    placeholder: String,
}

const FORM_DATA: &str = r#"{
  "fields": [
    { "name": "name", "label": "Name", "rules": "required", "placeholder": "Jane Doe" },
    { "name": "email", "label": "Email", "rules": "required|email", "placeholder": "jane@example.com" },
    { "name": "phone", "label": "Phone", "rules": "phone-number", "placeholder": "+31 6 1234 5678" },
    { "name": "terms", "label": "I accept the terms", "rules": "required-checkbox", "checkbox": true }
  ]
}"#;

fn field_row(field: &FieldData, theme: &Theme) -> Element {
    let control = if field.checkbox {
        Element::text(format!("[ ] {}", field.label))
            .id(format!("field-{}", field.name))
            .data("checkbox", "")
            .data("checked", "false")
            .data("validate", field.rules.clone())
            .data("name", field.name.clone())
            .width(Size::Fill)
            .style(Style::new().foreground(theme.text.clone()))
    } else {
        Element::text_input("")
            .id(format!("field-{}", field.name))
            .placeholder(field.placeholder.clone())
            .data("validate", field.rules.clone())
            .data("name", field.name.clone())
            .width(Size::Fill)
            .style(
                Style::new()
                    .foreground(theme.text.clone())
                    .background(theme.surface.clone()),
            )
    };

    let mut row = Element::col().width(Size::Fill);
    if !field.checkbox {
        row = row.child(
            Element::text(field.label.clone())
                .width(Size::Fill)
                .style(Style::new().foreground(theme.muted.clone())),
        );
    }
    row.child(control).child(
        Element::text("")
            .data("error-for", field.name.clone())
            .width(Size::Fill)
            .style(Style::new().foreground(theme.error.clone())),
    )
}

fn demo_tree(data: &FormData) -> Element {
    let theme = Theme::default();
    let mut form = Element::col()
        .id("contact-form")
        .width(Size::Fill)
        .height(Size::Fill)
        .padding(1)
        .gap(1)
        .style(Style::new().background(theme.backdrop.clone()));

    for field in &data.fields {
        form = form.child(field_row(field, &theme));
    }

    form.child(
        Element::text("[ Submit ]")
            .id("submit")
            .data("form-submit", "")
            .style(Style::new().foreground(theme.accent.clone()).bold()),
    )
}

fn build_default() -> Result<Box<dyn Component>, WidgetError> {
    let data: FormData = serde_json::from_str(FORM_DATA)?;
    let form = Form::new(demo_tree(&data), Vec::new())?;
    Ok(Box::new(form))
}

inventory::submit! {
    PresetRegistration::new(
        "form/default",
        "Contact form with declarative validation rules",
        build_default,
    )
}
