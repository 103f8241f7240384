use std::time::Instant;

use casement::element::find_element;
use casement::{layout, Content, Element, Event, Key, Modifiers, MouseButton, Rect, Size};
use facade::widgets::form::{FieldValue, Form, FormValidator, Rule, ERROR_CLASS};
use facade::{Component, WidgetError};

fn demo_tree() -> Element {
    Element::col()
        .id("contact-form")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(
            Element::text_input("")
                .id("field-name")
                .data("validate", "required")
                .data("name", "name")
                .width(Size::Fill),
        )
        .child(
            Element::text_input("")
                .id("field-email")
                .data("validate", "required|email")
                .data("name", "email")
                .width(Size::Fill),
        )
        .child(
            Element::text_input("")
                .id("field-phone")
                .data("validate", "phone-number")
                .data("name", "phone")
                .width(Size::Fill),
        )
        .child(
            Element::text("[ ] Terms")
                .id("field-terms")
                .data("checkbox", "")
                .data("checked", "false")
                .data("validate", "required-checkbox")
                .data("name", "terms")
                .width(Size::Fill),
        )
        .child(Element::text("").data("error-for", "email").width(Size::Fill))
        .child(Element::text("[ Submit ]").id("submit").data("form-submit", ""))
}

fn type_text(form: &mut Form, layout: &casement::LayoutResult, input_id: &str, text: &str) {
    let rect = layout.get(input_id).unwrap();
    form.handle(
        &Event::Click {
            x: rect.x,
            y: rect.y,
            button: MouseButton::Left,
        },
        layout,
        Instant::now(),
    );
    for c in text.chars() {
        form.handle(
            &Event::Key {
                key: Key::Char(c),
                modifiers: Modifiers::new(),
            },
            layout,
            Instant::now(),
        );
    }
}

fn ready() -> (Form, casement::LayoutResult) {
    let form = Form::new(demo_tree(), Vec::new()).unwrap();
    let result = layout(form.root(), Rect::from_size(60, 20));
    (form, result)
}

#[test]
fn test_unknown_rule_fails_construction() {
    let root = Element::col()
        .child(
            Element::text_input("")
                .data("validate", "no-such-rule")
                .data("name", "field"),
        )
        .child(Element::text("[ Submit ]").data("form-submit", ""));
    match Form::new(root, Vec::new()) {
        Err(WidgetError::UnknownRule { name }) => assert_eq!(name, "no-such-rule"),
        other => panic!("expected unknown rule error, got {other:?}"),
    }
}

#[test]
fn test_missing_submit_marker_fails_construction() {
    let root = Element::col().child(Element::text_input(""));
    assert!(matches!(
        Form::new(root, Vec::new()),
        Err(WidgetError::MissingMarker("form-submit"))
    ));
}

#[test]
fn test_empty_required_fields_fail() {
    let (mut form, _) = ready();
    let result = form.submit().clone();
    assert!(!result.is_valid());

    let failing: Vec<&str> = result.errors().iter().map(|e| e.field.as_str()).collect();
    // Phone is optional-but-well-formed, so an empty phone passes.
    assert_eq!(failing, ["name", "email", "terms"]);
}

#[test]
fn test_error_state_reflected_in_tree() {
    let (mut form, result) = ready();
    form.handle(
        &Event::Click {
            x: result.get("submit").unwrap().x,
            y: result.get("submit").unwrap().y,
            button: MouseButton::Left,
        },
        &result,
        Instant::now(),
    );

    let email = find_element(form.root(), "field-email").unwrap();
    assert!(email.has_class(ERROR_CLASS));

    // The matching error-text element carries the message.
    let error_text = casement::element::collect_paths(form.root(), &|el| {
        el.get_data("error-for").map(String::as_str) == Some("email")
    });
    let el = casement::element::element_at(form.root(), &error_text[0]).unwrap();
    assert!(matches!(&el.content, Content::Text(text) if !text.is_empty()));
}

#[test]
fn test_valid_submission_clears_errors() {
    let (mut form, result) = ready();
    form.submit();

    type_text(&mut form, &result, "field-name", "Jane");
    type_text(&mut form, &result, "field-email", "jane@example.com");

    // Toggle the terms checkbox.
    let terms = result.get("field-terms").unwrap();
    form.handle(
        &Event::Click {
            x: terms.x,
            y: terms.y,
            button: MouseButton::Left,
        },
        &result,
        Instant::now(),
    );

    let outcome = form.submit().clone();
    assert!(outcome.is_valid(), "errors: {:?}", outcome.errors());

    let email = find_element(form.root(), "field-email").unwrap();
    assert!(!email.has_class(ERROR_CLASS));
}

#[test]
fn test_invalid_email_rejected() {
    let (mut form, result) = ready();
    type_text(&mut form, &result, "field-email", "not-an-email");

    let outcome = form.submit().clone();
    assert!(outcome
        .errors()
        .iter()
        .any(|error| error.field == "email"));
}

#[test]
fn test_phone_rule() {
    let (mut form, result) = ready();
    type_text(&mut form, &result, "field-phone", "+31 (0)6 12.34/56");
    let outcome = form.submit().clone();
    assert!(!outcome.errors().iter().any(|error| error.field == "phone"));

    type_text(&mut form, &result, "field-phone", "abc");
    let outcome = form.submit().clone();
    assert!(outcome.errors().iter().any(|error| error.field == "phone"));
}

#[test]
fn test_custom_rule_overrides_preset() {
    let strict = Rule::new("required", "Mandatory", |value| match value {
        FieldValue::Text(text) => text.len() >= 2,
        FieldValue::Checked(checked) => *checked,
    });
    let mut form = Form::new(demo_tree(), vec![strict]).unwrap();
    let result = layout(form.root(), Rect::from_size(60, 20));

    type_text(&mut form, &result, "field-name", "J");
    let outcome = form.submit().clone();
    assert!(outcome
        .errors()
        .iter()
        .any(|error| error.field == "name" && error.message == "Mandatory"));
}

#[test]
fn test_validator_standalone() {
    let tree = demo_tree();
    let validator = FormValidator::new(&tree, Vec::new()).unwrap();
    assert_eq!(validator.field_count(), 4);

    let outcome = validator.validate(&tree);
    assert!(!outcome.is_valid());
    assert_eq!(outcome.first_error().unwrap().field, "name");
}
