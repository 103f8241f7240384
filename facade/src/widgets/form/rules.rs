//! Validation rules: named, typed predicates.
//!
//! Fields declare rule names; names resolve to these predicates at
//! construction time. The preset set covers most situations; custom
//! rules can add to or override it.

use std::collections::HashMap;
use std::sync::Arc;

use regex::Regex;

/// Value read from a form field for validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl FieldValue {
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::Checked(true) => "true",
            FieldValue::Checked(false) => "false",
        }
    }
}

type RulePredicate = Arc<dyn Fn(&FieldValue) -> bool + Send + Sync>;

/// A named validation predicate with its failure message.
#[derive(Clone)]
pub struct Rule {
    pub name: String,
    pub message: String,
    predicate: RulePredicate,
}

impl Rule {
    pub fn new(
        name: impl Into<String>,
        message: impl Into<String>,
        predicate: impl Fn(&FieldValue) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            predicate: Arc::new(predicate),
        }
    }

    pub fn check(&self, value: &FieldValue) -> bool {
        (self.predicate)(value)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

const PHONE_PATTERN: &str = r"^[+]*[(]{0,1}[0-9]{1,4}[)]{0,1}[-\s\./0-9]*$";

/// Default rules covering most situations.
pub fn preset_rules() -> HashMap<String, Rule> {
    let phone = Regex::new(PHONE_PATTERN).expect("Invalid phone pattern");

    let rules = [
        Rule::new("required", "This field is required", |value| match value {
            FieldValue::Text(text) => !text.trim().is_empty(),
            FieldValue::Checked(checked) => *checked,
        }),
        Rule::new("email", "Please enter a valid email address", |value| {
            let text = value.as_text();
            // Empty passes; combine with `required` for presence.
            text.is_empty() || email_address::EmailAddress::is_valid(text)
        }),
        Rule::new("phone-number", "Please enter a valid phone number", move |value| {
            let text = value.as_text();
            text.is_empty() || phone.is_match(text)
        }),
        Rule::new(
            "required-checkbox",
            "You need to check the checkbox",
            |value| matches!(value, FieldValue::Checked(true)),
        ),
    ];

    rules
        .into_iter()
        .map(|rule| (rule.name.clone(), rule))
        .collect()
}
