//! Form validation against declared field constraints.

use std::collections::HashMap;

use casement::element::{collect_paths_by_marker, element_at, Element};
use casement::Content;
use log::debug;

use super::rules::{preset_rules, FieldValue, Rule};
use crate::error::WidgetError;

/// A single field's resolved constraints.
#[derive(Debug, Clone)]
struct FieldSpec {
    name: String,
    element_id: String,
    rules: Vec<Rule>,
}

/// One field's validation failure.
#[derive(Debug, Clone)]
pub struct FieldError {
    /// Declared field name.
    pub field: String,
    /// Element the field lives on.
    pub element_id: String,
    /// Message of the first failing rule.
    pub message: String,
}

/// Result of validating a form.
#[derive(Debug, Clone, Default)]
pub enum ValidationResult {
    #[default]
    Valid,
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors().first()
    }
}

/// Resolves declared rule names to typed predicates at construction and
/// validates current field values on demand.
///
/// Fields carry a `validate` marker listing rule names (`"required|email"`)
/// and a `name` marker. Unknown rule names fail construction.
pub struct FormValidator {
    rules: HashMap<String, Rule>,
    fields: Vec<FieldSpec>,
}

impl FormValidator {
    pub fn new(root: &Element, custom_rules: Vec<Rule>) -> Result<Self, WidgetError> {
        let mut rules = preset_rules();
        for rule in custom_rules {
            rules.insert(rule.name.clone(), rule);
        }

        let mut validator = Self {
            rules,
            fields: Vec::new(),
        };
        validator.update_constraints(root)?;
        Ok(validator)
    }

    /// Re-resolve field constraints from the tree (after fields are
    /// added or removed).
    pub fn update_constraints(&mut self, root: &Element) -> Result<(), WidgetError> {
        let mut fields = Vec::new();

        for path in collect_paths_by_marker(root, "validate") {
            let Some(element) = element_at(root, &path) else {
                continue;
            };
            let declared = element.get_data("validate").cloned().unwrap_or_default();
            let name = element
                .get_data("name")
                .cloned()
                .unwrap_or_else(|| element.id.clone());

            let mut resolved = Vec::new();
            for rule_name in declared.split('|').filter(|s| !s.is_empty()) {
                let rule = self
                    .rules
                    .get(rule_name)
                    .ok_or_else(|| WidgetError::UnknownRule {
                        name: rule_name.to_string(),
                    })?;
                resolved.push(rule.clone());
            }

            fields.push(FieldSpec {
                name,
                element_id: element.id.clone(),
                rules: resolved,
            });
        }

        debug!("form constraints resolved for {} fields", fields.len());
        self.fields = fields;
        Ok(())
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Validate current field values. The first failing rule per field
    /// wins.
    pub fn validate(&self, root: &Element) -> ValidationResult {
        let mut errors = Vec::new();

        for field in &self.fields {
            let Some(element) = casement::element::find_element(root, &field.element_id) else {
                continue;
            };
            let value = field_value(element);
            if let Some(rule) = field.rules.iter().find(|rule| !rule.check(&value)) {
                errors.push(FieldError {
                    field: field.name.clone(),
                    element_id: field.element_id.clone(),
                    message: rule.message.clone(),
                });
            }
        }

        if errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(errors)
        }
    }
}

impl std::fmt::Debug for FormValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormValidator")
            .field("fields", &self.fields.len())
            .finish()
    }
}

/// Read the value a field currently holds: text inputs yield their
/// text, checkbox markers their checked state.
fn field_value(element: &Element) -> FieldValue {
    if let Content::TextInput { value, .. } = &element.content {
        return FieldValue::Text(value.clone());
    }
    if element.data.contains_key("checkbox") {
        return FieldValue::Checked(element.get_data("checked").map(String::as_str) == Some("true"));
    }
    FieldValue::Text(
        element
            .get_data("value")
            .cloned()
            .unwrap_or_default(),
    )
}
