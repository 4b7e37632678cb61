//! Per-field live editing and validation state.

use chrono::NaiveDate;

use crate::model::{FieldDefinition, FieldType, FieldValue};
use crate::validation::ValidationRule;

/// Dates render and parse in ISO day format at the editing surface.
const DATE_DISPLAY_FORMAT: &str = "%Y-%m-%d";

/// The live state of one form field.
///
/// Created when a configuration finishes loading (seeded with any
/// pre-fill value), mutated by user input and validation, and replaced
/// wholesale when the country selection changes.
#[derive(Debug, Clone)]
pub struct FieldState {
    id: String,
    label: String,
    placeholder: String,
    help_text: String,
    read_only: bool,
    field_type: FieldType,
    value: String,
    date_value: Option<NaiveDate>,
    error: Option<String>,
    rules: Vec<ValidationRule>,
}

impl FieldState {
    pub(crate) fn new(definition: FieldDefinition, prefilled: Option<&FieldValue>) -> Self {
        let mut state = Self {
            id: definition.id,
            label: definition.label,
            placeholder: definition.placeholder.unwrap_or_default(),
            help_text: definition.help_text.unwrap_or_default(),
            read_only: definition.read_only,
            field_type: definition.field_type,
            value: String::new(),
            date_value: None,
            error: None,
            rules: definition.rules,
        };
        if let Some(value) = prefilled {
            state.seed(value);
        }
        state
    }

    fn seed(&mut self, value: &FieldValue) {
        match value {
            FieldValue::Date(date) => {
                if self.field_type == FieldType::Date {
                    self.date_value = Some(*date);
                }
                self.value = date.format(DATE_DISPLAY_FORMAT).to_string();
            }
            FieldValue::Text(text) => self.value = text.clone(),
            FieldValue::Number(number) => self.value = number.to_string(),
            FieldValue::Absent => {}
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn help_text(&self) -> &str {
        &self.help_text
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Raw text as currently edited.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Structured date picked at the editing surface, if any.
    pub fn date_value(&self) -> Option<NaiveDate> {
        self.date_value
    }

    /// Current validation message; `None` means valid or not yet
    /// validated.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replaces the raw text value. A field showing an error re-checks
    /// immediately, so the message clears as soon as the input becomes
    /// valid.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        if self.error.is_some() {
            self.clear_error_if_valid();
        }
    }

    /// Replaces the structured date value, keeping the display text in
    /// sync.
    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.date_value = date;
        self.value = date
            .map(|d| d.format(DATE_DISPLAY_FORMAT).to_string())
            .unwrap_or_default();
        if self.error.is_some() {
            self.clear_error_if_valid();
        }
    }

    /// Runs the field's rules in order against the typed value,
    /// recording the first failure. Returns whether the field is valid.
    pub fn validate(&mut self) -> bool {
        self.error = None;
        let value = self.typed_value();
        for rule in &self.rules {
            if let Some(error) = rule.validate(&value) {
                self.error = Some(error.message);
                return false;
            }
        }
        true
    }

    fn clear_error_if_valid(&mut self) {
        let value = self.typed_value();
        if self.rules.iter().all(|rule| rule.validate(&value).is_none()) {
            self.error = None;
        }
    }

    /// The raw input converted to its typed form.
    ///
    /// Dates come from the structured value captured by the editing
    /// surface, not re-parsed from display text; raw text is only the
    /// fallback so date rules can still judge hand-typed input.
    pub fn typed_value(&self) -> FieldValue {
        match self.field_type {
            FieldType::Text | FieldType::Email | FieldType::Phone => {
                if self.value.is_empty() {
                    FieldValue::Absent
                } else {
                    FieldValue::Text(self.value.clone())
                }
            }
            FieldType::Number { .. } => self
                .value
                .parse::<f64>()
                .map(FieldValue::Number)
                .unwrap_or(FieldValue::Absent),
            FieldType::Date => match self.date_value {
                Some(date) => FieldValue::Date(date),
                None if self.value.is_empty() => FieldValue::Absent,
                None => FieldValue::Text(self.value.clone()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_field(rules: Vec<ValidationRule>) -> FieldState {
        FieldState::new(
            FieldDefinition::new("first_name", "First Name", FieldType::Text).with_rules(rules),
            None,
        )
    }

    #[test]
    fn test_seeds_text_prefill() {
        let state = FieldState::new(
            FieldDefinition::new("first_name", "First Name", FieldType::Text),
            Some(&FieldValue::text("John")),
        );
        assert_eq!(state.value(), "John");
    }

    #[test]
    fn test_seeds_date_prefill_with_display_text() {
        let date = NaiveDate::from_ymd_opt(1990, 1, 15).unwrap();
        let state = FieldState::new(
            FieldDefinition::new("birth_date", "Date of Birth", FieldType::Date),
            Some(&FieldValue::Date(date)),
        );
        assert_eq!(state.date_value(), Some(date));
        assert_eq!(state.value(), "1990-01-15");
    }

    #[test]
    fn test_validate_records_first_failing_rule_only() {
        let mut state = text_field(vec![
            ValidationRule::required_with_message("Required"),
            ValidationRule::length(3, 10, "Too short"),
        ]);

        assert!(!state.validate());
        assert_eq!(state.error(), Some("Required"));
    }

    #[test]
    fn test_editing_clears_error_once_valid() {
        let mut state = text_field(vec![ValidationRule::required_with_message("Required")]);
        state.validate();
        assert!(state.error().is_some());

        state.set_value("John");
        assert!(state.error().is_none());
    }

    #[test]
    fn test_editing_keeps_error_while_still_invalid() {
        let mut state = text_field(vec![
            ValidationRule::required_with_message("Required"),
            ValidationRule::length(3, 10, "Too short"),
        ]);
        state.validate();

        state.set_value("ab");
        assert_eq!(state.error(), Some("Required"));
    }

    #[test]
    fn test_typed_value_for_number_fields() {
        let mut state = FieldState::new(
            FieldDefinition::new("income", "Income", FieldType::Number { decimal_places: 0 }),
            None,
        );
        state.set_value("42000");
        assert_eq!(state.typed_value(), FieldValue::Number(42000.0));

        state.set_value("not a number");
        assert_eq!(state.typed_value(), FieldValue::Absent);
    }

    #[test]
    fn test_typed_value_prefers_structured_date() {
        let mut state = FieldState::new(
            FieldDefinition::new("birth_date", "Date of Birth", FieldType::Date),
            None,
        );
        assert_eq!(state.typed_value(), FieldValue::Absent);

        let date = NaiveDate::from_ymd_opt(1990, 1, 15).unwrap();
        state.set_date(Some(date));
        assert_eq!(state.typed_value(), FieldValue::Date(date));
    }

    #[test]
    fn test_typed_value_falls_back_to_raw_text_for_dates() {
        let mut state = FieldState::new(
            FieldDefinition::new("birth_date", "Date of Birth", FieldType::Date),
            None,
        );
        state.set_value("1990-01-15");
        assert_eq!(state.typed_value(), FieldValue::text("1990-01-15"));
    }
}
