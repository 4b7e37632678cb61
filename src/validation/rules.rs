//! Validation rules and their evaluation logic.

use std::fmt;

use chrono::NaiveDate;

use crate::model::FieldValue;

/// Default message for [`ValidationRule::Required`].
pub const REQUIRED_MESSAGE: &str = "This field is required";

const DATE_EMPTY_MESSAGE: &str = "Date cannot be empty";
const DATE_INVALID_MESSAGE: &str = "Invalid date format";
const DATE_NOT_A_DATE_MESSAGE: &str = "Value must be a valid date";
const DATE_REQUIRED_MESSAGE: &str = "Date value is required";
const DATE_FUTURE_MESSAGE: &str = "Date cannot be in the future";
const DATE_FORMAT_HINT_MESSAGE: &str = "Invalid date format. Expected format: yyyy-MM-dd";
const DATE_VALUE_MESSAGE: &str = "Value must be a date";
const NOT_A_NUMBER_MESSAGE: &str = "Value must be a number";

/// Date strings entered as text are accepted in ISO day format.
const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// A single validation failure, carrying the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// A unit of validation logic attached to a field.
///
/// Rules compose: each one is orthogonal and never checks what another
/// rule is responsible for. Format rules (`Regex`, `Length`) pass on
/// absent or empty values; presence is `Required`'s job alone. Every
/// variant accepts `FieldValue::Absent` without panicking, and none of
/// them mutates state.
///
/// A field's rule list evaluates in insertion order and stops at the
/// first failure, so one field surfaces at most one message at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationRule {
    /// Fails iff the value is absent or blank text.
    Required { message: String },
    /// Fails iff non-empty text does not match `pattern`.
    Regex { pattern: String, message: String },
    /// Fails iff a non-empty text's character count is outside `[min, max]`.
    Length {
        min: usize,
        max: usize,
        message: String,
    },
    /// Fails iff a numeric value (native or numeric text) is outside
    /// `[min, max]`; unparseable non-empty text gets a distinct message.
    ValueRange {
        min: Option<f64>,
        max: Option<f64>,
        message: String,
    },
    /// Fails iff the date is strictly after the bound (day granularity).
    MaximumDate { date: NaiveDate, message: String },
    /// Fails iff the date is strictly before the bound (day granularity).
    MinimumDate { date: NaiveDate, message: String },
    /// Fails iff the value is absent, blank, or not a parseable date.
    NotNilDate,
    /// Fails iff the date is strictly after `reference` (day granularity),
    /// or the value is absent or not date-shaped at all.
    NotFutureDate { reference: NaiveDate },
    /// Always passes; the mapping target for unrecognized rule types in
    /// configuration documents.
    Accept,
}

impl ValidationRule {
    pub fn required() -> Self {
        ValidationRule::Required {
            message: REQUIRED_MESSAGE.to_string(),
        }
    }

    pub fn required_with_message(message: impl Into<String>) -> Self {
        ValidationRule::Required {
            message: message.into(),
        }
    }

    pub fn regex(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationRule::Regex {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    pub fn length(min: usize, max: usize, message: impl Into<String>) -> Self {
        ValidationRule::Length {
            min,
            max,
            message: message.into(),
        }
    }

    pub fn not_future(reference: NaiveDate) -> Self {
        ValidationRule::NotFutureDate { reference }
    }

    /// Evaluates this rule against a field value.
    ///
    /// Returns the failure, or `None` when the value satisfies the rule.
    pub fn validate(&self, value: &FieldValue) -> Option<ValidationError> {
        match self {
            ValidationRule::Required { message } => match value {
                FieldValue::Absent => Some(ValidationError::new(message)),
                FieldValue::Text(s) if s.trim().is_empty() => Some(ValidationError::new(message)),
                _ => None,
            },

            ValidationRule::Regex { pattern, message } => match value {
                FieldValue::Text(s) if !s.is_empty() => {
                    // Invalid patterns behave as non-matching.
                    let matched = regex::Regex::new(pattern)
                        .map(|re| re.is_match(s))
                        .unwrap_or(false);
                    if matched {
                        None
                    } else {
                        Some(ValidationError::new(message))
                    }
                }
                _ => None,
            },

            ValidationRule::Length { min, max, message } => match value {
                FieldValue::Text(s) if !s.is_empty() => {
                    let count = s.chars().count();
                    if count < *min || count > *max {
                        Some(ValidationError::new(message))
                    } else {
                        None
                    }
                }
                _ => None,
            },

            ValidationRule::ValueRange { min, max, message } => {
                let numeric = match value {
                    FieldValue::Number(n) => Some(*n),
                    FieldValue::Text(s) if !s.is_empty() => match s.trim().parse::<f64>() {
                        Ok(n) => Some(n),
                        Err(_) => {
                            return Some(ValidationError::new(NOT_A_NUMBER_MESSAGE));
                        }
                    },
                    // Absent, empty text, and dates are out of this rule's scope.
                    _ => None,
                };

                let n = numeric?;
                if min.is_some_and(|bound| n < bound) || max.is_some_and(|bound| n > bound) {
                    Some(ValidationError::new(message))
                } else {
                    None
                }
            }

            ValidationRule::MaximumDate { date, message } => match value {
                FieldValue::Date(d) if d > date => Some(ValidationError::new(message)),
                _ => None,
            },

            ValidationRule::MinimumDate { date, message } => match value {
                FieldValue::Date(d) if d < date => Some(ValidationError::new(message)),
                _ => None,
            },

            ValidationRule::NotNilDate => match value {
                FieldValue::Absent => Some(ValidationError::new(DATE_EMPTY_MESSAGE)),
                FieldValue::Date(_) => None,
                FieldValue::Text(s) => {
                    if s.trim().is_empty() {
                        Some(ValidationError::new(DATE_EMPTY_MESSAGE))
                    } else if parse_date_text(s).is_some() {
                        None
                    } else {
                        Some(ValidationError::new(DATE_INVALID_MESSAGE))
                    }
                }
                FieldValue::Number(_) => Some(ValidationError::new(DATE_NOT_A_DATE_MESSAGE)),
            },

            ValidationRule::NotFutureDate { reference } => {
                let date = match value {
                    FieldValue::Absent => {
                        return Some(ValidationError::new(DATE_REQUIRED_MESSAGE));
                    }
                    FieldValue::Date(d) => *d,
                    FieldValue::Text(s) => match parse_date_text(s) {
                        Some(d) => d,
                        None => {
                            return Some(ValidationError::new(DATE_FORMAT_HINT_MESSAGE));
                        }
                    },
                    FieldValue::Number(_) => {
                        return Some(ValidationError::new(DATE_VALUE_MESSAGE));
                    }
                };

                if date > *reference {
                    Some(ValidationError::new(DATE_FUTURE_MESSAGE))
                } else {
                    None
                }
            }

            ValidationRule::Accept => None,
        }
    }
}

fn parse_date_text(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_INPUT_FORMAT).ok()
}
