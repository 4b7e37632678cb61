//! Tagged value union for field contents.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

/// The value held by a form field at validation and submission time.
///
/// A closed union instead of a dynamically typed `Any`: rule evaluation
/// matches on it exhaustively, so there are no unchecked casts anywhere
/// in the engine. `Absent` stands in for "no value entered" and is a
/// first-class variant so every rule can state its behavior for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Date(NaiveDate),
    Absent,
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    /// Text content, if this value is textual.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => Some(*d),
            _ => None,
        }
    }
}

/// The submission payload: field id to collected value.
///
/// Contains only non-read-only fields; `Absent` values are omitted
/// rather than serialized as nulls.
pub type FormData = HashMap<String, FieldValue>;
