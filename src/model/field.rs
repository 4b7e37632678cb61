//! Field definitions and per-country configuration.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::validation::ValidationRule;

/// The fundamental type of a form field.
///
/// Determines the typed-value extraction strategy (and, for a rendering
/// layer, the widget to show).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Number { decimal_places: u8 },
    Date,
    Email,
    Phone,
}

/// Supported countries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountryCode {
    Netherlands,
    Germany,
    UnitedStates,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported country code '{0}'")]
pub struct UnknownCountryCode(pub String);

impl CountryCode {
    pub const ALL: [CountryCode; 3] = [
        CountryCode::Netherlands,
        CountryCode::Germany,
        CountryCode::UnitedStates,
    ];

    /// ISO 3166-1 alpha-2 code.
    pub fn code(&self) -> &'static str {
        match self {
            CountryCode::Netherlands => "NL",
            CountryCode::Germany => "DE",
            CountryCode::UnitedStates => "US",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CountryCode::Netherlands => "Netherlands",
            CountryCode::Germany => "Germany",
            CountryCode::UnitedStates => "United States",
        }
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CountryCode {
    type Err = UnknownCountryCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NL" => Ok(CountryCode::Netherlands),
            "DE" => Ok(CountryCode::Germany),
            "US" => Ok(CountryCode::UnitedStates),
            other => Err(UnknownCountryCode(other.to_string())),
        }
    }
}

/// The complete, immutable description of a single form field.
///
/// Produced by the configuration layer; the form controller turns each
/// definition into live editing state. `read_only` is the one mutable
/// property: country behaviors rewrite it after load, once externally
/// verified data has been attached.
#[derive(Debug, Clone)]
pub struct FieldDefinition {
    /// Unique key, used for pre-fill lookup and data submission.
    pub id: String,
    /// User-visible text describing the field's purpose.
    pub label: String,
    pub field_type: FieldType,
    pub required: bool,
    pub read_only: bool,
    /// Validation rules, evaluated in insertion order.
    pub rules: Vec<ValidationRule>,
    pub placeholder: Option<String>,
    pub help_text: Option<String>,
}

impl FieldDefinition {
    pub fn new(id: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            field_type,
            required: false,
            read_only: false,
            rules: Vec::new(),
            placeholder: None,
            help_text: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn with_rules(mut self, rules: Vec<ValidationRule>) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }
}

/// Equality covers the static configuration properties only; the rule
/// list is intentionally excluded (a documented limitation carried over
/// from the original form model).
impl PartialEq for FieldDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.label == other.label
            && self.field_type == other.field_type
            && self.required == other.required
            && self.read_only == other.read_only
            && self.placeholder == other.placeholder
            && self.help_text == other.help_text
    }
}

/// The entire form configuration for one country: the parsed, validated
/// representation of a country document. Parsed once per load, immutable
/// thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryConfiguration {
    pub country: CountryCode,
    /// Ordered field definitions making up the form.
    pub fields: Vec<FieldDefinition>,
}

impl CountryConfiguration {
    pub fn new(country: CountryCode, fields: Vec<FieldDefinition>) -> Self {
        Self { country, fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationRule;

    #[test]
    fn test_country_code_parses_case_insensitively() {
        assert_eq!("nl".parse::<CountryCode>(), Ok(CountryCode::Netherlands));
        assert_eq!("DE".parse::<CountryCode>(), Ok(CountryCode::Germany));
        assert_eq!("Us".parse::<CountryCode>(), Ok(CountryCode::UnitedStates));
    }

    #[test]
    fn test_country_code_rejects_unknown_codes() {
        let err = "XX".parse::<CountryCode>().unwrap_err();
        assert_eq!(err, UnknownCountryCode("XX".to_string()));
    }

    #[test]
    fn test_country_code_display_is_iso_code() {
        assert_eq!(CountryCode::Netherlands.to_string(), "NL");
        assert_eq!(CountryCode::Germany.display_name(), "Germany");
    }

    #[test]
    fn test_field_definition_equality_ignores_rules() {
        let without_rules = FieldDefinition::new("bsn", "BSN", FieldType::Text);
        let with_rules = FieldDefinition::new("bsn", "BSN", FieldType::Text)
            .with_rules(vec![ValidationRule::required()]);

        assert_eq!(without_rules, with_rules);
    }

    #[test]
    fn test_field_definition_equality_covers_flags() {
        let plain = FieldDefinition::new("bsn", "BSN", FieldType::Text);
        let locked = FieldDefinition::new("bsn", "BSN", FieldType::Text).read_only();

        assert_ne!(plain, locked);
    }
}
