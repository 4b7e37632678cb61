//! Transport records mirroring the country document format.
//!
//! These structs are 1-to-1 with the YAML schema so serde can do the
//! parsing; they are mapped to the domain model immediately afterwards
//! and never escape this module.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::model::{CountryConfiguration, FieldDefinition, FieldType};
use crate::validation::ValidationRule;

#[derive(Debug, Deserialize)]
struct RawCountryConfiguration {
    country: String,
    fields: Vec<RawFieldDefinition>,
}

#[derive(Debug, Deserialize)]
struct RawFieldDefinition {
    id: String,
    label: String,
    #[serde(rename = "type")]
    field_type: String,
    #[serde(default)]
    required: Option<bool>,
    #[serde(default)]
    placeholder: Option<String>,
    #[serde(default)]
    help_text: Option<String>,
    #[serde(default)]
    validation: Option<Vec<RawValidationRule>>,
}

#[derive(Debug, Deserialize)]
struct RawValidationRule {
    #[serde(rename = "type")]
    rule_type: String,
    /// Holds the pattern for `regex` rules.
    #[serde(default)]
    value: Option<String>,
    message: String,
    /// Bounds for `length` rules.
    #[serde(default)]
    min: Option<usize>,
    #[serde(default)]
    max: Option<usize>,
}

/// Parses a country document and maps it into the domain model.
///
/// `name` is the document name used in error reporting.
pub fn parse_configuration(text: &str, name: &str) -> Result<CountryConfiguration, ConfigError> {
    let raw: RawCountryConfiguration =
        serde_yaml::from_str(text).map_err(|source| ConfigError::Decode {
            name: name.to_string(),
            source: source.into(),
        })?;

    let country = raw
        .country
        .parse()
        .map_err(|_| ConfigError::InvalidCountryCode {
            name: name.to_string(),
            code: raw.country.clone(),
        })?;

    let fields = raw
        .fields
        .into_iter()
        .map(RawFieldDefinition::into_domain)
        .collect();

    Ok(CountryConfiguration::new(country, fields))
}

impl RawFieldDefinition {
    fn into_domain(self) -> FieldDefinition {
        let field_type = map_field_type(&self.field_type);
        let required = self.required.unwrap_or(false);

        let mut rules: Vec<ValidationRule> = self
            .validation
            .unwrap_or_default()
            .into_iter()
            .map(RawValidationRule::into_domain)
            .collect();

        // A declared `required` flag becomes the first rule so presence is
        // checked before any format rule runs.
        if required {
            rules.insert(0, ValidationRule::required());
        }

        // Every date field gets the standard date checks, independent of
        // whatever the document declared for it.
        if field_type == FieldType::Date {
            rules.push(ValidationRule::NotNilDate);
            rules.push(ValidationRule::not_future(
                chrono::Local::now().date_naive(),
            ));
        }

        FieldDefinition {
            id: self.id,
            label: self.label,
            field_type,
            required,
            read_only: false,
            rules,
            placeholder: self.placeholder,
            help_text: self.help_text,
        }
    }
}

impl RawValidationRule {
    fn into_domain(self) -> ValidationRule {
        match self.rule_type.as_str() {
            "regex" => ValidationRule::regex(self.value.unwrap_or_default(), self.message),
            "length" => ValidationRule::length(
                self.min.unwrap_or(0),
                self.max.unwrap_or(usize::MAX),
                self.message,
            ),
            other => {
                // Unknown rule types degrade to always-pass rather than
                // rejecting the whole document.
                tracing::debug!(rule_type = other, "unrecognized validation rule type");
                ValidationRule::Accept
            }
        }
    }
}

fn map_field_type(raw: &str) -> FieldType {
    match raw {
        "text" => FieldType::Text,
        "date" => FieldType::Date,
        "number" => FieldType::Number { decimal_places: 0 },
        // Unknown field types fall back to plain text input.
        _ => FieldType::Text,
    }
}
