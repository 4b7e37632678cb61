//! Error taxonomies for configuration loading and pre-fill fetching.
//!
//! Both taxonomies are terminal for the operation that produced them: the
//! form controller recovers by clearing the form (configuration) or by
//! proceeding without pre-fill (pre-fill), never by retrying on its own.

use thiserror::Error;

/// Failures while resolving a country code to a form configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration file '{name}' not found")]
    FileNotFound { name: String },

    #[error("failed to decode configuration '{name}': {source}")]
    Decode {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("configuration '{name}' declares unsupported country code '{code}'")]
    InvalidCountryCode { name: String, code: String },
}

/// Failures while fetching pre-fill data for a form.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefillError {
    #[error("could not reach the pre-fill data source")]
    Connectivity,

    #[error("pre-fill data source returned an invalid response")]
    InvalidData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display_carries_file_name() {
        let err = ConfigError::FileNotFound {
            name: "xx.yaml".to_string(),
        };
        assert_eq!(err.to_string(), "configuration file 'xx.yaml' not found");
    }

    #[test]
    fn test_invalid_country_code_display() {
        let err = ConfigError::InvalidCountryCode {
            name: "nl.yaml".to_string(),
            code: "XX".to_string(),
        };
        assert!(err.to_string().contains("XX"));
        assert!(err.to_string().contains("nl.yaml"));
    }
}
