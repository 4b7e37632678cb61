//! Configuration-driven KYC form engine.
//!
//! Per-country Know-Your-Customer forms whose shape (fields, types,
//! validation rules) comes entirely from external YAML documents
//! rather than per-country code. The crate provides the domain model,
//! the rule engine, the configuration loader, per-country behavior
//! injection (pre-fill + field locking), and the form session
//! controller; rendering is left to a consuming UI layer that observes
//! the controller's published state.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use kyc_form::config::YamlConfigurationLoader;
//! use kyc_form::behavior::BehaviorRegistry;
//! use kyc_form::form::FormController;
//!
//! # async fn run() {
//! let loader = Arc::new(YamlConfigurationLoader::new("config"));
//! let mut form = FormController::new(loader, BehaviorRegistry::new());
//! form.select_country("NL").await;
//! if let Some(bsn) = form.field_mut("bsn") {
//!     bsn.set_value("123456789");
//! }
//! form.submit();
//! # }
//! ```

// Core error handling
pub mod error;

// Domain model: fields, values, country configurations
pub mod model;

// Field validation rule engine
pub mod validation;

// Configuration documents: transport format + YAML loader
pub mod config;

// Pre-fill data loading (mock and network-backed)
pub mod prefill;

// Per-country behaviors and their registry
pub mod behavior;

// Live form state: field states + session controller
pub mod form;

pub use behavior::{BehaviorRegistry, CountryBehavior};
pub use config::{ConfigurationLoader, YamlConfigurationLoader};
pub use error::{ConfigError, PrefillError};
pub use form::{FieldState, FormController, FormEvent, FormPhase};
pub use model::{
    CountryCode, CountryConfiguration, FieldDefinition, FieldType, FieldValue, FormData,
};
pub use prefill::{PrefilledData, PrefilledDataLoader};
pub use validation::{ValidationError, ValidationRule};
