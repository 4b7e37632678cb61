//! Field validation rule engine.
//!
//! Rules are a closed enum evaluated by exhaustive match rather than a
//! trait-object hierarchy, so every rule's behavior for every value
//! shape (including `Absent`) is visible in one place.

mod rules;

pub use rules::{ValidationError, ValidationRule, REQUIRED_MESSAGE};
