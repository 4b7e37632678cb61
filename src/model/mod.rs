//! Domain model for configuration-driven KYC forms.
//!
//! These types are the parsed, validated representation of a country's
//! form document. They carry no I/O and no framework coupling; the
//! configuration layer produces them and the form controller consumes
//! them.

mod field;
mod value;

pub use field::{CountryCode, CountryConfiguration, FieldDefinition, FieldType, UnknownCountryCode};
pub use value::{FieldValue, FormData};
