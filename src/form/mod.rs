//! Live form state: per-field editing state and the session controller.

mod controller;
mod field_state;

pub use controller::{FormController, FormEvent, FormPhase};
pub use field_state::FieldState;
