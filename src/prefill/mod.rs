//! Pre-fill data loading.
//!
//! Country behaviors can seed a form with externally sourced data
//! before the user edits it. Loaders are asynchronous; a failed load is
//! never fatal to the form (the controller proceeds without pre-fill).

mod http;
mod mock;
mod remote;

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::PrefillError;
use crate::model::FieldValue;

pub use http::{HttpClient, HttpResponse, ReqwestHttpClient, StubHttpClient};
pub use mock::MockPrefilledDataLoader;
pub use remote::RemotePrefilledDataLoader;

/// Pre-fill payload: field id to seed value.
pub type PrefilledData = HashMap<String, FieldValue>;

/// Fetches pre-fill data for a form.
///
/// Keys of the returned map correspond to the `id` of the fields to be
/// pre-filled; unknown keys are silently ignored by the controller.
#[async_trait]
pub trait PrefilledDataLoader: Send + Sync {
    async fn load(&self) -> Result<PrefilledData, PrefillError>;
}
