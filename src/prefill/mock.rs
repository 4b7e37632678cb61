//! Synthetic pre-fill loader with canned data.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::PrefillError;
use crate::model::FieldValue;

use super::{PrefilledData, PrefilledDataLoader};

/// Returns a fixed user profile after a fixed delay, simulating a
/// network fetch without a backend.
pub struct MockPrefilledDataLoader {
    delay: Duration,
}

impl MockPrefilledDataLoader {
    pub fn new() -> Self {
        Self {
            delay: Duration::from_secs(1),
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockPrefilledDataLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PrefilledDataLoader for MockPrefilledDataLoader {
    async fn load(&self) -> Result<PrefilledData, PrefillError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let birth_date = NaiveDate::from_ymd_opt(1990, 1, 15).expect("valid calendar date");

        let mut data = PrefilledData::new();
        data.insert("first_name".to_string(), FieldValue::text("John"));
        data.insert("last_name".to_string(), FieldValue::text("Doe"));
        data.insert("birth_date".to_string(), FieldValue::Date(birth_date));
        Ok(data)
    }
}
