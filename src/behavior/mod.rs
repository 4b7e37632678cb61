//! Per-country behavior injection.
//!
//! Behaviors post-process a loaded configuration: optionally fetching
//! pre-fill data and transforming the field list (marking fields
//! read-only once externally verified data is attached). The no-op
//! default is an explicit variant, so the registry's fallback path is
//! statically visible instead of hiding behind a do-nothing object.

mod registry;

use std::fmt;
use std::sync::Arc;

use url::Url;

use crate::model::FieldDefinition;
use crate::prefill::{
    PrefilledData, PrefilledDataLoader, RemotePrefilledDataLoader, StubHttpClient,
};

pub use registry::BehaviorRegistry;

const NL_PROFILE_URL: &str = "https://some-api.com/api/nl-user-profile";
const NL_LOCKED_FIELD_IDS: [&str; 3] = ["first_name", "last_name", "birth_date"];

/// Country-specific post-processing applied after a configuration loads.
#[derive(Clone)]
pub enum CountryBehavior {
    /// No pre-fill, identity transform.
    Default,
    /// Fetch pre-fill data through `loader`, then lock the listed
    /// fields; identity data verified elsewhere is not user-editable.
    PrefillAndLock {
        loader: Arc<dyn PrefilledDataLoader>,
        read_only_ids: Vec<String>,
    },
}

impl CountryBehavior {
    /// The Netherlands special case: user-profile pre-fill with the
    /// identity fields locked afterwards. Served by a canned client, as
    /// no real backend exists for the profile endpoint.
    pub fn netherlands() -> Self {
        let url = Url::parse(NL_PROFILE_URL).expect("static endpoint URL");
        let client = Arc::new(StubHttpClient::nl_profile_success());
        CountryBehavior::PrefillAndLock {
            loader: Arc::new(RemotePrefilledDataLoader::new(url, client)),
            read_only_ids: NL_LOCKED_FIELD_IDS.iter().map(|id| id.to_string()).collect(),
        }
    }

    /// The pre-fill loader this behavior wants run, if any.
    pub fn prefill_loader(&self) -> Option<Arc<dyn PrefilledDataLoader>> {
        match self {
            CountryBehavior::Default => None,
            CountryBehavior::PrefillAndLock { loader, .. } => Some(Arc::clone(loader)),
        }
    }

    /// Transforms the loaded field definitions.
    ///
    /// Pure: consumes and returns the list, never touching shared
    /// configuration state. Locking does not depend on whether the
    /// pre-fill fetch actually succeeded.
    pub fn apply(
        &self,
        fields: Vec<FieldDefinition>,
        _prefilled: Option<&PrefilledData>,
    ) -> Vec<FieldDefinition> {
        match self {
            CountryBehavior::Default => fields,
            CountryBehavior::PrefillAndLock { read_only_ids, .. } => fields
                .into_iter()
                .map(|mut field| {
                    if read_only_ids.iter().any(|id| *id == field.id) {
                        field.read_only = true;
                    }
                    field
                })
                .collect(),
        }
    }
}

impl fmt::Debug for CountryBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountryBehavior::Default => f.write_str("CountryBehavior::Default"),
            CountryBehavior::PrefillAndLock { read_only_ids, .. } => f
                .debug_struct("CountryBehavior::PrefillAndLock")
                .field("read_only_ids", read_only_ids)
                .finish_non_exhaustive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FieldDefinition, FieldType};
    use crate::prefill::MockPrefilledDataLoader;
    use std::time::Duration;

    fn sample_fields() -> Vec<FieldDefinition> {
        vec![
            FieldDefinition::new("first_name", "First Name", FieldType::Text),
            FieldDefinition::new("bsn", "BSN", FieldType::Text),
        ]
    }

    #[test]
    fn test_default_behavior_has_no_loader_and_identity_apply() {
        let behavior = CountryBehavior::Default;
        assert!(behavior.prefill_loader().is_none());

        let fields = sample_fields();
        let expected = fields.clone();
        assert_eq!(behavior.apply(fields, None), expected);
    }

    #[test]
    fn test_prefill_and_lock_marks_listed_fields_read_only() {
        let behavior = CountryBehavior::PrefillAndLock {
            loader: Arc::new(MockPrefilledDataLoader::with_delay(Duration::ZERO)),
            read_only_ids: vec!["first_name".to_string()],
        };

        let transformed = behavior.apply(sample_fields(), None);

        assert!(transformed[0].read_only);
        assert!(!transformed[1].read_only);
    }

    #[test]
    fn test_netherlands_behavior_locks_identity_fields() {
        let behavior = CountryBehavior::netherlands();
        assert!(behavior.prefill_loader().is_some());

        let fields = vec![
            FieldDefinition::new("first_name", "First Name", FieldType::Text),
            FieldDefinition::new("last_name", "Last Name", FieldType::Text),
            FieldDefinition::new("birth_date", "Date of Birth", FieldType::Date),
            FieldDefinition::new("bsn", "BSN", FieldType::Text),
        ];
        let transformed = behavior.apply(fields, None);

        assert!(transformed[0].read_only);
        assert!(transformed[1].read_only);
        assert!(transformed[2].read_only);
        assert!(!transformed[3].read_only);
    }
}
