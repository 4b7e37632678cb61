//! Network-backed pre-fill loader.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use url::Url;

use crate::error::PrefillError;
use crate::model::FieldValue;

use super::http::{HttpClient, HttpResponse};
use super::{PrefilledData, PrefilledDataLoader};

/// Fetches a user profile over HTTP and maps it to pre-fill data.
///
/// Transport failure surfaces as `Connectivity`; a non-200 status or a
/// body that does not decode surfaces as `InvalidData`.
pub struct RemotePrefilledDataLoader {
    url: Url,
    client: Arc<dyn HttpClient>,
}

impl RemotePrefilledDataLoader {
    pub fn new(url: Url, client: Arc<dyn HttpClient>) -> Self {
        Self { url, client }
    }
}

#[async_trait]
impl PrefilledDataLoader for RemotePrefilledDataLoader {
    async fn load(&self) -> Result<PrefilledData, PrefillError> {
        let response = self.client.get(&self.url).await.map_err(|error| {
            tracing::warn!(%error, url = %self.url, "pre-fill request failed");
            PrefillError::Connectivity
        })?;
        map_profile(&response)
    }
}

/// The profile payload served by the user-profile endpoint. Birth dates
/// arrive as RFC 3339 timestamps.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserProfile {
    first_name: String,
    last_name: String,
    birth_date: DateTime<Utc>,
}

fn map_profile(response: &HttpResponse) -> Result<PrefilledData, PrefillError> {
    if response.status != 200 {
        return Err(PrefillError::InvalidData);
    }

    let profile: UserProfile =
        serde_json::from_slice(&response.body).map_err(|_| PrefillError::InvalidData)?;

    let mut data = PrefilledData::new();
    data.insert("first_name".to_string(), FieldValue::Text(profile.first_name));
    data.insert("last_name".to_string(), FieldValue::Text(profile.last_name));
    data.insert(
        "birth_date".to_string(),
        FieldValue::Date(profile.birth_date.date_naive()),
    );
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefill::StubHttpClient;
    use chrono::NaiveDate;

    fn make_sut(client: StubHttpClient) -> RemotePrefilledDataLoader {
        let url = Url::parse("https://some-api.com/api/nl-user-profile").unwrap();
        RemotePrefilledDataLoader::new(url, Arc::new(client))
    }

    #[tokio::test]
    async fn test_load_maps_profile_fields_on_success() {
        let json = r#"{"firstName":"Jane","lastName":"Doe","birthDate":"1992-05-23T10:00:00Z"}"#;
        let sut = make_sut(StubHttpClient::success(200, json.as_bytes().to_vec()));

        let data = sut.load().await.unwrap();

        assert_eq!(data.get("first_name"), Some(&FieldValue::text("Jane")));
        assert_eq!(data.get("last_name"), Some(&FieldValue::text("Doe")));
        assert_eq!(
            data.get("birth_date"),
            Some(&FieldValue::Date(
                NaiveDate::from_ymd_opt(1992, 5, 23).unwrap()
            ))
        );
    }

    #[tokio::test]
    async fn test_load_delivers_invalid_data_on_non_200_status() {
        let sut = make_sut(StubHttpClient::success(500, Vec::new()));
        assert_eq!(sut.load().await.unwrap_err(), PrefillError::InvalidData);
    }

    #[tokio::test]
    async fn test_load_delivers_invalid_data_on_undecodable_body() {
        let sut = make_sut(StubHttpClient::success(200, b"not json".to_vec()));
        assert_eq!(sut.load().await.unwrap_err(), PrefillError::InvalidData);
    }

    #[tokio::test]
    async fn test_load_delivers_connectivity_on_transport_failure() {
        let sut = make_sut(StubHttpClient::failure("connection refused"));
        assert_eq!(sut.load().await.unwrap_err(), PrefillError::Connectivity);
    }
}
