//! Minimal HTTP client seam for pre-fill data sources.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use url::Url;

/// A response stripped down to what profile mapping needs.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// GET-only HTTP capability.
///
/// Transport failures are `Err`; any response that arrived, whatever
/// its status, is `Ok`. Status interpretation belongs to the caller.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &Url) -> Result<HttpResponse>;
}

/// Production client backed by reqwest.
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &Url) -> Result<HttpResponse> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(HttpResponse { status, body })
    }
}

/// Canned-response client standing in for a real backend.
///
/// Sleeps for a configurable delay to mimic network latency, then
/// returns its stubbed result regardless of the requested URL.
pub struct StubHttpClient {
    delay: Duration,
    stub: Result<HttpResponse, String>,
}

impl StubHttpClient {
    pub fn success(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            delay: Duration::ZERO,
            stub: Ok(HttpResponse {
                status,
                body: body.into(),
            }),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            delay: Duration::ZERO,
            stub: Err(message.into()),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Stubbed to return the canned NL user-profile JSON successfully.
    pub fn nl_profile_success() -> Self {
        let json = r#"
        {
            "firstName": "Jane",
            "lastName": "Doe",
            "birthDate": "1992-05-23T10:00:00Z"
        }
        "#;
        Self::success(200, json.as_bytes().to_vec()).with_delay(Duration::from_secs(1))
    }
}

#[async_trait]
impl HttpClient for StubHttpClient {
    async fn get(&self, _url: &Url) -> Result<HttpResponse> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match &self.stub {
            Ok(response) => Ok(response.clone()),
            Err(message) => Err(anyhow::anyhow!("{message}")),
        }
    }
}
