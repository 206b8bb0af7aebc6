use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::api::envelope::Envelope;
use crate::{Result, SmokeError};

/// HTTP client bound to one API base URL.
///
/// Owns the session state: reqwest keeps cookies across calls, and once a
/// login succeeds the bearer token is attached to every later request.
pub struct ApiClient {
    inner: reqwest::Client,
    base_url: Url,
    token: Option<String>,
    user_id: Option<i64>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            inner: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .cookie_store(true)
                .build()
                .expect("Failed to build HTTP client"),
            base_url: Url::parse(base_url)?,
            token: None,
            user_id: None,
        })
    }

    /// Store the login credentials. Set once per run, never cleared.
    pub fn authenticate(&mut self, token: &str, user_id: i64) {
        self.token = Some(token.to_string());
        self.user_id = Some(user_id);
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user_id
    }

    /// GET an endpoint and decode the standard envelope. The envelope is
    /// returned only when the HTTP status is 200 and `success` is true.
    pub async fn get_envelope<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Envelope<T>> {
        let url = self.base_url.join(path)?;
        debug!("GET {}", url);

        let mut req = self.inner.get(url);
        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        let response = req.send().await?;
        Self::decode(response).await
    }

    /// POST a JSON body and decode the standard envelope.
    pub async fn post_envelope<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Envelope<T>> {
        let url = self.base_url.join(path)?;
        debug!("POST {}", url);

        let mut req = self.inner.post(url).json(body);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        let response = req.send().await?;
        Self::decode(response).await
    }

    /// Like `get_envelope`, but unwraps the `data` payload.
    pub async fn get_data<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        self.get_envelope(path, query)
            .await?
            .data
            .ok_or(SmokeError::MissingField("data"))
    }

    /// Like `post_envelope`, but unwraps the `data` payload.
    pub async fn post_data<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.post_envelope(path, body)
            .await?
            .data
            .ok_or(SmokeError::MissingField("data"))
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<Envelope<T>> {
        let status = response.status().as_u16();
        let body = response.text().await?;

        // The platform signals every application error with a non-200 status
        // or success=false; both fold into the same protocol failure.
        if status != 200 {
            return Err(SmokeError::Protocol { status, body });
        }

        let envelope: Envelope<T> = serde_json::from_str(&body)?;
        if !envelope.success {
            return Err(SmokeError::Protocol { status, body });
        }

        Ok(envelope)
    }
}
