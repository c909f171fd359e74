//! HTTP client implementation for the Oura API v2.
//!
//! This module provides a reqwest-based implementation of the
//! [`OuraClient`](crate::OuraClient) trait.

use crate::{Envelope, HeartRateSample, OuraClient, OuraError, Workout};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

/// Client for the Oura API using reqwest.
#[derive(Clone, Debug)]
pub struct ReqwestOuraClient {
    base_url: String,
    token: SecretString,
    client: reqwest::Client,
}

impl ReqwestOuraClient {
    /// Create a new client instance.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the Oura API (e.g., "https://api.ouraring.com")
    /// * `token` - The personal access token (or OAuth token) for authentication
    pub fn new(base_url: &str, token: SecretString) -> Self {
        let client = reqwest::Client::builder()
            .build()
            .expect("reqwest client build should not fail");
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            client,
        }
    }

    /// Build a bearer-authenticated GET request.
    fn get_request(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .bearer_auth(self.token.expose_secret())
    }

    /// Execute a request and expect a JSON response.
    async fn execute_json<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, OuraError> {
        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Self::error_from_response(resp).await);
        }
        Ok(resp.json::<T>().await?)
    }

    /// Extract error information from a failed response.
    async fn error_from_response(resp: reqwest::Response) -> OuraError {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        let body_snippet: String = body.chars().take(256).collect();

        match status {
            401 | 403 => OuraError::Auth(body_snippet),
            404 => OuraError::NotFound(body_snippet),
            _ => OuraError::Api {
                status,
                body: body_snippet,
            },
        }
    }
}

#[async_trait]
impl OuraClient for ReqwestOuraClient {
    async fn get_workouts(&self) -> Result<Vec<Workout>, OuraError> {
        let url = format!("{}/v2/usercollection/workout", self.base_url);
        tracing::debug!("fetching workouts from {url}");
        let envelope: Envelope<Workout> = self.execute_json(self.get_request(&url)).await?;
        Ok(envelope.data)
    }

    async fn get_heartrate(
        &self,
        start_datetime: &str,
        end_datetime: &str,
    ) -> Result<Vec<HeartRateSample>, OuraError> {
        let url = format!("{}/v2/usercollection/heartrate", self.base_url);
        tracing::debug!("fetching heart rate for [{start_datetime}, {end_datetime}]");
        let request = self.get_request(&url).query(&[
            ("start_datetime", start_datetime),
            ("end_datetime", end_datetime),
        ]);
        let envelope: Envelope<HeartRateSample> = self.execute_json(request).await?;
        Ok(envelope.data)
    }
}
