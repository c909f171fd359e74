//! Minimal `OuraClient` trait and reqwest-based implementation for the
//! Oura API v2 user-collection endpoints used by the TCX exporter.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

pub mod config;
pub mod http_client;

#[derive(Debug, Error)]
pub enum OuraError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("authentication rejected: {0}")]
    Auth(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("api error (status {status}): {body}")]
    Api { status: u16, body: String },
    #[error("configuration error: {0}")]
    Config(String),
}

/// One workout record as returned by `GET /v2/usercollection/workout`.
///
/// Unknown payload fields are ignored; `calories` and `distance` are
/// tolerated when absent because the API omits them for some activity
/// types.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Workout {
    pub id: String,
    pub activity: String,
    pub start_datetime: String,
    pub end_datetime: String,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub distance: Option<f64>,
}

/// One heart-rate observation from `GET /v2/usercollection/heartrate`.
///
/// Both fields are optional on the wire; policy for rendering absent
/// values belongs to the consumer.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct HeartRateSample {
    #[serde(default)]
    pub bpm: Option<i64>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// The Oura API response envelope: records under `data`, plus an opaque
/// pagination token this exporter does not follow.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Envelope<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub next_token: Option<String>,
}

#[async_trait]
pub trait OuraClient: Send + Sync + 'static {
    /// Fetch the account's workout history, unordered.
    async fn get_workouts(&self) -> Result<Vec<Workout>, OuraError>;

    /// Fetch heart-rate samples for the `[start, end]` window, in the
    /// order the API emits them.
    async fn get_heartrate(
        &self,
        start_datetime: &str,
        end_datetime: &str,
    ) -> Result<Vec<HeartRateSample>, OuraError>;
}
