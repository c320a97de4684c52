//! HTTP round trip against the job service.

use gigboard_core::{Job, map_jobs};
use serde_json::Value;
use thiserror::Error;

/// Failure modes of one `/jobs` round trip.
///
/// Every variant collapses to the same recovery downstream (serve the
/// fallback set); they stay distinct for logging.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("job service returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("undecodable response body: {0}")]
    Decode(String),
}

/// Thin client around the job service's single read endpoint.
pub struct JobServiceClient {
    http: reqwest::Client,
    base_url: String,
}

impl JobServiceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// One GET of `{base}/jobs`, mapped to canonical records.
    ///
    /// A 2xx payload whose top level is not an array maps to an empty
    /// list rather than an error; only a failed round trip (transport,
    /// non-2xx status, undecodable body) is an `Err`, and only an `Err`
    /// makes the caller fall back.
    pub async fn fetch_jobs(&self) -> Result<Vec<Job>, FetchError> {
        let url = format!("{}/jobs", self.base_url);
        let resp = self.http.get(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = resp.text().await?;
        let payload: Value =
            serde_json::from_str(&body).map_err(|err| FetchError::Decode(err.to_string()))?;

        Ok(map_jobs(&payload))
    }
}
