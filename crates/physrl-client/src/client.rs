//! HTTP client for the discretization backend

use physrl_core::{
    DiscretizeQuery, DiscretizeRequest, DiscretizeResponse, HealthResponse, StateVector,
};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// Message used when a failed discretize call carries no `error` field
pub const DISCRETIZE_FAILED: &str = "Discretization failed";

/// Message used for any failed health check
pub const HEALTH_FAILED: &str = "Health check failed";

const HEALTH_PATH: &str = "/api";
const DISCRETIZE_PATH: &str = "/api/discretize";

/// Client for the discretization API.
///
/// Every call is a single round trip: no retries, no timeouts and no caching.
#[derive(Debug, Clone)]
pub struct DiscretizeClient {
    client: Client,
    base_url: String,
}

impl DiscretizeClient {
    /// Create a new client for the given backend base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();

        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api.resolved_base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check that the backend is up
    pub async fn check_health(&self) -> Result<HealthResponse> {
        let url = self.url(HEALTH_PATH);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            warn!("Health check failed: {}", response.status());
            return Err(ClientError::Request(HEALTH_FAILED.to_string()));
        }

        let body = response.bytes().await?;
        decode(&body)
    }

    /// Discretize a state via `POST /api/discretize` with a JSON body
    pub async fn discretize(&self, request: &DiscretizeRequest) -> Result<DiscretizeResponse> {
        let url = self.url(DISCRETIZE_PATH);
        debug!(n_bins = ?request.n_bins, "POST {}", url);

        let response = self.client.post(&url).json(request).send().await?;

        read_discretize_response(response).await
    }

    /// Discretize a state via `GET /api/discretize` with query parameters
    pub async fn discretize_get(
        &self,
        position: f64,
        velocity: f64,
        angle: f64,
        angular_velocity: f64,
        n_bins: i64,
    ) -> Result<DiscretizeResponse> {
        let state = StateVector::new(position, velocity, angle, angular_velocity);
        self.discretize_query(&DiscretizeQuery::new(state, Some(n_bins))).await
    }

    /// GET variant taking an already assembled query
    pub async fn discretize_query(&self, query: &DiscretizeQuery) -> Result<DiscretizeResponse> {
        let url = self.url(DISCRETIZE_PATH);
        debug!(n_bins = ?query.n_bins, "GET {}", url);

        let response = self
            .client
            .get(&url)
            .query(&query.to_pairs())
            .send()
            .await?;

        read_discretize_response(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Read the body regardless of status, then map non-success statuses to
/// [`ClientError::Request`].
async fn read_discretize_response(response: Response) -> Result<DiscretizeResponse> {
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        let message = server_error_message(&body)
            .unwrap_or_else(|| DISCRETIZE_FAILED.to_string());
        warn!("Discretize request failed ({status}): {message}");
        return Err(ClientError::Request(message));
    }

    decode(&body)
}

/// Non-empty `error` string of a JSON error body, if any
fn server_error_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value
        .get("error")
        .and_then(serde_json::Value::as_str)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(ClientError::from)
}
