use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::{
    domain::{AnalysisRequest, AnalysisResult},
    error::RequestError,
    protocol::{HealthReport, StatsSnapshot},
};
use tracing::debug;
use url::Url;

use crate::config::Endpoints;

/// The remote classifier. One call, one response, no retries.
#[async_trait]
pub trait ClassificationService: Send + Sync {
    async fn classify(&self, request: &AnalysisRequest) -> Result<AnalysisResult, RequestError>;
}

#[derive(Debug, Clone)]
pub struct HttpClassificationService {
    http: Client,
    endpoint: Url,
}

impl HttpClassificationService {
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(http: Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ClassificationService for HttpClassificationService {
    async fn classify(&self, request: &AnalysisRequest) -> Result<AnalysisResult, RequestError> {
        debug!(
            endpoint = %self.endpoint,
            chars = request.text.chars().count(),
            "sending classification request"
        );
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::Status(status.as_u16()));
        }
        read_json(response).await
    }
}

/// Read-only probes against the same service: health and aggregate stats.
#[derive(Debug, Clone)]
pub struct ServiceProbe {
    http: Client,
    endpoints: Endpoints,
}

impl ServiceProbe {
    pub fn new(endpoints: Endpoints) -> Self {
        Self::with_client(Client::new(), endpoints)
    }

    pub fn with_client(http: Client, endpoints: Endpoints) -> Self {
        Self { http, endpoints }
    }

    /// A degraded service answers 503 with a regular health body, so 503 is
    /// read like a success here.
    pub async fn check_health(&self) -> Result<HealthReport, RequestError> {
        let response = self
            .http
            .get(self.endpoints.health.clone())
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() && status != StatusCode::SERVICE_UNAVAILABLE {
            return Err(RequestError::Status(status.as_u16()));
        }
        read_json(response).await
    }

    pub async fn fetch_stats(&self) -> Result<StatsSnapshot, RequestError> {
        let response = self
            .http
            .get(self.endpoints.stats.clone())
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::Status(status.as_u16()));
        }
        read_json(response).await
    }
}

fn transport_error(err: reqwest::Error) -> RequestError {
    RequestError::Transport(err.to_string())
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, RequestError> {
    let body = response.bytes().await.map_err(transport_error)?;
    serde_json::from_slice(&body).map_err(|err| RequestError::MalformedBody(err.to_string()))
}

#[cfg(test)]
#[path = "tests/service_tests.rs"]
mod tests;
