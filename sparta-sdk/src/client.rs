use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::types::{HealthStatus, WorkflowRequest, WorkflowResult, WorkflowStatus};

const API_PREFIX: &str = "/api/v1";

/// FastAPI-style error body the gateway sends with non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Typed client for the SPARTA gateway.
///
/// Every operation is an independent one-shot request/response pair: no
/// caching, no deduplication, no retry. The only timeout is the fixed
/// transport-level one configured at construction.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client against the configured gateway.
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.gateway_url.trim_end_matches('/').to_string(),
        })
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn with_client(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    /// Submit a new workflow and return its initial status snapshot.
    pub async fn create_workflow(&self, request: &WorkflowRequest) -> Result<WorkflowStatus> {
        let url = self.api_url("/workflows");
        debug!(%url, "creating workflow");
        let response = self.http.post(&url).json(request).send().await?;
        decode(response).await
    }

    /// Fetch the current status snapshot of a workflow.
    pub async fn workflow_status(&self, workflow_id: &str) -> Result<WorkflowStatus> {
        let url = self.api_url(&format!("/workflows/{workflow_id}"));
        debug!(%url, "fetching workflow status");
        let response = self.http.get(&url).send().await?;
        decode(response).await
    }

    /// Fetch the result payload of a finished workflow.
    pub async fn workflow_result(&self, workflow_id: &str) -> Result<WorkflowResult> {
        let url = self.api_url(&format!("/workflows/{workflow_id}/result"));
        debug!(%url, "fetching workflow result");
        let response = self.http.get(&url).send().await?;
        decode(response).await
    }

    /// Request backend-side cancellation. The gateway's response body, if
    /// any, is discarded.
    pub async fn cancel_workflow(&self, workflow_id: &str) -> Result<()> {
        let url = self.api_url(&format!("/workflows/{workflow_id}"));
        debug!(%url, "cancelling workflow");
        let response = self.http.delete(&url).send().await?;
        check_status(response).await?;
        Ok(())
    }

    /// Gateway health probe. Served at the server root, outside the
    /// versioned prefix.
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = format!("{}/health", self.base_url);
        let response = self.http.get(&url).send().await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let response = check_status(response).await?;
    Ok(response.json().await?)
}

/// Turn a non-2xx response into [`ApiError::Status`], extracting the
/// gateway's `detail` text when the body carries one.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ErrorBody>(&body) {
        Ok(err) => err.detail,
        Err(_) => body,
    };
    Err(ApiError::Status { status, message })
}
