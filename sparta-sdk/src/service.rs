use async_trait::async_trait;

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{WorkflowRequest, WorkflowResult, WorkflowStatus};

/// Backend seam for the workflow operations the UI drives.
///
/// [`ApiClient`] is the production implementation; tests substitute an
/// in-memory mock behind the same `Arc<dyn WorkflowService>`.
#[async_trait]
pub trait WorkflowService: Send + Sync {
    async fn create_workflow(&self, request: &WorkflowRequest) -> Result<WorkflowStatus>;

    async fn workflow_status(&self, workflow_id: &str) -> Result<WorkflowStatus>;

    async fn workflow_result(&self, workflow_id: &str) -> Result<WorkflowResult>;

    async fn cancel_workflow(&self, workflow_id: &str) -> Result<()>;
}

#[async_trait]
impl WorkflowService for ApiClient {
    async fn create_workflow(&self, request: &WorkflowRequest) -> Result<WorkflowStatus> {
        ApiClient::create_workflow(self, request).await
    }

    async fn workflow_status(&self, workflow_id: &str) -> Result<WorkflowStatus> {
        ApiClient::workflow_status(self, workflow_id).await
    }

    async fn workflow_result(&self, workflow_id: &str) -> Result<WorkflowResult> {
        ApiClient::workflow_result(self, workflow_id).await
    }

    async fn cancel_workflow(&self, workflow_id: &str) -> Result<()> {
        ApiClient::cancel_workflow(self, workflow_id).await
    }
}
