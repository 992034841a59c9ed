//! Wire types shared with the SPARTA gateway.
//!
//! All types serialize to the gateway's JSON contract: snake_case field
//! names, lowercase enum values, RFC 3339 timestamps.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One named phase of a workflow's pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowStage {
    Parsing,
    Synthesis,
    Generation,
    Optimization,
    Emulation,
    Complete,
}

impl WorkflowStage {
    /// Canonical pipeline order, ending in the terminal `Complete` marker.
    pub const PIPELINE: [WorkflowStage; 6] = [
        WorkflowStage::Parsing,
        WorkflowStage::Synthesis,
        WorkflowStage::Generation,
        WorkflowStage::Optimization,
        WorkflowStage::Emulation,
        WorkflowStage::Complete,
    ];

    /// Position of this stage within [`Self::PIPELINE`].
    pub fn index(&self) -> usize {
        match self {
            WorkflowStage::Parsing => 0,
            WorkflowStage::Synthesis => 1,
            WorkflowStage::Generation => 2,
            WorkflowStage::Optimization => 3,
            WorkflowStage::Emulation => 4,
            WorkflowStage::Complete => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowStage::Parsing => "parsing",
            WorkflowStage::Synthesis => "synthesis",
            WorkflowStage::Generation => "generation",
            WorkflowStage::Optimization => "optimization",
            WorkflowStage::Emulation => "emulation",
            WorkflowStage::Complete => "complete",
        }
    }
}

impl fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Run-state of a workflow, distinct from its current stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Running,
    Completed,
    Failed,
    Cancelled,
}

impl TaskStatus {
    /// Whether the workflow has stopped moving.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TaskStatus::Completed | TaskStatus::Failed | TaskStatus::Cancelled
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Running => "running",
            TaskStatus::Completed => "completed",
            TaskStatus::Failed => "failed",
            TaskStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /api/v1/workflows`.
///
/// The gateway assigns a workflow id when none is supplied, which is what
/// the chat UI relies on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<String>,
    pub user_input: String,
    #[serde(default)]
    pub stages: Vec<WorkflowStage>,
    #[serde(default)]
    pub parameters: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl WorkflowRequest {
    /// A request carrying only the user's natural-language input, with
    /// empty stage/parameter/metadata collections.
    pub fn new(user_input: impl Into<String>) -> Self {
        Self {
            workflow_id: None,
            user_input: user_input.into(),
            stages: Vec::new(),
            parameters: HashMap::new(),
            metadata: HashMap::new(),
        }
    }

    pub fn with_workflow_id(mut self, workflow_id: impl Into<String>) -> Self {
        self.workflow_id = Some(workflow_id.into());
        self
    }

    /// Attach a freshly generated v4 UUID as the workflow id.
    pub fn with_generated_id(self) -> Self {
        let id = Uuid::new_v4().to_string();
        self.with_workflow_id(id)
    }
}

/// Snapshot of a workflow's execution state, as returned by the gateway.
///
/// Treated as immutable once received; the UI replaces the whole snapshot
/// on every response. `stages_completed` being consistent with
/// `current_stage`, and the percentage lying in [0, 100], are backend
/// contracts the client does not validate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowStatus {
    pub workflow_id: String,
    pub current_stage: WorkflowStage,
    pub status: TaskStatus,
    pub progress_percentage: f64,
    #[serde(default)]
    pub stages_completed: Vec<WorkflowStage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_task_id: Option<String>,
    pub started_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_completion: Option<DateTime<Utc>>,
}

impl WorkflowStatus {
    /// Progress bounded to [0, 100] for rendering. The gauge widget
    /// panics on out-of-range ratios, so display paths go through this.
    pub fn clamped_progress(&self) -> f64 {
        self.progress_percentage.clamp(0.0, 100.0)
    }
}

/// Terminal outcome of a workflow, with per-stage payloads and artifacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowResult {
    pub workflow_id: String,
    pub status: TaskStatus,
    #[serde(default)]
    pub results: HashMap<WorkflowStage, serde_json::Value>,
    #[serde(default)]
    pub artifacts: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    pub execution_time_ms: f64,
    pub completed_at: DateTime<Utc>,
}

/// Response of the gateway's unversioned `/health` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub service: String,
    pub version: String,
    pub status: String,
}
