use serde_json::json;
use uuid::Uuid;

use sparta_sdk::{TaskStatus, WorkflowRequest, WorkflowStage, WorkflowStatus};

#[test]
fn new_request_carries_only_user_input() {
    let request = WorkflowRequest::new("Add a 4-bit counter");

    assert_eq!(request.user_input, "Add a 4-bit counter");
    assert!(request.workflow_id.is_none());
    assert!(request.stages.is_empty());
    assert!(request.parameters.is_empty());
    assert!(request.metadata.is_empty());
}

#[test]
fn request_omits_absent_workflow_id_on_the_wire() {
    let request = WorkflowRequest::new("counter");
    let value = serde_json::to_value(&request).unwrap();

    // The frontend payload has no workflow_id key at all; the gateway
    // assigns one. Empty collections are sent explicitly.
    assert!(value.get("workflow_id").is_none());
    assert_eq!(value["user_input"], "counter");
    assert_eq!(value["stages"], json!([]));
    assert_eq!(value["parameters"], json!({}));
    assert_eq!(value["metadata"], json!({}));
}

#[test]
fn generated_workflow_id_is_a_v4_uuid() {
    let request = WorkflowRequest::new("counter").with_generated_id();
    let id = request.workflow_id.expect("id was generated");
    let parsed = Uuid::parse_str(&id).expect("generated id parses");
    assert_eq!(parsed.get_version_num(), 4);
}

#[test]
fn stages_serialize_lowercase() {
    for stage in WorkflowStage::PIPELINE {
        let value = serde_json::to_value(stage).unwrap();
        assert_eq!(value, json!(stage.as_str()));
    }
    let parsed: WorkflowStage = serde_json::from_value(json!("optimization")).unwrap();
    assert_eq!(parsed, WorkflowStage::Optimization);
}

#[test]
fn pipeline_order_matches_stage_indices() {
    for (position, stage) in WorkflowStage::PIPELINE.iter().enumerate() {
        assert_eq!(stage.index(), position);
    }
    assert!(WorkflowStage::Parsing.index() < WorkflowStage::Emulation.index());
}

#[test]
fn terminal_statuses() {
    assert!(!TaskStatus::Pending.is_terminal());
    assert!(!TaskStatus::Running.is_terminal());
    assert!(TaskStatus::Completed.is_terminal());
    assert!(TaskStatus::Failed.is_terminal());
    assert!(TaskStatus::Cancelled.is_terminal());
}

#[test]
fn status_snapshot_decodes_gateway_payload() {
    let status: WorkflowStatus = serde_json::from_value(json!({
        "workflow_id": "wf-1",
        "current_stage": "synthesis",
        "status": "running",
        "progress_percentage": 33.3,
        "stages_completed": ["parsing"],
        "current_task_id": "task-1",
        "started_at": "2025-06-01T12:00:00Z",
        "updated_at": "2025-06-01T12:00:30Z"
    }))
    .unwrap();

    assert_eq!(status.current_stage, WorkflowStage::Synthesis);
    assert_eq!(status.status, TaskStatus::Running);
    assert_eq!(status.stages_completed, vec![WorkflowStage::Parsing]);
    assert!(status.estimated_completion.is_none());
}

#[test]
fn progress_is_clamped_for_display_only() {
    let mut status: WorkflowStatus = serde_json::from_value(json!({
        "workflow_id": "wf-1",
        "current_stage": "parsing",
        "status": "running",
        "progress_percentage": 140.0,
        "started_at": "2025-06-01T12:00:00Z",
        "updated_at": "2025-06-01T12:00:30Z"
    }))
    .unwrap();

    // The raw field keeps whatever the backend sent.
    assert_eq!(status.progress_percentage, 140.0);
    assert_eq!(status.clamped_progress(), 100.0);

    status.progress_percentage = -5.0;
    assert_eq!(status.clamped_progress(), 0.0);
}
