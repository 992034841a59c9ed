use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sparta_sdk::{ApiClient, ApiError, Config, TaskStatus, WorkflowRequest, WorkflowStage};

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let config = Config {
        gateway_url: server.uri(),
        request_timeout_secs: 5,
    };
    let client = ApiClient::new(&config).unwrap();
    (server, client)
}

fn running_status_body(workflow_id: &str) -> serde_json::Value {
    json!({
        "workflow_id": workflow_id,
        "current_stage": "parsing",
        "status": "running",
        "progress_percentage": 10.0,
        "stages_completed": [],
        "started_at": "2025-06-01T12:00:00Z",
        "updated_at": "2025-06-01T12:00:01Z"
    })
}

#[tokio::test]
async fn create_workflow_posts_request_and_decodes_status() {
    let (server, client) = setup().await;

    let request = WorkflowRequest::new("Add a 4-bit counter");

    Mock::given(method("POST"))
        .and(path("/api/v1/workflows"))
        .and(body_json(&request))
        .respond_with(ResponseTemplate::new(200).set_body_json(running_status_body("wf-1")))
        .mount(&server)
        .await;

    let status = client.create_workflow(&request).await.unwrap();
    assert_eq!(status.workflow_id, "wf-1");
    assert_eq!(status.status, TaskStatus::Running);
    assert_eq!(status.current_stage, WorkflowStage::Parsing);
    assert_eq!(status.progress_percentage, 10.0);
    assert!(status.stages_completed.is_empty());
    assert!(status.current_task_id.is_none());
}

#[tokio::test]
async fn workflow_status_hits_versioned_path() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/workflows/wf-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "workflow_id": "wf-2",
            "current_stage": "emulation",
            "status": "running",
            "progress_percentage": 80.0,
            "stages_completed": ["parsing", "synthesis", "generation", "optimization"],
            "current_task_id": "task-9",
            "started_at": "2025-06-01T12:00:00Z",
            "updated_at": "2025-06-01T12:03:00Z",
            "estimated_completion": "2025-06-01T12:04:00Z"
        })))
        .mount(&server)
        .await;

    let status = client.workflow_status("wf-2").await.unwrap();
    assert_eq!(status.current_stage, WorkflowStage::Emulation);
    assert_eq!(status.stages_completed.len(), 4);
    assert_eq!(status.stages_completed[0], WorkflowStage::Parsing);
    assert_eq!(status.current_task_id.as_deref(), Some("task-9"));
    assert!(status.estimated_completion.is_some());
}

#[tokio::test]
async fn workflow_result_decodes_stage_keyed_payloads() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/workflows/wf-3/result"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "workflow_id": "wf-3",
            "status": "completed",
            "results": {
                "parsing": {"components": 3},
                "generation": {"rtl": "module counter(...);"}
            },
            "artifacts": ["counter.v", "report.json"],
            "errors": null,
            "execution_time_ms": 5321.5,
            "completed_at": "2025-06-01T12:05:00Z"
        })))
        .mount(&server)
        .await;

    let result = client.workflow_result("wf-3").await.unwrap();
    assert_eq!(result.status, TaskStatus::Completed);
    assert_eq!(result.artifacts, vec!["counter.v", "report.json"]);
    assert!(result.errors.is_none());
    assert!(result.results.contains_key(&WorkflowStage::Parsing));
    assert!(result.results.contains_key(&WorkflowStage::Generation));
}

#[tokio::test]
async fn cancel_workflow_issues_delete_and_discards_body() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/workflows/wf-4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "workflow_id": "wf-4",
            "status": "cancelled"
        })))
        .mount(&server)
        .await;

    client.cancel_workflow("wf-4").await.unwrap();
}

#[tokio::test]
async fn non_success_status_carries_gateway_detail() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/workflows/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"detail": "Workflow not found"})),
        )
        .mount(&server)
        .await;

    let err = client.workflow_status("missing").await.unwrap_err();
    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(message, "Workflow not found");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_error_body_falls_back_to_raw_text() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/workflows"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let err = client
        .create_workflow(&WorkflowRequest::new("counter"))
        .await
        .unwrap_err();
    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status.as_u16(), 502);
            assert_eq!(message, "bad gateway");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn health_is_served_outside_the_api_prefix() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "service": "sparta-gateway",
            "version": "0.1.0",
            "status": "healthy"
        })))
        .mount(&server)
        .await;

    let health = client.health().await.unwrap();
    assert_eq!(health.service, "sparta-gateway");
    assert_eq!(health.status, "healthy");
}

#[tokio::test]
async fn trailing_slash_in_gateway_url_is_tolerated() {
    let server = MockServer::start().await;
    let config = Config {
        gateway_url: format!("{}/", server.uri()),
        request_timeout_secs: 5,
    };
    let client = ApiClient::new(&config).unwrap();

    Mock::given(method("GET"))
        .and(path("/api/v1/workflows/wf-5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(running_status_body("wf-5")))
        .mount(&server)
        .await;

    let status = client.workflow_status("wf-5").await.unwrap();
    assert_eq!(status.workflow_id, "wf-5");
}
