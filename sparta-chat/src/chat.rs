use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;
use tracing::{info, warn};

use sparta_sdk::types::{WorkflowRequest, WorkflowResult, WorkflowStage, WorkflowStatus};
use sparta_sdk::WorkflowService;

const WELCOME: &str =
    "Welcome to SPARTA! Describe your hardware design and I'll help you create it.";

/// Reply from a background request task.
#[derive(Debug)]
pub enum ChatReply {
    Created(WorkflowStatus),
    Refreshed(WorkflowStatus),
    Result(WorkflowResult),
    Cancelled(String),
    Error(String),
}

/// A chat message in the conversation
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// Chat session state
///
/// Owns the transcript and the most recent workflow snapshot. At most one
/// gateway request is in flight at a time; `waiting_for_response` gates
/// every operation until the reply lands via `poll_reply`.
pub struct ChatSession {
    /// Message history
    pub messages: Vec<ChatMessage>,
    /// Current input buffer
    pub input_buffer: String,
    /// Most recently received workflow snapshot, replaced wholesale
    pub current_workflow: Option<WorkflowStatus>,
    /// Whether a gateway request is outstanding
    pub waiting_for_response: bool,
    /// When the outstanding request started (for timing display)
    pub response_start_time: Option<Instant>,
    /// Current spinner frame (for animation)
    pub spinner_frame: usize,
    /// Scroll position for the transcript
    pub scroll: u16,
    /// Channel for receiving the reply from the background task
    reply_rx: Option<mpsc::UnboundedReceiver<ChatReply>>,
    /// Gateway operations
    service: Arc<dyn WorkflowService>,
    /// Tokio runtime handle for spawning request tasks
    tokio_handle: tokio::runtime::Handle,
}

impl ChatSession {
    /// Create a new chat session
    pub fn new(service: Arc<dyn WorkflowService>, tokio_handle: tokio::runtime::Handle) -> Self {
        Self {
            messages: vec![ChatMessage {
                role: ChatRole::Assistant,
                content: WELCOME.to_string(),
            }],
            input_buffer: String::new(),
            current_workflow: None,
            waiting_for_response: false,
            response_start_time: None,
            spinner_frame: 0,
            scroll: 0,
            reply_rx: None,
            service,
            tokio_handle,
        }
    }

    /// Submit the input buffer as a new workflow.
    ///
    /// Empty or whitespace-only input is rejected before any state
    /// change. The user message is appended before the request is issued.
    pub fn submit_input(&mut self) {
        if self.waiting_for_response {
            return;
        }
        if self.input_buffer.trim().is_empty() {
            return;
        }

        let text = std::mem::take(&mut self.input_buffer);
        self.messages.push(ChatMessage {
            role: ChatRole::User,
            content: text.clone(),
        });

        let request = WorkflowRequest::new(text);
        let tx = self.begin_request();
        let service = self.service.clone();
        self.tokio_handle.spawn(async move {
            let reply = match service.create_workflow(&request).await {
                Ok(status) => {
                    info!(workflow_id = %status.workflow_id, "workflow created");
                    ChatReply::Created(status)
                }
                Err(e) => {
                    warn!(error = %e, "workflow creation failed");
                    ChatReply::Error(e.to_string())
                }
            };
            let _ = tx.send(reply);
        });
    }

    /// Re-fetch the status snapshot of the current workflow.
    pub fn refresh_status(&mut self) {
        if self.waiting_for_response {
            return;
        }
        let workflow_id = match &self.current_workflow {
            Some(w) => w.workflow_id.clone(),
            None => return,
        };

        let tx = self.begin_request();
        let service = self.service.clone();
        self.tokio_handle.spawn(async move {
            let reply = match service.workflow_status(&workflow_id).await {
                Ok(status) => ChatReply::Refreshed(status),
                Err(e) => {
                    warn!(error = %e, "status refresh failed");
                    ChatReply::Error(e.to_string())
                }
            };
            let _ = tx.send(reply);
        });
    }

    /// Fetch the result payload of the current workflow.
    pub fn fetch_result(&mut self) {
        if self.waiting_for_response {
            return;
        }
        let workflow_id = match &self.current_workflow {
            Some(w) => w.workflow_id.clone(),
            None => return,
        };

        let tx = self.begin_request();
        let service = self.service.clone();
        self.tokio_handle.spawn(async move {
            let reply = match service.workflow_result(&workflow_id).await {
                Ok(result) => ChatReply::Result(result),
                Err(e) => {
                    warn!(error = %e, "result fetch failed");
                    ChatReply::Error(e.to_string())
                }
            };
            let _ = tx.send(reply);
        });
    }

    /// Request backend-side cancellation of the current workflow.
    ///
    /// The displayed snapshot is left untouched; a refresh shows the
    /// cancelled state once the backend reports it.
    pub fn cancel_workflow(&mut self) {
        if self.waiting_for_response {
            return;
        }
        let workflow_id = match &self.current_workflow {
            Some(w) => w.workflow_id.clone(),
            None => return,
        };

        let tx = self.begin_request();
        let service = self.service.clone();
        self.tokio_handle.spawn(async move {
            let reply = match service.cancel_workflow(&workflow_id).await {
                Ok(()) => {
                    info!(workflow_id = %workflow_id, "cancellation requested");
                    ChatReply::Cancelled(workflow_id)
                }
                Err(e) => {
                    warn!(error = %e, "cancellation failed");
                    ChatReply::Error(e.to_string())
                }
            };
            let _ = tx.send(reply);
        });
    }

    fn begin_request(&mut self) -> mpsc::UnboundedSender<ChatReply> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.reply_rx = Some(rx);
        self.waiting_for_response = true;
        self.response_start_time = Some(Instant::now());
        tx
    }

    /// Poll for the reply from the background task (non-blocking)
    pub fn poll_reply(&mut self) {
        if let Some(rx) = &mut self.reply_rx {
            match rx.try_recv() {
                Ok(reply) => {
                    self.waiting_for_response = false;
                    self.response_start_time = None;
                    self.reply_rx = None;
                    self.apply_reply(reply);
                }
                Err(mpsc::error::TryRecvError::Empty) => {
                    // No reply yet, keep waiting
                }
                Err(mpsc::error::TryRecvError::Disconnected) => {
                    self.waiting_for_response = false;
                    self.response_start_time = None;
                    self.reply_rx = None;
                    self.messages.push(ChatMessage {
                        role: ChatRole::Assistant,
                        content: "Error: reply channel disconnected".to_string(),
                    });
                }
            }
        }
    }

    fn apply_reply(&mut self, reply: ChatReply) {
        match reply {
            ChatReply::Created(status) => {
                self.messages.push(ChatMessage {
                    role: ChatRole::Assistant,
                    content: format!(
                        "Workflow started! ID: {}\nStatus: {}\nCurrent stage: {}",
                        status.workflow_id, status.status, status.current_stage
                    ),
                });
                self.current_workflow = Some(status);
            }
            ChatReply::Refreshed(status) => {
                self.messages.push(ChatMessage {
                    role: ChatRole::Assistant,
                    content: format!(
                        "Workflow {} is {} at stage {} ({:.0}%).",
                        status.workflow_id,
                        status.status,
                        status.current_stage,
                        status.clamped_progress()
                    ),
                });
                self.current_workflow = Some(status);
            }
            ChatReply::Result(result) => {
                self.messages.push(ChatMessage {
                    role: ChatRole::Assistant,
                    content: format_result(&result),
                });
            }
            ChatReply::Cancelled(workflow_id) => {
                self.messages.push(ChatMessage {
                    role: ChatRole::Assistant,
                    content: format!(
                        "Cancellation requested for workflow {workflow_id}. Refresh to see the final state."
                    ),
                });
            }
            ChatReply::Error(message) => {
                self.messages.push(ChatMessage {
                    role: ChatRole::Assistant,
                    content: format!("Error: {message}"),
                });
            }
        }
    }

    /// Scroll up in the transcript
    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Scroll down in the transcript
    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    /// Update spinner animation frame
    pub fn update_spinner(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % 8;
    }

    /// Get spinner character for current frame
    pub fn spinner_char(&self) -> char {
        const SPINNER: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];
        SPINNER[self.spinner_frame]
    }

    /// Get elapsed time since the outstanding request started
    pub fn elapsed_seconds(&self) -> Option<u64> {
        self.response_start_time
            .map(|start| start.elapsed().as_secs())
    }
}

/// Transcript summary of a workflow result.
fn format_result(result: &WorkflowResult) -> String {
    let mut out = format!(
        "Workflow {} finished with status {} in {:.0} ms.",
        result.workflow_id, result.status, result.execution_time_ms
    );

    for stage in WorkflowStage::PIPELINE {
        if let Some(value) = result.results.get(&stage) {
            let rendered = value.to_string();
            let rendered = if rendered.len() > 200 {
                format!("{}... [truncated]", &rendered[..200])
            } else {
                rendered
            };
            out.push_str(&format!("\n  {stage}: {rendered}"));
        }
    }

    if !result.artifacts.is_empty() {
        out.push_str(&format!("\nArtifacts: {}", result.artifacts.join(", ")));
    }

    if let Some(errors) = &result.errors {
        for error in errors {
            out.push_str(&format!("\nError: {error}"));
        }
    }

    out
}
