use std::sync::Arc;

use tracing::error;

use sparta_sdk::{ApiClient, Config, WorkflowService};

use crate::chat::ChatSession;

/// Top-level application state for the TUI.
pub struct App {
    /// Chat session, absent when the gateway client failed to build
    pub chat: Option<ChatSession>,
    pub init_error: Option<String>,
    /// Gateway base URL, shown in the header
    pub gateway_url: String,
    pub should_quit: bool,
    /// Runtime for the background request tasks
    tokio_runtime: tokio::runtime::Runtime,
}

impl App {
    pub fn new(config: Config) -> Self {
        // Create tokio runtime for async operations
        let tokio_runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

        let mut app = Self {
            chat: None,
            init_error: None,
            gateway_url: config.gateway_url.clone(),
            should_quit: false,
            tokio_runtime,
        };

        match ApiClient::new(&config) {
            Ok(client) => {
                let service = Arc::new(client) as Arc<dyn WorkflowService>;
                app.chat = Some(ChatSession::new(
                    service,
                    app.tokio_runtime.handle().clone(),
                ));
            }
            Err(e) => {
                error!(error = %e, "failed to initialize gateway client");
                app.init_error = Some(e.to_string());
            }
        }

        app
    }
}
