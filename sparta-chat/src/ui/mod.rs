//! UI rendering for the SPARTA chat TUI
//!
//! Layout is header / transcript / input / optional status panel / footer.
//! The status panel only appears once a workflow snapshot has been
//! received.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;

// Module declarations
mod chat_view;
mod header_footer;
mod status_view;

// Re-export public functions
pub use chat_view::render_chat;
pub use header_footer::{render_footer, render_header};
pub use status_view::render_status_panel;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0], app);

    // Main content: give the status panel a fixed strip when present
    let has_status = app
        .chat
        .as_ref()
        .is_some_and(|c| c.current_workflow.is_some());

    if has_status {
        let content_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Chat
                Constraint::Length(7), // Status panel
            ])
            .split(chunks[1]);

        render_chat(f, content_chunks[0], app);
        if let Some(status) = app.chat.as_ref().and_then(|c| c.current_workflow.as_ref()) {
            render_status_panel(f, content_chunks[1], status);
        }
    } else {
        render_chat(f, chunks[1], app);
    }

    // Footer
    render_footer(f, chunks[2], app);
}
