//! Workflow status panel rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use sparta_sdk::types::{TaskStatus, WorkflowStatus};

pub fn render_status_panel(f: &mut Frame, area: Rect, status: &WorkflowStatus) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Workflow Status ")
        .style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Detail lines
            Constraint::Length(1), // Progress bar
        ])
        .split(inner);

    let status_style = match status.status {
        TaskStatus::Completed => Style::default().fg(Color::Green),
        TaskStatus::Failed => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::Yellow),
    };

    let stages_done = if status.stages_completed.is_empty() {
        "none".to_string()
    } else {
        status
            .stages_completed
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let details = vec![
        Line::from(vec![
            Span::styled("Workflow ID: ", Style::default().fg(Color::DarkGray)),
            Span::raw(status.workflow_id.clone()),
        ]),
        Line::from(vec![
            Span::styled("Status: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                status.status.to_string(),
                status_style.add_modifier(Modifier::BOLD),
            ),
            Span::styled("   Current stage: ", Style::default().fg(Color::DarkGray)),
            Span::raw(status.current_stage.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Stages completed: ", Style::default().fg(Color::DarkGray)),
            Span::raw(stages_done),
            Span::styled("   Updated: ", Style::default().fg(Color::DarkGray)),
            Span::raw(status.updated_at.format("%H:%M:%S").to_string()),
        ]),
    ];
    f.render_widget(Paragraph::new(details), chunks[0]);

    let progress = status.clamped_progress();
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Blue).bg(Color::DarkGray))
        .ratio(progress / 100.0)
        .label(format!("{progress:.0}%"));
    f.render_widget(gauge, chunks[1]);
}
