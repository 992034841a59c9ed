//! Header and footer rendering functions

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

pub fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "SPARTA v0.1.0 - Hardware Design Chat",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("      "),
        Span::styled(
            format!("gateway: {}", app.gateway_url),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

pub fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let has_workflow = app
        .chat
        .as_ref()
        .is_some_and(|c| c.current_workflow.is_some());

    let mut spans = vec![
        Span::styled("[Enter]", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" Send  "),
        Span::styled("[↑↓]", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" Scroll  "),
    ];

    // Workflow actions only mean something once a snapshot exists
    let action_style = if has_workflow {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    spans.extend([
        Span::styled("[Ctrl+R]", action_style),
        Span::raw(" Refresh  "),
        Span::styled("[Ctrl+O]", action_style),
        Span::raw(" Result  "),
        Span::styled("[Ctrl+X]", action_style),
        Span::raw(" Cancel  "),
    ]);

    spans.extend([
        Span::styled("[Esc]", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" Quit"),
    ]);

    let footer = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}
