//! Chat view rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::chat::ChatRole;

pub fn render_chat(f: &mut Frame, area: Rect, app: &App) {
    let chat = match &app.chat {
        Some(c) => c,
        None => {
            let detail = app.init_error.as_deref().unwrap_or("unknown error");
            let error = Paragraph::new(format!("Chat unavailable - {detail}"))
                .block(Block::default().borders(Borders::ALL).title(" Error "))
                .style(Style::default().fg(Color::Red));
            f.render_widget(error, area);
            return;
        }
    };

    // Split into messages area and input area
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Messages
            Constraint::Length(3), // Input box
        ])
        .split(area);

    // Render messages: user entries right-aligned, assistant entries left
    let mut message_lines = Vec::new();
    for msg in &chat.messages {
        let (label, label_style, right_aligned) = match msg.role {
            ChatRole::User => (
                "You",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                true,
            ),
            ChatRole::Assistant => (
                "SPARTA",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                false,
            ),
        };

        let mut lines = vec![Line::from(Span::styled(format!("{label}: "), label_style))];
        lines.extend(msg.content.lines().map(|l| Line::from(l.to_string())));
        if right_aligned {
            lines = lines.into_iter().map(|l| l.right_aligned()).collect();
        }

        message_lines.extend(lines);
        message_lines.push(Line::from(""));
    }

    if chat.waiting_for_response {
        let elapsed = chat.elapsed_seconds().unwrap_or(0);
        message_lines.push(Line::from(Span::styled(
            format!(
                "{} Contacting SPARTA gateway... ({elapsed}s)",
                chat.spinner_char()
            ),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    let messages_widget = Paragraph::new(message_lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Hardware Design Chat ")
                .style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false })
        .scroll((chat.scroll, 0));

    f.render_widget(messages_widget, chunks[0]);

    // Render input box
    let input_title = if chat.waiting_for_response {
        " Waiting for gateway... "
    } else {
        " Describe your hardware design (Enter to send) "
    };
    let input_style = if chat.waiting_for_response {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    let input_widget = Paragraph::new(chat.input_buffer.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(input_title)
            .style(input_style),
    );

    f.render_widget(input_widget, chunks[1]);
}
