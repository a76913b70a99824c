//! Chat pane
//!
//! Transcript with role-colored entries, the loading indicator, and the
//! input line.

use chrono::Local;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use hoot_core::ai::types::{ChatMessage, Role};

use super::super::app::{App, Focus};
use super::border_style;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let [transcript_area, input_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(3)]).areas(area);
    render_transcript(frame, transcript_area, app);
    render_input(frame, input_area, app);
}

fn render_transcript(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Professor Hoot ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style(app.focus == Focus::Chat));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let width = inner.width as usize;
    let mut lines: Vec<Line> = Vec::new();
    for message in app.chat.messages() {
        lines.extend(message_lines(message, width));
        lines.push(Line::from(""));
    }
    if app.chat.is_loading() {
        lines.push(loading_line(app.frame));
    }

    // Pin the newest lines to the bottom of the pane.
    let skip = lines.len().saturating_sub(inner.height as usize);
    let paragraph = Paragraph::new(lines).scroll((skip as u16, 0));
    frame.render_widget(paragraph, inner);
}

fn message_lines(message: &ChatMessage, width: usize) -> Vec<Line<'static>> {
    let (label, style) = match message.role {
        Role::User => (
            "you",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Role::Assistant => (
            "hoot",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Role::System => ("note", Style::default().fg(Color::Red)),
    };

    let mut header = vec![Span::styled(label, style)];
    if let Some(timestamp) = message.timestamp {
        header.push(Span::raw(" "));
        header.push(Span::styled(
            timestamp.with_timezone(&Local).format("%H:%M").to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let mut lines = vec![Line::from(header)];
    for wrapped in textwrap::wrap(&message.content, width.saturating_sub(2).max(8)) {
        lines.push(Line::from(format!("  {wrapped}")));
    }
    lines
}

fn loading_line(frame: u64) -> Line<'static> {
    let dots = ".".repeat(((frame / 2) % 3 + 1) as usize);
    Line::from(Span::styled(
        format!("  hoot is thinking{dots}"),
        Style::default().fg(Color::DarkGray),
    ))
}

fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Chat;
    let block = Block::default()
        .title(" Message ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style(focused));

    let content = if app.chat.is_loading() {
        Line::from(Span::styled(
            "waiting for reply...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let mut spans = vec![Span::raw(app.input.buffer().to_string())];
        if focused {
            spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
        }
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(content).block(block), area);
}
