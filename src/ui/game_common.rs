//! Shared UI pieces: status bar and the game-over overlay.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Two-line status bar: a message plus `[key] action` hints.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    message_color: Color,
    hints: &[(&str, &str)],
) {
    let mut spans = vec![Span::styled(
        format!(" {}", message),
        Style::default()
            .fg(message_color)
            .add_modifier(Modifier::BOLD),
    )];
    for (key, action) in hints {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Centered boxed overlay shown when the run has ended.
pub fn render_game_over_overlay(frame: &mut Frame, area: Rect, title: &str, lines: &[String]) {
    let box_height = (lines.len() as u16 + 4).min(area.height);
    let box_width = 44.min(area.width);
    let overlay = Rect {
        x: area.x + (area.width.saturating_sub(box_width)) / 2,
        y: area.y + (area.height.saturating_sub(box_height)) / 2,
        width: box_width,
        height: box_height,
    };

    frame.render_widget(Clear, overlay);
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let mut text = vec![Line::from("")];
    for line in lines {
        text.push(Line::from(Span::styled(
            line.clone(),
            Style::default().fg(Color::White),
        )));
    }
    frame.render_widget(
        Paragraph::new(text).alignment(Alignment::Center),
        inner,
    );
}
