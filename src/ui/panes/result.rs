//! Result pane: value or error of the last evaluation

use super::border_style;
use crate::report::caret_line;
use crate::ui::app::Outcome;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_result_pane(frame: &mut Frame, area: Rect, outcome: Option<&Outcome>) {
    let block = Block::default()
        .title(" Result ")
        .borders(Borders::ALL)
        .border_style(border_style(false));

    let lines = match outcome {
        None => vec![Line::from(Span::styled(
            "(type an expression and press Enter)",
            Style::default().fg(DEFAULT_THEME.comment),
        ))],
        Some(Outcome::Value { input, value }) => vec![Line::from(vec![
            Span::styled(input.trim().to_string(), Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled(" = ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                value.to_string(),
                Style::default()
                    .fg(DEFAULT_THEME.success)
                    .add_modifier(Modifier::BOLD),
            ),
        ])],
        Some(Outcome::Error { input, error }) => {
            let error_style = Style::default().fg(DEFAULT_THEME.error);
            vec![
                Line::from(Span::styled(
                    input.clone(),
                    Style::default().fg(DEFAULT_THEME.fg),
                )),
                Line::from(Span::styled(
                    caret_line(input, error.position()),
                    error_style.add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(format!("error: {}", error), error_style)),
            ]
        }
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
