//! Expression input pane

use super::border_style;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const PROMPT: &str = "> ";

/// Render the input line and place the terminal cursor inside it.
///
/// `cursor` is a character index into `input`. Long lines scroll
/// horizontally to keep the cursor visible.
pub fn render_input_pane(frame: &mut Frame, area: Rect, input: &str, cursor: usize) {
    let block = Block::default()
        .title(" Expression ")
        .borders(Borders::ALL)
        .border_style(border_style(true));

    let prompt_width = PROMPT.chars().count();
    let visible_width = (area.width.saturating_sub(2) as usize)
        .saturating_sub(prompt_width)
        .max(1);
    let scroll = cursor.saturating_sub(visible_width - 1);

    let visible: String = input.chars().skip(scroll).take(visible_width).collect();
    let line = Line::from(vec![
        Span::styled(
            PROMPT,
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(visible, Style::default().fg(DEFAULT_THEME.fg)),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);

    let x = area.x + 1 + (prompt_width + cursor - scroll) as u16;
    frame.set_cursor_position((x, area.y + 1));
}
