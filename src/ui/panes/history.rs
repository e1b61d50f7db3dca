//! History pane rendering

use super::{border_style, clamp_scroll};
use crate::ui::app::HistoryEntry;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render every evaluated line, newest at the bottom
pub fn render_history_pane(
    frame: &mut Frame,
    area: Rect,
    history: &[HistoryEntry],
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" History ")
        .borders(Borders::ALL)
        .border_style(border_style(false));

    if history.is_empty() {
        let paragraph = Paragraph::new("(nothing evaluated yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let all_items: Vec<ListItem> = history
        .iter()
        .map(|entry| {
            let outcome = match &entry.result {
                Ok(value) => Span::styled(
                    format!(" = {}", value),
                    Style::default().fg(DEFAULT_THEME.success),
                ),
                Err(kind) => Span::styled(
                    format!(" ✗ {:?}", kind),
                    Style::default().fg(DEFAULT_THEME.error),
                ),
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    entry.input.trim().to_string(),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
                outcome,
            ]))
        })
        .collect();

    // Account for borders, min 1
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    clamp_scroll(scroll_offset, all_items.len(), visible_height);

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
