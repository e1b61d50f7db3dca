//! Expression tree pane
//!
//! Shows the tree of the last successful evaluation in the selected layout,
//! with digits and operators colored apart. Before anything has been
//! evaluated it shows the grammar instead.

use super::{border_style, clamp_scroll};
use crate::parser::ast::{BinOp, ExprNode};
use crate::report::GRAMMAR_BANNER;
use crate::tree::{self, TreeLayout};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Color each token of a layout line
fn highlight_tree_line(line: &str) -> Line<'static> {
    let spans: Vec<Span<'static>> = line
        .chars()
        .map(|ch| {
            let style = if ch.is_ascii_digit() {
                Style::default().fg(DEFAULT_THEME.number)
            } else if BinOp::from_symbol(ch).is_some() {
                Style::default()
                    .fg(DEFAULT_THEME.operator)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Span::styled(ch.to_string(), style)
        })
        .collect();
    Line::from(spans)
}

pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    tree: Option<&ExprNode>,
    layout: TreeLayout,
    indent: usize,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(format!(" Tree ({}) ", layout.name()))
        .borders(Borders::ALL)
        .border_style(border_style(false));

    let Some(tree) = tree else {
        let mut lines = vec![
            Line::from(Span::styled(
                "Expressions must obey the following grammar:",
                Style::default().fg(DEFAULT_THEME.comment),
            )),
            Line::default(),
        ];
        lines.extend(GRAMMAR_BANNER.iter().map(|rule| {
            Line::from(Span::styled(*rule, Style::default().fg(DEFAULT_THEME.primary)))
        }));
        frame.render_widget(Paragraph::new(lines).block(block), area);
        return;
    };

    let lines: Vec<Line> = match tree::render(tree, layout, indent) {
        Ok(rendered) => rendered.iter().map(|line| highlight_tree_line(line)).collect(),
        Err(e) => vec![Line::from(Span::styled(
            e.to_string(),
            Style::default().fg(DEFAULT_THEME.error),
        ))],
    };

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    clamp_scroll(scroll_offset, lines.len(), visible_height);

    let visible: Vec<Line> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();
    frame.render_widget(Paragraph::new(visible).block(block), area);
}
