//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`input`]: The one-line expression editor with its prompt and cursor
//! - [`result`]: The last evaluation, either its value or the error with a caret
//! - [`tree`]: The last successful expression tree in the selected layout
//! - [`history`]: Every line evaluated this session
//! - [`status`]: Status bar with keybindings and the active layout
//!
//! # Architecture
//!
//! Each pane module exports a primary `render_*` function. Panes hold no state
//! of their own; scroll offsets live in [`App`](crate::ui::App) and are
//! clamped during rendering.

pub mod history;
pub mod input;
pub mod result;
pub mod status;
pub mod tree;

// Re-export render functions for convenience
pub use history::render_history_pane;
pub use input::render_input_pane;
pub use result::render_result_pane;
pub use status::render_status_bar;
pub use tree::render_tree_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

/// Border style for a pane, highlighted when it has focus
pub(crate) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Clamp `scroll_offset` so the last page stays full; `usize::MAX` pins to the bottom.
pub(crate) fn clamp_scroll(scroll_offset: &mut usize, total_items: usize, visible_height: usize) {
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_scroll() {
        let mut offset = usize::MAX;
        clamp_scroll(&mut offset, 10, 4);
        assert_eq!(offset, 6);

        let mut offset = 3;
        clamp_scroll(&mut offset, 2, 4);
        assert_eq!(offset, 0);

        let mut offset = 2;
        clamp_scroll(&mut offset, 10, 4);
        assert_eq!(offset, 2);
    }
}
