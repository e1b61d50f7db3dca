//! Main TUI application state and logic

use crate::config::Settings;
use crate::parser::ast::ExprNode;
use crate::parser::{ErrorKind, ParseError};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::info;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;

/// What the last press of Enter produced
#[derive(Debug, Clone)]
pub enum Outcome {
    Value {
        input: String,
        value: i64,
    },
    Error {
        input: String,
        error: ParseError,
    },
}

/// One evaluated line, kept for the history pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub input: String,
    pub result: Result<i64, ErrorKind>,
}

/// The main application state
pub struct App {
    pub settings: Settings,

    /// The line being edited
    pub input: String,

    /// Cursor position in `input`, in characters
    pub cursor: usize,

    /// Result of the most recent evaluation
    pub outcome: Option<Outcome>,

    /// Tree of the most recent successful evaluation
    pub last_tree: Option<ExprNode>,

    pub history: Vec<HistoryEntry>,

    /// Per-pane scroll offsets
    pub history_scroll: usize,
    pub tree_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        App {
            settings,
            input: String::new(),
            cursor: 0,
            outcome: None,
            last_tree: None,
            history: Vec::new(),
            history_scroll: 0,
            tree_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Input, result, panes, status bar
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        // Tree (left) | History (right)
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(rows[2]);

        super::panes::render_result_pane(frame, rows[1], self.outcome.as_ref());

        super::panes::render_tree_pane(
            frame,
            columns[0],
            self.last_tree.as_ref(),
            self.settings.layout,
            self.settings.indent,
            &mut self.tree_scroll,
        );

        super::panes::render_history_pane(
            frame,
            columns[1],
            &self.history,
            &mut self.history_scroll,
        );

        super::panes::render_status_bar(
            frame,
            rows[3],
            &self.status_message,
            self.history.len(),
            self.settings.layout,
            matches!(self.outcome, Some(Outcome::Error { .. })),
        );

        // Last, so the terminal cursor ends up in the input line
        super::panes::render_input_pane(frame, rows[0], &self.input, self.cursor);
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('c') | KeyCode::Char('d') = key.code {
                self.should_quit = true;
            }
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Enter => self.evaluate(),
            KeyCode::Tab => {
                self.settings.layout = self.settings.layout.toggle();
                self.tree_scroll = 0;
                self.status_message = format!("Layout: {}", self.settings.layout.name());
            }
            KeyCode::Char(c) => {
                let at = self.byte_index(self.cursor);
                self.input.insert(at, c);
                self.cursor += 1;
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_index(self.cursor);
                    self.input.remove(at);
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.input.chars().count() {
                    let at = self.byte_index(self.cursor);
                    self.input.remove(at);
                }
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.input.chars().count());
            }
            KeyCode::Home => {
                self.cursor = 0;
            }
            KeyCode::End => {
                self.cursor = self.input.chars().count();
            }
            KeyCode::Up => {
                // Rendering clamps the offset, so pull it back into range first
                let max = self.history.len().saturating_sub(1);
                self.history_scroll = self.history_scroll.min(max).saturating_sub(1);
            }
            KeyCode::Down => {
                self.history_scroll = self.history_scroll.saturating_add(1);
            }
            KeyCode::PageUp => {
                self.tree_scroll = self.tree_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                self.tree_scroll = self.tree_scroll.saturating_add(5);
            }
            _ => {}
        }
    }

    /// Evaluate the input line and clear it
    fn evaluate(&mut self) {
        let input = std::mem::take(&mut self.input);
        self.cursor = 0;

        if input.trim().is_empty() {
            self.status_message = "Nothing to evaluate".to_string();
            return;
        }

        match self.settings.parser(&input).parse() {
            Ok((value, tree)) => {
                info!("{} = {}", input.trim(), value);
                self.status_message = format!("Evaluated to {}", value);
                self.history.push(HistoryEntry {
                    input: input.clone(),
                    result: Ok(value),
                });
                self.last_tree = Some(tree);
                self.outcome = Some(Outcome::Value { input, value });
            }
            Err(error) => {
                info!("{}: {}", input.trim(), error);
                self.status_message = format!("{:?}", error.kind());
                self.history.push(HistoryEntry {
                    input: input.clone(),
                    result: Err(error.kind()),
                });
                self.outcome = Some(Outcome::Error { input, error });
            }
        }

        // Follow the newest entry and show the new tree from the top
        self.history_scroll = usize::MAX;
        self.tree_scroll = 0;
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }
}
