//! Settings shared by the command-line and interactive front ends

use crate::parser::{Parser, DEFAULT_MAX_DEPTH};
use crate::tree::{TreeLayout, DEFAULT_INDENT};

/// How expressions are parsed and how their trees are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub layout: TreeLayout,
    /// Spaces per level in the vertical layout
    pub indent: usize,
    /// Bound on parenthesis nesting
    pub max_depth: usize,
    pub show_tree: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            layout: TreeLayout::default(),
            indent: DEFAULT_INDENT,
            max_depth: DEFAULT_MAX_DEPTH,
            show_tree: true,
        }
    }
}

impl Settings {
    /// A parser for `input` honoring these settings.
    pub fn parser(&self, input: &str) -> Parser {
        Parser::new(input).with_max_depth(self.max_depth)
    }
}
