//! Expression tree utilities
//!
//! - [`height`]: number of levels in a tree
//! - [`vertical`]: side-rotated layout, right subtree on top, one token per line
//! - [`matrix`]: top-down layout on a fixed grid of columns
//!
//! Both layouts only read the tree, so rendering the same tree twice gives the
//! same lines. There is no explicit teardown: each `BinaryOp` owns its children
//! through `Box`, and dropping the root releases every node exactly once.

pub mod matrix;
pub mod vertical;

use crate::parser::ast::ExprNode;
use thiserror::Error;

pub use matrix::{matrix_lines, MAX_MATRIX_HEIGHT};
pub use vertical::{vertical_lines, VerticalLines, DEFAULT_INDENT};

/// Height of a tree; a lone leaf has height 1.
///
/// Pass `None` for an absent subtree, which has height 0.
pub fn height(node: Option<&ExprNode>) -> usize {
    node.map_or(0, node_height)
}

fn node_height(root: &ExprNode) -> usize {
    let mut deepest = 0;
    let mut pending = vec![(root, 1)];
    while let Some((node, depth)) = pending.pop() {
        deepest = deepest.max(depth);
        if let Some((left, right)) = node.children() {
            pending.push((left, depth + 1));
            pending.push((right, depth + 1));
        }
    }
    deepest
}

/// How a tree is laid out as text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeLayout {
    #[default]
    Vertical,
    Matrix,
}

impl TreeLayout {
    pub fn toggle(self) -> Self {
        match self {
            TreeLayout::Vertical => TreeLayout::Matrix,
            TreeLayout::Matrix => TreeLayout::Vertical,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TreeLayout::Vertical => "vertical",
            TreeLayout::Matrix => "matrix",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("tree of height {height} is too tall for the matrix layout (max {max})")]
    TooTall { height: usize, max: usize },
}

/// Lay `tree` out as text lines.
///
/// `indent` is the number of spaces per level and only affects
/// [`TreeLayout::Vertical`].
pub fn render(
    tree: &ExprNode,
    layout: TreeLayout,
    indent: usize,
) -> Result<Vec<String>, LayoutError> {
    match layout {
        TreeLayout::Vertical => Ok(vertical_lines(tree, indent).collect()),
        TreeLayout::Matrix => matrix_lines(tree),
    }
}
