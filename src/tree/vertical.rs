//! Side-rotated tree layout
//!
//! The tree is printed as if rotated a quarter turn counter-clockwise: the
//! right subtree above its parent, the left subtree below, and each level
//! indented one step further than its parent. For `9-3-2`:
//!
//! ```text
//!      2
//! -
//!           3
//!      -
//!           9
//! ```

use crate::parser::ast::ExprNode;

/// Spaces per level unless the caller asks for something else
pub const DEFAULT_INDENT: usize = 5;

/// Lazy iterator over the lines of the vertical layout.
///
/// Walks right, self, left with an explicit stack, so it does not recurse and
/// can be restarted by calling [`vertical_lines`] again.
#[derive(Debug, Clone)]
pub struct VerticalLines<'a> {
    /// Nodes whose right subtree has been queued but which are not yet printed
    pending: Vec<(&'a ExprNode, usize)>,
    indent: usize,
}

impl<'a> VerticalLines<'a> {
    fn push_right_spine(&mut self, mut node: &'a ExprNode, mut depth: usize) {
        loop {
            self.pending.push((node, depth));
            match node {
                ExprNode::BinaryOp { right, .. } => {
                    node = &**right;
                    depth += 1;
                }
                ExprNode::Leaf(_) => break,
            }
        }
    }
}

impl<'a> Iterator for VerticalLines<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let (node, depth) = self.pending.pop()?;
        if let ExprNode::BinaryOp { left, .. } = node {
            self.push_right_spine(left, depth + 1);
        }
        Some(format!(
            "{:width$}{}",
            "",
            node.token(),
            width = depth * self.indent
        ))
    }
}

/// Lines of the vertical layout of `tree`, `indent` spaces per level.
pub fn vertical_lines(tree: &ExprNode, indent: usize) -> VerticalLines<'_> {
    let mut lines = VerticalLines {
        pending: Vec::new(),
        indent,
    };
    lines.push_right_spine(tree, 0);
    lines
}
