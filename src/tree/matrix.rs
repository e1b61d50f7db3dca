//! Top-down tree layout on a grid
//!
//! A tree of height `h` is drawn on `h` rows and `2^h - 1` columns. The root
//! sits in the middle column of row 0 and each row halves the horizontal
//! distance to the children, so the grid stays balanced no matter the shape of
//! the tree. Every cell is two characters wide. For `(1+2)*3`:
//!
//! ```text
//!       *
//!   +       3
//! 1   2
//! ```

use super::{height, LayoutError};
use crate::parser::ast::ExprNode;

/// Tallest tree the matrix layout accepts; the width doubles with each level
pub const MAX_MATRIX_HEIGHT: usize = 8;

/// Lines of the matrix layout of `tree`, trailing blanks trimmed.
pub fn matrix_lines(tree: &ExprNode) -> Result<Vec<String>, LayoutError> {
    let rows = height(Some(tree));
    if rows > MAX_MATRIX_HEIGHT {
        return Err(LayoutError::TooTall {
            height: rows,
            max: MAX_MATRIX_HEIGHT,
        });
    }

    let columns = (1usize << rows) - 1;
    let mut grid = vec![vec![None; columns]; rows];
    place(&mut grid, tree, 0, columns / 2, rows);

    Ok(grid
        .iter()
        .map(|row| {
            let line: String = row
                .iter()
                .map(|cell| format!("{} ", cell.unwrap_or(' ')))
                .collect();
            line.trim_end().to_string()
        })
        .collect())
}

/// Put `node` at (`row`, `column`) and its children one row down.
///
/// `remaining` counts the rows from `row` to the bottom of the grid.
fn place(
    grid: &mut [Vec<Option<char>>],
    node: &ExprNode,
    row: usize,
    column: usize,
    remaining: usize,
) {
    grid[row][column] = Some(node.token());

    if let Some((left, right)) = node.children() {
        // A node with children is never on the last row, so remaining >= 2
        let offset = 1usize << (remaining - 2);
        place(grid, left, row + 1, column - offset, remaining - 1);
        place(grid, right, row + 1, column + offset, remaining - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_and_evaluate;
    use pretty_assertions::assert_eq;

    fn lines(input: &str) -> Vec<String> {
        let (_, tree) = parse_and_evaluate(input).unwrap();
        matrix_lines(&tree).unwrap()
    }

    #[test]
    fn test_single_leaf() {
        assert_eq!(lines("5"), vec!["5"]);
    }

    #[test]
    fn test_full_tree() {
        assert_eq!(
            lines("(1+2)*(3-4)"),
            vec!["      *", "  +       -", "1   2   3   4"]
        );
    }

    #[test]
    fn test_lopsided_tree() {
        assert_eq!(lines("(1+2)*3"), vec!["      *", "  +       3", "1   2"]);
    }

    #[test]
    fn test_rows_match_height() {
        let (_, tree) = parse_and_evaluate("1+2+3+4").unwrap();
        let rows = matrix_lines(&tree).unwrap();
        assert_eq!(rows.len(), height(Some(&tree)));
        // The deepest leaves sit at the far left
        assert!(rows[3].starts_with('1'));
    }

    #[test]
    fn test_too_tall() {
        let input = vec!["1"; MAX_MATRIX_HEIGHT + 1].join("+");
        let (_, tree) = parse_and_evaluate(&input).unwrap();
        assert_eq!(
            matrix_lines(&tree),
            Err(LayoutError::TooTall {
                height: MAX_MATRIX_HEIGHT + 1,
                max: MAX_MATRIX_HEIGHT
            })
        );
    }
}
