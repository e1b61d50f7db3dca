//! Plain-text reports for evaluated lines
//!
//! Used by the one-shot and batch modes of the binary, and by the result pane
//! of the interactive UI for the caret under an error.

use crate::config::Settings;
use crate::parser::ast::ExprNode;
use crate::parser::ParseError;

/// Grammar banner shown before the first expression
pub const GRAMMAR_BANNER: [&str; 4] = [
    "<expression> ::= <term> { (+ | -) <term> }",
    "<term>       ::= <factor> { (* | /) <factor> }",
    "<factor>     ::= ( <expression> ) | <digit>",
    "<digit>      ::= 0 | 1 | 2 | 3 | 4 | 5 | 6 | 7 | 8 | 9",
];

/// Report for a successful evaluation: the result line, then the tree.
pub fn success_lines(
    input: &str,
    value: i64,
    tree: &ExprNode,
    settings: &Settings,
) -> Vec<String> {
    let mut lines = vec![format!("Expression result: {} = {}", input.trim(), value)];

    if settings.show_tree {
        lines.push(String::new());
        lines.push("Expression tree:".to_string());
        match crate::tree::render(tree, settings.layout, settings.indent) {
            Ok(rendered) => lines.extend(rendered),
            Err(e) => lines.push(format!("({})", e)),
        }
    }

    lines
}

/// Report for a failed evaluation: the message, the input and a caret under
/// the offending column.
pub fn error_lines(input: &str, error: &ParseError) -> Vec<String> {
    vec![
        format!("error: {}", error),
        format!("  {}", input),
        format!("  {}", caret_line(input, error.position())),
    ]
}

/// Spaces up to `position`, then `^`. Tabs are kept so the caret lines up.
pub fn caret_line(input: &str, position: usize) -> String {
    let mut line: String = input
        .chars()
        .take(position)
        .map(|ch| if ch == '\t' { '\t' } else { ' ' })
        .collect();
    line.push('^');
    line
}
