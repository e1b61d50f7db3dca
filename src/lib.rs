//! # Introduction
//!
//! exprtree parses and evaluates arithmetic over single-digit operands,
//! building an explicit expression tree as it goes. The tree can then be laid
//! out as text, either side-rotated or on a top-down grid, and browsed in a
//! terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input line → Cursor → Parser (value + tree) → Tree layouts → CLI / TUI
//! ```
//!
//! 1. [`parser`] — recursive descent over a character [`parser::cursor::Cursor`],
//!    evaluating each grammar rule while it builds the matching subtree.
//! 2. [`interpreter`] — checked arithmetic shared by the parser, and a
//!    post-order evaluator for finished trees.
//! 3. [`tree`] — height and the vertical and matrix layouts.
//! 4. [`report`] and [`config`] — plain-text output and settings shared by
//!    the front ends.
//! 5. [`ui`] — ratatui-based REPL; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! let (value, tree) = exprtree::parse_and_evaluate("(2+3)*4").unwrap();
//! assert_eq!(value, 20);
//! assert_eq!(tree.to_string(), "((2 + 3) * 4)");
//! ```

pub mod config;
pub mod interpreter;
pub mod parser;
pub mod report;
pub mod tree;
pub mod ui;

pub use parser::ast::{BinOp, ExprNode};
pub use parser::{parse_and_evaluate, ErrorKind, ParseError, Parser};
