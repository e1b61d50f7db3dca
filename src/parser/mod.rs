//! Arithmetic expression parser
//!
//! This module turns one line of text into a value and an expression tree:
//! - [`cursor`]: Character-level lookahead and conditional consumption
//! - [`parse`]: Parser state, errors and the [`parse_and_evaluate`] entry point
//! - [`ast`]: Expression tree definitions
//!
//! # Supported Grammar
//!
//! - Operands: single decimal digits `0`-`9`
//! - Operators: `+ - * /`, with `*` and `/` binding tighter, all left-associative
//! - Grouping: parentheses, nested to any depth up to the parser's limit
//! - Whitespace is allowed between any two tokens
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser that evaluates while it builds the tree.
//! No external parser generator dependencies.

pub mod ast;
pub mod cursor;
mod expressions;
pub mod parse;

pub use parse::{parse_and_evaluate, ErrorKind, ParseError, Parser, DEFAULT_MAX_DEPTH};
