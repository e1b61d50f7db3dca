//! Parser entry point and error types
//!
//! This module provides the [`Parser`] struct, the [`ParseError`] it reports,
//! and the crate-level [`parse_and_evaluate`] entry point.
//!
//! # Parser Architecture
//!
//! - This module: Parser state, error types, top-level parse and the
//!   trailing-input check
//! - `expressions`: the grammar procedures (`expression`, `term`, `factor`,
//!   `digit`), split into a separate `impl Parser` block
//!
//! Parsing and evaluation are fused. Each grammar procedure returns the value
//! of what it parsed together with the subtree it built, so a successful parse
//! yields both at once and a failed parse yields neither.

use crate::interpreter::errors::ArithmeticError;
use crate::parser::ast::{BinOp, ExprNode};
use crate::parser::cursor::Cursor;
use log::debug;
use thiserror::Error;

/// Default bound on parenthesis nesting
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Parser error type
///
/// Every variant aborts the whole parse. Positions are 0-based character
/// offsets into the input; messages report them as 1-based columns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A digit was expected; `found` is `None` at end of input
    #[error("{}", literal_message(.found, .position))]
    InvalidLiteral {
        found: Option<char>,
        position: usize,
    },

    /// `open` is the unclosed `(`, `position` is where `)` was expected
    #[error(
        "unmatched parenthesis: '(' at column {} is never closed (column {})",
        .open + 1,
        .position + 1
    )]
    UnmatchedParenthesis { open: usize, position: usize },

    /// `position` is the `/` whose divisor evaluated to zero
    #[error("division by zero at column {}", .position + 1)]
    DivisionByZero { position: usize },

    /// A complete expression was followed by more input
    #[error(
        "unexpected '{found}' at column {} after a complete expression",
        .position + 1
    )]
    TrailingInput { found: char, position: usize },

    #[error("integer overflow in '{op}' at column {}", .position + 1)]
    Overflow { op: BinOp, position: usize },

    /// Parentheses nest deeper than the parser allows; `position` is the `(`
    /// that went one level too far
    #[error("expression nests deeper than {limit} levels at column {}", .position + 1)]
    TooDeep { limit: usize, position: usize },
}

fn literal_message(found: &Option<char>, position: &usize) -> String {
    match found {
        Some(ch) => format!("'{}' is not a valid literal at column {}", ch, position + 1),
        None => format!(
            "expected a literal at column {}, found end of input",
            position + 1
        ),
    }
}

/// Field-less mirror of [`ParseError`] for matching on what went wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidLiteral,
    UnmatchedParenthesis,
    DivisionByZero,
    TrailingInput,
    Overflow,
    TooDeep,
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::InvalidLiteral { .. } => ErrorKind::InvalidLiteral,
            ParseError::UnmatchedParenthesis { .. } => ErrorKind::UnmatchedParenthesis,
            ParseError::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            ParseError::TrailingInput { .. } => ErrorKind::TrailingInput,
            ParseError::Overflow { .. } => ErrorKind::Overflow,
            ParseError::TooDeep { .. } => ErrorKind::TooDeep,
        }
    }

    /// Offset of the character the error points at.
    pub fn position(&self) -> usize {
        match self {
            ParseError::InvalidLiteral { position, .. }
            | ParseError::UnmatchedParenthesis { position, .. }
            | ParseError::DivisionByZero { position }
            | ParseError::TrailingInput { position, .. }
            | ParseError::Overflow { position, .. }
            | ParseError::TooDeep { position, .. } => *position,
        }
    }

    /// True for malformed input, false for errors in well-formed input.
    pub fn is_syntax_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::InvalidLiteral | ErrorKind::UnmatchedParenthesis | ErrorKind::TrailingInput
        )
    }

    pub(crate) fn from_arithmetic(err: ArithmeticError, position: usize) -> Self {
        match err {
            ArithmeticError::DivisionByZero => ParseError::DivisionByZero { position },
            ArithmeticError::Overflow { op } => ParseError::Overflow { op, position },
        }
    }
}

/// Result of one grammar procedure: the value and the subtree
#[derive(Debug)]
pub(crate) struct Parsed {
    pub(crate) value: i64,
    pub(crate) node: ExprNode,
}

/// Recursive descent parser and evaluator for one line of input
pub struct Parser {
    pub(crate) cursor: Cursor,
    pub(crate) max_depth: usize,
    /// Positions of the `(` currently open
    pub(crate) open_parens: Vec<usize>,
}

impl Parser {
    pub fn new(input: &str) -> Self {
        Self {
            cursor: Cursor::new(input),
            max_depth: DEFAULT_MAX_DEPTH,
            open_parens: Vec::new(),
        }
    }

    /// Bound parenthesis nesting; clamped to at least 1.
    ///
    /// Operator chains are folded in a loop and never count against it, so
    /// `1+1+...+1` parses at any length.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }

    /// Parse the whole input as one expression.
    ///
    /// Anything but whitespace after the expression is a
    /// [`ParseError::TrailingInput`].
    pub fn parse(mut self) -> Result<(i64, ExprNode), ParseError> {
        let parsed = match self.parse_expression() {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!("parse failed: {}", e);
                return Err(e);
            }
        };

        if let Some(found) = self.cursor.skip_whitespace_and_peek() {
            let e = ParseError::TrailingInput {
                found,
                position: self.cursor.position(),
            };
            debug!("parse failed: {}", e);
            return Err(e);
        }

        debug!("parsed {} = {}", parsed.node, parsed.value);
        Ok((parsed.value, parsed.node))
    }
}

/// Parse `input` and evaluate it, returning the value and its expression tree.
pub fn parse_and_evaluate(input: &str) -> Result<(i64, ExprNode), ParseError> {
    Parser::new(input).parse()
}
