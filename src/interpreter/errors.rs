//! Arithmetic error types
//!
//! [`ArithmeticError`] is what applying an operator can fail with. It carries
//! no position: the parser attaches one when it folds the error into a
//! [`ParseError`](crate::parser::parse::ParseError).

use crate::parser::ast::BinOp;
use thiserror::Error;

/// Errors raised while applying a binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// The divisor evaluated to zero
    #[error("division by zero")]
    DivisionByZero,

    /// The result does not fit in an `i64`
    #[error("integer overflow in '{op}'")]
    Overflow { op: BinOp },
}
