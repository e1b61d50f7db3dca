use crate::interpreter::errors::ArithmeticError;
use crate::parser::ast::BinOp;

/// Apply `op` to two already evaluated operands.
///
/// Division truncates toward zero. A zero divisor is reported before any
/// division is attempted.
#[inline]
pub fn apply_binary(op: BinOp, lhs: i64, rhs: i64) -> Result<i64, ArithmeticError> {
    let result = match op {
        BinOp::Add => lhs.checked_add(rhs),
        BinOp::Sub => lhs.checked_sub(rhs),
        BinOp::Mul => lhs.checked_mul(rhs),
        BinOp::Div => {
            if rhs == 0 {
                return Err(ArithmeticError::DivisionByZero);
            }
            lhs.checked_div(rhs)
        }
    };
    result.ok_or(ArithmeticError::Overflow { op })
}
