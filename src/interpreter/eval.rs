use crate::interpreter::errors::ArithmeticError;
use crate::interpreter::ops::apply_binary;
use crate::parser::ast::{BinOp, ExprNode};

enum Step<'a> {
    Visit(&'a ExprNode),
    Apply(BinOp),
}

/// Evaluate a tree with a post-order walk.
///
/// The parser already computes the value while it builds the tree; this is
/// the separate pass over a finished tree and always agrees with it. Left
/// operands are evaluated before right ones, so the first failing operator
/// in reading order is the one reported.
pub fn evaluate(node: &ExprNode) -> Result<i64, ArithmeticError> {
    let mut steps = vec![Step::Visit(node)];
    let mut values: Vec<i64> = Vec::new();

    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(ExprNode::Leaf(digit)) => values.push(i64::from(*digit)),
            Step::Visit(ExprNode::BinaryOp { op, left, right }) => {
                steps.push(Step::Apply(*op));
                steps.push(Step::Visit(&**right));
                steps.push(Step::Visit(&**left));
            }
            Step::Apply(op) => match (values.pop(), values.pop()) {
                (Some(rhs), Some(lhs)) => values.push(apply_binary(op, lhs, rhs)?),
                _ => unreachable!("operands are evaluated before their operator"),
            },
        }
    }

    match values.pop() {
        Some(value) => Ok(value),
        None => unreachable!("a tree always yields one value"),
    }
}
