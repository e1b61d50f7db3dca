//! Grammar procedures
//!
//! ```text
//! expression := term { ('+' | '-') term }
//! term       := factor { ('*' | '/') factor }
//! factor     := '(' expression ')' | digit
//! digit      := '0'..'9'
//! ```
//!
//! `expression` and `term` accumulate left to right, so chains of operators at
//! the same precedence are left-associative: `9-3-2` is `(9-3)-2`. The only
//! recursion is `factor -> expression` for parenthesized groups.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::interpreter::ops::apply_binary;
use crate::parser::ast::{BinOp, ExprNode};
use crate::parser::parse::{ParseError, Parsed, Parser};
use log::trace;

impl Parser {
    /// expression := term { ('+' | '-') term }
    pub(crate) fn parse_expression(&mut self) -> Result<Parsed, ParseError> {
        trace!("expression at column {}", self.cursor.position() + 1);
        let mut acc = self.parse_term()?;

        while let Some((op, position)) = self.match_operator([BinOp::Add, BinOp::Sub]) {
            let rhs = self.parse_term()?;
            acc = Self::fold(acc, op, position, rhs)?;
        }

        Ok(acc)
    }

    /// term := factor { ('*' | '/') factor }
    fn parse_term(&mut self) -> Result<Parsed, ParseError> {
        trace!("term at column {}", self.cursor.position() + 1);
        let mut acc = self.parse_factor()?;

        while let Some((op, position)) = self.match_operator([BinOp::Mul, BinOp::Div]) {
            // The divisor is parsed exactly once and checked for zero in `fold`
            let rhs = self.parse_factor()?;
            acc = Self::fold(acc, op, position, rhs)?;
        }

        Ok(acc)
    }

    /// factor := '(' expression ')' | digit
    ///
    /// Adds no node of its own: a parenthesized group is the subtree of the
    /// inner expression.
    fn parse_factor(&mut self) -> Result<Parsed, ParseError> {
        self.cursor.skip_whitespace_and_peek();
        let open = self.cursor.position();

        if !self.cursor.try_consume('(') {
            return self.parse_digit();
        }

        trace!("group opened at column {}", open + 1);
        if self.open_parens.len() >= self.max_depth {
            return Err(ParseError::TooDeep {
                limit: self.max_depth,
                position: open,
            });
        }
        self.open_parens.push(open);

        let inner = self.parse_expression()?;

        if !self.cursor.try_consume(')') {
            return Err(ParseError::UnmatchedParenthesis {
                open,
                position: self.cursor.position(),
            });
        }
        self.open_parens.pop();

        Ok(inner)
    }

    /// digit := '0'..'9'
    fn parse_digit(&mut self) -> Result<Parsed, ParseError> {
        let next = self.cursor.skip_whitespace_and_peek();
        let position = self.cursor.position();

        match next.and_then(|ch| ch.to_digit(10).map(|d| (ch, d))) {
            Some((ch, digit)) => {
                self.cursor.advance();
                trace!("literal {} at column {}", ch, position + 1);
                Ok(Parsed {
                    value: i64::from(digit),
                    node: ExprNode::leaf(digit as u8),
                })
            }
            None => match (next, self.open_parens.last()) {
                // Input ran out inside a group: the group is what's broken
                (None, Some(&open)) => Err(ParseError::UnmatchedParenthesis { open, position }),
                _ => Err(ParseError::InvalidLiteral {
                    found: next,
                    position,
                }),
            },
        }
    }

    /// Consume the next operator if it is one of `ops`, returning it with its position.
    fn match_operator(&mut self, ops: [BinOp; 2]) -> Option<(BinOp, usize)> {
        self.cursor.skip_whitespace_and_peek();
        let position = self.cursor.position();
        ops.into_iter()
            .find(|op| self.cursor.try_consume(op.symbol()))
            .map(|op| (op, position))
    }

    /// Fold `rhs` into the running `lhs` as `lhs op rhs`, both value and tree.
    fn fold(
        lhs: Parsed,
        op: BinOp,
        position: usize,
        rhs: Parsed,
    ) -> Result<Parsed, ParseError> {
        let value = apply_binary(op, lhs.value, rhs.value)
            .map_err(|err| ParseError::from_arithmetic(err, position))?;

        Ok(Parsed {
            value,
            node: ExprNode::binary(op, lhs.node, rhs.node),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::interpreter::eval::evaluate;
    use crate::parser::ast::{BinOp, ExprNode};
    use crate::parser::parse::{parse_and_evaluate, ErrorKind, ParseError, Parser};
    use crate::tree::height;

    fn value_of(input: &str) -> i64 {
        parse_and_evaluate(input).unwrap().0
    }

    fn kind_of(input: &str) -> ErrorKind {
        parse_and_evaluate(input).unwrap_err().kind()
    }

    #[test]
    fn test_precedence() {
        assert_eq!(value_of("2+3*4"), 14);
        assert_eq!(value_of("(2+3)*4"), 20);
        assert_eq!(value_of("8-6/2"), 5);
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(value_of("9-3-2"), 4);
        assert_eq!(value_of("8/4/2"), 1);
        assert_eq!(value_of("1-2-3"), -4);
        assert_eq!(value_of("2*3/4"), 1);
    }

    #[test]
    fn test_term_tree_shape() {
        let (_, tree) = parse_and_evaluate("8/4/2").unwrap();
        assert_eq!(
            tree,
            ExprNode::binary(
                BinOp::Div,
                ExprNode::binary(BinOp::Div, ExprNode::leaf(8), ExprNode::leaf(4)),
                ExprNode::leaf(2),
            )
        );
    }

    #[test]
    fn test_parentheses_add_no_node() {
        let (_, grouped) = parse_and_evaluate("((((1))))").unwrap();
        assert_eq!(grouped, ExprNode::leaf(1));

        let (_, tree) = parse_and_evaluate("(1+2)").unwrap();
        let (_, bare) = parse_and_evaluate("1+2").unwrap();
        assert_eq!(tree, bare);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(kind_of("5/0"), ErrorKind::DivisionByZero);
        assert_eq!(
            parse_and_evaluate("(1+2)/(3-3)").unwrap_err(),
            ParseError::DivisionByZero { position: 5 }
        );
        // Zero as a dividend is fine
        assert_eq!(value_of("0/5"), 0);
    }

    #[test]
    fn test_division_by_zero_wins_over_later_syntax_errors() {
        assert_eq!(kind_of("1/0+x"), ErrorKind::DivisionByZero);
    }

    #[test]
    fn test_malformed_input() {
        assert_eq!(kind_of("("), ErrorKind::UnmatchedParenthesis);
        assert_eq!(kind_of("(1+"), ErrorKind::UnmatchedParenthesis);
        assert_eq!(kind_of("(1"), ErrorKind::UnmatchedParenthesis);
        assert_eq!(kind_of("1+"), ErrorKind::InvalidLiteral);
        assert_eq!(kind_of("()"), ErrorKind::InvalidLiteral);
        assert_eq!(kind_of("12"), ErrorKind::TrailingInput);
        assert_eq!(kind_of("1 2"), ErrorKind::TrailingInput);
        assert_eq!(kind_of("1)"), ErrorKind::TrailingInput);
        assert_eq!(kind_of("-1"), ErrorKind::InvalidLiteral);
        assert_eq!(kind_of("1++2"), ErrorKind::InvalidLiteral);
    }

    #[test]
    fn test_unmatched_parenthesis_reports_innermost_group() {
        assert_eq!(
            parse_and_evaluate("(1*(2").unwrap_err(),
            ParseError::UnmatchedParenthesis {
                open: 3,
                position: 5
            }
        );
    }

    #[test]
    fn test_whitespace_everywhere() {
        assert_eq!(
            parse_and_evaluate(" ( 1 +  2 ) * 3 ").unwrap(),
            parse_and_evaluate("(1+2)*3").unwrap()
        );
    }

    #[test]
    fn test_nesting_limit() {
        let input = format!("{}1{}", "(".repeat(5), ")".repeat(5));
        assert_eq!(Parser::new(&input).with_max_depth(5).parse().unwrap().0, 1);

        let err = Parser::new(&input).with_max_depth(4).parse().unwrap_err();
        assert_eq!(
            err,
            ParseError::TooDeep {
                limit: 4,
                position: 4
            }
        );
    }

    #[test]
    fn test_long_chains_ignore_nesting_limit() {
        let input = vec!["1"; 100_000].join("+");
        let (value, tree) = Parser::new(&input).with_max_depth(1).parse().unwrap();
        assert_eq!(value, 100_000);
        assert_eq!(evaluate(&tree), Ok(value));
        assert_eq!(height(Some(&tree)), 100_000);
        drop(tree);

        // 7-7+7-7+...+7 inside one group
        let input = format!("({})", vec!["7"; 5_001].join("-7+"));
        let (value, tree) = Parser::new(&input).with_max_depth(1).parse().unwrap();
        assert_eq!(value, 7);
        assert_eq!(evaluate(&tree), Ok(7));
        assert_eq!(height(Some(&tree)), 10_001);
    }

    #[test]
    fn test_overflow_is_reported() {
        let input = vec!["9"; 25].join("*");
        let err = parse_and_evaluate(&input).unwrap_err();
        assert!(matches!(err, ParseError::Overflow { op: BinOp::Mul, .. }));
    }
}
