// Integration tests for the expression evaluator

use exprtree::config::Settings;
use exprtree::report::{error_lines, success_lines};
use exprtree::tree::{height, matrix_lines, vertical_lines, TreeLayout};
use exprtree::{parse_and_evaluate, BinOp, ErrorKind, ExprNode, ParseError, Parser};
use pretty_assertions::assert_eq;

#[test]
fn test_division_by_zero_yields_no_value() {
    assert_eq!(
        parse_and_evaluate("5/0"),
        Err(ParseError::DivisionByZero { position: 1 })
    );
    assert_eq!(
        parse_and_evaluate("(1+2)/(3-3)").unwrap_err().kind(),
        ErrorKind::DivisionByZero
    );
    assert_eq!(
        parse_and_evaluate("9*(4/(2-2))+1").unwrap_err().kind(),
        ErrorKind::DivisionByZero
    );
}

#[test]
fn test_malformed_input_kinds() {
    let cases = [
        ("(", ErrorKind::UnmatchedParenthesis),
        ("((1)", ErrorKind::UnmatchedParenthesis),
        ("1+", ErrorKind::InvalidLiteral),
        ("a", ErrorKind::InvalidLiteral),
        ("1 2", ErrorKind::TrailingInput),
        ("(1))", ErrorKind::TrailingInput),
    ];

    for (input, kind) in cases {
        let err = parse_and_evaluate(input).unwrap_err();
        assert_eq!(err.kind(), kind, "input: {:?}", input);
        assert!(err.is_syntax_error());
    }
}

#[test]
fn test_whitespace_insensitivity() {
    assert_eq!(
        parse_and_evaluate("1 +  2").unwrap(),
        parse_and_evaluate("1+2").unwrap()
    );
    assert_eq!(
        parse_and_evaluate("\t( 8 / 4 )\t* 2 ").unwrap(),
        parse_and_evaluate("(8/4)*2").unwrap()
    );
}

#[test]
fn test_tree_structure() {
    let (value, tree) = parse_and_evaluate("(1+2)*3-4").unwrap();
    assert_eq!(value, 5);
    assert_eq!(
        tree,
        ExprNode::binary(
            BinOp::Sub,
            ExprNode::binary(
                BinOp::Mul,
                ExprNode::binary(BinOp::Add, ExprNode::leaf(1), ExprNode::leaf(2)),
                ExprNode::leaf(3),
            ),
            ExprNode::leaf(4),
        )
    );
    assert_eq!(height(Some(&tree)), 4);
    assert_eq!(tree.to_string(), "(((1 + 2) * 3) - 4)");
}

#[test]
fn test_configured_depth_limit() {
    let input = "((((((1))))))";
    assert!(Parser::new(input).with_max_depth(6).parse().is_ok());
    assert_eq!(
        Parser::new(input).with_max_depth(3).parse().unwrap_err().kind(),
        ErrorKind::TooDeep
    );

    let settings = Settings {
        max_depth: 3,
        ..Settings::default()
    };
    assert!(settings.parser(input).parse().is_err());
}

#[test]
fn test_long_flat_sum_is_not_too_deep() {
    let input = vec!["1"; 300].join("+");
    let (value, tree) = parse_and_evaluate(&input).unwrap();
    assert_eq!(value, 300);
    assert_eq!(height(Some(&tree)), 300);

    let settings = Settings::default();
    let lines = success_lines(&input, value, &tree, &settings);
    assert!(lines.iter().any(|line| line.ends_with("= 300")));

    // Far longer than the nesting limit, printed and dropped without recursing
    let input = vec!["1"; 300_000].join("+");
    let (value, tree) = parse_and_evaluate(&input).unwrap();
    assert_eq!(value, 300_000);
    assert_eq!(vertical_lines(&tree, 1).count(), 599_999);
    assert!(tree.to_string().starts_with("(((((1 + 1)"));
}

#[test]
fn test_printing_is_idempotent() {
    let (_, tree) = parse_and_evaluate("(1+2)*(3-4)/5").unwrap();

    let first: Vec<String> = vertical_lines(&tree, 4).collect();
    let second: Vec<String> = vertical_lines(&tree, 4).collect();
    assert_eq!(first, second);

    assert_eq!(matrix_lines(&tree).unwrap(), matrix_lines(&tree).unwrap());
}

#[test]
fn test_full_report() {
    let input = "(2+3)*4";
    let (value, tree) = parse_and_evaluate(input).unwrap();
    let settings = Settings {
        layout: TreeLayout::Matrix,
        ..Settings::default()
    };

    assert_eq!(
        success_lines(input, value, &tree, &settings),
        vec![
            "Expression result: (2+3)*4 = 20",
            "",
            "Expression tree:",
            "      *",
            "  +       4",
            "1   2",
        ]
    );
}

#[test]
fn test_error_report_points_at_divisor_operator() {
    let input = "(1+2)/(3-3)";
    let err = parse_and_evaluate(input).unwrap_err();
    assert_eq!(
        error_lines(input, &err),
        vec![
            "error: division by zero at column 6",
            "  (1+2)/(3-3)",
            "       ^",
        ]
    );
}
