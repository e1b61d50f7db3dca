use exprtree::interpreter::eval::evaluate;
use exprtree::parse_and_evaluate;

fn value_of(input: &str) -> i64 {
    parse_and_evaluate(input).expect("Parsing failed").0
}

#[test]
fn test_every_single_digit() {
    for d in 0..=9 {
        assert_eq!(value_of(&d.to_string()), d);
    }
}

#[test]
fn test_precedence() {
    assert_eq!(value_of("2+3*4"), 14);
    assert_eq!(value_of("(2+3)*4"), 20);
    assert_eq!(value_of("2*3+4*5"), 26);
    assert_eq!(value_of("9-8/4"), 7);
}

#[test]
fn test_left_associativity() {
    assert_eq!(value_of("9-3-2"), 4);
    assert_eq!(value_of("8/4/2"), 1);
    assert_eq!(value_of("9-3+2"), 8);
    assert_eq!(value_of("8/2*4"), 16);
}

#[test]
fn test_integer_division_truncates() {
    assert_eq!(value_of("7/2"), 3);
    assert_eq!(value_of("(1-8)/2"), -3);
    assert_eq!(value_of("1/2*9"), 0);
}

#[test]
fn test_negative_results() {
    assert_eq!(value_of("1-9"), -8);
    assert_eq!(value_of("(1-9)*(1-9)"), 64);
}

#[test]
fn test_deep_nesting() {
    assert_eq!(value_of("((((1))))"), 1);
    let nested = format!("{}7{}", "(".repeat(100), ")".repeat(100));
    assert_eq!(value_of(&nested), 7);
}

#[test]
fn test_post_order_evaluation_agrees() {
    for input in ["2+3*4", "(2+3)*4", "9-3-2", "8/4/2", "((9-1)/(2+2))*3-7"] {
        let (value, tree) = parse_and_evaluate(input).expect("Parsing failed");
        assert_eq!(evaluate(&tree), Ok(value), "input: {}", input);
    }
}
