use std::collections::HashMap;

use bigint_calc::{evaluate, evaluate_with, BigInteger, ExprError, Expression, FormatError, MAX_NESTING};

#[test]
fn carries_and_borrows_across_many_digits() {
    assert_eq!(evaluate("999999999999999999999999999999 + 1").unwrap().to_string(),
               "1000000000000000000000000000000");
    assert_eq!(evaluate("1000000000000000000000000000000 - 1").unwrap().to_string(),
               "999999999999999999999999999999");
    assert_eq!(evaluate("1000 + -999").unwrap().to_string(), "1");
    assert_eq!(evaluate("-5 + 5").unwrap().to_string(), "0");
    assert_eq!(evaluate("123 * -2").unwrap().to_string(), "-246");
}

#[test]
fn powers_of_two_by_repeated_multiplication() {
    let mut expr = String::from("1");
    for _ in 0..128 {
        expr.push_str(" * 2");
    }
    assert_eq!(evaluate(&expr).unwrap().to_string(), "340282366920938463463374607431768211456");
}

#[test]
fn bindings_feed_variables() {
    let mut bindings = HashMap::new();
    bindings.insert("big".to_string(), BigInteger::parse("-18446744073709551616").unwrap());
    bindings.insert("unused".to_string(), BigInteger::one());
    let result = evaluate_with("big * big + big", &bindings).unwrap();
    assert_eq!(result.to_string(), "340282366920938463444927863358058659840");
    assert_eq!(evaluate_with("big * y", &bindings).unwrap_err(),
               ExprError::UnboundVariable("y".to_string()));
}

#[test]
fn expression_is_reusable_after_rebinding() {
    let mut expr = Expression::parse("n * (n + 1)").unwrap();
    for (n, expected) in [("0", "0"), ("9", "90"), ("-10", "90"), ("99999", "9999900000")] {
        expr.set_variable("n", n).unwrap();
        assert_eq!(expr.execute().unwrap().to_string(), expected);
    }
}

#[test]
fn errors_are_reported_not_panicked() {
    assert!(matches!(evaluate("12 / 3"), Err(ExprError::UnexpectedChar { found: '/', .. })));
    assert!(matches!(evaluate("(1"), Err(ExprError::UnexpectedEnd)));
    let err = ExprError::from(FormatError::MissingDigits);
    assert_eq!(err.to_string(), "invalid integer literal: sign character is not followed by any digit");
}

#[test]
fn long_sums_evaluate_without_recursion() {
    let expr = format!("1{}", "+1".repeat(99_999));
    assert_eq!(evaluate(&expr).unwrap().to_string(), "100000");
    let expr = format!("2{}", " * 1 - 1".repeat(50_000));
    assert_eq!(evaluate(&expr).unwrap().to_string(), "-49998");
}

#[test]
fn long_runs_of_unary_signs() {
    assert_eq!(evaluate(&format!("{}5", "-".repeat(50_000))).unwrap().to_string(), "5");
    assert_eq!(evaluate(&format!("{}5", "-".repeat(50_001))).unwrap().to_string(), "-5");
    assert_eq!(evaluate(&format!("{}5", "+-".repeat(25_001))).unwrap().to_string(), "-5");
}

#[test]
fn deep_parentheses_are_rejected() {
    let expr = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
    assert_eq!(evaluate(&expr).unwrap_err(), ExprError::NestingTooDeep { position: MAX_NESTING });
}
