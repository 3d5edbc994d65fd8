//! End-to-end tests for formula evaluation

use mathformula::{evaluate, evaluate_with, ErrorKind, FormulaError, Operator, Variables};
use proptest::prelude::*;

fn eval(formula: &str) -> Result<f64, FormulaError> {
    evaluate(formula, &Variables::default())
}

fn eval_kind(formula: &str, vars: &Variables) -> ErrorKind {
    evaluate(formula, vars).unwrap_err().kind()
}

/// Literal-only arithmetic follows the usual precedence rules
#[test]
fn test_literal_arithmetic() {
    assert_eq!(eval("2 + 3 * 4").unwrap(), 14.0);
    assert_eq!(eval("(2 + 3) * 4").unwrap(), 20.0);
    assert_eq!(eval("10 - 4 - 3").unwrap(), 3.0);
    assert_eq!(eval("24 / 4 / 2").unwrap(), 3.0);
    assert_eq!(eval("7 // 2 + 7 % 2").unwrap(), 4.0);
    assert_eq!(eval("2 * 3 ** 2").unwrap(), 18.0);
    assert_eq!(eval("1e3 + 0x10").unwrap(), 1016.0);
    assert_eq!(eval("0X1f - 1").unwrap(), 30.0);
    assert_eq!(eval("((1))").unwrap(), 1.0);
}

/// `**` pops on equal precedence, so it groups to the left
#[test]
fn test_power_is_left_associative() {
    assert_eq!(eval("2 ** 3 ** 2").unwrap(), 64.0);
    assert_eq!(eval("2 ** (3 ** 2)").unwrap(), 512.0);
}

#[test]
fn test_variables() {
    assert_eq!(evaluate_with("a + b", 2.0, 3.0, 0.0, 0.0).unwrap(), 5.0);
    assert_eq!(evaluate_with("a * b - c / d", 2.0, 3.0, 8.0, 4.0).unwrap(), 4.0);
    // Unused bindings default to zero
    assert_eq!(evaluate("a + b + c + d", &Variables::new(1.5)).unwrap(), 1.5);
}

#[test]
fn test_unary_negation() {
    assert_eq!(evaluate("-a", &Variables::new(5.0)).unwrap(), -5.0);
    assert_eq!(eval("3 - -2").unwrap(), 5.0);
    assert_eq!(eval("-(2 + 3)").unwrap(), -5.0);
    assert_eq!(eval("- -4").unwrap(), 4.0);
    assert_eq!(eval("2 / -2 * 3").unwrap(), -3.0);
    assert_eq!(eval("2 * -abs(3) + 1").unwrap(), -5.0);
    assert_eq!(evaluate("a - -b", &Variables::new(1.0).with_b(-1.0)).unwrap(), 0.0);
}

#[test]
fn test_functions() {
    assert_eq!(evaluate("abs(a)", &Variables::new(-7.0)).unwrap(), 7.0);
    assert_eq!(evaluate("floor(a)", &Variables::new(2.7)).unwrap(), 2.0);
    assert_eq!(evaluate("ceil(a)", &Variables::new(2.1)).unwrap(), 3.0);
    assert_eq!(evaluate("round(a)", &Variables::new(2.5)).unwrap(), 2.0);
    assert_eq!(evaluate("round(a)", &Variables::new(3.5)).unwrap(), 4.0);
    assert_eq!(eval("abs(-3) - 5").unwrap(), -2.0);
    assert_eq!(eval("floor(ceil(1.2) / 4)").unwrap(), 0.0);
}

/// The worked example: 2 + abs(-3 * 4 + 5) = 2 + 7
#[test]
fn test_worked_example() {
    let vars = Variables::new(2.0).with_b(-3.0).with_c(5.0);
    assert_eq!(evaluate("a + abs(b * 4 + c)", &vars).unwrap(), 9.0);
}

#[test]
fn test_division_by_zero() {
    let vars = Variables::new(1.0).with_b(0.0);
    assert_eq!(
        evaluate("a / b", &vars),
        Err(FormulaError::DivisionByZero(Operator::Divide))
    );
    assert_eq!(
        evaluate("a // b", &vars),
        Err(FormulaError::DivisionByZero(Operator::FloorDivide))
    );
    assert_eq!(
        evaluate("a % b", &vars),
        Err(FormulaError::DivisionByZero(Operator::Modulo))
    );
    assert_eq!(eval_kind("1 / -0.0", &vars), ErrorKind::DivisionByZero);
}

#[test]
fn test_mismatched_parentheses() {
    assert_eq!(eval("(1 + 2"), Err(FormulaError::MismatchedParentheses));
    assert_eq!(eval("1 + 2)"), Err(FormulaError::MismatchedParentheses));
}

#[test]
fn test_unsupported_function() {
    assert_eq!(
        evaluate("foo(a)", &Variables::new(1.0)),
        Err(FormulaError::UnsupportedFunction("foo".into()))
    );
    assert_eq!(
        eval("x(1)"),
        Err(FormulaError::UnsupportedFunction("x".into()))
    );
}

#[test]
fn test_error_kinds() {
    let vars = Variables::new(1.0);
    assert_eq!(eval_kind("a ^ 2", &vars), ErrorKind::InvalidCharacter);
    assert_eq!(eval_kind("x + 1", &vars), ErrorKind::UnexpectedToken);
    assert_eq!(eval_kind("1 +", &vars), ErrorKind::InsufficientOperands);
    assert_eq!(eval_kind("* 2", &vars), ErrorKind::InsufficientOperands);
    assert_eq!(eval_kind("1 2", &vars), ErrorKind::MalformedExpression);
    assert_eq!(eval_kind("", &vars), ErrorKind::MalformedExpression);
    assert_eq!(eval_kind("abs(1, 2)", &vars), ErrorKind::MalformedExpression);
}

proptest! {
    #[test]
    fn prop_sum_of_variables(a in -1e6f64..1e6, b in -1e6f64..1e6) {
        let vars = Variables::new(a).with_b(b);
        prop_assert_eq!(evaluate("a + b", &vars).unwrap(), a + b);
    }

    #[test]
    fn prop_precedence_matches_native(
        a in -1e3f64..1e3,
        b in -1e3f64..1e3,
        c in -1e3f64..1e3,
    ) {
        let vars = Variables::new(a).with_b(b).with_c(c);
        prop_assert_eq!(evaluate("a + b * c", &vars).unwrap(), a + b * c);
        prop_assert_eq!(evaluate("(a - b) * c", &vars).unwrap(), (a - b) * c);
        prop_assert_eq!(evaluate("-a * b", &vars).unwrap(), -a * b);
    }

    #[test]
    fn prop_power_groups_left(a in 1u32..5, b in 0u32..4, c in 0u32..4) {
        let formula = format!("{a} ** {b} ** {c}");
        let expected = f64::from(a).powf(f64::from(b)).powf(f64::from(c));
        prop_assert_eq!(eval(&formula).unwrap(), expected);
    }

    #[test]
    fn prop_modulo_follows_divisor_sign(a in -1000i32..1000, b in 1i32..50) {
        let vars = Variables::new(f64::from(a)).with_b(f64::from(b));
        let rem = evaluate("a % b", &vars).unwrap();
        prop_assert!((0.0..f64::from(b)).contains(&rem));
        let quot = evaluate("a // b", &vars).unwrap();
        prop_assert_eq!(quot * f64::from(b) + rem, f64::from(a));
    }
}
