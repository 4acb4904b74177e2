use std::io::Cursor;

use approx::assert_relative_eq;
use foundations::{
    calculator::{
        Layout, Operator, Outcome, calculate,
        operator::{add, div, mul, sub},
        run_session,
    },
    error::CalcError,
};
use proptest::prelude::*;

fn run(layout: Layout, input: &str) -> (Result<Outcome, CalcError>, String) {
    let mut out = Vec::new();
    let outcome = run_session(Cursor::new(input), &mut out, layout);
    (outcome, String::from_utf8(out).expect("output is utf-8"))
}

fn assert_computed(layout: Layout, input: &str, expected: f64) -> String {
    match run(layout, input) {
        (Ok(Outcome::Computed(r)), out) => {
            assert_relative_eq!(r, expected);
            out
        },
        (other, out) => panic!("Expected a result for {input:?}, got {other:?}\n{out}"),
    }
}

fn assert_rejected(layout: Layout, input: &str) -> (CalcError, String) {
    match run(layout, input) {
        (Ok(Outcome::Rejected(e)), out) => (e, out),
        (other, out) => panic!("Expected a rejection for {input:?}, got {other:?}\n{out}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_eq!(calculate(1.0, "+", 2.0).unwrap(), 3.0);
    assert_eq!(calculate(8.0, "-", 5.0).unwrap(), 3.0);
    assert_eq!(calculate(7.0, "*", 9.0).unwrap(), 63.0);
    assert_eq!(calculate(10.0, "/", 4.0).unwrap(), 2.5);
}

#[test]
fn named_functions_match_operators() {
    for (op, f) in [(Operator::Add, add as fn(f64, f64) -> f64),
                    (Operator::Sub, sub),
                    (Operator::Mul, mul),
                    (Operator::Div, div)]
    {
        assert_eq!(op.apply(12.0, 3.0).unwrap(), f(12.0, 3.0));
        assert_eq!(op.function()(12.0, 3.0), f(12.0, 3.0));
    }
}

#[test]
fn operator_symbols_round_trip() {
    for op in Operator::ALL {
        assert_eq!(op.to_string().parse::<Operator>().unwrap(), op);
        assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
    }
}

#[test]
fn division_by_zero_is_rejected() {
    assert!(matches!(calculate(1.0, "/", 0.0), Err(CalcError::DivisionByZero)));
    assert!(matches!(calculate(1.0, "/", -0.0), Err(CalcError::DivisionByZero)));
    assert!(matches!(calculate(0.0, "/", 0.0), Err(CalcError::DivisionByZero)));
}

#[test]
fn tiny_divisor_is_not_zero() {
    let r = calculate(1.0, "/", f64::MIN_POSITIVE).unwrap();
    assert!(r.is_infinite() || r > 0.0);
}

#[test]
fn unknown_operators_are_rejected() {
    for token in ["%", "^", "x", "++", ""] {
        match calculate(2.0, token, 3.0) {
            Err(CalcError::UnknownOperator { token: t }) => assert_eq!(t, token),
            other => panic!("{token:?} should be unknown, got {other:?}"),
        }
    }
}

#[test]
fn leading_char_dispatch_ignores_the_rest() {
    assert_eq!(Operator::from_leading_char("+").unwrap(), Operator::Add);
    assert_eq!(Operator::from_leading_char("/=").unwrap(), Operator::Div);
    assert!(Operator::from_leading_char("").is_err());
    assert!(Operator::from_leading_char("%+").is_err());
}

#[test]
fn error_messages() {
    assert_eq!(CalcError::DivisionByZero.to_string(), "MATH ERROR: Division By Zero");
    assert_eq!(CalcError::UnknownOperator { token: "%".into() }.to_string(),
               "UNKNOWN OPERATION %");
}

#[test]
fn operands_first_session_prints_two_decimals() {
    let out = assert_computed(Layout::OperandsFirst, "3\n4\n*\n", 12.0);

    assert!(out.starts_with("Enter First Number: Enter Second Number: "));
    assert!(out.contains("* for Multiplication\t / for Division\n+ for Addition and \t- for Subtraction\n"));
    assert!(out.ends_with("Enter Operator:  3.00 * 4.00 = 12.00\n"));
}

#[test]
fn infix_session_prints_four_decimals() {
    let out = assert_computed(Layout::Infix, "1.5 - 0.25", 1.25);

    assert_eq!(out,
               "Enter First Number: Enter Operation: Enter Second Number: \
                1.5000 - 0.2500 = 1.2500\n");
}

#[test]
fn infix_session_uses_first_character() {
    let out = assert_computed(Layout::Infix, "6 +plus 2", 8.0);
    assert!(out.ends_with("6.0000 + 2.0000 = 8.0000\n"));
}

#[test]
fn result_line_rounds_half_up_on_displayed_digits() {
    let out = assert_computed(Layout::OperandsFirst, "0.125 1 *", 0.125);
    assert!(out.ends_with(" 0.13 * 1.00 = 0.13\n"));

    let out = assert_computed(Layout::OperandsFirst, "1.005 1 *", 1.005);
    assert!(out.ends_with(" 1.01 * 1.00 = 1.01\n"));

    let out = assert_computed(Layout::Infix, "1.00005 * 1", 1.00005);
    assert!(out.ends_with("1.0001 * 1.0000 = 1.0001\n"));
}

#[test]
fn sessions_report_division_by_zero_without_result() {
    for (layout, input) in [(Layout::OperandsFirst, "5 0 /"), (Layout::Infix, "5 / 0")] {
        let (e, out) = assert_rejected(layout, input);
        assert!(matches!(e, CalcError::DivisionByZero));
        assert!(out.ends_with("MATH ERROR: Division By Zero\n"));
        assert!(!out.contains(" = "));
    }
}

#[test]
fn sessions_report_unknown_operator() {
    let (_, out) = assert_rejected(Layout::OperandsFirst, "5 2 %");
    assert!(out.ends_with("UNKNOWN OPERATION %\n"));

    let (_, out) = assert_rejected(Layout::Infix, "5 ^ 2");
    assert!(out.ends_with("UNKNOWN OPERATION ^\n"));
}

#[test]
fn malformed_number_is_a_hard_failure() {
    let (outcome, out) = run(Layout::OperandsFirst, "five 2 +");
    assert!(matches!(outcome, Err(CalcError::InvalidNumber { token }) if token == "five"));
    assert_eq!(out, "Enter First Number: ");
}

#[test]
fn early_end_of_input_is_a_hard_failure() {
    let (outcome, _) = run(Layout::Infix, "5 +");
    assert!(matches!(outcome,
                     Err(CalcError::UnexpectedEndOfInput { expected: "second number" })));
}

proptest! {
    #[test]
    fn addition_is_exact(a in any::<f64>(), b in any::<f64>()) {
        let r = calculate(a, "+", b).unwrap();
        prop_assert!(r.to_bits() == (a + b).to_bits() || (r.is_nan() && (a + b).is_nan()));
    }

    #[test]
    fn zero_divisor_never_computes(a in any::<f64>(), negative in any::<bool>()) {
        let zero = if negative { -0.0 } else { 0.0 };
        prop_assert!(matches!(Operator::Div.apply(a, zero), Err(CalcError::DivisionByZero)));
    }

    #[test]
    fn unknown_tokens_never_compute(token in "[^+*/\\-\\s][^\\s]*", a in -1e6..1e6_f64, b in -1e6..1e6_f64) {
        let is_unknown = matches!(calculate(a, &token, b), Err(CalcError::UnknownOperator { .. }));
        prop_assert!(is_unknown);
    }
}
