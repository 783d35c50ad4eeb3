//! Unit tests for the calculation engine.
//!
//! These run on the host and cover the operator dispatch, the zero and
//! negative-radicand guards, and the lenient operand parse.

use super::{evaluate, parse_operand, OperatorKind};
use crate::error::CalcError;

// ═══════════════════════════════════════════════════════════════════════════
// Basic Arithmetic
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn add_sub_mul() {
    assert_eq!(evaluate(5.0, OperatorKind::Add, "3", false), Ok(8.0));
    assert_eq!(evaluate(5.0, OperatorKind::Sub, "7.5", false), Ok(-2.5));
    assert_eq!(evaluate(-4.0, OperatorKind::Mul, "2.5", false), Ok(-10.0));
}

#[test]
fn root_mode_flag_is_ignored_outside_power_root() {
    assert_eq!(evaluate(5.0, OperatorKind::Add, "3", true), Ok(8.0));
    assert_eq!(evaluate(9.0, OperatorKind::Div, "3", true), Ok(3.0));
}

#[test]
fn division() {
    assert_eq!(evaluate(9.0, OperatorKind::Div, "4", false), Ok(2.25));
    assert_eq!(evaluate(1.0, OperatorKind::Div, "-8", false), Ok(-0.125));
}

#[test]
fn division_by_zero_fails() {
    assert_eq!(
        evaluate(9.0, OperatorKind::Div, "0", false),
        Err(CalcError::DivByZero)
    );
    assert_eq!(
        evaluate(9.0, OperatorKind::Div, "-0", false),
        Err(CalcError::DivByZero)
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// Modulo
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn modulo_is_floating_remainder() {
    assert_eq!(evaluate(10.0, OperatorKind::Mod, "3", false), Ok(1.0));
    assert_eq!(evaluate(7.5, OperatorKind::Mod, "2", false), Ok(1.5));
    // fmod keeps the sign of the dividend.
    assert_eq!(evaluate(-7.0, OperatorKind::Mod, "3", false), Ok(-1.0));
}

#[test]
fn modulo_by_zero_fails() {
    assert_eq!(
        evaluate(10.0, OperatorKind::Mod, "0", false),
        Err(CalcError::ModByZero)
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// Power / Root
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn power_mode() {
    assert_eq!(evaluate(9.0, OperatorKind::PowerRoot, "2", false), Ok(81.0));
    assert_eq!(evaluate(2.0, OperatorKind::PowerRoot, "-1", false), Ok(0.5));
    assert_eq!(evaluate(5.0, OperatorKind::PowerRoot, "0", false), Ok(1.0));
}

#[test]
fn power_mode_is_unguarded() {
    let r = evaluate(-8.0, OperatorKind::PowerRoot, "0.5", false).unwrap();
    assert!(r.is_nan());
    let r = evaluate(0.0, OperatorKind::PowerRoot, "-1", false).unwrap();
    assert!(r.is_infinite());
}

#[test]
fn root_mode() {
    assert_eq!(evaluate(9.0, OperatorKind::PowerRoot, "2", true), Ok(3.0));
    assert_eq!(evaluate(16.0, OperatorKind::PowerRoot, "4", true), Ok(2.0));
}

#[test]
fn zeroth_root_fails() {
    assert_eq!(
        evaluate(9.0, OperatorKind::PowerRoot, "0", true),
        Err(CalcError::ZeroRoot)
    );
    // Empty text parses as zero.
    assert_eq!(
        evaluate(9.0, OperatorKind::PowerRoot, "", true),
        Err(CalcError::ZeroRoot)
    );
}

#[test]
fn even_root_of_negative_fails() {
    for degree in ["2", "4", "2.0", "-2", "10"] {
        assert_eq!(
            evaluate(-16.0, OperatorKind::PowerRoot, degree, true),
            Err(CalcError::EvenRootOfNegative),
            "degree {degree}"
        );
    }
}

#[test]
fn odd_or_fractional_root_of_negative_goes_to_pow() {
    for degree in ["3", "2.5", "1"] {
        let right: f64 = degree.parse().unwrap();
        let expected = libm::pow(-8.0, 1.0 / right);
        let got = evaluate(-8.0, OperatorKind::PowerRoot, degree, true)
            .expect("odd/fractional degree must not be rejected");
        assert!(
            got == expected || (got.is_nan() && expected.is_nan()),
            "degree {degree}"
        );
    }
    assert_eq!(evaluate(-8.0, OperatorKind::PowerRoot, "1", true), Ok(-8.0));
}

#[test]
fn even_root_of_positive_is_fine() {
    assert_eq!(evaluate(0.0, OperatorKind::PowerRoot, "2", true), Ok(0.0));
    assert_eq!(evaluate(25.0, OperatorKind::PowerRoot, "2", true), Ok(5.0));
}

// ═══════════════════════════════════════════════════════════════════════════
// Lenient Parsing
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn parse_valid_operands() {
    let p = parse_operand("-12.5");
    assert!(p.valid);
    assert_eq!(p.value, -12.5);
    assert_eq!(parse_operand(".5").value, 0.5);
    assert_eq!(parse_operand("7.").value, 7.0);
    assert_eq!(parse_operand("1e300").value, 1e300);
}

#[test]
fn unparsable_operands_become_zero() {
    for text in ["", ".", "-", "-."] {
        let p = parse_operand(text);
        assert!(!p.valid, "{text:?}");
        assert_eq!(p.value, 0.0);
    }
}

#[test]
fn unparsable_divisor_is_division_by_zero() {
    assert_eq!(
        evaluate(1.0, OperatorKind::Div, ".", false),
        Err(CalcError::DivByZero)
    );
}
