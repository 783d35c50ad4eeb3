//! Calculation engine - binary operations with guarded edge cases.
//!
//! All arithmetic is IEEE-754 `f64`. The engine is pure: it takes a left
//! operand, an operator and the right operand's text, and returns either
//! a result or a [`CalcError`]. Nothing here touches calculator state.

pub mod format;

#[cfg(test)]
mod tests;

use crate::error::CalcError;

/// The operator waiting for a second operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatorKind {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    /// `x^y` or `x^(1/y)`, depending on the selected mode.
    PowerRoot,
}

impl OperatorKind {
    /// Glyph shown next to the left operand once the operator is chosen.
    ///
    /// Power/root has no single glyph; its label depends on the mode
    /// (see [`power_root_label`]).
    pub const fn glyph(self) -> &'static str {
        match self {
            OperatorKind::Add => "+",
            OperatorKind::Sub => "-",
            OperatorKind::Mul => "*",
            OperatorKind::Div => "/",
            OperatorKind::Mod => "%",
            OperatorKind::PowerRoot => "^",
        }
    }
}

/// Label rendered after the left operand when power/root mode is committed.
pub const fn power_root_label(root_mode: bool) -> &'static str {
    if root_mode {
        "rt"
    } else {
        "^"
    }
}

/// Result of parsing operand text.
///
/// Parsing is lenient: text that is not a number yields `0.0` with
/// `valid == false`. Callers use `value` either way; `valid` only exists
/// so the fallback is visible in logs and tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParsedOperand {
    pub value: f64,
    pub valid: bool,
}

/// Parse operand text, falling back to zero for anything unparsable
/// (empty text, a lone `.` or `-`).
pub fn parse_operand(text: &str) -> ParsedOperand {
    match text.parse::<f64>() {
        Ok(value) => ParsedOperand { value, valid: true },
        Err(_) => {
            trace!("calc: lenient parse fell back to 0");
            ParsedOperand {
                value: 0.0,
                valid: false,
            }
        }
    }
}

/// Compute `left <op> right`.
///
/// `right_text` is parsed with [`parse_operand`]. `root_mode` only matters
/// for [`OperatorKind::PowerRoot`]: `true` computes the `right`-th root of
/// `left`, `false` raises `left` to the power `right`.
pub fn evaluate(
    left: f64,
    op: OperatorKind,
    right_text: &str,
    root_mode: bool,
) -> Result<f64, CalcError> {
    let right = parse_operand(right_text).value;

    match op {
        OperatorKind::Add => Ok(left + right),
        OperatorKind::Sub => Ok(left - right),
        OperatorKind::Mul => Ok(left * right),
        OperatorKind::Div => {
            if right == 0.0 {
                return Err(CalcError::DivByZero);
            }
            Ok(left / right)
        }
        OperatorKind::Mod => {
            if right == 0.0 {
                return Err(CalcError::ModByZero);
            }
            Ok(libm::fmod(left, right))
        }
        OperatorKind::PowerRoot if root_mode => nth_root(left, right),
        // Power is unguarded: NaN/inf for exotic inputs pass through.
        OperatorKind::PowerRoot => Ok(libm::pow(left, right)),
    }
}

/// `degree`-th root of `radicand`, i.e. `radicand^(1/degree)`.
///
/// Only even degrees of negative radicands are rejected; odd and
/// fractional degrees go straight to `pow`.
fn nth_root(radicand: f64, degree: f64) -> Result<f64, CalcError> {
    if degree == 0.0 {
        return Err(CalcError::ZeroRoot);
    }
    if radicand < 0.0 && libm::fmod(degree, 2.0) == 0.0 {
        return Err(CalcError::EvenRootOfNegative);
    }
    Ok(libm::pow(radicand, 1.0 / degree))
}
