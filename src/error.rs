//! Error types for keypad-calc.
//!
//! We avoid `alloc` - all error variants carry no data, so they are
//! `Copy` and cheap to pass around on target.
//! Implements `defmt::Format` (behind the `defmt` feature) for on-target logging.

use core::fmt;

/// Failures detected by the calculation engine.
///
/// Every variant is terminal for the current calculation: the message is
/// shown for a fixed interval and the calculator resets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalcError {
    /// Division with a zero divisor.
    DivByZero,
    /// Modulo with a zero divisor.
    ModByZero,
    /// Root of degree zero.
    ZeroRoot,
    /// Even-degree root of a negative radicand.
    EvenRootOfNegative,
}

impl CalcError {
    /// Display text for this error, one entry per display row.
    pub const fn message_lines(self) -> (&'static str, Option<&'static str>) {
        match self {
            CalcError::DivByZero => ("Error: Div by 0", None),
            CalcError::ModByZero => ("Error: Mod by 0", None),
            CalcError::ZeroRoot => ("Error: 0th root", None),
            CalcError::EvenRootOfNegative => ("Error: Even root", Some("of negative")),
        }
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message_lines() {
            (first, Some(second)) => write!(f, "{first} {second}"),
            (first, None) => f.write_str(first),
        }
    }
}

/// Peripheral-level failures on target.
///
/// These never touch calculator state; the affected task logs them and
/// carries on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// I²C transaction to the display failed.
    Display,
}
