//! Result formatting policy.
//!
//! A result is shown in one of four tiers:
//!
//! | Tier           | When                                           | Example      |
//! |----------------|------------------------------------------------|--------------|
//! | `Integer`      | value is integral                              | `42`         |
//! | `Scientific`   | `|r| >= 1_000_000`, or `0 < |r| < 0.001`       | `1.5e-5`     |
//! | `TwoDecimals`  | `|r| >= 1000`                                  | `1234.57`    |
//! | `FourDecimals` | everything else                                | `3.1416`     |
//!
//! Separately, every result is also kept as full-precision text so it can
//! be chained into the next calculation without losing digits.

use core::fmt::{self, Write};

use heapless::String;

use crate::config::ENTRY_CAPACITY;

/// Decimal places for a print-number instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Places {
    /// Native floating notation at full precision (scientific).
    Default,
    /// Exactly this many digits after the decimal point.
    Fixed(u8),
}

/// Display tier chosen for a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FormatTier {
    Integer,
    Scientific,
    TwoDecimals,
    FourDecimals,
}

impl FormatTier {
    /// Pick the tier for `value`. Integral values win over magnitude.
    pub fn classify(value: f64) -> Self {
        if value == libm::trunc(value) {
            FormatTier::Integer
        } else {
            magnitude_tier(value)
        }
    }

    pub const fn places(self) -> Places {
        match self {
            FormatTier::Integer => Places::Fixed(0),
            FormatTier::Scientific => Places::Default,
            FormatTier::TwoDecimals => Places::Fixed(2),
            FormatTier::FourDecimals => Places::Fixed(4),
        }
    }
}

/// Tier by magnitude alone, ignoring whether the value is integral.
pub fn magnitude_tier(value: f64) -> FormatTier {
    let magnitude = libm::fabs(value);
    if magnitude >= 1_000_000.0 || (magnitude < 0.001 && value != 0.0) {
        FormatTier::Scientific
    } else if magnitude >= 1000.0 {
        FormatTier::TwoDecimals
    } else {
        FormatTier::FourDecimals
    }
}

/// Write `value` with the given precision.
pub fn write_number<W: Write>(out: &mut W, value: f64, places: Places) -> fmt::Result {
    match places {
        Places::Default => write!(out, "{value:e}"),
        // `-0` reads oddly on a calculator.
        Places::Fixed(0) if value == 0.0 => out.write_str("0"),
        Places::Fixed(n) => write!(out, "{value:.prec$}", prec = n as usize),
    }
}

/// Full-precision text for chaining a result into the next operand.
///
/// Uses the shortest round-trip representation; switches to exponent
/// form when the plain digits would leave no room for a sign toggle
/// (e.g. `1e300`).
pub fn full_precision_text(value: f64) -> String<ENTRY_CAPACITY> {
    let mut text = String::new();
    if write!(text, "{value}").is_err() || text.len() > ENTRY_CAPACITY - 1 {
        text.clear();
        // Exponent form of an f64 is at most 24 characters.
        let _ = write!(text, "{value:e}");
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(value: f64) -> String<32> {
        let mut out = String::new();
        write_number(&mut out, value, FormatTier::classify(value).places()).unwrap();
        out
    }

    #[test]
    fn integral_values_use_integer_tier() {
        assert_eq!(FormatTier::classify(8.0), FormatTier::Integer);
        assert_eq!(FormatTier::classify(-42.0), FormatTier::Integer);
        assert_eq!(FormatTier::classify(0.0), FormatTier::Integer);
        assert_eq!(render(8.0).as_str(), "8");
        assert_eq!(render(-42.0).as_str(), "-42");
        assert_eq!(render(-0.0).as_str(), "0");
    }

    #[test]
    fn magnitude_tier_boundaries() {
        assert_eq!(magnitude_tier(999.9999), FormatTier::FourDecimals);
        assert_eq!(magnitude_tier(1000.0), FormatTier::TwoDecimals);
        assert_eq!(magnitude_tier(999_999.99), FormatTier::TwoDecimals);
        assert_eq!(magnitude_tier(1_000_000.0), FormatTier::Scientific);
        assert_eq!(magnitude_tier(0.001), FormatTier::FourDecimals);
        assert_eq!(magnitude_tier(0.000_999), FormatTier::Scientific);
        assert_eq!(magnitude_tier(-0.000_5), FormatTier::Scientific);
        assert_eq!(magnitude_tier(0.0), FormatTier::FourDecimals);
    }

    #[test]
    fn fractional_values_follow_magnitude() {
        assert_eq!(FormatTier::classify(999.9999), FormatTier::FourDecimals);
        assert_eq!(FormatTier::classify(1000.5), FormatTier::TwoDecimals);
        assert_eq!(FormatTier::classify(1_000_000.5), FormatTier::Scientific);
        assert_eq!(FormatTier::classify(0.0005), FormatTier::Scientific);
    }

    #[test]
    fn every_integral_value_uses_integer_tier() {
        assert_eq!(FormatTier::classify(1e20), FormatTier::Integer);
        assert_eq!(FormatTier::classify(-2_147_483_648.0), FormatTier::Integer);
        assert_eq!(FormatTier::classify(4_294_967_296.0), FormatTier::Integer);
        assert_eq!(render(-2_147_483_648.0).as_str(), "-2147483648");
        assert_eq!(render(1e20).as_str(), "100000000000000000000");
    }

    #[test]
    fn fixed_places_render() {
        assert_eq!(render(2.5).as_str(), "2.5000");
        assert_eq!(render(1234.5678).as_str(), "1234.57");
        assert_eq!(render(-0.125).as_str(), "-0.1250");
        assert_eq!(render(0.0005).as_str(), "5e-4");
    }

    #[test]
    fn full_precision_text_keeps_all_digits() {
        assert_eq!(full_precision_text(8.0).as_str(), "8");
        assert_eq!(full_precision_text(0.1 + 0.2).as_str(), "0.30000000000000004");
        assert_eq!(full_precision_text(-2.5).as_str(), "-2.5");
    }

    #[test]
    fn full_precision_text_leaves_room_for_a_sign() {
        // Shortest form is exactly 32 characters.
        let value = 1.0 / 70_000_000_000_000.0;
        let text = full_precision_text(value);
        assert!(text.len() < ENTRY_CAPACITY);
        assert!(text.contains('e'));
        assert_eq!(text.parse::<f64>().unwrap(), value);
    }

    #[test]
    fn full_precision_text_switches_to_exponent_when_too_long() {
        let text = full_precision_text(1e300);
        assert_eq!(text.as_str(), "1e300");
        assert_eq!(text.parse::<f64>().unwrap(), 1e300);
    }
}
