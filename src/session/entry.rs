//! Number entry buffer.
//!
//! Holds the operand being typed as text: digits, at most one decimal
//! point and an optional leading minus sign. Typing stops at
//! `MAX_ENTRY_LEN` characters; the storage is larger so a computed result
//! can be carried at full precision.

use heapless::String;

use crate::calc::format::full_precision_text;
use crate::calc::{parse_operand, ParsedOperand};
use crate::config::{ENTRY_CAPACITY, MAX_ENTRY_LEN};

/// Why a character was not appended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EntryReject {
    /// The buffer already holds a decimal point.
    DuplicateDecimal,
    /// `MAX_ENTRY_LEN` characters already typed.
    Full,
    /// A result in exponent form cannot take a decimal point.
    ExponentForm,
    /// Only digits and `.` can be typed.
    NotNumeric,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryBuffer {
    text: String<ENTRY_CAPACITY>,
}

impl EntryBuffer {
    pub const fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.text.len() >= MAX_ENTRY_LEN
    }

    pub fn has_decimal_point(&self) -> bool {
        self.text.contains('.')
    }

    pub fn has_exponent(&self) -> bool {
        self.text.contains('e')
    }

    /// Append a typed digit or decimal point.
    pub fn push(&mut self, c: char) -> Result<(), EntryReject> {
        if !(c.is_ascii_digit() || c == '.') {
            return Err(EntryReject::NotNumeric);
        }
        if c == '.' && self.has_decimal_point() {
            return Err(EntryReject::DuplicateDecimal);
        }
        if c == '.' && self.has_exponent() {
            return Err(EntryReject::ExponentForm);
        }
        if self.is_full() {
            return Err(EntryReject::Full);
        }
        self.text.push(c).map_err(|_| EntryReject::Full)
    }

    /// Add or strip a leading `-`.
    ///
    /// Returns `false` (and leaves the buffer alone) when it is empty or
    /// holds exactly `"0"`.
    pub fn toggle_sign(&mut self) -> bool {
        if self.text.is_empty() || self.text.as_str() == "0" {
            return false;
        }

        let mut toggled: String<ENTRY_CAPACITY> = String::new();
        let rest = match self.text.strip_prefix('-') {
            Some(rest) => rest,
            None => {
                if toggled.push('-').is_err() {
                    return false;
                }
                self.text.as_str()
            }
        };
        if toggled.push_str(rest).is_err() {
            return false;
        }
        self.text = toggled;
        true
    }

    /// Replace the contents with the full-precision text of `value`.
    pub fn set_result(&mut self, value: f64) {
        self.text = full_precision_text(value);
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Parse the contents; unparsable text reads as zero.
    pub fn parse(&self) -> ParsedOperand {
        parse_operand(self.text.as_str())
    }

    /// Owned copy of the text for a render instruction.
    pub fn snapshot(&self) -> String<ENTRY_CAPACITY> {
        self.text.clone()
    }
}
