//! Keypad subsystem - key alphabet, matrix layout and debouncing.
//!
//! The physical keypad is a 5×4 matrix:
//!
//! ```text
//!        col0  col1  col2  col3
//! row0    A     B     C     D
//! row1    1     2     3     +
//! row2    4     5     6     -
//! row3    7     8     9     *
//! row4    .     0     =     /
//! ```
//!
//! `A` enters power/root, `B` is modulo, `C` clears and `D` toggles the
//! sign (or the power/root mode while it is being chosen).

pub mod debounce;
#[cfg(feature = "embedded")]
pub mod matrix;

use crate::calc::OperatorKind;
use crate::config::{KEYPAD_COLS, KEYPAD_ROWS};

/// A single debounced key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    /// `0`–`9`.
    Digit(u8),
    /// `.`
    Decimal,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `B`
    Mod,
    /// `A`
    PowerRoot,
    /// `D`
    Toggle,
    /// `C`
    Clear,
    /// `=`
    Equals,
}

impl Key {
    /// Map a keypad symbol to a key. Returns `None` outside the alphabet.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        let key = match symbol {
            '0'..='9' => Key::Digit(symbol as u8 - b'0'),
            '.' => Key::Decimal,
            '+' => Key::Add,
            '-' => Key::Sub,
            '*' => Key::Mul,
            '/' => Key::Div,
            'B' => Key::Mod,
            'A' => Key::PowerRoot,
            'D' => Key::Toggle,
            'C' => Key::Clear,
            '=' => Key::Equals,
            _ => return None,
        };
        Some(key)
    }

    pub fn symbol(self) -> char {
        match self {
            Key::Digit(d) => char::from(b'0' + d.min(9)),
            Key::Decimal => '.',
            Key::Add => '+',
            Key::Sub => '-',
            Key::Mul => '*',
            Key::Div => '/',
            Key::Mod => 'B',
            Key::PowerRoot => 'A',
            Key::Toggle => 'D',
            Key::Clear => 'C',
            Key::Equals => '=',
        }
    }

    /// The operator this key selects, if it is an operator key.
    pub fn operator(self) -> Option<OperatorKind> {
        match self {
            Key::Add => Some(OperatorKind::Add),
            Key::Sub => Some(OperatorKind::Sub),
            Key::Mul => Some(OperatorKind::Mul),
            Key::Div => Some(OperatorKind::Div),
            Key::Mod => Some(OperatorKind::Mod),
            Key::PowerRoot => Some(OperatorKind::PowerRoot),
            _ => None,
        }
    }
}

/// Physical layout, indexed `[row][col]`.
pub const KEYMAP: [[Key; KEYPAD_COLS]; KEYPAD_ROWS] = [
    [Key::PowerRoot, Key::Mod, Key::Clear, Key::Toggle],
    [Key::Digit(1), Key::Digit(2), Key::Digit(3), Key::Add],
    [Key::Digit(4), Key::Digit(5), Key::Digit(6), Key::Sub],
    [Key::Digit(7), Key::Digit(8), Key::Digit(9), Key::Mul],
    [Key::Decimal, Key::Digit(0), Key::Equals, Key::Div],
];

/// Key at a matrix position, or `None` if the position is off the grid.
pub fn key_at(row: usize, col: usize) -> Option<Key> {
    KEYMAP.get(row).and_then(|cols| cols.get(col)).copied()
}

/// Iterate over every key of a symbol string, skipping symbols outside
/// the alphabet. Handy for replaying key sequences.
pub fn keys(symbols: &str) -> impl Iterator<Item = Key> + '_ {
    symbols.chars().filter_map(Key::from_symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_symbol_round_trips() {
        for symbol in "0123456789.+-*/=ABCD".chars() {
            let key = Key::from_symbol(symbol).unwrap();
            assert_eq!(key.symbol(), symbol);
        }
    }

    #[test]
    fn unknown_symbols_are_rejected() {
        for symbol in ['E', '#', ' ', 'a', '%'] {
            assert!(Key::from_symbol(symbol).is_none());
        }
    }

    #[test]
    fn operator_keys() {
        assert_eq!(Key::Mod.operator(), Some(OperatorKind::Mod));
        assert_eq!(Key::PowerRoot.operator(), Some(OperatorKind::PowerRoot));
        assert_eq!(Key::Equals.operator(), None);
        assert_eq!(Key::Toggle.operator(), None);
        assert_eq!(Key::Digit(3).operator(), None);
    }

    #[test]
    fn keymap_covers_the_whole_alphabet_once() {
        let mut seen = std::vec::Vec::new();
        for row in 0..KEYPAD_ROWS {
            for col in 0..KEYPAD_COLS {
                let symbol = key_at(row, col).unwrap().symbol();
                assert!(!seen.contains(&symbol), "duplicate {symbol}");
                seen.push(symbol);
            }
        }
        assert_eq!(seen.len(), 20);
    }

    #[test]
    fn key_at_out_of_range() {
        assert!(key_at(KEYPAD_ROWS, 0).is_none());
        assert!(key_at(0, KEYPAD_COLS).is_none());
    }

    #[test]
    fn keys_skips_spaces() {
        let collected: std::vec::Vec<Key> = keys("5 + 3 =").collect();
        assert_eq!(
            collected,
            [Key::Digit(5), Key::Add, Key::Digit(3), Key::Equals]
        );
    }
}
