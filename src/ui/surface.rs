//! Character surface - the output side of the calculator.
//!
//! [`TextSurface`] is the minimal contract a 16×2 character display
//! offers: clear, position the cursor, print. [`apply`] plays a render
//! list against it. [`TextGrid`] is an in-memory surface; on target it is
//! the frame buffer the OLED task draws from, and in tests it is the
//! display double.

use core::convert::Infallible;

use heapless::String;

use super::RenderOp;
use crate::calc::format::write_number;
use crate::config::{LCD_COLS, LCD_ROWS};

const BLANK_LINE: &str = "                ";

/// A fixed-width text display addressable by column and row.
pub trait TextSurface {
    type Error;

    /// Blank everything and move the cursor to (0, 0).
    fn clear(&mut self) -> Result<(), Self::Error>;

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), Self::Error>;

    /// Print at the cursor and advance it.
    fn print(&mut self, text: &str) -> Result<(), Self::Error>;
}

/// Execute render instructions in order.
pub fn apply<S: TextSurface>(surface: &mut S, ops: &[RenderOp]) -> Result<(), S::Error> {
    for op in ops {
        match op {
            RenderOp::ClearAll => surface.clear()?,
            RenderOp::ClearLine(row) => {
                surface.set_cursor(0, *row)?;
                surface.print(BLANK_LINE)?;
                surface.set_cursor(0, *row)?;
            }
            RenderOp::SetCursor { col, row } => surface.set_cursor(*col, *row)?,
            RenderOp::PrintText(text) => surface.print(text)?,
            RenderOp::PrintNumber { value, places } => {
                let mut text: String<32> = String::new();
                let _ = write_number(&mut Clipped(&mut text), *value, *places);
                surface.print(&text)?;
            }
        }
    }
    Ok(())
}

/// Keeps the leading characters that fit; the row clips at 16 anyway.
struct Clipped<'a, const N: usize>(&'a mut String<N>);

impl<const N: usize> core::fmt::Write for Clipped<'_, N> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// In-memory 16×2 character grid.
///
/// Writes past the last column are dropped; the cursor keeps counting so
/// a later `set_cursor` behaves like the real display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextGrid {
    cells: [[u8; LCD_COLS]; LCD_ROWS],
    col: usize,
    row: usize,
    dirty: bool,
}

impl Default for TextGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl TextGrid {
    pub const fn new() -> Self {
        Self {
            cells: [[b' '; LCD_COLS]; LCD_ROWS],
            col: 0,
            row: 0,
            dirty: true,
        }
    }

    /// Row contents, padded with spaces to `LCD_COLS`.
    pub fn line(&self, row: usize) -> &str {
        self.cells
            .get(row)
            .and_then(|cells| core::str::from_utf8(cells).ok())
            .unwrap_or("")
    }

    /// Row contents without trailing padding.
    pub fn trimmed_line(&self, row: usize) -> &str {
        self.line(row).trim_end()
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.col, self.row)
    }

    /// `true` if anything changed since the last [`take_dirty`](Self::take_dirty).
    pub fn take_dirty(&mut self) -> bool {
        core::mem::replace(&mut self.dirty, false)
    }
}

impl TextSurface for TextGrid {
    type Error = Infallible;

    fn clear(&mut self) -> Result<(), Infallible> {
        self.cells = [[b' '; LCD_COLS]; LCD_ROWS];
        self.col = 0;
        self.row = 0;
        self.dirty = true;
        Ok(())
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), Infallible> {
        self.col = col as usize;
        self.row = (row as usize).min(LCD_ROWS - 1);
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<(), Infallible> {
        for c in text.chars() {
            if self.col < LCD_COLS {
                // The display's character ROM is ASCII only.
                let byte = if c.is_ascii() && !c.is_ascii_control() {
                    c as u8
                } else {
                    b'?'
                };
                self.cells[self.row][self.col] = byte;
                self.dirty = true;
            }
            self.col = self.col.saturating_add(1);
        }
        Ok(())
    }
}
