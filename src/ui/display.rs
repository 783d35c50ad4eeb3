//! SSD1306 OLED display wrapper.
//!
//! The 128×64 panel stands in for a 16×2 character LCD: each [`TextGrid`]
//! row is drawn with an 8-pixel-wide font, so 16 columns fill the width.

use embedded_graphics::mono_font::ascii::FONT_8X13;
use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

use super::surface::TextGrid;
use crate::config::LCD_ROWS;
use crate::error::Error;

/// Top edge of each character row (pixels). Rows sit in the upper and
/// lower half of the panel.
const ROW_TOP: [i32; LCD_ROWS] = [10, 42];

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Result<Display<I2C>, Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init().map_err(|_| Error::Display)?;
    display.clear_buffer();
    display.flush().map_err(|_| Error::Display)?;
    Ok(display)
}

fn text_style() -> embedded_graphics::mono_font::MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_8X13)
        .text_color(BinaryColor::On)
        .build()
}

/// Redraw the panel from the character grid.
pub fn draw_grid<I2C>(display: &mut Display<I2C>, grid: &TextGrid) -> Result<(), Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    for (row, top) in ROW_TOP.iter().enumerate() {
        let line = grid.trimmed_line(row);
        if line.is_empty() {
            continue;
        }
        let _ = Text::with_baseline(line, Point::new(0, *top), text_style(), Baseline::Top)
            .draw(display);
    }

    display.flush().map_err(|_| Error::Display)
}

/// Switch the panel on or off without touching its contents.
pub fn set_power<I2C>(display: &mut Display<I2C>, on: bool) -> Result<(), Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    display.set_display_on(on).map_err(|_| Error::Display)
}
