//! Application-wide constants and compile-time configuration.
//!
//! Display geometry, entry limits, timing parameters and pin
//! assignments live here so they can be tuned in one place.

// Display

/// Character columns on the text surface.
pub const LCD_COLS: usize = 16;

/// Character rows on the text surface.
pub const LCD_ROWS: usize = 2;

/// Welcome banner shown at power-up, one entry per row.
pub const BANNER_LINES: [&str; LCD_ROWS] = ["Calculator", "Ready..."];

/// How long the welcome banner stays up (ms).
pub const BANNER_HOLD_MS: u64 = 2000;

/// How long an error message stays up before the calculator resets (ms).
pub const ERROR_HOLD_MS: u64 = 2000;

// Number entry

/// Maximum number of characters the user may type into one operand.
pub const MAX_ENTRY_LEN: usize = 15;

/// Storage capacity of the entry buffer.
///
/// Larger than `MAX_ENTRY_LEN` so a computed result can be carried at
/// full precision (e.g. `-1.2345678901234567e-300`) for chaining.
pub const ENTRY_CAPACITY: usize = 32;

/// Upper bound on render instructions produced by a single key.
pub const MAX_RENDER_OPS: usize = 24;

// Keypad
//
// 5 rows x 4 columns, rows driven low one at a time, columns read with
// internal pull-ups (nRF52840-DK header pins; adjust for your board):
//
//   Row 0..4  → P0.03 P0.04 P0.28 P0.29 P0.30
//   Col 0..3  → P1.01 P1.02 P1.03 P1.04
//   I²C SDA   → P0.26
//   I²C SCL   → P0.27

/// Number of keypad rows.
pub const KEYPAD_ROWS: usize = 5;

/// Number of keypad columns.
pub const KEYPAD_COLS: usize = 4;

/// Interval between matrix scans (ms).
pub const KEYPAD_SCAN_PERIOD_MS: u64 = 10;

/// Consecutive identical scans required before a press is reported.
/// 5 ticks at 10 ms = 50 ms debounce.
pub const KEYPAD_DEBOUNCE_TICKS: u8 = 5;

/// Settling time after driving a row before the columns are sampled (µs).
pub const KEYPAD_ROW_SETTLE_US: u64 = 20;

/// Depth of the keypad → calculator key queue.
pub const KEY_QUEUE_DEPTH: usize = 8;

// Screen power

/// Enable automatic OLED screen power-off after inactivity.
pub const SCREEN_AUTO_OFF_ENABLED: bool = true;

/// Inactivity timeout before the OLED is turned off (seconds).
pub const SCREEN_AUTO_OFF_TIMEOUT_SECS: u64 = 300;
