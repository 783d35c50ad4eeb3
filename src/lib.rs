//! keypad-calc - a matrix-keypad pocket calculator.
//!
//! All calculator logic lives in this library and runs on the host
//! (no embedded hardware required):
//!
//! - [`session`]: the input state machine ([`CalculatorSession`])
//! - [`calc`]: the calculation engine and result formatting
//! - [`ui`]: render instructions and the 16×2 character surface
//! - [`keypad`]: key alphabet, matrix layout and debouncing
//!
//! Usage: `cargo test --lib --tests`
//!
//! Note: The embedded binary (`src/main.rs`, `--features embedded`)
//! wires these modules to the nRF52840 GPIO matrix and SSD1306 OLED.
//! Hardware-facing modules are compiled only with that feature.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod calc;
pub mod config;
pub mod error;
pub mod keypad;
pub mod power_logic;
pub mod session;
pub mod ui;

#[cfg(feature = "embedded")]
pub mod power;

pub use calc::format::{FormatTier, Places};
pub use calc::{evaluate, OperatorKind};
pub use error::{CalcError, Error};
pub use keypad::Key;
pub use session::{CalculatorSession, Phase};
pub use ui::surface::{apply, TextGrid, TextSurface};
pub use ui::{Frame, RenderOp};
