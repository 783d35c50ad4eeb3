//! User interface subsystem - render instructions for the 16×2 display.
//!
//! The session reports what happened as [`Event`]s; [`render`] turns them
//! into an ordered list of [`RenderOp`]s, which [`surface::apply`] plays
//! against any [`surface::TextSurface`].
//!
//! ## Screen layout
//!
//! - **Row 0**: first operand while typing, then `<left><operator>`
//! - **Row 1**: second operand while typing, then the result
//!
//! Errors and the boot banner take over both rows.

#[cfg(feature = "embedded")]
pub mod display;
pub mod surface;

use heapless::{String, Vec};

use crate::calc::format::{FormatTier, Places};
use crate::calc::power_root_label;
use crate::config::{BANNER_HOLD_MS, BANNER_LINES, ENTRY_CAPACITY, MAX_RENDER_OPS};
use crate::error::CalcError;
use crate::session::Event;

/// Prompt shown on row 0 after `A`; row 1 shows the current sign.
pub const MODE_PROMPT: &str = "Root=+ Pow=-";

/// One instruction for the text surface.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderOp {
    /// Blank the whole surface and home the cursor.
    ClearAll,
    /// Blank one row and leave the cursor at its start.
    ClearLine(u8),
    SetCursor { col: u8, row: u8 },
    /// Print at the cursor, advancing it.
    PrintText(String<ENTRY_CAPACITY>),
    /// Print a number at the cursor, advancing it.
    PrintNumber { value: f64, places: Places },
}

impl RenderOp {
    /// `PrintText` from a `&str`, truncated to the op's capacity.
    pub fn text(s: &str) -> Self {
        let mut text = String::new();
        for c in s.chars() {
            if text.push(c).is_err() {
                break;
            }
        }
        RenderOp::PrintText(text)
    }

    /// `PrintNumber` using the result formatting tiers.
    pub fn number(value: f64) -> Self {
        RenderOp::PrintNumber {
            value,
            places: FormatTier::classify(value).places(),
        }
    }
}

pub type RenderList = Vec<RenderOp, MAX_RENDER_OPS>;

/// What one key (or the boot sequence) wants on screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub ops: RenderList,
    /// Keep the frame up this long before processing anything else (ms).
    pub hold_ms: Option<u64>,
}

/// Text for the mode line under the prompt.
pub const fn mode_sign_text(root_mode: bool) -> &'static str {
    if root_mode {
        "Sign: +"
    } else {
        "Sign: -"
    }
}

/// Translate session events into display instructions.
pub fn render(events: &[Event]) -> RenderList {
    let mut ops = RenderList::new();
    for event in events {
        render_event(&mut ops, event);
    }
    ops
}

fn render_event(ops: &mut RenderList, event: &Event) {
    match event {
        Event::Reset => push(ops, RenderOp::ClearAll),
        Event::EntryShown {
            row,
            text,
            clear_line,
        } => {
            if *clear_line {
                push(ops, RenderOp::ClearLine(*row));
            } else {
                push(ops, RenderOp::SetCursor { col: 0, row: *row });
            }
            push(ops, RenderOp::PrintText(text.clone()));
        }
        Event::OperatorSet { left, op } => {
            push(ops, RenderOp::ClearLine(0));
            push(ops, RenderOp::number(*left));
            push(ops, RenderOp::text(op.glyph()));
        }
        Event::ModePrompt { root_mode } => {
            push(ops, RenderOp::ClearLine(0));
            push(ops, RenderOp::text(MODE_PROMPT));
            push(ops, RenderOp::ClearLine(1));
            push(ops, RenderOp::text(mode_sign_text(*root_mode)));
        }
        Event::ModeToggled { root_mode } => {
            push(ops, RenderOp::ClearLine(1));
            push(ops, RenderOp::text(mode_sign_text(*root_mode)));
        }
        Event::ModeCommitted { left, root_mode } => {
            push(ops, RenderOp::ClearLine(0));
            push(ops, RenderOp::number(*left));
            push(ops, RenderOp::text(power_root_label(*root_mode)));
            push(ops, RenderOp::ClearLine(1));
        }
        Event::Evaluated { value } => {
            push(ops, RenderOp::ClearLine(1));
            push(ops, RenderOp::number(*value));
        }
        Event::Failed(err) => render_error(ops, *err),
    }
}

fn render_error(ops: &mut RenderList, err: CalcError) {
    let (first, second) = err.message_lines();
    push(ops, RenderOp::ClearAll);
    push(ops, RenderOp::SetCursor { col: 0, row: 0 });
    push(ops, RenderOp::text(first));
    if let Some(second) = second {
        push(ops, RenderOp::SetCursor { col: 0, row: 1 });
        push(ops, RenderOp::text(second));
    }
}

/// Welcome banner shown at power-up. Clear the screen after the hold.
pub fn boot_banner() -> Frame {
    let mut ops = RenderList::new();
    push(&mut ops, RenderOp::ClearAll);
    for (row, line) in BANNER_LINES.iter().enumerate() {
        push(
            &mut ops,
            RenderOp::SetCursor {
                col: 0,
                row: row as u8,
            },
        );
        push(&mut ops, RenderOp::text(line));
    }
    Frame {
        ops,
        hold_ms: Some(BANNER_HOLD_MS),
    }
}

fn push(ops: &mut RenderList, op: RenderOp) {
    // MAX_RENDER_OPS covers the longest event chain.
    let _ = ops.push(op);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::OperatorKind;

    #[test]
    fn operator_renders_left_and_glyph_on_row_0() {
        let ops = render(&[Event::OperatorSet {
            left: 12.0,
            op: OperatorKind::Mod,
        }]);
        assert_eq!(
            ops.as_slice(),
            [
                RenderOp::ClearLine(0),
                RenderOp::PrintNumber {
                    value: 12.0,
                    places: Places::Fixed(0)
                },
                RenderOp::text("%"),
            ]
        );
    }

    #[test]
    fn result_replaces_row_1() {
        let ops = render(&[Event::Evaluated { value: 2.25 }]);
        assert_eq!(
            ops.as_slice(),
            [
                RenderOp::ClearLine(1),
                RenderOp::PrintNumber {
                    value: 2.25,
                    places: Places::Fixed(4)
                },
            ]
        );
    }

    #[test]
    fn mode_prompt_and_toggle() {
        let ops = render(&[Event::ModePrompt { root_mode: true }]);
        assert!(ops.contains(&RenderOp::text(MODE_PROMPT)));
        assert!(ops.contains(&RenderOp::text("Sign: +")));

        let ops = render(&[Event::ModeToggled { root_mode: false }]);
        assert_eq!(
            ops.as_slice(),
            [RenderOp::ClearLine(1), RenderOp::text("Sign: -")]
        );
    }

    #[test]
    fn mode_commit_labels() {
        let root = render(&[Event::ModeCommitted {
            left: 9.0,
            root_mode: true,
        }]);
        assert!(root.contains(&RenderOp::text("rt")));
        assert_eq!(root.last(), Some(&RenderOp::ClearLine(1)));

        let power = render(&[Event::ModeCommitted {
            left: 9.0,
            root_mode: false,
        }]);
        assert!(power.contains(&RenderOp::text("^")));
    }

    #[test]
    fn two_line_error() {
        let ops = render(&[Event::Failed(CalcError::EvenRootOfNegative)]);
        assert_eq!(ops[0], RenderOp::ClearAll);
        assert!(ops.contains(&RenderOp::text("Error: Even root")));
        assert!(ops.contains(&RenderOp::text("of negative")));
    }

    #[test]
    fn entry_clears_row_only_when_asked() {
        let mut text: String<ENTRY_CAPACITY> = String::new();
        text.push_str("12").unwrap();
        let ops = render(&[Event::EntryShown {
            row: 1,
            text: text.clone(),
            clear_line: false,
        }]);
        assert_eq!(ops[0], RenderOp::SetCursor { col: 0, row: 1 });

        let ops = render(&[Event::EntryShown {
            row: 1,
            text,
            clear_line: true,
        }]);
        assert_eq!(ops[0], RenderOp::ClearLine(1));
    }

    #[test]
    fn boot_banner_holds() {
        let frame = boot_banner();
        assert_eq!(frame.hold_ms, Some(BANNER_HOLD_MS));
        assert!(frame.ops.contains(&RenderOp::text(BANNER_LINES[0])));
        assert!(frame.ops.contains(&RenderOp::text(BANNER_LINES[1])));
    }
}
