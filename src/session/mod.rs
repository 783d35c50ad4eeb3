//! Calculator session - the input state machine.
//!
//! One owned [`CalculatorSession`] holds everything the calculator
//! remembers between keys: the entry buffer, the left operand, the
//! pending operator, the power/root mode and the interaction [`Phase`].
//!
//! [`CalculatorSession::step`] is the pure transition: it mutates the
//! session and reports what happened as a list of [`Event`]s.
//! [`crate::ui::render`] turns those events into display instructions;
//! [`CalculatorSession::handle_key`] does both.
//!
//! Rules for each key, in order:
//!
//! 1. A digit while a result is shown starts over (full reset first).
//! 2. An operator while a result is shown keeps the result as the new
//!    left operand.
//! 3. Digits and `.` extend the entry (committing a pending power/root
//!    mode choice first).
//! 4. Operators latch the entry as the left operand, evaluating a pending
//!    operation first when a second operand has been typed.
//! 5. `=` evaluates, or commits the power/root mode choice.
//! 6. `C` resets everything.
//! 7. `D` toggles the entry's sign, or the power/root mode while choosing.

pub mod entry;


use heapless::{String, Vec};

use crate::calc::{self, OperatorKind};
use crate::config::{ENTRY_CAPACITY, ERROR_HOLD_MS};
use crate::error::CalcError;
use crate::keypad::Key;
use crate::ui::{self, Frame, RenderOp};
use entry::EntryBuffer;

/// Most events a single key can produce (reset + chained evaluation +
/// operator, with headroom).
pub const MAX_EVENTS: usize = 4;

/// Events produced by one key.
pub type Events = Vec<Event, MAX_EVENTS>;

/// Where the calculator is in a calculation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Nothing typed since the last reset.
    Idle,
    /// Typing (or holding) the left operand; no operator latched.
    EnteringFirst,
    /// `A` pressed; waiting for the power/root mode to be chosen.
    SelectingPowerRootMode,
    /// Operator latched; typing the second operand.
    EnteringSecond,
    /// A result is on the display and in the entry buffer.
    ShowingResult,
    /// An error message is on the display; a reset is due.
    ShowingError(CalcError),
}

/// Something the display needs to reflect.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Everything was reset.
    Reset,
    /// The entry text changed and belongs on `row`.
    EntryShown {
        row: u8,
        text: String<ENTRY_CAPACITY>,
        /// Blank the row before printing (the new text may be shorter
        /// than what is there).
        clear_line: bool,
    },
    /// An operator was latched with this left operand.
    OperatorSet { left: f64, op: OperatorKind },
    /// `A` pressed; the mode prompt is up.
    ModePrompt { root_mode: bool },
    /// `D` flipped the mode while choosing.
    ModeToggled { root_mode: bool },
    /// The mode choice was committed.
    ModeCommitted { left: f64, root_mode: bool },
    /// A calculation succeeded.
    Evaluated { value: f64 },
    /// A calculation failed.
    Failed(CalcError),
}

#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorSession {
    entry: EntryBuffer,
    left: f64,
    pending: Option<OperatorKind>,
    /// `true` = Nth root, `false` = power. Meaningful only with
    /// `pending == Some(PowerRoot)`.
    root_mode: bool,
    phase: Phase,
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorSession {
    /// A fresh session in the post-boot state.
    pub const fn new() -> Self {
        Self {
            entry: EntryBuffer::new(),
            left: 0.0,
            pending: None,
            root_mode: true,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn entry(&self) -> &EntryBuffer {
        &self.entry
    }

    pub fn left_operand(&self) -> f64 {
        self.left
    }

    pub fn pending_operator(&self) -> Option<OperatorKind> {
        self.pending
    }

    pub fn root_mode(&self) -> bool {
        self.root_mode
    }

    pub fn awaiting_second_operand(&self) -> bool {
        self.phase == Phase::EnteringSecond
    }

    pub fn result_shown(&self) -> bool {
        self.phase == Phase::ShowingResult
    }

    pub fn awaiting_mode_choice(&self) -> bool {
        self.phase == Phase::SelectingPowerRootMode
    }

    /// Process one key and return what to draw.
    ///
    /// If the key caused an error, `hold_ms` is set: keep the message up
    /// that long, then call [`finish_error_hold`](Self::finish_error_hold).
    pub fn handle_key(&mut self, key: Key) -> Frame {
        let events = self.step(key);
        let hold_ms = match self.phase {
            Phase::ShowingError(_) => Some(ERROR_HOLD_MS),
            _ => None,
        };
        Frame {
            ops: ui::render(&events),
            hold_ms,
        }
    }

    /// Complete the reset that follows an error message.
    ///
    /// Does nothing unless an error is showing.
    pub fn finish_error_hold(&mut self) -> Frame {
        let mut frame = Frame::default();
        if let Phase::ShowingError(err) = self.phase {
            debug!("session: reset after {}", err);
            self.reset();
            let _ = frame.ops.push(RenderOp::ClearAll);
        }
        frame
    }

    /// Pure transition for one key.
    pub fn step(&mut self, key: Key) -> Events {
        let mut events = Events::new();
        trace!("session: key {} in {}", key, self.phase);

        // Run-to-completion callers never get here mid-hold, but if they
        // do, the pending reset happens first.
        if let Phase::ShowingError(_) = self.phase {
            self.reset();
            push(&mut events, Event::Reset);
            if key == Key::Clear {
                return events;
            }
        }

        if self.phase == Phase::ShowingResult {
            if matches!(key, Key::Digit(_)) {
                self.reset();
                push(&mut events, Event::Reset);
            } else if key.operator().is_some() {
                // The shown result stays in the entry and becomes the
                // left operand below.
                self.phase = Phase::EnteringFirst;
            }
        }

        match key {
            Key::Digit(_) | Key::Decimal => self.type_char(key.symbol(), &mut events),
            Key::Equals => self.press_equals(&mut events),
            Key::Clear => {
                self.reset();
                push(&mut events, Event::Reset);
            }
            Key::Toggle => self.press_toggle(&mut events),
            Key::Add | Key::Sub | Key::Mul | Key::Div | Key::Mod | Key::PowerRoot => {
                if let Some(op) = key.operator() {
                    self.press_operator(op, &mut events);
                }
            }
        }

        events
    }

    fn reset(&mut self) {
        *self = Self::new();
    }

    fn entry_row(&self) -> u8 {
        if self.awaiting_second_operand() {
            1
        } else {
            0
        }
    }

    fn type_char(&mut self, c: char, events: &mut Events) {
        if self.awaiting_mode_choice() {
            self.commit_mode(events);
        }

        let fresh = self.entry.is_empty() || self.phase == Phase::ShowingResult;
        if let Err(reject) = self.entry.push(c) {
            trace!("session: '{}' rejected ({})", c, reject);
            return;
        }

        match self.phase {
            Phase::Idle | Phase::ShowingResult => self.phase = Phase::EnteringFirst,
            _ => {}
        }

        push(
            events,
            Event::EntryShown {
                row: self.entry_row(),
                text: self.entry.snapshot(),
                clear_line: fresh,
            },
        );
    }

    fn press_operator(&mut self, op: OperatorKind, events: &mut Events) {
        if self.entry.is_empty() {
            return;
        }

        // `2 + 3 *` evaluates `2 + 3` before latching `*`.
        if self.awaiting_second_operand() && !self.evaluate_pending(events) {
            return;
        }

        let parsed = self.entry.parse();
        if !parsed.valid {
            debug!("session: left operand text did not parse, using 0");
        }
        self.left = parsed.value;
        self.pending = Some(op);
        self.entry.clear();

        if op == OperatorKind::PowerRoot {
            self.root_mode = true;
            self.phase = Phase::SelectingPowerRootMode;
            push(
                events,
                Event::ModePrompt {
                    root_mode: self.root_mode,
                },
            );
            return;
        }

        self.phase = Phase::EnteringSecond;
        push(
            events,
            Event::OperatorSet {
                left: self.left,
                op,
            },
        );
    }

    fn press_equals(&mut self, events: &mut Events) {
        if self.awaiting_mode_choice() {
            self.commit_mode(events);
            return;
        }
        if self.awaiting_second_operand() && !self.entry.is_empty() {
            self.evaluate_pending(events);
        }
    }

    fn press_toggle(&mut self, events: &mut Events) {
        if self.awaiting_mode_choice() {
            self.root_mode = !self.root_mode;
            push(
                events,
                Event::ModeToggled {
                    root_mode: self.root_mode,
                },
            );
            return;
        }

        if self.entry.toggle_sign() {
            push(
                events,
                Event::EntryShown {
                    row: self.entry_row(),
                    text: self.entry.snapshot(),
                    clear_line: true,
                },
            );
        }
    }

    fn commit_mode(&mut self, events: &mut Events) {
        debug!("session: power/root mode committed, root={}", self.root_mode);
        self.phase = Phase::EnteringSecond;
        push(
            events,
            Event::ModeCommitted {
                left: self.left,
                root_mode: self.root_mode,
            },
        );
    }

    /// Evaluate `left <pending> entry`. Returns `false` on error, leaving
    /// operands untouched and the phase at `ShowingError`.
    fn evaluate_pending(&mut self, events: &mut Events) -> bool {
        let Some(op) = self.pending else {
            return false;
        };

        match calc::evaluate(self.left, op, self.entry.as_str(), self.root_mode) {
            Ok(value) => {
                debug!("session: {} {} {} = {}", self.left, op, self.entry.as_str(), value);
                self.left = value;
                self.entry.set_result(value);
                self.phase = Phase::ShowingResult;
                push(events, Event::Evaluated { value });
                true
            }
            Err(err) => {
                warn!("session: evaluation failed: {}", err);
                self.phase = Phase::ShowingError(err);
                push(events, Event::Failed(err));
                false
            }
        }
    }
}

fn push(events: &mut Events, event: Event) {
    // MAX_EVENTS covers the longest chain a single key can produce.
    let _ = events.push(event);
}
