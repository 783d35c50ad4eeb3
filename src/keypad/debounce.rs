//! Scan-tick debouncer for the key matrix.
//!
//! One reading per scan tick (`None` when no key is held). A key is
//! reported once it has been read for `KEYPAD_DEBOUNCE_TICKS` consecutive
//! ticks; nothing more is reported until the matrix has read empty for the
//! same number of ticks, so holding a key never repeats.

use super::Key;
use crate::config::KEYPAD_DEBOUNCE_TICKS;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyDebouncer {
    candidate: Option<Key>,
    stable_ticks: u8,
    release_ticks: u8,
    latched: bool,
}

impl Default for KeyDebouncer {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyDebouncer {
    pub const fn new() -> Self {
        Self {
            candidate: None,
            stable_ticks: 0,
            release_ticks: 0,
            latched: false,
        }
    }

    /// Feed one matrix reading; returns a key on the debounced press edge.
    pub fn tick(&mut self, reading: Option<Key>) -> Option<Key> {
        let Some(key) = reading else {
            self.candidate = None;
            self.stable_ticks = 0;
            if self.latched {
                self.release_ticks = self.release_ticks.saturating_add(1);
                if self.release_ticks >= KEYPAD_DEBOUNCE_TICKS {
                    self.latched = false;
                    self.release_ticks = 0;
                }
            }
            return None;
        };

        if self.latched {
            // Still held (or bouncing on release).
            self.release_ticks = 0;
            return None;
        }

        if self.candidate == Some(key) {
            self.stable_ticks = self.stable_ticks.saturating_add(1);
        } else {
            self.candidate = Some(key);
            self.stable_ticks = 1;
        }

        if self.stable_ticks >= KEYPAD_DEBOUNCE_TICKS {
            self.latched = true;
            self.candidate = None;
            self.stable_ticks = 0;
            return Some(key);
        }
        None
    }
}
