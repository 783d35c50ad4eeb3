//! Screen power management - OLED auto-off after keypad inactivity.
//!
//! The SSD1306 draws ~10 mA with a full screen lit; turning the panel off
//! while the calculator sits idle is the only power saving that matters
//! for this board. The CPU already sleeps in the Embassy executor between
//! scan ticks.

use crate::{config, power_logic};
use defmt::info;
use embassy_time::Instant;

/// Tracks keypad activity and the resulting panel state.
pub struct ScreenPower {
    last_activity: Instant,
    on: bool,
}

impl ScreenPower {
    pub fn new() -> Self {
        Self {
            last_activity: Instant::now(),
            on: true,
        }
    }

    /// Record a key press. Returns `true` if the panel must be switched
    /// back on.
    pub fn activity(&mut self) -> bool {
        self.last_activity = Instant::now();
        if self.on {
            return false;
        }
        info!("Screen: waking");
        self.on = true;
        true
    }

    /// Periodic tick. Returns `Some(new_state)` when the panel should
    /// change state.
    pub fn tick(&mut self) -> Option<bool> {
        let idle_secs = self.last_activity.elapsed().as_secs();
        let want_on = power_logic::screen_should_be_on(
            config::SCREEN_AUTO_OFF_ENABLED,
            idle_secs,
            config::SCREEN_AUTO_OFF_TIMEOUT_SECS,
        );

        if want_on == self.on {
            return None;
        }
        info!("Screen: on={} after {}s idle", want_on, idle_secs);
        self.on = want_on;
        Some(want_on)
    }
}
