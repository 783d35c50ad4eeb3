//! GPIO key matrix scanning.
//!
//! Rows are outputs idling high; columns are inputs with internal
//! pull-ups. Each scan drives one row low at a time and samples the
//! columns: a low column means the key at (row, col) is held.
//!
//! The task scans every `KEYPAD_SCAN_PERIOD_MS`, feeds the reading to a
//! [`KeyDebouncer`], and sends each debounced press to the calculator
//! task.

use super::debounce::KeyDebouncer;
use super::{key_at, Key};
use crate::config::{
    KEYPAD_COLS, KEYPAD_ROWS, KEYPAD_ROW_SETTLE_US, KEYPAD_SCAN_PERIOD_MS, KEY_QUEUE_DEPTH,
};
use defmt::{debug, info};
use embassy_nrf::gpio::{Input, Output};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use embassy_time::{Duration, Timer};

/// Channel end the keypad task publishes into.
pub type KeySender = Sender<'static, CriticalSectionRawMutex, Key, KEY_QUEUE_DEPTH>;

/// One pass over the matrix. Returns the first held key in row-major
/// order; simultaneous presses resolve to the top-left one.
async fn scan_once(
    rows: &mut [Output<'static>; KEYPAD_ROWS],
    cols: &[Input<'static>; KEYPAD_COLS],
) -> Option<Key> {
    let mut found = None;

    for (r, row) in rows.iter_mut().enumerate() {
        row.set_low();
        Timer::after(Duration::from_micros(KEYPAD_ROW_SETTLE_US)).await;

        let held = cols.iter().position(|col| col.is_low());
        row.set_high();

        if let Some(c) = held {
            found = key_at(r, c);
            break;
        }
    }

    found
}

/// Run the keypad polling loop forever.
pub async fn keypad_task(
    mut rows: [Output<'static>; KEYPAD_ROWS],
    cols: [Input<'static>; KEYPAD_COLS],
    tx: KeySender,
) -> ! {
    let mut debouncer = KeyDebouncer::new();
    info!("Keypad: scanning {}x{} matrix", KEYPAD_ROWS, KEYPAD_COLS);

    loop {
        let reading = scan_once(&mut rows, &cols).await;

        if let Some(key) = debouncer.tick(reading) {
            debug!("Keypad: {}", key);
            tx.send(key).await;
        }

        Timer::after(Duration::from_millis(KEYPAD_SCAN_PERIOD_MS)).await;
    }
}
