//! keypad-calc firmware entry point (nRF52840).
//!
//! Two tasks:
//!
//! - **keypad**: scans the 5×4 matrix and sends debounced keys into
//!   `KEY_CHANNEL`.
//! - **calculator**: owns the session, the character grid and the OLED;
//!   processes one key to completion (including error holds) before
//!   receiving the next, and blanks the panel after inactivity.

#![no_std]
#![no_main]

use defmt::{error, info, warn};
use embassy_executor::Spawner;
use embassy_futures::select::{select, Either};
use embassy_nrf::gpio::{Input, Level, Output, OutputDrive, Pull};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver};
use embassy_time::Timer;
use keypad_calc::config::{KEYPAD_COLS, KEYPAD_ROWS, KEY_QUEUE_DEPTH};
use keypad_calc::keypad::matrix::{self, KeySender};
use keypad_calc::power::ScreenPower;
use keypad_calc::ui::display::{self, Display};
use keypad_calc::ui::{self, RenderOp};
use keypad_calc::{apply, CalculatorSession, Key, TextGrid};
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

static KEY_CHANNEL: Channel<CriticalSectionRawMutex, Key, KEY_QUEUE_DEPTH> = Channel::new();

type Oled = Display<Twim<'static, peripherals::TWISPI0>>;
type KeyReceiver = Receiver<'static, CriticalSectionRawMutex, Key, KEY_QUEUE_DEPTH>;

/// How often the calculator task checks the screen auto-off policy.
const SCREEN_TICK_SECS: u64 = 1;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("keypad-calc starting");

    let rows: [Output<'static>; KEYPAD_ROWS] = [
        Output::new(p.P0_03, Level::High, OutputDrive::Standard),
        Output::new(p.P0_04, Level::High, OutputDrive::Standard),
        Output::new(p.P0_28, Level::High, OutputDrive::Standard),
        Output::new(p.P0_29, Level::High, OutputDrive::Standard),
        Output::new(p.P0_30, Level::High, OutputDrive::Standard),
    ];
    let cols: [Input<'static>; KEYPAD_COLS] = [
        Input::new(p.P1_01, Pull::Up),
        Input::new(p.P1_02, Pull::Up),
        Input::new(p.P1_03, Pull::Up),
        Input::new(p.P1_04, Pull::Up),
    ];

    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let oled = match display::init(i2c) {
        Ok(oled) => oled,
        Err(e) => {
            error!("Display init failed: {}", e);
            return;
        }
    };

    spawner.must_spawn(keypad(rows, cols, KEY_CHANNEL.sender()));
    spawner.must_spawn(calculator(oled, KEY_CHANNEL.receiver()));
}

#[embassy_executor::task]
async fn keypad(
    rows: [Output<'static>; KEYPAD_ROWS],
    cols: [Input<'static>; KEYPAD_COLS],
    tx: KeySender,
) {
    matrix::keypad_task(rows, cols, tx).await
}

#[embassy_executor::task]
async fn calculator(mut oled: Oled, rx: KeyReceiver) {
    let mut session = CalculatorSession::new();
    let mut grid = TextGrid::new();
    let mut screen = ScreenPower::new();

    let banner = ui::boot_banner();
    present(&mut oled, &mut grid, &banner.ops);
    if let Some(ms) = banner.hold_ms {
        Timer::after_millis(ms).await;
    }
    present(&mut oled, &mut grid, &[RenderOp::ClearAll]);
    info!("Calculator ready");

    loop {
        match select(rx.receive(), Timer::after_secs(SCREEN_TICK_SECS)).await {
            Either::First(key) => {
                if screen.activity() {
                    set_power(&mut oled, true);
                }

                let frame = session.handle_key(key);
                present(&mut oled, &mut grid, &frame.ops);

                // Run to completion: queued keys wait out the hold.
                if let Some(ms) = frame.hold_ms {
                    Timer::after_millis(ms).await;
                    let frame = session.finish_error_hold();
                    present(&mut oled, &mut grid, &frame.ops);
                }
            }
            Either::Second(()) => {
                if let Some(on) = screen.tick() {
                    set_power(&mut oled, on);
                }
            }
        }
    }
}

/// Apply render instructions to the grid and push it to the panel.
fn present(oled: &mut Oled, grid: &mut TextGrid, ops: &[RenderOp]) {
    if let Err(never) = apply(grid, ops) {
        match never {}
    }
    if grid.take_dirty() {
        if let Err(e) = display::draw_grid(oled, grid) {
            warn!("Display: redraw failed: {}", e);
        }
    }
}

fn set_power(oled: &mut Oled, on: bool) {
    if let Err(e) = display::set_power(oled, on) {
        warn!("Display: power {} failed: {}", on, e);
    }
}
