//! Heartscroll - 8x8 LED matrix message scroller
//!
//! Firmware binary for RP2040 boards driving an 8x8 common-cathode LED
//! matrix directly from GPIO: eight row lines (active-high) and eight
//! column lines (active-low). The animation engine lives in
//! heartscroll-core; this crate is pin setup, the tick timer, and the
//! multiplexing loop.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{AnyPin, Level, Output};
use {defmt_rtt as _, panic_probe as _};

mod channels;
mod tasks;

use crate::tasks::GpioMatrix;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Heartscroll firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Row anodes on GPIO0..7, column cathodes on GPIO8..15.
    // Rows idle low (no row selected), columns idle high (active-low off).
    let rows = [
        Output::new(AnyPin::from(p.PIN_0), Level::Low),
        Output::new(AnyPin::from(p.PIN_1), Level::Low),
        Output::new(AnyPin::from(p.PIN_2), Level::Low),
        Output::new(AnyPin::from(p.PIN_3), Level::Low),
        Output::new(AnyPin::from(p.PIN_4), Level::Low),
        Output::new(AnyPin::from(p.PIN_5), Level::Low),
        Output::new(AnyPin::from(p.PIN_6), Level::Low),
        Output::new(AnyPin::from(p.PIN_7), Level::Low),
    ];
    let cols = [
        Output::new(AnyPin::from(p.PIN_8), Level::High),
        Output::new(AnyPin::from(p.PIN_9), Level::High),
        Output::new(AnyPin::from(p.PIN_10), Level::High),
        Output::new(AnyPin::from(p.PIN_11), Level::High),
        Output::new(AnyPin::from(p.PIN_12), Level::High),
        Output::new(AnyPin::from(p.PIN_13), Level::High),
        Output::new(AnyPin::from(p.PIN_14), Level::High),
        Output::new(AnyPin::from(p.PIN_15), Level::High),
    ];
    info!("Matrix GPIO initialized");

    let matrix = GpioMatrix::new(rows, cols);

    spawner.spawn(tasks::scan_task(matrix)).unwrap();
    spawner.spawn(tasks::animate_task()).unwrap();

    info!("Tasks running; scrolling forever");
}
