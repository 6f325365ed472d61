//! Animation tick task
//!
//! Runs the sequencer at a fixed rate: a hardware-rate ticker
//! down-sampled through a divider, matching the reference system's two
//! timer overflows per scheduling tick.

use defmt::*;
use embassy_time::{Duration, Ticker};
use portable_atomic::Ordering;

use heartscroll_core::sequencer::{Sequencer, TickDivider, TickOutcome};

use crate::channels::{FRAME, FRAME_DIRTY};

/// Base ticker interval in milliseconds.
pub const TIMER_TICK_MS: u64 = 25;

/// Hardware ticks per scheduling tick; one animation frame every 50 ms.
pub const TICKS_PER_FRAME: u32 = 2;

#[embassy_executor::task]
pub async fn animate_task() {
    info!("Animation task started");

    let mut ticker = Ticker::every(Duration::from_millis(TIMER_TICK_MS));
    let mut divider = TickDivider::new(TICKS_PER_FRAME);
    let mut sequencer = Sequencer::message();

    loop {
        ticker.next().await;
        if !divider.advance() {
            continue;
        }

        let mut frame = FRAME.lock(|cell| cell.get());
        match sequencer.tick(&mut frame) {
            TickOutcome::Rendered => {
                FRAME.lock(|cell| cell.set(frame));
                FRAME_DIRTY.store(true, Ordering::Release);
            }
            TickOutcome::DirectionChanged(direction) => {
                debug!("Scroll direction now {:?}", direction);
            }
        }
    }
}
