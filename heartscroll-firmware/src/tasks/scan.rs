//! Matrix scan task
//!
//! Continuously repaints the display buffer row by row. Rows are driven
//! active-high, columns active-low (common-cathode matrix wired straight
//! to GPIO). When the animation task raises the dirty flag mid-pass, the
//! remaining rows are skipped and the next pass starts from row 0 with
//! the fresh buffer.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::Timer;
use portable_atomic::Ordering;

use heartscroll_core::bitmap::SIZE;
use heartscroll_core::drive::{paint_pass, MatrixDrive, PaintOutcome};

use crate::channels::{FRAME, FRAME_DIRTY};

/// Busy-wait row dwell in core cycles; ~100 us at the 125 MHz default
/// clk_sys. Sets the per-row on-time of the multiplex.
const ROW_DWELL_CYCLES: u32 = 12_500;

/// Pause between complete passes, long enough to let the executor run
/// the animation task.
const PASS_GAP_US: u64 = 50;

/// GPIO implementation of the matrix drive.
pub struct GpioMatrix {
    rows: [Output<'static>; SIZE],
    cols: [Output<'static>; SIZE],
}

impl GpioMatrix {
    pub fn new(rows: [Output<'static>; SIZE], cols: [Output<'static>; SIZE]) -> Self {
        Self { rows, cols }
    }
}

impl MatrixDrive for GpioMatrix {
    fn select_row(&mut self, row: usize) {
        for (index, pin) in self.rows.iter_mut().enumerate() {
            if index == row {
                pin.set_high();
            } else {
                pin.set_low();
            }
        }
    }

    fn drive_columns(&mut self, levels: u8) {
        for (index, pin) in self.cols.iter_mut().enumerate() {
            if levels & (1 << index) != 0 {
                pin.set_high();
            } else {
                pin.set_low();
            }
        }
        // Hold the row lit; this dwell is the LED on-time.
        cortex_m::asm::delay(ROW_DWELL_CYCLES);
    }

    fn blank(&mut self) {
        for pin in self.rows.iter_mut() {
            pin.set_low();
        }
        // Columns are active-low: high = off.
        for pin in self.cols.iter_mut() {
            pin.set_high();
        }
    }
}

#[embassy_executor::task]
pub async fn scan_task(mut matrix: GpioMatrix) {
    info!("Matrix scan task started");

    loop {
        let frame = FRAME.lock(|cell| cell.get());
        match paint_pass(&frame, &mut matrix, || {
            FRAME_DIRTY.swap(false, Ordering::Acquire)
        }) {
            PaintOutcome::Completed => {
                matrix.blank();
                Timer::after_micros(PASS_GAP_US).await;
            }
            // Aborted: re-snapshot immediately and repaint from row 0.
            PaintOutcome::Aborted { .. } => {}
        }
    }
}
