//! Multiplexed output pass
//!
//! The matrix is painted one row at a time: select the row line, drive
//! the eight column lines, move on. Column drive is active-low, so the
//! levels handed to the driver are the bitwise inverse of the row's
//! pixels.
//!
//! The animation tick may land mid-pass. The painter polls an interrupt
//! predicate between rows; once it reports true the rest of the pass is
//! skipped and the caller restarts from row 0 with the fresh buffer.
//! Tearing is thus bounded to "a suffix of stale rows was never painted",
//! never a mix of stale and fresh rows in one pass.

use crate::bitmap::{Bitmap, SIZE};

/// Hardware interface for one matrix scan.
///
/// Implementations drive real GPIO; tests use a recording mock.
pub trait MatrixDrive {
    /// Activate a single row line, deactivating the others.
    fn select_row(&mut self, row: usize);

    /// Drive the column lines with already-inverted active-low levels
    /// (bit set = pin high = LED off).
    fn drive_columns(&mut self, levels: u8);

    /// Deactivate all rows and columns.
    fn blank(&mut self);
}

/// Result of one paint pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PaintOutcome {
    /// All eight rows were painted.
    Completed,
    /// The pass stopped early; `rows_painted` rows made it out before
    /// the interrupt predicate fired.
    Aborted { rows_painted: usize },
}

/// Paint one full frame, row by row.
///
/// `interrupted` is polled before each row. The firmware passes a
/// check-and-clear of the frame dirty flag here, which yields the
/// abort-and-restart contract described in the module docs. On abort the
/// drive is blanked so no row stays latched bright while the caller
/// re-reads the buffer.
pub fn paint_pass<D: MatrixDrive>(
    frame: &Bitmap,
    drive: &mut D,
    mut interrupted: impl FnMut() -> bool,
) -> PaintOutcome {
    for row in 0..SIZE {
        if interrupted() {
            drive.blank();
            return PaintOutcome::Aborted { rows_painted: row };
        }
        drive.select_row(row);
        drive.drive_columns(!frame.line(row));
    }
    PaintOutcome::Completed
}
