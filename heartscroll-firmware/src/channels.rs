//! Shared state between the animation and scan tasks
//!
//! The display buffer has exactly one writer (the animation task) and one
//! reader (the scan task). No async locking: the scan task snapshots the
//! frame under a blocking mutex at pass start, and a dirty flag tells it
//! to abort a stale pass and re-snapshot.

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use portable_atomic::AtomicBool;

use heartscroll_core::bitmap::Bitmap;

/// The display buffer.
pub static FRAME: Mutex<CriticalSectionRawMutex, Cell<Bitmap>> =
    Mutex::new(Cell::new(Bitmap::BLANK));

/// Raised by the animation task after publishing a new frame; consumed
/// (swap-cleared) by the scan task between painted rows.
pub static FRAME_DIRTY: AtomicBool = AtomicBool::new(false);
