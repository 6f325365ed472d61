//! Per-tick frame rolling
//!
//! Maps a frame counter onto the scroll-in of one glyph: each glyph slot
//! occupies nine frames, one blank buffer frame followed by the glyph's
//! eight strips entering the display one cell at a time.

use crate::bitmap::{Bitmap, SIZE};
use crate::glyph::Glyph;
use crate::shift::{shift_with_carry, Axis, CarryPolicy, Direction};

/// Blank frames inserted between consecutive glyphs.
pub const BUFFER_FRAMES: u16 = 1;

/// Frames consumed per glyph slot: 8 strips plus the buffer frame.
pub const FRAMES_PER_GLYPH: u16 = SIZE as u16 + BUFFER_FRAMES;

/// Which glyph slot a frame counter falls in.
pub const fn move_index(counter: u16) -> u16 {
    counter / FRAMES_PER_GLYPH
}

/// Position within the slot's reveal: 0 is the buffer frame, 1..=8 are
/// the glyph strips.
pub const fn shift_index(counter: u16) -> u16 {
    counter % FRAMES_PER_GLYPH
}

/// Advance the display buffer by one animation frame.
///
/// On the buffer frame blank content scrolls in; on strip frames the
/// glyph's next row (Up/Down) or column (Left/Right) scrolls in. Nine
/// consecutive calls at a fixed direction reveal the whole glyph with a
/// one-frame blank lead-in.
pub fn roll_frame(direction: Direction, glyph: &Glyph, dest: &mut Bitmap, counter: u16) {
    let index = shift_index(counter);
    if index < BUFFER_FRAMES {
        shift_with_carry(direction, dest, CarryPolicy::Disabled);
    } else {
        let element = (index - BUFFER_FRAMES) as usize;
        let strip = match direction.axis() {
            Axis::Rows => glyph.bitmap.line(element),
            Axis::Columns => glyph.bitmap.column(element),
        };
        shift_with_carry(direction, dest, CarryPolicy::Provided(strip));
    }
}
