//! Animation sequencer state machine
//!
//! On each scheduling tick the sequencer maps its frame counter to
//! (glyph slot, strip) and rolls the display buffer one frame. Once the
//! counter walks past the last playlist slot the scroll direction
//! advances and the counter resets; the sequence runs forever.

use heapless::Vec;

use crate::bitmap::Bitmap;
use crate::glyph::{Glyph, MESSAGE};
use crate::roll::{move_index, roll_frame};
use crate::shift::Direction;

/// Maximum glyph slots in a playlist.
pub const MAX_SLOTS: usize = 16;

/// An ordered list of glyph slots to scroll through.
pub type Playlist = Vec<&'static Glyph, MAX_SLOTS>;

/// What a scheduling tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// The display buffer advanced one animation frame.
    Rendered,
    /// The playlist finished; direction advanced, counter reset, buffer
    /// untouched this tick.
    DirectionChanged(Direction),
}

/// Down-samples hardware ticks to scheduling ticks.
///
/// [`advance`](Self::advance) returns true on every `period`-th call.
/// The reference system ran one scheduling tick per two timer overflows,
/// i.e. period 2.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickDivider {
    period: u32,
    count: u32,
}

impl TickDivider {
    pub const fn new(period: u32) -> Self {
        Self {
            // Period 0 would never fire; treat it as every tick.
            period: if period == 0 { 1 } else { period },
            count: 0,
        }
    }

    pub fn advance(&mut self) -> bool {
        self.count += 1;
        if self.count >= self.period {
            self.count = 0;
            true
        } else {
            false
        }
    }
}

/// The animation sequencer.
pub struct Sequencer {
    direction: Direction,
    counter: u16,
    playlist: Playlist,
}

impl Sequencer {
    pub fn new(playlist: Playlist, direction: Direction) -> Self {
        Self {
            direction,
            counter: 0,
            playlist,
        }
    }

    /// Sequencer over the default message, starting like the reference
    /// system: scrolling left.
    pub fn message() -> Self {
        let mut playlist = Playlist::new();
        for glyph in &MESSAGE {
            // MESSAGE fits: 12 slots, capacity 16.
            let _ = playlist.push(glyph);
        }
        Self::new(playlist, Direction::Left)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn counter(&self) -> u16 {
        self.counter
    }

    /// Run one scheduling tick against the display buffer.
    pub fn tick(&mut self, frame: &mut Bitmap) -> TickOutcome {
        let slot = move_index(self.counter) as usize;
        if slot >= self.playlist.len() {
            self.direction = self.direction.next();
            self.counter = 0;
            TickOutcome::DirectionChanged(self.direction)
        } else {
            roll_frame(self.direction, self.playlist[slot], frame, self.counter);
            self.counter += 1;
            TickOutcome::Rendered
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::HEART;
    use crate::roll::FRAMES_PER_GLYPH;

    fn heart_only(direction: Direction) -> Sequencer {
        let mut playlist = Playlist::new();
        let _ = playlist.push(&HEART);
        Sequencer::new(playlist, direction)
    }

    #[test]
    fn test_heart_scrolls_up_in_nine_ticks() {
        let mut sequencer = heart_only(Direction::Up);
        let mut frame = Bitmap::BLANK;
        for _ in 0..FRAMES_PER_GLYPH {
            assert_eq!(sequencer.tick(&mut frame), TickOutcome::Rendered);
        }
        // One blank lead-in frame, then the eight strips: the buffer now
        // holds the heart, bottom row 0x18.
        assert_eq!(frame, HEART.bitmap);
        assert_eq!(frame.line(7), 0x18);
        assert_eq!(frame.line(1), 0x66);
    }

    #[test]
    fn test_single_glyph_direction_change_after_reveal() {
        let mut sequencer = heart_only(Direction::Up);
        let mut frame = Bitmap::BLANK;
        for _ in 0..FRAMES_PER_GLYPH {
            sequencer.tick(&mut frame);
        }
        let before = frame;
        assert_eq!(
            sequencer.tick(&mut frame),
            TickOutcome::DirectionChanged(Direction::Down)
        );
        // Direction-change tick leaves the buffer alone.
        assert_eq!(frame, before);
        assert_eq!(sequencer.counter(), 0);
    }

    #[test]
    fn test_full_message_cycle() {
        let mut sequencer = Sequencer::message();
        assert_eq!(sequencer.direction(), Direction::Left);

        let mut frame = Bitmap::BLANK;
        // 12 slots x 9 frames = 108 rendering ticks.
        for _ in 0..108 {
            assert_eq!(sequencer.tick(&mut frame), TickOutcome::Rendered);
        }
        assert_eq!(sequencer.counter(), 108);

        // Tick 109: past the last slot, direction advances, no render.
        assert_eq!(
            sequencer.tick(&mut frame),
            TickOutcome::DirectionChanged(Direction::Right)
        );
        assert_eq!(sequencer.counter(), 0);

        // Tick 110 starts the heart over in the new direction with the
        // blank buffer frame.
        assert_eq!(sequencer.tick(&mut frame), TickOutcome::Rendered);
        assert_eq!(sequencer.direction(), Direction::Right);
        assert_eq!(sequencer.counter(), 1);
    }

    #[test]
    fn test_trailing_blank_clears_display() {
        // The last playlist slot is the blank glyph, so the final frame
        // before a direction change shows nothing.
        let mut sequencer = Sequencer::message();
        let mut frame = Bitmap::BLANK;
        for _ in 0..108 {
            sequencer.tick(&mut frame);
        }
        assert!(frame.is_blank());
    }

    #[test]
    fn test_directions_cycle_forever() {
        let mut sequencer = heart_only(Direction::Left);
        let mut frame = Bitmap::BLANK;
        let mut changes = [sequencer.direction(); 4];
        let mut seen = 0;
        while seen < 4 {
            if let TickOutcome::DirectionChanged(direction) = sequencer.tick(&mut frame) {
                changes[seen] = direction;
                seen += 1;
            }
        }
        assert_eq!(
            changes,
            [
                Direction::Right,
                Direction::Up,
                Direction::Down,
                Direction::Left
            ]
        );
    }

    #[test]
    fn test_tick_divider() {
        let mut divider = TickDivider::new(2);
        assert!(!divider.advance());
        assert!(divider.advance());
        assert!(!divider.advance());
        assert!(divider.advance());

        // Degenerate period fires every tick.
        let mut every = TickDivider::new(0);
        assert!(every.advance());
        assert!(every.advance());
    }
}
