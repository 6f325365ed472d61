//! One-cell shift engine
//!
//! Shifts move whole lines of an 8x8 bitmap by one cell along one axis.
//! Vertical motion works on row-major storage directly; horizontal motion
//! works on the column-major transpose so the same line-array shift serves
//! both axes. The line vacated at the edge receives a carry byte chosen by
//! [`CarryPolicy`].

use crate::bitmap::{Bitmap, SIZE};

/// Scroll direction across the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Which way the line array itself moves.
///
/// Forward copies line `i + 1` into line `i` (content moves toward
/// index 0); backward is the mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Sense {
    Forward,
    Backward,
}

/// The storage view a direction operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// Row-major lines (Up/Down).
    Rows,
    /// Column-major lines (Left/Right).
    Columns,
}

/// Edge line indices for a direction, in the view its axis selects.
///
/// `carry_source` is the line rolled off (read before the shift when the
/// carry policy reuses it); `carry_dest` is the line vacated by the shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeMap {
    pub carry_source: usize,
    pub carry_dest: usize,
}

/// What to feed into the line vacated by a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CarryPolicy {
    /// Inject all-zero (blank content scrolls in).
    Disabled,
    /// Reuse the line being rolled off: a seamless wrap-around.
    RollSourceEdge,
    /// Inject an externally supplied line, e.g. the next strip of an
    /// incoming glyph.
    Provided(u8),
}

impl Direction {
    pub const fn sense(self) -> Sense {
        match self {
            Direction::Up | Direction::Left => Sense::Forward,
            Direction::Down | Direction::Right => Sense::Backward,
        }
    }

    pub const fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Rows,
            Direction::Left | Direction::Right => Axis::Columns,
        }
    }

    pub const fn edges(self) -> EdgeMap {
        match self {
            Direction::Up | Direction::Left => EdgeMap {
                carry_source: 0,
                carry_dest: SIZE - 1,
            },
            Direction::Down | Direction::Right => EdgeMap {
                carry_source: SIZE - 1,
                carry_dest: 0,
            },
        }
    }

    /// Successor in the rotation cycle: Up, Down, Left, Right, Up, ...
    pub const fn next(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Up,
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Shift the line array by one position in-place.
///
/// Lossy: the line at the far edge keeps its old content (a stale
/// duplicate) until the caller overwrites it with the carry.
pub fn shift_one_step(lines: &mut [u8; SIZE], sense: Sense) {
    match sense {
        Sense::Forward => {
            for index in 0..SIZE - 1 {
                lines[index] = lines[index + 1];
            }
        }
        Sense::Backward => {
            for index in (1..SIZE).rev() {
                lines[index] = lines[index - 1];
            }
        }
    }
}

/// Shift a bitmap one cell in `direction`, feeding the vacated edge per
/// `policy`.
///
/// Exactly one line ends up overwritten with the carry; the remaining
/// seven are a one-cell translation of the previous content.
pub fn shift_with_carry(direction: Direction, bitmap: &mut Bitmap, policy: CarryPolicy) {
    let mut work = match direction.axis() {
        Axis::Rows => *bitmap,
        Axis::Columns => bitmap.to_column_major(),
    };

    let edges = direction.edges();
    // Read the source edge before the shift clobbers it.
    let carry = match policy {
        CarryPolicy::Disabled => 0x00,
        CarryPolicy::RollSourceEdge => work.line(edges.carry_source),
        CarryPolicy::Provided(bits) => bits,
    };

    shift_one_step(work.lines_mut(), direction.sense());
    work.set_line(edges.carry_dest, carry);

    *bitmap = match direction.axis() {
        Axis::Rows => work,
        Axis::Columns => work.to_row_major(),
    };
}
