//! 8x8 bitmap storage
//!
//! Canonical storage is row-major: eight lines, one byte per row, bit `c`
//! of row `r` is the pixel at column `c`. The column-major form is the
//! square transpose of the same content; the shift engine converts to it
//! for horizontal motion so it can always move whole lines.

/// Matrix dimension, rows and columns alike.
pub const SIZE: usize = 8;

/// An 8x8 binary pixel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bitmap([u8; SIZE]);

impl Bitmap {
    /// All pixels off.
    pub const BLANK: Bitmap = Bitmap([0x00; SIZE]);

    /// Build a bitmap from eight row-major lines.
    pub const fn new(lines: [u8; SIZE]) -> Self {
        Self(lines)
    }

    /// Reinterpret row-major content as column-major.
    ///
    /// Bit `r` of output line `c` equals bit `c` of input line `r`.
    pub fn to_column_major(self) -> Self {
        self.transposed()
    }

    /// Exact inverse of [`to_column_major`](Self::to_column_major).
    pub fn to_row_major(self) -> Self {
        self.transposed()
    }

    // Square transpose; its own inverse, so both conversions share it.
    fn transposed(self) -> Self {
        let mut out = [0u8; SIZE];
        for (target, line) in out.iter_mut().enumerate() {
            let mut bits = 0u8;
            for source in 0..SIZE {
                if self.0[source] & (1 << target) != 0 {
                    bits |= 1 << source;
                }
            }
            *line = bits;
        }
        Self(out)
    }

    /// Read one line (a row in row-major form).
    pub fn line(&self, index: usize) -> u8 {
        self.0[index]
    }

    /// Overwrite one line.
    pub fn set_line(&mut self, index: usize, bits: u8) {
        self.0[index] = bits;
    }

    /// Extract one column as a byte, bit `r` = pixel in row `r`.
    ///
    /// Equivalent to `self.to_column_major().line(index)` without
    /// building the full transpose.
    pub fn column(&self, index: usize) -> u8 {
        let mut bits = 0u8;
        for row in 0..SIZE {
            bits |= ((self.0[row] >> index) & 1) << row;
        }
        bits
    }

    /// True if no pixel is set.
    pub fn is_blank(&self) -> bool {
        self.0 == [0x00; SIZE]
    }

    pub(crate) fn lines_mut(&mut self) -> &mut [u8; SIZE] {
        &mut self.0
    }
}

impl Default for Bitmap {
    fn default() -> Self {
        Self::BLANK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_transpose_known_pattern() {
        // Single pixel at row 2, column 5 moves to row 5, column 2.
        let mut bitmap = Bitmap::BLANK;
        bitmap.set_line(2, 1 << 5);

        let transposed = bitmap.to_column_major();
        assert_eq!(transposed.line(5), 1 << 2);
        for line in (0..SIZE).filter(|&l| l != 5) {
            assert_eq!(transposed.line(line), 0x00);
        }
    }

    #[test]
    fn test_transpose_diagonal_is_fixed_point() {
        let diagonal = Bitmap::new([0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80]);
        assert_eq!(diagonal.to_column_major(), diagonal);
    }

    #[test]
    fn test_column_matches_transposed_line() {
        let bitmap = Bitmap::new([0x63, 0x73, 0x3f, 0x0f, 0x1f, 0x3b, 0x73, 0x63]);
        let columns = bitmap.to_column_major();
        for index in 0..SIZE {
            assert_eq!(bitmap.column(index), columns.line(index));
        }
    }

    #[test]
    fn test_blank() {
        assert!(Bitmap::BLANK.is_blank());
        assert!(!Bitmap::new([0x00, 0x00, 0x00, 0x10, 0x00, 0x00, 0x00, 0x00]).is_blank());
        assert_eq!(Bitmap::default(), Bitmap::BLANK);
    }

    proptest! {
        #[test]
        fn transpose_is_self_inverse(lines in any::<[u8; 8]>()) {
            let bitmap = Bitmap::new(lines);
            prop_assert_eq!(bitmap.to_column_major().to_row_major(), bitmap);
        }

        #[test]
        fn column_agrees_with_full_transpose(lines in any::<[u8; 8]>(), index in 0usize..8) {
            let bitmap = Bitmap::new(lines);
            prop_assert_eq!(bitmap.column(index), bitmap.to_column_major().line(index));
        }
    }
}
