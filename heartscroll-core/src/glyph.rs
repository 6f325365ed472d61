//! Static glyph constants
//!
//! Each glyph is an immutable 8x8 bitmap. The default message spells
//! "KOCHAM CIE" framed by a heart, with a trailing blank slot.

use crate::bitmap::Bitmap;

/// A named, displayable 8x8 pattern.
#[derive(Debug)]
pub struct Glyph {
    pub name: &'static str,
    pub bitmap: Bitmap,
}

impl Glyph {
    const fn new(name: &'static str, lines: [u8; 8]) -> Self {
        Self {
            name,
            bitmap: Bitmap::new(lines),
        }
    }
}

pub static LETTER_K: Glyph = Glyph::new("K", [0x63, 0x73, 0x3f, 0x0f, 0x1f, 0x3b, 0x73, 0x63]);
pub static LETTER_O: Glyph = Glyph::new("O", [0x3c, 0x7e, 0x66, 0x66, 0x66, 0x66, 0x7e, 0x3c]);
pub static LETTER_C: Glyph = Glyph::new("C", [0x3c, 0x7e, 0x66, 0x06, 0x06, 0x66, 0x7e, 0x3c]);
pub static LETTER_H: Glyph = Glyph::new("H", [0x66, 0x66, 0x66, 0x7e, 0x7e, 0x66, 0x66, 0x66]);
pub static LETTER_A: Glyph = Glyph::new("A", [0x18, 0x3c, 0x66, 0x66, 0x66, 0x7e, 0x7e, 0x66]);
pub static LETTER_M: Glyph = Glyph::new("M", [0x42, 0x66, 0x7e, 0x5a, 0x42, 0x42, 0x42, 0x42]);
pub static LETTER_I: Glyph = Glyph::new("I", [0x7e, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x7e]);
pub static LETTER_E: Glyph = Glyph::new("E", [0x7e, 0x06, 0x06, 0x3e, 0x3e, 0x06, 0x06, 0x7e]);

pub static HEART: Glyph = Glyph::new("heart", [0x00, 0x66, 0xff, 0xff, 0xff, 0x7e, 0x3c, 0x18]);
pub static BLANK: Glyph = Glyph::new("blank", [0x00; 8]);

/// The default playlist. The trailing blank slot is deliberate: it gives
/// the last letter a full scroll-out before the direction changes.
pub static MESSAGE: [&Glyph; 12] = [
    &HEART, &LETTER_K, &LETTER_O, &LETTER_C, &LETTER_H, &LETTER_A, &LETTER_M, &HEART, &LETTER_C,
    &LETTER_I, &LETTER_E, &BLANK,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_spells_kocham_cie() {
        let names: Vec<&str> = MESSAGE.iter().map(|g| g.name).collect();
        assert_eq!(
            names,
            [
                "heart", "K", "O", "C", "H", "A", "M", "heart", "C", "I", "E", "blank"
            ]
        );
    }

    #[test]
    fn test_blank_glyph_is_blank() {
        assert!(BLANK.bitmap.is_blank());
        assert!(!HEART.bitmap.is_blank());
    }
}
