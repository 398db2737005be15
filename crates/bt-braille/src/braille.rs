//! Encodage O(1) d'un motif 2×4 vers un caractère Braille (U+2800).
//!
//! Bits activés :
//! +---+---+
//! | 1 | 4 |
//! +---+---+
//! | 2 | 5 |
//! +---+---+
//! | 3 | 6 |
//! +---+---+
//! | 7 | 8 |
//! +---+---+
//!
//! Dot `n` is bit `n - 1`, so the codepoint is `U+2800 + mask`.

use crate::sampler::CellSample;

/// Braille base codepoint (U+2800).
pub const BRAILLE_BASE: u32 = 0x2800;

/// Build the dot mask of a cell: bit `i` set iff `luma[i] >= threshold`.
///
/// # Example
/// ```
/// use bt_braille::braille::dot_mask;
/// assert_eq!(dot_mask(&[0; 8], 1), 0x00);
/// assert_eq!(dot_mask(&[255; 8], 255), 0xFF);
/// assert_eq!(dot_mask(&[128, 0, 0, 0, 0, 0, 0, 127], 128), 0x01);
/// ```
#[inline(always)]
#[must_use]
pub fn dot_mask(luma: &[u8; 8], threshold: u8) -> u8 {
    let mut mask = 0u8;
    for (i, &l) in luma.iter().enumerate() {
        if l >= threshold {
            mask |= 1 << i;
        }
    }
    mask
}

/// Map un entier 8 bits vers le caractère Braille correspondant.
///
/// # Example
/// ```
/// use bt_braille::braille::encode_braille;
/// assert_eq!(encode_braille(0x00), '\u{2800}'); // empty
/// assert_eq!(encode_braille(0xFF), '\u{28FF}'); // full
/// ```
#[inline(always)]
#[must_use]
pub const fn encode_braille(mask: u8) -> char {
    match char::from_u32(BRAILLE_BASE + mask as u32) {
        Some(c) => c,
        None => '\u{2800}',
    }
}

/// Glyph of a sampled cell. Padding dots are always off.
///
/// # Example
/// ```
/// use bt_core::frame::FrameBuffer;
/// use bt_braille::braille::encode_cell;
/// use bt_braille::sampler::sample_cell;
///
/// let frame = FrameBuffer::filled(2, 4, (255, 255, 255));
/// assert_eq!(encode_cell(&sample_cell(&frame, 0, 0), 0), '\u{28FF}');
/// ```
#[inline(always)]
#[must_use]
pub fn encode_cell(sample: &CellSample, threshold: u8) -> char {
    encode_braille(dot_mask(&sample.luma, threshold) & sample.coverage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn braille_empty_is_blank() {
        assert_eq!(encode_braille(0), '\u{2800}');
    }

    #[test]
    fn braille_full_is_solid() {
        assert_eq!(encode_braille(0xFF), '\u{28FF}');
    }

    #[test]
    fn every_mask_maps_to_its_codepoint() {
        for mask in 0..=255u8 {
            let ch = encode_braille(mask);
            assert_eq!(u32::from(ch), 0x2800 + u32::from(mask), "mask {mask:#04x}");
        }
    }

    #[test]
    fn single_dots_match_unicode_names() {
        // BRAILLE PATTERN DOTS-1, -4, -7, -8
        assert_eq!(encode_braille(0b0000_0001), '⠁');
        assert_eq!(encode_braille(0b0000_1000), '⠈');
        assert_eq!(encode_braille(0b0100_0000), '⡀');
        assert_eq!(encode_braille(0b1000_0000), '⢀');
        // DOTS-123 = colonne gauche sans le point 7
        assert_eq!(encode_braille(0b0000_0111), '⠇');
    }

    #[test]
    fn threshold_is_inclusive() {
        let luma = [100; 8];
        assert_eq!(dot_mask(&luma, 100), 0xFF);
        assert_eq!(dot_mask(&luma, 101), 0x00);
    }

    #[test]
    fn padding_stays_off_even_at_zero_threshold() {
        let sample = CellSample {
            luma: [0; 8],
            coverage: 0b0000_0001,
            color: bt_core::Rgb::default(),
        };
        assert_eq!(encode_cell(&sample, 0), '⠁');
    }
}
