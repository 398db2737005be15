use bt_core::color::Rgb;
use bt_core::frame::FrameBuffer;

/// Sub-pixel offset `(dx, dy)` of each braille dot bit inside a 2×4 cell.
///
/// Bit `i` of a dot mask lights the dot at `DOT_OFFSETS[i]`:
/// ```text
///  bit0 bit3
///  bit1 bit4
///  bit2 bit5
///  bit6 bit7
/// ```
pub const DOT_OFFSETS: [(u32, u32); 8] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 0),
    (1, 1),
    (1, 2),
    (0, 3),
    (1, 3),
];

/// Ce que l'encodeur et le quantizer ont besoin de savoir d'une cellule 2×4.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellSample {
    /// Luminance per dot bit. Padding positions hold 0.
    pub luma: [u8; 8],
    /// Bit `i` set when dot `i` lies inside the image.
    pub coverage: u8,
    /// Mean color of the in-bounds pixels.
    pub color: Rgb,
}

/// Sample the cell at column `cell_x`, row `cell_y` of the 2×4 grid.
///
/// Pixels past the right or bottom edge are padding: they stay out of
/// `coverage` and out of the color average.
///
/// # Example
/// ```
/// use bt_core::frame::FrameBuffer;
/// use bt_braille::sampler::sample_cell;
///
/// let frame = FrameBuffer::filled(3, 5, (255, 255, 255));
/// let edge = sample_cell(&frame, 1, 1);
/// assert_eq!(edge.coverage, 0b0000_0001);
/// assert_eq!(edge.luma[0], 255);
/// ```
#[must_use]
pub fn sample_cell(frame: &FrameBuffer, cell_x: u32, cell_y: u32) -> CellSample {
    let base_x = cell_x * 2;
    let base_y = cell_y * 4;

    let mut luma = [0u8; 8];
    let mut coverage = 0u8;
    let mut sum_r = 0u32;
    let mut sum_g = 0u32;
    let mut sum_b = 0u32;
    let mut count = 0u32;

    for (bit, &(dx, dy)) in DOT_OFFSETS.iter().enumerate() {
        let px = base_x + dx;
        let py = base_y + dy;
        if px >= frame.width || py >= frame.height {
            continue;
        }

        luma[bit] = frame.luminance(px, py);
        coverage |= 1 << bit;

        let (r, g, b, _) = frame.pixel(px, py);
        sum_r += u32::from(r);
        sum_g += u32::from(g);
        sum_b += u32::from(b);
        count += 1;
    }

    let color = if count > 0 {
        Rgb::new(
            (sum_r / count) as u8,
            (sum_g / count) as u8,
            (sum_b / count) as u8,
        )
    } else {
        Rgb::default()
    };

    CellSample {
        luma,
        coverage,
        color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cell_covers_every_dot() {
        let frame = FrameBuffer::filled(2, 4, (10, 20, 30));
        let s = sample_cell(&frame, 0, 0);
        assert_eq!(s.coverage, 0xFF);
        assert_eq!(s.color, Rgb::new(10, 20, 30));
    }

    #[test]
    fn dot_order_follows_offsets() {
        // Only the bottom-right pixel is white: that is dot 8, bit 7.
        let mut frame = FrameBuffer::filled(2, 4, (0, 0, 0));
        frame.set_pixel(1, 3, (255, 255, 255, 255));
        let s = sample_cell(&frame, 0, 0);
        assert_eq!(s.luma, [0, 0, 0, 0, 0, 0, 0, 255]);

        // Bottom-left is dot 7, bit 6.
        let mut frame = FrameBuffer::filled(2, 4, (0, 0, 0));
        frame.set_pixel(0, 3, (255, 255, 255, 255));
        assert_eq!(sample_cell(&frame, 0, 0).luma[6], 255);
    }

    #[test]
    fn padding_does_not_darken_average() {
        // 1 pixel de large : la colonne droite est du padding.
        let frame = FrameBuffer::filled(1, 4, (200, 100, 50));
        let s = sample_cell(&frame, 0, 0);
        assert_eq!(s.coverage, 0b0100_0111);
        assert_eq!(s.color, Rgb::new(200, 100, 50));
    }

    #[test]
    fn average_is_arithmetic_mean() {
        let mut frame = FrameBuffer::filled(2, 4, (0, 0, 0));
        for y in 0..4 {
            frame.set_pixel(0, y, (255, 255, 255, 255));
        }
        let s = sample_cell(&frame, 0, 0);
        assert_eq!(s.color, Rgb::new(127, 127, 127));
    }

    #[test]
    fn alpha_is_ignored() {
        let mut frame = FrameBuffer::new(2, 4);
        for y in 0..4 {
            for x in 0..2 {
                frame.set_pixel(x, y, (255, 255, 255, 0));
            }
        }
        let s = sample_cell(&frame, 0, 0);
        assert!(s.luma.iter().all(|&l| l == 255));
    }
}
