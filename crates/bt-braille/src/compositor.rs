use bt_core::config::ConvertConfig;
use bt_core::frame::{Art, ArtLine, FrameBuffer, StyledGlyph};
use bt_core::palette::Palette;
use rayon::prelude::*;

use crate::braille::encode_cell;
use crate::color_map::map_color;
use crate::sampler::sample_cell;

/// Dimensions de la grille braille `(colonnes, lignes)` pour une image.
///
/// # Example
/// ```
/// use bt_braille::compositor::grid_size;
/// assert_eq!(grid_size(5, 9), (3, 3));
/// assert_eq!(grid_size(4, 4), (2, 1));
/// ```
#[must_use]
pub fn grid_size(width: u32, height: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }
    (width.div_ceil(2), height.div_ceil(4))
}

/// Compositor assemble une image en art braille, cellule par cellule.
///
/// # Example
/// ```
/// use bt_braille::compositor::Compositor;
/// use bt_core::frame::FrameBuffer;
/// use bt_core::palette::Palette;
///
/// let c = Compositor::new(Palette::NoStyle, 128);
/// let art = c.render(&FrameBuffer::filled(4, 8, (255, 255, 255)));
/// assert_eq!(art.to_string(), "⣿⣿\n⣿⣿");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Compositor {
    palette: Palette,
    threshold: u8,
}

impl Compositor {
    /// Create a compositor with a palette and a luminance threshold.
    #[must_use]
    pub fn new(palette: Palette, threshold: u8) -> Self {
        Self { palette, threshold }
    }

    /// Compositor for the palette and threshold of a config.
    #[must_use]
    pub fn from_config(config: &ConvertConfig) -> Self {
        Self::new(config.mode.palette(), config.threshold())
    }

    /// Active palette.
    #[must_use]
    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Active threshold.
    #[must_use]
    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Convert a whole frame. Rows are computed in parallel, in order.
    ///
    /// A frame without pixels gives an empty art.
    #[must_use]
    pub fn render(&self, frame: &FrameBuffer) -> Art {
        let (cols, rows) = grid_size(frame.width, frame.height);
        log::debug!(
            "Braille {}×{} px → {cols}×{rows} cellules ({})",
            frame.width,
            frame.height,
            self.palette.name()
        );

        let lines = (0..rows)
            .into_par_iter()
            .map(|cy| self.render_line(frame, cy, cols))
            .collect();
        Art { lines }
    }

    /// Convert one row of cells.
    #[must_use]
    pub fn render_line(&self, frame: &FrameBuffer, cy: u32, cols: u32) -> ArtLine {
        let cells = (0..cols).map(|cx| self.render_cell(frame, cx, cy)).collect();
        ArtLine { cells }
    }

    /// Sampler → encodeur → quantizer pour une cellule.
    #[inline]
    #[must_use]
    pub fn render_cell(&self, frame: &FrameBuffer, cx: u32, cy: u32) -> StyledGlyph {
        let sample = sample_cell(frame, cx, cy);
        let glyph = encode_cell(&sample, self.threshold);
        let (style, reset) = map_color(sample.color, &self.palette);
        StyledGlyph {
            style,
            glyph,
            reset,
        }
    }
}
