use std::borrow::Cow;
use std::fmt;
use std::time::Duration;

/// Buffer de pixels décodé, immuable pendant la conversion.
///
/// Stocke les pixels en RGBA row-major, 4 bytes par pixel.
///
/// # Example
/// ```
/// use bt_core::frame::FrameBuffer;
/// let fb = FrameBuffer::new(10, 10);
/// assert_eq!(fb.data.len(), 400);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    /// Pixels RGBA, row-major, 4 bytes par pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl FrameBuffer {
    /// Crée un buffer noir transparent aux dimensions données.
    ///
    /// # Example
    /// ```
    /// use bt_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::new(100, 50);
    /// assert_eq!(fb.width, 100);
    /// assert_eq!(fb.height, 50);
    /// assert_eq!(fb.data.len(), 100 * 50 * 4);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; width as usize * height as usize * 4],
            width,
            height,
        }
    }

    /// Buffer rempli d'une seule couleur opaque.
    ///
    /// # Example
    /// ```
    /// use bt_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::filled(2, 2, (10, 20, 30));
    /// assert_eq!(fb.pixel(1, 1), (10, 20, 30, 255));
    /// ```
    #[must_use]
    pub fn filled(width: u32, height: u32, (r, g, b): (u8, u8, u8)) -> Self {
        let data = [r, g, b, 255].repeat(width as usize * height as usize);
        Self { data, width, height }
    }

    /// `true` if the buffer has no pixels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Accès au pixel (x, y) → (r, g, b, a).
    ///
    /// # Example
    /// ```
    /// use bt_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::new(10, 10);
    /// let (r, g, b, a) = fb.pixel(0, 0);
    /// assert_eq!((r, g, b, a), (0, 0, 0, 0));
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        if idx + 3 >= self.data.len() {
            return (0, 0, 0, 0);
        }
        (
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        )
    }

    /// Écrit le pixel (x, y). Hors limites : no-op.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, (r, g, b, a): (u8, u8, u8, u8)) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.data[idx..idx + 4].copy_from_slice(&[r, g, b, a]);
    }

    /// Luminance perceptuelle BT.709. Alpha is ignored.
    ///
    /// # Example
    /// ```
    /// use bt_core::frame::FrameBuffer;
    /// let mut fb = FrameBuffer::new(1, 1);
    /// fb.data[0] = 255; fb.data[1] = 255; fb.data[2] = 255; fb.data[3] = 255;
    /// assert_eq!(fb.luminance(0, 0), 255);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn luminance(&self, x: u32, y: u32) -> u8 {
        let (r, g, b, _) = self.pixel(x, y);
        ((u32::from(r) * 2126 + u32::from(g) * 7152 + u32::from(b) * 722) / 10000) as u8
    }
}

/// Un glyphe braille avec ses tokens de style optionnels.
///
/// # Example
/// ```
/// use bt_core::frame::StyledGlyph;
/// let g = StyledGlyph::plain('\u{28FF}');
/// assert_eq!(g.to_string(), "\u{28FF}");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyledGlyph {
    /// Token emitted before the glyph. Empty when unstyled.
    pub style: Cow<'static, str>,
    /// Braille pattern character.
    pub glyph: char,
    /// Token emitted after the glyph. Empty when unstyled.
    pub reset: &'static str,
}

impl StyledGlyph {
    /// Glyph without any styling.
    #[must_use]
    pub fn plain(glyph: char) -> Self {
        Self {
            style: Cow::Borrowed(""),
            glyph,
            reset: "",
        }
    }
}

impl fmt::Display for StyledGlyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.style)?;
        write!(f, "{}", self.glyph)?;
        f.write_str(self.reset)
    }
}

/// One row of cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArtLine {
    /// Cells left to right.
    pub cells: Vec<StyledGlyph>,
}

impl ArtLine {
    /// Bare glyphs of the line, styling stripped.
    #[must_use]
    pub fn glyphs(&self) -> String {
        self.cells.iter().map(|c| c.glyph).collect()
    }
}

impl fmt::Display for ArtLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{cell}")?;
        }
        Ok(())
    }
}

/// Art complet : lignes de glyphes, sérialisées avec `\n` entre lignes.
///
/// # Example
/// ```
/// use bt_core::frame::{Art, ArtLine, StyledGlyph};
/// let line = ArtLine { cells: vec![StyledGlyph::plain('\u{2800}'); 3] };
/// let art = Art { lines: vec![line.clone(), line] };
/// assert_eq!(art.height(), 2);
/// assert_eq!(art.width(), 3);
/// assert_eq!(art.to_string().lines().count(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Art {
    /// Lines top to bottom.
    pub lines: Vec<ArtLine>,
}

impl Art {
    /// Number of lines.
    #[must_use]
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Glyphs per line (0 for an empty art).
    #[must_use]
    pub fn width(&self) -> usize {
        self.lines.first().map_or(0, |l| l.cells.len())
    }

    /// `true` if the art has no glyph at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|l| l.cells.is_empty())
    }

    /// Iterate over every glyph in row-major order.
    pub fn glyphs(&self) -> impl Iterator<Item = char> + '_ {
        self.lines.iter().flat_map(|l| l.cells.iter().map(|c| c.glyph))
    }
}

impl fmt::Display for Art {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Séquence d'arts jouable en boucle, avec un délai partagé.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Animation {
    /// Frames in source order. Never empty for a decoded source.
    pub frames: Vec<Art>,
    /// Pause between two frames.
    pub frame_delay: Duration,
    /// Loop playback until interrupted.
    pub repeat: bool,
}
