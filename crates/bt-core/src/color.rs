/// Couleur RGB 8 bits par canal.
///
/// # Example
/// ```
/// use bt_core::color::Rgb;
/// let c = Rgb::new(255, 0, 0);
/// assert_eq!(c.distance_sq(Rgb::new(255, 0, 0)), 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Build a color from its three channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Squared Euclidean distance in RGB space.
    ///
    /// Ordering by squared distance is the same as ordering by distance,
    /// so nearest-color searches never need the square root.
    ///
    /// # Example
    /// ```
    /// use bt_core::color::Rgb;
    /// let black = Rgb::new(0, 0, 0);
    /// let white = Rgb::new(255, 255, 255);
    /// assert_eq!(black.distance_sq(white), 3 * 255 * 255);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn distance_sq(self, other: Self) -> u32 {
        let dr = i32::from(self.r) - i32::from(other.r);
        let dg = i32::from(self.g) - i32::from(other.g);
        let db = i32::from(self.b) - i32::from(other.b);
        (dr * dr + dg * dg + db * db) as u32
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}
