use std::borrow::Cow;

use bt_core::color::Rgb;
use bt_core::palette::{ANSI_RESET, DiscretePalette, Palette, PaletteEntry};

/// Map a cell color to its (styling, reset) tokens for the given palette.
///
/// # Example
/// ```
/// use bt_braille::color_map::map_color;
/// use bt_core::color::Rgb;
/// use bt_core::palette::Palette;
/// let (style, reset) = map_color(Rgb::new(200, 50, 50), &Palette::DirectColor);
/// assert_eq!(style, "\x1b[38;2;200;50;50m");
/// assert_eq!(reset, "\x1b[0m");
/// ```
#[must_use]
pub fn map_color(color: Rgb, palette: &Palette) -> (Cow<'static, str>, &'static str) {
    match palette {
        Palette::NoStyle => (Cow::Borrowed(""), ""),
        Palette::DirectColor => (Cow::Owned(truecolor_fg(color)), ANSI_RESET),
        Palette::Discrete(p) => match nearest(p, color) {
            Some(entry) => (Cow::Borrowed(entry.style), p.reset),
            None => (Cow::Borrowed(""), ""),
        },
    }
}

/// Nearest entry by Euclidean RGB distance; the first declared entry wins ties.
///
/// Returns `None` only for a palette without entries.
///
/// # Example
/// ```
/// use bt_braille::color_map::nearest;
/// use bt_core::color::Rgb;
/// use bt_core::palette::COLORAMA;
/// let entry = nearest(&COLORAMA, Rgb::new(250, 10, 10)).unwrap();
/// assert_eq!(entry.name, "light_red");
/// ```
#[must_use]
pub fn nearest(palette: &DiscretePalette, color: Rgb) -> Option<&'static PaletteEntry> {
    palette
        .entries
        .iter()
        .min_by_key(|entry| entry.rgb.distance_sq(color))
}

/// Séquence SGR 24 bits pour la couleur de premier plan.
fn truecolor_fg(color: Rgb) -> String {
    format!("\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bt_core::palette::{COLORAMA, DISCORD};

    static TIED: DiscretePalette = DiscretePalette {
        name: "tied",
        entries: &[
            PaletteEntry { name: "first", rgb: Rgb::new(0, 0, 0), style: "A" },
            PaletteEntry { name: "second", rgb: Rgb::new(20, 0, 0), style: "B" },
        ],
        reset: "R",
    };

    static EMPTY: DiscretePalette = DiscretePalette {
        name: "empty",
        entries: &[],
        reset: "R",
    };

    #[test]
    fn exact_entry_color_selects_that_entry() {
        for palette in [&COLORAMA, &DISCORD] {
            for entry in palette.entries {
                let found = nearest(palette, entry.rgb).unwrap();
                assert_eq!(found.name, entry.name, "palette {}", palette.name);
            }
        }
    }

    #[test]
    fn ties_go_to_first_declared() {
        let entry = nearest(&TIED, Rgb::new(10, 0, 0)).unwrap();
        assert_eq!(entry.name, "first");
        let entry = nearest(&TIED, Rgb::new(11, 0, 0)).unwrap();
        assert_eq!(entry.name, "second");
    }

    #[test]
    fn discrete_uses_shared_reset() {
        let (style, reset) = map_color(Rgb::new(0, 0, 0), &Palette::Discrete(&COLORAMA));
        assert_eq!(style, "\x1b[30m");
        assert_eq!(reset, ANSI_RESET);

        let (style, reset) = map_color(Rgb::new(255, 255, 255), &Palette::Discrete(&DISCORD));
        assert_eq!(style, "\x1b[0;37m");
        assert_eq!(reset, "");
    }

    #[test]
    fn grayscale_has_no_tokens() {
        let (style, reset) = map_color(Rgb::new(1, 2, 3), &Palette::NoStyle);
        assert!(style.is_empty());
        assert!(reset.is_empty());
    }

    #[test]
    fn empty_palette_leaves_glyph_unstyled() {
        assert!(nearest(&EMPTY, Rgb::default()).is_none());
        let (style, reset) = map_color(Rgb::default(), &Palette::Discrete(&EMPTY));
        assert!(style.is_empty() && reset.is_empty());
    }
}
