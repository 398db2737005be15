use crate::color::Rgb;

/// Universal SGR reset.
pub const ANSI_RESET: &str = "\x1b[0m";

/// One named color of a discrete palette and the token that selects it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Nom lisible de la couleur.
    pub name: &'static str,
    /// Reference color used for nearest-color search.
    pub rgb: Rgb,
    /// Styling token emitted before a glyph.
    pub style: &'static str,
}

/// Fixed set of colors sharing a single reset token.
#[derive(Debug, PartialEq, Eq)]
pub struct DiscretePalette {
    /// Palette name, for logs.
    pub name: &'static str,
    /// Entries in declaration order; earlier entries win distance ties.
    pub entries: &'static [PaletteEntry],
    /// Reset token emitted after every styled glyph. May be empty.
    pub reset: &'static str,
}

/// Color policy applied to every cell of an art.
///
/// # Example
/// ```
/// use bt_core::palette::{Palette, COLORAMA};
/// let p = Palette::Discrete(&COLORAMA);
/// assert!(p.is_styled());
/// assert!(!Palette::NoStyle.is_styled());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Palette {
    /// Grayscale: glyphs only, no tokens.
    NoStyle,
    /// 24-bit color escape built from the cell color itself.
    DirectColor,
    /// Nearest entry of a predefined palette.
    Discrete(&'static DiscretePalette),
}

impl Palette {
    /// `true` when cells carry styling tokens.
    #[must_use]
    pub fn is_styled(&self) -> bool {
        !matches!(self, Self::NoStyle)
    }

    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::NoStyle => "grayscale",
            Self::DirectColor => "truecolor",
            Self::Discrete(p) => p.name,
        }
    }
}

/// 16 couleurs ANSI de base (30–37, 90–97), valeurs xterm par défaut.
pub static COLORAMA: DiscretePalette = DiscretePalette {
    name: "ansi16",
    entries: &[
        PaletteEntry { name: "black", rgb: Rgb::new(0, 0, 0), style: "\x1b[30m" },
        PaletteEntry { name: "red", rgb: Rgb::new(205, 0, 0), style: "\x1b[31m" },
        PaletteEntry { name: "green", rgb: Rgb::new(0, 205, 0), style: "\x1b[32m" },
        PaletteEntry { name: "yellow", rgb: Rgb::new(205, 205, 0), style: "\x1b[33m" },
        PaletteEntry { name: "blue", rgb: Rgb::new(0, 0, 238), style: "\x1b[34m" },
        PaletteEntry { name: "magenta", rgb: Rgb::new(205, 0, 205), style: "\x1b[35m" },
        PaletteEntry { name: "cyan", rgb: Rgb::new(0, 205, 205), style: "\x1b[36m" },
        PaletteEntry { name: "white", rgb: Rgb::new(229, 229, 229), style: "\x1b[37m" },
        PaletteEntry { name: "light_black", rgb: Rgb::new(127, 127, 127), style: "\x1b[90m" },
        PaletteEntry { name: "light_red", rgb: Rgb::new(255, 0, 0), style: "\x1b[91m" },
        PaletteEntry { name: "light_green", rgb: Rgb::new(0, 255, 0), style: "\x1b[92m" },
        PaletteEntry { name: "light_yellow", rgb: Rgb::new(255, 255, 0), style: "\x1b[93m" },
        PaletteEntry { name: "light_blue", rgb: Rgb::new(92, 92, 255), style: "\x1b[94m" },
        PaletteEntry { name: "light_magenta", rgb: Rgb::new(255, 0, 255), style: "\x1b[95m" },
        PaletteEntry { name: "light_cyan", rgb: Rgb::new(0, 255, 255), style: "\x1b[96m" },
        PaletteEntry { name: "light_white", rgb: Rgb::new(255, 255, 255), style: "\x1b[97m" },
    ],
    reset: ANSI_RESET,
};

/// The eight foreground colors rendered inside ```ansi chat code blocks.
///
/// Each token sets its own color, so no reset is emitted between glyphs.
pub static DISCORD: DiscretePalette = DiscretePalette {
    name: "discord",
    entries: &[
        PaletteEntry { name: "gray", rgb: Rgb::new(79, 84, 92), style: "\x1b[0;30m" },
        PaletteEntry { name: "red", rgb: Rgb::new(220, 50, 47), style: "\x1b[0;31m" },
        PaletteEntry { name: "green", rgb: Rgb::new(133, 153, 0), style: "\x1b[0;32m" },
        PaletteEntry { name: "yellow", rgb: Rgb::new(181, 137, 0), style: "\x1b[0;33m" },
        PaletteEntry { name: "blue", rgb: Rgb::new(38, 139, 210), style: "\x1b[0;34m" },
        PaletteEntry { name: "pink", rgb: Rgb::new(211, 54, 130), style: "\x1b[0;35m" },
        PaletteEntry { name: "cyan", rgb: Rgb::new(42, 161, 152), style: "\x1b[0;36m" },
        PaletteEntry { name: "white", rgb: Rgb::new(255, 255, 255), style: "\x1b[0;37m" },
    ],
    reset: "",
};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_unique_colors(palette: &DiscretePalette) {
        for (i, a) in palette.entries.iter().enumerate() {
            for b in &palette.entries[i + 1..] {
                assert_ne!(a.rgb, b.rgb, "{}: {} et {} identiques", palette.name, a.name, b.name);
            }
        }
    }

    #[test]
    fn palettes_have_distinct_reference_colors() {
        assert_unique_colors(&COLORAMA);
        assert_unique_colors(&DISCORD);
    }

    #[test]
    fn palette_tokens_are_escape_sequences() {
        for entry in COLORAMA.entries.iter().chain(DISCORD.entries) {
            assert!(entry.style.starts_with("\x1b["), "{}", entry.name);
            assert!(entry.style.ends_with('m'), "{}", entry.name);
        }
        assert_eq!(COLORAMA.entries.len(), 16);
        assert_eq!(DISCORD.entries.len(), 8);
    }

    #[test]
    fn palette_names() {
        assert_eq!(Palette::NoStyle.name(), "grayscale");
        assert_eq!(Palette::DirectColor.name(), "truecolor");
        assert_eq!(Palette::Discrete(&DISCORD).name(), "discord");
    }
}
