use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ConvertError;
use crate::palette::{COLORAMA, DISCORD, Palette};

/// Largeur cible par défaut (en pixels) pour les images statiques.
pub const DEFAULT_WIDTH: u32 = 100;

/// Default luminance cutoff. A sub-pixel at or above it is an "on" dot.
pub const DEFAULT_THRESHOLD: u8 = 128;

/// Output mode: which palette colors the art.
///
/// # Example
/// ```
/// use bt_core::config::PaletteMode;
/// let mode: PaletteMode = "discord".parse().unwrap();
/// assert_eq!(mode, PaletteMode::Discord);
/// assert_eq!(PaletteMode::default(), PaletteMode::Rich);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteMode {
    /// 24-bit color for modern terminals.
    #[default]
    Rich,
    /// 16 ANSI colors.
    Colorama,
    /// 8 colors usable in chat code blocks.
    Discord,
    /// Pas de couleur.
    #[serde(alias = "grayscale")]
    Gs,
}

impl PaletteMode {
    /// All modes, in CLI listing order.
    pub const ALL: [Self; 4] = [Self::Rich, Self::Colorama, Self::Discord, Self::Gs];

    /// Palette used for this mode.
    ///
    /// # Example
    /// ```
    /// use bt_core::config::PaletteMode;
    /// use bt_core::palette::Palette;
    /// assert_eq!(PaletteMode::Gs.palette(), Palette::NoStyle);
    /// assert_eq!(PaletteMode::Rich.palette(), Palette::DirectColor);
    /// ```
    #[must_use]
    pub fn palette(self) -> Palette {
        match self {
            Self::Rich => Palette::DirectColor,
            Self::Colorama => Palette::Discrete(&COLORAMA),
            Self::Discord => Palette::Discrete(&DISCORD),
            Self::Gs => Palette::NoStyle,
        }
    }

    /// Name accepted on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rich => "rich",
            Self::Colorama => "colorama",
            Self::Discord => "discord",
            Self::Gs => "gs",
        }
    }
}

impl fmt::Display for PaletteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaletteMode {
    type Err = ConvertError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rich" => Ok(Self::Rich),
            "colorama" => Ok(Self::Colorama),
            "discord" => Ok(Self::Discord),
            "gs" | "grayscale" => Ok(Self::Gs),
            _ => Err(ConvertError::Unexpected(format!(
                "unknown mode '{s}' (expected rich, colorama, discord or gs)"
            ))),
        }
    }
}

/// Paramètres d'une conversion.
///
/// # Example
/// ```
/// use bt_core::config::{ConvertConfig, DEFAULT_THRESHOLD, DEFAULT_WIDTH};
/// let config = ConvertConfig::default();
/// assert_eq!(config.threshold(), DEFAULT_THRESHOLD);
/// assert_eq!(config.target_width(), DEFAULT_WIDTH);
/// assert!(!config.animated);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Palette selection.
    pub mode: PaletteMode,
    /// Width override in pixels (static images only).
    pub width: Option<u32>,
    /// Threshold override.
    pub threshold: Option<u8>,
    /// Treat the input as an animation.
    pub animated: bool,
    /// Loop animation playback.
    pub repeat: bool,
    /// Redraw animation frames over each other.
    pub in_place: bool,
}

impl ConvertConfig {
    /// Effective threshold.
    #[must_use]
    pub fn threshold(&self) -> u8 {
        self.threshold.unwrap_or(DEFAULT_THRESHOLD)
    }

    /// Effective resize width for static images.
    #[must_use]
    pub fn target_width(&self) -> u32 {
        self.width.unwrap_or(DEFAULT_WIDTH)
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    render: Option<RenderSection>,
}

/// Render section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RenderSection {
    mode: Option<PaletteMode>,
    width: Option<u32>,
    threshold: Option<u8>,
    animated: Option<bool>,
    repeat: Option<bool>,
    in_place: Option<bool>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use bt_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("braillert.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<ConvertConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Invalid TOML in {}", path.display()))
}

/// Parse TOML text into a config, missing fields keep their defaults.
///
/// # Errors
/// Returns an error on malformed TOML or unknown keys.
///
/// # Example
/// ```
/// use bt_core::config::{parse_config, PaletteMode};
/// let config = parse_config("[render]\nmode = \"colorama\"\nthreshold = 90\n").unwrap();
/// assert_eq!(config.mode, PaletteMode::Colorama);
/// assert_eq!(config.threshold, Some(90));
/// ```
pub fn parse_config(content: &str) -> Result<ConvertConfig> {
    let file: ConfigFile = toml::from_str(content)?;
    let mut config = ConvertConfig::default();

    if let Some(r) = file.render {
        if let Some(v) = r.mode {
            config.mode = v;
        }
        if let Some(v) = r.width {
            config.width = Some(v);
        }
        if let Some(v) = r.threshold {
            config.threshold = Some(v);
        }
        if let Some(v) = r.animated {
            config.animated = v;
        }
        if let Some(v) = r.repeat {
            config.repeat = v;
        }
        if let Some(v) = r.in_place {
            config.in_place = v;
        }
    }

    log::debug!("Config : {config:?}");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_gives_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, ConvertConfig::default());
    }

    #[test]
    fn partial_render_section_overrides() {
        let config = parse_config("[render]\nwidth = 60\nrepeat = true\nmode = \"grayscale\"\n")
            .unwrap();
        assert_eq!(config.width, Some(60));
        assert!(config.repeat);
        assert_eq!(config.mode, PaletteMode::Gs);
        assert_eq!(config.threshold(), DEFAULT_THRESHOLD);
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        assert!(parse_config("[render]\nthreshold = 300\n").is_err());
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(parse_config("[render]\ncharset = \"abc\"\n").is_err());
    }

    #[test]
    fn load_config_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[render]\nmode = \"discord\"\nin_place = true").unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.mode, PaletteMode::Discord);
        assert!(config.in_place);
    }

    #[test]
    fn load_config_missing_file_errors() {
        let err = load_config(Path::new("/nonexistent/braillert.toml")).unwrap_err();
        assert!(err.to_string().contains("Cannot read"));
    }

    #[test]
    fn mode_names_round_trip() {
        for mode in PaletteMode::ALL {
            assert_eq!(mode.as_str().parse::<PaletteMode>().unwrap(), mode);
        }
        assert!("sepia".parse::<PaletteMode>().is_err());
    }
}
