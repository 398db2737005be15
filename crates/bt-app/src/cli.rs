use std::path::PathBuf;

use bt_core::config::{ConvertConfig, PaletteMode};
use bt_core::request::ConvertRequest;
use clap::Parser;

/// braillert: convert images and GIFs to Unicode braille art.
#[derive(Parser, Debug)]
#[command(name = "braillert", version, about, long_about = None)]
pub struct Cli {
    /// Image à convertir (PNG, JPEG, BMP, GIF), e.g. --file-path=./my_folder/test.jpg
    #[arg(short = 'f', long = "file-path")]
    pub file_path: PathBuf,

    /// Palette : rich (truecolor), colorama (16 ANSI), discord (8 couleurs), gs (grayscale).
    #[arg(short, long)]
    pub mode: Option<PaletteMode>,

    /// Largeur de redimensionnement en pixels (images statiques uniquement).
    #[arg(short, long)]
    pub width: Option<u32>,

    /// Fichier où enregistrer l'art, e.g. --out=./test.ansi
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Seuil de luminance [0, 255] : un point est allumé à partir de ce seuil.
    #[arg(short, long)]
    pub threshold: Option<u8>,

    /// Désactive le logo et tous les logs hors erreurs.
    #[arg(short = 'q', long, default_value_t = false)]
    pub disable_logging: bool,

    /// Traiter l'entrée comme une animation GIF.
    #[arg(short, long, default_value_t = false)]
    pub gif: bool,

    /// Rejouer l'animation en boucle jusqu'à Ctrl+C.
    #[arg(short, long, default_value_t = false)]
    pub repeat: bool,

    /// Redessiner chaque frame par-dessus la précédente.
    #[arg(long, default_value_t = false)]
    pub in_place: bool,

    /// Fichier de configuration TOML. Défaut : braillert.toml s'il existe.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Overlay command-line flags on a config loaded from file.
    ///
    /// Flags only ever switch options on; values replace file values.
    #[must_use]
    pub fn apply(&self, mut config: ConvertConfig) -> ConvertConfig {
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(width) = self.width {
            config.width = Some(width);
        }
        if let Some(threshold) = self.threshold {
            config.threshold = Some(threshold);
        }
        config.animated |= self.gif;
        config.repeat |= self.repeat;
        config.in_place |= self.in_place;
        config
    }

    /// Build the conversion request.
    #[must_use]
    pub fn request(&self, config: ConvertConfig) -> ConvertRequest {
        ConvertRequest {
            input: self.file_path.clone(),
            output: self.out.clone(),
            config: self.apply(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("braillert").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn file_path_is_required() {
        assert!(Cli::try_parse_from(["braillert"]).is_err());
    }

    #[test]
    fn short_flags() {
        let cli = parse(&[
            "-f", "cat.png", "-m", "colorama", "-w", "80", "-t", "90", "-o", "a.txt",
        ]);
        assert_eq!(cli.file_path, PathBuf::from("cat.png"));
        assert_eq!(cli.mode, Some(PaletteMode::Colorama));
        assert_eq!(cli.width, Some(80));
        assert_eq!(cli.threshold, Some(90));
        assert_eq!(cli.out, Some(PathBuf::from("a.txt")));
    }

    #[test]
    fn long_flags_with_equals() {
        let cli = parse(&["--file-path=x.gif", "--gif", "--repeat", "--mode=gs", "-q"]);
        assert!(cli.gif && cli.repeat && cli.disable_logging);
        assert_eq!(cli.mode, Some(PaletteMode::Gs));
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(Cli::try_parse_from(["braillert", "-f", "x.png", "-m", "sepia"]).is_err());
    }

    #[test]
    fn threshold_out_of_range_is_rejected() {
        assert!(Cli::try_parse_from(["braillert", "-f", "x.png", "-t", "256"]).is_err());
    }

    #[test]
    fn flags_override_file_config() {
        let file = ConvertConfig {
            mode: PaletteMode::Discord,
            width: Some(40),
            threshold: Some(10),
            repeat: true,
            ..ConvertConfig::default()
        };
        let cli = parse(&["-f", "x.gif", "-g", "-t", "200"]);
        let req = cli.request(file);
        assert_eq!(req.config.mode, PaletteMode::Discord);
        assert_eq!(req.config.width, Some(40));
        assert_eq!(req.config.threshold, Some(200));
        assert!(req.config.animated);
        assert!(req.config.repeat);
        assert_eq!(req.output, None);
    }
}
