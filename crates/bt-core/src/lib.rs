//! Types, palettes, and configuration shared by the braillert workspace.
//!
//! This crate holds the pixel buffer, the braille art model, the terminal
//! palettes and the error taxonomy used by the engine and the binary.

pub mod color;
pub mod config;
pub mod error;
pub mod frame;
pub mod palette;
pub mod request;
pub mod traits;

pub use color::Rgb;
pub use config::{ConvertConfig, PaletteMode};
pub use error::{Combination, ConvertError};
pub use frame::{Animation, Art, ArtLine, FrameBuffer, StyledGlyph};
pub use palette::Palette;
pub use request::ConvertRequest;

/// Re-exports pour accès par chemin sémantique.
pub mod art {
    pub use crate::frame::{Animation, Art, ArtLine, StyledGlyph};
}
