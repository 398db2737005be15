use std::io::Write;
use std::path::Path;

use bt_core::error::ConvertError;
use bt_core::frame::Art;

/// Écrit l'art en UTF-8 dans `path`, escapes compris.
///
/// # Errors
/// [`ConvertError::Unexpected`] if the file cannot be written.
pub fn save_art(art: &Art, path: &Path) -> Result<(), ConvertError> {
    std::fs::write(path, art.to_string()).map_err(|e| {
        ConvertError::Unexpected(format!("cannot write {}: {e}", path.display()))
    })?;
    log::info!("Saved to -> {}", path.display());
    Ok(())
}

/// Print the art followed by a newline, in one write.
///
/// # Errors
/// Propagates the sink's I/O error.
pub fn print_art<W: Write>(art: &Art, out: &mut W) -> std::io::Result<()> {
    let mut text = art.to_string();
    text.push('\n');
    out.write_all(text.as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bt_core::frame::{ArtLine, StyledGlyph};
    use std::borrow::Cow;

    fn art() -> Art {
        let styled = StyledGlyph {
            style: Cow::Borrowed("\x1b[31m"),
            glyph: '⣿',
            reset: "\x1b[0m",
        };
        Art {
            lines: vec![
                ArtLine {
                    cells: vec![styled, StyledGlyph::plain('⠁')],
                },
                ArtLine {
                    cells: vec![StyledGlyph::plain('⠉')],
                },
            ],
        }
    }

    #[test]
    fn saved_file_matches_console_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("art.ansi");
        save_art(&art(), &path).unwrap();

        let saved = std::fs::read_to_string(&path).unwrap();
        assert_eq!(saved, "\x1b[31m⣿\x1b[0m⠁\n⠉");

        let mut console = Vec::new();
        print_art(&art(), &mut console).unwrap();
        assert_eq!(String::from_utf8(console).unwrap(), format!("{saved}\n"));
    }

    #[test]
    fn unwritable_path_is_unexpected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("art.txt");
        assert!(matches!(
            save_art(&art(), &path),
            Err(ConvertError::Unexpected(_))
        ));
    }
}
