use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use bt_core::error::ConvertError;
use bt_core::frame::FrameBuffer;
use bt_core::traits::AnimationSource;
use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, ImageFormat, ImageReader, RgbaImage};

fn decode_error(path: &Path, err: impl std::fmt::Display) -> ConvertError {
    ConvertError::Decode {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}

fn to_frame(rgba: RgbaImage) -> FrameBuffer {
    let (width, height) = rgba.dimensions();
    FrameBuffer {
        data: rgba.into_raw(),
        width,
        height,
    }
}

/// Décode une image statique en RGBA.
///
/// The format is sniffed from the content, not the extension. For an
/// animated file only the first frame is returned.
///
/// # Errors
/// [`ConvertError::Decode`] if the file cannot be opened or decoded.
///
/// # Example
/// ```no_run
/// use bt_source::image::load_image;
/// use std::path::Path;
/// let frame = load_image(Path::new("test.png")).unwrap();
/// ```
pub fn load_image(path: &Path) -> Result<FrameBuffer, ConvertError> {
    let img = ImageReader::open(path)
        .map_err(|e| decode_error(path, e))?
        .with_guessed_format()
        .map_err(|e| decode_error(path, e))?
        .decode()
        .map_err(|e| decode_error(path, e))?;
    let frame = to_frame(img.to_rgba8());
    log::debug!("{} décodée : {}×{}", path.display(), frame.width, frame.height);
    Ok(frame)
}

/// Source animée : toutes les frames sont décodées à l'ouverture.
///
/// # Example
/// ```
/// use bt_core::frame::FrameBuffer;
/// use bt_core::traits::AnimationSource;
/// use bt_source::image::GifSource;
/// use std::time::Duration;
///
/// let mut src = GifSource::from_frames(vec![FrameBuffer::new(2, 4)], Duration::from_millis(50));
/// assert_eq!(src.frame_delay(), Duration::from_millis(50));
/// assert!(src.next_frame().is_some());
/// assert!(src.next_frame().is_none());
/// ```
pub struct GifSource {
    frames: std::vec::IntoIter<FrameBuffer>,
    delay: Duration,
}

impl GifSource {
    /// Decode an animation from disk.
    ///
    /// GIF files yield every composited frame and the delay declared by the
    /// first one. Any other image opens as a single frame with no delay.
    ///
    /// # Errors
    /// [`ConvertError::Decode`] if decoding fails,
    /// [`ConvertError::EmptyAnimation`] if the GIF holds no frame.
    pub fn open(path: &Path) -> Result<Self, ConvertError> {
        let format = ImageReader::open(path)
            .map_err(|e| decode_error(path, e))?
            .with_guessed_format()
            .map_err(|e| decode_error(path, e))?
            .format();

        if format != Some(ImageFormat::Gif) {
            log::info!(
                "{} n'est pas un GIF, conversion en animation d'une frame",
                path.display()
            );
            return Ok(Self::from_frames(vec![load_image(path)?], Duration::ZERO));
        }

        let file = File::open(path).map_err(|e| decode_error(path, e))?;
        let decoder = GifDecoder::new(BufReader::new(file)).map_err(|e| decode_error(path, e))?;
        let frames = decoder
            .into_frames()
            .collect_frames()
            .map_err(|e| decode_error(path, e))?;

        let Some(first) = frames.first() else {
            return Err(ConvertError::EmptyAnimation {
                path: path.to_path_buf(),
            });
        };
        let delay = Duration::from(first.delay());

        let frames: Vec<FrameBuffer> = frames
            .into_iter()
            .map(|f| to_frame(f.into_buffer()))
            .collect();
        log::debug!("{} : {} frames, délai {delay:?}", path.display(), frames.len());
        Ok(Self::from_frames(frames, delay))
    }

    /// Wrap already decoded frames.
    #[must_use]
    pub fn from_frames(frames: Vec<FrameBuffer>, delay: Duration) -> Self {
        Self {
            frames: frames.into_iter(),
            delay,
        }
    }
}

impl AnimationSource for GifSource {
    fn next_frame(&mut self) -> Option<FrameBuffer> {
        self.frames.next()
    }

    fn frame_delay(&self) -> Duration {
        self.delay
    }

    fn len_hint(&self) -> Option<usize> {
        Some(self.frames.len())
    }
}
