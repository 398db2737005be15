use bt_core::error::ConvertError;
use bt_core::frame::FrameBuffer;
use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer as FirResizer};

/// Resizer réutilisable wrappant fast_image_resize, filtre Lanczos3.
///
/// # Example
/// ```
/// use bt_source::resize::Resizer;
/// let r = Resizer::new();
/// ```
pub struct Resizer {
    inner: FirResizer,
    options: ResizeOptions,
    /// Scratch image for source (owned buffer to avoid the mut borrow issue).
    src_buf: Vec<u8>,
}

impl Resizer {
    /// Create a new resizer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: FirResizer::new(),
            options: ResizeOptions::new()
                .resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3)),
            src_buf: Vec::new(),
        }
    }

    /// Resize `src` into `dst`. Dimensions of `dst` determine output size.
    ///
    /// # Errors
    /// [`ConvertError::Unexpected`] if either buffer is empty or the
    /// resize fails.
    ///
    /// # Example
    /// ```
    /// use bt_source::resize::Resizer;
    /// use bt_core::frame::FrameBuffer;
    /// let mut r = Resizer::new();
    /// let src = FrameBuffer::new(100, 100);
    /// let mut dst = FrameBuffer::new(50, 50);
    /// r.resize_into(&src, &mut dst).unwrap();
    /// ```
    pub fn resize_into(
        &mut self,
        src: &FrameBuffer,
        dst: &mut FrameBuffer,
    ) -> Result<(), ConvertError> {
        if src.width == dst.width && src.height == dst.height {
            dst.data.copy_from_slice(&src.data);
            return Ok(());
        }

        // fast_image_resize wants a mutable source slice
        self.src_buf.clear();
        self.src_buf.extend_from_slice(&src.data);

        let src_image =
            Image::from_slice_u8(src.width, src.height, &mut self.src_buf, PixelType::U8x4)
                .map_err(|e| {
                    ConvertError::Unexpected(format!("invalid source dimensions: {e}"))
                })?;

        let mut dst_image =
            Image::from_slice_u8(dst.width, dst.height, &mut dst.data, PixelType::U8x4).map_err(
                |e| ConvertError::Unexpected(format!("invalid destination dimensions: {e}")),
            )?;

        self.inner
            .resize(&src_image, &mut dst_image, Some(&self.options))
            .map_err(|e| ConvertError::Unexpected(format!("resize failed: {e}")))?;

        Ok(())
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Hauteur proportionnelle (tronquée, au moins 1) pour une largeur cible.
///
/// # Example
/// ```
/// use bt_source::resize::proportional_height;
/// assert_eq!(proportional_height(200, 100, 100), 50);
/// assert_eq!(proportional_height(3, 7, 1), 2);
/// assert_eq!(proportional_height(1000, 1, 10), 1);
/// ```
#[must_use]
pub fn proportional_height(width: u32, height: u32, target_width: u32) -> u32 {
    if width == 0 {
        return 0;
    }
    let h = u64::from(height) * u64::from(target_width) / u64::from(width);
    (h as u32).max(1)
}

/// Resize to `target_width`, keeping the aspect ratio.
///
/// # Errors
/// [`ConvertError::Unexpected`] for a zero target width, an empty source,
/// or a resize failure.
///
/// # Example
/// ```
/// use bt_source::resize::resize_to_width;
/// use bt_core::frame::FrameBuffer;
/// let src = FrameBuffer::new(200, 120);
/// let dst = resize_to_width(&src, 100).unwrap();
/// assert_eq!((dst.width, dst.height), (100, 60));
/// ```
pub fn resize_to_width(
    src: &FrameBuffer,
    target_width: u32,
) -> Result<FrameBuffer, ConvertError> {
    if target_width == 0 {
        return Err(ConvertError::Unexpected("width must be positive".to_string()));
    }
    if src.is_empty() {
        return Err(ConvertError::Unexpected("cannot resize an empty image".to_string()));
    }

    let target_height = proportional_height(src.width, src.height, target_width);
    log::debug!(
        "Resize {}×{} → {target_width}×{target_height}",
        src.width,
        src.height
    );

    let mut dst = FrameBuffer::new(target_width, target_height);
    Resizer::new().resize_into(src, &mut dst)?;
    Ok(dst)
}
