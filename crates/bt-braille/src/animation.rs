use bt_core::error::ConvertError;
use bt_core::frame::Animation;
use bt_core::traits::AnimationSource;

use crate::compositor::Compositor;

/// Convert every frame of a source, in order, into an [`Animation`].
///
/// Frames are converted as decoded, without resizing. The delay is read
/// once from the source and shared by all frames.
///
/// # Errors
/// Returns [`ConvertError::Unexpected`] if the source yields no frame.
///
/// # Example
/// ```
/// use bt_braille::animation::render_animation;
/// use bt_braille::compositor::Compositor;
/// use bt_core::frame::FrameBuffer;
/// use bt_core::palette::Palette;
/// use bt_core::traits::AnimationSource;
/// use std::time::Duration;
///
/// struct Frames(std::vec::IntoIter<FrameBuffer>);
/// impl AnimationSource for Frames {
///     fn next_frame(&mut self) -> Option<FrameBuffer> { self.0.next() }
///     fn frame_delay(&self) -> Duration { Duration::from_millis(40) }
/// }
///
/// let mut src = Frames(vec![FrameBuffer::new(2, 4); 3].into_iter());
/// let anim = render_animation(&mut src, &Compositor::new(Palette::NoStyle, 128), false).unwrap();
/// assert_eq!(anim.frames.len(), 3);
/// ```
pub fn render_animation<S: AnimationSource + ?Sized>(
    source: &mut S,
    compositor: &Compositor,
    repeat: bool,
) -> Result<Animation, ConvertError> {
    let frame_delay = source.frame_delay();
    let mut frames = Vec::with_capacity(source.len_hint().unwrap_or(0));

    while let Some(frame) = source.next_frame() {
        frames.push(compositor.render(&frame));
    }

    if frames.is_empty() {
        return Err(ConvertError::Unexpected(
            "animation source yielded no frames".to_string(),
        ));
    }

    log::debug!("{} frames converties, délai {frame_delay:?}", frames.len());
    Ok(Animation {
        frames,
        frame_delay,
        repeat,
    })
}
