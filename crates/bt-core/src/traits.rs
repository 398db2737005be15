use std::time::Duration;

use crate::frame::FrameBuffer;

/// Fournit les frames d'une animation décodée, dans l'ordre de la source.
///
/// Implémenté par : `GifSource`.
///
/// # Example
/// ```
/// use bt_core::traits::AnimationSource;
/// use bt_core::frame::FrameBuffer;
/// use std::time::Duration;
///
/// struct DummySource(Vec<FrameBuffer>);
/// impl AnimationSource for DummySource {
///     fn next_frame(&mut self) -> Option<FrameBuffer> { self.0.pop() }
///     fn frame_delay(&self) -> Duration { Duration::from_millis(100) }
/// }
/// ```
pub trait AnimationSource {
    /// Retourne la prochaine frame, `None` une fois la source épuisée.
    fn next_frame(&mut self) -> Option<FrameBuffer>;

    /// Délai inter-frame déclaré par la source, partagé par toutes les frames.
    fn frame_delay(&self) -> Duration;

    /// Frames restantes, si connu.
    fn len_hint(&self) -> Option<usize> {
        None
    }
}
