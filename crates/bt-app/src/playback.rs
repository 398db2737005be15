use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use bt_core::frame::Animation;
use crossterm::{cursor, queue};

/// Granularité de l'attente : borne la latence d'un Ctrl+C pendant un délai.
const WAIT_SLICE: Duration = Duration::from_millis(20);

/// Fin de lecture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackOutcome {
    /// Every frame was shown (single pass).
    Finished,
    /// The stop flag was raised; playback stopped on a frame boundary.
    Interrupted,
}

/// Joue une animation sur un sink texte.
///
/// Each frame is written whole then flushed, so an interrupt never leaves
/// half a frame on screen.
pub struct Player<'a> {
    stop: &'a AtomicBool,
    in_place: bool,
}

impl<'a> Player<'a> {
    #[must_use]
    pub fn new(stop: &'a AtomicBool, in_place: bool) -> Self {
        Self { stop, in_place }
    }

    /// Play `animation` on `out`, looping while `animation.repeat` is set.
    ///
    /// # Errors
    /// Propagates the sink's I/O error.
    pub fn play<W: Write>(
        &self,
        animation: &Animation,
        out: &mut W,
    ) -> io::Result<PlaybackOutcome> {
        if animation.frames.is_empty() {
            return Ok(PlaybackOutcome::Finished);
        }
        if self.in_place {
            queue!(out, cursor::Hide)?;
        }
        let outcome = self.run(animation, out);
        if self.in_place {
            queue!(out, cursor::Show)?;
            out.flush()?;
        }
        outcome
    }

    fn run<W: Write>(
        &self,
        animation: &Animation,
        out: &mut W,
    ) -> io::Result<PlaybackOutcome> {
        let mut drawn_lines: u16 = 0;
        loop {
            for frame in &animation.frames {
                if self.stopped() {
                    return Ok(PlaybackOutcome::Interrupted);
                }
                if self.in_place && drawn_lines > 0 {
                    queue!(out, cursor::MoveToPreviousLine(drawn_lines))?;
                }
                let mut text = frame.to_string();
                text.push('\n');
                out.write_all(text.as_bytes())?;
                out.flush()?;
                drawn_lines = u16::try_from(frame.height().max(1)).unwrap_or(u16::MAX);

                if !self.wait(animation.frame_delay) {
                    return Ok(PlaybackOutcome::Interrupted);
                }
            }
            if !animation.repeat {
                return Ok(PlaybackOutcome::Finished);
            }
        }
    }

    /// Sleep `delay` in short slices. `false` if stopped meanwhile.
    fn wait(&self, delay: Duration) -> bool {
        let deadline = Instant::now() + delay;
        loop {
            if self.stopped() {
                return false;
            }
            let now = Instant::now();
            if now >= deadline {
                return true;
            }
            std::thread::sleep((deadline - now).min(WAIT_SLICE));
        }
    }

    fn stopped(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }
}
