use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Option pairs that cannot be used together with animated input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Combination {
    /// A width override was requested for an animation.
    ResizeAnimation,
    /// An output file was requested for an animation.
    SaveAnimation,
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResizeAnimation => f.write_str("Gif resizing is not supported."),
            Self::SaveAnimation => f.write_str("Gif arts saving is not supported."),
        }
    }
}

/// Errors originating from a conversion request.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Mutually exclusive options were requested together.
    #[error("Error! {0}")]
    UnsupportedCombination(Combination),

    /// The input could not be decoded as an image.
    #[error("Error! Cannot decode {path} as an image: {reason}")]
    Decode {
        /// Path that failed to decode.
        path: PathBuf,
        /// Decoder message.
        reason: String,
    },

    /// The animated source decoded but yielded no frames.
    #[error("Error! {path} contains no frames")]
    EmptyAnimation {
        /// Path of the empty animation.
        path: PathBuf,
    },

    /// Anything else: I/O on output, bad configuration, resize failures.
    #[error("Error! Unexpected exception caught: {0}")]
    Unexpected(String),

    /// Playback was interrupted by the user.
    #[error("Interrupted")]
    Interrupted,
}

impl ConvertError {
    /// `true` for a user cancellation, which ends the program cleanly.
    #[must_use]
    pub fn is_interrupt(&self) -> bool {
        matches!(self, Self::Interrupted)
    }
}

impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        Self::Unexpected(err.to_string())
    }
}
