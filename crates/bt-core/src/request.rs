use std::path::PathBuf;

use crate::config::ConvertConfig;
use crate::error::{Combination, ConvertError};

/// A full conversion request: input, optional output file and settings.
///
/// # Example
/// ```
/// use bt_core::config::ConvertConfig;
/// use bt_core::request::ConvertRequest;
///
/// let req = ConvertRequest {
///     input: "cat.png".into(),
///     output: None,
///     config: ConvertConfig::default(),
/// };
/// assert!(req.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertRequest {
    /// Image to convert.
    pub input: PathBuf,
    /// File receiving the art; console when `None`.
    pub output: Option<PathBuf>,
    /// Conversion settings.
    pub config: ConvertConfig,
}

impl ConvertRequest {
    /// Reject option combinations animations cannot honor.
    ///
    /// Must run before decoding: resize is checked before save.
    ///
    /// # Errors
    /// [`ConvertError::UnsupportedCombination`] for an animated request
    /// with a width override or an output file.
    pub fn validate(&self) -> Result<(), ConvertError> {
        if !self.config.animated {
            return Ok(());
        }
        if self.config.width.is_some() {
            return Err(ConvertError::UnsupportedCombination(
                Combination::ResizeAnimation,
            ));
        }
        if self.output.is_some() {
            return Err(ConvertError::UnsupportedCombination(
                Combination::SaveAnimation,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(animated: bool, width: Option<u32>, output: Option<&str>) -> ConvertRequest {
        ConvertRequest {
            input: PathBuf::from("in.gif"),
            output: output.map(PathBuf::from),
            config: ConvertConfig {
                animated,
                width,
                ..ConvertConfig::default()
            },
        }
    }

    #[test]
    fn static_requests_accept_everything() {
        assert!(request(false, Some(80), Some("out.txt")).validate().is_ok());
    }

    #[test]
    fn animated_resize_is_rejected() {
        let err = request(true, Some(80), None).validate().unwrap_err();
        assert!(matches!(
            err,
            ConvertError::UnsupportedCombination(Combination::ResizeAnimation)
        ));
    }

    #[test]
    fn animated_save_is_rejected() {
        let err = request(true, None, Some("out.txt")).validate().unwrap_err();
        assert!(matches!(
            err,
            ConvertError::UnsupportedCombination(Combination::SaveAnimation)
        ));
    }

    #[test]
    fn resize_wins_over_save() {
        let err = request(true, Some(10), Some("out.txt")).validate().unwrap_err();
        assert!(matches!(
            err,
            ConvertError::UnsupportedCombination(Combination::ResizeAnimation)
        ));
    }

    #[test]
    fn plain_animation_is_valid() {
        assert!(request(true, None, None).validate().is_ok());
    }
}
