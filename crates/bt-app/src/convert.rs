use std::io::Write;
use std::sync::atomic::AtomicBool;

use bt_braille::{Compositor, render_animation};
use bt_core::error::ConvertError;
use bt_core::frame::{Animation, Art};
use bt_core::request::ConvertRequest;
use bt_source::{GifSource, load_image, resize_to_width};

use crate::output;
use crate::playback::{PlaybackOutcome, Player};

/// Résultat d'une conversion, avant livraison.
#[derive(Debug)]
pub enum Conversion {
    Still(Art),
    Animated(Animation),
}

/// Validate, decode and convert the request's input.
///
/// Validation runs first, so an unsupported combination never touches
/// the input file.
///
/// # Errors
/// [`ConvertError::UnsupportedCombination`] for an invalid request,
/// decode errors from the source, [`ConvertError::Unexpected`] otherwise.
pub fn convert(request: &ConvertRequest) -> Result<Conversion, ConvertError> {
    request.validate()?;
    log::info!("Generating...");

    let config = &request.config;
    let compositor = Compositor::from_config(config);
    log::debug!(
        "Palette {}, seuil {}",
        compositor.palette().name(),
        compositor.threshold()
    );

    let conversion = if config.animated {
        let mut source = GifSource::open(&request.input)?;
        Conversion::Animated(render_animation(&mut source, &compositor, config.repeat)?)
    } else {
        let mut image = load_image(&request.input)?;
        if !image.is_empty() {
            image = resize_to_width(&image, config.target_width())?;
        }
        Conversion::Still(compositor.render(&image))
    };

    log::info!("Generated!");
    Ok(conversion)
}

/// Save, print or play a conversion.
///
/// # Errors
/// [`ConvertError::Unexpected`] on an output failure.
pub fn deliver<W: Write>(
    conversion: &Conversion,
    request: &ConvertRequest,
    stop: &AtomicBool,
    out: &mut W,
) -> Result<PlaybackOutcome, ConvertError> {
    match conversion {
        Conversion::Still(art) => {
            match &request.output {
                Some(path) => output::save_art(art, path)?,
                None => output::print_art(art, out)?,
            }
            Ok(PlaybackOutcome::Finished)
        }
        Conversion::Animated(animation) => {
            Ok(Player::new(stop, request.config.in_place).play(animation, out)?)
        }
    }
}
