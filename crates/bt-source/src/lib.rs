//! Image sources for braillert: static decoding, animated GIF frames and
//! proportional resizing.

pub mod image;
pub mod resize;

pub use crate::image::{GifSource, load_image};
pub use crate::resize::resize_to_width;
