//! Braille conversion engine for braillert.
//!
//! Samples 2×4 pixel cells, encodes them as braille patterns, colors them
//! with a terminal palette and assembles lines, frames and animations.

pub mod animation;
pub mod braille;
pub mod color_map;
pub mod compositor;
pub mod sampler;

pub use animation::render_animation;
pub use compositor::Compositor;
