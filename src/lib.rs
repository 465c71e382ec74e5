//! Extract a dominant-color palette from an image
//!
//! The quantization itself is delegated to [color_quant]'s NeuQuant network, the
//! same routine the image ecosystem uses for GIF encoding. This crate adds the
//! parts around it: pixel filtering, population ranking, hex formatting and a
//! uniform error type for decode and extraction failures.
//!
//! [color_quant]: https://github.com/image-rs/color_quant

#![deny(missing_docs)]

pub use error::Error;
pub use palette::{Color, Palette};

mod error;
mod palette;

use std::path::Path;

/// Decode the image at `path` and extract a palette of at most `color_count` colors.
///
/// Decode failures and extraction failures surface through the same [`Error`]
/// type, so callers handle both with a single `match`.
pub fn extract_from_path<P: AsRef<Path>>(
    path: P,
    color_count: usize,
    quality: u32,
) -> Result<Palette, Error> {
    let image = image::open(path)?;
    Palette::new(&image, color_count, quality)
}
