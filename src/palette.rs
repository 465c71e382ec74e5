use std::cmp::Reverse;
use std::fmt;
use std::ops::Range;

use color_quant::NeuQuant;
use image::{GenericImageView, Pixel, Rgb, Rgba};
use itertools::Itertools;

#[cfg(feature = "print-truecolor")]
use termion::color;

use crate::Error;

const COLOR_COUNT_RANGE: Range<usize> = 1..257;
const QUALITY_RANGE: Range<u32> = 1..31;

// The network always runs at full size; the requested count only truncates
// the ranked result. Small counts would otherwise starve NeuQuant.
const NETWORK_SIZE: usize = 256;

/// Palette of colors, most populous first.
#[derive(Debug, Default)]
pub struct Palette {
    /// Colors with their pixel populations
    pub colors: Vec<Color>,
}

/// Color with population
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub struct Color {
    /// Color
    pub color: Rgb<u8>,
    /// Number of pixels mapped onto this color
    pub population: usize,
}

impl Palette {
    /// Extract a palette of at most `color_count` colors from an image.
    ///
    /// Quality is given straight to [color_quant] as its sample factor, values
    /// should be between 1 and 30. (By the way: 10 is a good default.) Images
    /// with fewer distinct quantized colors than `color_count` produce a
    /// shorter palette; they are never padded.
    ///
    /// [color_quant]: https://github.com/image-rs/color_quant
    pub fn new<I, P>(image: &I, color_count: usize, quality: u32) -> Result<Palette, Error>
    where
        P: Pixel<Subpixel = u8> + 'static,
        I: GenericImageView<Pixel = P>,
    {
        if !COLOR_COUNT_RANGE.contains(&color_count) {
            return Err(Error::ColorCountOutOfBounds(color_count, COLOR_COUNT_RANGE));
        }
        if !QUALITY_RANGE.contains(&quality) {
            return Err(Error::QualityOutOfBounds(quality, QUALITY_RANGE));
        }

        let mut flat_pixels: Vec<u8> =
            Vec::with_capacity(4 * image.width() as usize * image.height() as usize);
        for (_, _, pixel) in image.pixels() {
            let rgba = pixel.to_rgba();
            if is_boring_pixel(&rgba) {
                continue;
            }
            flat_pixels.extend_from_slice(&rgba.0);
        }

        if flat_pixels.is_empty() {
            return Err(Error::NoVisiblePixels);
        }

        let quantize = NeuQuant::new(quality as i32, NETWORK_SIZE, &flat_pixels);

        let pixel_counts = flat_pixels
            .chunks_exact(4)
            .map(|rgba| quantize.index_of(rgba))
            .counts();

        let mut colors: Vec<Color> = quantize
            .color_map_rgb()
            .chunks_exact(3)
            .enumerate()
            .flat_map(|(i, rgb)| pixel_counts.get(&i).map(|&count| (count, rgb)))
            .map(|(count, rgb)| Color {
                color: *Rgb::from_slice(rgb),
                population: count,
            })
            .unique_by(|c| c.color)
            .collect();

        // Stable sort keeps the quantizer's map order between equal
        // populations, so repeated runs print identical palettes.
        colors.sort_by_key(|c| Reverse(c.population));
        colors.truncate(color_count);

        Ok(Palette { colors })
    }

    /// Number of colors in the palette.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette holds no colors at all.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Hex strings of the palette colors, most populous first.
    pub fn hex(&self) -> impl Iterator<Item = String> + '_ {
        self.colors.iter().map(|c| hex(&c.color))
    }
}

fn hex(color: &Rgb<u8>) -> String {
    format!("#{:02X}{:02X}{:02X}", color[0], color[1], color[2])
}

fn is_boring_pixel(pixel: &Rgba<u8>) -> bool {
    let (r, g, b, a) = (pixel[0], pixel[1], pixel[2], pixel[3]);

    // If pixel is mostly opaque and not white
    const MIN_ALPHA: u8 = 125;
    const MAX_COLOR: u8 = 250;

    let interesting = (a >= MIN_ALPHA) && !(r > MAX_COLOR && g > MAX_COLOR && b > MAX_COLOR);

    !interesting
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.colors.iter().map(ToString::to_string).join("\n"))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex(&self.color))?;

        #[cfg(feature = "print-truecolor")]
        {
            let rgb = self.color.0;
            write!(
                f,
                " {}███{}",
                color::Fg(color::Rgb(rgb[0], rgb[1], rgb[2])),
                color::Fg(color::Reset)
            )?;
        }

        Ok(())
    }
}
