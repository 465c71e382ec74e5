use std::error;
use std::fmt;
use std::ops::Range;

use image::ImageError;

/// Errors when extracting a palette from an image
#[derive(Debug)]
pub enum Error {
    /// The image could not be opened or decoded
    Decode(ImageError),
    /// Requested color count was out of bounds
    ColorCountOutOfBounds(usize, Range<usize>),
    /// Quality was out of bounds
    QualityOutOfBounds(u32, Range<u32>),
    /// Every pixel was filtered out before quantization
    NoVisiblePixels,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Decode(err) => write!(f, "failed to decode image: {}", err),
            Error::ColorCountOutOfBounds(count, range) => write!(
                f,
                "color count {} is out of bounds, expected a value in {}..{}",
                count, range.start, range.end
            ),
            Error::QualityOutOfBounds(quality, range) => write!(
                f,
                "quality {} is out of bounds, expected a value in {}..{}",
                quality, range.start, range.end
            ),
            Error::NoVisiblePixels => write!(
                f,
                "no pixels left to quantize after filtering transparent and near-white pixels"
            ),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Decode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ImageError> for Error {
    fn from(err: ImageError) -> Self {
        Error::Decode(err)
    }
}
